//! Shared replay buffer backing every `LazySequence` fork.

use std::cell::RefCell;

/// The state of the one-shot source feeding a replay buffer.
pub(super) enum SourceState<T> {
    /// The source may still produce values.
    Pending(Box<dyn Iterator<Item = T>>),
    /// The source is currently being pulled. Observing this state from a
    /// pull means the source re-entered its own buffer or panicked earlier.
    Producing,
    /// The source returned `None` and has been dropped.
    Exhausted,
}

/// An append-only arena of produced values plus the source that feeds it.
///
/// Forks only ever read `values`; appending happens inside [`ReplayBuffer::get`]
/// while the source is pulled.
pub(super) struct ReplayBuffer<T> {
    values: Vec<T>,
    source: SourceState<T>,
}

impl<T> ReplayBuffer<T> {
    pub(super) fn pending(source: Box<dyn Iterator<Item = T>>) -> Self {
        Self {
            values: Vec::new(),
            source: SourceState::Pending(source),
        }
    }

    pub(super) fn filled(values: Vec<T>) -> Self {
        Self {
            values,
            source: SourceState::Exhausted,
        }
    }

    pub(super) fn len(&self) -> usize {
        self.values.len()
    }

    pub(super) const fn is_exhausted(&self) -> bool {
        matches!(self.source, SourceState::Exhausted)
    }
}

impl<T: Clone> ReplayBuffer<T> {
    /// Returns the value at `index`, pulling the source until it is buffered.
    ///
    /// The `RefCell` borrow is released while the source runs, so a source
    /// that itself reads other replay buffers never conflicts with this one.
    ///
    /// # Panics
    ///
    /// Panics if the source is re-entered or was poisoned by a panic.
    pub(super) fn get(buffer: &RefCell<Self>, index: usize) -> Option<T> {
        loop {
            let mut source = {
                let mut state = buffer.borrow_mut();
                if let Some(value) = state.values.get(index) {
                    return Some(value.clone());
                }
                match std::mem::replace(&mut state.source, SourceState::Producing) {
                    SourceState::Pending(source) => source,
                    SourceState::Exhausted => {
                        state.source = SourceState::Exhausted;
                        return None;
                    }
                    SourceState::Producing => {
                        panic!("LazySequence source has been poisoned or re-entered")
                    }
                }
            };

            let produced = source.next();

            let mut state = buffer.borrow_mut();
            match produced {
                Some(value) => {
                    state.values.push(value);
                    state.source = SourceState::Pending(source);
                    tracing::trace!(buffered = state.values.len(), "replay buffer grew");
                }
                None => {
                    state.source = SourceState::Exhausted;
                    tracing::trace!(buffered = state.values.len(), "replay source exhausted");
                    return None;
                }
            }
        }
    }
}
