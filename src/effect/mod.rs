//! Effect system for side-effecting monads.
//!
//! This module provides effectful monads: values whose construction performs
//! a side effect exactly once and whose iteration replays the captured
//! result.
//!
//! - [`Action`]: the capability any side effect implements
//! - [`IO`]: builds effectful monads and effectful bind steps
//! - [`PrintAction`]: writes a formatted line (rendered as `PrintM`)
//! - [`FnAction`]: adapts a closure into an [`Action`]
//! - [`FormatConfig`] and [`Template`]: explicit rendering configuration
//!
//! # Examples
//!
//! ```rust
//! use seqmonad::effect::{FormatConfig, IO, PrintAction};
//! use seqmonad::typeclass::ListM;
//!
//! let print = PrintAction::with_writer(&FormatConfig::new("value {0}"), Vec::<u8>::new()).unwrap();
//! let step = IO::step(print, []).unwrap();
//!
//! let printed = ListM::new(0..2).bind(step);
//! printed.run(); // writes "value 0" and "value 1"
//! assert_eq!(printed.to_vec(), vec![0, 1]);
//! ```

mod config;
mod error;
mod io;
mod print;
mod template;

pub use config::{DEFAULT_TEMPLATE, FormatConfig};
pub use error::EffectError;
pub use io::{Action, FnAction, IO};
pub use print::PrintAction;
pub use template::{Template, TemplateError};
