//! sloppiness: leniency switches for compiler cache result matching.
//!
//! A cache decides whether two build invocations are equivalent by hashing
//! their inputs. Some of those checks are stricter than a given project
//! needs (include file timestamps, `__DATE__` macros, locale variables).
//! Each relaxation is a [`Sloppy`] flag; the set a user opted into is a
//! [`Sloppiness`] value, packed into one `u32` for storage in cache
//! metadata.
//!
//! Flags can only be turned on. Bit positions are fixed forever, so a
//! bitmask written by one version reads back the same in every other.
//!
//! # Config syntax
//!
//! Flags are named by lowercase words separated by commas or spaces:
//!
//! ```
//! use sloppiness::{parse_sloppiness, Sloppy};
//! let s = parse_sloppiness("time_macros, include_file_mtime");
//! assert!(s.is_enabled(Sloppy::TIME_MACROS));
//! assert_eq!(s.to_bitmask(), 0b101);
//! ```

pub mod sloppy;
pub mod sloppiness;
pub mod parse;
pub mod format;
pub mod config;
pub mod error;

pub use sloppy::*;
pub use sloppiness::*;
pub use parse::*;
pub use format::*;
pub use config::*;
pub use error::*;
