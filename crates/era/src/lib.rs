//! # koyomi-era
//!
//! Japanese era (gengō) conversion for Gregorian dates.
//!
//! Converts a civil date into an era name plus era-relative year against a
//! fixed Meiji-onward interval table. Conversion is gated by a rolling
//! 100-year floor computed from an injected "now" date; dates below the
//! floor convert to `None` so callers fall back to Gregorian display.
//!
//! ## Quick Start
//!
//! ```ignore
//! use koyomi_civil::CivilDate;
//! use koyomi_era::{can_navigate_back_to, to_era};
//!
//! let now = CivilDate::new(2025, 8, 1)?;
//! let date = CivilDate::new(2020, 1, 1)?;
//! let era = to_era(date, now).unwrap();
//! assert_eq!(era.name, "令和");
//! assert_eq!(era.year, 2);
//! assert_eq!(era.label(), "令和2年");
//!
//! assert!(can_navigate_back_to(CivilDate::new(1925, 1, 1)?, now));
//! assert!(!can_navigate_back_to(CivilDate::new(1924, 12, 1)?, now));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `table` | Fixed era interval table, Meiji onward |
//! | `convert` | Era lookup and the rolling validity floor |

mod convert;
mod table;

pub use convert::{EraDate, can_navigate_back_to, to_era};
