//! # koyomi-civil
//!
//! Civil (proleptic Gregorian) date type and arithmetic.
//!
//! A [`CivilDate`] identifies a calendar day by its year/month/day triple,
//! with no time-of-day or timezone component. Dates convert to and from a
//! continuous day number, which gives day arithmetic and weekday lookup
//! across month and year boundaries.
//!
//! ## Quick Start
//!
//! ```ignore
//! use koyomi_civil::{CivilDate, Weekday, civil_sequence};
//!
//! let date = CivilDate::new(2024, 2, 1)?;
//! assert_eq!(date.weekday(), Weekday::Thursday);
//! assert_eq!(date.to_string(), "2024-02-01");
//!
//! // Roll back to the preceding Sunday and emit six weeks of days.
//! let start = date.add_days(-(date.weekday().index() as i64));
//! let days = civil_sequence(start, 42);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Civil date with day-number conversions |
//! | `weekday` | Day-of-week enum |
//! | `sequence` | Consecutive date sequence generation |
//! | `clock` | JST wall-clock read for the boundary layer |
//! | `error` | Error types |

mod clock;
mod date;
mod error;
mod sequence;
mod weekday;

pub use clock::today_jst;
pub use date::CivilDate;
pub use error::CivilError;
pub use sequence::civil_sequence;
pub use weekday::Weekday;
