//! # koyomi-holidays
//!
//! Japanese national holiday computation.
//!
//! [`holidays_for_year`] assembles the full holiday set for a year from
//! three rules plus one derived rule:
//!
//! 1. fixed month/day holidays (New Year's Day, Culture Day, ...),
//! 2. Nth-Monday holidays (Coming of Age Day, Marine Day, ...),
//! 3. equinox holidays via a linear astronomical approximation, and
//! 4. substitute holidays (振替休日) on the Monday after any of the above
//!    that falls on a Sunday.
//!
//! Everything is a pure function of the year; the point queries in this
//! crate recompute the year set on demand rather than caching it.
//!
//! ## Quick Start
//!
//! ```ignore
//! use koyomi_civil::CivilDate;
//! use koyomi_holidays::{holidays_for_year, holiday_name, is_red_date};
//!
//! let holidays = holidays_for_year(2024);
//! assert_eq!(holidays[0].name, "元日");
//!
//! let foundation_day = CivilDate::new(2024, 2, 11)?; // a Sunday
//! assert!(is_red_date(foundation_day));
//! assert_eq!(holiday_name(foundation_day.next()), Some("振替休日"));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `fixed` | Fixed month/day holiday table |
//! | `moving` | Nth-Monday and equinox date rules |
//! | `year` | Full-year assembly and the substitute rule |
//! | `query` | Per-date point queries |

mod fixed;
mod moving;
mod query;
mod year;

pub use query::{holiday_name, is_blue_date, is_holiday, is_red_date, is_saturday, is_sunday};
pub use year::{Holiday, SUBSTITUTE_NAME, holidays_for_year};
