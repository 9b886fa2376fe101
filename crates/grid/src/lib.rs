//! # koyomi-grid
//!
//! Six-week month grid construction with events and holiday flags.
//!
//! [`build_month_grid`] turns a (year, month) pair plus the caller's event
//! list into exactly 42 consecutive [`DayCell`]s, starting on the Sunday
//! on or before the 1st of the month. Each cell carries month-membership,
//! today/selected flags, the events keyed to its date, and the
//! holiday/weekend annotations from `koyomi-holidays`.
//!
//! The caller owns event storage and the clock: "today" and the optional
//! selected date are passed in, never read ambiently.
//!
//! ## Quick Start
//!
//! ```ignore
//! use koyomi_civil::CivilDate;
//! use koyomi_grid::build_month_grid;
//!
//! let today = CivilDate::new(2024, 2, 14)?;
//! let cells = build_month_grid(2024, 1 /* February, 0-based */, &[], None, today)?;
//! assert_eq!(cells.len(), 42);
//! assert_eq!(cells[0].date, CivilDate::new(2024, 1, 28)?);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `event` | Day-scoped event record |
//! | `cell` | Day-cell output record |
//! | `build` | Grid construction |

mod build;
mod cell;
mod event;

pub use build::{CELLS_PER_GRID, build_month_grid};
pub use cell::DayCell;
pub use event::Event;
