//! Holidays command: list a year's national holidays.

use anyhow::Result;
use tracing::{info, info_span};

use koyomi_civil::today_jst;
use koyomi_holidays::holidays_for_year;

use crate::cli::HolidaysArgs;

/// Print every holiday of the requested year in chronological order.
pub fn run(args: HolidaysArgs) -> Result<()> {
    let _cmd = info_span!("holidays").entered();
    let year = args.year.unwrap_or_else(|| today_jst().year());
    let holidays = holidays_for_year(year);
    info!(year, n_holidays = holidays.len(), "holidays computed");

    for holiday in &holidays {
        println!("{}  {}", holiday.date, holiday.name);
    }
    Ok(())
}
