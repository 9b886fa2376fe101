//! Era command: convert a date to Japanese era form.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use koyomi_civil::{CivilDate, today_jst};
use koyomi_era::to_era;

use crate::cli::EraArgs;

/// Convert one date; below the era floor the output stays Gregorian.
pub fn run(args: EraArgs) -> Result<()> {
    let _cmd = info_span!("era").entered();
    let date: CivilDate = args
        .date
        .parse()
        .with_context(|| format!("invalid date: {}", args.date))?;

    match to_era(date, today_jst()) {
        Some(era) => println!("{date}  {}", era.label()),
        None => {
            debug!(%date, "below the era display floor");
            println!("{date}  {}年", date.year());
        }
    }
    Ok(())
}
