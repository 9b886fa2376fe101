//! Month command: render one month's grid with events and holidays.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use koyomi_civil::{CivilDate, today_jst};
use koyomi_era::can_navigate_back_to;
use koyomi_grid::{Event, build_month_grid};

use crate::cli::MonthArgs;
use crate::config::KoyomiConfig;
use crate::render;

/// Run the month rendering pipeline.
pub fn run(args: MonthArgs) -> Result<()> {
    let _cmd = info_span!("month").entered();
    let config = KoyomiConfig::load(&args.config)?;

    let today = today_jst();
    let year = args.year.unwrap_or_else(|| today.year());
    let month = args.month.unwrap_or_else(|| today.month());
    if !(1..=12).contains(&month) {
        bail!("invalid month: {month} (must be 1..=12)");
    }

    let first = CivilDate::new(year, month, 1)?;
    if !can_navigate_back_to(first, today) {
        bail!(
            "{year}-{month:02} lies before the 100-year display floor ({})",
            today.year() - 100
        );
    }

    let events_path = args.events.as_deref().or(config.events.file.as_deref());
    let events = load_events(events_path)?;
    info!(year, month, n_events = events.len(), "building month grid");

    let selected = args
        .selected
        .as_deref()
        .map(|s| s.parse::<CivilDate>())
        .transpose()
        .context("invalid --selected date")?;

    let cells = build_month_grid(year, month - 1, &events, selected, today)?;
    let label = render::month_label(first, args.era || config.display.era, today);
    print!("{}", render::render_month(&label, &cells));
    Ok(())
}

/// Loads the event list from a JSON file; no path means no events.
fn load_events(path: Option<&Path>) -> Result<Vec<Event>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read events file: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("failed to parse events JSON: {}", path.display()))
}
