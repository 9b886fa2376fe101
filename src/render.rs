use koyomi_civil::CivilDate;
use koyomi_era::to_era;
use koyomi_grid::DayCell;

/// Builds the header label for a month: `令和6年2月` in era form, falling
/// back to Gregorian `2024年2月` when era conversion declines the date.
pub fn month_label(first: CivilDate, use_era: bool, now: CivilDate) -> String {
    if use_era {
        if let Some(era) = to_era(first, now) {
            return format!("{}{}月", era.label(), first.month());
        }
    }
    format!("{}年{}月", first.year(), first.month())
}

/// Renders a 42-cell grid as text: header, weekday row, six week rows,
/// then the month's holidays and any events.
///
/// Day markers: `*` today, `+` selected. Leading/trailing days of the
/// adjacent months are wrapped in parentheses.
pub fn render_month(label: &str, cells: &[DayCell]) -> String {
    let mut out = String::new();
    out.push_str(label);
    out.push('\n');

    for cell in cells.iter().take(7) {
        out.push_str(cell.date.weekday().kanji());
        out.push(' ');
    }
    out.push('\n');

    for week in cells.chunks(7) {
        for cell in week {
            let day = cell.date.day();
            let marked = if cell.is_today {
                format!("{day:>2}*")
            } else if cell.is_selected {
                format!("{day:>2}+")
            } else if cell.is_current_month {
                format!("{day:>2} ")
            } else {
                format!("({day:>2})")
            };
            out.push_str(&marked);
            out.push(' ');
        }
        out.push('\n');
    }

    let holidays: Vec<&DayCell> = cells
        .iter()
        .filter(|c| c.is_current_month && c.is_holiday)
        .collect();
    if !holidays.is_empty() {
        out.push_str("祝日:\n");
        for cell in holidays {
            // is_holiday guarantees the name.
            let name = cell.holiday_name.unwrap_or("");
            out.push_str(&format!("  {} {}\n", cell.date, name));
        }
    }

    let with_events: Vec<&DayCell> = cells.iter().filter(|c| !c.events.is_empty()).collect();
    if !with_events.is_empty() {
        out.push_str("予定:\n");
        for cell in with_events {
            for event in &cell.events {
                let time = if event.start_time.is_empty() {
                    "終日".to_string()
                } else if event.end_time.is_empty() {
                    event.start_time.clone()
                } else {
                    format!("{}-{}", event.start_time, event.end_time)
                };
                out.push_str(&format!("  {} {} {}\n", cell.date, time, event.title));
            }
        }
    }

    out
}
