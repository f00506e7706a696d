//! CLI handlers for `studyplan availability` subcommands.

use anyhow::Result;

use studyplan_core::{Availability, SystemClock, WeekKey};
use studyplan_store::AvailabilityStore;

use crate::config::StudyplanConfig;
use crate::{AvailabilityCommands, week_for};

/// Dispatch an `AvailabilityCommands` variant to the appropriate handler.
pub fn run_availability_command(
    command: AvailabilityCommands,
    config: &StudyplanConfig,
) -> Result<()> {
    let store = AvailabilityStore::open(&config.store);
    match command {
        AvailabilityCommands::Show { week } => {
            let week = week_for(week, &SystemClock);
            let (availability, stored) = match store.get(week)? {
                Some(a) => (a, true),
                None => (store.effective(week)?, false),
            };
            print!("{}", render_week(week, &availability));
            if !stored {
                println!();
                println!(
                    "Not saved yet: these are the default hours. Run `studyplan availability reset --week {week}` to keep them."
                );
            }
            Ok(())
        }
        AvailabilityCommands::Set { day, hours, week } => {
            let week = week_for(week, &SystemClock);
            let updated = store.set_hours(week, day, hours)?;
            println!(
                "{} of week {} set to {}h (week total {}h).",
                day,
                week,
                format_hours(updated.hours(day)),
                format_hours(updated.total_hours())
            );
            Ok(())
        }
        AvailabilityCommands::Reset { week } => {
            let week = week_for(week, &SystemClock);
            let availability = store.reset_week(week)?;
            print!("{}", render_week(week, &availability));
            Ok(())
        }
        AvailabilityCommands::CopyPrevious { week } => {
            let week = week_for(week, &SystemClock);
            let from = store.copy_previous(week)?;
            println!("Copied week {from} into week {week}.");
            Ok(())
        }
    }
}

/// One line per day plus the weekly total.
fn render_week(week: WeekKey, availability: &Availability) -> String {
    let mut out = format!("Week of {week}\n");
    for (day, date) in week.dates() {
        out.push_str(&format!(
            "  {day} {}  {:>5}h\n",
            date.format("%b %d"),
            format_hours(availability.hours(day))
        ));
    }
    out.push_str(&format!(
        "  Total      {:>5}h\n",
        format_hours(availability.total_hours())
    ));
    out
}

/// Hours without a trailing `.0` for whole values.
fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{hours:.0}")
    } else {
        format!("{hours:.2}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
