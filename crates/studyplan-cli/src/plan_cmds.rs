//! CLI handlers for `studyplan plan` subcommands.
//!
//! Implements:
//! - `studyplan plan generate` -- build and store the plan for a week
//! - `studyplan plan show`     -- print the stored plan
//! - `studyplan plan clear`    -- remove the stored plan
//! - `studyplan plan explain`  -- show how courses are prioritized

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use studyplan_core::{
    CourseExplanation, CourseSource, GenerateError, PlanGenerator, PlanPolicy, WeeklyPlan,
    dropped_remainder, explain_courses, to_sessions,
};
use studyplan_store::{AvailabilityStore, CourseStore, PlanStore};

use crate::config::StudyplanConfig;
use crate::{PlanCommands, clock_for, week_for};

/// How many courses `plan explain` lists.
const EXPLAIN_LIMIT: usize = 5;

/// Width of the score bar in `plan explain`.
const BAR_WIDTH: u32 = 20;

// -----------------------------------------------------------------------
// Public entry point
// -----------------------------------------------------------------------

/// Dispatch a `PlanCommands` variant to the appropriate handler.
pub fn run_plan_command(command: PlanCommands, config: &StudyplanConfig) -> Result<()> {
    match command {
        PlanCommands::Generate { week, today } => cmd_generate(config, week, today),
        PlanCommands::Show { json } => cmd_show(config, json),
        PlanCommands::Clear => cmd_clear(config),
        PlanCommands::Explain { today } => cmd_explain(config, today),
    }
}

// -----------------------------------------------------------------------
// studyplan plan generate
// -----------------------------------------------------------------------

fn cmd_generate(
    config: &StudyplanConfig,
    week: Option<NaiveDate>,
    today: Option<NaiveDate>,
) -> Result<()> {
    let courses = CourseStore::open(&config.store);
    let availability = AvailabilityStore::open(&config.store);
    let mut plans = PlanStore::open(&config.store);
    let generator = PlanGenerator::new(config.policy.clone());
    let clock = clock_for(today);
    let week = week_for(week, clock.as_ref());

    match generator.generate(&courses, &availability, &mut plans, clock.as_ref(), week) {
        Ok(plan) => {
            println!("Plan generated.");
            println!();
            print!("{}", render_plan(&plan, generator.policy()));
            Ok(())
        }
        Err(e) if e.is_precondition() => {
            info!(%week, reason = %e, "plan generation refused");
            let hint = precondition_hint(&e);
            Err(anyhow::Error::new(e)).context(format!("plan not generated ({hint})"))
        }
        Err(e) => Err(e.into()),
    }
}

/// What the user can do about a refused generation.
fn precondition_hint(err: &GenerateError) -> &'static str {
    match err {
        GenerateError::NoCourses => "add courses with `studyplan course add` first",
        GenerateError::MissingAvailability { .. } => {
            "set hours with `studyplan availability set` or `studyplan availability reset`"
        }
        GenerateError::NoStudyTime { .. } => "every day of that week has 0 hours",
        GenerateError::Source(_) | GenerateError::Sink(_) => "storage error",
    }
}

// -----------------------------------------------------------------------
// studyplan plan show / clear
// -----------------------------------------------------------------------

fn cmd_show(config: &StudyplanConfig, json: bool) -> Result<()> {
    let plans = PlanStore::open(&config.store);
    let Some(plan) = plans.load()? else {
        println!("No plan generated yet. Run `studyplan plan generate`.");
        return Ok(());
    };

    if json {
        let out = serde_json::to_string_pretty(&plan).context("failed to serialize plan")?;
        println!("{out}");
    } else {
        print!("{}", render_plan(&plan, &config.policy));
    }
    Ok(())
}

fn cmd_clear(config: &StudyplanConfig) -> Result<()> {
    let mut plans = PlanStore::open(&config.store);
    PlanGenerator::new(config.policy.clone()).clear(&mut plans)?;
    println!("Plan cleared.");
    Ok(())
}

// -----------------------------------------------------------------------
// studyplan plan explain
// -----------------------------------------------------------------------

fn cmd_explain(config: &StudyplanConfig, today: Option<NaiveDate>) -> Result<()> {
    let courses = CourseStore::open(&config.store).courses()?;
    if courses.is_empty() {
        println!("No courses yet. Use `studyplan course add` to add one.");
        return Ok(());
    }
    let today = clock_for(today).today();
    let explanations = explain_courses(&courses, today, &config.policy);
    print!("{}", render_explanations(&explanations));
    Ok(())
}

// -----------------------------------------------------------------------
// Rendering
// -----------------------------------------------------------------------

/// Render a plan day by day with session chips.
///
/// Session chips can add up to less than the course's minutes; the
/// unscheduled remainder is printed alongside so the two never silently
/// disagree.
fn render_plan(plan: &WeeklyPlan, policy: &PlanPolicy) -> String {
    let mut out = format!(
        "Week of {} (scored on {})\n",
        plan.week,
        plan.generated_on.format("%Y-%m-%d")
    );

    for day in &plan.days {
        out.push('\n');
        out.push_str(&format!(
            "{}  {} min\n",
            day.date.format("%a, %b %-d"),
            day.planned_minutes()
        ));

        if day.is_rest_day() {
            out.push_str("  Rest day / no study time set.\n");
            continue;
        }

        let name_w = day
            .items
            .iter()
            .map(|i| i.course_name.chars().count())
            .max()
            .unwrap_or(0);

        for item in &day.items {
            let chips: Vec<String> = to_sessions(item.minutes, policy)
                .iter()
                .map(|m| format!("[{m}]"))
                .collect();
            let mut line = format!(
                "  {:<name_w$}  {:>3} min  {}",
                item.course_name,
                item.minutes,
                chips.join(" ")
            );
            let dropped = dropped_remainder(item.minutes, policy);
            if dropped > 0 {
                line.push_str(&format!("  (+{dropped} min unscheduled)"));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(&format!("Total: {} min\n", plan.total_minutes()));
    out
}

/// Render the "why this plan" breakdown for the top courses.
fn render_explanations(explanations: &[CourseExplanation]) -> String {
    let mut out = String::from("Why this plan?\n");
    out.push_str("  Closer exams, higher difficulty and higher importance earn more time.\n");

    for x in explanations.iter().take(EXPLAIN_LIMIT) {
        out.push('\n');
        out.push_str(&format!(
            "  {}  exam in {} days ({}) · difficulty {}/5 · weight {}/5\n",
            x.name, x.days_until, x.urgency, x.difficulty, x.weight
        ));
        out.push_str(&format!("  {} {:>3}%\n", score_bar(x.percent), x.percent));
    }
    out
}

/// Fixed-width bar; never narrower than 5% so small scores stay visible.
fn score_bar(percent: u32) -> String {
    let filled = (percent.clamp(5, 100) * BAR_WIDTH).div_ceil(100);
    let empty = BAR_WIDTH - filled;
    format!(
        "[{}{}]",
        "#".repeat(filled as usize),
        "-".repeat(empty as usize)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyplan_core::{Availability, DayOfWeek, WeekKey, build_week};
    use studyplan_test_utils::{course_due_in, date, uniform_availability};

    fn scenario_a_plan() -> WeeklyPlan {
        let today = date("2026-10-18");
        let courses = vec![
            course_due_in("A", today, 5, 4, 4),
            course_due_in("B", today, 40, 3, 2),
        ];
        let availability: Availability = uniform_availability(2.0).with(DayOfWeek::Sun, 0.0);
        build_week(
            &courses,
            &availability,
            WeekKey::containing(date("2026-10-19")),
            today,
            &PlanPolicy::default(),
        )
    }

    #[test]
    fn render_plan_shows_sessions_and_rest_days() {
        let out = render_plan(&scenario_a_plan(), &PlanPolicy::default());

        assert!(out.starts_with("Week of 2026-10-19 (scored on 2026-10-18)\n"));
        assert!(out.contains("Mon, Oct 19  115 min\n"), "{out}");
        assert!(
            out.contains("  A  115 min  [50] [50]  (+15 min unscheduled)\n"),
            "{out}"
        );
        assert!(out.contains("Sun, Oct 25  0 min\n  Rest day / no study time set.\n"));
        assert!(out.ends_with("Total: 690 min\n"), "{out}");
    }

    #[test]
    fn render_plan_omits_remainder_note_when_sessions_cover_minutes() {
        let mut plan = scenario_a_plan();
        plan.days[0].items[0].minutes = 120;
        let out = render_plan(&plan, &PlanPolicy::default());
        assert!(out.contains("  A  120 min  [50] [50] [20]\n"), "{out}");
    }

    #[test]
    fn precondition_hints_point_at_commands() {
        assert!(precondition_hint(&GenerateError::NoCourses).contains("course add"));
        let week = WeekKey::containing(date("2026-10-19"));
        assert!(
            precondition_hint(&GenerateError::MissingAvailability { week })
                .contains("availability set")
        );
    }

    #[test]
    fn score_bar_has_fixed_width_and_floor() {
        assert_eq!(score_bar(100), format!("[{}]", "#".repeat(20)));
        assert_eq!(score_bar(50), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
        // 0% still shows one cell.
        assert_eq!(score_bar(0), format!("[#{}]", "-".repeat(19)));
    }

    #[test]
    fn render_explanations_limits_to_top_five() {
        let today = date("2026-10-18");
        let courses: Vec<_> = (1..=7)
            .map(|i| course_due_in(&format!("C{i}"), today, i * 3, 3, 3))
            .collect();
        let explanations = explain_courses(&courses, today, &PlanPolicy::default());
        let out = render_explanations(&explanations);

        assert!(out.starts_with("Why this plan?\n"));
        assert!(out.contains("  C1  exam in 3 days (very soon)"));
        assert!(out.contains("C5"));
        assert!(!out.contains("C6"));
        assert!(out.contains("100%"));
    }
}
