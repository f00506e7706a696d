//! CLI handlers for `studyplan course` subcommands.

use anyhow::Result;

use studyplan_core::{Course, CourseId};
use studyplan_store::{CourseStore, NewCourse};

use crate::config::StudyplanConfig;
use crate::{CourseCommands, clock_for};

/// Dispatch a `CourseCommands` variant to the appropriate handler.
pub fn run_course_command(command: CourseCommands, config: &StudyplanConfig) -> Result<()> {
    let store = CourseStore::open(&config.store);
    match command {
        CourseCommands::Add {
            name,
            exam_date,
            difficulty,
            weight,
        } => {
            let course = store.add(NewCourse::new(name, exam_date, difficulty, weight))?;
            println!("Added {} ({})", course.name, course.id);
            Ok(())
        }
        CourseCommands::List => cmd_list(&store),
        CourseCommands::Remove { id } => cmd_remove(&store, id),
        CourseCommands::Clear => {
            store.clear()?;
            println!("All courses removed.");
            Ok(())
        }
        CourseCommands::Sample { today } => {
            let courses = store.load_sample(clock_for(today).today())?;
            println!("Loaded {} sample courses.", courses.len());
            print!("{}", render_courses(&courses));
            Ok(())
        }
    }
}

fn cmd_list(store: &CourseStore) -> Result<()> {
    let courses = store.list_by_exam_date()?;
    if courses.is_empty() {
        println!("No courses yet. Use `studyplan course add` to add one.");
        return Ok(());
    }
    print!("{}", render_courses(&courses));
    Ok(())
}

fn cmd_remove(store: &CourseStore, id: CourseId) -> Result<()> {
    let removed = store.remove(id)?;
    println!("Removed {} ({})", removed.name, removed.id);
    Ok(())
}

/// Tabulate courses in the given order.
fn render_courses(courses: &[Course]) -> String {
    let name_w = courses
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut out = format!(
        "{:<36}  {:<name_w$}  {:<10}  {:>4}  {:>6}\n",
        "ID", "NAME", "EXAM", "DIFF", "WEIGHT"
    );
    for c in courses {
        out.push_str(&format!(
            "{:<36}  {:<name_w$}  {:<10}  {:>4}  {:>6}\n",
            c.id.to_string(),
            c.name,
            c.exam_date.format("%Y-%m-%d").to_string(),
            c.difficulty,
            c.weight
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyplan_test_utils::date;

    #[test]
    fn render_courses_aligns_columns() {
        let courses = vec![
            Course::new("Databases", date("2026-11-01"), 3, 3),
            Course::new("AI", date("2026-11-05"), 5, 4),
        ];
        let out = render_courses(&courses);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].contains("Databases  2026-11-01"));
        assert!(lines[2].contains("AI         2026-11-05"));
    }
}
