use crate::{
    eligibility::Grade,
    storage::{models::StudentRecord, Database},
    error::Result,
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// Course columns of the demo roster, in column order.
pub const DEMO_COURSES: [&str; 6] = [
    "English 30-1",
    "Social Studies 30-1",
    "Biology 30",
    "Mathematics 30-1",
    "Chemistry 30",
    "Art 30",
];

type DemoRow = (&'static str, &'static str, [Option<Grade>; 6]);

const DEMO_ROWS: [DemoRow; 21] = [
    ("Alice", "Grade 10", [Some(90), Some(85), Some(88), Some(91), Some(87), Some(80)]),
    ("Ben", "Grade 10", [Some(82), Some(78), Some(85), Some(89), Some(84), Some(70)]),
    ("Carla", "Grade 9", [Some(85), Some(80), Some(80), Some(80), Some(80), Some(80)]),
    ("Daniel", "Grade 9", [Some(76), Some(75), Some(78), Some(80), Some(82), Some(79)]),
    ("Eliza", "Grade 8", [Some(79), Some(77), Some(75), Some(80), Some(83), Some(76)]),
    ("Farah", "Grade 10", [Some(80), Some(81), Some(78), Some(79), Some(77), Some(80)]),
    ("George", "Grade 10", [Some(90), Some(89), Some(85), Some(88), Some(87), Some(90)]),
    ("Hannah", "Grade 9", [None, Some(85), Some(88), Some(91), Some(87), Some(80)]),
    ("Isaac", "Grade 9", [Some(82), None, Some(85), Some(89), Some(84), Some(70)]),
    ("Jade", "Grade 8", [Some(85), Some(80), None, None, None, None]),
    ("Kevin", "Grade 10", [Some(65), Some(67), Some(68), Some(70), Some(71), Some(72)]),
    ("Lena", "Grade 8", [Some(50), Some(45), Some(60), Some(55), Some(40), Some(65)]),
    ("Milo", "Grade 9", [None, None, Some(80), Some(80), Some(80), Some(80)]),
    ("Nina", "Grade 10", [Some(90), Some(90), None, None, None, None]),
    ("Omar", "Grade 10", [Some(70), Some(70), Some(72), Some(68), Some(65), Some(60)]),
    ("Pia", "Grade 8", [None, None, None, None, None, None]),
    ("Quinn", "Grade 9", [Some(85), None, None, None, None, None]),
    ("Ravi", "Grade 9", [None, Some(85), None, None, None, None]),
    ("Sara", "Grade 10", [Some(74), Some(74), Some(74), Some(74), Some(74), Some(74)]),
    ("Toby", "Grade 10", [Some(80), Some(70), Some(70), Some(70), Some(70), Some(70)]),
    ("Uma", "Grade 10", [Some(70), Some(75), Some(70), Some(75), Some(70), Some(75)]),
];

/// The demo roster of 21 students across grades 8 to 10.
pub fn demo_roster() -> Vec<StudentRecord> {
    DEMO_ROWS
        .iter()
        .map(|(name, grade_level, grades)| {
            DEMO_COURSES
                .iter()
                .zip(grades.iter())
                .fold(StudentRecord::new(*name, *grade_level), |student, (course, grade)| {
                    student.with_grade(*course, *grade)
                })
        })
        .collect()
}

/// Clear the store and load the demo roster. Returns the number of students stored.
pub fn seed_demo_roster(db: &mut Database, show_progress: bool) -> Result<usize> {
    let roster = demo_roster();

    let progress = if show_progress {
        let bar = ProgressBar::new(roster.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    db.reset()?;
    for student in &roster {
        progress.set_message(student.name.clone());
        db.insert_student(student)?;
        progress.inc(1);
    }
    progress.finish_and_clear();

    info!("Seeded {} demo students", roster.len());
    Ok(roster.len())
}
