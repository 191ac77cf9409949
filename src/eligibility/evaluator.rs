use tracing::debug;

use super::{
    catalog::{course_group, CourseGroup},
    grades::{CourseGrades, Grade},
    verdict::{AwardTier, IneligibleReason, Scorecard, SelectedCourse, Verdict},
};

/// Number of electives counted toward the average.
pub const ELECTIVES_COUNTED: usize = 3;

/// Number of grades in the average: one language, one social studies, three electives.
pub const COURSES_COUNTED: usize = ELECTIVES_COUNTED + 2;

/// Evaluate one student's grades.
///
/// Only catalog courses with a known grade take part. The highest language
/// course and the highest social studies course are required; the three best
/// elective-pool courses fill the rest. Non-selected language and social
/// studies courses never count as electives.
pub fn evaluate(grades: &CourseGrades) -> Verdict {
    let mut language: Option<SelectedCourse> = None;
    let mut social: Option<SelectedCourse> = None;
    let mut electives: Vec<SelectedCourse> = Vec::new();

    for (course, grade) in grades.known() {
        match course_group(course) {
            Some(CourseGroup::Language) => keep_highest(&mut language, course, grade),
            Some(CourseGroup::SocialStudies) => keep_highest(&mut social, course, grade),
            Some(CourseGroup::Elective) => electives.push(SelectedCourse {
                course: course.to_string(),
                grade,
            }),
            None => debug!("Ignoring course outside catalog: {}", course),
        }
    }

    let Some(language) = language else {
        return Verdict::Ineligible {
            reason: IneligibleReason::NoLanguageCourse,
        };
    };

    let Some(social) = social else {
        return Verdict::Ineligible {
            reason: IneligibleReason::NoSocialStudiesCourse,
        };
    };

    if electives.len() < ELECTIVES_COUNTED {
        debug!(
            "Only {} elective(s) available, {} required",
            electives.len(),
            ELECTIVES_COUNTED
        );
        return Verdict::Ineligible {
            reason: IneligibleReason::InsufficientCourses,
        };
    }

    // Stable sort keeps input order among equal grades.
    electives.sort_by(|a, b| b.grade.cmp(&a.grade));
    electives.truncate(ELECTIVES_COUNTED);

    let mut selected = Vec::with_capacity(COURSES_COUNTED);
    selected.push(language);
    selected.push(social);
    selected.extend(electives);

    // Widened so stored grades outside 0..=100 cannot overflow the sum.
    let total: u64 = selected.iter().map(|course| u64::from(course.grade)).sum();
    let average = total as f64 / COURSES_COUNTED as f64;
    let tier = AwardTier::for_average(average);

    debug!("Average {:.2} over {} courses -> {}", average, COURSES_COUNTED, tier);

    Verdict::Scored(Scorecard {
        tier,
        average: round_to_cents(average),
        selected,
    })
}

fn keep_highest(slot: &mut Option<SelectedCourse>, course: &str, grade: Grade) {
    let replace = match slot {
        Some(current) => grade > current.grade,
        None => true,
    };
    if replace {
        *slot = Some(SelectedCourse {
            course: course.to_string(),
            grade,
        });
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grades(entries: &[(&str, Grade)]) -> CourseGrades {
        entries.iter().map(|(course, grade)| (*course, *grade)).collect()
    }

    fn selected_grades(verdict: &Verdict) -> Vec<Grade> {
        verdict.selected().iter().map(|c| c.grade).collect()
    }

    #[test]
    fn strong_student_gets_top_award() {
        let verdict = evaluate(&grades(&[
            ("English 30-1", 90),
            ("Social Studies 30-1", 85),
            ("Biology 30", 88),
            ("Mathematics 30-1", 91),
            ("Chemistry 30", 87),
            ("Art 30", 80),
        ]));

        assert_eq!(verdict.tier(), AwardTier::Top);
        assert_eq!(verdict.average(), Some(88.2));
        assert_eq!(selected_grades(&verdict), vec![90, 85, 91, 88, 87]);
    }

    #[test]
    fn two_required_courses_alone_are_insufficient() {
        let verdict = evaluate(&grades(&[("English 30-1", 85), ("Social Studies 30-1", 80)]));
        assert_eq!(
            verdict,
            Verdict::Ineligible {
                reason: IneligibleReason::InsufficientCourses
            }
        );
    }

    #[test]
    fn electives_without_language_fail_on_language() {
        let verdict = evaluate(&grades(&[
            ("Biology 30", 90),
            ("Chemistry 30", 90),
            ("Mathematics 30-1", 90),
        ]));
        assert_eq!(verdict.reason(), Some(IneligibleReason::NoLanguageCourse));
        assert_eq!(verdict.average(), None);
    }

    #[test]
    fn best_language_course_is_picked() {
        let verdict = evaluate(&grades(&[
            ("English 30-2", 95),
            ("English 30-1", 70),
            ("Social Studies 30-1", 75),
            ("Biology 30", 74),
            ("Chemistry 30", 74),
            ("Physics 30", 74),
        ]));

        assert_eq!(verdict.tier(), AwardTier::Reduced);
        assert_eq!(verdict.average(), Some(78.4));
        assert_eq!(verdict.selected()[0].course, "English 30-2");
        assert_eq!(selected_grades(&verdict), vec![95, 75, 74, 74, 74]);
    }

    #[test]
    fn unselected_required_courses_are_not_electives() {
        let verdict = evaluate(&grades(&[
            ("English 30-1", 90),
            ("French 30-1", 88),
            ("Social Studies 30-1", 85),
            ("Social Studies 30-2", 84),
            ("Biology 30", 80),
            ("Art 30", 80),
        ]));
        assert_eq!(verdict.reason(), Some(IneligibleReason::InsufficientCourses));
    }

    #[test]
    fn missing_social_studies_is_reported() {
        let verdict = evaluate(&grades(&[
            ("French 30-2", 90),
            ("Biology 30", 90),
            ("Chemistry 30", 90),
            ("Physics 30", 90),
            ("Music 30", 90),
        ]));
        assert_eq!(verdict.reason(), Some(IneligibleReason::NoSocialStudiesCourse));
    }

    #[test]
    fn empty_and_unknown_grades_fail_on_language() {
        assert_eq!(
            evaluate(&CourseGrades::new()).reason(),
            Some(IneligibleReason::NoLanguageCourse)
        );

        let mut absent = CourseGrades::new();
        absent.insert("English 30-1", None);
        absent.insert("Social Studies 30-1", Some(90));
        assert_eq!(
            evaluate(&absent).reason(),
            Some(IneligibleReason::NoLanguageCourse)
        );
    }

    #[test]
    fn absent_grades_are_not_zeros() {
        let mut with_gap = grades(&[
            ("English 30-1", 80),
            ("Social Studies 30-1", 80),
            ("Biology 30", 80),
            ("Chemistry 30", 80),
            ("Art 30", 80),
        ]);
        with_gap.insert("Physics 30", None);

        assert_eq!(evaluate(&with_gap).average(), Some(80.0));
    }

    #[test]
    fn courses_outside_catalog_are_ignored() {
        let base = grades(&[
            ("English 30-1", 76),
            ("Social Studies 30-2", 77),
            ("Biology 30", 75),
            ("Drama 30", 75),
            ("Dance 30", 75),
        ]);
        let mut noisy = base.clone();
        noisy.insert("Computer Science 30", Some(100));
        noisy.insert("english 30-1", Some(100));

        assert_eq!(evaluate(&base), evaluate(&noisy));
        assert_eq!(evaluate(&base).tier(), AwardTier::Reduced);
    }

    #[test]
    fn only_top_three_electives_matter() {
        let mut student = grades(&[
            ("English 30-1", 80),
            ("Social Studies 30-1", 80),
            ("Biology 30", 90),
            ("Chemistry 30", 85),
            ("Physics 30", 82),
            ("Art 30", 60),
        ]);
        let before = evaluate(&student);
        student.insert("Art 30", Some(81));
        assert_eq!(evaluate(&student), before);
    }

    #[test]
    fn elective_ties_keep_input_order() {
        let verdict = evaluate(&grades(&[
            ("English 30-1", 80),
            ("Social Studies 30-1", 80),
            ("Music 30", 70),
            ("Drama 30", 70),
            ("Dance 30", 70),
            ("Art 30", 70),
        ]));
        let electives: Vec<_> = verdict.selected()[2..]
            .iter()
            .map(|c| c.course.as_str())
            .collect();
        assert_eq!(electives, vec!["Music 30", "Drama 30", "Dance 30"]);
    }

    #[test]
    fn low_average_is_reported_with_average() {
        let verdict = evaluate(&grades(&[
            ("English 30-1", 74),
            ("Social Studies 30-1", 74),
            ("Biology 30", 74),
            ("Mathematics 30-1", 74),
            ("Chemistry 30", 74),
            ("Art 30", 74),
        ]));
        assert!(!verdict.is_eligible());
        assert_eq!(verdict.average(), Some(74.0));
        assert_eq!(verdict.reason(), Some(IneligibleReason::AverageBelowThreshold));
    }

    #[test]
    fn exact_thresholds_are_inclusive() {
        let at_top = evaluate(&grades(&[
            ("English 30-1", 80),
            ("Social Studies 30-1", 80),
            ("Biology 30", 80),
            ("Chemistry 30", 80),
            ("Physics 30", 80),
        ]));
        assert_eq!(at_top.tier(), AwardTier::Top);

        let at_reduced = evaluate(&grades(&[
            ("English 30-1", 75),
            ("Social Studies 30-1", 75),
            ("Biology 30", 75),
            ("Chemistry 30", 75),
            ("Physics 30", 75),
        ]));
        assert_eq!(at_reduced.tier(), AwardTier::Reduced);
    }

    #[test]
    fn huge_grades_do_not_overflow_the_total() {
        let verdict = evaluate(&grades(&[
            ("English 30-1", 4_000_000_000),
            ("Social Studies 30-1", 4_000_000_000),
            ("Biology 30", 4_000_000_000),
            ("Chemistry 30", 4_000_000_000),
            ("Physics 30", 4_000_000_000),
        ]));
        assert_eq!(verdict.average(), Some(4_000_000_000.0));
        assert_eq!(verdict.tier(), AwardTier::Top);
    }
}
