use rutherford_scholarship::{
    eligibility::{catalog::ELECTIVE_COURSES, CourseGrade},
    evaluate, AwardTier, CourseGrades, IneligibleReason, Verdict,
};

fn grades(entries: &[(&str, u32)]) -> CourseGrades {
    entries.iter().map(|(course, grade)| (*course, *grade)).collect()
}

fn selected_grades(verdict: &Verdict) -> Vec<u32> {
    verdict.selected().iter().map(|course| course.grade).collect()
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
fn two_required_courses_alone_are_not_enough() {
    let verdict = evaluate(&grades(&[("English 30-1", 85), ("Social Studies 30-1", 80)]));

    assert_eq!(verdict.reason(), Some(IneligibleReason::InsufficientCourses));
    assert_eq!(verdict.average(), None);
    assert!(!verdict.is_eligible());
}

#[test]
fn sciences_without_language_are_ineligible() {
    let verdict = evaluate(&grades(&[
        ("Biology 30", 90),
        ("Chemistry 30", 90),
        ("Mathematics 30-1", 90),
    ]));

    assert_eq!(verdict.reason(), Some(IneligibleReason::NoLanguageCourse));
}

#[test]
fn best_language_course_counts() {
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
fn missing_language_wins_over_every_other_grade() {
    let mut all_electives = CourseGrades::new();
    for course in ELECTIVE_COURSES {
        all_electives.insert(course, Some(100));
    }
    all_electives.insert("Social Studies 30-1", Some(100));

    assert_eq!(evaluate(&all_electives).reason(), Some(IneligibleReason::NoLanguageCourse));
}

#[test]
fn only_top_three_electives_matter() {
    let base = grades(&[
        ("French 30-1", 82),
        ("Social Studies 30-2", 78),
        ("Physics 30", 90),
        ("Drama 30", 85),
        ("Music 30", 80),
        ("Dance 30", 60),
    ]);
    let changed = base.clone().with("Dance 30", 79);

    assert_eq!(evaluate(&base), evaluate(&changed));
    assert_eq!(evaluate(&base).average(), Some(83.0));
}

#[test]
fn missing_grades_and_unknown_courses_are_ignored() {
    let entries = [
        "English 30-1=88",
        "Social Studies 30-1=80",
        "Biology 30=-",
        "Underwater Basketry=100",
        "Chemistry 30=76",
        "Mathematics 31=71",
        "Art 30=70",
    ];
    let parsed: CourseGrades = entries
        .iter()
        .map(|entry| CourseGrade::parse(entry).unwrap())
        .collect();

    let verdict = evaluate(&parsed);
    assert_eq!(selected_grades(&verdict), vec![88, 80, 76, 71, 70]);
    assert_eq!(verdict.average(), Some(77.0));
    assert_eq!(verdict.tier(), AwardTier::Reduced);
}

#[test]
fn tier_boundaries() {
    assert_eq!(AwardTier::for_average(80.0), AwardTier::Top);
    assert_eq!(AwardTier::for_average(79.99), AwardTier::Reduced);
    assert_eq!(AwardTier::for_average(75.0), AwardTier::Reduced);
    assert_eq!(AwardTier::for_average(74.99), AwardTier::None);

    let exactly_75 = grades(&[
        ("English 30-1", 75),
        ("Social Studies 30-1", 75),
        ("Biology 30", 75),
        ("Chemistry 30", 75),
        ("Physics 30", 75),
    ]);
    assert_eq!(evaluate(&exactly_75).tier(), AwardTier::Reduced);

    let just_under = exactly_75.with("Physics 30", 74);
    let verdict = evaluate(&just_under);
    assert_eq!(verdict.average(), Some(74.8));
    assert_eq!(verdict.reason(), Some(IneligibleReason::AverageBelowThreshold));
}
