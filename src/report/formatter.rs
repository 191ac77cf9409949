use crate::{
    config::{AwardsConfig, Config},
    eligibility::{AwardTier, Verdict},
};

/// Turns verdicts into display text. The verdict itself carries no presentation.
#[derive(Debug, Clone, Copy)]
pub struct VerdictFormatter {
    awards: AwardsConfig,
    icons: bool,
}

impl VerdictFormatter {
    pub fn new(awards: AwardsConfig, icons: bool) -> Self {
        Self { awards, icons }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.awards, config.display.icons)
    }

    /// Same award amounts, no emoji. Used for file exports.
    pub fn plain(&self) -> Self {
        Self {
            icons: false,
            ..*self
        }
    }

    pub fn award_amount(&self, tier: AwardTier) -> Option<u32> {
        match tier {
            AwardTier::Top => Some(self.awards.top_amount),
            AwardTier::Reduced => Some(self.awards.reduced_amount),
            AwardTier::None => None,
        }
    }

    pub fn currency(amount: u32) -> String {
        format!("${}", amount)
    }

    fn status(&self, eligible: bool) -> &'static str {
        match (eligible, self.icons) {
            (true, true) => "✅ Eligible",
            (true, false) => "Eligible",
            (false, true) => "❌ Ineligible",
            (false, false) => "Ineligible",
        }
    }

    /// One-line summary, e.g. `✅ Eligible for $2500 - Average: 88.20`.
    pub fn summary_line(&self, verdict: &Verdict) -> String {
        match verdict {
            Verdict::Ineligible { reason } => format!("{} - {}", self.status(false), reason),
            Verdict::Scored(card) => match self.award_amount(card.tier) {
                Some(amount) => format!(
                    "{} for {} - Average: {:.2}",
                    self.status(true),
                    Self::currency(amount),
                    card.average
                ),
                None => format!("{} - Average: {:.2}", self.status(false), card.average),
            },
        }
    }

    pub fn not_found_line(&self) -> String {
        if self.icons {
            "❌ Not found in database".to_string()
        } else {
            "Not found in database".to_string()
        }
    }

    /// Selected courses as `Course (grade)` pairs joined by commas.
    pub fn selected_courses(&self, verdict: &Verdict) -> String {
        verdict
            .selected()
            .iter()
            .map(|course| format!("{} ({})", course.course, course.grade))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for VerdictFormatter {
    fn default() -> Self {
        Self::new(AwardsConfig::default(), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::{evaluate, CourseGrades, IneligibleReason};

    fn student(grades: [u32; 5]) -> Verdict {
        let courses = [
            "English 30-1",
            "Social Studies 30-1",
            "Biology 30",
            "Chemistry 30",
            "Physics 30",
        ];
        let grades: CourseGrades = courses.into_iter().zip(grades).collect();
        evaluate(&grades)
    }

    #[test]
    fn formats_each_outcome() {
        let fmt = VerdictFormatter::default();
        assert_eq!(
            fmt.summary_line(&student([90, 85, 91, 88, 87])),
            "✅ Eligible for $2500 - Average: 88.20"
        );
        assert_eq!(
            fmt.summary_line(&student([95, 75, 74, 74, 74])),
            "✅ Eligible for $1500 - Average: 78.40"
        );
        assert_eq!(
            fmt.summary_line(&student([74, 74, 74, 74, 74])),
            "❌ Ineligible - Average: 74.00"
        );
        assert_eq!(
            fmt.summary_line(&Verdict::Ineligible {
                reason: IneligibleReason::InsufficientCourses
            }),
            "❌ Ineligible - Fewer than five eligible courses"
        );
    }

    #[test]
    fn plain_formatter_drops_icons_and_keeps_amounts() {
        let fmt = VerdictFormatter::new(
            AwardsConfig {
                top_amount: 3000,
                reduced_amount: 1000,
            },
            true,
        )
        .plain();
        assert_eq!(
            fmt.summary_line(&student([80, 80, 80, 80, 80])),
            "Eligible for $3000 - Average: 80.00"
        );
        assert_eq!(fmt.not_found_line(), "Not found in database");
    }

    #[test]
    fn lists_selected_courses() {
        let fmt = VerdictFormatter::default();
        let text = fmt.selected_courses(&student([80, 81, 82, 83, 84]));
        assert!(text.starts_with("English 30-1 (80), Social Studies 30-1 (81), Physics 30 (84)"));
    }
}
