use serde::Serialize;
use std::fmt;

use super::grades::Grade;

/// Lowest average that earns the top award.
pub const TOP_AWARD_THRESHOLD: f64 = 80.0;

/// Lowest average that earns the reduced award.
pub const REDUCED_AWARD_THRESHOLD: f64 = 75.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardTier {
    None,
    Reduced,
    Top,
}

impl AwardTier {
    /// Both thresholds are inclusive lower bounds.
    pub fn for_average(average: f64) -> Self {
        if average >= TOP_AWARD_THRESHOLD {
            AwardTier::Top
        } else if average >= REDUCED_AWARD_THRESHOLD {
            AwardTier::Reduced
        } else {
            AwardTier::None
        }
    }
}

impl fmt::Display for AwardTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AwardTier::None => write!(f, "None"),
            AwardTier::Reduced => write!(f, "Reduced"),
            AwardTier::Top => write!(f, "Top"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IneligibleReason {
    NoLanguageCourse,
    NoSocialStudiesCourse,
    InsufficientCourses,
    AverageBelowThreshold,
}

impl fmt::Display for IneligibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IneligibleReason::NoLanguageCourse => {
                write!(f, "No qualifying language course (English/French)")
            }
            IneligibleReason::NoSocialStudiesCourse => {
                write!(f, "No qualifying Social Studies course")
            }
            IneligibleReason::InsufficientCourses => {
                write!(f, "Fewer than five eligible courses")
            }
            IneligibleReason::AverageBelowThreshold => {
                write!(f, "Average below {:.0}", REDUCED_AWARD_THRESHOLD)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedCourse {
    pub course: String,
    pub grade: Grade,
}

/// The five counted courses and the result of averaging them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    pub tier: AwardTier,
    /// Rounded to two decimal places.
    pub average: f64,
    /// Language pick, social studies pick, then the three electives, highest first.
    pub selected: Vec<SelectedCourse>,
}

/// Outcome of evaluating one student.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    /// No average could be computed.
    Ineligible { reason: IneligibleReason },
    Scored(Scorecard),
}

impl Verdict {
    pub fn is_eligible(&self) -> bool {
        self.tier() != AwardTier::None
    }

    pub fn tier(&self) -> AwardTier {
        match self {
            Verdict::Ineligible { .. } => AwardTier::None,
            Verdict::Scored(card) => card.tier,
        }
    }

    pub fn average(&self) -> Option<f64> {
        match self {
            Verdict::Ineligible { .. } => None,
            Verdict::Scored(card) => Some(card.average),
        }
    }

    pub fn selected(&self) -> &[SelectedCourse] {
        match self {
            Verdict::Ineligible { .. } => &[],
            Verdict::Scored(card) => &card.selected,
        }
    }

    /// Why the student is ineligible, if they are.
    pub fn reason(&self) -> Option<IneligibleReason> {
        match self {
            Verdict::Ineligible { reason } => Some(*reason),
            Verdict::Scored(card) if card.tier == AwardTier::None => {
                Some(IneligibleReason::AverageBelowThreshold)
            }
            Verdict::Scored(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(AwardTier::for_average(80.00), AwardTier::Top);
        assert_eq!(AwardTier::for_average(79.99), AwardTier::Reduced);
        assert_eq!(AwardTier::for_average(75.00), AwardTier::Reduced);
        assert_eq!(AwardTier::for_average(74.99), AwardTier::None);
        assert_eq!(AwardTier::for_average(100.0), AwardTier::Top);
        assert_eq!(AwardTier::for_average(0.0), AwardTier::None);
    }

    #[test]
    fn low_average_reports_reason_and_average() {
        let verdict = Verdict::Scored(Scorecard {
            tier: AwardTier::None,
            average: 74.0,
            selected: Vec::new(),
        });
        assert!(!verdict.is_eligible());
        assert_eq!(verdict.average(), Some(74.0));
        assert_eq!(verdict.reason(), Some(IneligibleReason::AverageBelowThreshold));
    }

    #[test]
    fn serializes_with_status_tag() {
        let verdict = Verdict::Ineligible {
            reason: IneligibleReason::InsufficientCourses,
        };
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["status"], "ineligible");
        assert_eq!(json["reason"], "insufficient_courses");
    }
}
