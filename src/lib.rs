pub mod eligibility;
pub mod storage;
pub mod report;
pub mod config;
pub mod error;
pub mod utils;

pub use error::{Result, ScholarshipError};
pub use config::Config;
pub use eligibility::{evaluate, AwardTier, CourseGrades, IneligibleReason, Verdict};
