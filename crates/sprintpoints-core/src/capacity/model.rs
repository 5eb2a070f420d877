//! Inputs and derived results of the capacity calculation.

use serde::{Deserialize, Serialize};

/// Default sprint length in business days.
pub const DEFAULT_BUSINESS_DAYS: u32 = 10;

/// Nominal story points one engineer delivers in a full sprint.
pub const DEFAULT_POINTS_PER_ENGINEER: u32 = 8;

/// Parameters shared by every platform in a sprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintParameters {
    /// Working days in the sprint, always at least 1
    pub business_days: u32,
    /// Holiday days, applied to every engineer on every platform
    pub holiday_days: u32,
}

impl SprintParameters {
    /// Build parameters, raising `business_days` to 1 if given 0.
    pub fn new(business_days: u32, holiday_days: u32) -> Self {
        Self {
            business_days: business_days.max(1),
            holiday_days,
        }
    }
}

impl Default for SprintParameters {
    fn default() -> Self {
        Self::new(DEFAULT_BUSINESS_DAYS, 0)
    }
}

/// Team inputs for a single platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInput {
    pub engineer_count: u32,
    /// Leave days summed over all of the platform's engineers
    pub leave_days: u32,
}

impl PlatformInput {
    pub fn new(engineer_count: u32, leave_days: u32) -> Self {
        Self {
            engineer_count,
            leave_days,
        }
    }
}

/// Capacity derived for one platform. Never edited directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformResult {
    /// Engineer-days before any deduction
    pub total_capacity: u64,
    /// Engineer-days lost to sprint holidays
    pub holiday_impact: u64,
    /// Engineer-days left after leave and holidays, floored at zero
    pub available_capacity: u64,
    pub story_points: u64,
}

/// Sprint-wide totals over every platform result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintSummary {
    pub total_story_points: u64,
    pub platform_count: usize,
    pub total_capacity: u64,
    pub available_capacity: u64,
}
