//! Capacity-to-story-points calculation.
//!
//! Every operation here is a pure function of its arguments. Nothing is
//! cached between calls, so recomputing after each edit or once after a batch
//! of edits gives the same answer.

use std::hash::Hash;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::model::{
    PlatformInput, PlatformResult, SprintParameters, SprintSummary, DEFAULT_POINTS_PER_ENGINEER,
};

/// Turns team capacity into story points.
///
/// Story points for a platform are `round(available / business_days * rate)`
/// where `rate` is the nominal number of points one engineer delivers in a
/// full sprint (8 unless configured otherwise).
///
/// Rounding is round-half-up on the exact quotient, applied once at the end.
/// The quotient is never negative, so this is the same as rounding half away
/// from zero: a quotient of 2.5 becomes 3.
///
/// # Preconditions
///
/// `params.business_days` must be at least 1. Callers clamp inputs before they
/// get here (see [`crate::form`]). Debug builds assert the precondition;
/// release builds treat 0 as 1 instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityCalculator {
    points_per_engineer: u32,
}

impl Default for CapacityCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl CapacityCalculator {
    /// Create a calculator using the nominal rate of 8 points per engineer.
    pub fn new() -> Self {
        Self {
            points_per_engineer: DEFAULT_POINTS_PER_ENGINEER,
        }
    }

    /// Create a calculator with a custom per-engineer sprint rate.
    pub fn with_rate(points_per_engineer: u32) -> Self {
        Self {
            points_per_engineer,
        }
    }

    pub fn points_per_engineer(&self) -> u32 {
        self.points_per_engineer
    }

    /// Compute capacity and story points for a single platform.
    pub fn compute_platform_result(
        &self,
        input: &PlatformInput,
        params: &SprintParameters,
    ) -> PlatformResult {
        debug_assert!(params.business_days >= 1, "business_days must be at least 1");
        let business_days = u64::from(params.business_days.max(1));
        let engineers = u64::from(input.engineer_count);

        let total_capacity = engineers * business_days;
        let holiday_impact = engineers * u64::from(params.holiday_days);
        let available_capacity = total_capacity
            .saturating_sub(u64::from(input.leave_days))
            .saturating_sub(holiday_impact);

        let story_points = round_half_up(
            u128::from(available_capacity) * u128::from(self.points_per_engineer),
            u128::from(business_days),
        );

        PlatformResult {
            total_capacity,
            holiday_impact,
            available_capacity,
            story_points,
        }
    }

    /// Fold per-platform results into sprint totals.
    pub fn compute_summary<K>(&self, results: &IndexMap<K, PlatformResult>) -> SprintSummary {
        results
            .values()
            .fold(SprintSummary::default(), |mut summary, result| {
                summary.total_story_points =
                    summary.total_story_points.saturating_add(result.story_points);
                summary.total_capacity =
                    summary.total_capacity.saturating_add(result.total_capacity);
                summary.available_capacity = summary
                    .available_capacity
                    .saturating_add(result.available_capacity);
                summary.platform_count += 1;
                summary
            })
    }

    /// Recompute every platform independently, then summarize.
    ///
    /// Results keep the key order of `inputs`.
    pub fn recompute_all<K>(
        &self,
        inputs: &IndexMap<K, PlatformInput>,
        params: &SprintParameters,
    ) -> (IndexMap<K, PlatformResult>, SprintSummary)
    where
        K: Hash + Eq + Clone,
    {
        let results: IndexMap<K, PlatformResult> = inputs
            .iter()
            .map(|(key, input)| (key.clone(), self.compute_platform_result(input, params)))
            .collect();
        let summary = self.compute_summary(&results);

        tracing::debug!(
            platforms = summary.platform_count,
            business_days = params.business_days,
            holiday_days = params.holiday_days,
            total_story_points = summary.total_story_points,
            "recomputed sprint capacity"
        );

        (results, summary)
    }
}

/// `round(numerator / denominator)` with halves rounded up, in exact integers.
fn round_half_up(numerator: u128, denominator: u128) -> u64 {
    let rounded = (2 * numerator + denominator) / (2 * denominator);
    u64::try_from(rounded).unwrap_or(u64::MAX)
}
