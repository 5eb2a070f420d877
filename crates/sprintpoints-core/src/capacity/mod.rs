//! Sprint capacity calculation.
//!
//! [`CapacityCalculator`] derives per-platform capacity and story points from
//! shared [`SprintParameters`] and a [`PlatformInput`] per platform, then sums
//! them into a [`SprintSummary`]. It is generic over the platform key and owns
//! no state beyond its story-point rate.

mod calculator;
mod model;

pub use calculator::CapacityCalculator;
pub use model::{
    PlatformInput, PlatformResult, SprintParameters, SprintSummary, DEFAULT_BUSINESS_DAYS,
    DEFAULT_POINTS_PER_ENGINEER,
};
