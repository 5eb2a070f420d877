//! # sprintpoints Core Library
//!
//! This library turns team capacity into sprint story points. The CLI binary
//! is a thin presentation layer over the same core library.
//!
//! ## Architecture
//!
//! - **Capacity**: a pure calculator from sprint parameters and per-platform
//!   team inputs to capacity and story points, plus sprint totals
//! - **Form**: the editable in-memory state that clamps raw input and
//!   recomputes after every change
//! - **Platforms**: built-in delivery platforms with display metadata
//! - **Storage**: TOML-based configuration of defaults
//! - **Report**: table and JSON rendering of a computed sprint
//!
//! ## Key Components
//!
//! - [`CapacityCalculator`]: Story-point calculation
//! - [`SprintForm`]: Current inputs and their derived results
//! - [`Config`]: Application configuration management
//! - [`SprintReport`]: Display snapshot of a sprint

pub mod capacity;
pub mod error;
pub mod form;
pub mod platform;
pub mod report;
pub mod storage;

pub use capacity::{
    CapacityCalculator, PlatformInput, PlatformResult, SprintParameters, SprintSummary,
};
pub use error::{ConfigError, CoreError, ValidationError};
pub use form::{parse_clamped, split_edit, PlatformField, SprintForm};
pub use platform::{builtin_platforms, PlatformProfile};
pub use report::{PlatformReport, SprintReport};
pub use storage::{Config, OutputFormat};
