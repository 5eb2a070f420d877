//! In-memory sprint form.
//!
//! [`SprintForm`] holds what a user is currently editing: sprint parameters
//! and one [`PlatformInput`] per platform. Raw text from the user is cleaned
//! up here before it reaches the calculator, and every mutation recomputes
//! the results before returning, so a read after an edit is never stale.
//!
//! Input hygiene follows a forgiving integer-prefix parse:
//! - leading whitespace and a single sign are accepted, then decimal digits
//!   up to the first non-digit (`"12abc"` is 12, `"3.9"` is 3);
//! - empty or non-numeric text becomes the field minimum;
//! - negative numbers become the field minimum (0, or 1 for business days);
//! - numbers past `u32::MAX` saturate.
//!
//! Clamping never produces an error. Only edits naming an unknown platform or
//! field are rejected.

use std::str::FromStr;

use indexmap::IndexMap;

use crate::capacity::{
    CapacityCalculator, PlatformInput, PlatformResult, SprintParameters, SprintSummary,
};
use crate::error::ValidationError;
use crate::storage::Config;

/// Smallest accepted sprint length.
pub const MIN_BUSINESS_DAYS: u32 = 1;

/// Parse user text into a clamped whole number.
pub fn parse_clamped(raw: &str, min: u32) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: Vec<u8> = unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .collect();
    if digits.is_empty() || negative {
        return min;
    }

    let value = digits.iter().fold(0u32, |acc, digit| {
        acc.saturating_mul(10).saturating_add(u32::from(digit - b'0'))
    });
    let clamped = value.max(min);
    if clamped.to_string() != raw {
        tracing::trace!(raw, clamped, "normalized form input");
    }
    clamped
}

/// Editable per-platform inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformField {
    Engineers,
    LeaveDays,
}

impl FromStr for PlatformField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "engineers" | "engineer_count" => Ok(PlatformField::Engineers),
            "leave_days" | "leave" => Ok(PlatformField::LeaveDays),
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }
}

/// Split `PATH=RAW` or `PATH RAW` into its two halves.
pub fn split_edit(edit: &str) -> Result<(&str, &str), ValidationError> {
    let edit = edit.trim();
    let at = edit
        .find(|c: char| c == '=' || c.is_whitespace())
        .ok_or_else(|| ValidationError::MalformedEdit(edit.to_string()))?;
    let path = &edit[..at];
    if path.is_empty() {
        return Err(ValidationError::MalformedEdit(edit.to_string()));
    }
    // `PATH = RAW` separates on the space, so drop the stray `=` too.
    let raw = edit[at..].trim_start();
    let raw = raw.strip_prefix('=').unwrap_or(raw);
    Ok((path, raw.trim()))
}

/// Current form state plus the results derived from it.
#[derive(Debug, Clone)]
pub struct SprintForm {
    calculator: CapacityCalculator,
    initial_params: SprintParameters,
    initial_inputs: IndexMap<String, PlatformInput>,
    params: SprintParameters,
    inputs: IndexMap<String, PlatformInput>,
    results: IndexMap<String, PlatformResult>,
    summary: SprintSummary,
}

impl SprintForm {
    /// Build a form and compute its first results.
    ///
    /// The given parameters and inputs are also what [`SprintForm::reset`]
    /// returns to.
    pub fn new(
        calculator: CapacityCalculator,
        params: SprintParameters,
        inputs: IndexMap<String, PlatformInput>,
    ) -> Result<Self, ValidationError> {
        if inputs.is_empty() {
            return Err(ValidationError::EmptyPlatformSet);
        }
        let params = SprintParameters::new(params.business_days, params.holiday_days);
        let (results, summary) = calculator.recompute_all(&inputs, &params);
        Ok(Self {
            calculator,
            initial_params: params,
            initial_inputs: inputs.clone(),
            params,
            inputs,
            results,
            summary,
        })
    }

    /// Build a form from the configured defaults.
    pub fn from_config(config: &Config) -> Result<Self, ValidationError> {
        Self::new(
            config.calculator(),
            config.parameters(),
            config.platform_inputs(),
        )
    }

    pub fn calculator(&self) -> &CapacityCalculator {
        &self.calculator
    }

    pub fn parameters(&self) -> &SprintParameters {
        &self.params
    }

    pub fn inputs(&self) -> &IndexMap<String, PlatformInput> {
        &self.inputs
    }

    pub fn input(&self, key: &str) -> Option<&PlatformInput> {
        self.inputs.get(key)
    }

    pub fn results(&self) -> &IndexMap<String, PlatformResult> {
        &self.results
    }

    pub fn result(&self, key: &str) -> Option<&PlatformResult> {
        self.results.get(key)
    }

    pub fn summary(&self) -> &SprintSummary {
        &self.summary
    }

    /// Set the sprint length. Returns the value actually stored.
    pub fn set_business_days(&mut self, raw: &str) -> u32 {
        let value = parse_clamped(raw, MIN_BUSINESS_DAYS);
        self.params.business_days = value;
        self.recompute();
        value
    }

    /// Set the holiday days shared by all platforms. Returns the value stored.
    pub fn set_holiday_days(&mut self, raw: &str) -> u32 {
        let value = parse_clamped(raw, 0);
        self.params.holiday_days = value;
        self.recompute();
        value
    }

    /// Update one platform's field. Returns the value stored.
    pub fn update_platform(
        &mut self,
        key: &str,
        field: PlatformField,
        raw: &str,
    ) -> Result<u32, ValidationError> {
        let input = self
            .inputs
            .get_mut(key)
            .ok_or_else(|| ValidationError::UnknownPlatform(key.to_string()))?;
        let value = parse_clamped(raw, 0);
        match field {
            PlatformField::Engineers => input.engineer_count = value,
            PlatformField::LeaveDays => input.leave_days = value,
        }
        self.recompute();
        Ok(value)
    }

    /// Apply an edit addressed by path.
    ///
    /// Paths are `sprint.business_days`, `sprint.holiday_days`,
    /// `<platform>.engineers` and `<platform>.leave_days`. Field names never
    /// contain a dot, so a platform key may (`team.web.engineers`).
    pub fn apply_edit(&mut self, path: &str, raw: &str) -> Result<u32, ValidationError> {
        if let Some(field) = path.strip_prefix("sprint.") {
            return match field {
                "business_days" => Ok(self.set_business_days(raw)),
                "holiday_days" | "holidays" => Ok(self.set_holiday_days(raw)),
                other => Err(ValidationError::UnknownField(other.to_string())),
            };
        }

        let (scope, field) = path
            .rsplit_once('.')
            .ok_or_else(|| ValidationError::MalformedEdit(path.to_string()))?;
        if !self.inputs.contains_key(scope) {
            return Err(ValidationError::UnknownPlatform(scope.to_string()));
        }
        let field = field.parse::<PlatformField>()?;
        self.update_platform(scope, field, raw)
    }

    /// Go back to the values the form was created with.
    pub fn reset(&mut self) {
        self.params = self.initial_params;
        self.inputs = self.initial_inputs.clone();
        self.recompute();
    }

    fn recompute(&mut self) {
        let (results, summary) = self.calculator.recompute_all(&self.inputs, &self.params);
        self.results = results;
        self.summary = summary;
    }
}
