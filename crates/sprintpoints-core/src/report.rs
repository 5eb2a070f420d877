//! Rendering of a computed sprint.
//!
//! [`SprintReport`] is a serializable snapshot of a [`SprintForm`] joined with
//! platform display metadata. It renders as an ASCII table for terminals and
//! serializes to JSON for scripts.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::capacity::{PlatformResult, SprintParameters, SprintSummary};
use crate::form::SprintForm;
use crate::platform::PlatformProfile;

/// One platform's inputs and derived capacity, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformReport {
    pub name: String,
    pub icon: String,
    pub engineers: u32,
    pub leave_days: u32,
    #[serde(flatten)]
    pub result: PlatformResult,
}

/// Snapshot of a whole sprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintReport {
    pub parameters: SprintParameters,
    pub points_per_engineer: u32,
    pub platforms: IndexMap<String, PlatformReport>,
    pub summary: SprintSummary,
}

impl SprintReport {
    /// Capture the form's current state. Platforms without a profile are
    /// labelled by their key.
    pub fn new(form: &SprintForm, profiles: &IndexMap<String, PlatformProfile>) -> Self {
        let platforms = form
            .inputs()
            .iter()
            .map(|(key, input)| {
                let profile = profiles.get(key);
                let report = PlatformReport {
                    name: profile.map_or_else(|| key.clone(), |p| p.name.clone()),
                    icon: profile.map(|p| p.icon.clone()).unwrap_or_default(),
                    engineers: input.engineer_count,
                    leave_days: input.leave_days,
                    result: form.result(key).copied().unwrap_or_default(),
                };
                (key.clone(), report)
            })
            .collect();

        Self {
            parameters: *form.parameters(),
            points_per_engineer: form.calculator().points_per_engineer(),
            platforms,
            summary: *form.summary(),
        }
    }

    /// Render as ASCII table.
    pub fn render_table(&self, show_capacity: bool) -> String {
        let width = if show_capacity { 72 } else { 48 };
        let mut output = String::new();
        output.push_str("\nSprint Story Points\n");
        output.push_str(&"=".repeat(width));
        output.push('\n');
        output.push_str(&format!(
            "Business days: {}   Holiday days: {}   Points per engineer: {}\n\n",
            self.parameters.business_days, self.parameters.holiday_days, self.points_per_engineer
        ));

        output.push_str(&format!("{:<16} {:>9} {:>6}", "Platform", "Engineers", "Leave"));
        if show_capacity {
            output.push_str(&format!(" {:>10} {:>10}", "Capacity", "Available"));
        }
        output.push_str(&format!(" {:>8}\n", "Points"));
        output.push_str(&"-".repeat(width));
        output.push('\n');

        for platform in self.platforms.values() {
            let label = if platform.icon.is_empty() {
                platform.name.clone()
            } else {
                format!("{} {}", platform.icon, platform.name)
            };
            output.push_str(&format!(
                "{:<16} {:>9} {:>6}",
                truncate(&label, 16),
                platform.engineers,
                platform.leave_days
            ));
            if show_capacity {
                output.push_str(&format!(
                    " {:>10} {:>10}",
                    platform.result.total_capacity, platform.result.available_capacity
                ));
            }
            output.push_str(&format!(" {:>8}\n", platform.result.story_points));
        }

        output.push_str(&"-".repeat(width));
        output.push('\n');
        output.push_str(&format!("{:<16} {:>9} {:>6}", "Sprint total", "", ""));
        if show_capacity {
            output.push_str(&format!(
                " {:>10} {:>10}",
                self.summary.total_capacity, self.summary.available_capacity
            ));
        }
        output.push_str(&format!(" {:>8}\n", self.summary.total_story_points));

        output
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Config;

    fn default_report() -> SprintReport {
        let config = Config::default();
        let form = SprintForm::from_config(&config).unwrap();
        SprintReport::new(&form, &config.platforms)
    }

    #[test]
    fn report_carries_names_and_results() {
        let report = default_report();
        let ios = &report.platforms["ios"];
        assert_eq!(ios.name, "iOS");
        assert_eq!(ios.engineers, 6);
        assert_eq!(ios.result.story_points, 48);
        assert_eq!(report.summary.total_story_points, 128);
        assert_eq!(report.points_per_engineer, 8);
    }

    #[test]
    fn unknown_profile_falls_back_to_key() {
        let config = Config::default();
        let form = SprintForm::from_config(&config).unwrap();
        let report = SprintReport::new(&form, &IndexMap::new());
        assert_eq!(report.platforms["web"].name, "web");
        assert_eq!(report.platforms["web"].icon, "");
    }

    #[test]
    fn table_lists_every_platform_and_total() {
        let table = default_report().render_table(true);
        assert!(table.contains("Sprint Story Points"));
        assert!(table.contains("Web"));
        assert!(table.contains("Android"));
        assert!(table.contains("iOS"));
        assert!(table.contains("Available"));
        let total_line = table
            .lines()
            .find(|line| line.starts_with("Sprint total"))
            .unwrap();
        assert!(total_line.trim_end().ends_with("128"));
        assert!(total_line.contains("160"));
    }

    #[test]
    fn table_can_hide_capacity_columns() {
        let table = default_report().render_table(false);
        assert!(!table.contains("Available"));
        assert!(table.contains("Points"));
    }

    #[test]
    fn json_flattens_results() {
        let json = serde_json::to_value(default_report()).unwrap();
        assert_eq!(json["platforms"]["web"]["story_points"], 40);
        assert_eq!(json["platforms"]["web"]["total_capacity"], 50);
        assert_eq!(json["parameters"]["business_days"], 10);
        assert_eq!(json["summary"]["total_story_points"], 128);
    }

    #[test]
    fn truncate_keeps_short_labels() {
        assert_eq!(truncate("Web", 16), "Web");
        assert_eq!(truncate("A very long platform name", 10), "A very ...");
    }
}
