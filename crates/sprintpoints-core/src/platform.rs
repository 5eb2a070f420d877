//! Built-in delivery platforms and their display metadata.
//!
//! The calculator only ever sees platform keys. Names, icons and colors live
//! here so the presentation layer can render them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::capacity::PlatformInput;

/// A platform as shown to the user, with the inputs a fresh form starts from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformProfile {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
    #[serde(default)]
    pub engineers: u32,
    #[serde(default)]
    pub leave_days: u32,
}

fn default_accent_color() -> String {
    "#6b7280".into()
}

impl PlatformProfile {
    /// Inputs a freshly opened form starts with for this platform.
    pub fn default_input(&self) -> PlatformInput {
        PlatformInput::new(self.engineers, self.leave_days)
    }
}

/// Returns the built-in platforms in display order.
pub fn builtin_platforms() -> IndexMap<String, PlatformProfile> {
    [web(), android(), ios()]
        .into_iter()
        .map(|(key, profile)| (key.to_string(), profile))
        .collect()
}

/// Find a built-in platform by key.
pub fn find_builtin(key: &str) -> Option<PlatformProfile> {
    builtin_platforms().shift_remove(key)
}

fn web() -> (&'static str, PlatformProfile) {
    (
        "web",
        PlatformProfile {
            name: "Web".to_string(),
            icon: "🌐".to_string(),
            accent_color: "#3b82f6".to_string(),
            engineers: 5,
            leave_days: 0,
        },
    )
}

fn android() -> (&'static str, PlatformProfile) {
    (
        "android",
        PlatformProfile {
            name: "Android".to_string(),
            icon: "🤖".to_string(),
            accent_color: "#22c55e".to_string(),
            engineers: 5,
            leave_days: 0,
        },
    )
}

fn ios() -> (&'static str, PlatformProfile) {
    (
        "ios",
        PlatformProfile {
            name: "iOS".to_string(),
            icon: "📱".to_string(),
            accent_color: "#1f2937".to_string(),
            engineers: 6,
            leave_days: 0,
        },
    )
}
