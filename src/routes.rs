//! Route resolver: pure lookup from a navigational path to display metadata.
//!
//! Icons are a closed registry (an enum) rather than a runtime lookup into an
//! icon library by string name, so every identifier that can appear in a
//! persisted snapshot is known at build time.

use serde::{Deserialize, Serialize};

/// Closed set of icon identifiers the tab strip can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabIcon {
    Home,
    Person,
    Phone,
    Vehicle,
    Calendar,
    Alarm,
    Staff,
    #[default]
    Document,
}

/// Display title for a path.
///
/// Section listings resolve to the section name; detail paths get a
/// `Section #id` placeholder that the underlying screen typically replaces
/// once its record loads.
pub fn title_for(path: &str) -> String {
    let mut segments = path.trim_matches('/').split('/').filter(|s| !s.is_empty());
    let section = segments.next();
    let detail = segments.next();

    let base = match section {
        None => return "Dashboard".to_string(),
        Some("people") => "People",
        Some("phones") => "Phones",
        Some("vehicles") => "Vehicles",
        Some("follow-ups") => "Follow-ups",
        Some("alarms") => "Alarms",
        Some("personnel") => "Personnel",
        Some(other) => return humanize(other),
    };

    match detail {
        Some(id) => format!("{base} #{id}"),
        None => base.to_string(),
    }
}

/// Icon identifier for a path.
pub fn icon_for(path: &str) -> TabIcon {
    let section = path
        .trim_matches('/')
        .split('/')
        .find(|s| !s.is_empty());

    match section {
        None => TabIcon::Home,
        Some("people") => TabIcon::Person,
        Some("phones") => TabIcon::Phone,
        Some("vehicles") => TabIcon::Vehicle,
        Some("follow-ups") => TabIcon::Calendar,
        Some("alarms") => TabIcon::Alarm,
        Some("personnel") => TabIcon::Staff,
        Some(_) => TabIcon::Document,
    }
}

/// Fallback title for unregistered sections: `case-files` becomes `Case files`.
fn humanize(segment: &str) -> String {
    let spaced = segment.replace(['-', '_'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}
