use crate::{api::Advisory, api::Severity, components::icons::IconKind};

/// Case-insensitive substring match on title or description. An empty term
/// matches everything.
pub fn matches_search(advisory: &Advisory, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    advisory.title.to_lowercase().contains(&needle)
        || advisory.description.to_lowercase().contains(&needle)
}

/// Filters the already-fetched list, keeping its order.
pub fn filter_advisories(advisories: &[Advisory], term: &str) -> Vec<Advisory> {
    advisories
        .iter()
        .filter(|advisory| matches_search(advisory, term))
        .cloned()
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeverityStyle {
    pub icon: IconKind,
    pub icon_class: &'static str,
    pub badge_class: &'static str,
}

pub fn severity_style(severity: Severity) -> SeverityStyle {
    match severity {
        Severity::Critical => SeverityStyle {
            icon: IconKind::AlertTriangle,
            icon_class: "w-6 h-6 text-red-600",
            badge_class: "bg-red-100 text-red-800",
        },
        Severity::High => SeverityStyle {
            icon: IconKind::AlertCircle,
            icon_class: "w-6 h-6 text-orange-500",
            badge_class: "bg-orange-100 text-orange-800",
        },
        Severity::Medium => SeverityStyle {
            icon: IconKind::Shield,
            icon_class: "w-6 h-6 text-yellow-500",
            badge_class: "bg-yellow-100 text-yellow-800",
        },
        Severity::Low => SeverityStyle {
            icon: IconKind::Info,
            icon_class: "w-6 h-6 text-blue-500",
            badge_class: "bg-blue-100 text-blue-800",
        },
    }
}
