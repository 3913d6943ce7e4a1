use serde::{Deserialize, Serialize};

/// Top-level screens of the app, in navigation-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Dashboard,
    Mood,
    Analytics,
    Journal,
    Goals,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Dashboard,
        Tab::Mood,
        Tab::Analytics,
        Tab::Journal,
        Tab::Goals,
        Tab::Settings,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Mood => "mood",
            Tab::Analytics => "analytics",
            Tab::Journal => "journal",
            Tab::Goals => "goals",
            Tab::Settings => "settings",
        }
    }

    /// Label shown under the navigation icon
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Home",
            Tab::Mood => "Mood",
            Tab::Analytics => "Insights",
            Tab::Journal => "Journal",
            Tab::Goals => "Goals",
            Tab::Settings => "Settings",
        }
    }

    pub fn from_id(id: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.id() == id)
    }

    /// Like `from_id`, but anything unknown lands on the dashboard.
    pub fn from_id_or_default(id: &str) -> Tab {
        Tab::from_id(id).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_ids_roundtrip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_id(tab.id()), Some(tab));
        }
    }

    #[test]
    fn test_unknown_tab_falls_back_to_dashboard() {
        assert_eq!(Tab::from_id("profile"), None);
        assert_eq!(Tab::from_id_or_default("profile"), Tab::Dashboard);
        assert_eq!(Tab::from_id_or_default("journal"), Tab::Journal);
    }

    #[test]
    fn test_analytics_is_labelled_insights() {
        assert_eq!(Tab::Analytics.label(), "Insights");
        assert_eq!(Tab::Dashboard.label(), "Home");
    }
}
