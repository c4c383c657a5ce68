use std::fmt;

/// The content panels reachable from the hero section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    About,
    Skills,
    Projects,
    Education,
    Contact,
}

impl Tab {
    /// Tabs in the order their buttons appear.
    pub const ALL: [Tab; 5] = [
        Tab::About,
        Tab::Skills,
        Tab::Projects,
        Tab::Education,
        Tab::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Tab::About => "about",
            Tab::Skills => "skills",
            Tab::Projects => "projects",
            Tab::Education => "education",
            Tab::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::About => "About",
            Tab::Skills => "Skills",
            Tab::Projects => "Projects",
            Tab::Education => "Education",
            Tab::Contact => "Contact",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::About => "🛡",
            Tab::Skills => "⌨",
            Tab::Projects => "🖥",
            Tab::Education => "📖",
            Tab::Contact => "✉",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_about() {
        assert_eq!(Tab::default(), Tab::About);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids = Tab::ALL.map(Tab::id).to_vec();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Tab::ALL.len());
    }

    #[test]
    fn test_display_matches_id() {
        assert_eq!(Tab::Projects.to_string(), "projects");
    }
}
