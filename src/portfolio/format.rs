const HEADER_BASE: &str = "fixed w-full z-10 transition-all duration-300";

/// Inline style for the filled part of a skill bar. `level` is a percentage.
pub fn skill_width_style(level: u8) -> String {
    format!("width: {level}%")
}

pub fn level_label(level: u8) -> String {
    format!("{level}%")
}

pub fn header_class(scrolled: bool) -> String {
    let chrome = if scrolled {
        "bg-black/90 shadow-lg"
    } else {
        "bg-transparent"
    };
    format!("{HEADER_BASE} {chrome}")
}

pub fn tab_button_class(active: bool) -> &'static str {
    if active {
        "flex items-center px-4 py-2 rounded-full transition-all bg-blue-600 text-white shadow-lg scale-105"
    } else {
        "flex items-center px-4 py-2 rounded-full transition-all bg-gray-200 text-gray-700 hover:bg-gray-300 hover:shadow"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
}

impl Metric {
    pub const fn new(icon: &'static str, title: &'static str, value: &'static str) -> Self {
        Self { icon, title, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_bar() {
        assert_eq!(skill_width_style(0), "width: 0%");
        assert_eq!(skill_width_style(85), "width: 85%");
        assert_eq!(level_label(100), "100%");
    }

    #[test]
    fn test_header_chrome() {
        assert!(header_class(true).contains("bg-black/90"));
        assert!(header_class(false).ends_with("bg-transparent"));
        assert!(header_class(false).starts_with(HEADER_BASE));
    }

    #[test]
    fn test_tab_button_class() {
        assert!(tab_button_class(true).contains("bg-blue-600"));
        assert!(!tab_button_class(false).contains("bg-blue-600"));
    }
}
