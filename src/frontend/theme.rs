//! Accent palette for the login screen.
//!
//! The screen uses two color accents: blue for the email side of the brand
//! and emerald for the password side. Each token resolves to complete
//! Tailwind class strings so no class name is ever assembled at runtime.

/// A named color variant selecting a predefined visual style for a control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Accent {
    #[default]
    Blue,
    Emerald,
}

impl Accent {
    /// Classes for the small icon beside an input label.
    pub fn label_icon_class(self) -> &'static str {
        match self {
            Accent::Blue => "text-blue-400",
            Accent::Emerald => "text-emerald-400",
        }
    }

    /// Focus ring and border classes applied to the input itself.
    pub fn focus_class(self) -> &'static str {
        match self {
            Accent::Blue => "focus:ring-2 focus:ring-blue-500/50 focus:border-blue-500",
            Accent::Emerald => "focus:ring-2 focus:ring-emerald-500/50 focus:border-emerald-500",
        }
    }

    /// Classes for a feature card's icon badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            Accent::Blue => "bg-blue-900/50 text-blue-400",
            Accent::Emerald => "bg-emerald-900/50 text-emerald-400",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accent_is_blue() {
        assert_eq!(Accent::default(), Accent::Blue);
    }

    #[test]
    fn test_accent_classes_are_fully_resolved() {
        for accent in [Accent::Blue, Accent::Emerald] {
            for class in [
                accent.label_icon_class(),
                accent.focus_class(),
                accent.badge_class(),
            ] {
                assert!(!class.is_empty());
                assert!(!class.contains('$'), "no interpolation placeholders");
            }
        }
    }

    #[test]
    fn test_accent_classes_are_distinct_per_token() {
        assert_ne!(
            Accent::Blue.label_icon_class(),
            Accent::Emerald.label_icon_class()
        );
        assert_ne!(Accent::Blue.focus_class(), Accent::Emerald.focus_class());
        assert_ne!(Accent::Blue.badge_class(), Accent::Emerald.badge_class());
    }
}
