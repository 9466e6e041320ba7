//! Tailwind class composition for the shared presentational components.

const BUTTON_BASE: &str = "inline-flex items-center justify-center rounded-md font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2";
const CARD_BASE: &str = "rounded-xl border border-gray-200 bg-white";
const BADGE_BASE: &str = "inline-flex items-center rounded-full px-3 py-1 text-xs font-medium";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn classes(&self) -> &'static str {
        match self {
            Self::Default => "bg-blue-600 text-white hover:bg-blue-700 focus:ring-blue-600",
            Self::Outline => {
                "border border-gray-300 text-gray-900 hover:bg-gray-50 focus:ring-gray-300"
            }
            Self::Ghost => "text-gray-700 hover:bg-gray-100 focus:ring-gray-300",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Md,
    Lg,
    Icon,
}

impl ButtonSize {
    fn classes(&self) -> &'static str {
        match self {
            Self::Md => "h-10 px-4 text-sm",
            Self::Lg => "h-11 px-6 text-base",
            Self::Icon => "h-10 w-10 p-0",
        }
    }
}

fn join(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Base, size, variant, then caller classes, so later utilities win.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    join(&[BUTTON_BASE, size.classes(), variant.classes(), extra])
}

pub fn card_class(extra: &str) -> String {
    join(&[CARD_BASE, extra])
}

pub fn badge_class(extra: &str) -> String {
    join(&[BADGE_BASE, extra])
}

/// Navigation item classes, highlighted when `active`.
pub fn nav_item_class(active: bool) -> &'static str {
    if active {
        "text-sm font-medium transition-all duration-200 text-blue-600"
    } else {
        "text-sm font-medium transition-all duration-200 text-gray-600 hover:text-gray-900"
    }
}

/// Direction an element slides in from when it is first revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealFrom {
    #[default]
    Below,
    Left,
    Right,
}

impl RevealFrom {
    fn hidden_transform(&self) -> &'static str {
        match self {
            Self::Below => "translate(0px, 30px)",
            Self::Left => "translate(-30px, 0px)",
            Self::Right => "translate(30px, 0px)",
        }
    }
}

/// Inline style for a reveal-on-view wrapper.
pub fn reveal_style(revealed: bool, from: RevealFrom, delay_ms: u32) -> String {
    let (opacity, transform) = if revealed {
        ("1", "translate(0px, 0px)")
    } else {
        ("0", from.hidden_transform())
    };
    format!(
        "opacity: {opacity}; transform: {transform}; transition: opacity 600ms ease-out {delay_ms}ms, transform 600ms ease-out {delay_ms}ms"
    )
}

/// Skill bar fill: empty until revealed, then grows to `level` percent.
/// Bars are staggered by 100ms per position.
pub fn skill_bar_style(level: u8, revealed: bool, index: usize) -> String {
    let width = if revealed { level.min(100) } else { 0 };
    format!(
        "width: {width}%; transition: width 1000ms ease-out {}ms",
        index * 100
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class_order() {
        let class = button_class(ButtonVariant::Outline, ButtonSize::Lg, "px-8 rounded-xl");
        let base = class.find("inline-flex").unwrap();
        let size = class.find("h-11").unwrap();
        let variant = class.find("border-gray-300").unwrap();
        let extra = class.find("px-8").unwrap();
        assert!(base < size && size < variant && variant < extra);
    }

    #[test]
    fn test_defaults_and_blank_extra() {
        let class = button_class(ButtonVariant::default(), ButtonSize::default(), "  ");
        assert!(class.contains("bg-blue-600"));
        assert!(class.contains("h-10 px-4"));
        assert!(!class.ends_with(' '));
        assert_eq!(card_class(""), CARD_BASE);
        assert_eq!(card_class("p-12"), format!("{CARD_BASE} p-12"));
    }

    #[test]
    fn test_nav_item_highlight() {
        assert!(nav_item_class(true).contains("text-blue-600"));
        assert!(!nav_item_class(false).contains("text-blue-600"));
        assert!(badge_class("bg-blue-100").ends_with("bg-blue-100"));
    }

    #[test]
    fn test_reveal_style() {
        let hidden = reveal_style(false, RevealFrom::Left, 50);
        assert!(hidden.starts_with("opacity: 0; transform: translate(-30px, 0px)"));
        assert!(hidden.contains("ease-out 50ms"));
        let shown = reveal_style(true, RevealFrom::Left, 50);
        assert!(shown.starts_with("opacity: 1; transform: translate(0px, 0px)"));
    }

    #[test]
    fn test_skill_bar_style() {
        assert_eq!(
            skill_bar_style(92, false, 0),
            "width: 0%; transition: width 1000ms ease-out 0ms"
        );
        assert_eq!(
            skill_bar_style(92, true, 3),
            "width: 92%; transition: width 1000ms ease-out 300ms"
        );
        assert!(skill_bar_style(250, true, 0).starts_with("width: 100%"));
    }
}
