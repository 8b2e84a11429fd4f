use folio_protocol::{ElementId, StyleProperty, StyleToken, StyleValue, UiCommand};
use serde::{Deserialize, Serialize};

/// The two looks of the fixed navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavbarStyle {
    #[default]
    Flat,
    Elevated,
}

/// Style for a scroll offset. Strictly above the threshold is elevated;
/// there is no hysteresis.
pub fn style_for(scroll_y: f64, elevation_px: f64) -> NavbarStyle {
    if scroll_y > elevation_px {
        NavbarStyle::Elevated
    } else {
        NavbarStyle::Flat
    }
}

pub fn paint(navbar: &ElementId, style: NavbarStyle) -> Vec<UiCommand> {
    let (background, shadow) = match style {
        NavbarStyle::Flat => (StyleToken::NavBackgroundFlat, StyleToken::NavShadowFlat),
        NavbarStyle::Elevated => (
            StyleToken::NavBackgroundElevated,
            StyleToken::NavShadowElevated,
        ),
    };
    vec![
        UiCommand::set_style(
            navbar,
            StyleProperty::Background,
            StyleValue::Token(background),
        ),
        UiCommand::set_style(navbar, StyleProperty::BoxShadow, StyleValue::Token(shadow)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(style_for(0.0, 100.0), NavbarStyle::Flat);
        assert_eq!(style_for(100.0, 100.0), NavbarStyle::Flat);
        assert_eq!(style_for(100.5, 100.0), NavbarStyle::Elevated);
    }

    #[test]
    fn elevated_paint_adds_shadow() {
        let cmds = paint(&"navbar".into(), NavbarStyle::Elevated);
        assert!(cmds.contains(&UiCommand::set_style(
            &"navbar".into(),
            StyleProperty::BoxShadow,
            StyleValue::Token(StyleToken::NavShadowElevated),
        )));
    }
}
