use folio_protocol::{ElementId, StyleProperty, StyleToken, StyleValue, UiCommand};

const VISIBLE_CLASS: &str = "visible";

/// Hide `id` and offset it downwards, ready to fade in.
pub fn pending(id: &ElementId) -> Vec<UiCommand> {
    vec![
        UiCommand::set_style(
            id,
            StyleProperty::Opacity,
            StyleValue::Token(StyleToken::FadePendingOpacity),
        ),
        UiCommand::set_style(
            id,
            StyleProperty::Transform,
            StyleValue::Token(StyleToken::FadePendingOffset),
        ),
        UiCommand::set_style(
            id,
            StyleProperty::Transition,
            StyleValue::Token(StyleToken::FadeTransition),
        ),
    ]
}

/// Bring `id` to its resting, visible position.
pub fn shown(id: &ElementId) -> Vec<UiCommand> {
    vec![
        UiCommand::set_style(
            id,
            StyleProperty::Opacity,
            StyleValue::Token(StyleToken::FadeShownOpacity),
        ),
        UiCommand::set_style(
            id,
            StyleProperty::Transform,
            StyleValue::Token(StyleToken::FadeShownOffset),
        ),
        UiCommand::add_class(id, VISIBLE_CLASS),
    ]
}
