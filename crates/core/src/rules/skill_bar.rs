use folio_protocol::{ElementId, StyleProperty, StyleValue, UiCommand};

/// Collapse the bar so the reveal has somewhere to grow from.
pub fn collapsed(id: &ElementId) -> UiCommand {
    UiCommand::set_style(id, StyleProperty::Width, StyleValue::Percent(0))
}

/// Grow the bar to its target level.
pub fn revealed(id: &ElementId, target_level: u8) -> UiCommand {
    UiCommand::set_style(
        id,
        StyleProperty::Width,
        StyleValue::Percent(target_level.min(100)),
    )
}
