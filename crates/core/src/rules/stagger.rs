use folio_protocol::{ElementId, StyleProperty, StyleValue, UiCommand};

/// Give each element an animation delay of `index × step_ms`, so a row of
/// cards animates one after another instead of all at once.
pub fn stagger(ids: &[ElementId], step_ms: u64) -> Vec<UiCommand> {
    ids.iter()
        .enumerate()
        .map(|(i, id)| {
            UiCommand::set_style(
                id,
                StyleProperty::AnimationDelay,
                StyleValue::Millis(i as u64 * step_ms),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_grow_linearly() {
        let ids: Vec<ElementId> = ["a", "b", "c"].into_iter().map(ElementId::from).collect();
        let delays: Vec<String> = stagger(&ids, 150)
            .iter()
            .filter_map(|c| match c {
                UiCommand::SetStyle { value, .. } => Some(value.to_css().into_owned()),
                _ => None,
            })
            .collect();
        assert_eq!(delays, ["0ms", "150ms", "300ms"]);
    }
}
