use std::borrow::Cow;

use folio_protocol::{ElementId, UiCommand};

const LAZY_CLASS: &str = "lazy";

/// Swap the deferred source in and drop the placeholder marker.
pub fn load(id: &ElementId, deferred_src: &str) -> Vec<UiCommand> {
    vec![
        UiCommand::SetAttribute {
            target: id.clone(),
            name: Cow::Borrowed("src"),
            value: deferred_src.to_string(),
        },
        UiCommand::remove_class(id, LAZY_CLASS),
    ]
}
