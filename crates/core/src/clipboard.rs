use std::borrow::Cow;
use std::collections::HashMap;

use folio_protocol::{ElementId, StyleProperty, StyleToken, StyleValue, UiCommand};

const SEPARATOR: &str = ": ";
const COPIED: &str = "Copied!";
const COPY_HINT: &str = "Click to copy";

/// Split a contact line `Label: value` into its label and copyable value.
///
/// Only the segment right after the first separator is the value, and an
/// empty value means there is nothing to copy.
pub fn split_contact_line(text: &str) -> Option<(&str, &str)> {
    let mut parts = text.split(SEPARATOR);
    let label = parts.next()?;
    let value = parts.next().filter(|v| !v.is_empty())?;
    Some((label, value))
}

/// Mark an element as click-to-copy.
pub fn affordance(id: &ElementId) -> Vec<UiCommand> {
    vec![
        UiCommand::set_style(
            id,
            StyleProperty::Cursor,
            StyleValue::Token(StyleToken::CopyableCursor),
        ),
        UiCommand::SetAttribute {
            target: id.clone(),
            name: Cow::Borrowed("title"),
            value: COPY_HINT.to_string(),
        },
    ]
}

/// Tracks copy requests between "please copy" and the host's answer, and
/// the original text while the "Copied!" confirmation is on screen.
#[derive(Debug, Clone, Default)]
pub struct CopyTracker {
    /// Source → original text, for requests the host has not answered.
    awaiting: HashMap<ElementId, String>,
}

impl CopyTracker {
    /// Start a copy of the value in `text`. Returns the clipboard request,
    /// or `None` when the line has no value.
    pub fn request(&mut self, source: &ElementId, text: &str) -> Option<UiCommand> {
        let (_, value) = split_contact_line(text)?;
        let command = UiCommand::CopyToClipboard {
            source: source.clone(),
            text: value.to_string(),
        };
        self.awaiting.insert(source.clone(), text.to_string());
        Some(command)
    }

    /// The host finished the copy. Returns the original text and the
    /// confirmation text to show, or `None` if nothing was awaited.
    pub fn confirm(&mut self, source: &str) -> Option<(String, String)> {
        let original = self.awaiting.remove(source)?;
        let label = original.split(SEPARATOR).next().unwrap_or_default();
        let confirmation = format!("{label}{SEPARATOR}{COPIED}");
        Some((original, confirmation))
    }

    /// The host failed the copy; forget the request.
    pub fn abandon(&mut self, source: &str) -> bool {
        self.awaiting.remove(source).is_some()
    }

    pub fn forget(&mut self, source: &str) {
        self.awaiting.remove(source);
    }

    pub fn clear(&mut self) {
        self.awaiting.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_label_and_value() {
        assert_eq!(
            split_contact_line("Email: jo@example.com"),
            Some(("Email", "jo@example.com"))
        );
        assert_eq!(split_contact_line("Email: "), None);
        assert_eq!(split_contact_line("No separator"), None);
        assert_eq!(split_contact_line("Time: 10: 30"), Some(("Time", "10")));
    }

    #[test]
    fn confirm_builds_copied_label() {
        let mut tracker = CopyTracker::default();
        let id = ElementId::from("contact-email");
        let request = tracker.request(&id, "Email: jo@example.com");
        assert_eq!(
            request,
            Some(UiCommand::CopyToClipboard {
                source: id.clone(),
                text: "jo@example.com".into(),
            })
        );

        let (original, shown) = tracker.confirm("contact-email").unwrap_or_default();
        assert_eq!(original, "Email: jo@example.com");
        assert_eq!(shown, "Email: Copied!");
        assert!(tracker.confirm("contact-email").is_none());
    }

    #[test]
    fn lines_without_value_request_nothing() {
        let mut tracker = CopyTracker::default();
        assert!(tracker.request(&"x".into(), "Location").is_none());
        assert!(!tracker.abandon("x"));
    }
}
