use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::element_id::ElementId;
use crate::theme::StyleValue;

/// A single, stateless page mutation.
///
/// The engine emits a `Vec<UiCommand>` for every event it handles. Hosts
/// apply the list in order; each command carries everything it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum UiCommand {
    /// Add a class to the element's class list.
    AddClass {
        target: ElementId,
        class: Cow<'static, str>,
    },

    /// Remove a class from the element's class list.
    RemoveClass {
        target: ElementId,
        class: Cow<'static, str>,
    },

    /// Set (or clear) one inline style property.
    SetStyle {
        target: ElementId,
        property: StyleProperty,
        value: StyleValue,
    },

    /// Set an attribute, e.g. an image `src`.
    SetAttribute {
        target: ElementId,
        name: Cow<'static, str>,
        value: String,
    },

    /// Replace the element's text content.
    SetText { target: ElementId, text: String },

    /// Enable or disable a form control.
    SetDisabled { target: ElementId, disabled: bool },

    /// Reset every control of a form to its initial value.
    ResetForm { target: ElementId },

    /// Scroll the document to an absolute vertical offset.
    ScrollTo { top: f64, behavior: ScrollBehavior },

    /// Ask the host to write `text` to the clipboard. The host reports the
    /// outcome back to the engine, tagged with `source`.
    CopyToClipboard { source: ElementId, text: String },
}

impl UiCommand {
    pub fn add_class(target: &ElementId, class: &'static str) -> Self {
        Self::AddClass {
            target: target.clone(),
            class: Cow::Borrowed(class),
        }
    }

    pub fn remove_class(target: &ElementId, class: &'static str) -> Self {
        Self::RemoveClass {
            target: target.clone(),
            class: Cow::Borrowed(class),
        }
    }

    pub fn set_style(target: &ElementId, property: StyleProperty, value: StyleValue) -> Self {
        Self::SetStyle {
            target: target.clone(),
            property,
            value,
        }
    }

    pub fn set_text(target: &ElementId, text: impl Into<String>) -> Self {
        Self::SetText {
            target: target.clone(),
            text: text.into(),
        }
    }

    /// The element this command mutates, if it targets one.
    pub fn target(&self) -> Option<&ElementId> {
        match self {
            Self::AddClass { target, .. }
            | Self::RemoveClass { target, .. }
            | Self::SetStyle { target, .. }
            | Self::SetAttribute { target, .. }
            | Self::SetText { target, .. }
            | Self::SetDisabled { target, .. }
            | Self::ResetForm { target } => Some(target),
            Self::CopyToClipboard { source, .. } => Some(source),
            Self::ScrollTo { .. } => None,
        }
    }
}

/// Inline style properties the engine writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleProperty {
    Opacity,
    Transform,
    Transition,
    Width,
    Background,
    BoxShadow,
    AnimationDelay,
    Cursor,
}

impl StyleProperty {
    /// The CSS property name.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::Transform => "transform",
            Self::Transition => "transition",
            Self::Width => "width",
            Self::Background => "background",
            Self::BoxShadow => "box-shadow",
            Self::AnimationDelay => "animation-delay",
            Self::Cursor => "cursor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}
