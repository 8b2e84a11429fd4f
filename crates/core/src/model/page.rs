use folio_protocol::ElementId;
use serde::{Deserialize, Serialize};

use super::nav::NavLink;

/// A skill progress bar and the level it animates to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillBar {
    pub id: ElementId,
    /// Percentage, clamped to 100.
    pub target_level: u8,
}

impl SkillBar {
    pub fn new(id: impl Into<ElementId>, target_level: u8) -> Self {
        Self {
            id: id.into(),
            target_level: target_level.min(100),
        }
    }
}

/// An image whose real source is deferred until it scrolls into view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LazyImage {
    pub id: ElementId,
    #[serde(default)]
    pub deferred_src: Option<String>,
}

impl LazyImage {
    pub fn new(id: impl Into<ElementId>, deferred_src: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            deferred_src: Some(deferred_src.into()),
        }
    }
}

/// A top-level section; only sections with an id take part in nav tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub id: Option<ElementId>,
}

impl Section {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self { id: None }
    }
}

/// Everything the engine needs to know about the page markup, enumerated
/// once at load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSpec {
    pub fade_targets: Vec<ElementId>,
    pub skill_bars: Vec<SkillBar>,
    pub lazy_images: Vec<LazyImage>,
    pub skill_cards: Vec<ElementId>,
    pub project_cards: Vec<ElementId>,
    pub sections: Vec<Section>,
    pub nav_links: Vec<NavLink>,
    /// Contact lines of the form `Label: value` that copy on click.
    pub copy_targets: Vec<ElementId>,
}
