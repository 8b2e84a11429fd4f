use folio_protocol::{ElementId, UiCommand};
use serde::{Deserialize, Serialize};

const ACTIVE_CLASS: &str = "active";

/// A navigation anchor as found in the markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub anchor: ElementId,
    /// The anchor's `href`, e.g. `#about`.
    pub href: String,
}

impl NavLink {
    pub fn new(anchor: impl Into<ElementId>, href: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
            href: href.into(),
        }
    }

    /// The in-page fragment this link targets, if it is an in-page link.
    pub fn fragment(&self) -> Option<&str> {
        self.href.strip_prefix('#').filter(|f| !f.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq)]
struct NavEntry {
    section: ElementId,
    anchor: ElementId,
}

/// Ordered section → anchor mapping with at most one active entry.
#[derive(Debug, Clone, Default)]
pub struct NavRegistry {
    entries: Vec<NavEntry>,
    /// Every in-page anchor, including ones whose section is unknown.
    anchors: Vec<ElementId>,
    active: Option<usize>,
}

impl NavRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a link. Off-page links are ignored; for a section linked more
    /// than once, the first anchor is the one that gets highlighted.
    pub fn insert(&mut self, link: &NavLink) {
        let Some(fragment) = link.fragment() else {
            return;
        };
        if !self.anchors.contains(&link.anchor) {
            self.anchors.push(link.anchor.clone());
        }
        if self.entries.iter().any(|e| e.section == *fragment) {
            return;
        }
        self.entries.push(NavEntry {
            section: ElementId::from(fragment),
            anchor: link.anchor.clone(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_section(&self, section: &str) -> bool {
        self.entries.iter().any(|e| e.section == *section)
    }

    pub fn active_section(&self) -> Option<&ElementId> {
        self.active.map(|i| &self.entries[i].section)
    }

    pub fn active_anchor(&self) -> Option<&ElementId> {
        self.active.map(|i| &self.entries[i].anchor)
    }

    /// Make `section` current: every anchor is deactivated first, then the
    /// matching one (if any) is activated.
    pub fn activate(&mut self, section: &str) -> Vec<UiCommand> {
        let mut commands: Vec<UiCommand> = self
            .anchors
            .iter()
            .map(|a| UiCommand::remove_class(a, ACTIVE_CLASS))
            .collect();

        self.active = self.entries.iter().position(|e| e.section == *section);
        if let Some(i) = self.active {
            commands.push(UiCommand::add_class(&self.entries[i].anchor, ACTIVE_CLASS));
        }
        commands
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.anchors.clear();
        self.active = None;
    }
}
