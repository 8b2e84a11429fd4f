use std::str::FromStr;

use folio_protocol::ElementId;
use serde::{Deserialize, Serialize};

/// Observation channel. Each channel owns one observer with its own options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Fade,
    SkillBar,
    LazyImage,
    RevealCard,
    Section,
}

impl Channel {
    pub const ALL: [Channel; 5] = [
        Channel::Fade,
        Channel::SkillBar,
        Channel::LazyImage,
        Channel::RevealCard,
        Channel::Section,
    ];

    /// One-shot channels unsubscribe a target on its first activation.
    /// Sections keep reporting so the nav highlight can follow the scroll.
    pub fn is_one_shot(self) -> bool {
        !matches!(self, Channel::Section)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::SkillBar => "skill_bar",
            Self::LazyImage => "lazy_image",
            Self::RevealCard => "reveal_card",
            Self::Section => "section",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown observation channel `{0}`")]
pub struct UnknownChannel(pub String);

impl FromStr for Channel {
    type Err = UnknownChannel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownChannel(s.to_string()))
    }
}

/// What an element does once it becomes visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WatchKind {
    FadeSection,
    SkillBar { target_level: u8 },
    LazyImage { deferred_src: String },
    RevealCard,
    NavTarget,
}

impl WatchKind {
    pub fn channel(&self) -> Channel {
        match self {
            Self::FadeSection => Channel::Fade,
            Self::SkillBar { .. } => Channel::SkillBar,
            Self::LazyImage { .. } => Channel::LazyImage,
            Self::RevealCard => Channel::RevealCard,
            Self::NavTarget => Channel::Section,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationState {
    Pending,
    Activated,
}

/// An engine-tracked element with an activation rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Watchable {
    pub id: ElementId,
    pub kind: WatchKind,
    state: ActivationState,
}

impl Watchable {
    pub fn new(id: ElementId, kind: WatchKind) -> Self {
        Self {
            id,
            kind,
            state: ActivationState::Pending,
        }
    }

    pub fn state(&self) -> ActivationState {
        self.state
    }

    pub fn is_activated(&self) -> bool {
        self.state == ActivationState::Activated
    }

    /// Move to `Activated`. Returns `true` only for the first call on a
    /// one-shot element; the transition is terminal.
    pub fn activate(&mut self) -> bool {
        if !self.kind.channel().is_one_shot() {
            return true;
        }
        match self.state {
            ActivationState::Pending => {
                self.state = ActivationState::Activated;
                true
            }
            ActivationState::Activated => false,
        }
    }
}
