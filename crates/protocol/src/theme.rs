use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Semantic style tokens resolved to concrete CSS by the host.
///
/// The engine decides *which* look an element should have; the palette
/// behind each token lives here so every host renders the page the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleToken {
    // Navigation bar
    NavBackgroundFlat,
    NavBackgroundElevated,
    NavShadowFlat,
    NavShadowElevated,

    // Fade-in sections
    FadePendingOpacity,
    FadeShownOpacity,
    FadePendingOffset,
    FadeShownOffset,
    FadeTransition,

    // Contact section
    SubmitSuccessBackground,
    CopyableCursor,
}

impl StyleToken {
    /// Default CSS value for this token.
    pub fn css(self) -> &'static str {
        match self {
            Self::NavBackgroundFlat => "rgba(255, 255, 255, 0.95)",
            Self::NavBackgroundElevated => "rgba(255, 255, 255, 0.98)",
            Self::NavShadowFlat => "none",
            Self::NavShadowElevated => "0 4px 20px rgba(0, 0, 0, 0.1)",
            Self::FadePendingOpacity => "0",
            Self::FadeShownOpacity => "1",
            Self::FadePendingOffset => "translateY(30px)",
            Self::FadeShownOffset => "translateY(0)",
            Self::FadeTransition => "opacity 0.6s ease, transform 0.6s ease",
            Self::SubmitSuccessBackground => "linear-gradient(135deg, #10b981 0%, #059669 100%)",
            Self::CopyableCursor => "pointer",
        }
    }
}

/// Value carried by a style mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleValue {
    Token(StyleToken),
    /// A percentage, e.g. a skill bar width.
    Percent(u8),
    /// A duration in milliseconds, e.g. an animation delay.
    Millis(u64),
    /// Remove the inline value so the stylesheet applies again.
    Clear,
}

impl StyleValue {
    pub fn to_css(&self) -> Cow<'static, str> {
        match self {
            Self::Token(token) => Cow::Borrowed(token.css()),
            Self::Percent(p) => Cow::Owned(format!("{p}%")),
            Self::Millis(ms) => Cow::Owned(format!("{ms}ms")),
            Self::Clear => Cow::Borrowed(""),
        }
    }
}
