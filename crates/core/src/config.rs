use std::ops::RangeInclusive;

use folio_protocol::{ElementId, Margins};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::observer::ObserverOptions;

const SUBMIT_DELAY_RANGE: RangeInclusive<u64> = 1000..=2000;
const SUBMIT_REVERT_RANGE: RangeInclusive<u64> = 2000..=3000;

/// Complete engine configuration.
///
/// Every field has a default matching the shipped page, so an empty JSON
/// object (`{}`) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub timing: TimingConfig,
    pub observation: ObservationConfig,
    pub metrics: PageMetrics,
    pub markup: MarkupConfig,
    pub capabilities: Capabilities,
    pub nav_tie_break: NavTieBreak,
}

impl EngineConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.timing;
        if t.scroll_throttle_ms == 0 {
            return Err(ConfigError::ZeroInterval("scroll_throttle_ms"));
        }
        if t.resize_debounce_ms == 0 {
            return Err(ConfigError::ZeroInterval("resize_debounce_ms"));
        }
        for (name, value, range) in [
            ("submit_delay_ms", t.submit_delay_ms, SUBMIT_DELAY_RANGE),
            ("submit_revert_ms", t.submit_revert_ms, SUBMIT_REVERT_RANGE),
        ] {
            if !range.contains(&value) {
                return Err(ConfigError::OutOfRange {
                    name,
                    value,
                    min: *range.start(),
                    max: *range.end(),
                });
            }
        }

        let o = &self.observation;
        for (name, opts) in [
            ("fade", &o.fade),
            ("skill_bar", &o.skill_bar),
            ("lazy_image", &o.lazy_image),
            ("reveal_card", &o.reveal_card),
            ("section", &o.section),
        ] {
            if !(0.0..=1.0).contains(&opts.threshold) {
                return Err(ConfigError::Threshold {
                    name,
                    value: opts.threshold,
                });
            }
        }

        let m = &self.markup;
        for (name, id) in [
            ("navbar", &m.navbar),
            ("nav_menu", &m.nav_menu),
            ("menu_toggle", &m.menu_toggle),
            ("body", &m.body),
            ("document_root", &m.document_root),
            ("contact_form", &m.contact_form),
            ("submit_button", &m.submit_button),
        ] {
            if id.is_empty() {
                return Err(ConfigError::EmptyMarkupId(name));
            }
        }
        Ok(())
    }
}

/// Delays and rate limits, all in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub scroll_throttle_ms: u64,
    pub resize_debounce_ms: u64,
    pub skill_reveal_delay_ms: u64,
    /// Fake "network" latency before a submission counts as sent,
    /// 1000..=2000.
    pub submit_delay_ms: u64,
    /// How long the "sent" state stays up before the form goes idle,
    /// 2000..=3000.
    pub submit_revert_ms: u64,
    pub copy_feedback_ms: u64,
    pub skill_card_stagger_ms: u64,
    pub project_card_stagger_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            scroll_throttle_ms: 16,
            resize_debounce_ms: 250,
            skill_reveal_delay_ms: 300,
            submit_delay_ms: 1000,
            submit_revert_ms: 2000,
            copy_feedback_ms: 1500,
            skill_card_stagger_ms: 100,
            project_card_stagger_ms: 150,
        }
    }
}

/// Observer options per activation channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationConfig {
    pub fade: ObserverOptions,
    pub skill_bar: ObserverOptions,
    pub lazy_image: ObserverOptions,
    pub reveal_card: ObserverOptions,
    pub section: ObserverOptions,
}

impl Default for ObservationConfig {
    fn default() -> Self {
        Self {
            fade: ObserverOptions::new(0.1)
                .with_root_margin(Margins::new(0.0, 0.0, -50.0, 0.0)),
            skill_bar: ObserverOptions::new(0.5),
            lazy_image: ObserverOptions::default(),
            reveal_card: ObserverOptions::default(),
            section: ObserverOptions::new(0.3)
                .with_root_margin(Margins::new(-80.0, 0.0, -80.0, 0.0)),
        }
    }
}

/// Pixel constants of the page layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMetrics {
    /// Scroll offset past which the navbar switches to its elevated look.
    pub navbar_elevation_px: f64,
    /// Viewport width above which the mobile menu cannot stay open.
    pub mobile_breakpoint_px: f64,
    /// Height of the fixed header subtracted from in-page scroll targets.
    pub header_offset_px: f64,
}

impl Default for PageMetrics {
    fn default() -> Self {
        Self {
            navbar_elevation_px: 100.0,
            mobile_breakpoint_px: 768.0,
            header_offset_px: 80.0,
        }
    }
}

/// Ids of the fixed elements the engine writes to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    pub navbar: ElementId,
    pub nav_menu: ElementId,
    pub menu_toggle: ElementId,
    pub body: ElementId,
    pub document_root: ElementId,
    pub contact_form: ElementId,
    pub submit_button: ElementId,
    pub submit_label: String,
    /// Suffix appended to a field name to address its error element,
    /// e.g. `name` + `-error`.
    pub error_suffix: String,
}

impl MarkupConfig {
    pub fn error_element(&self, field_name: &str) -> ElementId {
        ElementId::from(format!("{field_name}{}", self.error_suffix))
    }
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            navbar: "navbar".into(),
            nav_menu: "nav-links".into(),
            menu_toggle: "mobile-menu-toggle".into(),
            body: "body".into(),
            document_root: "html".into(),
            contact_form: "contact-form".into(),
            submit_button: "submit-btn".into(),
            submit_label: "Send Message".into(),
            error_suffix: "-error".into(),
        }
    }
}

/// Optional browser capabilities. A missing one turns its feature off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    pub intersection_observer: bool,
    pub clipboard: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            intersection_observer: true,
            clipboard: true,
        }
    }
}

/// Which section wins when several enter the active band in one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavTieBreak {
    /// Apply entries in delivery order; the last one stays active.
    #[default]
    LastDelivered,
    /// Apply only the entry with the largest visible fraction.
    GreatestRatio,
}
