//! Headless behavior layer for a single-page portfolio site.
//!
//! The host (a browser bridge or the simulator) reports layout, scroll,
//! resize, input, and clock ticks; the [`ActivationEngine`] answers with
//! [`folio_protocol::UiCommand`]s to apply to the document.

pub mod clipboard;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod model;
pub mod observer;
pub mod rules;
pub mod timing;

pub use config::{EngineConfig, NavTieBreak};
pub use diagnostics::{Diagnostics, Fault, Incident};
pub use engine::{ActivationEngine, render_field_errors};
pub use error::{CapabilityError, ConfigError, EngineError};
pub use model::{Channel, Field, PageSpec};
pub use observer::{IntersectionEntry, IntersectionObserver, Layout, ObserverOptions};
