pub mod form;
pub mod menu;
pub mod nav;
pub mod page;
pub mod watchable;

pub use form::{
    ContactDraft, ContactForm, Field, FieldErrors, FormPhase, UnknownField, validate_contact_draft,
};
pub use menu::MobileMenu;
pub use nav::{NavLink, NavRegistry};
pub use page::{LazyImage, PageSpec, Section, SkillBar};
pub use watchable::{ActivationState, Channel, UnknownChannel, WatchKind, Watchable};
