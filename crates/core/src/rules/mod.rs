//! Activation rules: pure functions from "this happened" to the page
//! mutations it causes. The engine owns state and ordering; the rules only
//! decide what each transition looks like.

pub mod fade;
pub mod lazy_image;
pub mod navbar;
pub mod reveal_card;
pub mod section_nav;
pub mod skill_bar;
pub mod stagger;
