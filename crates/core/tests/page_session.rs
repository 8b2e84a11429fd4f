//! Integration test: drive an engine through a realistic page session with
//! a scripted clock and check the commands it emits.

use folio_core::config::{EngineConfig, NavTieBreak};
use folio_core::model::{FormPhase, LazyImage, NavLink, PageSpec, Section, SkillBar, form};
use folio_core::{ActivationEngine, Channel, EngineError, Field, IntersectionEntry, Layout};
use folio_protocol::{
    ElementId, Rect, StyleProperty, StyleToken, StyleValue, UiCommand, ViewportSize,
};

fn hit(target: &str, ratio: f64) -> IntersectionEntry {
    IntersectionEntry {
        target: target.into(),
        is_intersecting: true,
        ratio,
    }
}

fn page() -> PageSpec {
    PageSpec {
        fade_targets: vec!["hero".into(), "about".into(), "projects".into()],
        skill_bars: vec![SkillBar::new("skill-rust", 95), SkillBar::new("skill-css", 80)],
        lazy_images: vec![LazyImage::new("avatar", "/img/avatar.webp")],
        skill_cards: vec!["skill-card-1".into(), "skill-card-2".into()],
        project_cards: vec!["project-1".into(), "project-2".into(), "project-3".into()],
        sections: vec![
            Section::new("home"),
            Section::new("about"),
            Section::new("projects"),
            Section::anonymous(),
        ],
        nav_links: vec![
            NavLink::new("nav-home", "#home"),
            NavLink::new("nav-about", "#about"),
            NavLink::new("nav-projects", "#projects"),
            NavLink::new("nav-blog", "https://blog.example.com"),
        ],
        copy_targets: vec!["contact-email".into()],
    }
}

fn layout() -> Layout {
    Layout::new(ViewportSize::new(1280.0, 800.0))
        .with_box("hero", Rect::new(0.0, 0.0, 1280.0, 760.0))
        .with_box("home", Rect::new(0.0, 0.0, 1280.0, 760.0))
        .with_box("about", Rect::new(0.0, 900.0, 1280.0, 700.0))
        .with_box("skill-rust", Rect::new(100.0, 1300.0, 600.0, 20.0))
        .with_box("projects", Rect::new(0.0, 1800.0, 1280.0, 900.0))
        .with_box("avatar", Rect::new(100.0, 950.0, 200.0, 200.0))
}

fn navbar_paints(cmds: &[UiCommand]) -> usize {
    cmds.iter()
        .filter(|c| {
            matches!(
                c,
                UiCommand::SetStyle { target, property: StyleProperty::Background, .. }
                    if *target == "navbar"
            )
        })
        .count()
}

#[test]
fn one_shot_targets_activate_at_most_once() {
    let mut engine = ActivationEngine::default();
    engine.register_fade_targets(["about".into()]);

    let first = engine.on_intersections(Channel::Fade, &[hit("about", 0.4)], 0);
    assert!(first.contains(&UiCommand::add_class(&"about".into(), "visible")));
    assert!(engine.is_activated(Channel::Fade, "about"));
    assert!(!engine.is_observing(Channel::Fade, "about"));

    // Repeat and out-of-order deliveries after activation are inert.
    for t in 1..5 {
        let again = engine.on_intersections(Channel::Fade, &[hit("about", 1.0)], t);
        assert!(again.is_empty(), "re-activated at {t}");
    }
}

#[test]
fn skill_bar_reveals_after_delay() {
    let mut engine = ActivationEngine::default();
    let cmds = engine.register_skill_bars([SkillBar::new("skill-rust", 95)]);
    let bar = ElementId::from("skill-rust");
    assert_eq!(
        cmds,
        vec![UiCommand::set_style(&bar, StyleProperty::Width, StyleValue::Percent(0))]
    );

    assert!(
        engine
            .on_intersections(Channel::SkillBar, &[hit("skill-rust", 0.6)], 1_000)
            .is_empty()
    );
    assert!(engine.tick(1_299).is_empty());

    let revealed = engine.tick(1_300);
    assert_eq!(
        revealed,
        vec![UiCommand::set_style(&bar, StyleProperty::Width, StyleValue::Percent(95))]
    );
    assert!(engine.tick(5_000).is_empty());
}

#[test]
fn navbar_follows_scroll_without_hysteresis() {
    let mut engine = ActivationEngine::default();
    let navbar = ElementId::from("navbar");
    let background = |token| {
        UiCommand::set_style(&navbar, StyleProperty::Background, StyleValue::Token(token))
    };

    let at_top = engine.on_scroll(0.0, 0);
    assert!(at_top.contains(&background(StyleToken::NavBackgroundFlat)));

    let scrolled = engine.on_scroll(150.0, 100);
    assert!(scrolled.contains(&background(StyleToken::NavBackgroundElevated)));
    assert!(scrolled.contains(&UiCommand::set_style(
        &navbar,
        StyleProperty::BoxShadow,
        StyleValue::Token(StyleToken::NavShadowElevated),
    )));

    let back = engine.on_scroll(50.0, 200);
    assert!(back.contains(&background(StyleToken::NavBackgroundFlat)));
}

#[test]
fn scroll_burst_repaints_navbar_once() {
    let mut engine = ActivationEngine::default();
    let mut paints = 0;
    for i in 0..100u64 {
        let now = i * 15 / 100;
        paints += navbar_paints(&engine.on_scroll(i as f64 * 3.0, now));
    }
    assert_eq!(paints, 1);
    // Position is always recorded, throttled or not.
    assert_eq!(engine.scroll_y(), 297.0);
}

#[test]
fn resize_burst_closes_menu_once_after_quiet_period() {
    let mut engine = ActivationEngine::default();
    engine.toggle_menu();
    assert!(engine.menu_open());

    for i in 0..10u64 {
        engine.on_resize(1024.0, i * 25);
    }
    // Last resize at 225 ms; the handler runs 250 ms later.
    assert!(engine.tick(474).is_empty());
    assert!(engine.menu_open());

    let closed = engine.tick(475);
    assert_eq!(closed.len(), 3);
    assert!(closed.contains(&UiCommand::remove_class(&"nav-links".into(), "active")));
    assert!(!engine.menu_open());
    assert!(engine.tick(2_000).is_empty());
}

#[test]
fn narrow_resize_keeps_menu_open() {
    let mut engine = ActivationEngine::default();
    engine.toggle_menu();
    engine.on_resize(768.0, 0);
    assert!(engine.tick(250).is_empty());
    assert!(engine.menu_open());
}

#[test]
fn contact_validation_reports_every_field() {
    let mut engine = ActivationEngine::default();
    engine.update_field(Field::Name, "J");
    engine.update_field(Field::Email, "not-an-email");
    engine.update_field(Field::Message, "short");

    let Err(EngineError::Validation(errors)) = engine.submit_contact(0) else {
        panic!("expected validation errors");
    };
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get(Field::Name), Some(form::NAME_TOO_SHORT));
    assert_eq!(errors.get(Field::Email), Some(form::EMAIL_INVALID));
    assert_eq!(errors.get(Field::Message), Some(form::MESSAGE_TOO_SHORT));
    assert_eq!(engine.form().phase(), FormPhase::Invalid);

    let shown = engine.field_error_commands();
    assert!(shown.contains(&UiCommand::set_text(&"email-error".into(), form::EMAIL_INVALID)));

    // Editing a field hides its error.
    let cleared = engine.update_field(Field::Email, "a@b.co");
    assert_eq!(cleared, vec![UiCommand::set_text(&"email-error".into(), "")]);
    assert_eq!(engine.form().errors().len(), 2);
}

#[test]
fn contact_submission_lifecycle() {
    let mut engine = ActivationEngine::default();
    engine.update_field(Field::Name, "Jo");
    engine.update_field(Field::Email, "a@b.co");
    engine.update_field(Field::Message, "1234567890");

    let button = ElementId::from("submit-btn");
    let sending = engine.submit_contact(10_000).unwrap_or_default();
    assert_eq!(sending[0], UiCommand::set_text(&button, "Sending..."));
    assert_eq!(engine.form().phase(), FormPhase::Submitting);
    assert!(matches!(
        engine.submit_contact(10_100),
        Err(EngineError::SubmissionInFlight)
    ));

    assert!(engine.tick(10_999).is_empty());
    let sent = engine.tick(11_000);
    assert!(sent.contains(&UiCommand::set_text(&button, "Message Sent!")));
    assert!(sent.contains(&UiCommand::ResetForm {
        target: "contact-form".into()
    }));
    assert_eq!(engine.form().phase(), FormPhase::Submitted);
    assert!(engine.form().draft().get(Field::Name).is_empty());

    let reverted = engine.tick(13_000);
    assert!(reverted.contains(&UiCommand::set_text(&button, "Send Message")));
    assert!(reverted.contains(&UiCommand::SetDisabled {
        target: button.clone(),
        disabled: false
    }));
    assert_eq!(engine.form().phase(), FormPhase::Idle);
}

#[test]
fn nav_highlight_is_exclusive() {
    let mut engine = ActivationEngine::default();
    engine.mount(&page(), 0);

    let cmds = engine.on_intersections(Channel::Section, &[hit("about", 0.5)], 10);
    assert_eq!(cmds.last(), Some(&UiCommand::add_class(&"nav-about".into(), "active")));
    assert_eq!(engine.nav().active_anchor(), Some(&ElementId::from("nav-about")));

    let cmds = engine.on_intersections(Channel::Section, &[hit("projects", 0.5)], 20);
    assert!(cmds.contains(&UiCommand::remove_class(&"nav-about".into(), "active")));
    assert_eq!(
        cmds.iter()
            .filter(|c| matches!(c, UiCommand::AddClass { .. }))
            .count(),
        1
    );
    assert_eq!(engine.active_section(), Some(&ElementId::from("projects")));
}

#[test]
fn simultaneous_sections_use_configured_tie_break() {
    let batch = [hit("about", 0.9), hit("projects", 0.35)];

    let mut last = ActivationEngine::default();
    last.mount(&page(), 0);
    last.on_intersections(Channel::Section, &batch, 0);
    assert_eq!(last.active_section(), Some(&ElementId::from("projects")));

    let mut config = EngineConfig::default();
    config.nav_tie_break = NavTieBreak::GreatestRatio;
    let mut greatest = ActivationEngine::new(config);
    greatest.mount(&page(), 0);
    greatest.on_intersections(Channel::Section, &batch, 0);
    assert_eq!(greatest.active_section(), Some(&ElementId::from("about")));
}

#[test]
fn layout_drives_activation_while_scrolling() {
    let mut engine = ActivationEngine::default();
    let mounted = engine.mount(&page(), 0);
    assert_eq!(mounted[0], UiCommand::add_class(&"html".into(), "js-enabled"));

    let first = engine.set_layout(layout(), 0);
    assert!(first.contains(&UiCommand::add_class(&"hero".into(), "visible")));
    assert!(!engine.is_activated(Channel::Fade, "about"));
    assert_eq!(engine.active_section(), Some(&ElementId::from("home")));

    // About fills the band below the header.
    engine.on_scroll(900.0, 100);
    assert!(engine.is_activated(Channel::Fade, "about"));
    assert!(engine.is_activated(Channel::LazyImage, "avatar"));
    assert!(engine.is_activated(Channel::SkillBar, "skill-rust"));
    assert_eq!(engine.active_section(), Some(&ElementId::from("about")));

    let later = engine.tick(400);
    assert!(later.contains(&UiCommand::set_style(
        &"skill-rust".into(),
        StyleProperty::Width,
        StyleValue::Percent(95)
    )));
}

#[test]
fn copy_shows_confirmation_then_restores() {
    let mut engine = ActivationEngine::default();
    let source = ElementId::from("contact-email");
    let text = "Email: jo@example.com";

    let request = engine.copy_contact_detail(&source, text);
    assert_eq!(
        request,
        vec![UiCommand::CopyToClipboard {
            source: source.clone(),
            text: "jo@example.com".into()
        }]
    );

    let shown = engine.clipboard_result(&source, Ok(()), 500);
    assert_eq!(shown, vec![UiCommand::set_text(&source, "Email: Copied!")]);
    // Clicks during the confirmation do not stack.
    assert!(engine.copy_contact_detail(&source, "Email: Copied!").is_empty());

    assert!(engine.tick(1_999).is_empty());
    assert_eq!(engine.tick(2_000), vec![UiCommand::set_text(&source, text)]);
}

#[test]
fn rejected_copy_is_reported_not_raised() {
    let mut engine = ActivationEngine::default();
    let source = ElementId::from("contact-email");
    engine.copy_contact_detail(&source, "Email: jo@example.com");

    let cmds = engine.clipboard_result(&source, Err("permission denied".into()), 0);
    assert!(cmds.is_empty());
    assert_eq!(engine.diagnostics().len(), 1);
    assert_eq!(engine.pending_timers(), 0);
}

#[test]
fn staggered_cards_get_increasing_delays() {
    let mut engine = ActivationEngine::default();
    let cmds = engine.mount(&page(), 0);
    assert!(cmds.contains(&UiCommand::set_style(
        &"project-3".into(),
        StyleProperty::AnimationDelay,
        StyleValue::Millis(300)
    )));
    assert!(cmds.contains(&UiCommand::set_style(
        &"skill-card-2".into(),
        StyleProperty::AnimationDelay,
        StyleValue::Millis(100)
    )));
}

#[test]
fn teardown_drops_pending_work() {
    let mut engine = ActivationEngine::default();
    engine.mount(&page(), 0);
    engine.on_intersections(Channel::SkillBar, &[hit("skill-css", 1.0)], 0);
    engine.on_resize(1200.0, 0);
    engine.teardown();

    assert_eq!(engine.next_deadline(), None);
    assert!(engine.tick(10_000).is_empty());
    assert!(!engine.is_observing(Channel::Fade, "about"));
}
