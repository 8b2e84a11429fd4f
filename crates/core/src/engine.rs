use std::collections::HashMap;

use folio_protocol::{
    ElementId, ScrollBehavior, StyleProperty, StyleToken, StyleValue, UiCommand,
};

use crate::clipboard::{self, CopyTracker};
use crate::config::EngineConfig;
use crate::context::EngineContext;
use crate::diagnostics::{Diagnostics, Fault};
use crate::error::{CapabilityError, EngineError};
use crate::model::{
    Channel, ContactForm, Field, FieldErrors, LazyImage, MobileMenu, NavLink, NavRegistry,
    PageSpec, Section, SkillBar, WatchKind, Watchable,
};
use crate::observer::{IntersectionEntry, IntersectionObserver, Layout};
use crate::rules::navbar::{self, NavbarStyle};
use crate::rules::{fade, lazy_image, reveal_card, section_nav, skill_bar, stagger};
use crate::timing::{Debounce, Throttle, TimerQueue};

const SENDING_LABEL: &str = "Sending...";
const SENT_LABEL: &str = "Message Sent!";
const KEYBOARD_NAV_CLASS: &str = "keyboard-navigation";
const JS_ENABLED_CLASS: &str = "js-enabled";

/// Deferred work waiting in the timer queue.
#[derive(Debug, Clone, PartialEq)]
enum TimerTask {
    RevealSkillBar { target: ElementId, level: u8 },
    CompleteSubmission { round: u64 },
    RevertSubmission { round: u64 },
    RestoreText { target: ElementId, text: String },
}

impl TimerTask {
    fn targets(&self, id: &str) -> bool {
        match self {
            Self::RevealSkillBar { target, .. } | Self::RestoreText { target, .. } => {
                *target == *id
            }
            Self::CompleteSubmission { .. } | Self::RevertSubmission { .. } => false,
        }
    }
}

/// One observer plus the elements it watches.
#[derive(Debug, Clone)]
struct Watcher {
    observer: IntersectionObserver,
    elements: HashMap<ElementId, Watchable>,
}

impl Watcher {
    fn new(observer: IntersectionObserver) -> Self {
        Self {
            observer,
            elements: HashMap::new(),
        }
    }

    fn clear(&mut self) {
        self.observer.disconnect();
        self.elements.clear();
    }
}

#[derive(Debug, Clone)]
struct Watchers {
    fade: Watcher,
    skill_bar: Watcher,
    lazy_image: Watcher,
    reveal_card: Watcher,
    section: Watcher,
}

impl Watchers {
    fn new(config: &EngineConfig) -> Self {
        let o = &config.observation;
        let make = |opts| Watcher::new(IntersectionObserver::new(opts));
        Self {
            fade: make(o.fade),
            skill_bar: make(o.skill_bar),
            lazy_image: make(o.lazy_image),
            reveal_card: make(o.reveal_card),
            section: make(o.section),
        }
    }

    fn get(&self, channel: Channel) -> &Watcher {
        match channel {
            Channel::Fade => &self.fade,
            Channel::SkillBar => &self.skill_bar,
            Channel::LazyImage => &self.lazy_image,
            Channel::RevealCard => &self.reveal_card,
            Channel::Section => &self.section,
        }
    }

    fn get_mut(&mut self, channel: Channel) -> &mut Watcher {
        match channel {
            Channel::Fade => &mut self.fade,
            Channel::SkillBar => &mut self.skill_bar,
            Channel::LazyImage => &mut self.lazy_image,
            Channel::RevealCard => &mut self.reveal_card,
            Channel::Section => &mut self.section,
        }
    }
}

/// The viewport activation engine.
///
/// Owns every piece of page state and turns host events (layout, scroll,
/// resize, intersection batches, input, clock ticks) into ordered
/// [`UiCommand`] lists. Single-threaded by construction: all methods take
/// `&mut self` and nothing blocks; delays are entries in a timer queue that
/// the host drains with [`ActivationEngine::tick`].
#[derive(Debug)]
pub struct ActivationEngine {
    config: EngineConfig,
    context: EngineContext,
    watchers: Watchers,
    nav: NavRegistry,
    menu: MobileMenu,
    form: ContactForm,
    copies: CopyTracker,
    diagnostics: Diagnostics,
    scroll_throttle: Throttle,
    resize_debounce: Debounce,
    timers: TimerQueue<TimerTask>,
    intersection_notice_sent: bool,
    clipboard_notice_sent: bool,
}

impl ActivationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            watchers: Watchers::new(&config),
            scroll_throttle: Throttle::new(config.timing.scroll_throttle_ms),
            resize_debounce: Debounce::new(config.timing.resize_debounce_ms),
            context: EngineContext::default(),
            nav: NavRegistry::new(),
            menu: MobileMenu::default(),
            form: ContactForm::default(),
            copies: CopyTracker::default(),
            diagnostics: Diagnostics::default(),
            timers: TimerQueue::new(),
            intersection_notice_sent: false,
            clipboard_notice_sent: false,
            config,
        }
    }

    // --- Accessors ---

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn context(&self) -> &EngineContext {
        &self.context
    }

    pub fn scroll_y(&self) -> f64 {
        self.context.scroll_y()
    }

    pub fn navbar_style(&self) -> Option<NavbarStyle> {
        self.context.navbar_style()
    }

    pub fn is_activated(&self, channel: Channel, id: &str) -> bool {
        self.watchers
            .get(channel)
            .elements
            .get(id)
            .is_some_and(Watchable::is_activated)
    }

    pub fn is_observing(&self, channel: Channel, id: &str) -> bool {
        self.watchers.get(channel).observer.is_observing(id)
    }

    pub fn active_section(&self) -> Option<&ElementId> {
        self.nav.active_section()
    }

    pub fn nav(&self) -> &NavRegistry {
        &self.nav
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.timers.next_deadline(), self.resize_debounce.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // --- Setup ---

    /// Mark the document as script-enhanced.
    pub fn initialize(&mut self) -> Vec<UiCommand> {
        log::info!("portfolio page initialized");
        vec![UiCommand::add_class(
            &self.config.markup.document_root,
            JS_ENABLED_CLASS,
        )]
    }

    /// Register everything described by `page` and evaluate the current
    /// layout, if one is known.
    pub fn mount(&mut self, page: &PageSpec, now_ms: u64) -> Vec<UiCommand> {
        let mut out = self.initialize();
        out.extend(self.register_fade_targets(page.fade_targets.iter().cloned()));
        out.extend(self.register_skill_bars(page.skill_bars.iter().cloned()));
        self.register_lazy_images(page.lazy_images.iter().cloned());

        let timing = &self.config.timing;
        out.extend(stagger::stagger(&page.skill_cards, timing.skill_card_stagger_ms));
        out.extend(stagger::stagger(&page.project_cards, timing.project_card_stagger_ms));
        self.register_reveal_cards(
            page.skill_cards
                .iter()
                .chain(page.project_cards.iter())
                .cloned(),
        );

        self.register_section_nav(&page.sections, &page.nav_links);
        out.extend(self.register_copy_targets(page.copy_targets.iter().cloned()));
        out.extend(self.refresh(now_ms));

        log::debug!(
            "mounted page: {} fade, {} skill bars, {} images, {} sections",
            self.watchers.fade.elements.len(),
            self.watchers.skill_bar.elements.len(),
            self.watchers.lazy_image.elements.len(),
            self.watchers.section.elements.len(),
        );
        out
    }

    /// Hide each target until it scrolls into view.
    pub fn register_fade_targets(
        &mut self,
        ids: impl IntoIterator<Item = ElementId>,
    ) -> Vec<UiCommand> {
        if !self.intersection_available() {
            return Vec::new();
        }
        let mut out = Vec::new();
        for id in ids {
            if self.watch(id.clone(), WatchKind::FadeSection) {
                out.extend(fade::pending(&id));
            }
        }
        out
    }

    /// Collapse each bar to 0% until it is half visible.
    pub fn register_skill_bars(
        &mut self,
        bars: impl IntoIterator<Item = SkillBar>,
    ) -> Vec<UiCommand> {
        if !self.intersection_available() {
            return Vec::new();
        }
        let mut out = Vec::new();
        for bar in bars {
            let kind = WatchKind::SkillBar {
                target_level: bar.target_level.min(100),
            };
            if self.watch(bar.id.clone(), kind) {
                out.push(skill_bar::collapsed(&bar.id));
            }
        }
        out
    }

    /// Watch images that carry a non-empty deferred source; others are
    /// left alone.
    pub fn register_lazy_images(&mut self, images: impl IntoIterator<Item = LazyImage>) {
        if !self.intersection_available() {
            return;
        }
        for image in images {
            let Some(deferred_src) = image.deferred_src.filter(|src| !src.is_empty()) else {
                continue;
            };
            self.watch(image.id, WatchKind::LazyImage { deferred_src });
        }
    }

    pub fn register_reveal_cards(&mut self, ids: impl IntoIterator<Item = ElementId>) {
        if !self.intersection_available() {
            return;
        }
        for id in ids {
            self.watch(id, WatchKind::RevealCard);
        }
    }

    /// Track which section is current and mirror it in the nav links.
    /// Sections without an id are not observed.
    pub fn register_section_nav(&mut self, sections: &[Section], links: &[NavLink]) {
        for link in links {
            self.nav.insert(link);
        }
        if !self.intersection_available() {
            return;
        }
        for id in sections.iter().filter_map(|s| s.id.clone()) {
            self.watch(id, WatchKind::NavTarget);
        }
    }

    /// Make contact lines click-to-copy. Skipped without clipboard access.
    pub fn register_copy_targets(
        &mut self,
        ids: impl IntoIterator<Item = ElementId>,
    ) -> Vec<UiCommand> {
        if !self.clipboard_available() {
            return Vec::new();
        }
        ids.into_iter()
            .flat_map(|id| clipboard::affordance(&id))
            .collect()
    }

    /// Stop tracking `id` everywhere and cancel its pending timers.
    pub fn unregister(&mut self, id: &ElementId) {
        for channel in Channel::ALL {
            let watcher = self.watchers.get_mut(channel);
            watcher.observer.unobserve(id);
            watcher.elements.remove(id);
        }
        let cancelled = self.timers.cancel_where(|t| t.targets(id));
        self.copies.forget(id);
        log::debug!("unregistered `{id}` ({cancelled} timers cancelled)");
    }

    /// Drop every observation, timer, and pending interaction.
    pub fn teardown(&mut self) {
        for channel in Channel::ALL {
            self.watchers.get_mut(channel).clear();
        }
        self.timers.clear();
        self.resize_debounce.cancel();
        self.scroll_throttle.reset();
        self.nav.clear();
        self.copies.clear();
        self.form.reset();
        log::debug!("engine torn down");
    }

    // --- Viewport events ---

    /// Replace the layout snapshot and re-evaluate every observer.
    pub fn set_layout(&mut self, layout: Layout, now_ms: u64) -> Vec<UiCommand> {
        self.context.set_layout(layout);
        self.refresh(now_ms)
    }

    /// Record the scroll position, repaint the navbar (throttled), and
    /// re-evaluate observers against the layout.
    pub fn on_scroll(&mut self, scroll_y: f64, now_ms: u64) -> Vec<UiCommand> {
        if !scroll_y.is_finite() {
            log::warn!("ignoring non-finite scroll offset {scroll_y}");
            return Vec::new();
        }
        self.context.record_scroll(scroll_y);

        let mut out = Vec::new();
        if self.scroll_throttle.try_fire(now_ms) {
            out.extend(self.repaint_navbar());
        }
        out.extend(self.refresh(now_ms));
        out
    }

    /// Record a resize; the menu check runs from [`tick`](Self::tick) once
    /// resizing has been quiet for the debounce interval.
    pub fn on_resize(&mut self, width: f64, now_ms: u64) {
        self.context.record_viewport_width(width);
        self.resize_debounce.trigger(now_ms);
    }

    /// Apply a batch of intersection entries delivered by the host for one
    /// channel. Entries are processed in delivery order.
    pub fn on_intersections(
        &mut self,
        channel: Channel,
        entries: &[IntersectionEntry],
        now_ms: u64,
    ) -> Vec<UiCommand> {
        if !self.intersection_available() {
            return Vec::new();
        }
        let mut out = Vec::new();
        self.apply_entries(channel, entries, now_ms, &mut out);
        out
    }

    /// Run every timer and debounced handler due at `now_ms`, in time order.
    pub fn tick(&mut self, now_ms: u64) -> Vec<UiCommand> {
        let mut out = Vec::new();
        loop {
            let timer_due = self.timers.next_deadline().filter(|d| *d <= now_ms);
            let resize_due = self.resize_debounce.deadline().filter(|d| *d <= now_ms);
            match (timer_due, resize_due) {
                (None, None) => break,
                (None, Some(_)) => self.fire_resize(now_ms, &mut out),
                (Some(t), Some(r)) if r < t => self.fire_resize(now_ms, &mut out),
                _ => {
                    if let Some((due, task)) = self.timers.pop_due(now_ms) {
                        self.run_task(task, due, &mut out);
                    }
                }
            }
        }
        out
    }

    /// Re-evaluate all observers against the current layout and scroll.
    pub fn refresh(&mut self, now_ms: u64) -> Vec<UiCommand> {
        if !self.config.capabilities.intersection_observer {
            return Vec::new();
        }
        let Some(layout) = self.context.layout() else {
            return Vec::new();
        };
        let scroll_y = self.context.scroll_y();
        let batches: Vec<(Channel, Vec<IntersectionEntry>)> = Channel::ALL
            .into_iter()
            .map(|channel| {
                let entries = self
                    .watchers
                    .get_mut(channel)
                    .observer
                    .evaluate(layout, scroll_y);
                (channel, entries)
            })
            .collect();

        let mut out = Vec::new();
        for (channel, entries) in batches {
            self.apply_entries(channel, &entries, now_ms, &mut out);
        }
        out
    }

    // --- Navigation & input ---

    pub fn toggle_menu(&mut self) -> Vec<UiCommand> {
        self.menu.toggle(&self.config.markup)
    }

    /// Smooth-scroll to `target`, leaving room for the fixed header, and
    /// close the mobile menu.
    pub fn navigate_to(&mut self, target: &str) -> Result<Vec<UiCommand>, EngineError> {
        let rect = self
            .context
            .layout()
            .and_then(|l| l.document_rect(target))
            .ok_or_else(|| EngineError::MissingLayout(ElementId::from(target)))?;
        let top = (rect.y - self.config.metrics.header_offset_px).max(0.0);

        let mut out = vec![UiCommand::ScrollTo {
            top,
            behavior: ScrollBehavior::Smooth,
        }];
        out.extend(self.menu.close(&self.config.markup));
        Ok(out)
    }

    pub fn on_key_down(&mut self, key: &str) -> Vec<UiCommand> {
        if key == "Tab" && self.context.set_keyboard_navigation(true) {
            return vec![UiCommand::add_class(
                &self.config.markup.body,
                KEYBOARD_NAV_CLASS,
            )];
        }
        Vec::new()
    }

    pub fn on_mouse_down(&mut self) -> Vec<UiCommand> {
        if self.context.set_keyboard_navigation(false) {
            return vec![UiCommand::remove_class(
                &self.config.markup.body,
                KEYBOARD_NAV_CLASS,
            )];
        }
        Vec::new()
    }

    // --- Contact form ---

    /// Store user input; editing a field hides its error.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) -> Vec<UiCommand> {
        if self.form.update(field, value) {
            let target = self.config.markup.error_element(field.as_str());
            return vec![UiCommand::set_text(&target, "")];
        }
        Vec::new()
    }

    /// Validate and start the simulated submission.
    ///
    /// No request is ever sent: after a fixed delay the form simply reports
    /// success. On invalid input nothing changes except the stored errors,
    /// which are returned; [`field_error_commands`](Self::field_error_commands)
    /// renders them.
    pub fn submit_contact(&mut self, now_ms: u64) -> Result<Vec<UiCommand>, EngineError> {
        if !self.form.phase().accepts_submit() {
            return Err(EngineError::SubmissionInFlight);
        }
        let round = self.form.begin_submit().map_err(|errors| {
            log::debug!("contact form rejected: {errors}");
            EngineError::Validation(errors)
        })?;

        let due = now_ms.saturating_add(self.config.timing.submit_delay_ms);
        self.timers
            .schedule(due, TimerTask::CompleteSubmission { round });

        let button = &self.config.markup.submit_button;
        Ok(vec![
            UiCommand::set_text(button, SENDING_LABEL),
            UiCommand::SetDisabled {
                target: button.clone(),
                disabled: true,
            },
        ])
    }

    /// Show the stored error for each validated field; blank the rest.
    pub fn field_error_commands(&self) -> Vec<UiCommand> {
        render_field_errors(&self.config, self.form.errors())
    }

    // --- Clipboard ---

    /// Ask the host to copy the value of a `Label: value` contact line.
    pub fn copy_contact_detail(&mut self, source: &ElementId, text: &str) -> Vec<UiCommand> {
        if !self.clipboard_available() {
            return Vec::new();
        }
        if self
            .timers
            .contains_where(|t| matches!(t, TimerTask::RestoreText { target, .. } if target == source))
        {
            log::debug!("`{source}` is still showing copy feedback");
            return Vec::new();
        }
        self.copies.request(source, text).into_iter().collect()
    }

    /// The host's answer to a [`UiCommand::CopyToClipboard`].
    pub fn clipboard_result(
        &mut self,
        source: &ElementId,
        outcome: Result<(), String>,
        now_ms: u64,
    ) -> Vec<UiCommand> {
        match outcome {
            Ok(()) => {
                let Some((original, confirmation)) = self.copies.confirm(source) else {
                    return Vec::new();
                };
                let due = now_ms.saturating_add(self.config.timing.copy_feedback_ms);
                self.timers.schedule(
                    due,
                    TimerTask::RestoreText {
                        target: source.clone(),
                        text: original,
                    },
                );
                vec![UiCommand::set_text(source, confirmation)]
            }
            Err(reason) => {
                self.copies.abandon(source);
                self.diagnostics
                    .report_capability(CapabilityError::ClipboardRejected(reason));
                Vec::new()
            }
        }
    }

    // --- Diagnostics ---

    pub fn report_fault(&mut self, fault: Fault) {
        self.diagnostics.report_fault(fault);
    }

    pub fn record_page_load(&self, fetch_start_ms: f64, load_end_ms: f64) {
        self.diagnostics.record_page_load(fetch_start_ms, load_end_ms);
    }

    // --- Internals ---

    fn intersection_available(&mut self) -> bool {
        if self.config.capabilities.intersection_observer {
            return true;
        }
        if !self.intersection_notice_sent {
            self.intersection_notice_sent = true;
            self.diagnostics
                .report_capability(CapabilityError::IntersectionUnavailable);
        }
        false
    }

    fn clipboard_available(&mut self) -> bool {
        if self.config.capabilities.clipboard {
            return true;
        }
        if !self.clipboard_notice_sent {
            self.clipboard_notice_sent = true;
            self.diagnostics
                .report_capability(CapabilityError::ClipboardUnavailable);
        }
        false
    }

    /// Start watching `id`. Returns `false` if it was already registered
    /// on that channel.
    fn watch(&mut self, id: ElementId, kind: WatchKind) -> bool {
        let watcher = self.watchers.get_mut(kind.channel());
        if watcher.elements.contains_key(&id) {
            return false;
        }
        watcher.observer.observe(id.clone());
        watcher
            .elements
            .insert(id.clone(), Watchable::new(id, kind));
        true
    }

    fn apply_entries(
        &mut self,
        channel: Channel,
        entries: &[IntersectionEntry],
        now_ms: u64,
        out: &mut Vec<UiCommand>,
    ) {
        if channel == Channel::Section {
            self.apply_section_entries(entries, out);
            return;
        }
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            self.activate(channel, &entry.target, now_ms, out);
        }
    }

    fn apply_section_entries(&mut self, entries: &[IntersectionEntry], out: &mut Vec<UiCommand>) {
        let observer = &self.watchers.section.observer;
        let observed: Vec<IntersectionEntry> = entries
            .iter()
            .filter(|e| observer.is_observing(&e.target))
            .cloned()
            .collect();
        for entry in section_nav::select(&observed, self.config.nav_tie_break) {
            out.extend(self.nav.activate(&entry.target));
        }
    }

    /// One-shot activation. The subscription is dropped before any effect
    /// is produced, so repeated entries for the same target are inert.
    fn activate(&mut self, channel: Channel, target: &str, now_ms: u64, out: &mut Vec<UiCommand>) {
        let watcher = self.watchers.get_mut(channel);
        if !watcher.observer.is_observing(target) {
            return;
        }
        let Some(element) = watcher.elements.get_mut(target) else {
            return;
        };
        if !element.activate() {
            return;
        }
        let id = element.id.clone();
        let kind = element.kind.clone();
        watcher.observer.unobserve(target);
        log::debug!("activated {channel:?} `{id}`");

        match kind {
            WatchKind::FadeSection => out.extend(fade::shown(&id)),
            WatchKind::SkillBar { target_level } => {
                let due = now_ms.saturating_add(self.config.timing.skill_reveal_delay_ms);
                self.timers.schedule(
                    due,
                    TimerTask::RevealSkillBar {
                        target: id,
                        level: target_level,
                    },
                );
            }
            WatchKind::LazyImage { deferred_src } => {
                out.extend(lazy_image::load(&id, &deferred_src));
            }
            WatchKind::RevealCard => out.push(reveal_card::animate(&id)),
            WatchKind::NavTarget => {}
        }
    }

    fn repaint_navbar(&mut self) -> Vec<UiCommand> {
        let style = navbar::style_for(
            self.context.scroll_y(),
            self.config.metrics.navbar_elevation_px,
        );
        self.context.set_navbar_style(style);
        navbar::paint(&self.config.markup.navbar, style)
    }

    fn fire_resize(&mut self, now_ms: u64, out: &mut Vec<UiCommand>) {
        if !self.resize_debounce.poll(now_ms) {
            return;
        }
        let wide = self
            .context
            .viewport_width()
            .is_some_and(|w| w > self.config.metrics.mobile_breakpoint_px);
        if wide && self.menu.is_open() {
            log::debug!("closing mobile menu after resize to desktop width");
            out.extend(self.menu.close(&self.config.markup));
        }
    }

    fn run_task(&mut self, task: TimerTask, due_ms: u64, out: &mut Vec<UiCommand>) {
        let markup = &self.config.markup;
        match task {
            TimerTask::RevealSkillBar { target, level } => {
                out.push(skill_bar::revealed(&target, level));
            }
            TimerTask::CompleteSubmission { round } => {
                if !self.form.complete(round) {
                    return;
                }
                log::info!("contact message accepted (simulated; nothing was sent)");
                out.push(UiCommand::set_text(&markup.submit_button, SENT_LABEL));
                out.push(UiCommand::set_style(
                    &markup.submit_button,
                    StyleProperty::Background,
                    StyleValue::Token(StyleToken::SubmitSuccessBackground),
                ));
                out.push(UiCommand::ResetForm {
                    target: markup.contact_form.clone(),
                });
                let revert_at = due_ms.saturating_add(self.config.timing.submit_revert_ms);
                self.timers
                    .schedule(revert_at, TimerTask::RevertSubmission { round });
            }
            TimerTask::RevertSubmission { round } => {
                if !self.form.revert(round) {
                    return;
                }
                out.push(UiCommand::set_text(
                    &markup.submit_button,
                    markup.submit_label.clone(),
                ));
                out.push(UiCommand::SetDisabled {
                    target: markup.submit_button.clone(),
                    disabled: false,
                });
                out.push(UiCommand::set_style(
                    &markup.submit_button,
                    StyleProperty::Background,
                    StyleValue::Clear,
                ));
            }
            TimerTask::RestoreText { target, text } => {
                out.push(UiCommand::set_text(&target, text));
            }
        }
    }
}

impl Default for ActivationEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Commands showing `errors` next to their fields and blanking the others.
pub fn render_field_errors(config: &EngineConfig, errors: &FieldErrors) -> Vec<UiCommand> {
    [Field::Name, Field::Email, Field::Message]
        .into_iter()
        .map(|field| {
            let target = config.markup.error_element(field.as_str());
            UiCommand::set_text(&target, errors.get(field).unwrap_or_default())
        })
        .collect()
}
