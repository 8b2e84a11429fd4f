use anyhow::{Context, Result, bail};
use folio_core::{
    ActivationEngine, Channel, EngineConfig, EngineError, Fault, Field, IntersectionEntry, Layout,
    PageSpec,
};
use folio_protocol::{ElementId, UiCommand};
use serde::{Deserialize, Serialize};

/// A scripted page session: what the page looks like and what the user
/// does, on a millisecond clock starting at zero.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: EngineConfig,
    #[serde(default)]
    pub page: PageSpec,
    #[serde(default)]
    pub layout: Option<Layout>,
    #[serde(default)]
    pub events: Vec<TimedEvent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimedEvent {
    pub at: u64,
    #[serde(flatten)]
    pub event: Event,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Layout { layout: Layout },
    Scroll { y: f64 },
    Resize { width: f64 },
    Intersections {
        channel: Channel,
        entries: Vec<IntersectionEntry>,
    },
    ToggleMenu,
    Navigate { target: String },
    KeyDown { key: String },
    MouseDown,
    Input { field: Field, value: String },
    Submit,
    Copy { source: ElementId, text: String },
    ClipboardResult {
        source: ElementId,
        #[serde(default)]
        error: Option<String>,
    },
    Fault { fault: Fault },
    PageLoad { fetch_start: f64, load_end: f64 },
    Unregister { id: ElementId },
}

/// A command together with the simulated time it was emitted at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Emitted {
    pub at: u64,
    pub command: UiCommand,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self> {
        let scenario: Self = serde_json::from_str(json).context("failed to parse scenario")?;
        scenario.config.validate()?;
        if let Some(pos) = scenario.events.windows(2).position(|w| w[1].at < w[0].at) {
            bail!(
                "events must be in time order (event {} at {} ms follows {} ms)",
                pos + 1,
                scenario.events[pos + 1].at,
                scenario.events[pos].at
            );
        }
        Ok(scenario)
    }
}

/// Replays a [`Scenario`] and collects everything the engine emits.
pub struct Replay {
    engine: ActivationEngine,
    emitted: Vec<Emitted>,
}

impl Replay {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: ActivationEngine::new(config),
            emitted: Vec::new(),
        }
    }

    /// Run the whole scenario. Timers still pending after the last event
    /// are drained up to `until_ms` (or until none remain).
    pub fn run(mut self, scenario: &Scenario, until_ms: Option<u64>) -> Result<Vec<Emitted>> {
        let mounted = self.engine.mount(&scenario.page, 0);
        self.record(0, mounted);
        if let Some(layout) = &scenario.layout {
            let cmds = self.engine.set_layout(layout.clone(), 0);
            self.record(0, cmds);
        }

        for timed in &scenario.events {
            self.advance(timed.at);
            self.apply(timed.at, &timed.event)?;
        }

        while let Some(due) = self.engine.next_deadline() {
            if until_ms.is_some_and(|limit| due > limit) {
                break;
            }
            self.advance(due);
        }
        Ok(self.emitted)
    }

    /// Fire everything due up to `now_ms`, stamping each batch with the
    /// time it fell due.
    fn advance(&mut self, now_ms: u64) {
        while let Some(due) = self.engine.next_deadline().filter(|d| *d <= now_ms) {
            let cmds = self.engine.tick(due);
            self.record(due, cmds);
        }
    }

    fn apply(&mut self, at: u64, event: &Event) -> Result<()> {
        let engine = &mut self.engine;
        let cmds = match event {
            Event::Layout { layout } => engine.set_layout(layout.clone(), at),
            Event::Scroll { y } => engine.on_scroll(*y, at),
            Event::Resize { width } => {
                engine.on_resize(*width, at);
                Vec::new()
            }
            Event::Intersections { channel, entries } => {
                engine.on_intersections(*channel, entries, at)
            }
            Event::ToggleMenu => engine.toggle_menu(),
            Event::Navigate { target } => engine
                .navigate_to(target)
                .with_context(|| format!("navigation at {at} ms"))?,
            Event::KeyDown { key } => engine.on_key_down(key),
            Event::MouseDown => engine.on_mouse_down(),
            Event::Input { field, value } => engine.update_field(*field, value.clone()),
            Event::Submit => match engine.submit_contact(at) {
                Ok(cmds) => cmds,
                Err(EngineError::Validation(errors)) => {
                    log::info!("submission at {at} ms rejected: {errors}");
                    engine.field_error_commands()
                }
                Err(e) => {
                    log::warn!("submission at {at} ms ignored: {e}");
                    Vec::new()
                }
            },
            Event::Copy { source, text } => engine.copy_contact_detail(source, text),
            Event::ClipboardResult { source, error } => {
                let outcome = error.clone().map_or(Ok(()), Err);
                engine.clipboard_result(source, outcome, at)
            }
            Event::Fault { fault } => {
                engine.report_fault(fault.clone());
                Vec::new()
            }
            Event::PageLoad {
                fetch_start,
                load_end,
            } => {
                engine.record_page_load(*fetch_start, *load_end);
                Vec::new()
            }
            Event::Unregister { id } => {
                engine.unregister(id);
                Vec::new()
            }
        };
        self.record(at, cmds);
        Ok(())
    }

    fn record(&mut self, at: u64, commands: Vec<UiCommand>) {
        self.emitted
            .extend(commands.into_iter().map(|command| Emitted { at, command }));
    }
}

#[cfg(test)]
mod tests {
    use folio_protocol::{StyleProperty, StyleValue};

    use super::*;

    const SCENARIO: &str = r##"{
        "page": {
            "skill_bars": [{"id": "skill-rust", "target_level": 95}],
            "copy_targets": ["contact-email"]
        },
        "events": [
            {"at": 100, "event": "intersections", "channel": "skill_bar",
             "entries": [{"target": "skill-rust", "is_intersecting": true, "ratio": 0.8}]},
            {"at": 200, "event": "copy", "source": "contact-email", "text": "Email: jo@example.com"},
            {"at": 250, "event": "clipboard_result", "source": "contact-email"}
        ]
    }"##;

    #[test]
    fn replays_and_drains_timers() {
        let scenario = Scenario::from_json(SCENARIO).unwrap();
        let emitted = Replay::new(scenario.config.clone())
            .run(&scenario, None)
            .unwrap();

        let reveal = emitted
            .iter()
            .find(|e| {
                e.command
                    == UiCommand::set_style(
                        &"skill-rust".into(),
                        StyleProperty::Width,
                        StyleValue::Percent(95),
                    )
            })
            .unwrap();
        assert_eq!(reveal.at, 400);

        let restored = emitted.last().unwrap();
        assert_eq!(restored.at, 1_750);
        assert_eq!(
            restored.command,
            UiCommand::set_text(&"contact-email".into(), "Email: jo@example.com")
        );
    }

    #[test]
    fn until_stops_draining() {
        let scenario = Scenario::from_json(SCENARIO).unwrap();
        let emitted = Replay::new(scenario.config.clone())
            .run(&scenario, Some(1_000))
            .unwrap();
        assert!(emitted.iter().all(|e| e.at <= 1_000));
    }

    #[test]
    fn demo_session_replays() {
        let scenario =
            Scenario::from_json(include_str!("../../../demos/portfolio.json")).unwrap();
        let replay = Replay::new(scenario.config.clone());
        let emitted = replay.run(&scenario, None).unwrap();

        assert!(emitted.contains(&Emitted {
            at: 3_900,
            command: UiCommand::set_text(&"submit-btn".into(), "Sending..."),
        }));
        assert!(emitted.contains(&Emitted {
            at: 4_900,
            command: UiCommand::set_text(&"submit-btn".into(), "Message Sent!"),
        }));
        // Both resizes fold into one close, 250 ms after the last.
        assert!(emitted.contains(&Emitted {
            at: 2_850,
            command: UiCommand::remove_class(&"body".into(), "menu-open"),
        }));
    }

    #[test]
    fn out_of_order_events_are_rejected() {
        let json = r#"{"events": [
            {"at": 50, "event": "mouse_down"},
            {"at": 10, "event": "toggle_menu"}
        ]}"#;
        let err = Scenario::from_json(json).unwrap_err();
        assert!(err.to_string().contains("time order"));
    }
}
