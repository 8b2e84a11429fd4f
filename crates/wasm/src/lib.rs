use folio_core::model::{NavLink, Section};
use folio_core::{
    ActivationEngine, Channel, EngineConfig, EngineError, Fault, Field, IntersectionEntry, Layout,
    PageSpec,
};
use folio_protocol::{ElementId, UiCommand};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Install the panic hook and route `log` output to the browser console.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("console logger was already installed");
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(json: &str, what: &str) -> Result<T, JsError> {
    serde_json::from_str(json).map_err(|e| JsError::new(&format!("invalid {what}: {e}")))
}

/// Browser timestamps arrive as fractional milliseconds.
fn clock(now_ms: f64) -> u64 {
    if now_ms.is_finite() && now_ms > 0.0 {
        now_ms as u64
    } else {
        0
    }
}

/// One page's engine, owned by the JS glue. Every method that changes the
/// page returns a JSON array of UI commands to apply in order.
#[wasm_bindgen]
pub struct PageEngine {
    inner: ActivationEngine,
}

#[wasm_bindgen]
impl PageEngine {
    /// Build an engine from an optional JSON config; missing keys take
    /// their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<PageEngine, JsError> {
        let config = match config_json.as_deref() {
            Some(json) => EngineConfig::from_json(json).map_err(|e| JsError::new(&e.to_string()))?,
            None => EngineConfig::default(),
        };
        Ok(Self {
            inner: ActivationEngine::new(config),
        })
    }

    /// Register everything in a page description (JSON `PageSpec`).
    pub fn mount(&mut self, page_json: &str, now_ms: f64) -> Result<String, JsError> {
        let page: PageSpec = from_json(page_json, "page description")?;
        to_json(&self.inner.mount(&page, clock(now_ms)))
    }

    #[wasm_bindgen(js_name = registerFadeTargets)]
    pub fn register_fade_targets(&mut self, ids: Vec<String>) -> Result<String, JsError> {
        to_json(&self.inner.register_fade_targets(ids.into_iter().map(ElementId::from)))
    }

    #[wasm_bindgen(js_name = registerSectionNav)]
    pub fn register_section_nav(
        &mut self,
        sections_json: &str,
        links_json: &str,
    ) -> Result<(), JsError> {
        let sections: Vec<Section> = from_json(sections_json, "section list")?;
        let links: Vec<NavLink> = from_json(links_json, "nav link list")?;
        self.inner.register_section_nav(&sections, &links);
        Ok(())
    }

    pub fn unregister(&mut self, id: &str) {
        self.inner.unregister(&ElementId::from(id));
    }

    pub fn teardown(&mut self) {
        self.inner.teardown();
    }

    #[wasm_bindgen(js_name = setLayout)]
    pub fn set_layout(&mut self, layout_json: &str, now_ms: f64) -> Result<String, JsError> {
        let layout: Layout = from_json(layout_json, "layout")?;
        to_json(&self.inner.set_layout(layout, clock(now_ms)))
    }

    #[wasm_bindgen(js_name = onScroll)]
    pub fn on_scroll(&mut self, scroll_y: f64, now_ms: f64) -> Result<String, JsError> {
        to_json(&self.inner.on_scroll(scroll_y, clock(now_ms)))
    }

    #[wasm_bindgen(js_name = onResize)]
    pub fn on_resize(&mut self, width: f64, now_ms: f64) {
        self.inner.on_resize(width, clock(now_ms));
    }

    /// Feed a batch from a native `IntersectionObserver` callback.
    #[wasm_bindgen(js_name = onIntersections)]
    pub fn on_intersections(
        &mut self,
        channel: &str,
        entries_json: &str,
        now_ms: f64,
    ) -> Result<String, JsError> {
        let channel: Channel = channel
            .parse()
            .map_err(|e: folio_core::model::UnknownChannel| JsError::new(&e.to_string()))?;
        let entries: Vec<IntersectionEntry> = from_json(entries_json, "intersection entries")?;
        to_json(&self.inner.on_intersections(channel, &entries, clock(now_ms)))
    }

    pub fn tick(&mut self, now_ms: f64) -> Result<String, JsError> {
        to_json(&self.inner.tick(clock(now_ms)))
    }

    /// When the glue should call [`tick`](Self::tick) next, if at all.
    #[wasm_bindgen(js_name = nextDeadline)]
    pub fn next_deadline(&self) -> Option<f64> {
        self.inner.next_deadline().map(|d| d as f64)
    }

    #[wasm_bindgen(js_name = toggleMenu)]
    pub fn toggle_menu(&mut self) -> Result<String, JsError> {
        to_json(&self.inner.toggle_menu())
    }

    #[wasm_bindgen(js_name = navigateTo)]
    pub fn navigate_to(&mut self, target: &str) -> Result<String, JsError> {
        let commands = self
            .inner
            .navigate_to(target)
            .map_err(|e| JsError::new(&e.to_string()))?;
        to_json(&commands)
    }

    #[wasm_bindgen(js_name = onKeyDown)]
    pub fn on_key_down(&mut self, key: &str) -> Result<String, JsError> {
        to_json(&self.inner.on_key_down(key))
    }

    #[wasm_bindgen(js_name = onMouseDown)]
    pub fn on_mouse_down(&mut self) -> Result<String, JsError> {
        to_json(&self.inner.on_mouse_down())
    }

    #[wasm_bindgen(js_name = updateField)]
    pub fn update_field(&mut self, name: &str, value: String) -> Result<String, JsError> {
        let field: Field = name.parse().map_err(|e: folio_core::model::UnknownField| {
            JsError::new(&e.to_string())
        })?;
        to_json(&self.inner.update_field(field, value))
    }

    /// Submit the contact form. Invalid input is not an error here: the
    /// returned commands show the field messages instead.
    #[wasm_bindgen(js_name = submitContact)]
    pub fn submit_contact(&mut self, now_ms: f64) -> Result<String, JsError> {
        let commands: Vec<UiCommand> = match self.inner.submit_contact(clock(now_ms)) {
            Ok(commands) => commands,
            Err(EngineError::Validation(_)) => self.inner.field_error_commands(),
            Err(EngineError::SubmissionInFlight) => Vec::new(),
            Err(e) => return Err(JsError::new(&e.to_string())),
        };
        to_json(&commands)
    }

    #[wasm_bindgen(js_name = copyContactDetail)]
    pub fn copy_contact_detail(&mut self, source: &str, text: &str) -> Result<String, JsError> {
        to_json(&self.inner.copy_contact_detail(&ElementId::from(source), text))
    }

    /// Report how a `CopyToClipboard` command ended. `error` is `None` on
    /// success.
    #[wasm_bindgen(js_name = clipboardResult)]
    pub fn clipboard_result(
        &mut self,
        source: &str,
        error: Option<String>,
        now_ms: f64,
    ) -> Result<String, JsError> {
        let outcome = error.map_or(Ok(()), Err);
        to_json(
            &self
                .inner
                .clipboard_result(&ElementId::from(source), outcome, clock(now_ms)),
        )
    }

    #[wasm_bindgen(js_name = reportFault)]
    pub fn report_fault(&mut self, fault_json: &str) {
        let fault = serde_json::from_str(fault_json).unwrap_or_else(|_| Fault::new(fault_json));
        self.inner.report_fault(fault);
    }

    #[wasm_bindgen(js_name = recordPageLoad)]
    pub fn record_page_load(&self, fetch_start_ms: f64, load_end_ms: f64) {
        self.inner.record_page_load(fetch_start_ms, load_end_ms);
    }

    #[wasm_bindgen(js_name = activeSection)]
    pub fn active_section(&self) -> Option<String> {
        self.inner.active_section().map(ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_truncates_and_clamps() {
        assert_eq!(clock(1234.9), 1234);
        assert_eq!(clock(-5.0), 0);
        assert_eq!(clock(f64::NAN), 0);
    }

    #[test]
    fn mount_returns_command_json() {
        let Ok(mut engine) = PageEngine::new(None) else {
            panic!("default engine");
        };
        let page = r##"{
            "fade_targets": ["about"],
            "nav_links": [{"anchor": "nav-about", "href": "#about"}],
            "sections": [{"id": "about"}]
        }"##;
        let Ok(json) = engine.mount(page, 0.0) else {
            panic!("mount failed");
        };
        let commands: Vec<UiCommand> = serde_json::from_str(&json).unwrap_or_default();
        assert_eq!(
            commands.first(),
            Some(&UiCommand::add_class(&"html".into(), "js-enabled"))
        );
        assert_eq!(commands.len(), 4);
    }

    #[test]
    fn invalid_submit_renders_field_errors() {
        let Ok(mut engine) = PageEngine::new(None) else {
            panic!("default engine");
        };
        let Ok(json) = engine.submit_contact(0.0) else {
            panic!("submit failed");
        };
        assert!(json.contains("Name must be at least 2 characters long"));
    }
}
