use crate::observer::Layout;
use crate::rules::navbar::NavbarStyle;

/// Page-lifetime state shared by the engine's rules.
///
/// Held by the engine instance instead of living in globals. The scroll
/// position is written only by the scroll handler.
#[derive(Debug, Clone, Default)]
pub struct EngineContext {
    scroll_y: f64,
    viewport_width: Option<f64>,
    layout: Option<Layout>,
    navbar_style: Option<NavbarStyle>,
    keyboard_navigation: bool,
}

impl EngineContext {
    /// Last-known vertical scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Last width reported by a resize, falling back to the layout's viewport.
    pub fn viewport_width(&self) -> Option<f64> {
        self.viewport_width
            .or_else(|| self.layout.as_ref().map(|l| l.viewport.width))
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Style last painted on the navbar, if it has been painted.
    pub fn navbar_style(&self) -> Option<NavbarStyle> {
        self.navbar_style
    }

    pub fn keyboard_navigation(&self) -> bool {
        self.keyboard_navigation
    }

    pub(crate) fn record_scroll(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
    }

    pub(crate) fn record_viewport_width(&mut self, width: f64) {
        self.viewport_width = Some(width);
    }

    pub(crate) fn set_layout(&mut self, layout: Layout) {
        self.layout = Some(layout);
    }

    pub(crate) fn set_navbar_style(&mut self, style: NavbarStyle) {
        self.navbar_style = Some(style);
    }

    /// Returns `true` when the flag changed.
    pub(crate) fn set_keyboard_navigation(&mut self, on: bool) -> bool {
        let changed = self.keyboard_navigation != on;
        self.keyboard_navigation = on;
        changed
    }
}
