use std::collections::HashMap;

use folio_protocol::{ElementId, Margins, Rect, ViewportSize};
use serde::{Deserialize, Serialize};

/// Observation options for one observer: how much of a target must be
/// visible, and how the viewport (the root) is grown or shrunk first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: Margins,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: Margins::ZERO,
        }
    }
}

impl ObserverOptions {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            root_margin: Margins::ZERO,
        }
    }

    pub fn with_root_margin(mut self, margin: Margins) -> Self {
        self.root_margin = margin;
        self
    }

    /// Whether a measurement satisfies this observer.
    ///
    /// A zero threshold accepts any overlap, including a zero-area edge
    /// contact; otherwise the visible fraction must reach the threshold.
    pub fn qualifies(&self, measurement: &Measurement) -> bool {
        if self.threshold <= 0.0 {
            measurement.intersecting
        } else {
            measurement.intersecting && measurement.ratio >= self.threshold
        }
    }
}

/// One target's overlap with the observation root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub intersecting: bool,
    /// Visible area over total area, in `[0, 1]`.
    pub ratio: f64,
}

/// Measure how much of `target` lies inside `root` (both in client space).
pub fn measure(target: &Rect, root: &Rect) -> Measurement {
    match target.intersection(root) {
        None => Measurement {
            intersecting: false,
            ratio: 0.0,
        },
        Some(overlap) => {
            let area = target.area();
            // Degenerate boxes count as fully visible once they touch the root.
            let ratio = if area > 0.0 {
                (overlap.area() / area).clamp(0.0, 1.0)
            } else {
                1.0
            };
            Measurement {
                intersecting: true,
                ratio,
            }
        }
    }
}

/// A single change notification, delivered in observation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    pub target: ElementId,
    pub is_intersecting: bool,
    #[serde(default)]
    pub ratio: f64,
}

/// Element boxes in document coordinates plus the viewport they are seen
/// through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub viewport: ViewportSize,
    #[serde(default)]
    pub boxes: HashMap<ElementId, Rect>,
}

impl Layout {
    pub fn new(viewport: ViewportSize) -> Self {
        Self {
            viewport,
            boxes: HashMap::new(),
        }
    }

    pub fn with_box(mut self, id: impl Into<ElementId>, rect: Rect) -> Self {
        self.boxes.insert(id.into(), rect);
        self
    }

    pub fn document_rect(&self, id: &str) -> Option<&Rect> {
        self.boxes.get(id)
    }

    /// The element's box relative to the viewport at scroll offset `scroll_y`.
    pub fn client_rect(&self, id: &str, scroll_y: f64) -> Option<Rect> {
        self.boxes.get(id).map(|r| r.translate(0.0, -scroll_y))
    }
}

#[derive(Debug, Clone)]
struct Subscription {
    target: ElementId,
    /// Last qualification reported; `None` until the first evaluation.
    last: Option<bool>,
}

/// Registry of observed targets sharing one set of options.
///
/// Unsubscribing is synchronous: once `unobserve` returns, no later
/// evaluation or batch will report the target again.
#[derive(Debug, Clone)]
pub struct IntersectionObserver {
    options: ObserverOptions,
    subscriptions: Vec<Subscription>,
}

impl IntersectionObserver {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            subscriptions: Vec::new(),
        }
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    /// Start observing `target`. Observing twice is a no-op.
    pub fn observe(&mut self, target: ElementId) {
        if self.is_observing(&target) {
            return;
        }
        self.subscriptions.push(Subscription { target, last: None });
    }

    /// Stop observing `target`. Returns whether it was observed.
    pub fn unobserve(&mut self, target: &str) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.target != *target);
        self.subscriptions.len() != before
    }

    pub fn disconnect(&mut self) {
        self.subscriptions.clear();
    }

    pub fn is_observing(&self, target: &str) -> bool {
        self.subscriptions.iter().any(|s| s.target == *target)
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Re-measure every observed target against the layout and report the
    /// ones whose qualification changed since the previous evaluation.
    ///
    /// The first evaluation of a target always reports it, matching the
    /// initial notification a browser delivers on `observe`. Targets without
    /// a layout box are skipped until one appears.
    pub fn evaluate(&mut self, layout: &Layout, scroll_y: f64) -> Vec<IntersectionEntry> {
        let root = layout
            .viewport
            .client_rect()
            .expand(&self.options.root_margin);
        let mut entries = Vec::new();

        for sub in &mut self.subscriptions {
            let Some(rect) = layout.client_rect(&sub.target, scroll_y) else {
                continue;
            };
            let m = measure(&rect, &root);
            let qualified = self.options.qualifies(&m);
            if sub.last != Some(qualified) {
                sub.last = Some(qualified);
                entries.push(IntersectionEntry {
                    target: sub.target.clone(),
                    is_intersecting: qualified,
                    ratio: m.ratio,
                });
            }
        }
        entries
    }
}
