use super::progress::{TargetBounds, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityMode {
    /// Latches on the first entry and never resets.
    Once,
    /// Follows the element in and out of the viewport.
    Repeatable,
}

/// Whether `bounds` overlaps the viewport grown by `margin` pixels on each side.
///
/// A negative margin shrinks the viewport, so the element has to be that far
/// inside before it counts.
pub fn intersects(bounds: TargetBounds, viewport: Viewport, margin: f64) -> bool {
    let top = viewport.scroll_y - margin;
    let bottom = viewport.bottom() + margin;
    if bottom <= top {
        return false;
    }
    bounds.top < bottom && bounds.bottom() > top
}

#[derive(Debug, Clone)]
pub struct VisibilityGate {
    mode: VisibilityMode,
    margin: f64,
    visible: bool,
    entrances: usize,
}

impl VisibilityGate {
    /// The margin the page sections use: 100px inside the viewport.
    pub const SECTION_MARGIN: f64 = -100.0;

    pub fn new(mode: VisibilityMode, margin: f64) -> Self {
        Self {
            mode,
            margin,
            visible: false,
            entrances: 0,
        }
    }

    pub fn once() -> Self {
        Self::new(VisibilityMode::Once, Self::SECTION_MARGIN)
    }

    pub fn repeatable() -> Self {
        Self::new(VisibilityMode::Repeatable, Self::SECTION_MARGIN)
    }

    pub fn mode(&self) -> VisibilityMode {
        self.mode
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// A latched `Once` gate; further samples cannot change it.
    pub fn is_settled(&self) -> bool {
        self.mode == VisibilityMode::Once && self.visible
    }

    /// Number of false → true transitions seen so far.
    pub fn entrances(&self) -> usize {
        self.entrances
    }

    /// Feeds one intersection sample and returns the resulting visibility.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        let next = match self.mode {
            VisibilityMode::Once => self.visible || intersecting,
            VisibilityMode::Repeatable => intersecting,
        };
        if next && !self.visible {
            self.entrances += 1;
        }
        self.visible = next;
        next
    }

    pub fn observe_viewport(&mut self, bounds: TargetBounds, viewport: Viewport) -> bool {
        let hit = intersects(bounds, viewport, self.margin);
        self.observe(hit)
    }
}
