use super::ease::Ease;
use super::keyframes::fmt_num;

/// Hidden state of an element and how it transitions to its resting state once
/// its section becomes visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
}

impl Default for Entrance {
    fn default() -> Self {
        Self {
            opacity: 0.0,
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            duration: 0.8,
            delay: 0.0,
            ease: Ease::EaseOut,
        }
    }
}

impl Entrance {
    pub fn fade() -> Self {
        Self::default()
    }

    /// Fades in while rising `y` pixels.
    pub fn rise(y: f64) -> Self {
        Self {
            y,
            ..Self::default()
        }
    }

    /// Fades in while sliding in from `x` pixels to the side.
    pub fn slide(x: f64) -> Self {
        Self {
            x,
            ..Self::default()
        }
    }

    /// Fades in while growing from `scale`.
    pub fn pop(scale: f64) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds.max(0.0);
        self
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds.max(0.0);
        self
    }

    /// Offsets the delay for the `index`-th sibling.
    pub fn stagger(self, index: usize, step: f64) -> Self {
        let delay = self.delay + index as f64 * step;
        self.delay(delay)
    }

    pub fn style(&self, visible: bool) -> String {
        let timing = format!(
            "{}s {} {}s",
            fmt_num(self.duration),
            self.ease.css(),
            fmt_num(self.delay)
        );
        let transition = format!("transition: opacity {timing}, transform {timing};");
        if visible {
            format!("opacity: 1; transform: none; {transition}")
        } else {
            format!(
                "opacity: {}; transform: translate({}px, {}px) scale({}); {transition}",
                fmt_num(self.opacity),
                fmt_num(self.x),
                fmt_num(self.y),
                fmt_num(self.scale)
            )
        }
    }
}
