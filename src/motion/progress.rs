use super::MotionError;

/// A span of scroll offsets, in document pixels, over which progress runs from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub start: f64,
    pub end: f64,
}

impl ScrollRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// `clamp((offset - start) / (end - start), 0, 1)`.
    ///
    /// A degenerate range (`end <= start`) behaves like a step at `end`.
    pub fn progress(&self, offset: f64) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 || !span.is_finite() {
            return if offset >= self.end { 1.0 } else { 0.0 };
        }
        let p = (offset - self.start) / span;
        if p.is_nan() {
            0.0
        } else {
            p.clamp(0.0, 1.0)
        }
    }
}

/// Position and size of a tracked element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TargetBounds {
    pub top: f64,
    pub height: f64,
}

impl TargetBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// What the host environment reports on every scroll or resize.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, height: f64) -> Self {
        Self { scroll_y, height }
    }

    pub fn bottom(&self) -> f64 {
        self.scroll_y + self.height
    }
}

/// Where a progress boundary sits: the point at which `target` (0 = start edge,
/// 1 = end edge of the element) meets `viewport` (0 = top, 1 = bottom of the viewport).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub target: f64,
    pub viewport: f64,
}

impl Intersection {
    pub const START_START: Self = Self::new(0.0, 0.0);
    pub const START_END: Self = Self::new(0.0, 1.0);
    pub const END_START: Self = Self::new(1.0, 0.0);
    pub const END_END: Self = Self::new(1.0, 1.0);

    pub const fn new(target: f64, viewport: f64) -> Self {
        Self { target, viewport }
    }

    fn scroll_offset(&self, bounds: TargetBounds, viewport_height: f64) -> f64 {
        bounds.top + self.target * bounds.height - self.viewport * viewport_height
    }
}

/// A pair of intersections bounding the tracked scroll range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOffsets {
    pub start: Intersection,
    pub end: Intersection,
}

impl ScrollOffsets {
    /// From the moment the element's top enters at the bottom of the viewport
    /// until its bottom leaves at the top.
    pub const THROUGH_VIEWPORT: Self = Self {
        start: Intersection::START_END,
        end: Intersection::END_START,
    };

    /// From the element's top touching the viewport top until its bottom
    /// reaches the viewport bottom. Used for a whole-page container.
    pub const CONTAINED: Self = Self {
        start: Intersection::START_START,
        end: Intersection::END_END,
    };

    pub fn resolve(&self, bounds: TargetBounds, viewport_height: f64) -> ScrollRange {
        ScrollRange::new(
            self.start.scroll_offset(bounds, viewport_height),
            self.end.scroll_offset(bounds, viewport_height),
        )
    }

    /// Progress of a tracked element; 0 until the element has been measured.
    pub fn progress(&self, bounds: Option<TargetBounds>, viewport: Viewport) -> f64 {
        match bounds {
            Some(bounds) => self.resolve(bounds, viewport.height).progress(viewport.scroll_y),
            None => 0.0,
        }
    }
}

/// Piecewise-linear interpolation from ascending input breakpoints to output values.
///
/// Inputs below the first breakpoint map to the first output and inputs above the
/// last map to the last output.
#[derive(Debug, Clone, PartialEq)]
pub struct Mapping {
    input: Vec<f64>,
    output: Vec<f64>,
}

impl Mapping {
    pub fn new(input: &[f64], output: &[f64]) -> Result<Self, MotionError> {
        if input.len() != output.len() {
            return Err(MotionError::Breakpoints(format!(
                "{} inputs but {} outputs",
                input.len(),
                output.len()
            )));
        }
        if input.len() < 2 {
            return Err(MotionError::Breakpoints(
                "at least two breakpoints are required".to_string(),
            ));
        }
        if input.iter().chain(output).any(|v| !v.is_finite()) {
            return Err(MotionError::Breakpoints(
                "breakpoints must be finite".to_string(),
            ));
        }
        if !input.windows(2).all(|w| w[0] <= w[1]) {
            return Err(MotionError::Breakpoints(
                "inputs must be non-decreasing".to_string(),
            ));
        }
        Ok(Self {
            input: input.to_vec(),
            output: output.to_vec(),
        })
    }

    /// Two-point mapping; `[from.0, from.1] -> [to.0, to.1]`.
    pub fn linear(from: (f64, f64), to: (f64, f64)) -> Result<Self, MotionError> {
        Self::new(&[from.0, from.1], &[to.0, to.1])
    }

    pub fn map(&self, x: f64) -> f64 {
        let last = self.input.len() - 1;
        if x.is_nan() || x <= self.input[0] {
            return self.output[0];
        }
        if x >= self.input[last] {
            return self.output[last];
        }
        let idx = self.input.partition_point(|b| *b <= x);
        let (x0, x1) = (self.input[idx - 1], self.input[idx]);
        let (y0, y1) = (self.output[idx - 1], self.output[idx]);
        if x1 == x0 {
            return y1;
        }
        lerp(y0, y1, (x - x0) / (x1 - x0))
    }
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_scenario() {
        // 1000px container, 500px viewport, element spanning [200, 700]
        let range = ScrollRange::new(200.0, 700.0);
        assert_eq!(range.progress(200.0), 0.0);
        assert_eq!(range.progress(450.0), 0.5);
        assert_eq!(range.progress(700.0), 1.0);
        assert_eq!(range.progress(900.0), 1.0);
        assert_eq!(range.progress(0.0), 0.0);
    }

    #[test]
    fn test_progress_is_clamped_and_monotonic() {
        let range = ScrollRange::new(-120.0, 3400.0);
        let mut prev = 0.0;
        for step in -100..500 {
            let p = range.progress(step as f64 * 10.0);
            assert!((0.0..=1.0).contains(&p));
            assert!(p >= prev);
            prev = p;
        }
    }

    #[test]
    fn test_degenerate_range_steps_at_end() {
        let range = ScrollRange::new(500.0, 500.0);
        assert_eq!(range.progress(499.0), 0.0);
        assert_eq!(range.progress(500.0), 1.0);
        let inverted = ScrollRange::new(600.0, 100.0);
        assert_eq!(inverted.progress(50.0), 0.0);
        assert_eq!(inverted.progress(150.0), 1.0);
    }

    #[test]
    fn test_offsets_through_viewport() {
        let bounds = TargetBounds::new(1000.0, 600.0);
        let range = ScrollOffsets::THROUGH_VIEWPORT.resolve(bounds, 800.0);
        // top of element hits viewport bottom
        assert_eq!(range.start, 200.0);
        // bottom of element hits viewport top
        assert_eq!(range.end, 1600.0);
        let p = ScrollOffsets::THROUGH_VIEWPORT.progress(Some(bounds), Viewport::new(900.0, 800.0));
        assert_eq!(p, 0.5);
    }

    #[test]
    fn test_offsets_contained_saturates_at_page_bottom() {
        let bounds = TargetBounds::new(0.0, 1000.0);
        let offsets = ScrollOffsets::CONTAINED;
        assert_eq!(offsets.resolve(bounds, 500.0), ScrollRange::new(0.0, 500.0));
        assert_eq!(offsets.progress(Some(bounds), Viewport::new(250.0, 500.0)), 0.5);
        assert_eq!(offsets.progress(Some(bounds), Viewport::new(500.0, 500.0)), 1.0);
        assert_eq!(offsets.progress(Some(bounds), Viewport::new(5000.0, 500.0)), 1.0);
    }

    #[test]
    fn test_unmeasured_target_has_zero_progress() {
        let p = ScrollOffsets::THROUGH_VIEWPORT.progress(None, Viewport::new(1234.0, 700.0));
        assert_eq!(p, 0.0);
    }

    #[test]
    fn test_mapping_piecewise() {
        let opacity = Mapping::new(&[0.0, 0.3, 0.7, 1.0], &[0.0, 1.0, 1.0, 0.8]).unwrap();
        assert_eq!(opacity.map(0.0), 0.0);
        assert!((opacity.map(0.15) - 0.5).abs() < 1e-9);
        assert_eq!(opacity.map(0.3), 1.0);
        assert_eq!(opacity.map(0.5), 1.0);
        assert!((opacity.map(0.85) - 0.9).abs() < 1e-9);
        assert_eq!(opacity.map(1.0), 0.8);
    }

    #[test]
    fn test_mapping_clamps_outside_domain() {
        let path = Mapping::linear((0.0, 0.8), (0.0, 1.0)).unwrap();
        assert_eq!(path.map(-1.0), 0.0);
        assert_eq!(path.map(0.4), 0.5);
        assert_eq!(path.map(0.9), 1.0);
        assert_eq!(path.map(f64::NAN), 0.0);
    }

    #[test]
    fn test_mapping_repeated_breakpoint() {
        let step = Mapping::new(&[0.0, 0.5, 0.5, 1.0], &[0.0, 0.0, 1.0, 1.0]).unwrap();
        assert_eq!(step.map(0.25), 0.0);
        assert_eq!(step.map(0.75), 1.0);
    }

    #[test]
    fn test_mapping_rejects_bad_breakpoints() {
        assert!(Mapping::new(&[0.0, 1.0], &[0.0]).is_err());
        assert!(Mapping::new(&[0.0], &[0.0]).is_err());
        assert!(Mapping::new(&[1.0, 0.0], &[0.0, 1.0]).is_err());
        assert!(Mapping::new(&[0.0, f64::INFINITY], &[0.0, 1.0]).is_err());
    }
}
