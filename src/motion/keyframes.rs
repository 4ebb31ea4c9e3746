use std::{collections::BTreeSet, fmt::Write};

use super::ease::Ease;
use super::progress::lerp;

/// Glow color used for shadow properties.
const GLOW_RGBA: &str = "rgba(168, 85, 247, 0.6)";
/// Text colors walked by `Property::Accent`: white, purple, blue, green, white.
const ACCENTS: [&str; 5] = ["#ffffff", "#a855f7", "#3b82f6", "#22c55e", "#ffffff"];

/// Stops per cycle when a non-linear ease is baked into the keyframes.
const EASED_STOPS: u32 = 20;
/// Stops are keyed in hundredths of a percent.
const STOP_SCALE: f64 = 10_000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Property {
    /// Horizontal offset in px.
    X,
    /// Horizontal offset in percent of the element's own width.
    XPercent,
    /// Vertical offset in px.
    Y,
    /// Degrees.
    Rotate,
    Scale,
    ScaleX,
    ScaleY,
    Opacity,
    /// Blur radius of a purple box shadow, in px.
    Glow,
    /// Blur radius of a purple text shadow, in px.
    TextGlow,
    /// Horizontal background position, in percent.
    BackgroundX,
    /// Text color as a position along `ACCENTS`; 1.5 is halfway from purple to blue.
    Accent,
    /// SVG `stroke-dashoffset`, in user units.
    DashOffset,
}

impl Property {
    fn transform(self, v: f64) -> Option<String> {
        let v = fmt_num(v);
        match self {
            Self::X => Some(format!("translateX({v}px)")),
            Self::XPercent => Some(format!("translateX({v}%)")),
            Self::Y => Some(format!("translateY({v}px)")),
            Self::Rotate => Some(format!("rotate({v}deg)")),
            Self::Scale => Some(format!("scale({v})")),
            Self::ScaleX => Some(format!("scaleX({v})")),
            Self::ScaleY => Some(format!("scaleY({v})")),
            _ => None,
        }
    }

    fn declaration(self, v: f64) -> Option<String> {
        let n = fmt_num(v);
        match self {
            Self::Opacity => Some(format!("opacity: {n}")),
            Self::Glow => Some(format!("box-shadow: 0 0 {n}px {GLOW_RGBA}")),
            Self::TextGlow => Some(format!("text-shadow: 0 0 {n}px {GLOW_RGBA}")),
            Self::BackgroundX => Some(format!("background-position: {n}% 50%")),
            Self::Accent => Some(format!("color: {}", accent(v))),
            Self::DashOffset => Some(format!("stroke-dashoffset: {n}")),
            _ => None,
        }
    }
}

fn accent(v: f64) -> String {
    let last = ACCENTS.len() - 1;
    let v = v.clamp(0.0, last as f64);
    let i = (v.floor() as usize).min(last - 1);
    let t = v - i as f64;
    if t < 1e-6 {
        ACCENTS[i].to_string()
    } else if t > 1.0 - 1e-6 {
        ACCENTS[i + 1].to_string()
    } else {
        format!(
            "color-mix(in srgb, {} {}%, {})",
            ACCENTS[i + 1],
            fmt_num(t * 100.0),
            ACCENTS[i]
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Repeat {
    Infinite,
    Count(u32),
}

#[derive(Clone, Debug, PartialEq)]
struct Track {
    property: Property,
    values: Vec<f64>,
}

impl Track {
    /// Value at `phase` in [0, 1] with keyframes evenly spaced and `ease` applied
    /// within each segment.
    fn value_at(&self, phase: f64, ease: Ease) -> f64 {
        let segments = self.values.len() - 1;
        if segments == 0 {
            return self.values[0];
        }
        let pos = phase.clamp(0.0, 1.0) * segments as f64;
        let i = (pos.floor() as usize).min(segments - 1);
        let t = pos - i as f64;
        lerp(self.values[i], self.values[i + 1], ease.apply(t))
    }

    fn stops(&self) -> impl Iterator<Item = f64> + '_ {
        let segments = (self.values.len() - 1).max(1) as f64;
        (0..self.values.len()).map(move |i| i as f64 / segments)
    }
}

/// An infinite (or counted) keyframe loop over one or more properties.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeAnimation {
    name: String,
    tracks: Vec<Track>,
    duration: f64,
    delay: f64,
    ease: Ease,
    repeat: Repeat,
}

impl KeyframeAnimation {
    /// `duration` and every delay are in seconds.
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        Self {
            name: name.into(),
            tracks: Vec::new(),
            duration: duration.max(0.0),
            delay: 0.0,
            ease: Ease::default(),
            repeat: Repeat::Infinite,
        }
    }

    pub fn track(mut self, property: Property, values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        if values.is_empty() {
            return self;
        }
        self.tracks.retain(|t| t.property != property);
        self.tracks.push(Track { property, values });
        self
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Position within the current cycle, in [0, 1], `time` seconds after mount.
    pub fn phase_at(&self, time: f64) -> f64 {
        let local = time - self.delay;
        if local <= 0.0 {
            return 0.0;
        }
        if self.duration == 0.0 {
            return 1.0;
        }
        let cycles = local / self.duration;
        match self.repeat {
            Repeat::Count(n) if cycles >= n as f64 => 1.0,
            _ => cycles.fract(),
        }
    }

    pub fn sample(&self, property: Property, time: f64) -> Option<f64> {
        let phase = self.phase_at(time);
        self.tracks
            .iter()
            .find(|t| t.property == property)
            .map(|t| t.value_at(phase, self.ease))
    }

    /// Phases, in hundredths of a percent, at which `css_keyframes` emits a stop.
    ///
    /// Every track keyframe gets a stop. The ease is applied per track segment
    /// on the Rust side, so for a non-linear ease the cycle is also subdivided
    /// evenly and the browser interpolates linearly between the sampled stops.
    fn css_stops(&self) -> BTreeSet<u32> {
        let key = |phase: f64| (phase * STOP_SCALE).round() as u32;
        let mut stops = self
            .tracks
            .iter()
            .flat_map(Track::stops)
            .map(key)
            .collect::<BTreeSet<_>>();
        if self.ease != Ease::Linear {
            stops.extend((0..=EASED_STOPS).map(|i| key(i as f64 / EASED_STOPS as f64)));
        }
        stops.insert(0);
        stops.insert(key(1.0));
        stops
    }

    /// Declarations of one stop, e.g. `transform: rotate(45deg) scale(1); opacity: 0.55;`.
    fn css_frame(&self, phase: f64) -> String {
        let mut tracks = self.tracks.iter().collect::<Vec<_>>();
        tracks.sort_by_key(|t| t.property);

        let transforms = tracks
            .iter()
            .filter_map(|t| t.property.transform(t.value_at(phase, self.ease)))
            .collect::<Vec<_>>();
        let mut decls = tracks
            .iter()
            .filter_map(|t| t.property.declaration(t.value_at(phase, self.ease)))
            .collect::<Vec<_>>();
        if !transforms.is_empty() {
            decls.insert(0, format!("transform: {}", transforms.join(" ")));
        }
        decls.iter().map(|d| format!("{d};")).collect::<Vec<_>>().join(" ")
    }

    /// The `@keyframes` rule for this animation.
    pub fn css_keyframes(&self) -> String {
        let mut css = format!("@keyframes {} {{\n", self.name);
        for stop in self.css_stops() {
            let phase = stop as f64 / STOP_SCALE;
            let _ = writeln!(
                css,
                "  {}% {{ {} }}",
                fmt_num(phase * 100.0),
                self.css_frame(phase)
            );
        }
        css.push_str("}\n");
        css
    }

    /// The `animation` shorthand value. The timing function is always `linear`:
    /// easing is already baked into the keyframe stops.
    pub fn css_animation(&self) -> String {
        let count = match self.repeat {
            Repeat::Infinite => "infinite".to_string(),
            Repeat::Count(n) => n.to_string(),
        };
        format!(
            "{} {}s linear {}s {} both",
            self.name,
            fmt_num(self.duration),
            fmt_num(self.delay),
            count
        )
    }

    /// Inline style attaching this animation to an element.
    pub fn style(&self) -> String {
        format!("animation: {};", self.css_animation())
    }
}

/// Collects `@keyframes` rules, emitting each animation name once.
#[derive(Debug, Default)]
pub struct KeyframeSheet {
    names: BTreeSet<String>,
    css: String,
}

impl KeyframeSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, animation: &KeyframeAnimation) -> &mut Self {
        if self.names.insert(animation.name.clone()) {
            self.css.push_str(&animation.css_keyframes());
        }
        self
    }

    pub fn extend<'a>(&mut self, animations: impl IntoIterator<Item = &'a KeyframeAnimation>) {
        for animation in animations {
            self.add(animation);
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn css(&self) -> &str {
        &self.css
    }
}

/// Shortest decimal rendering with at most three fractional digits.
pub fn fmt_num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        s => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orb() -> KeyframeAnimation {
        KeyframeAnimation::new("orb-0", 20.0)
            .track(Property::Scale, [1.0, 1.2, 1.0])
            .track(Property::Rotate, [0.0, 180.0, 360.0])
            .track(Property::X, [0.0, 50.0, 0.0])
            .ease(Ease::Linear)
    }

    #[test]
    fn test_sample_linear_loop() {
        let anim = orb();
        assert_eq!(anim.sample(Property::Rotate, 0.0), Some(0.0));
        assert_eq!(anim.sample(Property::Rotate, 5.0), Some(90.0));
        assert_eq!(anim.sample(Property::Scale, 10.0), Some(1.2));
        assert_eq!(anim.sample(Property::X, 15.0), Some(25.0));
        // wraps around
        assert_eq!(anim.sample(Property::Rotate, 25.0), Some(90.0));
        assert_eq!(anim.sample(Property::Opacity, 1.0), None);
    }

    #[test]
    fn test_delay_holds_first_frame() {
        let anim = KeyframeAnimation::new("particle-3", 3.0)
            .track(Property::Opacity, [0.0, 1.0, 0.0])
            .delay(0.3);
        assert_eq!(anim.sample(Property::Opacity, 0.2), Some(0.0));
        let mid = anim.sample(Property::Opacity, 1.8).unwrap();
        assert!((mid - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_counted_repeat_holds_last_value() {
        let anim = KeyframeAnimation::new("fade", 1.0)
            .track(Property::Opacity, [0.0, 1.0])
            .ease(Ease::Linear)
            .repeat(Repeat::Count(2));
        assert_eq!(anim.sample(Property::Opacity, 1.5), Some(0.5));
        assert_eq!(anim.sample(Property::Opacity, 9.0), Some(1.0));
    }

    #[test]
    fn test_ease_applies_per_segment() {
        let anim = KeyframeAnimation::new("bob", 2.0)
            .track(Property::Y, [0.0, -20.0, 0.0])
            .ease(Ease::EaseIn);
        // halfway through the first segment, ease-in gives a quarter of the travel
        assert_eq!(anim.sample(Property::Y, 0.5), Some(-5.0));
    }

    fn small_orb() -> KeyframeAnimation {
        KeyframeAnimation::new("small-orb", 8.0)
            .track(Property::Scale, [0.5, 1.5, 0.5])
            .track(Property::Opacity, [0.3, 0.8, 0.3])
            .track(Property::Rotate, [0.0, 360.0])
    }

    #[test]
    fn test_eased_css_follows_sample() {
        let anim = small_orb();
        assert_eq!(anim.sample(Property::Rotate, 2.0), Some(45.0));
        let css = anim.css_keyframes();
        // a quarter into the cycle: a single-segment rotation has eased to 45deg
        assert!(css.contains("  25% { transform: rotate(45deg) scale(1); opacity: 0.55; }"));
        assert!(css.contains("  50% { transform: rotate(180deg) scale(1.5); opacity: 0.8; }"));
        assert!(anim.css_animation().starts_with("small-orb 8s linear "));
    }

    #[test]
    fn test_every_css_stop_matches_sample() {
        let mixed = KeyframeAnimation::new("mixed", 1.0)
            .track(Property::X, [0.0, 40.0])
            .track(Property::Y, [0.0, -10.0, 0.0])
            .track(Property::Rotate, [0.0, 10.0, -10.0, 0.0])
            .track(Property::Opacity, [0.0, 1.0, 0.0]);
        for anim in [mixed.clone().ease(Ease::EaseIn), mixed.ease(Ease::EaseInOut), orb()] {
            let css = anim.css_keyframes();
            let stops = anim.css_stops();
            assert!(stops.len() > 2);
            for stop in stops {
                let phase = stop as f64 / STOP_SCALE;
                if phase >= 1.0 {
                    continue;
                }
                let time = phase * anim.duration();
                let mut transforms = Vec::new();
                let mut decls = Vec::new();
                for property in [Property::X, Property::Y, Property::Rotate, Property::Scale] {
                    if let Some(v) = anim.sample(property, time) {
                        transforms.push(property.transform(v).unwrap());
                    }
                }
                if let Some(v) = anim.sample(Property::Opacity, time) {
                    decls.push(format!("opacity: {};", fmt_num(v)));
                }
                let mut expected = format!("transform: {};", transforms.join(" "));
                for d in decls {
                    expected.push(' ');
                    expected.push_str(&d);
                }
                let line = format!("  {}% {{ {expected} }}", fmt_num(phase * 100.0));
                assert!(css.contains(&line), "{} missing {line}", anim.name());
            }
        }
    }

    #[test]
    fn test_linear_tracks_only_emit_their_keyframes() {
        let css = orb().css_keyframes();
        assert_eq!(css.matches("% {").count(), 3);
    }

    #[test]
    fn test_new_properties_render() {
        let anim = KeyframeAnimation::new("misc", 3.0)
            .track(Property::XPercent, [-100.0, 100.0])
            .track(Property::Accent, [0.0, 1.0])
            .track(Property::DashOffset, [0.0, -15.0])
            .ease(Ease::Linear);
        let css = anim.css_keyframes();
        assert!(css.contains("  0% { transform: translateX(-100%); color: #ffffff; stroke-dashoffset: 0; }"));
        assert!(css.contains(
            "  100% { transform: translateX(100%); color: #a855f7; stroke-dashoffset: -15; }"
        ));
    }

    #[test]
    fn test_accent_walks_the_palette() {
        assert_eq!(accent(0.0), "#ffffff");
        assert_eq!(accent(1.0), "#a855f7");
        assert_eq!(accent(2.5), "color-mix(in srgb, #22c55e 50%, #3b82f6)");
        assert_eq!(accent(4.0), "#ffffff");
        assert_eq!(accent(9.0), "#ffffff");
        assert_eq!(accent(0.25), "color-mix(in srgb, #a855f7 25%, #ffffff)");
    }

    #[test]
    fn test_css_keyframes_combine_transforms() {
        let css = orb().css_keyframes();
        assert!(css.starts_with("@keyframes orb-0 {"));
        assert!(css.contains("0% { transform: translateX(0px) rotate(0deg) scale(1); }"));
        assert!(css.contains("50% { transform: translateX(50px) rotate(180deg) scale(1.2); }"));
        assert!(css.contains("100% { transform: translateX(0px) rotate(360deg) scale(1); }"));
    }

    #[test]
    fn test_css_keyframes_union_of_stops() {
        let anim = KeyframeAnimation::new("grid-v-1", 4.0)
            .track(Property::Opacity, [0.0, 0.5, 0.0])
            .track(Property::ScaleY, [0.0, 1.0])
            .ease(Ease::Linear);
        let css = anim.css_keyframes();
        assert!(css.contains("0% { transform: scaleY(0); opacity: 0; }"));
        assert!(css.contains("50% { transform: scaleY(0.5); opacity: 0.5; }"));
        assert!(css.contains("100% { transform: scaleY(1); opacity: 0; }"));
    }

    #[test]
    fn test_css_animation_shorthand() {
        let anim = orb().delay(1.5);
        assert_eq!(anim.css_animation(), "orb-0 20s linear 1.5s infinite both");
        assert_eq!(anim.style(), "animation: orb-0 20s linear 1.5s infinite both;");
    }

    #[test]
    fn test_sheet_dedupes_by_name() {
        let mut sheet = KeyframeSheet::new();
        sheet.add(&orb()).add(&orb());
        sheet.extend([&orb()]);
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.css().matches("@keyframes").count(), 1);
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(1.0), "1");
        assert_eq!(fmt_num(0.25), "0.25");
        assert_eq!(fmt_num(33.333333), "33.333");
        assert_eq!(fmt_num(-0.0001), "0");
        assert_eq!(fmt_num(-12.5), "-12.5");
    }
}
