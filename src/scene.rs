//! The page's animation catalog: every decorative keyframe loop and the
//! scroll mappings of the experience timeline.

use std::sync::LazyLock;

use crate::motion::{
    scatter, scatter_range, Ease, KeyframeAnimation, KeyframeSheet, Mapping, Property,
};

pub const SMALL_ORBS: usize = 8;
pub const PARTICLES: usize = 50;
pub const FLOATING_ICONS: usize = 6;
pub const GRID_COLUMNS: usize = 20;
pub const GRID_ROWS: usize = 15;
pub const SPARKLES: usize = 6;
pub const TITLE_DOTS: usize = 4;
/// Motes drifting inside each skill card.
pub const CARD_MOTES: usize = 3;
/// Rings pulsing out of each timeline joint.
pub const JOINT_RINGS: usize = 3;

/// Timeline cards share the scroll range in slots of this width.
pub const CARD_SLOT: f64 = 0.25;

const PARTICLE_SEED: u64 = 0x5eed_0001;
const ORB_SEED: u64 = 0x5eed_0002;
const SPARKLE_SEED: u64 = 0x5eed_0003;
const DUST_SEED: u64 = 0x5eed_0004;
const TITLE_DOT_SEED: u64 = 0x5eed_0005;
const MOTE_SEED: u64 = 0x5eed_0006;

/// All `@keyframes` rules the page needs, built once.
pub static STYLESHEET: LazyLock<String> = LazyLock::new(|| {
    let mut sheet = KeyframeSheet::new();
    sheet.extend(catalog().iter());
    log::debug!("generated {} keyframe rules", sheet.len());
    sheet.css().to_string()
});

pub static JOURNEY: LazyLock<Journey> = LazyLock::new(Journey::new);

/// Page progress to the vertical shift of the orb layer, in percent.
pub static PARALLAX: LazyLock<Mapping> = LazyLock::new(|| {
    Mapping::linear((0.0, 1.0), (0.0, -30.0)).expect("parallax breakpoints are ordered")
});

pub fn catalog() -> Vec<KeyframeAnimation> {
    let mut all = Vec::new();
    all.extend((0..3).map(large_orb));
    all.extend((0..PARTICLES).map(particle));
    // the rest share one rule across elements; only the delay differs
    all.extend([
        small_orb(0),
        floating_icon(0),
        grid_column(0),
        grid_row(0),
        hero_glow(),
        hero_shimmer(),
        name_glow(),
        sparkle(0),
        headline_pulse(),
        tagline_pulse(),
        contact_bob(0),
        contact_ripple(0),
        scroll_hint(),
        scroll_dot(),
        scroll_label(),
        cursor_blink(),
        skills_backdrop(),
        title_glow(),
        icon_ring(0),
        journey_shimmer(),
        journey_dust(0),
        timeline_node(),
        progress_label(),
        journey_star(),
        project_wobble(0),
        award_spin(0),
        award_spin(1),
        title_dot(0),
        card_mote(0),
        chip_shine(0),
        skill_icon_spin(),
        skill_title_tint(),
        card_blob(0),
        card_icon_bob(0),
        timeline_joint(0),
        period_drift(0),
        role_tint(0),
        company_shimmer(0),
        bullet_dot(0),
        dash_flow(),
    ]);
    // rings grow to different sizes, one rule each
    all.extend((0..JOINT_RINGS).map(|ring| joint_ring(0, ring)));
    all
}

pub fn large_orb(index: usize) -> KeyframeAnimation {
    let (duration, scale, rotate, x, y) = match index % 3 {
        0 => (20.0, [1.0, 1.2, 1.0], [0.0, 180.0, 360.0], [0.0, 50.0, 0.0], [0.0, -30.0, 0.0]),
        1 => (25.0, [1.2, 1.0, 1.2], [360.0, 180.0, 0.0], [0.0, -40.0, 0.0], [0.0, 40.0, 0.0]),
        _ => (30.0, [1.0, 1.3, 1.0], [0.0, -180.0, -360.0], [0.0, 60.0, 0.0], [0.0, -50.0, 0.0]),
    };
    KeyframeAnimation::new(format!("orb-{index}"), duration)
        .track(Property::Scale, scale)
        .track(Property::Rotate, rotate)
        .track(Property::X, x)
        .track(Property::Y, y)
        .ease(Ease::Linear)
}

pub fn small_orb(index: usize) -> KeyframeAnimation {
    KeyframeAnimation::new("small-orb", 8.0 + index as f64 * 2.0)
        .track(Property::Scale, [0.5, 1.5, 0.5])
        .track(Property::Opacity, [0.3, 0.8, 0.3])
        .track(Property::Rotate, [0.0, 360.0])
        .delay(index as f64 * 0.5)
}

/// `(top %, left %)` of the `index`-th small orb.
pub fn small_orb_position(index: usize) -> (f64, f64) {
    (
        scatter(ORB_SEED, index * 2) * 100.0,
        scatter(ORB_SEED, index * 2 + 1) * 100.0,
    )
}

/// Each particle drifts towards its own target, so each gets its own rule.
pub fn particle(index: usize) -> KeyframeAnimation {
    let dx = scatter_range(PARTICLE_SEED, index * 4, -100.0, 100.0).round();
    let dy = scatter_range(PARTICLE_SEED, index * 4 + 1, -100.0, 100.0).round();
    KeyframeAnimation::new(format!("particle-{index}"), 3.0)
        .track(Property::Opacity, [0.0, 1.0, 0.0])
        .track(Property::Scale, [0.0, 1.0, 0.0])
        .track(Property::X, [0.0, dx])
        .track(Property::Y, [0.0, dy])
        .delay(index as f64 * 0.1)
}

pub fn particle_position(index: usize) -> (f64, f64) {
    (
        scatter(PARTICLE_SEED, index * 4 + 2) * 100.0,
        scatter(PARTICLE_SEED, index * 4 + 3) * 100.0,
    )
}

pub fn floating_icon(index: usize) -> KeyframeAnimation {
    KeyframeAnimation::new("float-icon", 6.0)
        .track(Property::Y, [0.0, -20.0, 0.0])
        .track(Property::Rotate, [0.0, 180.0, 360.0])
        .track(Property::Scale, [1.0, 1.2, 1.0])
        .delay(index as f64)
}

pub fn grid_column(index: usize) -> KeyframeAnimation {
    KeyframeAnimation::new("grid-v", 4.0)
        .track(Property::Opacity, [0.0, 0.5, 0.0])
        .track(Property::ScaleY, [0.0, 1.0, 0.0])
        .delay(index as f64 * 0.2)
}

/// Left offset of the `index`-th vertical grid line, in percent.
pub fn grid_column_left(index: usize) -> f64 {
    (index + 1) as f64 * 100.0 / (GRID_COLUMNS as f64)
}

pub fn grid_row(index: usize) -> KeyframeAnimation {
    KeyframeAnimation::new("grid-h", 5.0)
        .track(Property::Opacity, [0.0, 0.3, 0.0])
        .track(Property::ScaleX, [0.0, 1.0, 0.0])
        .delay(index as f64 * 0.3)
}

/// Top offset of the `index`-th horizontal grid line, in percent.
pub fn grid_row_top(index: usize) -> f64 {
    (index + 1) as f64 * 100.0 / (GRID_ROWS as f64)
}

pub fn hero_glow() -> KeyframeAnimation {
    KeyframeAnimation::new("hero-glow", 10.0)
        .track(Property::Scale, [1.0, 1.2, 1.0])
        .track(Property::Rotate, [0.0, 180.0, 360.0])
}

pub fn hero_shimmer() -> KeyframeAnimation {
    KeyframeAnimation::new("hero-shimmer", 5.0)
        .track(Property::BackgroundX, [0.0, 100.0, 0.0])
        .ease(Ease::Linear)
}

pub fn name_glow() -> KeyframeAnimation {
    KeyframeAnimation::new("name-glow", 2.0).track(Property::TextGlow, [20.0, 40.0, 20.0])
}

pub fn sparkle(index: usize) -> KeyframeAnimation {
    KeyframeAnimation::new("sparkle", 2.0)
        .track(Property::Scale, [0.0, 1.0, 0.0])
        .track(Property::Rotate, [0.0, 180.0, 360.0])
        .track(Property::Opacity, [0.0, 1.0, 0.0])
        .delay(index as f64 * 0.3)
}

pub fn sparkle_position(index: usize) -> (f64, f64) {
    (
        scatter(SPARKLE_SEED, index * 2) * 100.0,
        scatter(SPARKLE_SEED, index * 2 + 1) * 100.0,
    )
}

pub fn headline_pulse() -> KeyframeAnimation {
    KeyframeAnimation::new("headline-pulse", 3.0)
        .track(Property::Opacity, [0.7, 1.0, 0.7])
        .track(Property::Y, [0.0, -5.0, 0.0])
}

pub fn tagline_pulse() -> KeyframeAnimation {
    KeyframeAnimation::new("tagline-pulse", 4.0)
        .track(Property::Opacity, [0.5, 0.8, 0.5])
        .track(Property::Scale, [1.0, 1.02, 1.0])
}

pub fn contact_bob(index: usize) -> KeyframeAnimation {
    KeyframeAnimation::new("contact-bob", 2.0)
        .track(Property::Y, [0.0, -10.0, 0.0])
        .track(Property::Glow, [0.0, 20.0, 0.0])
        .delay(index as f64 * 0.2)
}

pub fn contact_ripple(index: usize) -> KeyframeAnimation {
    KeyframeAnimation::new("contact-ripple", 2.0)
        .track(Property::Scale, [1.0, 1.5, 1.0])
        .track(Property::Opacity, [0.5, 0.0, 0.5])
        .delay(index as f64 * 0.5)
}

pub fn scroll_hint() -> KeyframeAnimation {
    KeyframeAnimation::new("scroll-hint", 2.0).track(Property::Y, [0.0, 10.0, 0.0])
}

pub fn scroll_dot() -> KeyframeAnimation {
    KeyframeAnimation::new("scroll-dot", 1.5).track(Property::Y, [0.0, 12.0, 0.0])
}

pub fn scroll_label() -> KeyframeAnimation {
    KeyframeAnimation::new("scroll-label", 2.0)
        .track(Property::Opacity, [0.5, 1.0, 0.5])
        .track(Property::Scale, [1.0, 1.05, 1.0])
}

pub fn cursor_blink() -> KeyframeAnimation {
    KeyframeAnimation::new("cursor-blink", 0.8).track(Property::Opacity, [1.0, 0.0])
}

pub fn skills_backdrop() -> KeyframeAnimation {
    KeyframeAnimation::new("skills-backdrop", 8.0)
        .track(Property::Opacity, [0.1, 0.3, 0.1])
        .track(Property::Scale, [1.0, 1.02, 1.0])
}

pub fn title_glow() -> KeyframeAnimation {
    KeyframeAnimation::new("title-glow", 3.0).track(Property::TextGlow, [20.0, 40.0, 20.0])
}

pub fn icon_ring(index: usize) -> KeyframeAnimation {
    KeyframeAnimation::new("icon-ring", 2.0)
        .track(Property::Scale, [1.0, 1.4, 1.0])
        .track(Property::Opacity, [0.6, 0.0, 0.6])
        .delay(index as f64 * 0.2)
}

pub fn journey_shimmer() -> KeyframeAnimation {
    KeyframeAnimation::new("journey-shimmer", 8.0)
        .track(Property::BackgroundX, [0.0, 100.0, 0.0])
        .ease(Ease::Linear)
}

pub fn journey_dust(index: usize) -> KeyframeAnimation {
    KeyframeAnimation::new("journey-dust", 4.0 + (index % 4) as f64)
        .track(Property::Y, [0.0, -30.0, 0.0])
        .track(Property::Opacity, [0.0, 1.0, 0.0])
        .delay(index as f64 * 0.2)
}

pub fn journey_dust_position(index: usize) -> (f64, f64) {
    (
        scatter(DUST_SEED, index * 2) * 100.0,
        scatter(DUST_SEED, index * 2 + 1) * 100.0,
    )
}

pub fn timeline_node() -> KeyframeAnimation {
    KeyframeAnimation::new("timeline-node", 2.0)
        .track(Property::Glow, [0.0, 20.0, 0.0])
        .track(Property::Scale, [1.0, 1.2, 1.0])
}

pub fn progress_label() -> KeyframeAnimation {
    KeyframeAnimation::new("progress-label", 2.0).track(Property::Opacity, [0.5, 1.0, 0.5])
}

pub fn journey_star() -> KeyframeAnimation {
    KeyframeAnimation::new("journey-star", 10.0)
        .track(Property::Rotate, [0.0, 360.0])
        .ease(Ease::Linear)
}

pub fn project_wobble(index: usize) -> KeyframeAnimation {
    KeyframeAnimation::new("project-wobble", 4.0)
        .track(Property::Rotate, [0.0, 5.0, -5.0, 0.0])
        .delay(index as f64 * 2.0)
}

/// Badges of the education cards; odd ones turn the other way.
pub fn award_spin(index: usize) -> KeyframeAnimation {
    let (name, duration, turn) = if index % 2 == 0 {
        ("award-spin", 15.0, [0.0, 360.0])
    } else {
        ("award-spin-reverse", 12.0, [360.0, 0.0])
    };
    KeyframeAnimation::new(name, duration)
        .track(Property::Rotate, turn)
        .ease(Ease::Linear)
}

pub fn title_dot(index: usize) -> KeyframeAnimation {
    KeyframeAnimation::new("title-dot", 3.0)
        .track(Property::Y, [0.0, -20.0, 0.0])
        .track(Property::Opacity, [0.0, 1.0, 0.0])
        .track(Property::Scale, [0.0, 1.0, 0.0])
        .delay(index as f64 * 0.5)
}

pub fn title_dot_position(index: usize) -> (f64, f64) {
    (
        scatter(TITLE_DOT_SEED, index * 2) * 100.0,
        scatter(TITLE_DOT_SEED, index * 2 + 1) * 100.0,
    )
}

pub fn card_mote(index: usize) -> KeyframeAnimation {
    KeyframeAnimation::new("card-mote", 4.0)
        .track(Property::Y, [0.0, -30.0, 0.0])
        .track(Property::Opacity, [0.0, 0.6, 0.0])
        .delay(index as f64 * 0.8)
}

/// Position of mote `index` inside skill card `card`; every card scatters
/// its motes differently.
pub fn card_mote_position(card: usize, index: usize) -> (f64, f64) {
    let slot = (card * CARD_MOTES + index) * 2;
    (
        scatter(MOTE_SEED, slot) * 100.0,
        scatter(MOTE_SEED, slot + 1) * 100.0,
    )
}

/// Highlight sweeping across skill chip `index`.
pub fn chip_shine(index: usize) -> KeyframeAnimation {
    KeyframeAnimation::new("chip-shine", 3.0)
        .track(Property::XPercent, [-100.0, 100.0])
        .delay(index as f64 * 0.2)
}

pub fn skill_icon_spin() -> KeyframeAnimation {
    KeyframeAnimation::new("skill-icon-spin", 10.0)
        .track(Property::Rotate, [0.0, 360.0])
        .track(Property::Scale, [1.0, 1.1, 1.0])
        .ease(Ease::Linear)
}

pub fn skill_title_tint() -> KeyframeAnimation {
    KeyframeAnimation::new("skill-title-tint", 4.0).track(Property::Accent, [0.0, 1.0, 0.0])
}

pub fn card_blob(index: usize) -> KeyframeAnimation {
    KeyframeAnimation::new("card-blob", 8.0)
        .track(Property::Scale, [1.0, 1.2, 1.0])
        .track(Property::Rotate, [0.0, 180.0, 360.0])
        .delay(index as f64 * 2.0)
}

pub fn card_icon_bob(index: usize) -> KeyframeAnimation {
    KeyframeAnimation::new("card-icon-bob", 4.0)
        .track(Property::Y, [0.0, -10.0, 0.0])
        .track(Property::Rotate, [0.0, 10.0, -10.0, 0.0])
        .delay(index as f64 * 1.5)
}

/// The dot joining experience card `index` to the timeline.
pub fn timeline_joint(index: usize) -> KeyframeAnimation {
    KeyframeAnimation::new("timeline-joint", 2.0)
        .track(Property::Scale, [1.0, 1.3, 1.0])
        .track(Property::Glow, [0.0, 20.0, 0.0])
        .delay(index as f64 * 0.7)
}

/// Ring `ring` around the joint of card `card`. Outer rings grow further and
/// start later.
pub fn joint_ring(card: usize, ring: usize) -> KeyframeAnimation {
    KeyframeAnimation::new(format!("joint-ring-{ring}"), 2.0)
        .track(Property::Scale, [1.0, 2.0 + ring as f64 * 0.5])
        .track(Property::Opacity, [0.5, 0.0])
        .delay(card as f64 * 0.7 + ring as f64 * 0.3)
}

pub fn period_drift(index: usize) -> KeyframeAnimation {
    KeyframeAnimation::new("period-drift", 3.0)
        .track(Property::X, [0.0, 5.0, 0.0])
        .delay(index as f64)
}

pub fn role_tint(index: usize) -> KeyframeAnimation {
    KeyframeAnimation::new("role-tint", 8.0)
        .track(Property::Accent, [0.0, 1.0, 2.0, 3.0, 4.0])
        .delay(index as f64 * 2.0)
}

pub fn company_shimmer(index: usize) -> KeyframeAnimation {
    KeyframeAnimation::new("company-shimmer", 5.0)
        .track(Property::BackgroundX, [0.0, 100.0, 0.0])
        .delay(index as f64 * 1.5)
}

pub fn bullet_dot(index: usize) -> KeyframeAnimation {
    KeyframeAnimation::new("bullet-dot", 3.0)
        .track(Property::Scale, [1.0, 1.5, 1.0])
        .track(Property::Rotate, [0.0, 180.0, 360.0])
        .delay(index as f64 * 0.5)
}

/// Dashes marching along the journey path; pairs with a `10 5` dash array.
pub fn dash_flow() -> KeyframeAnimation {
    KeyframeAnimation::new("dash-flow", 3.0)
        .track(Property::DashOffset, [0.0, -15.0])
        .ease(Ease::Linear)
}

/// Values the experience section derives from its scroll progress.
#[derive(Debug, Clone)]
pub struct Journey {
    pub percent: Mapping,
    pub path_length: Mapping,
    pub opacity: Mapping,
}

impl Journey {
    fn new() -> Self {
        Self {
            percent: Mapping::linear((0.0, 1.0), (0.0, 100.0))
                .expect("percent breakpoints are ordered"),
            path_length: Mapping::linear((0.0, 0.8), (0.0, 1.0))
                .expect("path breakpoints are ordered"),
            opacity: Mapping::new(&[0.0, 0.2, 0.8, 1.0], &[0.0, 1.0, 1.0, 0.0])
                .expect("opacity breakpoints are ordered"),
        }
    }
}

/// Scroll-driven motion of one timeline card.
#[derive(Debug, Clone)]
pub struct CardMotion {
    progress: Mapping,
    y: Mapping,
    opacity: Mapping,
    scale: Mapping,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardFrame {
    pub progress: f64,
    pub y: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl CardFrame {
    pub fn style(&self) -> String {
        use crate::motion::fmt_num;
        format!(
            "opacity: {}; transform: translateY({}px) scale({});",
            fmt_num(self.opacity),
            fmt_num(self.y),
            fmt_num(self.scale)
        )
    }
}

impl CardMotion {
    pub fn for_index(index: usize) -> Self {
        let start = index as f64 * CARD_SLOT;
        Self {
            progress: Mapping::linear((start, start + CARD_SLOT), (0.0, 1.0))
                .expect("card slot is ordered"),
            y: Mapping::linear((0.0, 1.0), (100.0, 0.0)).expect("card y breakpoints are ordered"),
            opacity: Mapping::new(&[0.0, 0.3, 0.7, 1.0], &[0.0, 1.0, 1.0, 0.8])
                .expect("card opacity breakpoints are ordered"),
            scale: Mapping::new(&[0.0, 0.5, 1.0], &[0.8, 1.05, 1.0])
                .expect("card scale breakpoints are ordered"),
        }
    }

    pub fn frame(&self, section_progress: f64) -> CardFrame {
        let progress = self.progress.map(section_progress);
        CardFrame {
            progress,
            y: self.y.map(progress),
            opacity: self.opacity.map(progress),
            scale: self.scale.map(progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_names_are_unique_per_rule() {
        let catalog = catalog();
        let mut seen = HashSet::new();
        for anim in &catalog {
            assert!(seen.insert(anim.name().to_string()), "duplicate {}", anim.name());
        }
        assert!(seen.contains("particle-49"));
        assert!(seen.contains("cursor-blink"));
    }

    #[test]
    fn test_stylesheet_has_every_rule() {
        let css = STYLESHEET.as_str();
        for anim in catalog() {
            assert!(css.contains(&format!("@keyframes {} {{", anim.name())));
        }
        // shared rules are emitted once no matter how many elements use them
        assert_eq!(css.matches("@keyframes float-icon {").count(), 1);
    }

    #[test]
    fn test_indices_desynchronize_delays() {
        let a = floating_icon(1).css_animation();
        let b = floating_icon(4).css_animation();
        assert_eq!(a, "float-icon 6s linear 1s infinite both");
        assert_eq!(b, "float-icon 6s linear 4s infinite both");
        assert_ne!(particle(2).css_animation(), particle(3).css_animation());
    }

    #[test]
    fn test_card_loops_stagger_by_index() {
        assert_eq!(title_dot(3).css_animation(), "title-dot 3s linear 1.5s infinite both");
        assert_eq!(card_mote(2).css_animation(), "card-mote 4s linear 1.6s infinite both");
        assert_eq!(chip_shine(4).css_animation(), "chip-shine 3s linear 0.8s infinite both");
        assert_eq!(card_blob(1).css_animation(), "card-blob 8s linear 2s infinite both");
        assert_eq!(card_icon_bob(2).css_animation(), "card-icon-bob 4s linear 3s infinite both");
        assert_eq!(period_drift(2).css_animation(), "period-drift 3s linear 2s infinite both");
        assert_eq!(role_tint(1).css_animation(), "role-tint 8s linear 2s infinite both");
        assert_eq!(
            company_shimmer(1).css_animation(),
            "company-shimmer 5s linear 1.5s infinite both"
        );
        assert_eq!(bullet_dot(3).css_animation(), "bullet-dot 3s linear 1.5s infinite both");
        assert_eq!(
            timeline_joint(2).css_animation(),
            "timeline-joint 2s linear 1.4s infinite both"
        );
    }

    #[test]
    fn test_joint_rings_grow_and_trail() {
        let rings = (0..JOINT_RINGS).map(|r| joint_ring(1, r)).collect::<Vec<_>>();
        // one second into its cycle each ring is halfway to its own size
        let mid = |ring: &KeyframeAnimation, delay: f64| {
            ring.sample(Property::Scale, delay + 1.0).unwrap_or_default()
        };
        assert!((mid(&rings[0], 0.7) - 1.5).abs() < 1e-6);
        assert!((mid(&rings[2], 1.3) - 2.0).abs() < 1e-6);
        assert_eq!(rings[0].sample(Property::Scale, 0.5), Some(1.0));
        assert_eq!(rings[1].css_animation(), "joint-ring-1 2s linear 1s infinite both");
        assert_eq!(rings[2].css_animation(), "joint-ring-2 2s linear 1.3s infinite both");
        assert!(rings[2].css_keyframes().contains("100% { transform: scale(3); opacity: 0; }"));
    }

    #[test]
    fn test_text_loops_walk_accents() {
        let title = skill_title_tint().css_keyframes();
        assert!(title.contains("  50% { color: #a855f7; }"));
        assert!(title.contains("  100% { color: #ffffff; }"));
        let role = role_tint(0).css_keyframes();
        assert!(role.contains("  25% { color: #a855f7; }"));
        assert!(role.contains("  50% { color: #3b82f6; }"));
        assert!(role.contains("  75% { color: #22c55e; }"));
    }

    #[test]
    fn test_dash_flow_and_shine_are_linear_sweeps() {
        let flow = dash_flow().css_keyframes();
        assert!(flow.contains("  0% { stroke-dashoffset: 0; }"));
        assert!(flow.contains("  100% { stroke-dashoffset: -15; }"));
        assert_eq!(flow.matches("% {").count(), 2);
        assert_eq!(chip_shine(0).sample(Property::XPercent, 1.5), Some(0.0));
        assert_eq!(skill_icon_spin().sample(Property::Rotate, 2.5), Some(90.0));
    }

    #[test]
    fn test_positions_are_stable_percentages() {
        for card in 0..4 {
            for i in 0..CARD_MOTES {
                let (top, left) = card_mote_position(card, i);
                assert!((0.0..100.0).contains(&top));
                assert!((0.0..100.0).contains(&left));
            }
        }
        assert_ne!(card_mote_position(0, 0), card_mote_position(1, 0));
        for i in 0..TITLE_DOTS {
            let (top, left) = title_dot_position(i);
            assert!((0.0..100.0).contains(&top) && (0.0..100.0).contains(&left));
        }
        for i in 0..PARTICLES {
            let (top, left) = particle_position(i);
            assert!((0.0..100.0).contains(&top));
            assert!((0.0..100.0).contains(&left));
            assert_eq!(particle_position(i), (top, left));
        }
        assert_eq!(grid_column_left(0), 5.0);
        assert_eq!(grid_column_left(GRID_COLUMNS - 1), 100.0);
        assert!((grid_row_top(0) - 6.667).abs() < 1e-3);
    }

    #[test]
    fn test_journey_mappings() {
        let j = &*JOURNEY;
        assert_eq!(j.percent.map(0.37), 37.0);
        assert_eq!(j.path_length.map(0.4), 0.5);
        assert_eq!(j.path_length.map(0.95), 1.0);
        assert_eq!(j.opacity.map(0.1), 0.5);
        assert_eq!(j.opacity.map(0.5), 1.0);
        assert_eq!(j.opacity.map(1.0), 0.0);
    }

    #[test]
    fn test_parallax_follows_page_progress() {
        assert_eq!(PARALLAX.map(0.0), 0.0);
        assert_eq!(PARALLAX.map(0.5), -15.0);
        assert_eq!(PARALLAX.map(2.0), -30.0);
    }

    #[test]
    fn test_card_frames_follow_slots() {
        let second = CardMotion::for_index(1);
        let before = second.frame(0.1);
        assert_eq!(before.progress, 0.0);
        assert_eq!(before.y, 100.0);
        assert_eq!(before.opacity, 0.0);
        assert_eq!(before.scale, 0.8);

        let mid = second.frame(0.375);
        assert_eq!(mid.progress, 0.5);
        assert_eq!(mid.y, 50.0);
        assert_eq!(mid.opacity, 1.0);
        assert_eq!(mid.scale, 1.05);

        let after = second.frame(0.9);
        assert_eq!(after.progress, 1.0);
        assert_eq!(after.y, 0.0);
        assert_eq!(after.opacity, 0.8);
        assert_eq!(after.scale, 1.0);
        assert_eq!(
            after.style(),
            "opacity: 0.8; transform: translateY(0px) scale(1);"
        );
    }
}
