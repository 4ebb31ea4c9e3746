//! Browser-independent motion primitives: scroll progress, interpolation,
//! visibility gating, the typing effect and keyframe loops.
//!
//! Nothing here touches the DOM. The `app` layer feeds viewport metrics and
//! timer ticks in and renders the resulting values.

mod ease;
mod entrance;
mod keyframes;
mod progress;
mod scatter;
mod subject;
mod typing;
mod visibility;

use thiserror::Error;

pub use ease::Ease;
pub use entrance::Entrance;
pub use keyframes::{fmt_num, KeyframeAnimation, KeyframeSheet, Property, Repeat};
pub use progress::{
    lerp, Intersection, Mapping, ScrollOffsets, ScrollRange, TargetBounds, Viewport,
};
pub use scatter::{scatter, scatter_range};
pub use subject::{Subscription, ViewportSubject};
pub use typing::{Typewriter, TypingState, BASE_STEP};
pub use visibility::{intersects, VisibilityGate, VisibilityMode};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    #[error("invalid breakpoints: {0}")]
    Breakpoints(String),
}
