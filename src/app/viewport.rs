use std::{
    ops::ControlFlow,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use leptos::{ev, html::ElementType, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;

use crate::motion::{ScrollOffsets, TargetBounds, Viewport, ViewportSubject, VisibilityGate};

/// Creates the page's viewport subject, shares it through context and feeds
/// it from window scroll and resize events.
pub fn provide_viewport() -> ViewportSubject {
    let subject = ViewportSubject::new();
    provide_context(subject.clone());

    let publish = {
        let subject = subject.clone();
        move || {
            if let Some(viewport) = read_viewport() {
                subject.publish(viewport);
            }
        }
    };

    let _ = use_event_listener(use_window(), ev::scroll, {
        let publish = publish.clone();
        move |_| publish()
    });
    let _ = use_event_listener(use_window(), ev::resize, {
        let publish = publish.clone();
        move |_| publish()
    });
    // first measurement, once the page is in the DOM
    Effect::new(move |_| publish());

    subject
}

fn read_viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(scroll_y, height))
}

/// Document-space bounds of `element`.
fn measure(element: &web_sys::Element, viewport: Viewport) -> TargetBounds {
    let rect = element.get_bounding_client_rect();
    TargetBounds::new(rect.top() + viewport.scroll_y, rect.height())
}

/// Runs `observer` on every published viewport for as long as the calling
/// component lives, and once more when `target` mounts. Once `observer`
/// returns `ControlFlow::Break` its subscription is released.
fn observe<E>(
    target: NodeRef<E>,
    observer: impl Fn(Viewport) -> ControlFlow<()> + Send + Sync + 'static,
) where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let subject = expect_context::<ViewportSubject>();
    let finished = AtomicBool::new(false);
    let observer = Arc::new(move |viewport: Viewport| {
        if finished.load(Ordering::Relaxed) {
            return ControlFlow::Break(());
        }
        let flow = observer(viewport);
        if flow.is_break() {
            finished.store(true, Ordering::Relaxed);
        }
        flow
    });

    let subscription = subject.subscribe_until({
        let observer = Arc::clone(&observer);
        move |viewport| observer(viewport)
    });
    on_cleanup(move || subscription.unsubscribe());

    Effect::new(move |_| {
        if target.get().is_some() {
            if let Some(viewport) = subject.latest() {
                let _ = observer(viewport);
            }
        }
    });
}

/// Scroll progress of `target` through `offsets`, 0 until it is measured.
pub fn use_scroll_progress<E>(target: NodeRef<E>, offsets: ScrollOffsets) -> Signal<f64>
where
    E: ElementType,
    E::Output: JsCast + Clone + AsRef<web_sys::Element> + 'static,
{
    let (progress, set_progress) = signal(0.0);
    observe(target, move |viewport| {
        let bounds = target
            .get_untracked()
            .map(|el| measure(el.as_ref(), viewport));
        let next = offsets.progress(bounds, viewport);
        if next != progress.get_untracked() {
            set_progress.set(next);
        }
        ControlFlow::Continue(())
    });
    progress.into()
}

/// Whether `target` is shown, as decided by `gate`. A `Once` gate stops
/// listening after it latches.
pub fn use_in_view<E>(target: NodeRef<E>, gate: VisibilityGate) -> Signal<bool>
where
    E: ElementType,
    E::Output: JsCast + Clone + AsRef<web_sys::Element> + 'static,
{
    let (visible, set_visible) = signal(false);
    let gate = Arc::new(Mutex::new(gate));
    observe(target, move |viewport| {
        let Some(el) = target.get_untracked() else {
            return ControlFlow::Continue(());
        };
        let bounds = measure(el.as_ref(), viewport);
        let mut gate = gate.lock().expect("should be able to lock visibility gate");
        let shown = gate.observe_viewport(bounds, viewport);
        if shown != visible.get_untracked() {
            set_visible.set(shown);
        }
        if gate.is_settled() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    visible.into()
}
