use std::time::Duration;

use leptos::prelude::*;
use leptos_use::{
    use_interval_fn_with_options, use_timeout_fn, UseIntervalFnOptions, UseTimeoutFnReturn,
};

use crate::{motion::Typewriter, scene};

/// Types `text` out after `start_delay` ms, one character per 100 ms plus
/// `extra_delay` ms, followed by a blinking cursor.
#[component]
pub fn TypingText(
    #[prop(into)] text: String,
    #[prop(optional)] start_delay: u64,
    #[prop(optional)] extra_delay: u64,
) -> impl IntoView {
    let writer = Typewriter::new(text)
        .with_start_delay(Duration::from_millis(start_delay))
        .with_extra_delay(Duration::from_millis(extra_delay));
    let step = writer.step().as_millis() as u64;
    let writer = RwSignal::new(writer);

    let interval = use_interval_fn_with_options(
        move || {
            if !writer.with_untracked(|w| w.is_done()) {
                writer.update(|w| {
                    w.tick();
                });
            }
        },
        step,
        UseIntervalFnOptions::default().immediate(false),
    );

    let pause = interval.pause.clone();
    Effect::new(move |_| {
        if writer.with(|w| w.is_done()) {
            pause();
        }
    });

    let resume = interval.resume;
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            writer.update(|w| w.start());
            if !writer.with_untracked(|w| w.is_done()) {
                resume();
            }
        },
        start_delay as f64,
    );
    start(());

    view! {
        <span>
            {move || writer.with(|w| w.displayed().to_string())}
            <span class="text-purple-400" style=scene::cursor_blink().style()>
                "|"
            </span>
        </span>
    }
}
