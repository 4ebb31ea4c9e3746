use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::{icon::IconGlyph, typing::TypingText};
use crate::{
    content::{portfolio, Icon},
    motion::{fmt_num, Entrance},
    scene,
};

/// Delay before the typed lines start, in ms.
const LOAD_DELAY: f64 = 500.0;
/// Start delay of the tagline, in ms.
///
/// The tagline's 3000 ms used to be a per-character delay (100 + 3000 ms per
/// char). Here it is paid once, before typing starts at the base step.
const TAGLINE_DELAY: u64 = 3000;

#[component]
pub fn Hero() -> impl IntoView {
    let profile = &portfolio().profile;

    let (loaded, set_loaded) = signal(false);
    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| set_loaded.set(true), LOAD_DELAY);
    start(());

    // entrance transitions need one painted frame in the hidden state
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| request_animation_frame(move || set_mounted.set(true)));

    let name = Entrance::rise(50.0).duration(1.0).delay(0.2);
    let lines = Entrance::rise(30.0).duration(1.0).delay(0.5);
    let contacts = Entrance::pop(0.8).duration(1.0).delay(0.8);
    let hint = Entrance::fade().duration(1.0).delay(1.2);

    let headline = profile.headline.clone();
    let tagline = profile.tagline.clone();

    view! {
        <section class="min-h-screen flex items-center justify-center relative px-4">
            <div class="text-center z-10">
                <div
                    class="absolute inset-0 bg-gradient-to-r from-purple-600/20 via-transparent to-blue-600/20 rounded-full blur-3xl"
                    style=scene::hero_glow().style()
                />
                <div style=move || name.style(mounted.get())>
                    <h1
                        class="text-6xl md:text-8xl font-bold mb-4 bg-gradient-to-r from-purple-400 via-pink-400 to-blue-400 bg-clip-text text-transparent relative"
                        style=format!("background-size: 200% auto; {}", scene::hero_shimmer().style())
                    >
                        <span style=scene::name_glow().style()>{profile.name.clone()}</span>
                        <Sparkles />
                    </h1>
                </div>
                <div class="mb-8" style=move || lines.style(mounted.get())>
                    <p class="text-xl md:text-2xl text-gray-300 mb-2" style=scene::headline_pulse().style()>
                        <Show when=move || loaded.get()>
                            <TypingText text=headline.clone() />
                        </Show>
                    </p>
                    <p class="text-lg text-gray-400" style=scene::tagline_pulse().style()>
                        <Show when=move || loaded.get()>
                            <TypingText text=tagline.clone() start_delay=TAGLINE_DELAY />
                        </Show>
                    </p>
                </div>
                <div
                    class="flex justify-center space-x-6 mb-8"
                    style=move || contacts.style(mounted.get())
                >
                    <ContactBubbles />
                </div>
                <div style=move || hint.style(mounted.get())>
                    <ScrollHint />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Sparkles() -> impl IntoView {
    (0..scene::SPARKLES)
        .map(|i| {
            let (top, left) = scene::sparkle_position(i);
            view! {
                <div
                    class="absolute"
                    style=format!(
                        "top: {}%; left: {}%; {}",
                        fmt_num(top),
                        fmt_num(left),
                        scene::sparkle(i).style(),
                    )
                >
                    <IconGlyph icon=Icon::Sparkles class="text-base text-purple-400" />
                </div>
            }
        })
        .collect_view()
}

#[component]
fn ContactBubbles() -> impl IntoView {
    portfolio()
        .contacts
        .iter()
        .enumerate()
        .map(|(i, link)| {
            view! {
                <a
                    href=link.href.clone()
                    aria-label=link.label.clone()
                    title=link.label.clone()
                    class=format!(
                        "p-4 {} rounded-full relative overflow-hidden group",
                        link.gradient.background(),
                    )
                    style=scene::contact_bob(i).style()
                >
                    <div class="absolute inset-0 bg-white/20 rounded-full scale-0 opacity-0 transition-all duration-300 group-hover:scale-100 group-hover:opacity-100" />
                    <span class="relative z-10 inline-block transition-transform duration-300 group-hover:scale-125 group-hover:rotate-[360deg] group-active:scale-90">
                        <IconGlyph icon=link.icon class="text-xl" />
                    </span>
                    <div
                        class="absolute inset-0 bg-white/10 rounded-full"
                        style=scene::contact_ripple(i).style()
                    />
                </a>
            }
        })
        .collect_view()
}

#[component]
fn ScrollHint() -> impl IntoView {
    view! {
        <div class="text-gray-400" style=scene::scroll_hint().style()>
            <div class="w-6 h-10 border-2 border-gray-400 rounded-full mx-auto mb-2 relative overflow-hidden">
                <div
                    class="w-1 h-3 bg-gradient-to-b from-purple-400 to-blue-400 rounded-full mx-auto mt-2"
                    style=scene::scroll_dot().style()
                />
            </div>
            <p class="text-sm" style=scene::scroll_label().style()>
                "Scroll to explore"
            </p>
        </div>
    }
}
