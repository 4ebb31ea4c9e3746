use leptos::{html, prelude::*};

use super::{
    icon::IconGlyph,
    viewport::{use_in_view, use_scroll_progress},
};
use crate::{
    content::{portfolio, Experience as Role, Icon},
    motion::{fmt_num, Entrance, ScrollOffsets, VisibilityGate},
    scene::{self, CardMotion, CARD_SLOT, JOURNEY},
};

const DUST: usize = 20;
const JOURNEY_PATH: &str = "M100,100 Q300,200 200,400 T400,600 Q600,700 400,900 T600,1100";
const MILESTONES: [(u32, u32); 3] = [(100, 100), (200, 400), (400, 900)];
/// Soft glow around the journey path: the blurred stroke merged under the original.
const GLOW_FILTER: &str = r#"<filter id="glow"><feGaussianBlur stdDeviation="3" result="coloredBlur"/><feMerge><feMergeNode in="coloredBlur"/><feMergeNode in="SourceGraphic"/></feMerge></filter>"#;
/// Section progress after which the closing block appears.
const FINALE_AT: f64 = 0.8;

/// Experience timeline. Unlike the other sections its title replays every
/// time it scrolls back into view, and the cards follow scroll progress.
#[component]
pub fn Experience() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let in_view = use_in_view(section, VisibilityGate::repeatable());
    let progress = use_scroll_progress(section, ScrollOffsets::THROUGH_VIEWPORT);

    let percent = Memo::new(move |_| JOURNEY.percent.map(progress.get()));
    let path_length = Memo::new(move |_| JOURNEY.path_length.map(progress.get()));
    let opacity = Memo::new(move |_| JOURNEY.opacity.map(progress.get()));

    let title = Entrance::rise(50.0);
    let finale = Entrance::pop(0.8).duration(1.0);

    view! {
        <section node_ref=section class="py-32 px-4 relative overflow-hidden min-h-screen">
            <div
                class="absolute inset-0"
                style=move || format!("opacity: {};", fmt_num(opacity.get() * 0.3))
            >
                {(0..DUST)
                    .map(|i| {
                        let (top, left) = scene::journey_dust_position(i);
                        view! {
                            <div
                                class="absolute w-1 h-1 bg-purple-400 rounded-full"
                                style=format!(
                                    "top: {}%; left: {}%; {}",
                                    fmt_num(top),
                                    fmt_num(left),
                                    scene::journey_dust(i).style(),
                                )
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <div class="max-w-6xl mx-auto relative z-10">
                <div class="text-center mb-20" style=move || title.style(in_view.get())>
                    <h2
                        class="text-5xl md:text-7xl font-bold mb-6 bg-gradient-to-r from-green-400 via-blue-400 to-purple-400 bg-clip-text text-transparent"
                        style=format!(
                            "background-size: 200% auto; {}",
                            scene::journey_shimmer().style(),
                        )
                    >
                        <span style=scene::title_glow().style()>"My Professional Journey"</span>
                    </h2>
                    <div class="w-64 h-2 bg-gray-800 rounded-full mx-auto mb-4 overflow-hidden">
                        <div
                            class="h-full bg-gradient-to-r from-green-400 via-blue-400 to-purple-400 rounded-full"
                            style=move || format!("width: {}%;", fmt_num(percent.get()))
                        />
                    </div>
                    <p class="text-gray-400 text-sm" style=scene::progress_label().style()>
                        {move || {
                            format!(
                                "Scroll to explore the journey • {}% complete",
                                percent.get().round(),
                            )
                        }}
                    </p>
                </div>

                <div class="relative">
                    <svg
                        class="absolute inset-0 w-full h-full pointer-events-none"
                        viewBox="0 0 800 1200"
                        preserveAspectRatio="none"
                        style=move || format!("opacity: {};", fmt_num(opacity.get()))
                    >
                        <defs>
                            <linearGradient id="journeyGradient" x1="0%" y1="0%" x2="100%" y2="100%">
                                <stop offset="0%" stop-color="#22c55e" />
                                <stop offset="50%" stop-color="#3b82f6" />
                                <stop offset="100%" stop-color="#a855f7" />
                            </linearGradient>
                            // reveals the dashed path as far as the scroll has drawn it
                            <mask
                                id="journeyReveal"
                                maskUnits="userSpaceOnUse"
                                x="0"
                                y="0"
                                width="800"
                                height="1200"
                            >
                                <path
                                    d=JOURNEY_PATH
                                    stroke="white"
                                    stroke-width="16"
                                    fill="none"
                                    pathLength="1"
                                    stroke-dasharray="1 1"
                                    stroke-dashoffset=move || fmt_num(1.0 - path_length.get())
                                />
                            </mask>
                        </defs>
                        <defs inner_html=GLOW_FILTER />
                        <path
                            d=JOURNEY_PATH
                            stroke="url(#journeyGradient)"
                            stroke-width="4"
                            fill="none"
                            filter="url(#glow)"
                            mask="url(#journeyReveal)"
                            stroke-dasharray="10 5"
                            style=scene::dash_flow().style()
                        />
                        {MILESTONES
                            .iter()
                            .enumerate()
                            .map(|(i, (cx, cy))| {
                                let reached = move || progress.get() > (i + 1) as f64 * CARD_SLOT;
                                view! {
                                    <circle
                                        cx=cx.to_string()
                                        cy=cy.to_string()
                                        r="8"
                                        fill="url(#journeyGradient)"
                                        style=move || {
                                            if reached() {
                                                format!(
                                                    "transform-box: fill-box; transform-origin: center; {}",
                                                    scene::timeline_node().style(),
                                                )
                                            } else {
                                                "transform: scale(0);".to_string()
                                            }
                                        }
                                    />
                                }
                            })
                            .collect_view()}
                    </svg>

                    <div class="space-y-32">
                        {portfolio()
                            .experience
                            .iter()
                            .enumerate()
                            .map(|(i, role)| {
                                view! { <JourneyCard index=i role=role progress=progress /> }
                            })
                            .collect_view()}
                    </div>

                    <div
                        class="text-center mt-20"
                        style=move || finale.style(progress.get() > FINALE_AT)
                    >
                        <div
                            class="inline-block p-6 bg-gradient-to-r from-purple-600 via-blue-600 to-green-600 rounded-full mb-4"
                            style=scene::journey_star().style()
                        >
                            <IconGlyph icon=Icon::Star class="text-3xl text-white" />
                        </div>
                        <h3 class="text-2xl font-bold text-white mb-2" style=scene::name_glow().style()>
                            "Journey Continues..."
                        </h3>
                        <p class="text-gray-400">"Always learning, always growing"</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn JourneyCard(index: usize, role: &'static Role, progress: Signal<f64>) -> impl IntoView {
    let motion = CardMotion::for_index(index);
    let frame = Memo::new(move |_| motion.frame(progress.get()));
    let left = index % 2 == 0;
    let gradient = role.gradient.background();
    let (row, card, joint) = if left {
        ("justify-start", "mr-auto", "-right-4")
    } else {
        ("justify-end", "ml-auto", "-left-4")
    };

    view! {
        <div
            class=format!("relative flex items-center {row}")
            style=move || frame.get().style()
        >
            <div
                class="absolute top-0 left-1/2 z-20 transition-transform duration-700"
                style=move || {
                    if frame.get().progress > 0.3 {
                        "transform: translate(-50%, -2rem) scale(1) rotate(0deg);"
                    } else {
                        "transform: translate(-50%, -2rem) scale(0) rotate(-180deg);"
                    }
                }
            >
                <div class=format!(
                    "px-4 py-2 {gradient} rounded-full text-white text-sm font-bold shadow-lg",
                )>{role.milestone.clone()}</div>
            </div>

            <div class=format!(
                "w-full max-w-lg {card} transition-transform duration-300 hover:scale-[1.02]",
            )>
                <div class="bg-gray-900/80 backdrop-blur-lg rounded-3xl p-8 border border-gray-700 relative overflow-hidden shadow-2xl">
                    <div
                        class=format!(
                            "absolute -top-10 -right-10 w-32 h-32 {gradient} rounded-full opacity-10 blur-2xl",
                        )
                        style=scene::card_blob(index).style()
                    />
                    <div class="absolute top-6 right-6" style=scene::card_icon_bob(index).style()>
                        <div class=format!("p-3 {gradient} rounded-xl shadow-lg")>
                            <IconGlyph icon=role.icon class="text-xl text-white" />
                        </div>
                    </div>
                    <div
                        class=format!(
                            "absolute top-1/2 {joint} w-8 h-8 {gradient} rounded-full -translate-y-1/2 shadow-lg",
                        )
                        style=scene::timeline_joint(index).style()
                    >
                        {(0..scene::JOINT_RINGS)
                            .map(|ring| {
                                view! {
                                    <div
                                        class="absolute inset-0 border-2 border-white/30 rounded-full"
                                        style=scene::joint_ring(index, ring).style()
                                    />
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="relative z-10">
                        <div class="flex items-center mb-4" style=scene::period_drift(index).style()>
                            <IconGlyph icon=Icon::Calendar class="text-sm text-gray-400 mr-2" />
                            <span class="text-sm text-gray-400 bg-gray-800 px-3 py-1 rounded-full">
                                {role.period.clone()}
                            </span>
                        </div>
                        <h3 class="text-2xl font-bold mb-2 text-white" style=scene::role_tint(index).style()>
                            {role.title.clone()}
                        </h3>
                        <h4
                            class=format!("text-xl font-semibold mb-6 {}", role.gradient.text())
                            style=format!(
                                "background-size: 200% auto; {}",
                                scene::company_shimmer(index).style(),
                            )
                        >
                            {role.company.clone()}
                        </h4>
                        <ul class="space-y-3">
                            {role
                                .description
                                .iter()
                                .enumerate()
                                .map(|(j, item)| {
                                    let bullet = Entrance::slide(-20.0).duration(0.6).stagger(j, 0.1);
                                    view! {
                                        <li
                                            class="text-gray-300 text-sm flex items-start group/item"
                                            style=move || bullet.style(frame.get().progress > 0.5)
                                        >
                                            <div
                                                class=format!(
                                                    "w-2 h-2 {gradient} rounded-full mt-2 mr-3 flex-shrink-0",
                                                )
                                                style=scene::bullet_dot(j).style()
                                            />
                                            <span class="group-hover/item:text-purple-300 transition-colors duration-300">
                                                {item.clone()}
                                            </span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="absolute bottom-4 left-4 right-4 h-1 bg-gray-800 rounded-full overflow-hidden">
                        <div
                            class=format!("h-full {gradient} rounded-full")
                            style=move || {
                                format!("width: {}%;", fmt_num(frame.get().progress * 100.0))
                            }
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
