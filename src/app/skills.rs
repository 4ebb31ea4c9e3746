use leptos::{html, prelude::*};

use super::{icon::IconGlyph, viewport::use_in_view};
use crate::{
    content::{portfolio, SkillCategory},
    motion::{fmt_num, Entrance, VisibilityGate},
    scene,
};

#[component]
pub fn Skills() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let in_view = use_in_view(section, VisibilityGate::once());
    let title = Entrance::rise(50.0);

    view! {
        <section node_ref=section class="py-20 px-4 relative">
            <div
                class="absolute inset-0 bg-gradient-to-r from-purple-900/10 to-blue-900/10"
                style=scene::skills_backdrop().style()
            />
            <div class="max-w-6xl mx-auto relative z-10">
                <h2
                    class="text-4xl md:text-5xl font-bold text-center mb-16 bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent relative"
                    style=move || title.style(in_view.get())
                >
                    <span style=scene::title_glow().style()>"Skills & Expertise"</span>
                    {(0..scene::TITLE_DOTS)
                        .map(|i| {
                            let (top, left) = scene::title_dot_position(i);
                            view! {
                                <div
                                    class="absolute w-2 h-2 bg-purple-400 rounded-full"
                                    style=format!(
                                        "top: {}%; left: {}%; {}",
                                        fmt_num(top),
                                        fmt_num(left),
                                        scene::title_dot(i).style(),
                                    )
                                />
                            }
                        })
                        .collect_view()}
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {portfolio()
                        .skills
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! { <SkillCard index=i category=category in_view=in_view /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(
    index: usize,
    category: &'static SkillCategory,
    in_view: Signal<bool>,
) -> impl IntoView {
    let side = if index % 2 == 0 { -50.0 } else { 50.0 };
    let card = Entrance::slide(side).delay(index as f64 * 0.2);
    let gradient = category.gradient.background();

    view! {
        <div
            class="bg-gray-900/50 backdrop-blur-sm rounded-2xl p-6 border border-gray-800 relative overflow-hidden group hover:-translate-y-2 hover:shadow-2xl"
            style=move || card.style(in_view.get())
        >
            <div class=format!(
                "absolute inset-0 {gradient} opacity-0 group-hover:opacity-10 transition-opacity duration-300",
            ) />
            <div class="flex items-center mb-6 relative z-10">
                <div
                    class=format!("p-3 rounded-full {gradient} mr-4 relative")
                    style=scene::skill_icon_spin().style()
                >
                    <IconGlyph icon=category.icon class="text-xl text-white" />
                    <div
                        class="absolute inset-0 rounded-full border-2 border-white/30"
                        style=scene::icon_ring(index).style()
                    />
                </div>
                <h3 class="text-xl font-semibold" style=scene::skill_title_tint().style()>
                    {category.title.clone()}
                </h3>
            </div>
            <div class="flex flex-wrap gap-2 relative z-10">
                {category
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(j, skill)| {
                        let chip = Entrance::pop(0.8)
                            .duration(0.5)
                            .delay(index as f64 * 0.2)
                            .stagger(j, 0.1);
                        view! {
                            <span
                                class=format!(
                                    "px-4 py-2 {gradient} rounded-full text-sm font-medium text-white relative overflow-hidden cursor-pointer hover:scale-110 active:scale-95",
                                )
                                style=move || chip.style(in_view.get())
                            >
                                <span class="relative z-10">{skill.clone()}</span>
                                <div
                                    class="absolute inset-0 bg-gradient-to-r from-transparent via-white/20 to-transparent"
                                    style=scene::chip_shine(j).style()
                                />
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            {(0..scene::CARD_MOTES)
                .map(|i| {
                    let (top, left) = scene::card_mote_position(index, i);
                    view! {
                        <div
                            class="absolute w-1 h-1 bg-purple-400 rounded-full"
                            style=format!(
                                "top: {}%; left: {}%; {}",
                                fmt_num(top),
                                fmt_num(left),
                                scene::card_mote(i).style(),
                            )
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
