use leptos::{html, prelude::*};

use super::{icon::IconGlyph, viewport::use_in_view};
use crate::{
    content::{portfolio, Icon, Project},
    motion::{Entrance, VisibilityGate},
    scene,
};

#[component]
pub fn Projects() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let in_view = use_in_view(section, VisibilityGate::once());
    let title = Entrance::rise(50.0);

    view! {
        <section node_ref=section class="py-20 px-4 relative">
            <div class="max-w-6xl mx-auto">
                <h2
                    class="text-4xl md:text-5xl font-bold text-center mb-16 bg-gradient-to-r from-pink-400 to-red-400 bg-clip-text text-transparent"
                    style=move || title.style(in_view.get())
                >
                    "Featured Projects"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {portfolio()
                        .projects
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! { <ProjectCard index=i project=project in_view=in_view /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(index: usize, project: &'static Project, in_view: Signal<bool>) -> impl IntoView {
    let card = Entrance::rise(50.0).delay(index as f64 * 0.2);
    let gradient = project.gradient.background();

    view! {
        <div
            class="bg-white/5 backdrop-blur-sm rounded-2xl p-6 border border-white/10 group"
            style=move || card.style(in_view.get())
        >
            <div
                class=format!("w-12 h-12 {gradient} rounded-xl mb-6 flex items-center justify-center")
                style=scene::project_wobble(index).style()
            >
                <IconGlyph icon=Icon::ExternalLink class="text-xl text-white" />
            </div>
            <h3 class="text-xl font-bold mb-4 group-hover:text-purple-400 transition-colors">
                {project.title.clone()}
            </h3>
            <p class="text-gray-300 mb-6 leading-relaxed">{project.description.clone()}</p>
            <div class="flex flex-wrap gap-2">
                {project
                    .tech
                    .iter()
                    .enumerate()
                    .map(|(j, tech)| {
                        let tag = Entrance::pop(0.8)
                            .duration(0.5)
                            .delay(index as f64 * 0.2)
                            .stagger(j, 0.1);
                        view! {
                            <span
                                class=format!(
                                    "px-3 py-1 {gradient} rounded-full text-sm font-medium text-white hover:scale-105",
                                )
                                style=move || tag.style(in_view.get())
                            >
                                {tech.clone()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
