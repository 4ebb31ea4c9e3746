use leptos::{html, prelude::*};

use super::{icon::IconGlyph, viewport::use_in_view};
use crate::{
    content::{portfolio, Icon},
    motion::{Entrance, VisibilityGate},
    scene,
};

#[component]
pub fn Education() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let in_view = use_in_view(section, VisibilityGate::once());
    let portfolio = portfolio();

    let title = Entrance::rise(50.0);
    let degrees = Entrance::slide(-50.0);
    let certs = Entrance::slide(50.0).delay(0.2);

    view! {
        <section node_ref=section class="py-20 px-4 relative">
            <div class="max-w-4xl mx-auto">
                <h2
                    class="text-4xl md:text-5xl font-bold text-center mb-16 bg-gradient-to-r from-yellow-400 to-orange-400 bg-clip-text text-transparent"
                    style=move || title.style(in_view.get())
                >
                    "Education & Certifications"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    <div class="space-y-8" style=move || degrees.style(in_view.get())>
                        {portfolio
                            .education
                            .iter()
                            .map(|edu| {
                                view! {
                                    <div class="bg-white/5 backdrop-blur-sm rounded-2xl p-6 border border-white/10 hover:-translate-y-1">
                                        <div
                                            class=format!(
                                                "w-12 h-12 {} rounded-xl mb-6 flex items-center justify-center",
                                                edu.gradient.background(),
                                            )
                                            style=scene::award_spin(0).style()
                                        >
                                            <IconGlyph icon=Icon::Award class="text-xl text-white" />
                                        </div>
                                        <h3 class="text-xl font-bold mb-2">{edu.degree.clone()}</h3>
                                        <p class="text-purple-400 font-semibold mb-2">
                                            {format!("Specialization: {}", edu.specialization)}
                                        </p>
                                        <p class="text-gray-300 mb-2">{edu.institution.clone()}</p>
                                        <p class="text-gray-400 text-sm mb-4">{edu.period.clone()}</p>
                                        <div class="flex items-center">
                                            <span class="text-2xl font-bold text-green-400">
                                                {edu.score.clone()}
                                            </span>
                                            <span class="text-gray-400 ml-2">{edu.scale.clone()}</span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div
                        class="bg-white/5 backdrop-blur-sm rounded-2xl p-6 border border-white/10 hover:-translate-y-1"
                        style=move || certs.style(in_view.get())
                    >
                        <div
                            class="w-12 h-12 bg-gradient-to-r from-green-500 to-blue-600 rounded-xl mb-6 flex items-center justify-center"
                            style=scene::award_spin(1).style()
                        >
                            <IconGlyph icon=Icon::Award class="text-xl text-white" />
                        </div>
                        <h3 class="text-xl font-bold mb-4">"Certifications"</h3>
                        <div class="space-y-4">
                            {portfolio
                                .certifications
                                .iter()
                                .enumerate()
                                .map(|(i, cert)| {
                                    let badge = Entrance::rise(20.0)
                                        .duration(0.5)
                                        .delay(0.5)
                                        .stagger(i, 0.1);
                                    view! {
                                        <div
                                            class="bg-gradient-to-r from-blue-500 to-purple-600 rounded-lg p-4"
                                            style=move || badge.style(in_view.get())
                                        >
                                            <h4 class="font-semibold text-white">{cert.title.clone()}</h4>
                                            <p class="text-blue-100 text-sm mt-1">{cert.issuer.clone()}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
