use leptos::{html, prelude::*};

use super::{icon::IconGlyph, viewport::use_in_view};
use crate::{
    content::{copyright_year, portfolio, Icon},
    motion::{Entrance, VisibilityGate},
};

#[component]
pub fn Contact() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let in_view = use_in_view(section, VisibilityGate::once());
    let profile = &portfolio().profile;

    let title = Entrance::rise(50.0);
    let pitch = Entrance::rise(30.0).delay(0.2);
    let links = Entrance::pop(0.8).delay(0.4);
    let footer = Entrance::fade().duration(1.0).delay(0.8);

    let copyright = match copyright_year() {
        Some(year) => format!("© {year} {}. {}", profile.name, profile.footer),
        None => format!("© {}. {}", profile.name, profile.footer),
    };

    view! {
        <section node_ref=section class="py-20 px-4 relative">
            <div class="max-w-4xl mx-auto text-center">
                <h2
                    class="text-4xl md:text-5xl font-bold mb-8 bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent"
                    style=move || title.style(in_view.get())
                >
                    "Let's Connect"
                </h2>
                <p class="text-xl text-gray-300 mb-12" style=move || pitch.style(in_view.get())>
                    "Ready to bring your ideas to life? Let's collaborate!"
                </p>
                <div
                    class="flex flex-col sm:flex-row justify-center items-center space-y-4 sm:space-y-0 sm:space-x-8"
                    style=move || links.style(in_view.get())
                >
                    <a
                        href=profile.mailto()
                        class="flex items-center space-x-3 bg-gradient-to-r from-purple-600 to-blue-600 px-8 py-4 rounded-full text-white font-semibold hover:shadow-lg hover:-translate-y-1 active:scale-95 transition-all duration-300"
                    >
                        <IconGlyph icon=Icon::Mail class="text-lg" />
                        <span>{profile.email.clone()}</span>
                    </a>
                    <a
                        href=profile.phone_href.clone()
                        class="flex items-center space-x-3 bg-gradient-to-r from-green-600 to-blue-600 px-8 py-4 rounded-full text-white font-semibold hover:shadow-lg hover:-translate-y-1 active:scale-95 transition-all duration-300"
                    >
                        <IconGlyph icon=Icon::Phone class="text-lg" />
                        <span>{profile.phone.clone()}</span>
                    </a>
                </div>
                <div
                    class="mt-16 pt-8 border-t border-white/10"
                    style=move || footer.style(in_view.get())
                >
                    <p class="text-gray-400">{copyright}</p>
                </div>
            </div>
        </section>
    }
}
