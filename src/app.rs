mod background;
mod contact;
mod education;
mod experience;
mod hero;
mod icon;
mod projects;
mod skills;
mod typing;
mod viewport;

use background::Background;
use contact::Contact;
use education::Education;
use experience::Experience;
use hero::Hero;
use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use projects::Projects;
use skills::Skills;
use viewport::{provide_viewport, use_scroll_progress};

use crate::{content::portfolio, motion::ScrollOffsets, scene};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/animated-portfolio.css" />
                <MetaTags />
            </head>
            <body class="bg-black">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", portfolio().profile.name) />
        // every keyframe loop on the page, generated once
        <Style id="keyframes">{scene::STYLESHEET.as_str()}</Style>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=PortfolioPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    provide_viewport();
    let container = NodeRef::<html::Div>::new();
    let progress = use_scroll_progress(container, ScrollOffsets::CONTAINED);

    view! {
        <Title text="Portfolio" />
        <div node_ref=container class="min-h-screen bg-black text-white overflow-hidden relative">
            <Background progress=progress />
            <Hero />
            <Skills />
            <Experience />
            <Projects />
            <Education />
            <Contact />
        </div>
    }
}
