use leptos::prelude::*;

use super::icon::IconGlyph;
use crate::{
    content::Icon,
    motion::fmt_num,
    scene::{self, PARALLAX},
};

const LARGE_ORBS: [&str; 3] = [
    "top-20 left-20 w-72 h-72 bg-purple-500/10",
    "top-40 right-20 w-96 h-96 bg-blue-500/10",
    "bottom-20 left-1/2 w-80 h-80 bg-pink-500/10",
];

const FLOATING: [(Icon, &str); scene::FLOATING_ICONS] = [
    (Icon::Code, "top-1/4 left-1/4"),
    (Icon::Database, "top-1/3 right-1/4"),
    (Icon::Brain, "bottom-1/3 left-1/3"),
    (Icon::Globe, "bottom-1/4 right-1/3"),
    (Icon::Star, "top-1/2 left-1/6"),
    (Icon::Zap, "top-2/3 right-1/6"),
];

fn at(top: f64, left: f64, animation: &str) -> String {
    format!("top: {}%; left: {}%; {animation}", fmt_num(top), fmt_num(left))
}

/// Decorative layer behind every section. `progress` is the page progress and
/// shifts the orbs for a parallax effect.
#[component]
pub fn Background(#[prop(into)] progress: Signal<f64>) -> impl IntoView {
    let shift = move || {
        format!(
            "transform: translateY({}%);",
            fmt_num(PARALLAX.map(progress.get()))
        )
    };

    view! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            <div class="absolute inset-0" style=shift>
                {LARGE_ORBS
                    .iter()
                    .enumerate()
                    .map(|(i, class)| {
                        view! {
                            <div
                                class=format!("absolute rounded-full blur-3xl {class}")
                                style=scene::large_orb(i).style()
                            />
                        }
                    })
                    .collect_view()}
                {(0..scene::SMALL_ORBS)
                    .map(|i| {
                        let (top, left) = scene::small_orb_position(i);
                        view! {
                            <div
                                class="absolute w-20 h-20 bg-gradient-to-r from-purple-500/20 to-blue-500/20 rounded-full blur-xl"
                                style=at(top, left, &scene::small_orb(i).style())
                            />
                        }
                    })
                    .collect_view()}
            </div>
            {(0..scene::PARTICLES)
                .map(|i| {
                    let (top, left) = scene::particle_position(i);
                    view! {
                        <div
                            class="absolute w-1 h-1 bg-purple-400 rounded-full"
                            style=at(top, left, &scene::particle(i).style())
                        />
                    }
                })
                .collect_view()}
            {FLOATING
                .iter()
                .enumerate()
                .map(|(i, (icon, place))| {
                    view! {
                        <div class=format!("absolute {place}") style=scene::floating_icon(i).style()>
                            <IconGlyph icon=*icon class="text-2xl text-purple-400/30" />
                        </div>
                    }
                })
                .collect_view()}
            <GridLines />
        </div>
    }
}

#[component]
fn GridLines() -> impl IntoView {
    view! {
        <div class="absolute inset-0 opacity-10">
            {(0..scene::GRID_COLUMNS)
                .map(|i| {
                    view! {
                        <div
                            class="absolute w-px h-full bg-gradient-to-b from-transparent via-purple-500 to-transparent"
                            style=format!(
                                "left: {}%; {}",
                                fmt_num(scene::grid_column_left(i)),
                                scene::grid_column(i).style(),
                            )
                        />
                    }
                })
                .collect_view()}
            {(0..scene::GRID_ROWS)
                .map(|i| {
                    view! {
                        <div
                            class="absolute h-px w-full bg-gradient-to-r from-transparent via-blue-500 to-transparent"
                            style=format!(
                                "top: {}%; {}",
                                fmt_num(scene::grid_row_top(i)),
                                scene::grid_row(i).style(),
                            )
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
