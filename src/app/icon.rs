use leptos::prelude::*;

use crate::content::Icon;

#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <i class=format!("{} not-italic leading-none {class}", icon.class()) aria-hidden="true">
            {icon.glyph()}
        </i>
    }
}
