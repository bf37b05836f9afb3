use leptos::prelude::*;

use super::PageState;

#[component]
pub fn CursorGlow() -> impl IntoView {
    let state = expect_context::<PageState>();
    view! { <div class="cursor-glow" style=move || state.cursor.get().glow_style()></div> }
}

#[component]
pub fn NoiseOverlay() -> impl IntoView {
    view! { <div class="noise-overlay"></div> }
}
