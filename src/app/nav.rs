use leptos::prelude::*;

use crate::content::{SectionId, PROFILE};

use super::PageState;

#[component]
pub fn NavBar() -> impl IntoView {
    let state = expect_context::<PageState>();
    let open = state.menu_open;

    view! {
        <nav class=move || if state.scrolled.get() { "nav scrolled" } else { "nav" }>
            <div class="nav-inner">
                <div class="nav-logo" on:click=move |_| state.navigate_to(SectionId::About)>
                    {PROFILE.initials}
                </div>
                <ul class="nav-links">
                    {SectionId::ALL
                        .into_iter()
                        .map(|id| {
                            view! {
                                <li
                                    class=move || if state.active.get() == id { "active" } else { "" }
                                    on:click=move |_| state.navigate_to(id)
                                >
                                    {id.anchor()}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    class="hamburger"
                    aria-label="Toggle menu"
                    aria-expanded=move || open.get().to_string()
                    on:click=move |_| state.toggle_menu()
                >
                    <span style=move || {
                        if open.get() { "transform: rotate(45deg) translate(4px, 4px);" } else { "" }
                    }></span>
                    <span style=move || if open.get() { "opacity: 0;" } else { "" }></span>
                    <span style=move || {
                        if open.get() { "transform: rotate(-45deg) translate(4px, -4px);" } else { "" }
                    }></span>
                </button>
            </div>
        </nav>
    }
}

/// Full-screen section list shown on narrow viewports.
#[component]
pub fn MobileMenu() -> impl IntoView {
    let state = expect_context::<PageState>();

    view! {
        <ul class=move || if state.menu_open.get() { "mobile-menu open" } else { "mobile-menu" }>
            {SectionId::ALL
                .into_iter()
                .map(|id| {
                    view! { <li on:click=move |_| state.navigate_to(id)>{id.anchor()}</li> }
                })
                .collect_view()}
        </ul>
    }
}
