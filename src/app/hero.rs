use leptos::prelude::*;

use crate::content::{SectionId, PROFILE};

use super::PageState;

#[component]
pub fn Hero() -> impl IntoView {
    let state = expect_context::<PageState>();

    view! {
        <div class="hero-wrap">
            <div class="hero-halo"></div>
            <div class="hero pt-32">
                <div class="hero-content">
                    <div class="hero-eyebrow">"✦ Hi, i'm"</div>
                    <h1 class="hero-name">
                        {PROFILE.first_name} <span>{PROFILE.last_name}</span>
                    </h1>
                    <p class="hero-tagline">
                        {PROFILE.role_line()} ": " {PROFILE.tagline}
                    </p>
                    <div class="hero-actions">
                        <button
                            class="btn btn-primary"
                            on:click=move |_| state.navigate_to(SectionId::Projects)
                        >
                            "View Projects"
                        </button>
                        <button
                            class="btn btn-outline"
                            on:click=move |_| state.navigate_to(SectionId::Contact)
                        >
                            "Get in Touch"
                        </button>
                    </div>
                </div>
                <div class="hero-scroll">
                    <div class="scroll-line"></div>
                    <span>"Scroll"</span>
                </div>
            </div>
        </div>
    }
}
