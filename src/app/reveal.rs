use leptos::{html, prelude::*};

use crate::{
    content::{SectionId, Skill},
    state::{bar_fill_style, stagger_delay},
};

use super::hooks::{use_reveal, use_section_tracking};

/// A page section that fades in the first time it scrolls into view and
/// reports its visibility to the navigation.
#[component]
pub fn Section(
    id: SectionId,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(node_ref);
    use_section_tracking(node_ref, id);

    view! {
        <section
            id=id.anchor()
            node_ref=node_ref
            class=move || {
                let visible = if revealed.get() { " visible" } else { "" };
                format!("section {class}{visible}")
            }
        >
            {children()}
        </section>
    }
}

/// Labelled proficiency bar. The fill grows from 0 once the bar is revealed,
/// starting `index` stagger steps late.
#[component]
pub fn SkillBar(skill: Skill, index: usize) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node_ref);
    let delay = stagger_delay(index);

    view! {
        <div node_ref=node_ref class="mb-[1.4rem]">
            <div class="flex justify-between mb-[0.4rem]">
                <span class="skill-name">{skill.name}</span>
                <span class="skill-category">{skill.category.label()}</span>
            </div>
            <div class="skill-track">
                <div
                    class="skill-fill"
                    style=move || bar_fill_style(skill.level, revealed.get(), delay)
                ></div>
            </div>
        </div>
    }
}
