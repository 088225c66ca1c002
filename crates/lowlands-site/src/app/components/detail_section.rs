use leptos::html::Div;
use leptos::prelude::*;
use lowlands_reveal::{use_on_screen, Presentation, RevealProfile};
use stylance::import_crate_style;

use crate::config::SiteConfig;

import_crate_style!(style, "styles/detail-section.module.css");

/// Full-width deep-dive section. Same one-shot entrance as a card, with the
/// section preset: a lower threshold and a longer, deeper slide.
#[component]
pub fn DetailSection(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(optional)] delay: u32,
) -> impl IntoView {
    let profile = use_context::<SiteConfig>()
        .map(|config| config.section)
        .unwrap_or(RevealProfile::SECTION);

    let node_ref = NodeRef::<Div>::new();
    let has_been_seen = use_on_screen(node_ref, profile.threshold);
    let timing = profile.timing(delay);

    let frame_class = move || {
        let state = match Presentation::from_seen(has_been_seen.get()) {
            Presentation::Hidden => style::hidden,
            Presentation::Revealed => style::revealed,
        };
        format!("{} {state} {class}", style::frame)
    };

    view! {
        <div node_ref=node_ref class=frame_class style=timing.inline_style()>
            <section class=style::section>{children()}</section>
        </div>
    }
}
