use leptos::html::Div;
use leptos::prelude::*;
use lowlands_reveal::{use_on_screen, Presentation, RevealProfile};
use stylance::import_crate_style;

use crate::config::SiteConfig;

import_crate_style!(style, "styles/bento-card.module.css");

/// Compact grid card that fades and slides in the first time it scrolls
/// into view.
///
/// `delay` is the wait in milliseconds between detection and the start of
/// the transition, used to stagger neighbouring cards.
#[component]
pub fn BentoCard(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(optional)] delay: u32,
) -> impl IntoView {
    let profile = use_context::<SiteConfig>()
        .map(|config| config.card)
        .unwrap_or(RevealProfile::CARD);

    let node_ref = NodeRef::<Div>::new();
    let has_been_seen = use_on_screen(node_ref, profile.threshold);
    let timing = profile.timing(delay);

    let card_class = move || {
        let state = match Presentation::from_seen(has_been_seen.get()) {
            Presentation::Hidden => style::hidden,
            Presentation::Revealed => style::revealed,
        };
        format!("{} {state} {class}", style::card)
    };

    Effect::new(move |_| {
        if has_been_seen.get() {
            log::debug!(
                "bento card revealed, settles in {}ms",
                timing.settles_after_ms()
            );
        }
    });

    view! {
        <div node_ref=node_ref class=card_class style=timing.inline_style()>
            {children()}
        </div>
    }
}
