use leptos::prelude::*;
use stylance::import_crate_style;

mod components;
mod sections;

use crate::config::{current_query, PageLayout, SiteConfig};
use components::{Footer, Hero};
use sections::{BentoGrid, DeepDive};

import_crate_style!(style, "styles/app.module.css");

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::embedded().with_query(&current_query());
    log::info!("Rendering App component with {:?} layout", config.layout);

    // Reveal presets are read by each animated container.
    provide_context(config);

    view! {
        <div class=style::page>
            <BackgroundOrbs />

            <div class=style::content>
                <Hero />
                <BentoGrid />
                <Show when=move || config.layout == PageLayout::DeepDive>
                    <DeepDive />
                </Show>
                <Footer />
            </div>
        </div>
    }
}

/// Fixed, blurred gradient orbs behind everything.
#[component]
fn BackgroundOrbs() -> impl IntoView {
    view! {
        <div class=style::orbs aria-hidden="true">
            <div class=format!("{} {}", style::orb, style::orb_purple) />
            <div class=format!("{} {}", style::orb, style::orb_blue) />
        </div>
    }
}
