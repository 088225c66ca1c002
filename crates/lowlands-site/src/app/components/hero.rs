use leptos::prelude::*;
use phosphor_leptos::{Icon, ARROW_DOWN};
use stylance::import_crate_style;

import_crate_style!(style, "styles/hero.module.css");

/// Page header: project badge, title, subtitle, scroll hint.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class=style::hero>
            <div class=style::badge>
                <span class=style::pulse>
                    <span class=style::pulse_ring />
                    <span class=style::pulse_dot />
                </span>
                "CGC1W Landform Regions Project"
            </div>

            <h1 class=style::title>
                "Great Lakes – "
                <br />
                <span class=style::title_accent>"St. Lawrence Lowlands"</span>
            </h1>

            <p class=style::subtitle>
                "Canada's industrial and agricultural heartland. A deep dive into the physical and human geography of the nation's most populated region."
            </p>

            <div class=style::scroll_hint>
                <Icon icon=ARROW_DOWN size="32px" />
            </div>
        </header>
    }
}
