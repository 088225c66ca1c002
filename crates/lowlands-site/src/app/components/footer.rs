use leptos::prelude::*;
use stylance::import_crate_style;

import_crate_style!(style, "styles/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class=style::footer>
            <p>"Designed for CGC1W • December 2025"</p>
        </footer>
    }
}
