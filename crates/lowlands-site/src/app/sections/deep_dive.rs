use leptos::prelude::*;
use phosphor_leptos::{Icon, BOAT, PLANT, SNOWFLAKE, THERMOMETER};
use stylance::import_crate_style;

use crate::app::components::DetailSection;

import_crate_style!(style, "styles/deep-dive.module.css");

const GLACIAL_IMAGE: &str = "assets/glacial-lake-iroquois.svg";
const SEAWAY_IMAGE: &str = "assets/st-lawrence-seaway.svg";

/// Scrolling detail sections below the grid, deep-dive layout only.
#[component]
pub fn DeepDive() -> impl IntoView {
    view! {
        <div class=style::deep_dive>
            <h2 class=style::intro>"Deep Dive"</h2>

            <DetailSection>
                <Eyebrow label="Physical Geography">
                    <Icon icon=SNOWFLAKE size="20px" />
                </Eyebrow>
                <div class=style::split>
                    <div class=style::copy>
                        <h3 class=style::heading>"The Glacial Legacy"</h3>
                        <p>
                            "Around 13,000 years ago the retreating Laurentide ice sheet dammed meltwater into Lake Iroquois, a larger ancestor of Lake Ontario. Its old shoreline still shows up as the bluffs and terraces that run through Toronto."
                        </p>
                        <p>
                            "Further east, the sea briefly flooded the depressed St. Lawrence valley as the Champlain Sea, leaving marine clays behind. Moraines and drumlin fields complete a landscape built almost entirely from glacial debris."
                        </p>
                    </div>
                    <Figure
                        src=GLACIAL_IMAGE
                        alt="Sketch map of glacial Lake Iroquois beyond the modern Lake Ontario shoreline"
                        caption="Glacial Lake Iroquois compared with today's Lake Ontario"
                    />
                </div>
            </DetailSection>

            <DetailSection class=style::reversed>
                <Eyebrow label="Human Geography">
                    <Icon icon=BOAT size="20px" />
                </Eyebrow>
                <div class=style::split>
                    <div class=style::copy>
                        <h3 class=style::heading>"The St. Lawrence Corridor"</h3>
                        <p>
                            "The St. Lawrence Seaway, opened in 1959, links the Great Lakes to the Atlantic Ocean. Locks and canals, including the Welland Canal around Niagara Falls, let ocean-going ships reach ports deep inside the continent."
                        </p>
                        <p>
                            "That water route is why the corridor from Windsor to Quebec City holds so many of Canada's largest cities and factories."
                        </p>
                    </div>
                    <Figure
                        src=SEAWAY_IMAGE
                        alt="Schematic of the St. Lawrence Seaway from Lake Superior to the Atlantic"
                        caption="The Seaway steps ships down from Lake Superior to the Atlantic"
                    />
                </div>
            </DetailSection>

            <DetailSection delay=150>
                <Eyebrow label="Climate">
                    <Icon icon=THERMOMETER size="20px" />
                </Eyebrow>
                <h3 class=style::heading>"Climate & Seasons"</h3>
                <p class=style::lede>
                    "A humid continental climate with warm summers and cold, snowy winters. The Great Lakes moderate temperatures nearby and feed lake-effect snow downwind."
                </p>
                <ul class=style::facts>
                    <li>"One of the longest growing seasons in Canada"</li>
                    <li>"Tender-fruit and vineyard belt along the Niagara Peninsula"</li>
                    <li>"Precipitation spread across the whole year"</li>
                </ul>
            </DetailSection>

            <DetailSection delay=150>
                <Eyebrow label="Issues">
                    <Icon icon=PLANT size="20px" />
                </Eyebrow>
                <h3 class=style::heading>"Land-Use Pressure"</h3>
                <p class=style::lede>
                    "The same flat land that makes the region ideal for farming also makes it ideal for building. Suburbs, highways and industry keep spreading onto some of the country's best farmland."
                </p>
                <ul class=style::facts>
                    <li>"Ontario's Greenbelt protects farmland and green space around the Golden Horseshoe"</li>
                    <li>"The Niagara Escarpment is a UNESCO World Biosphere Reserve"</li>
                    <li>"Prime farmland lost to development cannot be replaced"</li>
                </ul>
            </DetailSection>
        </div>
    }
}

#[component]
fn Eyebrow(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=style::eyebrow>
            {children()}
            <span>{label}</span>
        </div>
    }
}

#[component]
fn Figure(src: &'static str, alt: &'static str, caption: &'static str) -> impl IntoView {
    view! {
        <figure class=style::figure>
            <img class=style::image src=src alt=alt loading="lazy" />
            <figcaption class=style::caption>{caption}</figcaption>
        </figure>
    }
}
