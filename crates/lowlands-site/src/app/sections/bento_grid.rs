use leptos::prelude::*;
use phosphor_leptos::{
    Icon, ARROW_DOWN_RIGHT, BUILDINGS, DROP, MAP_PIN, MOUNTAINS, SNOWFLAKE, STACK, TRACTOR, USERS,
};
use stylance::import_crate_style;

use crate::app::components::BentoCard;

import_crate_style!(style, "styles/bento-grid.module.css");

/// Seven-card overview. Delays stagger the entrance left to right.
#[component]
pub fn BentoGrid() -> impl IntoView {
    view! {
        <div class=style::grid>
            <LocationCard />
            <FormationCard />
            <GeologyCard />
            <PopulationCard />
            <TerrainCard />
            <LakesCard />
            <AgricultureCard />
        </div>
    }
}

/// Icon chip and uppercase label shared by most cards.
#[component]
fn CardLabel(tint: &'static str, label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=style::label_row>
            <div class=format!("{} {tint}", style::icon_chip)>{children()}</div>
            <span class=style::label>{label}</span>
        </div>
    }
}

#[component]
fn LocationCard() -> impl IntoView {
    view! {
        <BentoCard class=format!("{} {}", style::span_wide, style::tone_plain)>
            <div class=style::stack_between>
                <CardLabel tint=style::tint_blue label="Location">
                    <Icon icon=MAP_PIN size="24px" />
                </CardLabel>
                <div class=style::body>
                    <h3 class=style::heading_lg>"Ontario & Quebec"</h3>
                    <p class=style::text>
                        "Located in the southern parts of these two provinces. This is the most southerly landform region in Canada."
                    </p>
                </div>
                <div class=style::watermark aria-hidden="true">
                    <Icon icon=MAP_PIN size="150px" />
                </div>
            </div>
        </BentoCard>
    }
}

#[component]
fn FormationCard() -> impl IntoView {
    view! {
        <BentoCard class=format!("{} {}", style::span_tall, style::tone_indigo) delay=100>
            <div class=style::stack>
                <CardLabel tint=style::tint_cyan label="Formation">
                    <Icon icon=SNOWFLAKE size="24px" />
                </CardLabel>
                <h3 class=style::heading_lg>"Shaped by Ice"</h3>
                <div class=style::prose>
                    <p>
                        <strong>"Glaciation"</strong>
                        " was the most important process."
                    </p>
                    <p>
                        "Massive retreating glaciers created ancient lakes. As they melted, they deposited thick layers of clay and sand at the bottom."
                    </p>
                    <blockquote class=style::quote>
                        "\"The glaciers left behind thick deposits... forming the present flat plains.\""
                    </blockquote>
                </div>
            </div>
        </BentoCard>
    }
}

#[component]
fn GeologyCard() -> impl IntoView {
    view! {
        <BentoCard class=style::tone_plain delay=200>
            <div class=style::stack_between>
                <CardLabel tint=style::tint_amber label="Geology">
                    <Icon icon=STACK size="24px" />
                </CardLabel>
                <div>
                    <h3 class=style::heading_md>"Sedimentary Rock"</h3>
                    <p class=style::text_small>
                        "Deep layers of ancient sedimentary bedrock covered by glacial soil."
                    </p>
                </div>
            </div>
        </BentoCard>
    }
}

#[component]
fn PopulationCard() -> impl IntoView {
    view! {
        <BentoCard class=format!("{} {}", style::span_highlight, style::tone_purple) delay=300>
            <div class=style::centered>
                <div class=style::population_icon>
                    <Icon icon=USERS size="40px" />
                </div>
                <h2 class=style::stat>"60%"</h2>
                <h3 class=style::stat_caption>"of Canada's Population"</h3>
                <div class=style::stat_grid>
                    <div>
                        <div class=style::stat_heading>
                            <Icon icon=BUILDINGS size="16px" />
                            " Cities"
                        </div>
                        <p class=style::text_small>
                            "Ideal for massive urban centers like Toronto & Montreal."
                        </p>
                    </div>
                    <div>
                        <div class=style::stat_heading>
                            <Icon icon=ARROW_DOWN_RIGHT size="16px" />
                            " Transport"
                        </div>
                        <p class=style::text_small>
                            "Flat land makes building roads & railways easy."
                        </p>
                    </div>
                </div>
            </div>
            <div class=style::glow aria-hidden="true" />
        </BentoCard>
    }
}

#[component]
fn TerrainCard() -> impl IntoView {
    view! {
        <BentoCard class=style::tone_plain delay=400>
            <div class=style::stack_between>
                <CardLabel tint=style::tint_emerald label="Terrain">
                    <Icon icon=MOUNTAINS size="24px" />
                </CardLabel>
                <div class=style::body>
                    <h3 class=style::heading_sm>"Flat & Rolling"</h3>
                    <div class=style::tags>
                        {["Plains", "Hills", "Lakes"]
                            .into_iter()
                            .map(|tag| view! { <span class=style::tag>{tag}</span> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </BentoCard>
    }
}

#[component]
fn LakesCard() -> impl IntoView {
    view! {
        <BentoCard class=style::tone_blue delay=450>
            <div class=style::centered>
                <div class=style::tint_blue>
                    <Icon icon=DROP size="32px" />
                </div>
                <h3 class=style::heading_xs>"Ancient Lakes"</h3>
                <p class=style::text_small>"Formed by melting glaciers"</p>
            </div>
        </BentoCard>
    }
}

#[component]
fn AgricultureCard() -> impl IntoView {
    view! {
        <BentoCard class=format!("{} {}", style::span_wide, style::tone_green) delay=500>
            <div class=style::row>
                <div class=style::tractor>
                    <Icon icon=TRACTOR size="48px" />
                </div>
                <div class=style::grow>
                    <h3 class=style::heading_xl>"Agricultural Powerhouse"</h3>
                    <p class=style::text>
                        "Excellent for farming due to rich, fertile soils and flat topography. It contains some of the best farmland in all of Canada."
                    </p>
                    <div class=style::meter>
                        <div class=style::meter_fill />
                    </div>
                    <div class=style::meter_caption>"Fertility Rating: High"</div>
                </div>
            </div>
        </BentoCard>
    }
}
