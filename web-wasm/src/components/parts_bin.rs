//! パーツ棚

use leptos::prelude::*;
use artificer_common::{all_parts, filter_parts, PartFilter};
use crate::components::node_card::NodeCard;

#[component]
pub fn PartsBin() -> impl IntoView {
    let parts = StoredValue::new(all_parts());
    let (filter, set_filter) = signal(PartFilter::All);

    view! {
        <section class="parts-bin">
            <div class="module-intro">
                <h2>"The Parts Bin"</h2>
                <p class="text-muted">"Inventory of available components."</p>
            </div>

            <div class="filter-bar">
                {PartFilter::CHOICES
                    .into_iter()
                    .map(|choice| {
                        view! {
                            <button
                                class="filter-pill"
                                class:active=move || filter.get() == choice
                                on:click=move |_| set_filter.set(choice)
                            >
                                {choice.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="node-grid">
                {move || {
                    parts.with_value(|parts| {
                        filter_parts(parts, filter.get())
                            .into_iter()
                            .map(|part| {
                                view! {
                                    <NodeCard
                                        title=part.title.clone()
                                        category=part.category.to_string()
                                        inputs=part.inputs.clone()
                                        outputs=part.outputs.clone()
                                        description=part.description.clone()
                                    />
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>
        </section>
    }
}
