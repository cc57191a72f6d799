//! ノード部品カード

use leptos::prelude::*;
use artificer_common::Port;

fn port_row(port: Port, align_right: bool) -> impl IntoView {
    let color = port.color();
    view! {
        <div class="port-row" class:right=align_right>
            <span
                class=format!("port-dot {}", color.css_class())
                style=format!("background-color: {}", color.hex())
            />
            <span class="port-name">{port.name}</span>
        </div>
    }
}

#[component]
pub fn NodeCard(
    title: String,
    category: String,
    #[prop(optional)] inputs: Vec<Port>,
    #[prop(optional)] outputs: Vec<Port>,
    #[prop(optional)] description: Option<String>,
    #[prop(optional)] compact: bool,
) -> impl IntoView {
    view! {
        <div class="node-card" class:compact=compact>
            <div class="node-card-header">
                <span class="node-title">{title}</span>
                <span class="node-category">{category}</span>
            </div>
            <div class="node-card-body">
                {(!compact)
                    .then_some(description)
                    .flatten()
                    .map(|d| view! { <p class="node-description">{d}</p> })}
                <div class="node-ports">
                    <div class="port-column">
                        {inputs.into_iter().map(|p| port_row(p, false)).collect_view()}
                    </div>
                    <div class="port-column outputs">
                        {outputs.into_iter().map(|p| port_row(p, true)).collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
