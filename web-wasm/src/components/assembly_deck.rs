//! ロボット組み立てデッキ（2D）

use leptos::prelude::*;
use artificer_common::assembly::{lesson_node, STEPS};
use artificer_common::AssemblyState;
use crate::components::node_card::NodeCard;

#[component]
pub fn AssemblyDeck() -> impl IntoView {
    let (assembly, set_assembly) = signal(AssemblyState::new());

    let step_label = move || {
        assembly.with(|a| format!("STEP {} / {}", a.step_index() + 1, STEPS.len()))
    };
    let instruction = move || assembly.with(|a| a.current_step().instruction);
    let progress_style = move || assembly.with(|a| format!("width: {}%", a.progress_percent()));

    let on_prev = move |_| set_assembly.update(|a| {
        a.prev();
    });
    let on_next = move |_| set_assembly.update(|a| {
        if a.next() {
            gloo::console::log!(format!("installed: {}", a.current_step().node_id));
        }
    });
    let on_restart = move |_| set_assembly.update(|a| a.reset());

    view! {
        <section class="assembly">
            <div class="module-intro">
                <h2>"Artificer's Workshop"</h2>
                <p class="text-muted">"THE SCOUT // Text-to-Image Assembler"</p>
            </div>

            <div class="assembly-step">
                <span class="step-label">{step_label}</span>
                <p class="step-instruction">{instruction}</p>
                <div class="progress-bar">
                    <div class="progress-fill" style=progress_style />
                </div>
                <div class="step-actions">
                    <button
                        class="btn btn-secondary"
                        disabled=move || assembly.with(|a| a.is_first_step())
                        on:click=on_prev
                    >
                        "Back"
                    </button>
                    <Show
                        when=move || assembly.with(|a| !a.is_final_step())
                        fallback=move || view! {
                            <button class="btn btn-tertiary" on:click=on_restart>
                                "Restart Assembly"
                            </button>
                        }
                    >
                        <button class="btn btn-primary" on:click=on_next>
                            "Install Part"
                        </button>
                    </Show>
                </div>
            </div>

            <div class="assembly-body">
                <div class="installed-parts">
                    <h3>"Installed Parts"</h3>
                    {move || {
                        assembly
                            .with(|a| a.active_nodes())
                            .into_iter()
                            .filter_map(lesson_node)
                            .map(|node| {
                                let id = node.id;
                                view! {
                                    <button
                                        class="part-chip"
                                        class:inspected=move || {
                                            assembly.with(|a| a.inspected().is_some_and(|n| n.id == id))
                                        }
                                        on:click=move |_| set_assembly.update(|a| {
                                            a.inspect(id);
                                        })
                                    >
                                        <span class="part-slot">{format!("{:?}", node.part)}</span>
                                        <span class="part-title">{node.title}</span>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <div class="cables">
                    <h3>"Energy Cables"</h3>
                    <ul>
                        {move || {
                            assembly
                                .with(|a| a.cables())
                                .into_iter()
                                .map(|cable| {
                                    view! {
                                        <li class=format!("cable {}", cable.color.css_class())>
                                            <span
                                                class="cable-dot"
                                                style=format!("background-color: {}", cable.color.hex())
                                            />
                                            {format!("{} → {}", cable.from, cable.to)}
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>

                {move || {
                    assembly.with(|a| a.inspected()).map(|node| {
                        view! {
                            <aside class="inspector">
                                <div class="inspector-header">
                                    <span class="node-category">{format!("{} Node", node.category)}</span>
                                    <button
                                        class="btn btn-small btn-tertiary"
                                        on:click=move |_| set_assembly.update(|a| a.close_inspector())
                                    >
                                        "Close"
                                    </button>
                                </div>
                                <p class="inspector-analogy">{node.analogy}</p>
                                <NodeCard
                                    title=node.title.to_string()
                                    category=node.category.to_string()
                                    inputs=node.inputs
                                    outputs=node.outputs
                                    description=node.description.to_string()
                                />
                            </aside>
                        }
                    })
                }}
            </div>
        </section>
    }
}
