//! サイドバー（モジュール切り替え）

use leptos::prelude::*;
use crate::app::ModuleId;

#[component]
pub fn Sidebar<FN>(
    current: ReadSignal<ModuleId>,
    on_navigate: FN,
) -> impl IntoView
where
    FN: Fn(ModuleId) + 'static + Clone + Send,
{
    view! {
        <nav class="sidebar">
            {ModuleId::ALL
                .into_iter()
                .map(|id| {
                    let on_navigate = on_navigate.clone();
                    view! {
                        <button
                            class="nav-item"
                            class:active=move || current.get() == id
                            on:click=move |_| on_navigate(id)
                        >
                            <span class="nav-label">{id.label()}</span>
                            <span class="nav-description">{id.description()}</span>
                        </button>
                    }
                })
                .collect_view()}

            <div class="sidebar-footer">
                <span class="status-dot" />
                "SYSTEM ONLINE"
            </div>
        </nav>
    }
}
