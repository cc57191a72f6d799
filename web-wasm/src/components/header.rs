//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Artificer's Handbook"</h1>
            <p class="text-muted">"v1.1.0 // Learning Mode"</p>
        </header>
    }
}
