//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use crate::components::{
    assembly_deck::AssemblyDeck,
    header::Header,
    introduction::Introduction,
    parts_bin::PartsBin,
    physics_board::PhysicsBoard,
    sidebar::Sidebar,
};

/// 表示中のモジュール
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModuleId {
    #[default]
    Intro,
    Physics,
    Parts,
    Assembly,
}

impl ModuleId {
    pub const ALL: [ModuleId; 4] = [
        ModuleId::Intro,
        ModuleId::Physics,
        ModuleId::Parts,
        ModuleId::Assembly,
    ];

    /// イントロの「Enter the Workshop」で進む先
    pub const FIRST_LESSON: ModuleId = ModuleId::Physics;

    pub fn label(&self) -> &'static str {
        match self {
            ModuleId::Intro => "The Workshop",
            ModuleId::Physics => "Energy Physics",
            ModuleId::Parts => "Parts Bin",
            ModuleId::Assembly => "Assembly",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ModuleId::Intro => "Entering the paradigm",
            ModuleId::Physics => "Data Types & Flow",
            ModuleId::Parts => "Component Specs",
            ModuleId::Assembly => "Robot Builder Sim",
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (module, set_module) = signal(ModuleId::default());

    let on_navigate = move |id: ModuleId| {
        gloo::console::debug!(format!("navigate: {:?}", id));
        set_module.set(id);
    };

    view! {
        <div class="app-shell">
            <Sidebar current=module on_navigate=on_navigate />

            <main class="module-view">
                <Header />
                // モジュールを切り替えるとビューは破棄され、保留中のタイマーも止まる
                {move || match module.get() {
                    ModuleId::Intro => view! {
                        <Introduction on_enter=move |_: ()| set_module.set(ModuleId::FIRST_LESSON) />
                    }
                    .into_any(),
                    ModuleId::Physics => view! { <PhysicsBoard /> }.into_any(),
                    ModuleId::Parts => view! { <PartsBin /> }.into_any(),
                    ModuleId::Assembly => view! { <AssemblyDeck /> }.into_any(),
                }}
            </main>
        </div>
    }
}
