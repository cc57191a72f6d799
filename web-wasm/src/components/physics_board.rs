//! エネルギー接続ゲーム
//!
//! 状態は `MatchState` が唯一の正。ボタンの有効/選択表示はすべてそこから導出する。

use leptos::prelude::*;
use artificer_common::{
    reduce, Catalog, EnergyType, MatchAction, MatchPhase, MatchState, TimerEffect, TimerSlot,
};
use crate::timer::ErrorTimer;

type ErrorSlot = StoredValue<TimerSlot<ErrorTimer>, LocalStorage>;

/// 操作を適用し、結果に応じてタイマーを登録・キャンセル
fn dispatch(
    catalog: StoredValue<Catalog>,
    set_state: WriteSignal<MatchState>,
    timer: ErrorSlot,
    action: MatchAction,
) {
    let mut effect = TimerEffect::None;
    catalog.with_value(|catalog| {
        set_state.update(|state| effect = reduce(state, catalog, action));
    });

    timer.update_value(|slot| {
        slot.apply(effect, |ticket| {
            ErrorTimer::schedule(move || {
                timer.update_value(|slot| slot.fired());
                dispatch(catalog, set_state, timer, MatchAction::ClearError(ticket));
            })
        })
    });
}

#[component]
pub fn PhysicsBoard() -> impl IntoView {
    let catalog = StoredValue::new(Catalog::standard());
    let (state, set_state) = signal(MatchState::new());
    let timer: ErrorSlot = StoredValue::new_local(TimerSlot::new());

    on_cleanup(move || {
        timer.try_update_value(|slot| slot.cancel());
    });

    let on_source = move |name: String| {
        dispatch(catalog, set_state, timer, MatchAction::SelectSource(name));
    };
    let on_target = move |name: String| {
        dispatch(catalog, set_state, timer, MatchAction::SelectTarget(name));
    };
    let on_reset = move |_: ()| {
        gloo::console::log!("simulation reset");
        dispatch(catalog, set_state, timer, MatchAction::Reset);
    };

    let sources = catalog.with_value(|c| c.entries().to_vec());
    let targets: Vec<EnergyType> =
        catalog.with_value(|c| c.target_order().into_iter().cloned().collect());

    view! {
        <section class="physics">
            <div class="module-intro">
                <h2>"The Physics of the Digital Realm"</h2>
                <p class="text-muted">
                    "The Law of Compatibility: a wire can only connect an Output of one color to an Input of the same color."
                </p>
            </div>

            <div class="physics-board">
                <div class="board-column">
                    <h3>"Source Output"</h3>
                    {sources
                        .into_iter()
                        .map(|entry| {
                            let on_source = on_source.clone();
                            view! {
                                <EnergyButton entry=entry state=state side=Side::Source on_pick=on_source />
                            }
                        })
                        .collect_view()}
                </div>

                <StatusPanel catalog=catalog state=state on_reset=on_reset />

                <div class="board-column">
                    <h3>"Target Input"</h3>
                    {targets
                        .into_iter()
                        .map(|entry| {
                            let on_target = on_target.clone();
                            view! {
                                <EnergyButton entry=entry state=state side=Side::Target on_pick=on_target />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Source,
    Target,
}

#[component]
fn EnergyButton<FP>(
    entry: EnergyType,
    state: ReadSignal<MatchState>,
    side: Side,
    on_pick: FP,
) -> impl IntoView
where
    FP: Fn(String) + 'static + Clone + Send,
{
    let is_matched = {
        let name = entry.name.clone();
        move || state.with(|s| s.is_matched(&name))
    };
    // 選択表示はソース側のみ
    let is_selected = {
        let name = entry.name.clone();
        move || side == Side::Source && state.with(|s| s.selected_source() == Some(name.as_str()))
    };
    let subtitle = match side {
        Side::Source => entry.analogy.clone(),
        Side::Target => entry.description.clone(),
    };
    let side_class = match side {
        Side::Source => "energy-btn source",
        Side::Target => "energy-btn target",
    };

    view! {
        <button
            class=side_class
            class:matched=is_matched.clone()
            class:selected=is_selected
            disabled=is_matched
            on:click={
                let name = entry.name.clone();
                move |_| on_pick(name.clone())
            }
        >
            <div class="energy-text">
                <div class="energy-name">{entry.name.clone()}</div>
                <div class="energy-subtitle">{subtitle}</div>
            </div>
            <span
                class=format!("energy-dot {}", entry.color.css_class())
                style=format!("background-color: {}", entry.color.hex())
            />
        </button>
    }
}

#[component]
fn StatusPanel<FR>(
    catalog: StoredValue<Catalog>,
    state: ReadSignal<MatchState>,
    on_reset: FR,
) -> impl IntoView
where
    FR: Fn(()) + 'static + Clone + Send,
{
    let phase = move || catalog.with_value(|c| state.with(|s| s.phase(c)));
    let progress = move || {
        let (done, total) = catalog.with_value(|c| state.with(|s| s.progress(c)));
        format!("{} / {} streams connected", done, total)
    };

    view! {
        <div class="status-panel">
            {move || match phase() {
                MatchPhase::ErrorShown => {
                    let message = state
                        .with(|s| s.transient_error().map(|e| e.to_string()))
                        .unwrap_or_default();
                    view! {
                        <div class="status error">
                            <span class="status-title">"CONNECTION FAILED"</span>
                            <span class="status-detail">{message}</span>
                        </div>
                    }
                    .into_any()
                }
                MatchPhase::Complete => {
                    let on_reset = on_reset.clone();
                    view! {
                        <div class="status complete">
                            <span class="status-title">"SYSTEM STABILIZED"</span>
                            <p class="text-muted">"You understand the flow of energy."</p>
                            <button class="btn btn-secondary" on:click=move |_| on_reset(())>
                                "Reset Simulation"
                            </button>
                        </div>
                    }
                    .into_any()
                }
                MatchPhase::SourceSelected => {
                    let routing = state
                        .with(|s| s.selected_source().map(str::to_string))
                        .unwrap_or_default();
                    view! {
                        <div class="status waiting">
                            "Waiting for connection..."
                            <span class="status-routing">{format!("Routing {}...", routing)}</span>
                        </div>
                    }
                    .into_any()
                }
                MatchPhase::Empty => view! {
                    <div class="status waiting">"Waiting for connection..."</div>
                }
                .into_any(),
            }}
            <p class="status-progress">{progress}</p>
        </div>
    }
}
