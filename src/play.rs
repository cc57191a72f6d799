//! 対話式マッチングゲーム
//!
//! 左列（Source Output）と右列（Target Input）から同じエネルギー型を選んで接続する。
//! ターミナルにはタイマーがないので、エラーは1回表示したらその場で消去する。

use crate::config::Config;
use crate::error::Result;
use artificer_common::{
    reduce, Catalog, EnergyType, MatchAction, MatchPhase, MatchState, TimerEffect,
};
use dialoguer::Select;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// メニューの1項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub action: MenuAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Game(MatchAction),
    Quit,
}

/// ゲームの表示オプション
#[derive(Debug, Clone, Copy)]
pub struct PlayOptions {
    pub shuffle_targets: bool,
    pub show_descriptions: bool,
}

impl From<&Config> for PlayOptions {
    fn from(config: &Config) -> Self {
        Self {
            shuffle_targets: config.shuffle_targets,
            show_descriptions: config.show_descriptions,
        }
    }
}

fn source_label(entry: &EnergyType, state: &MatchState, options: PlayOptions) -> String {
    let marker = if state.selected_source() == Some(entry.name.as_str()) {
        "▶"
    } else {
        " "
    };
    if options.show_descriptions {
        format!("{} [OUT] {:<12} {}", marker, entry.name, entry.analogy)
    } else {
        format!("{} [OUT] {}", marker, entry.name)
    }
}

fn target_label(entry: &EnergyType, options: PlayOptions) -> String {
    if options.show_descriptions {
        format!("  [IN]  {:<12} {}", entry.name, entry.description)
    } else {
        format!("  [IN]  {}", entry.name)
    }
}

/// 現在の状態から選択肢を組み立てる
///
/// 接続済みの型は両列から除く。完了時はリセットと終了のみ。
pub fn menu_entries(catalog: &Catalog, state: &MatchState, options: PlayOptions) -> Vec<MenuEntry> {
    let mut entries = Vec::new();

    if !state.is_complete(catalog) {
        for entry in catalog.entries().iter().filter(|e| !state.is_matched(&e.name)) {
            entries.push(MenuEntry {
                label: source_label(entry, state, options),
                action: MenuAction::Game(MatchAction::SelectSource(entry.name.clone())),
            });
        }

        let targets: Vec<&EnergyType> = if options.shuffle_targets {
            catalog.target_order()
        } else {
            catalog.entries().iter().collect()
        };
        for entry in targets.into_iter().filter(|e| !state.is_matched(&e.name)) {
            entries.push(MenuEntry {
                label: target_label(entry, options),
                action: MenuAction::Game(MatchAction::SelectTarget(entry.name.clone())),
            });
        }
    }

    entries.push(MenuEntry {
        label: "↺ Reset Simulation".to_string(),
        action: MenuAction::Game(MatchAction::Reset),
    });
    entries.push(MenuEntry {
        label: "✕ Quit".to_string(),
        action: MenuAction::Quit,
    });
    entries
}

/// 中央パネルの表示文
pub fn status_line(catalog: &Catalog, state: &MatchState) -> String {
    match state.phase(catalog) {
        MatchPhase::Complete => {
            "SYSTEM STABILIZED - You understand the flow of energy.".to_string()
        }
        MatchPhase::ErrorShown => match state.transient_error() {
            Some(error) => format!("CONNECTION FAILED - {}", error),
            None => "CONNECTION FAILED".to_string(),
        },
        MatchPhase::SourceSelected => format!(
            "Routing {}...",
            state.selected_source().unwrap_or_default()
        ),
        MatchPhase::Empty => "Waiting for connection...".to_string(),
    }
}

fn progress_bar(total: usize) -> ProgressBar {
    let bar = ProgressBar::new(total as u64);
    let style = ProgressStyle::with_template("{prefix} [{bar:24.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-");
    bar.set_style(style);
    bar.set_prefix("Stabilized");
    bar
}

/// 対話式でマッチングゲームを実行
pub fn run_interactive_match(catalog: &Catalog, config: &Config, options: PlayOptions) -> Result<()> {
    let theme = config.theme.dialoguer_theme();

    println!("⚡ The Physics of the Digital Realm\n");
    println!("The Law of Compatibility: A wire can only connect an Output of one color");
    println!("to an Input of the same color. Connect the matching energy streams.\n");

    let mut state = MatchState::new();
    let bar = progress_bar(catalog.len());

    loop {
        let entries = menu_entries(catalog, &state, options);
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        let prompt = status_line(catalog, &state);

        let choice = bar.suspend(|| {
            Select::with_theme(theme.as_ref())
                .with_prompt(prompt)
                .items(&labels)
                .default(0)
                .interact_opt()
        })?;

        let Some(index) = choice else {
            break;
        };
        let action = match &entries[index].action {
            MenuAction::Quit => break,
            MenuAction::Game(action) => action.clone(),
        };

        debug!(?action, "menu action");
        match reduce(&mut state, catalog, action) {
            TimerEffect::Schedule(ticket) => {
                bar.println(format!("✗ {}", status_line(catalog, &state)));
                // ターミナルでは表示後すぐに消去
                reduce(&mut state, catalog, MatchAction::ClearError(ticket));
            }
            TimerEffect::Cancel | TimerEffect::None => {}
        }

        let (matched, _) = state.progress(catalog);
        bar.set_position(matched as u64);

        if state.is_complete(catalog) {
            bar.println("✅ SYSTEM STABILIZED");
        }
    }

    bar.finish_and_clear();
    let (matched, total) = state.progress(catalog);
    println!("\n接続済み: {}/{}", matched, total);
    Ok(())
}
