//! 組み立てシミュレーション（ターミナル版）

use crate::config::Config;
use crate::error::Result;
use artificer_common::assembly::{lesson_node, STEPS};
use artificer_common::{AssemblyState, LessonNode};
use dialoguer::Select;

/// ステップ表示
pub fn format_step(state: &AssemblyState) -> String {
    let step = state.current_step();
    let title = lesson_node(step.node_id)
        .map(|n| n.title)
        .unwrap_or(step.node_id);
    format!(
        "STEP {} / {} ({}%)\n{}\n{}",
        state.step_index() + 1,
        STEPS.len(),
        state.progress_percent(),
        title,
        step.instruction
    )
}

/// 取り付け済みパーツと通電ケーブル
pub fn format_workbench(state: &AssemblyState) -> String {
    let mut out = String::from("Installed:\n");
    for id in state.active_nodes() {
        if let Some(node) = lesson_node(id) {
            out.push_str(&format!("  - {} ({:?})\n", node.title, node.part));
        }
    }

    let cables = state.cables();
    if cables.is_empty() {
        out.push_str("Cables: none\n");
    } else {
        out.push_str("Cables:\n");
        for cable in cables {
            out.push_str(&format!(
                "  ~ {} -> {} [{:?} {}]\n",
                cable.from,
                cable.to,
                cable.color,
                cable.color.hex()
            ));
        }
    }
    out
}

/// インスペクタ表示
pub fn format_inspector(node: &LessonNode) -> String {
    let ports = |list: &[artificer_common::Port], empty: &str| {
        if list.is_empty() {
            empty.to_string()
        } else {
            list.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(", ")
        }
    };
    format!(
        "{} Node: {}\n  {}\n  {}\n  Inputs : {}\n  Outputs: {}",
        node.category,
        node.title,
        node.analogy,
        node.description,
        ports(&node.inputs, "None (Source)"),
        ports(&node.outputs, "None (Sink)")
    )
}

/// 全ステップを自動で進める
pub fn run_auto() {
    let mut state = AssemblyState::new();
    loop {
        println!("{}\n", format_step(&state));
        if !state.next() {
            break;
        }
    }
    println!("{}", format_workbench(&state));
    println!("✅ Assembly Complete - The Scout is online and ready for activation.");
}

enum DeckAction {
    Install,
    Back,
    Inspect,
    Restart,
    Quit,
}

/// 対話式で組み立てる
pub fn run_interactive(config: &Config) -> Result<()> {
    let theme = config.theme.dialoguer_theme();

    println!("🤖 Workshop Level 01 - THE SCOUT // Text-to-Image Assembler\n");
    let mut state = AssemblyState::new();

    loop {
        println!("{}\n", format_step(&state));
        println!("{}", format_workbench(&state));
        if let Some(node) = state.inspected() {
            println!("{}\n", format_inspector(&node));
        }

        let mut actions = Vec::new();
        if !state.is_final_step() {
            actions.push(("Install ▶", DeckAction::Install));
        }
        if !state.is_first_step() {
            actions.push(("◀ Back", DeckAction::Back));
        }
        actions.push(("Inspect part", DeckAction::Inspect));
        actions.push(("Disassemble & Restart", DeckAction::Restart));
        actions.push(("Quit", DeckAction::Quit));

        let labels: Vec<&str> = actions.iter().map(|(label, _)| *label).collect();
        let Some(index) = Select::with_theme(theme.as_ref())
            .with_prompt("Action")
            .items(&labels)
            .default(0)
            .interact_opt()?
        else {
            break;
        };

        match actions[index].1 {
            DeckAction::Install => {
                state.next();
            }
            DeckAction::Back => {
                state.prev();
            }
            DeckAction::Inspect => {
                let ids = state.active_nodes();
                let titles: Vec<&str> = ids
                    .iter()
                    .filter_map(|id| lesson_node(id).map(|n| n.title))
                    .collect();
                if let Some(i) = Select::with_theme(theme.as_ref())
                    .with_prompt("Inspect")
                    .items(&titles)
                    .interact_opt()?
                {
                    state.inspect(ids[i]);
                }
            }
            DeckAction::Restart => state.reset(),
            DeckAction::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_step_initial() {
        let text = format_step(&AssemblyState::new());
        assert!(text.starts_with("STEP 1 / 5 (20%)"));
        assert!(text.contains("Load Checkpoint"));
    }

    #[test]
    fn test_format_workbench_lists_cables() {
        let mut state = AssemblyState::new();
        assert!(format_workbench(&state).contains("Cables: none"));

        while state.next() {}
        let text = format_workbench(&state);
        assert!(text.contains("checkpoint -> ksampler"));
        assert!(text.contains("Visor"));
    }

    #[test]
    fn test_format_inspector_source_node() {
        let node = lesson_node("empty_latent").unwrap();
        let text = format_inspector(&node);
        assert!(text.contains("Inputs : None (Source)"));
        assert!(text.contains("Outputs: LATENT"));
    }
}
