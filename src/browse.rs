//! カタログ・パーツ棚の一覧表示

use crate::error::Result;
use artificer_common::{filter_parts, Catalog, NodePart, PartFilter, Port};

/// エネルギー型一覧（テキスト）
pub fn format_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    for entry in catalog.entries() {
        out.push_str(&format!(
            "● {:<12} {:<8} {}\n    {}\n",
            entry.name,
            entry.color.hex(),
            entry.analogy,
            entry.description
        ));
    }
    out
}

fn format_ports(ports: &[Port]) -> String {
    if ports.is_empty() {
        return "-".to_string();
    }
    ports
        .iter()
        .map(|p| format!("{}:{}", p.name, p.port_type))
        .collect::<Vec<_>>()
        .join(", ")
}

/// ノードカード1枚分
pub fn format_part(part: &NodePart) -> String {
    format!(
        "┌ {} [{}]\n│ {}\n│ in : {}\n└ out: {}\n",
        part.title,
        part.category,
        part.description,
        format_ports(&part.inputs),
        format_ports(&part.outputs)
    )
}

pub fn print_catalog(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog.entries())?);
    } else {
        println!("⚡ エネルギー型 ({}種類)\n", catalog.len());
        print!("{}", format_catalog(catalog));
    }
    Ok(())
}

pub fn print_parts(parts: &[NodePart], filter: PartFilter, json: bool) -> Result<()> {
    let selected = filter_parts(parts, filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    println!("📦 The Parts Bin - {} ({}件)\n", filter.label(), selected.len());
    for part in selected {
        println!("{}", format_part(part));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use artificer_common::all_parts;

    #[test]
    fn test_format_catalog_lists_every_entry() {
        let catalog = Catalog::standard();
        let text = format_catalog(&catalog);
        for entry in catalog.entries() {
            assert!(text.contains(&entry.name));
        }
        assert!(text.contains("#9333ea"));
    }

    #[test]
    fn test_format_part_without_outputs() {
        let parts = all_parts();
        let save = parts.iter().find(|p| p.title == "Save Image").unwrap();
        let text = format_part(save);
        assert!(text.contains("[image]"));
        assert!(text.contains("in : images:IMAGE"));
        assert!(text.contains("out: -"));
    }
}
