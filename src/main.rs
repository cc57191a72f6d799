use artificer::{assemble, browse, cli, config, error, logging, play};
use artificer_common::{all_parts, Catalog, PartFilter};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use play::PlayOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;
    tracing::debug!(?config, "config loaded");

    match cli.command {
        Commands::Play { ordered } => {
            let catalog = Catalog::standard();
            let mut options = PlayOptions::from(&config);
            if ordered {
                options.shuffle_targets = false;
            }
            play::run_interactive_match(&catalog, &config, options)?;
        }

        Commands::Catalog { json } => {
            browse::print_catalog(&Catalog::standard(), json)?;
        }

        Commands::Parts { category, json } => {
            let filter: PartFilter = category.parse()?;
            browse::print_parts(&all_parts(), filter, json)?;
        }

        Commands::Assemble { auto } => {
            if auto {
                assemble::run_auto();
            } else {
                assemble::run_interactive(&config)?;
            }
        }

        Commands::Config { show, set_theme, set_shuffle_targets, set_show_descriptions } => {
            let mut config = config;
            let changed = set_theme.is_some()
                || set_shuffle_targets.is_some()
                || set_show_descriptions.is_some();

            if let Some(theme) = set_theme {
                config.theme = theme;
            }
            if let Some(shuffle) = set_shuffle_targets {
                config.shuffle_targets = shuffle;
            }
            if let Some(describe) = set_show_descriptions {
                config.show_descriptions = describe;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  テーマ: {}", config.theme);
                println!("  ターゲット並べ替え: {}", config.shuffle_targets);
                println!("  説明文表示: {}", config.show_descriptions);
            }
        }
    }

    Ok(())
}
