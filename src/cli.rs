use crate::config::PromptTheme;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "artificer")]
#[command(about = "Artificer's Handbook - ノードベース画像生成の仕組みを学ぶ", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// エネルギー型マッチングゲームを遊ぶ
    Play {
        /// ターゲット列をカタログ順のまま表示
        #[arg(long)]
        ordered: bool,
    },

    /// エネルギー型カタログを表示
    Catalog {
        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// パーツ棚を表示
    Parts {
        /// カテゴリ (all/loader/conditioning/latent/image)
        #[arg(short, long, default_value = "all")]
        category: String,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// ロボット "The Scout" を組み立てる
    Assemble {
        /// 全ステップを自動で進める
        #[arg(long)]
        auto: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// プロンプトのテーマ (colorful/simple)
        #[arg(long)]
        set_theme: Option<PromptTheme>,

        /// ターゲット列の並べ替え (true/false)
        #[arg(long)]
        set_shuffle_targets: Option<bool>,

        /// 説明文の表示 (true/false)
        #[arg(long)]
        set_show_descriptions: Option<bool>,
    },
}
