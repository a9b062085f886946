use crate::ai_provider::AiProvider;
use clap::{Parser, Subcommand};
use hr_pillar_common::Locale;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hr-pillar")]
#[command(about = "職務記述からHR三支柱（COE/BP/SSC）の分布を分析するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 翻訳に使うAIプロバイダ (claude/codex/gemini)
    #[arg(long, global = true)]
    pub ai_provider: Option<AiProvider>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 職務を標準職務に照合し、柱の分布を表示
    Analyze {
        /// 職務ファイル（1行1職務）。`-` で標準入力
        #[arg(short, long, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// 職務を直接指定（複数可）
        #[arg(short, long)]
        text: Vec<String>,

        /// カスタムカタログCSV
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// 照合前に翻訳する
        #[arg(long)]
        translate: bool,

        /// 入力の言語（指定すると翻訳を有効化）
        #[arg(long)]
        source: Option<Locale>,

        /// カタログの言語（指定すると翻訳を有効化）
        #[arg(long)]
        target: Option<Locale>,

        /// 英語ストップワードを除去しない
        #[arg(long)]
        keep_stop_words: bool,

        /// 結果JSONの出力先
        #[arg(long)]
        json: Option<PathBuf>,

        /// 結果Excelの出力先
        #[arg(long)]
        excel: Option<PathBuf>,

        /// 確認プロンプトを省略
        #[arg(short, long)]
        yes: bool,
    },

    /// 標準職務カタログを表示
    Catalog {
        /// カスタムカタログCSV
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// CSV形式で出力
        #[arg(long)]
        csv: bool,
    },

    /// 設定を表示/編集
    Config {
        /// AIプロバイダを設定
        #[arg(long)]
        set_provider: Option<AiProvider>,

        /// 入力の言語を設定
        #[arg(long)]
        set_source: Option<Locale>,

        /// ストップワード除去を設定 (true: 残す)
        #[arg(long)]
        set_keep_stop_words: Option<bool>,

        /// 翻訳を既定で有効にする
        #[arg(long)]
        set_translate: Option<bool>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
