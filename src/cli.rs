use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skill-gap")]
#[command(about = "職種スキル検索・プログラム比較ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 職種テーブル（csv/xlsx）。省略時は設定値
    #[arg(long, global = true)]
    pub jobs: Option<PathBuf>,

    /// プログラム別スキルテーブル（csv/xlsx）。省略時は設定値
    #[arg(long, global = true)]
    pub programs: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 分野の一覧を表示
    Fields,

    /// 分野内の職種一覧を表示
    Titles {
        /// 分野
        #[arg(short, long)]
        field: String,
    },

    /// プログラム一覧を表示
    Programs,

    /// 職種のスキルを表示し、プログラムと比較
    Show {
        /// 分野
        #[arg(short, long)]
        field: String,

        /// 職種
        #[arg(short, long)]
        job: String,

        /// 比較するプログラム（省略時は比較しない）
        #[arg(short, long)]
        program: Option<String>,

        /// 出力形式 (text/json)
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// レポートをテキストファイルに保存
        #[arg(short, long)]
        save: bool,

        /// 保存先ディレクトリ（省略時は設定値）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Excelにも出力
        #[arg(long)]
        excel: bool,
    },

    /// 対話的に選択して比較
    Interactive {
        /// 保存先ディレクトリ（省略時は設定値）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 職種テーブルのパスを設定
        #[arg(long)]
        set_jobs: Option<PathBuf>,

        /// プログラム別スキルテーブルのパスを設定
        #[arg(long)]
        set_programs: Option<PathBuf>,

        /// レポート保存先を設定
        #[arg(long)]
        set_report_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
