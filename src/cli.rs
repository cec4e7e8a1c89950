use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "retina-screen")]
#[command(about = "眼底写真の糖尿病網膜症スクリーニング（デモ）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 乱数シード（指定すると結果が再現可能になる）
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像1枚を解析
    Analyze {
        /// 眼底写真のパス
        #[arg(required = true)]
        image: PathBuf,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,

        /// 擬似処理時間（ミリ秒、省略時は設定値）
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// フォルダ内の画像を一括解析してJSONを出力
    Batch {
        /// 画像フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 出力JSONファイル（デフォルト: 入力フォルダ/screening.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,

        /// 進捗バーを表示しない
        #[arg(long)]
        no_progress: bool,
    },

    /// 対話モードで画像を開いて解析
    Session {
        /// デモ画像の生成先
        #[arg(long, default_value = "demo_images")]
        demo_dir: PathBuf,
    },

    /// デモ画像を生成し、ランダムに1枚解析
    Demo {
        /// 生成先フォルダ
        #[arg(short, long, default_value = "demo_images")]
        dir: PathBuf,
    },

    /// 出力済みJSONの履歴を表示
    Report {
        /// 解析結果JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 表示件数（省略時は設定値）
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// 重症度ごとの推奨事項を表示
    Table,

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 擬似処理時間（ミリ秒）を設定
        #[arg(long)]
        set_delay: Option<u64>,

        /// 既定の乱数シードを設定
        #[arg(long)]
        set_seed: Option<u64>,

        /// チェックポイントを探すフォルダを設定
        #[arg(long)]
        set_model_dir: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::parse_from(["retina-screen", "--seed", "7", "analyze", "eye.png", "--json"]);
        assert_eq!(cli.seed, Some(7));
        match cli.command {
            Commands::Analyze { image, json, delay_ms } => {
                assert_eq!(image, PathBuf::from("eye.png"));
                assert!(json);
                assert_eq!(delay_ms, None);
            }
            _ => panic!("analyze expected"),
        }
    }

    #[test]
    fn test_parse_batch_defaults() {
        let cli = Cli::parse_from(["retina-screen", "batch", "scans"]);
        match cli.command {
            Commands::Batch { folder, output, recursive, no_progress } => {
                assert_eq!(folder, PathBuf::from("scans"));
                assert!(output.is_none());
                assert!(!recursive);
                assert!(!no_progress);
            }
            _ => panic!("batch expected"),
        }
    }
}
