// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use super::value_enum::{CliOutputFormat, CliSeedLayout};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "almanac",
    version = crate::VERSION,
    about = "種子→位置の多段レンジ変換と最小値探索ツール"
)]
pub struct Args {
    /// 入力ファイル（`-` で標準入力）
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// 種子行の解釈
    #[arg(long, value_enum, default_value = "ranges", help_heading = "入力")]
    pub seeds: CliSeedLayout,

    /// 重なり合うルールを持つマップをエラーにする
    #[arg(long, help_heading = "入力")]
    pub strict: bool,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 最初の単位の値が各段をどう通るかを表示
    #[arg(long, value_name = "VALUE", help_heading = "出力")]
    pub trace: Option<u64>,

    /// 最終単位の値を最初の単位へ逆変換して表示
    #[arg(long, value_name = "VALUE", help_heading = "出力")]
    pub locate: Option<u64>,

    /// ワーカースレッド数（既定: CPU数）
    #[arg(short = 'j', long, help_heading = "実行")]
    pub jobs: Option<usize>,

    /// 並列化を無効にする
    #[arg(long, conflicts_with = "jobs", help_heading = "実行")]
    pub sequential: bool,

    /// ログを詳細にする（複数指定可）
    #[arg(short, long, action = clap::ArgAction::Count, help_heading = "実行")]
    pub verbose: u8,
}
