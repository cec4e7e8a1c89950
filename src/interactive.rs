//! 対話式スクリーニングセッション
//!
//! 画像を開く → 解析 → 結果表示、を繰り返す。解析中は別スレッドで処理し、
//! このスレッドはスピナーを回しながら結果を待つ。

use crate::demo;
use crate::error::{RetinaError, Result};
use crate::model::ModelStatus;
use crate::report;
use crate::session::AnalysisSession;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use retina_common::ClassificationResult;
use std::path::{Path, PathBuf};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 対話アクション
#[derive(Debug, PartialEq, Eq)]
pub enum SessionAction {
    /// 画像を開く
    Open(PathBuf),
    /// 開いている画像を解析
    Analyze,
    /// 履歴を表示
    History,
    /// デモ画像を生成してランダムに1枚開く
    Demo,
    /// 終了
    Quit,
    /// 何もしない
    Nothing,
}

pub fn parse_action(input: &str) -> SessionAction {
    match input.trim() {
        "" => SessionAction::Nothing,
        "a" | "A" => SessionAction::Analyze,
        "h" | "H" => SessionAction::History,
        "d" | "D" => SessionAction::Demo,
        "q" | "Q" => SessionAction::Quit,
        path => SessionAction::Open(PathBuf::from(path.trim_matches('"'))),
    }
}

/// 解析を開始し、結果が届くまでスピナーを表示して待つ
pub fn analyze_with_spinner(session: &mut AnalysisSession) -> Result<ClassificationResult> {
    session.request_analysis()?;

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("  {spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("AI analyzing...");

    let result = loop {
        spinner.tick();
        if let Some(result) = session.wait_timeout(POLL_INTERVAL)? {
            break result;
        }
    };

    spinner.finish_and_clear();
    Ok(result)
}

pub fn print_result(result: &ClassificationResult, model: &ModelStatus) {
    let rec = result.recommendation();
    println!("{}", report::paint(rec.diagnosis, rec.rgb()));
    println!("{}", report::render_result(result, model));
}

pub fn run_interactive_session(
    session: &mut AnalysisSession,
    model: &ModelStatus,
    demo_dir: &Path,
    history_limit: usize,
) -> Result<()> {
    println!("👁  網膜症スクリーニング - 対話モード");
    println!("モデル: {}", model);
    println!("---");
    println!("操作: [画像パス]開く [a]解析 [h]履歴 [d]デモ画像 [q]終了");
    println!("---\n");

    let mut demo_images: Vec<PathBuf> = Vec::new();
    let mut demo_rng = match session.options().seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    loop {
        let prompt = match session.current_image() {
            Some(image) => format!("[{}]", image.file_name),
            None => "[画像なし]".to_string(),
        };

        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;

        match parse_action(&input) {
            SessionAction::Open(path) => open_image(session, &path),
            SessionAction::Analyze => match analyze_with_spinner(session) {
                Ok(result) => print_result(&result, model),
                Err(RetinaError::NoImageLoaded) => {
                    println!("  → 先に画像を開いてください\n");
                }
                Err(e) => return Err(e),
            },
            SessionAction::History => {
                println!("{}", report::render_history(session.history(), history_limit));
            }
            SessionAction::Demo => {
                if demo_images.is_empty() {
                    demo_images = demo::generate_demo_images(demo_dir)?;
                    println!("  → デモ画像を生成: {}", demo_dir.display());
                }
                if let Some(path) = demo::pick_demo_image(&demo_images, &mut demo_rng) {
                    open_image(session, path);
                }
            }
            SessionAction::Quit => {
                println!("終了します（解析 {}件）", session.history().len());
                break;
            }
            SessionAction::Nothing => {}
        }
    }

    Ok(())
}

fn open_image(session: &mut AnalysisSession, path: &Path) {
    match session.load_image(path) {
        Ok(info) => match info.dimensions {
            Some((w, h)) => println!("  → 読み込み完了: {} ({}x{})\n", info.file_name, w, h),
            None => println!(
                "  → 読み込み完了: {} (画像として解釈できません。推定値で判定します)\n",
                info.file_name
            ),
        },
        Err(e) => println!("  → {}\n", e),
    }
}
