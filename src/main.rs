use clap::Parser;
use retina_screen::{batch, cli, config, demo, error, export, interactive, model, report, scanner};
use retina_screen::{AnalysisSession, Recommendation, SeverityClass, SessionOptions};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use model::ModelStatus;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn main() {
    if let Err(e) = run() {
        eprintln!("エラー: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = Config::load()?;
    let seed = config.effective_seed(cli.seed)?;

    match cli.command {
        Commands::Analyze { image, json, delay_ms } => {
            let model = ModelStatus::probe(&config.model_dir(), config.checkpoint_names.as_slice());

            let mut options = SessionOptions::from_config(&config, seed);
            if let Some(ms) = delay_ms {
                options.processing_delay = Duration::from_millis(ms);
            }

            let mut session = AnalysisSession::new(options);
            session.load_image(&image)?;
            let result = interactive::analyze_with_spinner(&mut session)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                interactive::print_result(&result, &model);
            }
        }

        Commands::Batch { folder, output, recursive, no_progress } => {
            println!("👁  retina-screen - 一括解析\n");

            // 1. 画像スキャン
            println!("[1/3] 画像をスキャン中...");
            let images = scanner::scan_folder(&folder, recursive)?;
            println!("✔ {}枚の画像を検出\n", images.len());

            if images.is_empty() {
                return Err(error::RetinaError::NoImagesFound(folder.display().to_string()));
            }

            // 2. 解析
            let batch_seed = seed.unwrap_or_else(rand::random);
            println!("[2/3] 解析中... (seed: {})", batch_seed);
            let options = batch::BatchOptions {
                seed: batch_seed,
                show_progress: !no_progress,
            };
            let results = batch::analyze_batch(&images, &options);
            println!("✔ 解析完了\n");

            // 3. 結果保存
            println!("[3/3] 結果を保存中...");
            let output = output.unwrap_or_else(|| folder.join("screening.json"));
            export::export_json(&results, &output)?;
            println!("✔ 結果を保存: {}", output.display());

            let summary = batch::summarize(&results);
            println!("\n集計:");
            for class in SeverityClass::ALL {
                let rec = Recommendation::for_class(class);
                println!("  {:<14} {}", report::paint(rec.label, rec.rgb()), summary.count(class));
            }
            println!("  要紹介 (Moderate以上): {}/{}", summary.referable(), summary.total());

            println!("\n✅ 完了");
        }

        Commands::Session { demo_dir } => {
            let model = ModelStatus::probe(&config.model_dir(), config.checkpoint_names.as_slice());
            let mut session = AnalysisSession::new(SessionOptions::from_config(&config, seed));
            interactive::run_interactive_session(
                &mut session,
                &model,
                &demo_dir,
                config.history_display_limit,
            )?;
        }

        Commands::Demo { dir } => {
            println!("- デモ画像を生成中...");
            let paths = demo::generate_demo_images(&dir)?;
            println!("✔ {}枚を生成: {}\n", paths.len(), dir.display());

            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let Some(path) = demo::pick_demo_image(&paths, &mut rng) else {
                return Err(error::RetinaError::NoImagesFound(dir.display().to_string()));
            };

            let model = ModelStatus::probe(&config.model_dir(), config.checkpoint_names.as_slice());
            let mut session = AnalysisSession::new(SessionOptions::from_config(&config, seed));
            session.load_image(path)?;
            let result = interactive::analyze_with_spinner(&mut session)?;
            interactive::print_result(&result, &model);
        }

        Commands::Report { input, limit } => {
            let results = export::load_json(&input)?;
            let limit = limit.unwrap_or(config.history_display_limit);
            println!("{}", report::render_history(&results, limit));
        }

        Commands::Table => {
            for rec in &retina_common::RECOMMENDATIONS {
                println!(
                    "{} {}",
                    rec.severity.index(),
                    report::paint(rec.diagnosis, rec.rgb())
                );
                println!("    {}", rec.advisory);
            }
        }

        Commands::Config { show, set_delay, set_seed, set_model_dir } => {
            let mut config = config;
            let changed = set_delay.is_some() || set_seed.is_some() || set_model_dir.is_some();

            if let Some(ms) = set_delay {
                config.processing_delay_ms = ms;
            }
            if let Some(seed) = set_seed {
                config.seed = Some(seed);
            }
            if let Some(dir) = set_model_dir {
                config.model_dir = Some(dir);
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  擬似処理時間: {}ms", config.processing_delay_ms);
                println!("  履歴表示件数: {}", config.history_display_limit);
                println!(
                    "  シード: {}",
                    config.seed.map(|s| s.to_string()).unwrap_or_else(|| "未設定".into())
                );
                println!("  モデルフォルダ: {}", config.model_dir().display());
            }
        }
    }

    Ok(())
}
