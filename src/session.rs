//! 解析セッション
//!
//! UIスレッド側の状態（選択中の画像・解析中フラグ・履歴）を保持する。
//! 解析1回ごとにワーカースレッドを1本起動し、結果はチャネル経由で受け取る。
//! 履歴への追加はUIスレッド（このstructの所有者）だけが行うのでロックは不要。

use crate::classifier::HeuristicClassifier;
use crate::config::Config;
use crate::error::{RetinaError, Result};
use crate::scanner::ImageInfo;
use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use retina_common::ClassificationResult;
use std::path::Path;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// 擬似処理時間（中断不可）
    pub processing_delay: Duration,
    pub seed: Option<u64>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            processing_delay: Duration::from_millis(2000),
            seed: None,
        }
    }
}

impl SessionOptions {
    pub fn from_config(config: &Config, seed: Option<u64>) -> Self {
        Self {
            processing_delay: Duration::from_millis(config.processing_delay_ms),
            seed,
        }
    }
}

pub struct AnalysisSession {
    options: SessionOptions,
    classifier: HeuristicClassifier,
    rng: StdRng,
    current_image: Option<ImageInfo>,
    pending: Option<Receiver<ClassificationResult>>,
    history: Vec<ClassificationResult>,
}

impl AnalysisSession {
    pub fn new(options: SessionOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            options,
            classifier: HeuristicClassifier::new(),
            rng,
            current_image: None,
            pending: None,
            history: Vec::new(),
        }
    }

    pub fn load_image(&mut self, path: &Path) -> Result<&ImageInfo> {
        if self.is_analyzing() {
            return Err(RetinaError::AnalysisInProgress);
        }
        if !path.is_file() {
            return Err(RetinaError::FileNotFound(path.display().to_string()));
        }

        let info = ImageInfo::from_path(path);
        if info.dimensions.is_none() {
            log::warn!("画像として読み込めません: {}", path.display());
        }
        Ok(&*self.current_image.insert(info))
    }

    /// 解析を開始する。同時に実行できるのは1件だけ
    pub fn request_analysis(&mut self) -> Result<()> {
        let Some(image) = self.current_image.clone() else {
            return Err(RetinaError::NoImageLoaded);
        };
        if self.is_analyzing() {
            return Err(RetinaError::AnalysisInProgress);
        }

        // リクエストごとに独立した乱数列（セッションのシードから派生）
        let mut rng = StdRng::seed_from_u64(self.rng.gen());
        let classifier = self.classifier;
        let delay = self.options.processing_delay;
        let (tx, rx) = mpsc::channel();
        log::info!("解析開始: {}", image.file_name);

        std::thread::spawn(move || {
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }

            let prediction = classifier.classify_path(&image.path, &mut rng);
            let result = ClassificationResult::new(
                prediction.severity,
                prediction.confidence,
                prediction.basis,
                image.reference(),
                Local::now(),
            );

            // 受信側が先に破棄されていても何もしない
            let _ = tx.send(result);
        });

        self.pending = Some(rx);
        Ok(())
    }

    /// 完了していれば結果を受け取り、履歴に追加する（ブロックしない）
    pub fn poll(&mut self) -> Result<Option<ClassificationResult>> {
        let outcome = match &self.pending {
            Some(rx) => rx.try_recv(),
            None => return Ok(None),
        };

        match outcome {
            Ok(result) => Ok(Some(self.finish(result))),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                Err(RetinaError::WorkerDisconnected)
            }
        }
    }

    pub fn wait_timeout(&mut self, timeout: Duration) -> Result<Option<ClassificationResult>> {
        let outcome = match &self.pending {
            Some(rx) => rx.recv_timeout(timeout),
            None => return Err(RetinaError::NoAnalysisPending),
        };

        match outcome {
            Ok(result) => Ok(Some(self.finish(result))),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => {
                self.pending = None;
                Err(RetinaError::WorkerDisconnected)
            }
        }
    }

    pub fn wait(&mut self) -> Result<ClassificationResult> {
        let outcome = match &self.pending {
            Some(rx) => rx.recv(),
            None => return Err(RetinaError::NoAnalysisPending),
        };

        match outcome {
            Ok(result) => Ok(self.finish(result)),
            Err(_) => {
                self.pending = None;
                Err(RetinaError::WorkerDisconnected)
            }
        }
    }

    fn finish(&mut self, result: ClassificationResult) -> ClassificationResult {
        self.pending = None;
        log::info!(
            "解析完了: {} -> {} ({:.1}%)",
            result.source.file_name,
            result.severity,
            result.confidence * 100.0
        );
        self.history.push(result.clone());
        result
    }

    pub fn is_analyzing(&self) -> bool {
        self.pending.is_some()
    }

    pub fn current_image(&self) -> Option<&ImageInfo> {
        self.current_image.as_ref()
    }

    pub fn history(&self) -> &[ClassificationResult] {
        &self.history
    }

    pub fn last(&self) -> Option<&ClassificationResult> {
        self.history.last()
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }
}
