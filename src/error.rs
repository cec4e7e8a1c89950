use thiserror::Error;

#[derive(Error, Debug)]
pub enum RetinaError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("画像が読み込まれていません。先に画像を選択してください")]
    NoImageLoaded,

    #[error("解析中です。完了するまでお待ちください")]
    AnalysisInProgress,

    #[error("実行中の解析はありません")]
    NoAnalysisPending,

    #[error("解析ワーカーとの接続が切れました")]
    WorkerDisconnected,

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] retina_common::Error),
}

impl From<dialoguer::Error> for RetinaError {
    fn from(err: dialoguer::Error) -> Self {
        RetinaError::Prompt(err.to_string())
    }
}

impl From<image::ImageError> for RetinaError {
    fn from(err: image::ImageError) -> Self {
        RetinaError::ImageLoad(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RetinaError>;
