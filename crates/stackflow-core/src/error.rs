use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("設定ファイルを読み込めません: {path}\n理由: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("設定ファイルのパースに失敗しました: {path}\n理由: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("設定項目 '{0}' が空です")]
    MissingField(&'static str),

    #[error("AWS_REGION 環境変数（または --region）を指定してください")]
    MissingRegion,

    #[error("CONFIG_FILE 環境変数が設定されていません")]
    MissingConfigFileEnv,

    #[error("microstack が Pulumi config に設定されていません")]
    MissingMicrostack,

    #[error("不明なステージです: {0}（利用可能: vpc, core, apps）")]
    UnknownStage(String),

    #[error("不明な microstack です: {0}")]
    UnknownMicrostack(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
