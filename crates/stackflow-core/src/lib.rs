//! StackFlow のコア
//!
//! 設定ファイル、ステージ／microstack の対応表、スタック名・バケット名の導出、
//! Pulumi プログラム側のステージルーターを提供します。

pub mod config;
pub mod error;
pub mod naming;
pub mod program;
pub mod stage;

pub use config::{Config, resolve_region};
pub use error::{CoreError, Result};
pub use naming::{backend_url, bucket_name, stack_name};
pub use program::{CONFIG_FILE_ENV, MICROSTACK_CONFIG_KEY, ProgramContext};
pub use stage::{Microstack, Stage, microstacks_for, stage_for};
