//! StackFlow orchestration
//!
//! - [`bootstrap`]: state bucket + backend login + `stack init` for every
//!   microstack. Stack init failures are skipped.
//! - [`deploy_stage`]: login, then select / config set / action for each
//!   microstack of one stage. The first failure aborts the run.

pub mod bootstrap;
pub mod deploy;
pub mod error;

#[cfg(test)]
mod testing;

pub use bootstrap::{BootstrapReport, bootstrap};
pub use deploy::{DeployReport, DeployRequest, deploy_stage};
pub use error::{PipelineError, Result, Step};
