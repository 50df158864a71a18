use stackflow_core::program::{self, ProgramContext, stage_label};

/// Pulumi から起動されるプログラム側のエントリポイント
pub fn handle(microstack: Option<&str>) -> anyhow::Result<()> {
    if let Some(id) = microstack {
        tracing::info!("Resolving microstack {} (stage: {})", id, stage_label(id));
    }

    let ctx = ProgramContext::from_env(microstack)?;
    program::run(&ctx)?;
    Ok(())
}
