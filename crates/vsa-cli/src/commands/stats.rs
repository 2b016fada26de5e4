use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{output_with, present};

/// Handle `vsa stats`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stats = ctx.store.statistics().await?;
    output_with(&stats, flags.format, || present::stats(&stats))
}
