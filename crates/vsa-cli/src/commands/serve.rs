use vsa_config::DashboardConfig;

use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;
use crate::dashboard;

/// Handle `vsa serve`.
///
/// Loads the model before binding so the first request does not stall, then
/// runs the blocking server loop on this worker thread.
pub async fn handle(args: &ServeArgs, ctx: &mut AppContext) -> anyhow::Result<()> {
    let settings = resolve(args, &ctx.config.dashboard);
    ctx.analyzer().await?;

    let rt = tokio::runtime::Handle::current();
    tokio::task::block_in_place(|| {
        dashboard::serve(ctx, &rt, &settings.bind_addr(), settings.open_browser)
    })
}

/// Command-line flags over the configured dashboard settings.
fn resolve(args: &ServeArgs, configured: &DashboardConfig) -> DashboardConfig {
    DashboardConfig {
        host: args.host.clone().unwrap_or_else(|| configured.host.clone()),
        port: args.port.unwrap_or(configured.port),
        open_browser: args.open || configured.open_browser,
    }
}
