use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command (or bare text) to its handler.
pub async fn dispatch(
    command: Option<Commands>,
    text: Vec<String>,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        None if text.is_empty() => commands::interactive::handle(ctx, flags).await,
        None => commands::analyze::handle(&text.join(" "), ctx, flags).await,
        Some(Commands::History(args)) => commands::history::handle(&args, ctx, flags).await,
        Some(Commands::Stats) => commands::stats::handle(ctx, flags).await,
        Some(Commands::Clear(args)) => commands::clear::handle(&args, ctx, flags).await,
        Some(Commands::Export(args)) => commands::export::handle(&args, ctx, flags).await,
        Some(Commands::Config) => commands::config::handle(&ctx.config, flags),
        Some(Commands::Serve(args)) => commands::serve::handle(&args, ctx).await,
    }
}
