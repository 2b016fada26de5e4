use crate::cli::root_commands::HistoryArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::page::history_page;
use crate::context::AppContext;
use crate::output::{output, present, records_table};

/// Handle `vsa history`.
pub async fn handle(
    args: &HistoryArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(args.limit, ctx.config.store.history_limit);
    let page = history_page(&ctx.store, limit, args.offset).await?;

    if flags.format != OutputFormat::Table {
        return output(&page, flags.format);
    }

    if page.records.is_empty() {
        println!("{}", present::history(&page));
        return Ok(());
    }
    println!(
        "📜 Hiển thị {}/{} phân loại gần nhất:\n",
        page.records.len(),
        page.total
    );
    println!("{}", records_table(&page.records));
    if let Some(hint) = present::remaining_hint(&page) {
        println!("\n{hint}");
    }
    Ok(())
}
