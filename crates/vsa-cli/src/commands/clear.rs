use anyhow::bail;
use tokio::io::{AsyncBufReadExt, BufReader};

use vsa_core::responses::ClearResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClearArgs;
use crate::context::AppContext;
use crate::output::output_with;
use crate::ui;

/// Handle `vsa clear`.
pub async fn handle(
    args: &ClearArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if !args.yes {
        if !ui::prefs().interactive {
            bail!("refusing to clear history without --yes (stdin is not a terminal)");
        }
        let total = ctx.store.total_count().await?;
        if !confirm(&format!("🗑️  Xóa toàn bộ {total} bản ghi? [y/N]: ")).await? {
            println!("Đã hủy.");
            return Ok(());
        }
    }

    let deleted = ctx.store.clear().await?;
    let response = ClearResponse { deleted };
    output_with(&response, flags.format, || {
        format!("🗑️  Đã xóa {deleted} bản ghi khỏi lịch sử.")
    })
}

async fn confirm(prompt: &str) -> anyhow::Result<bool> {
    use std::io::Write as _;
    print!("{prompt}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
    Ok(is_yes(&line))
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "c" | "có"
    )
}
