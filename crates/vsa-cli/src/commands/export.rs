use std::path::Path;

use anyhow::Context;

use vsa_core::export;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ExportArgs, ExportFormat};
use crate::context::AppContext;

/// Handle `vsa export`.
pub async fn handle(
    args: &ExportArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let records = ctx.store.history(u32::MAX, 0).await?;
    let content = match args.kind {
        ExportFormat::Csv => export::to_csv(&records),
        ExportFormat::Json => export::to_json(&records)?,
    };

    let Some(path) = &args.output else {
        print!("{content}");
        if args.kind == ExportFormat::Json {
            println!();
        }
        return Ok(());
    };

    let path = Path::new(path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write export to {}", path.display()))?;

    if !flags.quiet {
        eprintln!(
            "💾 Đã xuất {} bản ghi ({}) vào {}",
            records.len(),
            args.kind.extension(),
            path.display()
        );
    }
    Ok(())
}
