use std::io::Write as _;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::analyze::{classify_and_save, print_response};
use crate::commands::shared::page::history_page;
use crate::context::AppContext;
use crate::output::{output_with, present};
use crate::ui;

const PROMPT: &str = "🗣️  Nhập câu: ";

/// One line typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Empty,
    Quit,
    History,
    Stats,
    Sentence(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Empty;
    }
    match trimmed.to_lowercase().as_str() {
        "quit" | "exit" | "thoát" => Input::Quit,
        "history" | "lịch sử" => Input::History,
        "stats" | "thống kê" => Input::Stats,
        _ => Input::Sentence(trimmed),
    }
}

/// Handle bare `vsa`: read sentences and commands until quit or EOF.
pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.analyzer().await?;
    let show_prompt = ui::prefs().interactive && !flags.quiet;
    if show_prompt {
        print_banner(&ctx.config.model.backend);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if show_prompt {
            print!("{PROMPT}");
            std::io::stdout().flush()?;
        }

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            break;
        };

        let step = match parse_input(&line) {
            Input::Empty => continue,
            Input::Quit => break,
            Input::History => show_history(ctx, flags).await,
            Input::Stats => show_stats(ctx, flags).await,
            Input::Sentence(text) => classify(ctx, text, flags).await,
        };
        if let Err(error) = step {
            tracing::warn!(%error, "interactive command failed");
            eprintln!("\n❌ Lỗi: {error:#}\n");
        }
    }

    if show_prompt {
        println!("\n👋 Tạm biệt!\n");
    }
    Ok(())
}

fn print_banner(backend: &str) {
    println!("=== Ứng dụng Phân loại Cảm xúc Tiếng Việt ===");
    println!("🧠 Model: {backend}\n");
    println!("💡 Hướng dẫn:");
    println!("  - Nhập câu tiếng Việt để phân loại cảm xúc");
    println!("  - Gõ 'history' hoặc 'lịch sử' để xem lịch sử");
    println!("  - Gõ 'stats' hoặc 'thống kê' để xem thống kê");
    println!("  - Gõ 'quit', 'exit' hoặc 'thoát' để thoát\n");
}

async fn classify(ctx: &mut AppContext, text: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = classify_and_save(ctx, text).await?;
    if flags.format == OutputFormat::Table {
        println!();
    }
    print_response(&response, flags.format)?;
    if flags.format == OutputFormat::Table {
        println!();
    }
    Ok(())
}

async fn show_history(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let page = history_page(&ctx.store, ctx.config.store.history_limit, 0).await?;
    output_with(&page, flags.format, || {
        format!("\n{}\n", present::history(&page))
    })
}

async fn show_stats(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stats = ctx.store.statistics().await?;
    output_with(&stats, flags.format, || format!("\n{}\n", present::stats(&stats)))
}
