use vsa_core::responses::AnalyzeResponse;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, present};

/// Classify `text` and, when it succeeds, append it to history.
pub async fn classify_and_save(
    ctx: &mut AppContext,
    text: &str,
) -> anyhow::Result<AnalyzeResponse> {
    let result = ctx.analyzer().await?.analyze(text);
    let saved = if result.is_ok() {
        Some(ctx.store.save(&result.text, result.sentiment).await?)
    } else {
        None
    };
    Ok(AnalyzeResponse { result, saved })
}

/// Print one classification in the requested format.
pub fn print_response(response: &AnalyzeResponse, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", present::analysis(&response.result));
            Ok(())
        }
        OutputFormat::Json => output(response, format),
        OutputFormat::Raw => output(&response.result.output(), format),
    }
}

/// Handle `vsa <TEXT...>`.
///
/// A rejected sentence is still a result: it is printed with its error and
/// the command succeeds. Only store and model-loading faults fail.
pub async fn handle(text: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = classify_and_save(ctx, text).await?;
    print_response(&response, flags.format)
}
