use serde::Serialize;

use vsa_core::entities::ClassificationRecord;

use crate::cli::OutputFormat;
use crate::ui;

pub mod present;
pub mod table;

/// Render a serializable response as JSON.
///
/// Every command prints its own human rendering for `Table` (see
/// [`output_with`]), so `Table` only reaches here as pretty JSON.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json | OutputFormat::Table => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print `human` for table output, otherwise `value` as JSON.
pub fn output_with<T: Serialize>(
    value: &T,
    format: OutputFormat,
    human: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    if format == OutputFormat::Table {
        println!("{}", human());
        Ok(())
    } else {
        output(value, format)
    }
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// History rows in a fixed column order.
#[must_use]
pub fn records_table(records: &[ClassificationRecord]) -> String {
    if records.is_empty() {
        return String::from("(no rows)");
    }
    let rows = records
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.timestamp.clone(),
                r.sentiment.as_str().to_string(),
                r.text.clone(),
            ]
        })
        .collect::<Vec<_>>();
    table::render_rows(&["id", "timestamp", "sentiment", "text"], &rows, options())
}
