//! Vietnamese, human-oriented renderings of results, history, and stats.

use std::fmt::Write as _;

use vsa_core::entities::AnalysisResult;
use vsa_core::enums::Sentiment;
use vsa_core::responses::HistoryResponse;
use vsa_core::stats::SentimentStats;

const RULE_WIDTH: usize = 80;

/// `0.8512` → `"85.12%"`.
#[must_use]
pub fn percent(value: f32) -> String {
    format!("{:.2}%", value * 100.0)
}

/// One classification, with the canonical `{text, sentiment}` line.
#[must_use]
pub fn analysis(result: &AnalysisResult) -> String {
    if let Some(error) = &result.error {
        return format!("⚠️  {error}");
    }
    let canonical = serde_json::to_string(&result.output()).unwrap_or_default();
    format!(
        "{emoji} Cảm xúc: {label} ({code})\n   Độ tin cậy: {confidence}\n   Output: {canonical}",
        emoji = result.sentiment.emoji(),
        label = result.sentiment.label_vi(),
        code = result.sentiment.as_str(),
        confidence = percent(result.confidence),
    )
}

/// A page of history as record blocks, with the "more remaining" hint.
#[must_use]
pub fn history(page: &HistoryResponse) -> String {
    if page.records.is_empty() {
        return if page.total == 0 {
            "📝 Chưa có lịch sử phân loại nào.".to_string()
        } else {
            format!("📝 Không có bản ghi nào từ vị trí {}.", page.offset)
        };
    }

    let divider = "-".repeat(RULE_WIDTH);
    let mut out = format!(
        "📜 Hiển thị {}/{} phân loại gần nhất:\n{divider}\n",
        page.records.len(),
        page.total
    );
    for record in &page.records {
        let _ = writeln!(out, "ID: {} | {}", record.id, record.timestamp);
        let _ = writeln!(out, "Câu: {}", record.text);
        let _ = writeln!(
            out,
            "Cảm xúc: {} {}",
            record.sentiment.emoji(),
            record.sentiment.as_str()
        );
        let _ = writeln!(out, "{divider}");
    }
    if let Some(hint) = remaining_hint(page) {
        let _ = write!(out, "\n{hint}");
    }
    out.trim_end().to_string()
}

/// `💡 Còn N bản ghi nữa...` when the page does not reach the end.
#[must_use]
pub fn remaining_hint(page: &HistoryResponse) -> Option<String> {
    let remaining = page.remaining();
    (remaining > 0).then(|| {
        format!(
            "💡 Còn {remaining} bản ghi nữa. Dùng --offset {} để xem tiếp.",
            u64::from(page.offset) + page.records.len() as u64
        )
    })
}

#[must_use]
pub fn stats(stats: &SentimentStats) -> String {
    let mut out = String::from("📊 Thống kê tổng quan:\n");
    let _ = writeln!(out, "  Tổng số phân loại: {}", stats.total);
    for sentiment in [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative] {
        let _ = writeln!(
            out,
            "  {} {}: {} ({:.1}%)",
            sentiment.emoji(),
            title_case_vi(sentiment),
            stats.count(sentiment),
            stats.share(sentiment) * 100.0
        );
    }
    out.trim_end().to_string()
}

const fn title_case_vi(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "Tích cực",
        Sentiment::Negative => "Tiêu cực",
        Sentiment::Neutral => "Trung tính",
    }
}
