//! Serde roundtrip tests for the types that cross crate and process boundaries.

use vsa_core::backend::RawPrediction;
use vsa_core::entities::{AnalysisResult, ClassificationRecord};
use vsa_core::enums::Sentiment;
use vsa_core::responses::{AnalyzeResponse, ClearResponse, HistoryResponse, ModelResponse};
use vsa_core::stats::{SentimentStats, TimelineBucket};

macro_rules! roundtrip {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );
        }
    };
}

fn sample_record() -> ClassificationRecord {
    ClassificationRecord {
        id: 42,
        text: "Cảm ơn bạn rất nhiều".to_string(),
        sentiment: Sentiment::Positive,
        timestamp: "2025-02-14 20:30:00".to_string(),
    }
}

fn sample_result() -> AnalysisResult {
    AnalysisResult {
        text: "Cảm ơn bạn rất nhiều".to_string(),
        sentiment: Sentiment::Positive,
        confidence: 0.85,
        raw_label: Some("positive".to_string()),
        error: None,
    }
}

roundtrip!(record_roundtrip, ClassificationRecord, sample_record());
roundtrip!(analysis_roundtrip, AnalysisResult, sample_result());
roundtrip!(
    failed_analysis_roundtrip,
    AnalysisResult,
    AnalysisResult::failed("abc", "Câu không hợp lệ, thử lại!")
);
roundtrip!(
    analyze_response_roundtrip,
    AnalyzeResponse,
    AnalyzeResponse {
        result: sample_result(),
        saved: Some(sample_record()),
    }
);
roundtrip!(
    history_roundtrip,
    HistoryResponse,
    HistoryResponse {
        records: vec![sample_record()],
        total: 1,
        limit: 50,
        offset: 0,
    }
);
roundtrip!(clear_roundtrip, ClearResponse, ClearResponse { deleted: 3 });
roundtrip!(
    model_roundtrip,
    ModelResponse,
    ModelResponse {
        backend: "modernbert-base".to_string(),
        available: vec!["modernbert-base".to_string(), "modernbert-large".to_string()],
    }
);
roundtrip!(
    stats_roundtrip,
    SentimentStats,
    SentimentStats {
        total: 3,
        positive: 1,
        neutral: 1,
        negative: 1,
    }
);
roundtrip!(
    timeline_roundtrip,
    TimelineBucket,
    TimelineBucket {
        hour: "2025-02-14 20:00:00".to_string(),
        sentiment: Sentiment::Negative,
        count: 2,
    }
);
roundtrip!(
    prediction_roundtrip,
    RawPrediction,
    RawPrediction::new("4 stars", 0.5)
);

#[test]
fn analysis_without_error_omits_field() {
    let json = serde_json::to_value(sample_result()).unwrap();
    assert!(json.get("error").is_none());
    assert_eq!(json["sentiment"], "POSITIVE");
}
