use vsa_core::responses::HistoryResponse;
use vsa_db::SentimentStore;

/// One page of history together with the overall total.
pub async fn history_page(
    store: &SentimentStore,
    limit: u32,
    offset: u32,
) -> anyhow::Result<HistoryResponse> {
    let records = store.history(limit, offset).await?;
    let total = store.total_count().await?;
    Ok(HistoryResponse {
        records,
        total,
        limit,
        offset,
    })
}
