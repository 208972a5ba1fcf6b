use crate::{models::DomainStat, AppState};
use axum::{extract::State, Json};
use std::sync::Arc;

/// How many domains the metrics endpoint reports.
const TOP_DOMAINS: usize = 3;

/// GET /metrics
///
/// The service hands back the full domain → count map; ordering and
/// truncation are this handler's job. Sort is count-descending with ties
/// broken by domain name, so the output is deterministic.
pub async fn metrics(State(state): State<Arc<AppState>>) -> Json<Vec<DomainStat>> {
    let mut stats: Vec<DomainStat> = state
        .service
        .top_domains(TOP_DOMAINS)
        .into_iter()
        .map(|(domain, count)| DomainStat { domain, count })
        .collect();

    stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.domain.cmp(&b.domain)));
    stats.truncate(TOP_DOMAINS);

    Json(stats)
}
