//! Commands that never touch the backend.

use futures::future::join_all;
use serde_json::json;
use unilink_view::{Counter, StatsSection, TeammateSearch, TeammatesTab};

use super::Output;

pub(super) async fn teammates(query: Option<String>, tab: TeammatesTab) -> anyhow::Result<Output> {
    let mut search = TeammateSearch::default();
    search.select_tab(tab);

    let Some(query) = query else {
        return Ok(Output::Text(search.render()));
    };

    // Results only change once the debounce timer fires.
    let mut changes = search.subscribe();
    search.input(query);
    while changes.changed().await.is_ok() {
        if changes.borrow_and_update().recomputations > 0 {
            break;
        }
    }

    Ok(Output::Text(search.render()))
}

pub(super) async fn stats() -> anyhow::Result<Output> {
    let section = StatsSection::default();
    let counters = section.animate();
    join_all(counters.iter().map(Counter::finished)).await;

    let stats: Vec<_> = counters
        .iter()
        .map(|counter| json!({ "label": counter.item().label, "value": counter.display() }))
        .collect();
    Ok(Output::Json(json!(stats)))
}

#[cfg(test)]
mod tests {
    use unilink_view::NO_TEAMMATES_FOUND;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_teammates_query_is_debounced_then_rendered() {
        let output = teammates(Some("kubernetes".into()), TeammatesTab::All)
            .await
            .unwrap();
        let Output::Text(text) = output else {
            panic!("expected text output");
        };
        assert!(text.starts_with("David Kim"));
        assert_eq!(text.lines().count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teammates_without_match() {
        let output = teammates(Some("cobol".into()), TeammatesTab::TeamLeads)
            .await
            .unwrap();
        assert_eq!(output, Output::Text(NO_TEAMMATES_FOUND.into()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stats_end_on_targets() {
        let output = stats().await.unwrap();
        let json = output.as_json().unwrap();
        assert_eq!(json[0]["value"], "10000+");
        assert_eq!(json[3]["value"], "94.5%");
    }
}
