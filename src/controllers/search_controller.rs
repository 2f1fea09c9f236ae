use tracing::{debug, info, warn};

use crate::client::CocktailClient;
use crate::error::Result;
use crate::models::{Drink, SearchPhase, SearchState};
use crate::notify::{Notifier, Severity};

/// A search that has been started but not yet sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
}

/// Outcome of a search, tagged with the request it answers
#[derive(Debug)]
pub struct SearchCompletion {
    pub seq: u64,
    pub result: Result<Vec<Drink>>,
}

/// Start a search for the current query
///
/// Returns `None` and leaves the state alone when the query is empty.
/// Otherwise marks the state as loading and hands back the request to send.
pub fn begin_search(
    state: &mut SearchState,
    notifier: &mut impl Notifier,
) -> Option<SearchRequest> {
    if state.query.is_empty() {
        return None;
    }

    state.latest_request += 1;
    state.loading = true;
    state.phase = SearchPhase::Searching;
    info!(seq = state.latest_request, query = %state.query, "search started");
    notifier.notify("Please wait..", Severity::Neutral);

    Some(SearchRequest {
        seq: state.latest_request,
        query: state.query.clone(),
    })
}

/// Apply a finished search to the state
///
/// Answers to anything but the latest request are dropped; returns whether
/// the completion was applied.
pub fn complete_search(
    state: &mut SearchState,
    completion: SearchCompletion,
    notifier: &mut impl Notifier,
) -> bool {
    if completion.seq != state.latest_request {
        debug!(
            seq = completion.seq,
            latest = state.latest_request,
            "dropping stale search response"
        );
        return false;
    }

    state.loading = false;
    match completion.result {
        Ok(drinks) => {
            info!(seq = completion.seq, count = drinks.len(), "search finished");
            state.drinks = drinks;
            state.phase = SearchPhase::Results;
            notifier.notify("Here are the results.", Severity::Success);
            if state.drinks.is_empty() {
                notifier.notify("No results found.", Severity::Error);
            }
        }
        Err(err) => {
            // Previous results stay on screen
            warn!(seq = completion.seq, error = %err, "search failed");
            state.phase = SearchPhase::Failed;
            notifier.notify(&format!("Search failed: {}", err), Severity::Error);
        }
    }
    true
}

/// Send a search request and wrap the answer for [`complete_search`]
pub async fn run_search(client: &CocktailClient, request: SearchRequest) -> SearchCompletion {
    SearchCompletion {
        seq: request.seq,
        result: client.search(&request.query).await,
    }
}
