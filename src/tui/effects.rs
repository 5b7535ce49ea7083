//! Effect runner
//!
//! Executes the `Effect`s produced by the reducer against a `MovieApi` and
//! turns each outcome into the completion action to dispatch.

use crate::error::PopcornError;
use crate::movies::{MovieApi, SearchOutcome};

use super::model::{AppAction, Effect, LoadError, LoadErrorKind, NOT_FOUND_MESSAGE};

/// Run one effect to completion
pub async fn run_effect<A: MovieApi>(api: &A, effect: Effect) -> AppAction {
    match effect {
        Effect::Search { generation, query } => {
            tracing::debug!("search #{} for {:?}", generation, query);
            let result = match api.search(&query).await {
                Ok(SearchOutcome::Found(results)) => Ok(results),
                Ok(SearchOutcome::NotFound(reason)) => {
                    tracing::debug!("no results for {:?}: {}", query, reason);
                    Err(LoadError::not_found())
                }
                Err(e) => {
                    tracing::error!("search for {:?} failed: {}", query, e);
                    Err(LoadError::search_failed())
                }
            };
            AppAction::SearchCompleted { generation, result }
        }
        Effect::FetchDetail { generation, id } => {
            tracing::debug!("detail #{} for {}", generation, id);
            let result = match api.lookup(&id).await {
                Ok(detail) => Ok(detail),
                Err(PopcornError::MovieNotFound(reason)) => {
                    tracing::warn!("lookup for {} found nothing: {}", id, reason);
                    Err(LoadError {
                        kind: LoadErrorKind::NotFound,
                        message: NOT_FOUND_MESSAGE.to_string(),
                    })
                }
                Err(e) => {
                    tracing::error!("lookup for {} failed: {}", id, e);
                    Err(LoadError::detail_failed())
                }
            };
            AppAction::DetailLoaded { generation, result }
        }
    }
}
