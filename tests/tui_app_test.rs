//! PopcornApp reducer and effect integration tests
//!
//! These tests complement the unit tests in `src/tui/model.rs` by running
//! whole user journeys: every effect the reducer emits is executed against an
//! in-memory movie API and its completion is fed back through the reducer.

mod common;

use std::collections::VecDeque;

use common::mock_data::{FakeApi, MovieBuilder, inception, interstellar, mock_results};
use popcorn::tui::components::watched_summary::summary_cells;
use popcorn::tui::effects::run_effect;
use popcorn::tui::model::*;
use popcorn::tui::rating::RatingConfig;

use iocraft::prelude::{KeyCode, KeyModifiers};

const LIST_HEIGHT: usize = 10;

/// Reduce an action, then run every resulting effect to completion
async fn drive(api: &FakeApi, state: AppState, action: AppAction) -> AppState {
    let (mut state, effects) = reduce_app_state(state, action, LIST_HEIGHT);
    let mut queue: VecDeque<Effect> = effects.into();
    while let Some(effect) = queue.pop_front() {
        let completion = run_effect(api, effect).await;
        let (next, more) = reduce_app_state(state, completion, LIST_HEIGHT);
        state = next;
        queue.extend(more);
    }
    state
}

/// Map a key through `key_to_action` and drive the result, if any
async fn press(api: &FakeApi, state: AppState, code: KeyCode) -> AppState {
    match key_to_action(code, KeyModifiers::NONE, &state) {
        Some(action) => drive(api, state, action).await,
        None => state,
    }
}

fn movie_api() -> FakeApi {
    FakeApi::new()
        .with_movie("inception", inception())
        .with_movie("interstellar", interstellar())
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_search_inception_lists_result() {
    let api = movie_api();
    let state = drive(&api, AppState::default(), AppAction::SetQuery("Inception".into())).await;

    assert!(!state.is_loading);
    assert_eq!(state.error, None);
    assert_eq!(state.results.len(), 1);
    assert_eq!(state.results[0].id, "tt1375666");
    assert_eq!(state.results[0].title, "Inception");

    let vm = compute_view_model(&state, LIST_HEIGHT);
    assert_eq!(vm.nav.result_count, 1);
    match vm.left.content {
        LeftPaneContent::List(list) => {
            assert_eq!(list.total, 1);
            assert!(list.rows[0].is_cursor);
            assert!(!list.rows[0].is_selected);
        }
        other => panic!("expected results list, got {:?}", other),
    }
}

#[tokio::test]
async fn test_short_queries_never_reach_the_api() {
    // Any request would fail loudly
    let api = FakeApi::new().broken();

    for query in ["", "xy", "  ab  "] {
        let (state, effects) =
            reduce_app_state(AppState::default(), AppAction::SetQuery(query.into()), LIST_HEIGHT);
        assert!(effects.is_empty(), "query {:?} issued a request", query);
        assert!(state.results.is_empty());
        assert_eq!(state.error, None);
        assert!(!state.is_loading);
    }

    let state = drive(&api, AppState::default(), AppAction::SetQuery("xy".into())).await;
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn test_unknown_query_shows_not_found() {
    let api = movie_api();
    let state = drive(
        &api,
        AppState::default(),
        AppAction::SetQuery("xyz123nomatch".into()),
    )
    .await;

    assert!(state.results.is_empty());
    let error = state.error.clone().expect("error shown");
    assert_eq!(error.kind, LoadErrorKind::NotFound);
    assert_eq!(error.message, "Movie not found");

    let vm = compute_view_model(&state, LIST_HEIGHT);
    assert_eq!(vm.left.content, LeftPaneContent::Error(LoadError::not_found()));
}

#[tokio::test]
async fn test_transport_failure_shows_generic_message() {
    let api = movie_api().broken();
    let state = drive(&api, AppState::default(), AppAction::SetQuery("inception".into())).await;

    assert!(state.results.is_empty());
    assert_eq!(state.error, Some(LoadError::search_failed()));
    assert_eq!(
        state.error.as_ref().map(|e| e.message.as_str()),
        Some(SEARCH_FAILED_MESSAGE)
    );
}

#[tokio::test]
async fn test_loading_flag_until_completion() {
    let api = movie_api();
    let (state, effects) = reduce_app_state(
        AppState::default(),
        AppAction::SetQuery("inception".into()),
        LIST_HEIGHT,
    );
    assert!(state.is_loading);
    assert_eq!(
        compute_view_model(&state, LIST_HEIGHT).left.content,
        LeftPaneContent::Loading
    );

    let completion = run_effect(&api, effects[0].clone()).await;
    let (state, _) = reduce_app_state(state, completion, LIST_HEIGHT);
    assert!(!state.is_loading);
    assert_eq!(state.results.len(), 1);
}

#[tokio::test]
async fn test_only_latest_search_is_applied() {
    let api = movie_api();

    let (state, first) = reduce_app_state(
        AppState::default(),
        AppAction::SetQuery("inception".into()),
        LIST_HEIGHT,
    );
    let (state, second) =
        reduce_app_state(state, AppAction::SetQuery("interstellar".into()), LIST_HEIGHT);

    // The newer request finishes first, the older one arrives late
    let newer = run_effect(&api, second[0].clone()).await;
    let older = run_effect(&api, first[0].clone()).await;
    let (state, _) = reduce_app_state(state, newer, LIST_HEIGHT);
    let (state, _) = reduce_app_state(state, older, LIST_HEIGHT);

    assert_eq!(state.results.len(), 1);
    assert_eq!(state.results[0].title, "Interstellar");
}

#[tokio::test]
async fn test_query_shortened_while_in_flight() {
    let api = movie_api();

    let (state, effects) = reduce_app_state(
        AppState::default(),
        AppAction::SetQuery("inception".into()),
        LIST_HEIGHT,
    );
    let (state, _) = reduce_app_state(state, AppAction::SetQuery("in".into()), LIST_HEIGHT);

    let late = run_effect(&api, effects[0].clone()).await;
    let (state, _) = reduce_app_state(state, late, LIST_HEIGHT);

    assert!(state.results.is_empty());
    assert!(!state.is_loading);
    assert_eq!(state.error, None);
}

// ============================================================================
// Details, rating and the watched list
// ============================================================================

#[tokio::test]
async fn test_select_rate_and_add_inception() {
    let api = movie_api();
    let state = drive(&api, AppState::default(), AppAction::SetQuery("Inception".into())).await;
    let state = drive(&api, state, AppAction::SelectMovie("tt1375666".into())).await;

    let selected = state.selected.clone().expect("selection");
    assert!(!selected.is_loading);
    let detail = selected.detail.expect("detail loaded");
    assert_eq!(detail.runtime, "148 min");
    assert_eq!(detail.external_rating, "8.8");

    // Not addable until rated
    let state = drive(&api, state, AppAction::AddWatched).await;
    assert!(state.watched.is_empty());
    assert!(state.selected.is_some());

    let state = drive(&api, state, AppAction::SetUserRating(10)).await;
    let vm = compute_view_model(&state, LIST_HEIGHT);
    match &vm.right.content {
        RightPaneContent::Detail(detail) => {
            assert!(detail.can_add);
            assert_eq!(detail.rating_label, "10");
        }
        other => panic!("expected detail pane, got {:?}", other),
    }

    let state = drive(&api, state, AppAction::AddWatched).await;
    assert_eq!(state.selected, None);
    assert_eq!(state.watched.len(), 1);

    let entry = &state.watched[0];
    assert_eq!(entry.id, "tt1375666");
    assert_eq!(entry.runtime_minutes, Some(148));
    assert_eq!(entry.external_rating, Some(8.8));
    assert_eq!(entry.user_rating, 10);

    let vm = compute_view_model(&state, LIST_HEIGHT);
    let RightPaneContent::Watched { summary, entries } = vm.right.content else {
        panic!("expected watched pane");
    };
    assert_eq!(entries.len(), 1);
    let cells = summary_cells(&summary)
        .iter()
        .map(|(label, value)| format!("{label} {value}"))
        .collect::<Vec<_>>()
        .join(" | ");
    insta::assert_snapshot!(cells, @"# 1 movies | ⭐ 8.80 | 🌟 10.00 | ⏳ 148 min");
}

#[tokio::test]
async fn test_keyboard_journey() {
    let api = movie_api();
    let state = drive(&api, AppState::default(), AppAction::SetQuery("interstellar".into())).await;
    assert_eq!(state.focus, Focus::Search);

    let state = press(&api, state, KeyCode::Enter).await;
    assert_eq!(state.focus, Focus::Results);

    let state = press(&api, state, KeyCode::Enter).await;
    assert_eq!(state.focus, Focus::Detail);
    assert_eq!(state.selected_id(), Some("tt0816692"));

    // Hover two stars right, commit, then add
    let state = press(&api, state, KeyCode::Char('l')).await;
    let state = press(&api, state, KeyCode::Char('l')).await;
    let state = press(&api, state, KeyCode::Enter).await;
    assert_eq!(state.selected.as_ref().map(|s| s.user_rating()), Some(2));

    let state = press(&api, state, KeyCode::Char('7')).await;
    let state = press(&api, state, KeyCode::Char('a')).await;

    assert_eq!(state.selected, None);
    assert_eq!(state.focus, Focus::Results);
    assert_eq!(state.watched.len(), 1);
    assert_eq!(state.watched[0].user_rating, 7);

    let state = press(&api, state, KeyCode::Char('q')).await;
    assert!(state.should_exit);
}

#[tokio::test]
async fn test_same_title_twice_is_two_entries() {
    let api = movie_api();
    let mut state = drive(&api, AppState::default(), AppAction::SetQuery("inception".into())).await;

    for rating in [10, 8] {
        state = drive(&api, state, AppAction::SelectMovie("tt1375666".into())).await;
        state = drive(&api, state, AppAction::SetUserRating(rating)).await;
        state = drive(&api, state, AppAction::AddWatched).await;
    }

    assert_eq!(state.watched.len(), 2);
    let summary = popcorn::watched::WatchedSummary::compute(&state.watched);
    assert_eq!(summary.count, 2);
    assert_eq!(summary.avg_user_rating, Some(9.0));
    assert_eq!(summary.avg_runtime, Some(148.0));
}

#[tokio::test]
async fn test_summary_over_two_movies() {
    let api = movie_api();
    let mut state = AppState::default();
    for (query, id, rating) in [
        ("inception", "tt1375666", 10),
        ("interstellar", "tt0816692", 8),
    ] {
        state = drive(&api, state, AppAction::SetQuery(query.into())).await;
        state = drive(&api, state, AppAction::SelectMovie(id.into())).await;
        state = drive(&api, state, AppAction::SetUserRating(rating)).await;
        state = drive(&api, state, AppAction::AddWatched).await;
    }

    let summary = popcorn::watched::WatchedSummary::compute(&state.watched);
    assert_eq!(summary.count, 2);
    assert_eq!(summary.avg_user_rating, Some(9.0));
    assert_eq!(summary.avg_runtime, Some(158.5));
    assert_eq!(
        popcorn::watched::format_stat(summary.avg_external_rating, 2),
        "8.75"
    );
}

#[tokio::test]
async fn test_unknown_id_shows_not_found_in_detail() {
    let api = movie_api();
    let state = drive(&api, AppState::default(), AppAction::SelectMovie("tt9999999".into())).await;

    let selected = state.selected.clone().expect("selection kept");
    assert!(!selected.is_loading);
    assert_eq!(selected.detail, None);
    let error = selected.error.expect("error shown");
    assert_eq!(error.kind, LoadErrorKind::NotFound);
    assert_eq!(error.message, NOT_FOUND_MESSAGE);

    // Rating has nothing to apply to
    let state = drive(&api, state, AppAction::SetUserRating(5)).await;
    assert_eq!(state.selected.as_ref().map(|s| s.user_rating()), Some(0));
}

#[tokio::test]
async fn test_detail_transport_failure() {
    let api = movie_api().broken();
    let state = drive(&api, AppState::default(), AppAction::SelectMovie("tt1375666".into())).await;

    let error = state.selected.and_then(|s| s.error).expect("error shown");
    assert_eq!(error, LoadError::detail_failed());
    assert_eq!(error.message, DETAIL_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_late_detail_for_previous_selection_is_ignored() {
    let api = movie_api();

    let (state, first) = reduce_app_state(
        AppState::default(),
        AppAction::SelectMovie("tt1375666".into()),
        LIST_HEIGHT,
    );
    let (state, second) =
        reduce_app_state(state, AppAction::SelectMovie("tt0816692".into()), LIST_HEIGHT);

    let newer = run_effect(&api, second[0].clone()).await;
    let older = run_effect(&api, first[0].clone()).await;
    let (state, _) = reduce_app_state(state, newer, LIST_HEIGHT);
    let (state, _) = reduce_app_state(state, older, LIST_HEIGHT);

    let detail = state.selected.and_then(|s| s.detail).expect("detail loaded");
    assert_eq!(detail.title, "Interstellar");
}

#[tokio::test]
async fn test_selecting_selected_title_closes_it() {
    let api = movie_api();
    let state = drive(&api, AppState::default(), AppAction::SelectMovie("tt1375666".into())).await;
    let state = drive(&api, state, AppAction::SelectMovie("tt1375666".into())).await;

    assert_eq!(state.selected, None);
    assert!(matches!(
        compute_view_model(&state, LIST_HEIGHT).right.content,
        RightPaneContent::Watched { .. }
    ));
}

#[tokio::test]
async fn test_default_rating_is_preselected() {
    let api = movie_api();
    let config = RatingConfig {
        max_rating: 5,
        default_rating: 3,
        ..Default::default()
    };
    let state = drive(
        &api,
        AppState::new(config),
        AppAction::SelectMovie("tt1375666".into()),
    )
    .await;
    assert_eq!(state.selected.as_ref().map(|s| s.user_rating()), Some(3));

    // Ratings above the configured maximum are ignored
    let state = drive(&api, state, AppAction::SetUserRating(9)).await;
    assert_eq!(state.selected.as_ref().map(|s| s.user_rating()), Some(3));

    let state = drive(&api, state, AppAction::AddWatched).await;
    assert_eq!(state.watched[0].user_rating, 3);
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_empty_watched_summary_shows_placeholders() {
    let vm = compute_view_model(&AppState::default(), LIST_HEIGHT);
    let RightPaneContent::Watched { summary, entries } = vm.right.content else {
        panic!("expected watched pane");
    };
    assert!(entries.is_empty());

    let cells = summary_cells(&summary);
    assert_eq!(cells[0].1, "0 movies");
    assert_eq!(cells[1].1, "–");
    assert_eq!(cells[2].1, "–");
    assert_eq!(cells[3].1, "–");
}

#[test]
fn test_toggle_keeps_results() {
    let mut state = AppState {
        results: mock_results(3),
        focus: Focus::Results,
        ..Default::default()
    };

    state = reduce_app_state(state, AppAction::ToggleLeftPane, LIST_HEIGHT).0;
    let vm = compute_view_model(&state, LIST_HEIGHT);
    assert!(!vm.left.is_open);
    assert_eq!(state.results.len(), 3);

    state = reduce_app_state(state, AppAction::ToggleLeftPane, LIST_HEIGHT).0;
    assert!(compute_view_model(&state, LIST_HEIGHT).left.is_open);

    state = reduce_app_state(state, AppAction::ToggleRightPane, LIST_HEIGHT).0;
    assert!(!compute_view_model(&state, LIST_HEIGHT).right.is_open);
}

#[test]
fn test_long_result_list_scrolls_with_cursor() {
    let mut state = AppState {
        results: mock_results(25),
        focus: Focus::Results,
        ..Default::default()
    };

    for _ in 0..12 {
        state = reduce_app_state(state, AppAction::MoveDown, LIST_HEIGHT).0;
    }
    assert_eq!(state.selected_index, 12);
    assert_eq!(state.scroll_offset, 3);

    let vm = compute_view_model(&state, LIST_HEIGHT);
    let LeftPaneContent::List(list) = vm.left.content else {
        panic!("expected list");
    };
    assert_eq!(list.rows.len(), LIST_HEIGHT);
    assert_eq!(list.rows[0].movie.id, "tt0000003");
    assert!(list.rows[9].is_cursor);

    state = reduce_app_state(state, AppAction::GoToBottom, LIST_HEIGHT).0;
    assert_eq!(state.selected_index, 24);
    assert_eq!(state.scroll_offset, 15);
}

#[test]
fn test_custom_movie_builder_round_trip() {
    let movie = MovieBuilder::new("tt0000042").title("The Answer").runtime("42 min");
    let row = movie.search_result();
    let detail = movie.build();
    assert_eq!(row.id, detail.id);
    assert_eq!(
        popcorn::watched::WatchedEntry::from_detail(&detail, 4)
            .expect("valid rating")
            .runtime_minutes,
        Some(42)
    );
}
