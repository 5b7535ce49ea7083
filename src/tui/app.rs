//! Root popcorn component
//!
//! Owns the single `AppState`, routes key events through `key_to_action`,
//! runs effects on an async handler and renders from the computed view model.

#![allow(clippy::clone_on_copy)]

use std::sync::Arc;

use iocraft::prelude::*;

use crate::movies::OmdbClient;
use crate::tui::components::{
    EmptyState, EmptyStateKind, Footer, MovieDetailPanel, MovieList, NavBar, ToggleBox,
    WatchedList, WatchedSummaryPanel,
};
use crate::tui::theme::theme;

use super::effects::run_effect;
use super::model::{
    AppAction, AppState, Effect, LeftPaneContent, RightPaneContent, compute_view_model,
    key_to_action, reduce_app_state,
};
use super::rating::RatingConfig;

/// Rows taken by chrome around the results list: nav bar, footer, box
/// borders and title, scroll indicators
const CHROME_ROWS: u16 = 9;

/// Number of result rows that fit in a terminal of the given height
pub fn list_height_for(terminal_height: u16) -> usize {
    usize::from(terminal_height.saturating_sub(CHROME_ROWS).max(1))
}

/// Reduce an action into the state and hand any effects to the runner
fn dispatch(
    app: &mut State<AppState>,
    action: AppAction,
    effects: &Handler<Effect>,
    list_height: usize,
) {
    let current = app.read().clone();
    let (next, pending) = reduce_app_state(current, action, list_height);
    app.set(next);
    for effect in pending {
        effects.clone()(effect);
    }
}

/// Props for the PopcornApp component
#[derive(Default, Props)]
pub struct PopcornAppProps {
    /// Movie API client; without one, searches never leave the loading state
    pub client: Option<Arc<OmdbClient>>,
    /// Rating widget configuration
    pub rating_config: Option<RatingConfig>,
}

/// Main popcorn screen
#[component]
pub fn PopcornApp<'a>(props: &PopcornAppProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let rating_config = props.rating_config.clone().unwrap_or_default();
    let mut app: State<AppState> = hooks.use_state(move || AppState::new(rating_config));
    let query_input: State<String> = hooks.use_state(String::new);

    let list_height = list_height_for(height);

    // Effects run here and feed their completion back through the reducer
    let effect_handler: Handler<Effect> = hooks.use_async_handler({
        let app_setter = app.clone();
        let client = props.client.clone();

        move |effect: Effect| {
            let mut app_setter = app_setter.clone();
            let client = client.clone();

            async move {
                let Some(client) = client else {
                    tracing::warn!("no movie API client configured, dropping {:?}", effect);
                    return;
                };
                let action = run_effect(client.as_ref(), effect).await;
                let current = app_setter.read().clone();
                let (next, _) = reduce_app_state(current, action, list_height);
                app_setter.set(next);
            }
        }
    });

    // Mirror the text input into the reducer
    let typed = query_input.to_string();
    if typed != app.read().query {
        dispatch(&mut app, AppAction::SetQuery(typed), &effect_handler, list_height);
    }

    hooks.use_terminal_events({
        let effect_handler = effect_handler.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let action = key_to_action(code, modifiers, &app.read());
                if let Some(action) = action {
                    dispatch(&mut app, action, &effect_handler, list_height);
                }
            }
            _ => {}
        }
    });

    if app.read().should_exit {
        system.exit();
    }

    let state = app.read().clone();
    let vm = compute_view_model(&state, list_height);

    let left = render_left(&vm.left.content, vm.left.is_focused);
    let right_title = match vm.right.content {
        RightPaneContent::Detail(_) => "Details",
        RightPaneContent::Watched { .. } => "Watched",
    };
    let right = render_right(&vm.right.content, &state.rating_config, vm.right.is_focused);

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            NavBar(
                query: Some(query_input),
                search_focused: vm.nav.search_focused,
                result_count: vm.nav.result_count,
            )

            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Row,
                column_gap: 1,
                padding_left: 1,
                padding_right: 1,
            ) {
                ToggleBox(
                    title: "Results".to_string(),
                    toggle_key: "[".to_string(),
                    is_open: vm.left.is_open,
                    has_focus: vm.left.is_focused,
                ) {
                    #(Some(left))
                }
                ToggleBox(
                    title: right_title.to_string(),
                    toggle_key: "]".to_string(),
                    is_open: vm.right.is_open,
                    has_focus: vm.right.is_focused,
                ) {
                    #(Some(right))
                }
            }

            Footer(shortcuts: vm.shortcuts.clone(), width: width)
        }
    }
}

/// Left pane: loading, error or the results list
fn render_left(content: &LeftPaneContent, has_focus: bool) -> AnyElement<'static> {
    match content {
        LeftPaneContent::Loading => {
            element! { EmptyState(kind: EmptyStateKind::Loading) }.into_any()
        }
        LeftPaneContent::Error(error) => {
            element! { EmptyState(kind: EmptyStateKind::Failed(error.clone())) }.into_any()
        }
        LeftPaneContent::List(list) if list.total == 0 => {
            element! { EmptyState(kind: EmptyStateKind::NoSearch) }.into_any()
        }
        LeftPaneContent::List(list) => element! {
            MovieList(
                rows: list.rows.clone(),
                scroll_offset: list.scroll_offset,
                total: list.total,
                has_focus: has_focus,
            )
        }
        .into_any(),
    }
}

/// Right pane: detail panel for the selection, otherwise the watched list
fn render_right(
    content: &RightPaneContent,
    rating_config: &RatingConfig,
    has_focus: bool,
) -> AnyElement<'static> {
    match content {
        RightPaneContent::Detail(detail) => element! {
            MovieDetailPanel(
                detail: Some(detail.clone()),
                rating_config: rating_config.clone(),
                has_focus: has_focus,
            )
        }
        .into_any(),
        RightPaneContent::Watched { summary, entries } => element! {
            View(width: 100pct, flex_grow: 1.0, flex_direction: FlexDirection::Column) {
                WatchedSummaryPanel(summary: summary.clone())
                WatchedList(entries: entries.clone())
            }
        }
        .into_any(),
    }
}
