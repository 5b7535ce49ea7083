//! Popcorn model types for testable state management
//!
//! This module separates state (AppState) from view (AppViewModel) and from
//! I/O (Effect), enabling comprehensive unit testing without the iocraft
//! framework or the network.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::movies::{MovieDetail, SearchResult};
use crate::tui::components::footer::Shortcut;
use crate::tui::components::shortcuts::ShortcutsBuilder;
use crate::watched::{WatchedEntry, WatchedSummary};

use super::rating::{RatingConfig, StarRatingState};

/// Queries shorter than this (after trimming) never reach the API
pub const MIN_QUERY_LEN: usize = 3;

pub const NOT_FOUND_MESSAGE: &str = "Movie not found";
pub const SEARCH_FAILED_MESSAGE: &str = "Something went wrong with fetching movies";
pub const DETAIL_FAILED_MESSAGE: &str = "Something went wrong with loading movie details";

// ============================================================================
// State Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// The API answered but had nothing for the request
    NotFound,
    /// Network failure, non-2xx status or an undecodable body
    Transport,
}

/// A user-facing load failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub kind: LoadErrorKind,
    pub message: String,
}

impl LoadError {
    pub fn not_found() -> Self {
        Self {
            kind: LoadErrorKind::NotFound,
            message: NOT_FOUND_MESSAGE.to_string(),
        }
    }

    pub fn search_failed() -> Self {
        Self {
            kind: LoadErrorKind::Transport,
            message: SEARCH_FAILED_MESSAGE.to_string(),
        }
    }

    pub fn detail_failed() -> Self {
        Self {
            kind: LoadErrorKind::Transport,
            message: DETAIL_FAILED_MESSAGE.to_string(),
        }
    }
}

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    Results,
    Detail,
}

/// Everything tied to the current selection. Dropped when the selection clears.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    /// Id of the selected title
    pub id: String,
    /// Loaded record, if the lookup has succeeded
    pub detail: Option<MovieDetail>,
    pub is_loading: bool,
    pub error: Option<LoadError>,
    /// Rating widget state; `rating.rating` is the pending user rating
    pub rating: StarRatingState,
}

impl DetailState {
    fn loading(id: String, default_rating: u8) -> Self {
        Self {
            id,
            detail: None,
            is_loading: true,
            error: None,
            rating: StarRatingState::new(default_rating),
        }
    }

    /// Pending user rating, 0 when unrated
    pub fn user_rating(&self) -> u8 {
        self.rating.rating
    }

    /// Whether "add to list" is currently allowed
    pub fn can_add(&self) -> bool {
        self.detail.is_some() && self.user_rating() > 0
    }
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    // Data
    /// Current search text as typed
    pub query: String,
    /// Results of the latest completed search
    pub results: Vec<SearchResult>,
    /// Watched collection, append-only
    pub watched: Vec<WatchedEntry>,
    /// Current selection and its detail state
    pub selected: Option<DetailState>,

    // Search status
    /// Whether a search request is in flight
    pub is_loading: bool,
    /// Last search failure, cleared by the next search
    pub error: Option<LoadError>,

    // Request tracking
    /// Bumped by every query change; completions must match it
    pub search_generation: u64,
    /// Bumped by every selection change; completions must match it
    pub detail_generation: u64,

    // View state
    pub focus: Focus,
    /// Cursor row in the results list
    pub selected_index: usize,
    /// Scroll offset for the results list
    pub scroll_offset: usize,
    /// Whether the left (results) box is expanded
    pub left_open: bool,
    /// Whether the right (detail / watched) box is expanded
    pub right_open: bool,

    pub rating_config: RatingConfig,
    /// Whether the application should exit
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RatingConfig::default())
    }
}

impl AppState {
    pub fn new(rating_config: RatingConfig) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            watched: Vec::new(),
            selected: None,
            is_loading: false,
            error: None,
            search_generation: 0,
            detail_generation: 0,
            focus: Focus::default(),
            selected_index: 0,
            scroll_offset: 0,
            left_open: true,
            right_open: true,
            rating_config,
            should_exit: false,
        }
    }

    /// Id of the selected title, if any
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|s| s.id.as_str())
    }
}

// ============================================================================
// Action Types
// ============================================================================

/// All possible actions on the app
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Search
    /// Replace the query text and start a search if it is long enough
    SetQuery(String),
    /// A search request finished
    SearchCompleted {
        generation: u64,
        result: Result<Vec<SearchResult>, LoadError>,
    },

    // Selection
    /// Select a title by id, or clear the selection if it is already selected
    SelectMovie(String),
    /// Select the title under the results cursor
    SelectCursor,
    /// Clear the selection
    CloseDetail,
    /// A detail lookup finished
    DetailLoaded {
        generation: u64,
        result: Result<MovieDetail, LoadError>,
    },

    // Rating
    /// Commit a rating directly
    SetUserRating(u8),
    /// Move the rating cursor one star right
    RatingHoverNext,
    /// Move the rating cursor one star left
    RatingHoverPrev,
    /// Commit the star under the rating cursor
    CommitRating,
    /// Append the selected title to the watched list and close it
    AddWatched,

    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    PageUp,
    PageDown,

    // Focus and layout
    FocusSearch,
    FocusResults,
    CycleFocus,
    ToggleLeftPane,
    ToggleRightPane,

    // App
    Quit,
}

/// Asynchronous work requested by a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Search { generation: u64, query: String },
    FetchDetail { generation: u64, id: String },
}

// ============================================================================
// View Model Types
// ============================================================================

/// Computed view model for rendering the whole screen
#[derive(Debug, Clone)]
pub struct AppViewModel {
    pub nav: NavBarViewModel,
    pub left: LeftPaneViewModel,
    pub right: RightPaneViewModel,
    /// Keyboard shortcuts to display in footer
    pub shortcuts: Vec<Shortcut>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavBarViewModel {
    pub query: String,
    pub result_count: usize,
    pub search_focused: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeftPaneViewModel {
    pub is_open: bool,
    pub is_focused: bool,
    pub content: LeftPaneContent,
}

/// Left pane priority: loading, then error, then the list
#[derive(Debug, Clone, PartialEq)]
pub enum LeftPaneContent {
    Loading,
    Error(LoadError),
    List(MovieListViewModel),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovieListViewModel {
    /// Visible rows only
    pub rows: Vec<MovieRowViewModel>,
    /// Index of the first visible row
    pub scroll_offset: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovieRowViewModel {
    pub movie: SearchResult,
    /// Row is under the cursor
    pub is_cursor: bool,
    /// Row is the current selection
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RightPaneViewModel {
    pub is_open: bool,
    pub is_focused: bool,
    pub content: RightPaneContent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RightPaneContent {
    Detail(DetailViewModel),
    Watched {
        summary: WatchedSummary,
        entries: Vec<WatchedEntry>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailViewModel {
    pub id: String,
    pub is_loading: bool,
    pub detail: Option<MovieDetail>,
    pub error: Option<LoadError>,
    pub rating: StarRatingState,
    pub rating_label: String,
    pub can_add: bool,
}

// ============================================================================
// Pure Functions
// ============================================================================

/// Pure function: compute view model from state
pub fn compute_view_model(state: &AppState, list_height: usize) -> AppViewModel {
    let selected_id = state.selected_id();

    let left_content = if state.is_loading {
        LeftPaneContent::Loading
    } else if let Some(error) = &state.error {
        LeftPaneContent::Error(error.clone())
    } else {
        let rows = state
            .results
            .iter()
            .enumerate()
            .skip(state.scroll_offset)
            .take(list_height.max(1))
            .map(|(index, movie)| MovieRowViewModel {
                movie: movie.clone(),
                is_cursor: index == state.selected_index,
                is_selected: selected_id == Some(movie.id.as_str()),
            })
            .collect();
        LeftPaneContent::List(MovieListViewModel {
            rows,
            scroll_offset: state.scroll_offset,
            total: state.results.len(),
        })
    };

    let right_content = match &state.selected {
        Some(selected) => RightPaneContent::Detail(DetailViewModel {
            id: selected.id.clone(),
            is_loading: selected.is_loading,
            detail: selected.detail.clone(),
            error: selected.error.clone(),
            rating: selected.rating,
            rating_label: state.rating_config.label(selected.rating.displayed()),
            can_add: selected.can_add(),
        }),
        None => RightPaneContent::Watched {
            summary: WatchedSummary::compute(&state.watched),
            entries: state.watched.clone(),
        },
    };

    AppViewModel {
        nav: NavBarViewModel {
            query: state.query.clone(),
            result_count: state.results.len(),
            search_focused: state.focus == Focus::Search,
        },
        left: LeftPaneViewModel {
            is_open: state.left_open,
            is_focused: state.focus == Focus::Results,
            content: left_content,
        },
        right: RightPaneViewModel {
            is_open: state.right_open,
            is_focused: state.focus == Focus::Detail,
            content: right_content,
        },
        shortcuts: compute_shortcuts(state),
    }
}

/// Footer shortcuts for the focused area
pub fn compute_shortcuts(state: &AppState) -> Vec<Shortcut> {
    match state.focus {
        Focus::Search => ShortcutsBuilder::new()
            .add("Enter", "Results")
            .add("Tab", "Next Pane")
            .with_quit()
            .build(),
        Focus::Results => {
            let builder = ShortcutsBuilder::new()
                .with_navigation()
                .add("Enter", "Details")
                .add("/", "Search")
                .add("[/]", "Toggle Box");
            let builder = if state.selected.is_some() {
                builder.add("Esc", "Close")
            } else {
                builder
            };
            builder.with_quit().build()
        }
        Focus::Detail => {
            let can_add = state.selected.as_ref().is_some_and(DetailState::can_add);
            let builder = ShortcutsBuilder::new()
                .add("1-9,0", "Rate")
                .add("h/l", "Star")
                .add("Enter", "Set");
            let builder = if can_add {
                builder.add("a", "Add to List")
            } else {
                builder
            };
            builder.add("Esc", "Back").with_quit().build()
        }
    }
}

/// Pure function: apply action to state (reducer pattern)
///
/// Returns the new state and the effects the caller must run. The reducer
/// never performs I/O; effect completions come back as actions.
pub fn reduce_app_state(
    mut state: AppState,
    action: AppAction,
    list_height: usize,
) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();
    let result_count = state.results.len();

    match action {
        // Search
        AppAction::SetQuery(query) => {
            state.search_generation += 1;
            state.selected_index = 0;
            state.scroll_offset = 0;

            let trimmed = query.trim().to_string();
            state.query = query;

            if trimmed.chars().count() < MIN_QUERY_LEN {
                state.results.clear();
                state.error = None;
                state.is_loading = false;
            } else {
                state.is_loading = true;
                state.error = None;
                effects.push(Effect::Search {
                    generation: state.search_generation,
                    query: trimmed,
                });
            }
        }
        AppAction::SearchCompleted { generation, result } => {
            if generation != state.search_generation {
                tracing::debug!(
                    "dropping stale search response (generation {} != {})",
                    generation,
                    state.search_generation
                );
                return (state, effects);
            }

            state.is_loading = false;
            state.selected_index = 0;
            state.scroll_offset = 0;
            match result {
                Ok(results) if !results.is_empty() => {
                    state.results = results;
                    state.error = None;
                }
                Ok(_) => {
                    state.results.clear();
                    state.error = Some(LoadError::not_found());
                }
                Err(error) => {
                    state.results.clear();
                    state.error = Some(error);
                }
            }
        }

        // Selection
        AppAction::SelectMovie(id) => {
            state.detail_generation += 1;
            if state.selected_id() == Some(id.as_str()) {
                close_detail(&mut state);
            } else {
                effects.push(Effect::FetchDetail {
                    generation: state.detail_generation,
                    id: id.clone(),
                });
                state.selected = Some(DetailState::loading(
                    id,
                    state.rating_config.default_rating,
                ));
                state.focus = Focus::Detail;
            }
        }
        AppAction::SelectCursor => {
            if let Some(movie) = state.results.get(state.selected_index) {
                let id = movie.id.clone();
                return reduce_app_state(state, AppAction::SelectMovie(id), list_height);
            }
        }
        AppAction::CloseDetail => {
            if state.selected.is_some() {
                state.detail_generation += 1;
                close_detail(&mut state);
            }
        }
        AppAction::DetailLoaded { generation, result } => {
            if generation != state.detail_generation {
                tracing::debug!(
                    "dropping stale detail response (generation {} != {})",
                    generation,
                    state.detail_generation
                );
                return (state, effects);
            }
            if let Some(selected) = state.selected.as_mut() {
                selected.is_loading = false;
                match result {
                    Ok(detail) => {
                        selected.detail = Some(detail);
                        selected.error = None;
                    }
                    Err(error) => {
                        selected.detail = None;
                        selected.error = Some(error);
                    }
                }
            }
        }

        // Rating
        AppAction::SetUserRating(value) => {
            let max = state.rating_config.max_rating;
            if let Some(selected) = rateable(&mut state) {
                selected.rating.set(value, max);
            }
        }
        AppAction::RatingHoverNext => {
            let max = state.rating_config.max_rating;
            if let Some(selected) = rateable(&mut state) {
                selected.rating.hover_next(max);
            }
        }
        AppAction::RatingHoverPrev => {
            if let Some(selected) = rateable(&mut state) {
                selected.rating.hover_prev();
            }
        }
        AppAction::CommitRating => {
            let max = state.rating_config.max_rating;
            if let Some(selected) = rateable(&mut state) {
                selected.rating.commit(max);
            }
        }
        AppAction::AddWatched => {
            let entry = state
                .selected
                .as_ref()
                .filter(|s| s.can_add())
                .and_then(|s| {
                    let detail = s.detail.as_ref()?;
                    match WatchedEntry::from_detail(detail, s.user_rating()) {
                        Ok(entry) => Some(entry),
                        Err(e) => {
                            tracing::warn!("cannot add {} to watched list: {}", s.id, e);
                            None
                        }
                    }
                });

            if let Some(entry) = entry {
                tracing::info!("added {} ({}) to watched list", entry.title, entry.id);
                state.watched = state
                    .watched
                    .iter()
                    .cloned()
                    .chain(std::iter::once(entry))
                    .collect();
                state.detail_generation += 1;
                close_detail(&mut state);
            }
        }

        // Navigation
        AppAction::MoveUp => {
            state.selected_index = state.selected_index.saturating_sub(1);
            state.scroll_offset =
                adjust_scroll(state.scroll_offset, state.selected_index, list_height);
        }
        AppAction::MoveDown => {
            if result_count > 0 {
                state.selected_index = (state.selected_index + 1).min(result_count - 1);
                state.scroll_offset =
                    adjust_scroll(state.scroll_offset, state.selected_index, list_height);
            }
        }
        AppAction::GoToTop => {
            state.selected_index = 0;
            state.scroll_offset = 0;
        }
        AppAction::GoToBottom => {
            if result_count > 0 {
                state.selected_index = result_count - 1;
                state.scroll_offset =
                    adjust_scroll(state.scroll_offset, state.selected_index, list_height);
            }
        }
        AppAction::PageUp => {
            let jump = (list_height / 2).max(1);
            state.selected_index = state.selected_index.saturating_sub(jump);
            state.scroll_offset =
                adjust_scroll(state.scroll_offset, state.selected_index, list_height);
        }
        AppAction::PageDown => {
            if result_count > 0 {
                let jump = (list_height / 2).max(1);
                state.selected_index = (state.selected_index + jump).min(result_count - 1);
                state.scroll_offset =
                    adjust_scroll(state.scroll_offset, state.selected_index, list_height);
            }
        }

        // Focus and layout
        AppAction::FocusSearch => {
            state.focus = Focus::Search;
        }
        AppAction::FocusResults => {
            state.focus = Focus::Results;
        }
        AppAction::CycleFocus => {
            state.focus = match state.focus {
                Focus::Search => Focus::Results,
                Focus::Results if state.selected.is_some() => Focus::Detail,
                Focus::Results | Focus::Detail => Focus::Search,
            };
        }
        AppAction::ToggleLeftPane => {
            state.left_open = !state.left_open;
        }
        AppAction::ToggleRightPane => {
            state.right_open = !state.right_open;
        }

        // App
        AppAction::Quit => {
            state.should_exit = true;
        }
    }

    (state, effects)
}

fn close_detail(state: &mut AppState) {
    state.selected = None;
    if state.focus == Focus::Detail {
        state.focus = Focus::Results;
    }
}

/// The selection, if its detail has loaded and can take a rating
fn rateable(state: &mut AppState) -> Option<&mut DetailState> {
    state.selected.as_mut().filter(|s| s.detail.is_some())
}

/// Adjust scroll offset to keep selected item visible
pub fn adjust_scroll(scroll_offset: usize, selected_index: usize, list_height: usize) -> usize {
    if list_height == 0 {
        return 0;
    }

    if selected_index < scroll_offset {
        return selected_index;
    }

    if selected_index >= scroll_offset + list_height {
        return selected_index.saturating_sub(list_height - 1);
    }

    scroll_offset
}

/// Convert a key event to an AppAction (pure function)
///
/// Returns `None` if the key doesn't map to any action. Plain characters in
/// the search box are handled by the text input itself.
pub fn key_to_action(code: KeyCode, modifiers: KeyModifiers, state: &AppState) -> Option<AppAction> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('q') => Some(AppAction::Quit),
            _ => None,
        };
    }

    if code == KeyCode::Tab {
        return Some(AppAction::CycleFocus);
    }

    match state.focus {
        Focus::Search => search_key_to_action(code),
        Focus::Results => results_key_to_action(code, state),
        Focus::Detail => detail_key_to_action(code, state),
    }
}

fn search_key_to_action(code: KeyCode) -> Option<AppAction> {
    match code {
        KeyCode::Enter | KeyCode::Down | KeyCode::Esc => Some(AppAction::FocusResults),
        _ => None,
    }
}

fn results_key_to_action(code: KeyCode, state: &AppState) -> Option<AppAction> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(AppAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppAction::MoveUp),
        KeyCode::Char('g') | KeyCode::Home => Some(AppAction::GoToTop),
        KeyCode::Char('G') | KeyCode::End => Some(AppAction::GoToBottom),
        KeyCode::PageUp => Some(AppAction::PageUp),
        KeyCode::PageDown => Some(AppAction::PageDown),
        KeyCode::Enter => Some(AppAction::SelectCursor),
        KeyCode::Char('/') => Some(AppAction::FocusSearch),
        KeyCode::Char('[') => Some(AppAction::ToggleLeftPane),
        KeyCode::Char(']') => Some(AppAction::ToggleRightPane),
        KeyCode::Esc if state.selected.is_some() => Some(AppAction::CloseDetail),
        KeyCode::Char('q') => Some(AppAction::Quit),
        _ => None,
    }
}

fn detail_key_to_action(code: KeyCode, state: &AppState) -> Option<AppAction> {
    match code {
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .map(AppAction::SetUserRating),
        KeyCode::Char('0') if state.rating_config.max_rating >= 10 => {
            Some(AppAction::SetUserRating(10))
        }
        KeyCode::Char('h') | KeyCode::Left => Some(AppAction::RatingHoverPrev),
        KeyCode::Char('l') | KeyCode::Right => Some(AppAction::RatingHoverNext),
        KeyCode::Enter | KeyCode::Char(' ') => Some(AppAction::CommitRating),
        KeyCode::Char('a') => Some(AppAction::AddWatched),
        KeyCode::Esc | KeyCode::Backspace => Some(AppAction::CloseDetail),
        KeyCode::Char('/') => Some(AppAction::FocusSearch),
        KeyCode::Char('[') => Some(AppAction::ToggleLeftPane),
        KeyCode::Char(']') => Some(AppAction::ToggleRightPane),
        KeyCode::Char('q') => Some(AppAction::Quit),
        _ => None,
    }
}
