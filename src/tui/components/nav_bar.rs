//! Navigation bar component
//!
//! Logo on the left, the search input in the middle and the result count on
//! the right.

use iocraft::prelude::*;

use super::search_box::SearchBox;
use crate::tui::theme::theme;

/// Props for the NavBar component
#[derive(Default, Props)]
pub struct NavBarProps {
    /// Search text state bound to the input
    pub query: Option<State<String>>,
    /// Whether the search input has focus
    pub search_focused: bool,
    /// Number of results from the latest search
    pub result_count: usize,
}

/// Text for the result counter
pub fn result_count_label(count: usize) -> String {
    match count {
        1 => "Found 1 result".to_string(),
        n => format!("Found {n} results"),
    }
}

/// Top bar with logo, search input and result count
#[component]
pub fn NavBar(props: &NavBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            height: 3,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.nav_background,
        ) {
            View(flex_direction: FlexDirection::Row, gap: 1, width: 16) {
                Text(content: "🍿", color: theme.logo)
                Text(content: "popcorn", color: theme.logo, weight: Weight::Bold)
            }
            View(flex_grow: 1.0, max_width: 60) {
                SearchBox(value: props.query, has_focus: props.search_focused)
            }
            View(width: 20, justify_content: JustifyContent::End) {
                Text(content: result_count_label(props.result_count), color: theme.text)
            }
        }
    }
}
