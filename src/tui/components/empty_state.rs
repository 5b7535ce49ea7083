//! Empty state component
//!
//! Shown in a pane that has nothing to list: while loading, after a failed
//! load, or before the first search.

use iocraft::prelude::*;

use crate::tui::model::{LoadError, LoadErrorKind};
use crate::tui::theme::theme;

/// Type of empty state to display
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// No search has produced results yet
    #[default]
    NoSearch,
    /// A request is in flight
    Loading,
    /// A request failed or found nothing
    Failed(LoadError),
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    /// The kind of empty state to display
    pub kind: EmptyStateKind,
}

/// Icon, message and color for an empty state
fn describe(kind: &EmptyStateKind) -> (&'static str, String, Color) {
    let theme = theme();
    match kind {
        EmptyStateKind::NoSearch => (
            "?",
            "Type at least 3 characters to search".to_string(),
            theme.text_dimmed,
        ),
        EmptyStateKind::Loading => ("~", "Loading...".to_string(), theme.text_dimmed),
        EmptyStateKind::Failed(error) => {
            let icon = match error.kind {
                LoadErrorKind::NotFound => "?",
                LoadErrorKind::Transport => "x",
            };
            (icon, error.message.clone(), theme.error_color(error.kind))
        }
    }
}

/// Centered icon and message
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let (icon, message, color) = describe(&props.kind);

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 1,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: color,
                margin_bottom: 1,
            ) {
                Text(content: icon, color: color, weight: Weight::Bold)
            }
            View(max_width: 60) {
                Text(content: message, color: color)
            }
        }
    }
}
