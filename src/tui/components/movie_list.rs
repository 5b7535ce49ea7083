//! Scrollable search results list

use iocraft::prelude::*;

use crate::movies::SearchResult;
use crate::tui::model::MovieRowViewModel;
use crate::tui::theme::theme;

/// Marker for a poster column: a film frame when the API has a poster
pub fn poster_marker(poster_url: &str) -> &'static str {
    if poster_url.is_empty() || poster_url == "N/A" {
        "  "
    } else {
        "🎞"
    }
}

/// Props for the MovieList component
#[derive(Default, Props)]
pub struct MovieListProps {
    /// Visible rows
    pub rows: Vec<MovieRowViewModel>,
    /// First visible index
    pub scroll_offset: usize,
    /// Total number of results
    pub total: usize,
    /// Whether the list has focus
    pub has_focus: bool,
}

#[component]
pub fn MovieList(props: &MovieListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let start = props.scroll_offset;
    let end = start + props.rows.len();
    let has_more_above = start > 0;
    let has_more_below = end < props.total;

    element! {
        View(width: 100pct, flex_grow: 1.0, flex_direction: FlexDirection::Column) {
            #(if has_more_above {
                Some(element! {
                    View(height: 1, padding_left: 1) {
                        Text(content: format!("  {} more above", start), color: theme.text_dimmed)
                    }
                })
            } else {
                None
            })

            #(props.rows.iter().map(|row| {
                element! {
                    MovieRow(
                        movie: row.movie.clone(),
                        is_cursor: row.is_cursor,
                        is_selected: row.is_selected,
                        has_focus: props.has_focus && row.is_cursor,
                    )
                }
            }))

            #(if has_more_below {
                Some(element! {
                    View(height: 1, padding_left: 1) {
                        Text(
                            content: format!("  {} more below", props.total - end),
                            color: theme.text_dimmed,
                        )
                    }
                })
            } else {
                None
            })
        }
    }
}

/// Props for a single result row
#[derive(Default, Props)]
pub struct MovieRowProps {
    pub movie: SearchResult,
    /// Row is under the cursor
    pub is_cursor: bool,
    /// Row is the open selection
    pub is_selected: bool,
    /// Cursor row of a focused list
    pub has_focus: bool,
}

/// Poster marker, title and year
#[component]
pub fn MovieRow(props: &MovieRowProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let background = if props.has_focus {
        Some(theme.highlight)
    } else {
        None
    };
    let indicator = match (props.is_cursor, props.is_selected) {
        (_, true) => "●",
        (true, false) => ">",
        _ => " ",
    };
    let title_color = if props.is_selected {
        theme.selected
    } else {
        theme.text
    };

    element! {
        View(
            height: 1,
            width: 100pct,
            flex_direction: FlexDirection::Row,
            padding_left: 1,
            padding_right: 1,
            column_gap: 1,
            background_color: background,
        ) {
            Text(content: indicator, color: theme.selected)
            Text(content: poster_marker(&props.movie.poster_url), color: theme.text_dimmed)
            View(flex_grow: 1.0, overflow: Overflow::Hidden) {
                Text(
                    content: props.movie.title.clone(),
                    color: title_color,
                    weight: if props.is_selected { Weight::Bold } else { Weight::Normal },
                )
            }
            Text(content: format!("🗓 {}", props.movie.year), color: theme.text_dimmed)
        }
    }
}
