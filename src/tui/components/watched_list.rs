//! Watched movies list

use iocraft::prelude::*;

use super::movie_list::poster_marker;
use crate::tui::theme::theme;
use crate::watched::WatchedEntry;

/// External rating, user rating and runtime cells for a row
pub fn entry_cells(entry: &WatchedEntry) -> (String, String, String) {
    let external = entry
        .external_rating
        .map(|r| format!("{r:.1}"))
        .unwrap_or_else(|| "–".to_string());
    let runtime = entry
        .runtime_minutes
        .map(|m| format!("{m} min"))
        .unwrap_or_else(|| "–".to_string());
    (external, entry.user_rating.to_string(), runtime)
}

/// Props for the WatchedList component
#[derive(Default, Props)]
pub struct WatchedListProps {
    pub entries: Vec<WatchedEntry>,
}

#[component]
pub fn WatchedList(props: &WatchedListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(width: 100pct, flex_grow: 1.0, flex_direction: FlexDirection::Column, overflow: Overflow::Hidden) {
            #(props.entries.iter().map(|entry| {
                let (external, user, runtime) = entry_cells(entry);
                element! {
                    View(
                        height: 1,
                        width: 100pct,
                        flex_direction: FlexDirection::Row,
                        padding_left: 1,
                        padding_right: 1,
                        column_gap: 1,
                    ) {
                        Text(content: poster_marker(&entry.poster_url), color: theme.text_dimmed)
                        View(flex_grow: 1.0, overflow: Overflow::Hidden) {
                            Text(content: entry.title.clone(), color: theme.text)
                        }
                        Text(content: format!("⭐ {}", external), color: theme.external_rating)
                        Text(content: format!("🌟 {}", user), color: theme.user_rating)
                        Text(content: format!("⏳ {}", runtime), color: theme.runtime)
                    }
                }
            }))
        }
    }
}
