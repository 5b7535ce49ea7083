//! Watched list summary
//!
//! Count plus average external rating, user rating and runtime.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::watched::{WatchedSummary, format_stat};

/// The four summary cells as (icon, text)
pub fn summary_cells(summary: &WatchedSummary) -> [(&'static str, String); 4] {
    let runtime = match summary.avg_runtime {
        Some(_) => format!("{} min", format_stat(summary.avg_runtime, 0)),
        None => format_stat(None, 0),
    };
    [
        ("#", format!("{} movies", summary.count)),
        ("⭐", format_stat(summary.avg_external_rating, 2)),
        ("🌟", format_stat(summary.avg_user_rating, 2)),
        ("⏳", runtime),
    ]
}

/// Props for the WatchedSummaryPanel component
#[derive(Default, Props)]
pub struct WatchedSummaryPanelProps {
    pub summary: WatchedSummary,
}

#[component]
pub fn WatchedSummaryPanel(props: &WatchedSummaryPanelProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let colors = [
        theme.text,
        theme.external_rating,
        theme.user_rating,
        theme.runtime,
    ];

    element! {
        View(
            width: 100pct,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Column,
            padding_left: 1,
            padding_right: 1,
            border_edges: Edges::Bottom,
            border_style: BorderStyle::Single,
            border_color: theme.border,
        ) {
            Text(content: "MOVIES YOU WATCHED", color: theme.text, weight: Weight::Bold)
            View(flex_direction: FlexDirection::Row, column_gap: 3) {
                #(summary_cells(&props.summary).into_iter().zip(colors).map(|((icon, text), color)| {
                    element! {
                        View(flex_direction: FlexDirection::Row, column_gap: 1) {
                            Text(content: icon, color: color)
                            Text(content: text, color: color)
                        }
                    }
                }))
            }
        }
    }
}
