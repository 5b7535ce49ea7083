//! Movie detail panel
//!
//! Shows the selected title's record, the star rating widget and the
//! "add to list" action.

use iocraft::prelude::*;

use super::empty_state::{EmptyState, EmptyStateKind};
use super::star_rating::StarRating;
use crate::movies::MovieDetail;
use crate::tui::model::DetailViewModel;
use crate::tui::rating::RatingConfig;
use crate::tui::theme::theme;

/// "Released • Runtime", skipping missing parts
pub fn release_line(detail: &MovieDetail) -> String {
    [detail.release_date.as_str(), detail.runtime.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" • ")
}

/// Props for the MovieDetailPanel component
#[derive(Default, Props)]
pub struct MovieDetailPanelProps {
    pub detail: Option<DetailViewModel>,
    pub rating_config: RatingConfig,
    pub has_focus: bool,
}

#[component]
pub fn MovieDetailPanel(props: &MovieDetailPanelProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(vm) = props.detail.clone() else {
        return element! {
            EmptyState(kind: EmptyStateKind::NoSearch)
        }
        .into_any();
    };

    if vm.is_loading {
        return element! { EmptyState(kind: EmptyStateKind::Loading) }.into_any();
    }

    let Some(detail) = vm.detail.clone() else {
        let kind = match vm.error.clone() {
            Some(error) => EmptyStateKind::Failed(error),
            None => EmptyStateKind::Loading,
        };
        return element! { EmptyState(kind: kind) }.into_any();
    };

    let can_add = vm.can_add;

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            padding_left: 1,
            padding_right: 1,
            overflow: Overflow::Hidden,
        ) {
            // Header
            View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
                Text(content: "← [Esc]", color: theme.text_dimmed)
                Text(content: detail.title.clone(), color: theme.text, weight: Weight::Bold)
                Text(content: release_line(&detail), color: theme.text_dimmed)
                Text(content: detail.genre.clone(), color: theme.text_dimmed)
                Text(
                    content: format!("⭐ {} IMDb rating", detail.external_rating),
                    color: theme.external_rating,
                )
            }

            // Rating
            View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
                StarRating(
                    config: props.rating_config.clone(),
                    state: vm.rating,
                    has_focus: props.has_focus,
                )
                #(if can_add {
                    Some(element! {
                        View(padding_left: 1) {
                            Text(
                                content: "+ Add to list [a]",
                                color: theme.selected,
                                weight: Weight::Bold,
                            )
                        }
                    })
                } else {
                    None
                })
            }

            // Body
            Text(content: detail.plot.clone(), color: theme.text_dimmed)
            View(margin_top: 1) {
                Text(content: format!("Starring {}", detail.actors), color: theme.text)
            }
            Text(content: format!("Directed by {}", detail.director), color: theme.text)
        }
    }
    .into_any()
}
