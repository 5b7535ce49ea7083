//! Star rating widget
//!
//! Draws `max_rating` stars with the hovered or committed value filled, and
//! a label to their right. Keys are mapped by the parent through
//! `tui::model::key_to_action`.

use iocraft::prelude::*;

use crate::tui::rating::{RatingConfig, StarRatingState};
use crate::tui::theme::theme;

const FULL_STAR: &str = "★";
const EMPTY_STAR: &str = "☆";

/// Star glyphs for a displayed value
pub fn star_glyphs(displayed: u8, max_rating: u8) -> Vec<&'static str> {
    (1..=max_rating)
        .map(|i| if i <= displayed { FULL_STAR } else { EMPTY_STAR })
        .collect()
}

/// Props for the StarRating component
#[derive(Default, Props)]
pub struct StarRatingProps {
    pub config: RatingConfig,
    pub state: StarRatingState,
    pub has_focus: bool,
}

#[component]
pub fn StarRating(props: &StarRatingProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let config = &props.config;
    let displayed = props.state.displayed();
    let label = config.label(displayed);
    let star_width = u32::from(config.size.max(1));

    element! {
        View(
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            border_style: if props.has_focus { BorderStyle::Round } else { BorderStyle::None },
            border_color: theme.border_focused,
            padding_left: 1,
            padding_right: 1,
        ) {
            #(star_glyphs(displayed, config.max_rating).into_iter().enumerate().map(|(i, glyph)| {
                let is_hover = props.state.hover > 0 && i + 1 == usize::from(props.state.hover);
                element! {
                    View(width: star_width) {
                        Text(
                            content: glyph,
                            color: config.color,
                            weight: if is_hover { Weight::Bold } else { Weight::Normal },
                        )
                    }
                }
            }))
            View(margin_left: 1, min_width: 3) {
                Text(content: label, color: config.color)
            }
        }
    }
}
