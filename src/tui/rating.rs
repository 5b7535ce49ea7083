//! Star rating widget state
//!
//! The widget keeps a committed rating and a hover cursor. Rendering lives in
//! `components::star_rating`; this module holds the pure transitions.

use iocraft::prelude::Color;

use crate::config::Config;
use crate::tui::theme::theme;

/// Rating widget configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RatingConfig {
    /// Number of stars (1..=10)
    pub max_rating: u8,
    /// Terminal columns reserved per star
    pub size: u16,
    /// Star and label color
    pub color: Color,
    /// Optional per-star labels, used only when there is one per star
    pub messages: Vec<String>,
    /// Rating preselected when the widget opens
    pub default_rating: u8,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            max_rating: 10,
            size: 2,
            color: Color::Yellow,
            messages: Vec::new(),
            default_rating: 0,
        }
    }
}

impl RatingConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_rating: config.max_rating,
            default_rating: config.default_rating.min(config.max_rating),
            color: theme().star,
            messages: config.rating_messages.clone(),
            ..Default::default()
        }
    }

    /// Label for a star value, empty for 0
    pub fn label(&self, value: u8) -> String {
        if value == 0 {
            return String::new();
        }
        if self.messages.len() == usize::from(self.max_rating)
            && let Some(message) = self.messages.get(usize::from(value) - 1)
        {
            return message.clone();
        }
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StarRatingState {
    /// Committed rating, 0 when unrated
    pub rating: u8,
    /// Star under the cursor, 0 when the cursor is parked
    pub hover: u8,
}

impl StarRatingState {
    pub fn new(default_rating: u8) -> Self {
        Self {
            rating: default_rating,
            hover: 0,
        }
    }

    /// Value the stars should currently show
    pub fn displayed(&self) -> u8 {
        if self.hover > 0 {
            self.hover
        } else {
            self.rating
        }
    }

    pub fn hover_next(&mut self, max_rating: u8) {
        let from = self.displayed();
        self.hover = (from + 1).min(max_rating);
    }

    pub fn hover_prev(&mut self) {
        let from = self.displayed();
        self.hover = from.saturating_sub(1).max(1);
    }

    /// Commit `value` as the rating. Returns the value if it was in range.
    pub fn set(&mut self, value: u8, max_rating: u8) -> Option<u8> {
        if value == 0 || value > max_rating {
            return None;
        }
        self.rating = value;
        self.hover = 0;
        Some(value)
    }

    /// Commit the hovered star
    pub fn commit(&mut self, max_rating: u8) -> Option<u8> {
        self.set(self.hover, max_rating)
    }
}
