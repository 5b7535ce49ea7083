//! Shortcut bar along the bottom edge
//!
//! One row only. Pinned shortcuts (quit) sit at the right edge; the rest fill
//! from the left and anything that does not fit collapses into a "+N" marker.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Columns between two shortcuts
const GAP: usize = 2;

/// A key and the action it triggers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// Key as shown, e.g. "a", "C-q", "1-9,0"
    pub key: String,
    pub action: String,
    /// Drawn at the right edge and never hidden
    pub pinned: bool,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
            pinned: false,
        }
    }

    pub fn pinned(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            pinned: true,
            ..Self::new(key, action)
        }
    }

    /// Rendered width of "[key] action"
    pub fn width(&self) -> usize {
        self.key.chars().count() + self.action.chars().count() + 3
    }
}

/// Split shortcuts into the unpinned ones that fit in `columns`, the number
/// left out, and the pinned ones
pub fn fit_shortcuts(shortcuts: &[Shortcut], columns: usize) -> (Vec<Shortcut>, usize, Vec<Shortcut>) {
    let (pinned, rest): (Vec<_>, Vec<_>) = shortcuts.iter().cloned().partition(|s| s.pinned);

    let pinned_width: usize = pinned.iter().map(|s| s.width() + GAP).sum();
    let mut budget = columns.saturating_sub(pinned_width);

    let mut shown = Vec::new();
    for (i, shortcut) in rest.iter().enumerate() {
        let remaining = rest.len() - i - 1;
        // Leave room for the "+N" marker when more follow
        let marker = if remaining > 0 { GAP + 3 } else { 0 };
        let needed = shortcut.width() + GAP;
        if needed + marker > budget {
            break;
        }
        budget -= needed;
        shown.push(shortcut.clone());
    }

    let hidden = rest.len() - shown.len();
    (shown, hidden, pinned)
}

#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: Vec<Shortcut>,
    /// Terminal width in columns
    pub width: u16,
}

#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    // Horizontal padding on both sides
    let columns = usize::from(props.width).saturating_sub(2);
    let (shown, hidden, pinned) = fit_shortcuts(&props.shortcuts, columns);

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.nav_background,
            overflow: Overflow::Hidden,
        ) {
            View(flex_direction: FlexDirection::Row, column_gap: 2) {
                #(shown.into_iter().map(|shortcut| element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", shortcut.key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(content: format!(" {}", shortcut.action), color: theme.text)
                    }
                }))
                #((hidden > 0).then(|| element! {
                    Text(content: format!("+{hidden}"), color: theme.text_dimmed)
                }))
            }
            View(flex_direction: FlexDirection::Row, column_gap: 2) {
                #(pinned.into_iter().map(|shortcut| element! {
                    Text(
                        content: format!("[{}] {}", shortcut.key, shortcut.action),
                        color: theme.text_dimmed,
                    )
                }))
            }
        }
    }
}
