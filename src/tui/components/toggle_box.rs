//! Collapsible pane
//!
//! A bordered box with a "–" / "+" marker in its title row. When collapsed
//! only the title row is drawn.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the ToggleBox component
#[derive(Default, Props)]
pub struct ToggleBoxProps<'a> {
    pub title: String,
    /// Key that toggles this box, shown next to the marker
    pub toggle_key: String,
    pub is_open: bool,
    pub has_focus: bool,
    pub children: Vec<AnyElement<'a>>,
}

/// Marker shown in the title row
pub fn toggle_marker(is_open: bool) -> &'static str {
    if is_open { "–" } else { "+" }
}

#[component]
pub fn ToggleBox<'a>(props: &mut ToggleBoxProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let border_color = theme.pane_border(props.has_focus);
    let is_open = props.is_open;
    let children = std::mem::take(&mut props.children);

    element! {
        View(
            flex_grow: if is_open { 1.0 } else { 0.0 },
            width: if is_open { Size::Auto } else { Size::Length(12) },
            height: if is_open { Size::Percent(100.0) } else { Size::Length(3) },
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
        ) {
            View(
                height: 1,
                flex_shrink: 0.0,
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                padding_left: 1,
                padding_right: 1,
            ) {
                Text(content: props.title.clone(), color: theme.text, weight: Weight::Bold)
                Text(
                    content: format!("{} [{}]", toggle_marker(is_open), props.toggle_key),
                    color: theme.text_dimmed,
                )
            }
            #(if is_open {
                Some(element! {
                    View(flex_grow: 1.0, flex_direction: FlexDirection::Column, overflow: Overflow::Hidden) {
                        #(children)
                    }
                })
            } else {
                None
            })
        }
    }
}
