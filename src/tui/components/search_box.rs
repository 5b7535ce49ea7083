//! Search input component
//!
//! A bordered text input bound to the movie query.

use iocraft::prelude::*;

use crate::tui::theme::theme;

const PLACEHOLDER: &str = "Search movies...";

/// Props for the SearchBox component
#[derive(Default, Props)]
pub struct SearchBoxProps {
    /// State for the search query value
    pub value: Option<State<String>>,
    /// Whether the search box has focus
    pub has_focus: bool,
}

/// Search input with magnifying glass icon
#[component]
pub fn SearchBox(props: &SearchBoxProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = theme.pane_border(props.has_focus);

    let Some(mut value) = props.value else {
        return element! {
            View(
                flex_direction: FlexDirection::Row,
                border_style: BorderStyle::Round,
                border_color: border_color,
                padding_left: 1,
                padding_right: 1,
                height: 3,
            ) {
                Text(content: "No value state provided", color: theme.text_dimmed)
            }
        };
    };

    let show_placeholder = !props.has_focus && value.read().is_empty();

    element! {
        View(
            flex_direction: FlexDirection::Row,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
            height: 3,
        ) {
            View(
                margin_right: 1,
                justify_content: JustifyContent::Center,
            ) {
                Text(
                    content: "/",
                    color: theme.text_dimmed,
                )
            }
            View(flex_grow: 1.0) {
                #(if show_placeholder {
                    Some(element! {
                        Text(content: PLACEHOLDER, color: theme.text_dimmed)
                    })
                } else {
                    None
                })
                #(if show_placeholder {
                    None
                } else {
                    Some(element! {
                        TextInput(
                            value: value.to_string(),
                            has_focus: props.has_focus,
                            on_change: move |new_value| value.set(new_value),
                            color: theme.text,
                        )
                    })
                })
            }
        }
    }
}
