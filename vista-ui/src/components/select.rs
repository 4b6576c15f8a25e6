//! Themed single-value select.
//!
//! Styling comes from `vista_core::select::SelectStyles`, rebuilt on every
//! render from the theme context, the resolved size and the form validity
//! flag. The control keeps only UI state of its own (focus, open, hover).

use super::icons::{Icon, ICON_CHECK};
use super::indicators::{ClearIndicator, DropdownIndicator, LoadingIndicator};
use crate::state::{use_theme, FormContext, InputGroupContext};
use dioxus::prelude::*;
use vista_core::form::FormState;
use vista_core::select::{
    check_icon_class, control_class, option_class, resolve_size, select_class, SelectStyleOverrides,
    SelectStyles, CLASS_PREFIX,
};
use vista_core::theme::ControlSize;

/// One entry in the menu.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    pub options: Vec<SelectOption>,
    /// Value of the selected option
    #[props(default)]
    pub value: Option<String>,
    /// Called with the new value, or `None` when cleared
    pub on_change: EventHandler<Option<String>>,
    #[props(default)]
    pub on_blur: Option<EventHandler<()>>,
    /// Overrides the input group, form and theme sizes
    #[props(default)]
    pub size: Option<ControlSize>,
    #[props(default)]
    pub class: Option<String>,
    #[props(default = "Select...".to_string())]
    pub placeholder: String,
    #[props(default = false)]
    pub is_clearable: bool,
    #[props(default = false)]
    pub is_disabled: bool,
    #[props(default = false)]
    pub is_loading: bool,
    /// Form field this control is bound to
    #[props(default)]
    pub field: Option<String>,
    /// `{ touched, errors }` of the enclosing form
    #[props(default)]
    pub form: Option<FormState>,
    #[props(default)]
    pub styles: SelectStyleOverrides,
}

#[component]
pub fn Select(props: SelectProps) -> Element {
    let theme = use_theme();
    let form_size = try_use_context::<FormContext>().map(|ctx| ctx.size);
    let group_size = try_use_context::<InputGroupContext>().map(|ctx| ctx.size);

    let mut focused = use_signal(|| false);
    let mut open = use_signal(|| false);
    let mut hovered = use_signal(|| false);
    let mut focused_option = use_signal(|| None::<usize>);

    let config = theme.config.read().clone();
    let tokens = theme.tokens.read().clone();
    let size = resolve_size(props.size, group_size, form_size, config.control_size);

    let is_invalid = match (&props.form, &props.field) {
        (Some(form), Some(field)) => form.is_invalid(field),
        _ => false,
    };

    let styles = SelectStyles::new(&tokens, config.mode, size, is_invalid).with_overrides(props.styles.clone());
    let disabled = props.is_disabled;

    let mut control_style = styles.control(focused(), disabled);
    if hovered() && !disabled {
        control_style.merge(&styles.control_hover(focused()));
    }
    let control_css = control_style.to_css();
    let menu_css = styles.menu().to_css();
    let input_css = styles.input().to_css();
    let root_class = select_class(size, props.class.as_deref());
    let control_classes = format!("{} {}__control", control_class(size), CLASS_PREFIX);
    let theme_color_class = config.theme_color_class();
    let check_class = check_icon_class(&theme_color_class);
    let check_color = config.mode.pick(tokens.white.clone(), tokens.primary.clone());

    let selected_label = props
        .value
        .as_ref()
        .and_then(|value| props.options.iter().find(|option| &option.value == value))
        .map(|option| option.label.clone());
    let has_value = selected_label.is_some();

    let tab_index = if disabled { "-1" } else { "0" };
    let on_change = props.on_change;
    let on_blur = props.on_blur;

    let rows: Vec<OptionRow> = props
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let selected = props.value.as_deref() == Some(option.value.as_str());
            let is_focused = focused_option() == Some(index);
            OptionRow {
                index,
                value: option.value.clone(),
                label: option.label.clone(),
                selected,
                disabled: option.disabled,
                class: option_class(selected, option.disabled, is_focused),
                style: styles.option(selected, is_focused, option.disabled).to_css(),
            }
        })
        .collect();

    rsx! {
        div {
            class: "{root_class}",
            style: "position: relative;",
            tabindex: tab_index,
            onfocusin: move |_| focused.set(true),
            onfocusout: move |_| {
                focused.set(false);
                open.set(false);
                if let Some(handler) = on_blur {
                    handler.call(());
                }
            },
            div {
                class: "{control_classes}",
                style: "{control_css}",
                aria_invalid: "{is_invalid}",
                aria_expanded: "{open}",
                onmouseenter: move |_| hovered.set(true),
                onmouseleave: move |_| hovered.set(false),
                onclick: move |_| {
                    if !disabled {
                        open.toggle();
                    }
                },
                div {
                    class: "{CLASS_PREFIX}__value-container",
                    style: "flex: 1; padding: 0 12px; overflow: hidden; white-space: nowrap; text-overflow: ellipsis; {input_css}",
                    if let Some(label) = selected_label.as_ref() {
                        span { class: "{CLASS_PREFIX}__single-value", "{label}" }
                    } else {
                        span {
                            class: "{CLASS_PREFIX}__placeholder",
                            style: "opacity: 0.6;",
                            "{props.placeholder}"
                        }
                    }
                }
                div {
                    class: "{CLASS_PREFIX}__indicators",
                    style: "display: flex; align-items: center; padding-right: 8px;",
                    if props.is_loading {
                        LoadingIndicator {
                            theme_color_class: theme_color_class.clone(),
                            color: tokens.primary.clone(),
                        }
                    }
                    if props.is_clearable && has_value && !disabled {
                        ClearIndicator { on_clear: move |_| on_change.call(None) }
                    }
                    DropdownIndicator {}
                }
            }
            if open() {
                div {
                    class: "{CLASS_PREFIX}__menu",
                    role: "listbox",
                    style: "{menu_css}",
                    onmouseleave: move |_| focused_option.set(None),
                    for row in rows {
                        OptionItem {
                            key: "{row.index}",
                            row: row.clone(),
                            check_class: check_class.clone(),
                            check_color: check_color.clone(),
                            on_focus: move |index: usize| focused_option.set(Some(index)),
                            on_select: move |value: String| {
                                on_change.call(Some(value));
                                open.set(false);
                            },
                        }
                    }
                }
            }
        }
    }
}

/// A menu entry as rendered in one pass.
#[derive(Clone, Debug, PartialEq)]
struct OptionRow {
    index: usize,
    value: String,
    label: String,
    selected: bool,
    disabled: bool,
    class: String,
    style: String,
}

#[derive(Props, Clone, PartialEq)]
struct OptionItemProps {
    row: OptionRow,
    check_class: String,
    check_color: String,
    on_focus: EventHandler<usize>,
    on_select: EventHandler<String>,
}

#[component]
fn OptionItem(props: OptionItemProps) -> Element {
    let row = props.row.clone();
    let index = row.index;
    let value = row.value.clone();
    let disabled = row.disabled;
    let on_focus = props.on_focus;
    let on_select = props.on_select;

    rsx! {
        div {
            class: "{row.class}",
            style: "{row.style}",
            role: "option",
            aria_selected: "{row.selected}",
            aria_disabled: "{row.disabled}",
            onmouseenter: move |_| on_focus.call(index),
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                if !disabled {
                    on_select.call(value.clone());
                }
            },
            span { class: "ml-2", "{row.label}" }
            if row.selected {
                Icon {
                    path: ICON_CHECK,
                    class: props.check_class.clone(),
                    style: "color: {props.check_color}; font-size: 1.25rem;",
                }
            }
        }
    }
}
