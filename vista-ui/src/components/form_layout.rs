//! Containers that size the controls inside them.

use crate::state::{FormContext, InputGroupContext};
use dioxus::prelude::*;
use vista_core::theme::ControlSize;

#[derive(Props, Clone, PartialEq)]
pub struct FormLayoutProps {
    #[props(default)]
    pub size: ControlSize,
    pub children: Element,
}

/// Form wrapper; controls inside default to its size.
#[component]
pub fn FormLayout(props: FormLayoutProps) -> Element {
    let size = props.size;
    use_context_provider(move || FormContext { size });

    rsx! {
        form {
            class: "form form-{size}",
            onsubmit: move |evt: FormEvent| evt.prevent_default(),
            {props.children}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct InputGroupProps {
    #[props(default)]
    pub size: ControlSize,
    pub children: Element,
}

/// Groups controls on one row; its size beats the form's.
#[component]
pub fn InputGroup(props: InputGroupProps) -> Element {
    let size = props.size;
    use_context_provider(move || InputGroupContext { size });

    rsx! {
        div {
            class: "input-group input-group-{size}",
            style: "display: flex; gap: 8px; align-items: center;",
            {props.children}
        }
    }
}
