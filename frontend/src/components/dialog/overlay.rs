use shared::BackdropTracker;
use web_sys::{EventTarget, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::components::portal::Portal;
use crate::hooks::{use_forwarded_ref, use_hide_outside, use_initial_focus};
use crate::services::events::compose_listeners;
use crate::services::logging::Logger;
use crate::ElementRef;

#[derive(Properties, PartialEq, Clone)]
pub struct DialogOverlayProps {
    #[prop_or(true)]
    pub is_open: bool,
    #[prop_or_default]
    pub on_dismiss: Callback<()>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub aria_labelledby: Option<AttrValue>,
    /// Receives the overlay element once it is in the document
    #[prop_or_default]
    pub overlay_ref: Option<ElementRef>,
    /// Element focused when the dialog opens. Defaults to the dialog content.
    #[prop_or_default]
    pub initial_focus_ref: Option<NodeRef>,
    /// Application root hidden from assistive technology while open
    #[prop_or_default]
    pub root_ref: Option<NodeRef>,
    /// Runs before the built-in handler; `prevent_default()` skips it
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub onmousedown: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub onkeydown: Option<Callback<KeyboardEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// Backdrop for a modal dialog. Renders nothing while closed; while open its
/// children live in a `Portal` at the end of the document body.
#[function_component(DialogOverlay)]
pub fn dialog_overlay(props: &DialogOverlayProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    html! {
        <Portal>
            <DialogInner ..props.clone() />
        </Portal>
    }
}

/// The backdrop element itself, rendered inside the portal
#[function_component(DialogInner)]
pub fn dialog_inner(props: &DialogOverlayProps) -> Html {
    let node_ref = use_node_ref();
    let tracker = use_mut_ref(BackdropTracker::<EventTarget>::new);

    use_forwarded_ref(node_ref.clone(), vec![props.overlay_ref.clone()]);
    use_initial_focus(props.initial_focus_ref.clone(), node_ref.clone());
    use_hide_outside(props.root_ref.clone());

    let on_mouse_down = {
        let tracker = tracker.clone();
        compose_listeners(
            props.onmousedown.clone(),
            Callback::from(move |e: MouseEvent| {
                tracker.borrow_mut().mouse_down(e.target());
            }),
        )
    };

    let on_click = {
        let tracker = tracker.clone();
        let on_dismiss = props.on_dismiss.clone();
        compose_listeners(
            props.onclick.clone(),
            Callback::from(move |e: MouseEvent| {
                let target = e.target();
                let on_backdrop = tracker.borrow_mut().click(target.as_ref());
                if on_backdrop {
                    e.stop_propagation();
                    Logger::debug_with_component("dialog-overlay", "backdrop clicked, dismissing");
                    on_dismiss.emit(());
                }
            }),
        )
    };

    let on_key_down = {
        let on_dismiss = props.on_dismiss.clone();
        compose_listeners(
            props.onkeydown.clone(),
            Callback::from(move |e: KeyboardEvent| {
                if e.key() == "Escape" {
                    e.stop_propagation();
                    Logger::debug_with_component("dialog-overlay", "escape pressed, dismissing");
                    on_dismiss.emit(());
                }
            }),
        )
    };

    html! {
        <div
            ref={node_ref}
            id={props.id.clone()}
            class={props.class.clone()}
            style={props.style.clone()}
            aria-label={props.aria_label.clone()}
            aria-labelledby={props.aria_labelledby.clone()}
            data-dialog-overlay=""
            onclick={on_click}
            onmousedown={on_mouse_down}
            onkeydown={on_key_down}
        >
            { for props.children.iter() }
        </div>
    }
}
