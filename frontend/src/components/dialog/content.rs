use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::use_forwarded_ref;
use crate::services::events::compose_listeners;
use crate::ElementRef;

#[derive(Properties, PartialEq, Clone)]
pub struct DialogContentProps {
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
    #[prop_or_default]
    pub content_ref: Option<ElementRef>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// The modal surface. Clicks inside never reach the overlay.
#[function_component(DialogContent)]
pub fn dialog_content(props: &DialogContentProps) -> Html {
    let node_ref = use_node_ref();
    use_forwarded_ref(node_ref.clone(), vec![props.content_ref.clone()]);

    let on_click = compose_listeners(
        props.onclick.clone(),
        Callback::from(|e: MouseEvent| e.stop_propagation()),
    );

    html! {
        <div
            ref={node_ref}
            id={props.id.clone()}
            class={props.class.clone()}
            style={props.style.clone()}
            aria-label={props.aria_label.clone()}
            aria-labelledby={props.aria_labelledby.clone()}
            aria-modal="true"
            role="dialog"
            tabindex="-1"
            data-dialog-content=""
            onclick={on_click}
        >
            { for props.children.iter() }
        </div>
    }
}
