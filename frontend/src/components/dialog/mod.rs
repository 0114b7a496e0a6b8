pub mod content;
pub mod overlay;


pub use content::{DialogContent, DialogContentProps};
pub use overlay::{DialogInner, DialogOverlay, DialogOverlayProps};

use yew::prelude::*;

use crate::ElementRef;

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    #[prop_or(true)]
    pub is_open: bool,
    #[prop_or_default]
    pub on_dismiss: Callback<()>,
    #[prop_or_default]
    pub initial_focus_ref: Option<NodeRef>,
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
    pub children: Children,
}

/// `DialogOverlay` and `DialogContent` in one. Attributes go to the content.
#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    html! {
        <DialogOverlay
            is_open={props.is_open}
            on_dismiss={props.on_dismiss.clone()}
            initial_focus_ref={props.initial_focus_ref.clone()}
        >
            <DialogContent
                id={props.id.clone()}
                class={props.class.clone()}
                style={props.style.clone()}
                aria_label={props.aria_label.clone()}
                aria_labelledby={props.aria_labelledby.clone()}
                content_ref={props.content_ref.clone()}
            >
                { for props.children.iter() }
            </DialogContent>
        </DialogOverlay>
    }
}
