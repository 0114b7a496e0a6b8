use std::cell::RefCell;
use std::rc::Rc;

use shared::{PortalConfig, PortalEvent, PortalPhase};
use web_sys::Element;
use yew::create_portal;
use yew::prelude::*;

use crate::services::dom::MountNode;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct PortalProps {
    /// Overrides the `PortalConfig` from context
    #[prop_or_default]
    pub config: Option<PortalConfig>,
    #[prop_or_default]
    pub children: Children,
}

/// Renders its children into a container appended to `document.body`.
///
/// The first render only produces an empty anchor span; once that has been
/// committed the container is created next to the anchor's document and the
/// component re-renders through `create_portal`.
#[function_component(Portal)]
pub fn portal(props: &PortalProps) -> Html {
    let anchor_ref = use_node_ref();
    let phase = use_mut_ref(|| PortalPhase::Unmounted);
    let mount_node = use_state(|| Option::<Rc<MountNode>>::None);
    let context_config = use_context::<PortalConfig>();

    advance(&phase, PortalEvent::Render);

    {
        let anchor_ref = anchor_ref.clone();
        let phase = phase.clone();
        let mount_node = mount_node.clone();
        let config = props
            .config
            .clone()
            .or(context_config)
            .unwrap_or_default();

        use_effect_with((), move |_| {
            let current = *phase.borrow();
            let created = attach_from_anchor(&anchor_ref, current, &config);
            if let Some(node) = &created {
                advance(&phase, PortalEvent::Attached);
                mount_node.set(Some(Rc::clone(node)));
            }

            move || {
                if let Some(node) = created {
                    node.detach();
                    Logger::debug_with_component("portal", "container detached");
                }
                advance(&phase, PortalEvent::TornDown);
            }
        });
    }

    match &*mount_node {
        Some(node) => create_portal(
            html! { <>{ for props.children.iter() }</> },
            node.element().clone(),
        ),
        None => html! { <span ref={anchor_ref} /> },
    }
}

fn advance(phase: &RefCell<PortalPhase>, event: PortalEvent) {
    let next = phase.borrow().next(event);
    *phase.borrow_mut() = next;
}

fn attach_from_anchor(
    anchor_ref: &NodeRef,
    phase: PortalPhase,
    config: &PortalConfig,
) -> Option<Rc<MountNode>> {
    // Missing when the component was replaced before this effect ran
    let Some(anchor) = anchor_ref.cast::<Element>() else {
        Logger::debug_with_component("portal", "anchor missing, skipping mount");
        return None;
    };
    if !phase.should_attach(anchor.is_connected()) {
        Logger::debug_with_component("portal", "anchor detached, skipping mount");
        return None;
    }
    let document = anchor.owner_document()?;

    match MountNode::attach(&document, config) {
        Ok(node) => {
            Logger::debug_with_component("portal", "container attached");
            Some(Rc::new(node))
        }
        Err(e) => {
            Logger::error_with_component("portal", &format!("failed to create container: {}", e));
            None
        }
    }
}
