use shared::compose_refs;
use web_sys::Element;
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::ElementRef;

/// Forward the element behind `node_ref` to every ref in `refs`.
///
/// Runs after commit, so the element exists by the time the refs see it.
/// Refs receive `None` on teardown or when the set of refs changes.
#[hook]
pub fn use_forwarded_ref(node_ref: NodeRef, refs: Vec<Option<ElementRef>>) {
    let composed = compose_refs(refs);

    use_effect_with(composed, move |composed| {
        if let Err(e) = composed.assign(node_ref.cast::<Element>()) {
            Logger::error_with_component("forwarded-ref", &e.to_string());
        }

        let composed = composed.clone();
        move || {
            if let Err(e) = composed.assign(None) {
                Logger::error_with_component("forwarded-ref", &e.to_string());
            }
        }
    });
}
