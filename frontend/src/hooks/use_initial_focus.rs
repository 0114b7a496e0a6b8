use shared::CONTENT_ATTRIBUTE;
use web_sys::Element;
use yew::prelude::*;

use crate::services::dom::{find_html_element, focus_element, focus_node};
use crate::services::logging::Logger;

/// Move keyboard focus into a freshly opened dialog.
///
/// `target` wins when it resolves to an element; otherwise the first dialog
/// content element under `container` is focused.
#[hook]
pub fn use_initial_focus(target: Option<NodeRef>, container: NodeRef) {
    use_effect_with((), move |_| {
        let focused = target.as_ref().is_some_and(focus_node)
            || container
                .cast::<Element>()
                .and_then(|root| find_html_element(&root, &format!("[{}]", CONTENT_ATTRIBUTE)))
                .is_some_and(|content| focus_element(&content));

        if !focused {
            Logger::debug_with_component("initial-focus", "nothing to focus");
        }
    });
}
