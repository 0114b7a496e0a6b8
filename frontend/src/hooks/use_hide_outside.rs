use web_sys::Element;
use yew::prelude::*;

const ARIA_HIDDEN: &str = "aria-hidden";

/// Hide the application root from assistive technology while mounted,
/// restoring whatever `aria-hidden` it had before.
#[hook]
pub fn use_hide_outside(root: Option<NodeRef>) {
    use_effect_with(root, |root| {
        let hidden = root
            .as_ref()
            .and_then(|root| root.cast::<Element>())
            .map(|element| {
                let previous = element.get_attribute(ARIA_HIDDEN);
                let _ = element.set_attribute(ARIA_HIDDEN, "true");
                (element, previous)
            });

        move || {
            if let Some((element, previous)) = hidden {
                let _ = match previous {
                    Some(value) => element.set_attribute(ARIA_HIDDEN, &value),
                    None => element.remove_attribute(ARIA_HIDDEN),
                };
            }
        }
    });
}
