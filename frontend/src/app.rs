use shared::{DialogConfig, PortalConfig};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::{DialogContent, DialogOverlay};

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: DialogConfig,
}

/// Demo page: a button that opens a small announcement dialog
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let is_open = use_state(|| false);
    let root_ref = use_node_ref();
    let close_button_ref = use_node_ref();

    let open = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(true))
    };

    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: ()| is_open.set(false))
    };

    html! {
        <ContextProvider<PortalConfig> context={props.config.portal.clone()}>
            <div class="App" ref={root_ref.clone()}>
                <header class="App-header">
                    <p>{"Press the button below to open a dialog."}</p>
                    <button class="button" onclick={open} tabindex="-1">
                        {"Open Dialog"}
                    </button>
                </header>
                <DialogOverlay
                    is_open={*is_open}
                    on_dismiss={close.clone()}
                    aria_labelledby="dialog-heading"
                    root_ref={root_ref.clone()}
                    initial_focus_ref={close_button_ref.clone()}
                >
                    <DialogContent>
                        <h2 id="dialog-heading">{"Friendly announcement"}</h2>
                        <p>{"Hello there 👋 I am a dialog!"}</p>
                        <input type="text" aria-label="Name" placeholder="Name..." />
                        <button ref={close_button_ref.clone()} onclick={close.reform(|_: MouseEvent| ())}>
                            {"Close me"}
                        </button>
                    </DialogContent>
                </DialogOverlay>
            </div>
        </ContextProvider<PortalConfig>>
    }
}
