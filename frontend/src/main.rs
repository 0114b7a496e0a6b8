use dialog_frontend::app::{App, AppProps};
use dialog_frontend::services::config::load_config;
use dialog_frontend::services::logging::Logger;

fn main() {
    let config = load_config();
    Logger::init(config.log.clone());
    Logger::info_with_component("main", "starting dialog demo");

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
