pub mod config;
pub mod dom;
pub mod events;
pub mod logging;
