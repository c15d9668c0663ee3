pub mod app;
pub mod cli;
pub mod command;
pub mod config;
pub mod event;
pub mod form;
pub mod help;
pub mod history;
pub mod keybindings;
pub mod list_view_state;
pub mod logging;
pub mod patient;
pub mod queue;
pub mod record;
pub mod seed;
pub mod ui;
pub mod version;

shadow_rs::shadow!(build);
