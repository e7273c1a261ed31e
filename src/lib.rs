pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod event;
pub mod jira;
pub mod model;
pub mod prompt;
pub mod server;
pub mod summarizer;
pub mod ui;
