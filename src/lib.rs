pub mod chat;
pub mod config;
pub mod errors;
pub mod fixtures;
pub mod model;
pub mod report;
pub mod sim;
pub mod stages;
pub mod ui;
pub mod workflow;
