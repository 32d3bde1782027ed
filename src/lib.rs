pub mod config;
pub mod events;
pub mod gui;
pub mod radar;
pub mod snapshot;
pub mod sys;
