pub mod config;
pub mod events;
pub mod gui;
pub mod render;
pub mod sys;
