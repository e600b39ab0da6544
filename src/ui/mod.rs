pub mod actions;
pub mod app;
pub mod chrome;
pub mod contact;
pub mod gallery;
pub mod language_switch;
pub mod sections;
pub mod text;
