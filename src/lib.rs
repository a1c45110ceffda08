pub mod app;
pub mod components;
pub mod config;
pub mod contact;
pub mod github;
pub mod scroll;
pub mod theme;
pub mod typing;
