pub mod client;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod notify;
pub mod print;
pub mod tui;
