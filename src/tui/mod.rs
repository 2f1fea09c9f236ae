pub mod app;
mod panes;
pub mod toast;
mod view;
