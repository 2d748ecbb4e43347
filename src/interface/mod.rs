pub mod bag_ui;
pub mod debug_cli;
