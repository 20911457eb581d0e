pub mod args;
pub mod commands;
pub mod menu;
pub mod output;
