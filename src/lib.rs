// lib.rs - Library root for the tvi editor

pub mod buffer;
pub mod cli;
pub mod command;
pub mod config;
pub mod cursor;
pub mod display;
pub mod editor;
pub mod mode;
pub mod shutdown;
pub mod source;
pub mod ui;
pub mod viewport;
