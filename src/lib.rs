//! logscope: a terminal browser for categorized system logs.

pub mod app;
pub mod cli;
pub mod config;
pub mod event;
pub mod filter;
pub mod focus;
pub mod handlers;
pub mod log_store;
pub mod signal;
pub mod theme;
pub mod tui;
