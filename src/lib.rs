//! ccline — Claude Code status line.
//!
//! Reads the status-line session descriptor from stdin and prints one line
//! summarizing model, git state, project, context usage and cost.

pub mod app;
pub mod config;
