//! CLI commands

pub mod clean;
pub mod contact;
pub mod init;
pub mod list;
pub mod new;
pub mod render;
