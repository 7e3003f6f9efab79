//! CLI commands for plagiscan

pub mod cluster;
pub mod compare;
pub mod config;
pub mod dispatch;
pub mod format;
pub mod helpers;
pub mod pairs;
pub mod report;
pub mod score;
