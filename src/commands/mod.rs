//! CLI commands for parcelbook

pub mod browse;
pub mod describe;
pub mod dispatch;
pub mod draft;
pub mod export;
pub mod format;
pub mod helpers;
pub mod link;
pub mod list;
pub mod note;
pub mod regions;
pub mod show;
