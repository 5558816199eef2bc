//! Parcelbook Core Library
//!
//! Domain logic for the parcelbook land-parcel catalog: the record model
//! and dataset loader, the filter-and-select engine, notes and AI
//! clients, detail and export formatting, and the interactive session.

pub mod ai;
pub mod config;
pub mod dataset;
pub mod detail;
pub mod error;
pub mod export;
pub mod format;
mod http;
pub mod links;
pub mod logging;
pub mod notes;
pub mod query;
pub mod record;
pub mod session;
pub mod usage;
