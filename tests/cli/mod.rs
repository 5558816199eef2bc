pub mod support;

mod browse;
mod describe;
mod draft;
mod export;
mod link;
mod list;
mod note;
mod regions;
mod show;
