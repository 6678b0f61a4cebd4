//! Dayboard: a visual daily schedule board with a countdown timer.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod app;
pub mod version;

mod action;
mod flow_executor;
mod image_import;
mod persistence;
mod platform;
mod state;
mod ui;
mod view_model_builder;

pub use self::app::DayboardApp;
