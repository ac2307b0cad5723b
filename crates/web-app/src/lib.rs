//! View state of the web client.
//!
//! Everything here is independent of the UI framework: forms with their validation, the
//! exercise wizard, notifications, settings and the logger.

#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

pub mod body_weight_form;
pub mod form;
pub mod log;
pub mod measurement_form;
pub mod notification;
pub mod wizard;

mod service;
mod settings;

pub use service::Service;
pub use settings::{Settings, SettingsRepository, SettingsService};
