#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod body_weight;
mod error;
mod exercise;
mod id;
mod measurement;
mod name;
mod profile;
mod routine;
mod service;
mod submission;

pub use body_weight::*;
pub use error::*;
pub use exercise::*;
pub use id::*;
pub use measurement::*;
pub use name::*;
pub use profile::*;
pub use routine::*;
pub use service::*;
pub use submission::*;
