//! rnkit library crate
//!
//! Everything the `rnkit` binary does lives here: the template
//! registry, the interactive prompt collector, the manifest renderer,
//! and the post-processing pipeline that drives the external tools.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

pub mod error;
pub mod manifest;
pub mod pipeline;
pub mod platform;
pub mod process;
pub mod prompts;
pub mod registry;

pub use error::ScaffoldError;
pub use platform::HostPlatform;
pub use prompts::AnswerSet;
pub use registry::{TemplateDescriptor, TemplateRegistry};
