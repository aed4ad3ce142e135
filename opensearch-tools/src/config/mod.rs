//! Configuration and dependency wiring.

mod dependencies;

pub use dependencies::{provisioner_config, Dependencies};
