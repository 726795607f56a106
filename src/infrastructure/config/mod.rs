//! Infrastructure configuration modules.

pub mod collectible;
pub mod logging;
pub mod selection;
pub mod settings;

pub use settings::Config;
