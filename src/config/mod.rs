//! Service configuration, layered from defaults and the process environment.
pub mod logging;
pub mod types;

pub use logging::*;
pub use types::*;
