//! Request types for HTTP handlers.

mod paginations;
mod paths;
mod runs;
mod workflows;

pub use paginations::*;
pub use paths::*;
pub use runs::*;
pub use workflows::*;
