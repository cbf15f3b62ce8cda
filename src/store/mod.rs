//! The region registry: canonical region entities and the name lookup table.
pub mod registry;
pub mod types;

pub use registry::{normalize, Registry};
pub use types::{Region, INVALID_REGION_NAME};
