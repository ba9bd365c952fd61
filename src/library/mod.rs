/// Library domain layer: descriptors, descriptor assembly, status payloads.
pub mod builder;
pub mod descriptor;
pub mod errors;
pub mod status;

pub use builder::{LibrarySelection, build};
pub use descriptor::Library;
pub use errors::InvariantError;
pub use status::{AllClusterStatuses, ClusterLibraryStatuses};
