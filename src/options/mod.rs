/// Option layer: exclusive-group validation over the options a user typed.
pub mod errors;
pub mod exclusive;
pub mod provided;

pub use errors::UsageError;
pub use exclusive::{OptionGroup, validate_group};
pub use provided::ProvidedOptions;
