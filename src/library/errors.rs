/// Errors from the library descriptor layer.
use thiserror::Error;

/// The builder was handed a selection that option validation should have rejected.
///
/// This is a defect, never a user error: the builder refuses to guess a source.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantError {
    /// No install source reached the builder.
    #[error("no library source selected; expected exactly one")]
    NoSource,

    /// More than one install source reached the builder.
    #[error("{} library sources selected ({}); expected exactly one", .0.len(), .0.join(", "))]
    MultipleSources(Vec<&'static str>),
}
