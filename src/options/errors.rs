/// Errors caused by malformed command-line input.
use thiserror::Error;

/// A user-input error. Reported with a message naming the offending options; never retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    /// More than one option of an exclusive group was supplied.
    #[error(
        "Illegal usage: `{option}` is mutually exclusive with arguments [{}].",
        .others.join(", ")
    )]
    MutuallyExclusive {
        /// The option on whose behalf the group was checked.
        option: String,
        /// Every other member of the group, in declaration order.
        others: Vec<String>,
    },

    /// None of the options of a required exclusive group was supplied.
    #[error("Missing one of [{}].", .options.join(", "))]
    MissingOneOf {
        /// Every member of the group, rendered with its `--` prefix.
        options: Vec<String>,
    },

    /// An option expecting a JSON document received something else.
    #[error("Invalid JSON given to `--{option}`: {reason}")]
    InvalidJson {
        /// Canonical option name.
        option: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A file named on the command line could not be read.
    #[error("Could not read '{path}': {reason}")]
    ReadFile {
        /// Path as given by the user.
        path: String,
        /// Underlying I/O error.
        reason: String,
    },
}
