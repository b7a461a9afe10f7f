//! Error taxonomy for command handling
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.9.0
//!
//! ## Changelog
//! - 1.0.0: Replace thrown exceptions with typed selection and command errors

/// Why the current selection could not be turned into a character
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("A token must be selected before using this script.")]
    NothingSelected,

    #[error("Only one token may be selected, found {0}.")]
    MultipleSelected(usize),

    #[error("The selected object {0} no longer exists.")]
    GraphicNotFound(String),

    #[error("The selected graphic is not a token.")]
    NotAToken,

    #[error("Free drawings cannot be used with this script.")]
    Drawing,

    #[error("The selected token does not represent a character.")]
    NoCharacter,
}

/// Terminal failure of a single command invocation
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("SelectionError: {0}")]
    Selection(#[from] SelectionError),

    #[error("InvalidCategory: \"{key}\" is not a valid attribute.")]
    InvalidCategory { key: String },

    #[error("MissingArgument: \"{input}\" does not name an attribute.")]
    MissingArgument { input: String },

    #[error(transparent)]
    Host(#[from] anyhow::Error),
}
