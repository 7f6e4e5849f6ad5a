use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, JdfError>;

/// Errors that escape to the caller of the import pipeline (and the CLI).
///
/// Per-line parse failures never appear here: they are absorbed into the
/// reject collection of an [`crate::import::ImportResult`].
#[derive(Debug, Error)]
pub enum JdfError {
    #[error("dictionary file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown target dictionary: '{0}'. Use `jdfconv list-targets` to see valid targets.")]
    UnknownTarget(String),

    #[error("config error: {msg}")]
    ConfigError { msg: String },

    #[error("TOML parse error in {path}: {source}")]
    TomlParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl JdfError {
    /// Wrap an open/read failure for `path`, promoting `NotFound` to its own
    /// variant so the caller can word its message accordingly.
    pub fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            JdfError::NotFound { path }
        } else {
            JdfError::Io { path, source }
        }
    }
}

/// Why one line of a JAWS dictionary file failed to become a [`crate::rule::Rule`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No line was supplied at all. A caller bug, not a data problem.
    #[error("no line supplied to the record parser")]
    MissingInput,

    /// The line does not match the JDF record grammar.
    #[error("line does not match the JDF record grammar")]
    Malformed,

    /// The grammar matched, but the replacement text was nothing but
    /// sound-tag markup.
    #[error("replacement text is empty after stripping sound tags")]
    EmptyReplacement,
}
