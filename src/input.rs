use serde_json::Value;
use thiserror::Error;

use std::{
    fmt::Display,
    fs, io,
    path::{Path, PathBuf},
};

/// Identifies which of the two input files an error refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Input {
    Catalogue,
    Sales,
}

impl Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Catalogue => write!(f, "price catalogue"),
            Input::Sales => write!(f, "sales records"),
        }
    }
}

/// A structural problem with an input file that stops the run.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{input} file not found: {}", .path.display())]
    NotFound { input: Input, path: PathBuf },
    #[error("reading {input} file {}", .path.display())]
    Read {
        input: Input,
        path: PathBuf,
        source: io::Error,
    },
    #[error("{input} file {} is not valid JSON", .path.display())]
    Json {
        input: Input,
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{input} file {} must contain a JSON list", .path.display())]
    NotAList { input: Input, path: PathBuf },
    #[error("price catalogue {} contains no valid products", .path.display())]
    EmptyCatalogue { path: PathBuf },
}

impl LoadError {
    /// Returns the input file the error refers to.
    #[must_use]
    pub fn input(&self) -> Input {
        match self {
            LoadError::NotFound { input, .. }
            | LoadError::Read { input, .. }
            | LoadError::Json { input, .. }
            | LoadError::NotAList { input, .. } => *input,
            LoadError::EmptyCatalogue { .. } => Input::Catalogue,
        }
    }
}

/// Reads the whole of `path` and parses it as a JSON document.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] if `path` does not exist,
/// [`LoadError::Read`] if it exists but cannot be read, and
/// [`LoadError::Json`] if its contents are not valid JSON.
pub fn read_json(input: Input, path: &Path) -> Result<Value, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound {
                input,
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Read {
                input,
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let value = serde_json::from_str(&text).map_err(|source| LoadError::Json {
        input,
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {input} from {}", path.display());
    Ok(value)
}
