//! Error types for scanning and CLI setup

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why a root path was rejected before traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootProblem {
    Missing,
    NotADirectory,
}

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("permission denied: {}", .path.display())]
    AccessDenied { path: PathBuf },

    #[error("no such file or directory: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("{}", root_message(.path, .reason))]
    InvalidRoot { path: PathBuf, reason: RootProblem },

    #[error("Advertencia: El segundo parámetro debe ser un número para el umbral en MB")]
    InvalidThreshold { value: String },

    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AnalyzerError {
    /// Classify a filesystem error raised while touching `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::AccessDenied { path },
            io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source: err },
        }
    }
}

fn root_message(path: &Path, reason: &RootProblem) -> String {
    match reason {
        RootProblem::Missing => format!("Error: El directorio {} no existe", path.display()),
        RootProblem::NotADirectory => format!("Error: {} no es un directorio", path.display()),
    }
}
