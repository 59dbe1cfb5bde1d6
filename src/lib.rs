pub mod compare;
pub mod loader;
pub mod report;
pub mod similarity;
pub mod utils;
pub mod vector;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Cannot read vector file {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid vector file {}: expected a JSON array of numbers ({source})", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
    #[error("Degenerate input: vector '{label}' has zero magnitude")]
    DegenerateInput { label: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CompareError>;

// Re-export main types for convenience
pub use compare::{compare, Comparison, PairingMode};
pub use loader::{load_vector, load_vectors, parse_vector};
pub use report::{render, OutputFormat};
pub use similarity::cosine_similarity;
pub use vector::Vector;
