use crate::{vector::Vector, CompareError, Result};
use ndarray::Array1;
use std::path::Path;
use tracing::debug;

/// Reads `path` and decodes its contents as a JSON array of numbers.
///
/// The vector is labelled with the file stem, so `embeddings/dog1.json`
/// becomes `dog1`.
pub fn load_vector<P: AsRef<Path>>(path: P) -> Result<Vector> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| CompareError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let data: Vec<f64> = serde_json::from_slice(&bytes).map_err(|source| CompareError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let vector = Vector::with_label(label_for(path), Array1::from_vec(data));
    debug!(
        path = %path.display(),
        label = %vector.label,
        dimension = vector.dimension(),
        "loaded vector"
    );
    Ok(vector)
}

/// Loads every path in order, stopping at the first failure.
pub fn load_vectors<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Vector>> {
    paths.iter().map(load_vector).collect()
}

/// Decodes in-memory JSON text. Parse failures report `label` as the path.
pub fn parse_vector(label: &str, text: &str) -> Result<Vector> {
    let data: Vec<f64> = serde_json::from_str(text).map_err(|source| CompareError::Parse {
        path: label.into(),
        source,
    })?;
    Ok(Vector::with_label(label, Array1::from_vec(data)))
}

fn label_for(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
