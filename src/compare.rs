use crate::{similarity::cosine_similarity, vector::Vector, Result};
use serde::Serialize;
use tracing::debug;

/// Which pairs of loaded vectors get scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairingMode {
    /// The first vector against each of the others.
    #[default]
    Reference,
    /// Every unordered pair `(i, j)` with `i < j`.
    AllPairs,
}

impl PairingMode {
    pub fn pairs(&self, count: usize) -> Vec<(usize, usize)> {
        match self {
            PairingMode::Reference => (1..count).map(|j| (0, j)).collect(),
            PairingMode::AllPairs => (0..count)
                .flat_map(|i| (i + 1..count).map(move |j| (i, j)))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub left: String,
    pub right: String,
    pub score: f64,
}

/// Scores the pairs selected by `mode`, in order. The first failing pair
/// aborts the run.
pub fn compare(vectors: &[Vector], mode: PairingMode) -> Result<Vec<Comparison>> {
    let mut comparisons = Vec::new();
    for (i, j) in mode.pairs(vectors.len()) {
        let (left, right) = (&vectors[i], &vectors[j]);
        let score = cosine_similarity(left, right)?;
        debug!(left = %left.label, right = %right.label, score, "scored pair");

        comparisons.push(Comparison {
            left: left.label.clone(),
            right: right.label.clone(),
            score,
        });
    }
    Ok(comparisons)
}
