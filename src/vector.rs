use crate::{CompareError, Result};
use anyhow::anyhow;
use ndarray::Array1;

#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    pub label: String,
    pub data: Array1<f64>,
}

impl Vector {
    pub fn with_label(label: impl Into<String>, data: Array1<f64>) -> Self {
        Self {
            label: label.into(),
            data,
        }
    }

    pub fn from_vec(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self::with_label(label, Array1::from_vec(values))
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    /// Largest absolute element; `0.0` for an empty vector.
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |max, x| max.max(x.abs()))
    }

    /// Euclidean norm, computed on the max-abs rescaled data so that it
    /// neither overflows nor underflows for any finite input.
    pub fn magnitude(&self) -> f64 {
        let scale = self.max_abs();
        if scale == 0.0 || !scale.is_finite() {
            return scale;
        }
        let unit = &self.data / scale;
        scale * unit.dot(&unit).sqrt()
    }

    /// Data divided by its largest absolute element, so every element lies
    /// in `[-1, 1]` and at least one is `±1`.
    ///
    /// Fails with `DegenerateInput` for zero-magnitude vectors.
    pub fn unit_scaled(&self) -> Result<Array1<f64>> {
        if self.data.iter().any(|x| !x.is_finite()) {
            return Err(anyhow!("vector '{}' contains non-finite values", self.label).into());
        }
        let scale = self.max_abs();
        if scale == 0.0 {
            return Err(CompareError::DegenerateInput {
                label: self.label.clone(),
            });
        }
        Ok(&self.data / scale)
    }

    /// Cosine similarity between `self` and `other`. See [`crate::cosine_similarity`].
    pub fn similarity(&self, other: &Vector) -> Result<f64> {
        crate::similarity::cosine_similarity(self, other)
    }

    /// Returns a copy with every element multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::with_label(self.label.clone(), &self.data * factor)
    }
}
