use crate::{vector::Vector, CompareError, Result};

/// Cosine of the angle between `a` and `b`: `(a . b) / (|a| * |b|)`.
///
/// Both vectors must have the same dimension and a non-zero magnitude. Each
/// side is divided by its largest absolute element first, which leaves the
/// cosine unchanged and keeps every intermediate within `f64` range. The
/// result is clamped to `[-1, 1]` to absorb rounding drift.
pub fn cosine_similarity(a: &Vector, b: &Vector) -> Result<f64> {
    if a.dimension() != b.dimension() {
        return Err(CompareError::DimensionMismatch {
            left: a.dimension(),
            right: b.dimension(),
        });
    }

    let unit_a = a.unit_scaled()?;
    let unit_b = b.unit_scaled()?;

    let norm_a = unit_a.dot(&unit_a).sqrt();
    let norm_b = unit_b.dot(&unit_b).sqrt();
    let similarity = unit_a.dot(&unit_b) / (norm_a * norm_b);

    Ok(similarity.clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_vectors_score_minus_one() {
        let a = Vector::from_vec("a", vec![1.0, -2.0, 3.0]);
        let b = Vector::from_vec("b", vec![-1.0, 2.0, -3.0]);
        let sim = cosine_similarity(&a, &b).unwrap();
        assert!((sim + 1.0).abs() < 1e-12);
    }

    #[test]
    fn dimension_checked_before_magnitude() {
        let zero = Vector::from_vec("zero", vec![0.0, 0.0, 0.0]);
        let other = Vector::from_vec("other", vec![1.0, 2.0, 3.0, 4.0]);
        let err = cosine_similarity(&zero, &other).unwrap_err();
        assert!(matches!(
            err,
            CompareError::DimensionMismatch { left: 3, right: 4 }
        ));
    }

    #[test]
    fn degenerate_error_names_the_zero_vector() {
        let a = Vector::from_vec("a", vec![1.0, 1.0]);
        let zero = Vector::from_vec("zero", vec![0.0, 0.0]);
        match cosine_similarity(&a, &zero).unwrap_err() {
            CompareError::DegenerateInput { label } => assert_eq!(label, "zero"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_vectors_are_degenerate() {
        let a = Vector::from_vec("a", vec![]);
        let b = Vector::from_vec("b", vec![]);
        assert!(matches!(
            cosine_similarity(&a, &b),
            Err(CompareError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn huge_elements_do_not_overflow() {
        let a = Vector::from_vec("a", vec![1.0, 2.0]);
        let b = Vector::from_vec("b", vec![3.0, 1.0]);
        let base = cosine_similarity(&a, &b).unwrap();
        let scaled = cosine_similarity(&a, &b.scaled(1e170)).unwrap();
        assert!((base - scaled).abs() < 1e-12, "{base} vs {scaled}");

        let big = Vector::from_vec("big", vec![1e200, 1e200]);
        assert!((cosine_similarity(&big, &big).unwrap() - 1.0).abs() < 1e-12);

        let max = Vector::from_vec("max", vec![f64::MAX, f64::MAX]);
        let ones = Vector::from_vec("ones", vec![1.0, 1.0]);
        assert!((cosine_similarity(&max, &ones).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn tiny_elements_are_not_degenerate() {
        let tiny = Vector::from_vec("tiny", vec![1e-200, 2e-200]);
        let b = Vector::from_vec("b", vec![1.0, 2.0]);
        assert!((cosine_similarity(&tiny, &b).unwrap() - 1.0).abs() < 1e-12);

        let subnormal = Vector::from_vec("subnormal", vec![5e-324, 0.0]);
        let axis = Vector::from_vec("axis", vec![1.0, 0.0]);
        assert_eq!(cosine_similarity(&subnormal, &axis).unwrap(), 1.0);
    }

    #[test]
    fn non_finite_elements_are_rejected() {
        let a = Vector::from_vec("a", vec![f64::INFINITY, 1.0]);
        let b = Vector::from_vec("b", vec![1.0, 1.0]);
        assert!(matches!(
            cosine_similarity(&a, &b),
            Err(CompareError::Other(_))
        ));
        let nan = Vector::from_vec("nan", vec![f64::NAN, 1.0]);
        assert!(matches!(
            cosine_similarity(&b, &nan),
            Err(CompareError::Other(_))
        ));
    }

    #[test]
    fn magnitude_at_extreme_scales() {
        let big = Vector::from_vec("big", vec![3e200, 4e200]);
        assert!((big.magnitude() / 5e200 - 1.0).abs() < 1e-12);

        let tiny = Vector::from_vec("tiny", vec![3e-200, 4e-200]);
        assert!((tiny.magnitude() / 5e-200 - 1.0).abs() < 1e-12);

        assert_eq!(Vector::from_vec("zero", vec![0.0, 0.0]).magnitude(), 0.0);
    }
}
