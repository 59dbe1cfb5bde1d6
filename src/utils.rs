use ndarray::Array1;
use rand::Rng;

/// `num` vectors of dimension `dim` with elements drawn uniformly from `[-1, 1)`.
pub fn generate_random_vectors(dim: usize, num: usize) -> Vec<Array1<f64>> {
    let mut rng = rand::thread_rng();

    (0..num)
        .map(|_| Array1::from_vec((0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect()))
        .collect()
}
