//! Lagrange polynomial basis evaluation

/// Evaluate the `nodes` Lagrange basis polynomials with integer nodes
/// `0, 1, .., nodes - 1` at `point`.
///
/// The returned coefficients reconstruct a function value at `point` as a
/// weighted sum of the node values; they always sum to 1 (partition of
/// unity).
pub fn lagrange_basis(point: f64, nodes: usize) -> Vec<f64> {
    (0..nodes)
        .map(|j| {
            (0..nodes)
                .filter(|&i| i != j)
                .map(|i| (point - i as f64) / (j as f64 - i as f64))
                .product()
        })
        .collect()
}
