use nalgebra::{DMatrix, SVD};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PcaError {
    #[error("Singular value decomposition of a {rows}x{cols} matrix failed to converge")]
    Convergence { rows: usize, cols: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PcaResult {
    /// Samples projected onto the components, one column per component.
    pub scores: DMatrix<f64>,
    /// Loading vectors, one column per component.
    pub components: DMatrix<f64>,
    pub explained_variance_ratio: Vec<f64>,
}

/// Principal-component analysis of a samples-by-features matrix.
///
/// Features are mean-centred, then projected onto the right singular vectors with the
/// largest singular values. Each component's sign is fixed so that its largest-magnitude
/// loading is positive. Components beyond the rank of the data, or any component when
/// there are fewer than two samples or no features, are all-zero.
pub fn principal_components(
    samples: &DMatrix<f64>,
    n_components: usize,
) -> Result<PcaResult, PcaError> {
    let (n_samples, n_features) = samples.shape();
    let mut scores = DMatrix::zeros(n_samples, n_components);
    let mut components = DMatrix::zeros(n_features, n_components);
    let mut explained_variance_ratio = vec![0.0; n_components];

    if n_samples < 2 || n_features == 0 {
        return Ok(PcaResult {
            scores,
            components,
            explained_variance_ratio,
        });
    }

    let mut centered = samples.clone();
    for j in 0..n_features {
        let mean = centered.column(j).mean();
        centered.column_mut(j).add_scalar_mut(-mean);
    }

    let svd = SVD::try_new(centered.clone(), false, true, f64::EPSILON, 0).ok_or(
        PcaError::Convergence {
            rows: n_samples,
            cols: n_features,
        },
    )?;
    let v_t = svd.v_t.as_ref().ok_or(PcaError::Convergence {
        rows: n_samples,
        cols: n_features,
    })?;

    let singular_values = &svd.singular_values;
    let mut order: Vec<usize> = (0..singular_values.len()).collect();
    order.sort_by(|&a, &b| singular_values[b].total_cmp(&singular_values[a]));

    let total_variance: f64 = singular_values.iter().map(|s| s * s).sum();

    for (c, &k) in order.iter().take(n_components).enumerate() {
        let mut loading = v_t.row(k).transpose();
        let pivot = loading.iamax();
        if loading[pivot] < 0.0 {
            loading.neg_mut();
        }

        let projected = &centered * &loading;
        scores.set_column(c, &projected);
        components.set_column(c, &loading);

        if total_variance > 0.0 {
            explained_variance_ratio[c] = singular_values[k].powi(2) / total_variance;
        }
    }

    Ok(PcaResult {
        scores,
        components,
        explained_variance_ratio,
    })
}
