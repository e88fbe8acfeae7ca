use linfa::{DatasetBase, traits::Fit};
use linfa_clustering::KMeans;
use ndarray::{Array1, Array2, ArrayView1, Axis};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use thiserror::Error;
use tracing::debug;

use crate::domain::{
    common::RecommendationConfig,
    recommendation::preparation::FeatureTable,
};

/// Dietary flags; ordinal-encoded instead of being passed through.
pub const BINARY_FEATURES: [&str; 4] = ["vegetarian", "vegan", "glutenFree", "dairyFree"];

const JACOBI_SWEEPS: usize = 100;
const JACOBI_EPSILON: f64 = 1e-22;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClusteringError {
    #[error("cannot cluster an empty table")]
    EmptyInput,

    #[error("cluster count must be at least 1, got {0}")]
    InvalidClusterCount(usize),

    #[error("table has no feature columns")]
    NoFeatures,

    #[error("column '{0}' holds non-numeric values")]
    NonNumericColumn(String),

    #[error("k-means failed: {0}")]
    Fit(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClusteringParams {
    pub cluster_count: usize,
    /// Dimensionality after PCA.
    pub components: usize,
    pub seed: u64,
    pub max_iterations: u64,
    pub tolerance: f64,
}

impl Default for ClusteringParams {
    fn default() -> Self {
        Self {
            cluster_count: 5,
            components: 2,
            seed: 42,
            max_iterations: 300,
            tolerance: 1e-4,
        }
    }
}

impl From<&RecommendationConfig> for ClusteringParams {
    fn from(config: &RecommendationConfig) -> Self {
        Self {
            seed: config.seed,
            ..Self::default()
        }
    }
}

/// Fitted clusters over the reduced feature space.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterAssignment {
    /// One row per cluster.
    pub centroids: Array2<f64>,
    /// Reduced coordinates, one row per table row, in table order.
    pub points: Array2<f64>,
    /// Index of the nearest centroid for each point.
    pub labels: Vec<usize>,
}

/// Encodes, scales and reduces `features`, then partitions the rows into
/// `params.cluster_count` clusters.
///
/// When the reduced points hold no more distinct positions than the cluster
/// count, k-means is skipped and each distinct position becomes a centroid, in
/// order of first occurrence.
pub fn apply_clustering(
    features: &FeatureTable,
    params: &ClusteringParams,
) -> Result<ClusterAssignment, ClusteringError> {
    if params.cluster_count == 0 {
        return Err(ClusteringError::InvalidClusterCount(params.cluster_count));
    }
    if features.is_empty() {
        return Err(ClusteringError::EmptyInput);
    }

    let encoded = encode(features)?;
    let scaled = standardize(&encoded);
    let points = principal_components(&scaled, params.components);

    let distinct = distinct_rows(&points);
    let centroids = if distinct.len() <= params.cluster_count {
        debug!(
            distinct = distinct.len(),
            cluster_count = params.cluster_count,
            "too few distinct points, using them as centroids"
        );
        points.select(Axis(0), &distinct)
    } else {
        let rng = Xoshiro256Plus::seed_from_u64(params.seed);
        let dataset = DatasetBase::from(points.clone());
        let model = KMeans::params_with_rng(params.cluster_count, rng)
            .max_n_iterations(params.max_iterations)
            .tolerance(params.tolerance)
            .fit(&dataset)
            .map_err(|e| ClusteringError::Fit(e.to_string()))?;
        model.centroids().to_owned()
    };

    let labels = points
        .rows()
        .into_iter()
        .map(|point| nearest(point, &centroids))
        .collect();

    Ok(ClusterAssignment {
        centroids,
        points,
        labels,
    })
}

/// Ordinal-encoded flag columns first, then every other column as-is.
fn encode(features: &FeatureTable) -> Result<Array2<f64>, ClusteringError> {
    let binary: Vec<usize> = BINARY_FEATURES
        .iter()
        .filter_map(|name| features.column_index(name))
        .collect();
    let continuous: Vec<usize> = (0..features.columns().len())
        .filter(|i| !binary.contains(i))
        .collect();

    let width = binary.len() + continuous.len();
    if width == 0 {
        return Err(ClusteringError::NoFeatures);
    }

    let mut matrix = Array2::<f64>::zeros((features.len(), width));

    for (target, &source) in binary.iter().enumerate() {
        let values = numeric_column(features, source)?;
        let mut categories = values.clone();
        categories.sort_by(f64::total_cmp);
        categories.dedup();
        for (row, value) in values.iter().enumerate() {
            let code = categories
                .iter()
                .position(|c| c == value)
                .unwrap_or_default();
            matrix[[row, target]] = code as f64;
        }
    }

    for (offset, &source) in continuous.iter().enumerate() {
        let values = numeric_column(features, source)?;
        matrix
            .column_mut(binary.len() + offset)
            .assign(&Array1::from(values));
    }

    Ok(matrix)
}

fn numeric_column(features: &FeatureTable, index: usize) -> Result<Vec<f64>, ClusteringError> {
    features
        .rows()
        .iter()
        .map(|row| {
            row[index]
                .as_f64()
                .ok_or_else(|| ClusteringError::NonNumericColumn(features.columns()[index].clone()))
        })
        .collect()
}

/// Zero mean and unit population variance per column. Constant columns are
/// only centred.
fn standardize(matrix: &Array2<f64>) -> Array2<f64> {
    let n = matrix.nrows() as f64;
    let mut scaled = matrix.clone();

    for mut column in scaled.columns_mut() {
        let mean = column.sum() / n;
        let variance = column.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std = variance.sqrt();
        let scale = if std > 0.0 { std } else { 1.0 };
        column.mapv_inplace(|v| (v - mean) / scale);
    }

    scaled
}

/// Projects the rows onto the leading eigenvectors of the covariance matrix.
fn principal_components(matrix: &Array2<f64>, components: usize) -> Array2<f64> {
    let (n, d) = matrix.dim();
    let components = components.min(d);

    let means = matrix.sum_axis(Axis(0)) / n as f64;
    let centered = matrix - &means;
    let denominator = if n > 1 { (n - 1) as f64 } else { 1.0 };
    let covariance = centered.t().dot(&centered) / denominator;

    let (eigenvalues, eigenvectors) = symmetric_eigen(&covariance);

    let mut order: Vec<usize> = (0..d).collect();
    order.sort_by(|&a, &b| eigenvalues[b].total_cmp(&eigenvalues[a]));

    let mut basis = Array2::<f64>::zeros((d, components));
    for (c, &index) in order.iter().take(components).enumerate() {
        let mut vector = eigenvectors.column(index).to_owned();
        let pivot = vector
            .iter()
            .copied()
            .max_by(|a, b| a.abs().total_cmp(&b.abs()))
            .unwrap_or(0.0);
        if pivot < 0.0 {
            vector.mapv_inplace(|v| -v);
        }
        basis.column_mut(c).assign(&vector);
    }

    centered.dot(&basis)
}

/// Cyclic Jacobi eigendecomposition of a symmetric matrix. Returns the
/// eigenvalues and the matching eigenvectors as columns, unsorted.
fn symmetric_eigen(matrix: &Array2<f64>) -> (Array1<f64>, Array2<f64>) {
    let d = matrix.nrows();
    let mut a = matrix.clone();
    let mut v = Array2::<f64>::eye(d);

    for _ in 0..JACOBI_SWEEPS {
        let off_diagonal: f64 = (0..d)
            .flat_map(|p| (0..d).filter(move |&q| q != p).map(move |q| (p, q)))
            .map(|(p, q)| a[[p, q]].powi(2))
            .sum();
        if off_diagonal <= JACOBI_EPSILON {
            break;
        }

        for p in 0..d {
            for q in p + 1..d {
                let apq = a[[p, q]];
                if apq == 0.0 {
                    continue;
                }

                // rotation angle that zeroes a[p][q]
                let theta = (a[[q, q]] - a[[p, p]]) / (2.0 * apq);
                let t = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
                let c = 1.0 / (t * t + 1.0).sqrt();
                let s = t * c;

                for k in 0..d {
                    let (akp, akq) = (a[[k, p]], a[[k, q]]);
                    a[[k, p]] = c * akp - s * akq;
                    a[[k, q]] = s * akp + c * akq;
                }
                for k in 0..d {
                    let (apk, aqk) = (a[[p, k]], a[[q, k]]);
                    a[[p, k]] = c * apk - s * aqk;
                    a[[q, k]] = s * apk + c * aqk;
                }
                for k in 0..d {
                    let (vkp, vkq) = (v[[k, p]], v[[k, q]]);
                    v[[k, p]] = c * vkp - s * vkq;
                    v[[k, q]] = s * vkp + c * vkq;
                }
            }
        }
    }

    (a.diag().to_owned(), v)
}

/// Indices of the first occurrence of each distinct row.
fn distinct_rows(points: &Array2<f64>) -> Vec<usize> {
    let mut distinct: Vec<usize> = Vec::new();
    for (i, row) in points.rows().into_iter().enumerate() {
        if !distinct.iter().any(|&j| points.row(j) == row) {
            distinct.push(i);
        }
    }
    distinct
}

pub(crate) fn squared_distance(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum()
}

/// Lowest index wins ties.
fn nearest(point: ArrayView1<f64>, centroids: &Array2<f64>) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, centroid) in centroids.rows().into_iter().enumerate() {
        let distance = squared_distance(point, centroid);
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recommendation::tabulation::{Cell, Frame};

    fn table(columns: &[&str], rows: Vec<Vec<Cell>>) -> FeatureTable {
        FeatureTable::from_frame(Frame::with_columns(
            columns.iter().map(|c| c.to_string()).collect(),
            rows.into_iter()
                .map(|row| row.into_iter().map(Some).collect())
                .collect(),
        ))
    }

    /// Five tight groups of `per_group` rows far apart on two axes, plus a
    /// constant flag column.
    fn grouped_table(per_group: usize) -> FeatureTable {
        let centres = [(0.0, 0.0), (100.0, 0.0), (0.0, 100.0), (100.0, 100.0), (50.0, 200.0)];
        let mut rows = Vec::new();
        for (x, y) in centres {
            for k in 0..per_group {
                let jitter = k as f64 * 0.1;
                rows.push(vec![
                    Cell::Number(x + jitter),
                    Cell::Number(y - jitter),
                    Cell::Bool(true),
                ]);
            }
        }
        table(&["calories", "protein", "vegan"], rows)
    }

    #[test]
    fn produces_requested_centroids_and_one_point_per_row() {
        let features = grouped_table(4);

        let assignment = apply_clustering(&features, &ClusteringParams::default()).unwrap();

        assert_eq!(assignment.centroids.dim(), (5, 2));
        assert_eq!(assignment.points.dim(), (20, 2));
        assert_eq!(assignment.labels.len(), 20);
    }

    #[test]
    fn well_separated_groups_get_distinct_labels() {
        let features = grouped_table(4);

        let assignment = apply_clustering(&features, &ClusteringParams::default()).unwrap();

        for group in assignment.labels.chunks(4) {
            assert!(group.iter().all(|&label| label == group[0]));
        }
        let mut firsts: Vec<usize> = assignment.labels.chunks(4).map(|g| g[0]).collect();
        firsts.sort_unstable();
        firsts.dedup();
        assert_eq!(firsts.len(), 5);
    }

    #[test]
    fn same_seed_gives_same_centroids() {
        let features = grouped_table(3);
        let params = ClusteringParams::default();

        let first = apply_clustering(&features, &params).unwrap();
        let second = apply_clustering(&features, &params).unwrap();

        assert_eq!(first.centroids, second.centroids);
    }

    #[test]
    fn few_distinct_points_become_their_own_centroids() {
        let rows = (0..8)
            .map(|i| vec![Cell::Number((i % 2) as f64 * 10.0), Cell::Number(1.0)])
            .collect();
        let features = table(&["fat", "salt"], rows);

        let assignment = apply_clustering(&features, &ClusteringParams::default()).unwrap();

        assert_eq!(assignment.centroids.nrows(), 2);
        assert_eq!(assignment.labels, vec![0, 1, 0, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn rejects_empty_tables_and_zero_clusters() {
        let empty = table(&["fat"], Vec::new());
        assert_eq!(
            apply_clustering(&empty, &ClusteringParams::default()),
            Err(ClusteringError::EmptyInput)
        );

        let params = ClusteringParams {
            cluster_count: 0,
            ..ClusteringParams::default()
        };
        assert_eq!(
            apply_clustering(&grouped_table(2), &params),
            Err(ClusteringError::InvalidClusterCount(0))
        );
    }

    #[test]
    fn text_in_a_feature_column_is_reported() {
        let rows = (0..6)
            .map(|i| vec![Cell::Number(i as f64), Cell::Text("oops".to_string())])
            .collect();
        let features = table(&["fat", "title"], rows);

        assert_eq!(
            apply_clustering(&features, &ClusteringParams::default()),
            Err(ClusteringError::NonNumericColumn("title".to_string()))
        );
    }

    #[test]
    fn flags_are_encoded_by_sorted_category() {
        let features = table(
            &["fat", "vegan"],
            vec![
                vec![Cell::Number(5.0), Cell::Bool(true)],
                vec![Cell::Number(6.0), Cell::Number(0.0)],
                vec![Cell::Number(7.0), Cell::Bool(false)],
            ],
        );

        let encoded = encode(&features).unwrap();

        // flags move to the front; a filled zero and false share a category
        assert_eq!(encoded.column(0).to_vec(), vec![1.0, 0.0, 0.0]);
        assert_eq!(encoded.column(1).to_vec(), vec![5.0, 6.0, 7.0]);
    }

    #[test]
    fn a_flag_with_a_single_category_encodes_to_zero() {
        let features = table(
            &["vegetarian", "fat"],
            vec![
                vec![Cell::Bool(true), Cell::Number(1.0)],
                vec![Cell::Bool(true), Cell::Number(2.0)],
            ],
        );

        let encoded = encode(&features).unwrap();

        assert_eq!(encoded.column(0).to_vec(), vec![0.0, 0.0]);
    }

    #[test]
    fn standardize_centres_and_scales() {
        let matrix = Array2::from_shape_vec((4, 2), vec![1.0, 3.0, 2.0, 3.0, 3.0, 3.0, 4.0, 3.0])
            .unwrap();

        let scaled = standardize(&matrix);

        let column = scaled.column(0);
        assert!(column.sum().abs() < 1e-12);
        let variance = column.iter().map(|v| v * v).sum::<f64>() / 4.0;
        assert!((variance - 1.0).abs() < 1e-12);
        assert!(scaled.column(1).iter().all(|v| *v == 0.0));
    }

    #[test]
    fn first_component_follows_the_dominant_direction() {
        // points on the line y = 2x
        let matrix = Array2::from_shape_vec(
            (4, 2),
            vec![-3.0, -6.0, -1.0, -2.0, 1.0, 2.0, 3.0, 6.0],
        )
        .unwrap();

        let reduced = principal_components(&matrix, 2);

        let expected: Vec<f64> = [-3.0f64, -1.0, 1.0, 3.0]
            .iter()
            .map(|x| x * 5.0f64.sqrt())
            .collect();
        for (got, want) in reduced.column(0).iter().zip(expected) {
            assert!((got - want).abs() < 1e-6, "{got} != {want}");
        }
        assert!(reduced.column(1).iter().all(|v| v.abs() < 1e-6));
    }

    /// Column `column` (1..16) of the Sylvester Hadamard matrix of order 16:
    /// entries of +-1, zero mean, mutually orthogonal.
    fn hadamard_column(column: usize) -> Vec<f64> {
        (0..16usize)
            .map(|row| if (row & column).count_ones() % 2 == 0 { 1.0 } else { -1.0 })
            .collect()
    }

    /// Equicorrelated block: every feature shares `factor` with weight
    /// sqrt(rho) plus its own noise column.
    fn block(rho: f64, factor: usize, noise: &[usize]) -> Vec<Vec<f64>> {
        let shared = hadamard_column(factor);
        noise
            .iter()
            .map(|&n| {
                shared
                    .iter()
                    .zip(hadamard_column(n))
                    .map(|(f, e)| rho.sqrt() * f + (1.0 - rho).sqrt() * e)
                    .collect()
            })
            .collect()
    }

    fn population_variance(values: ArrayView1<f64>) -> f64 {
        let n = values.len() as f64;
        let mean = values.sum() / n;
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
    }

    #[test]
    fn components_span_the_top_two_eigenvalues_when_the_heaviest_column_misleads() {
        // blocks A and C: 4 features at rho 0.3, top eigenvalue 1.9 each.
        // block B: 2 features at rho 0.8, eigenvalue 1.8, but the heaviest
        // covariance column.
        let mut columns = block(0.3, 1, &[2, 3, 4, 5]);
        columns.extend(block(0.8, 6, &[7, 8]));
        columns.extend(block(0.3, 9, &[10, 11, 12, 13]));
        let d = columns.len();
        let matrix = Array2::from_shape_fn((16, d), |(row, col)| columns[col][row]);

        let reduced = principal_components(&standardize(&matrix), 2);

        let first = population_variance(reduced.column(0));
        let second = population_variance(reduced.column(1));
        assert!((first - 1.9).abs() < 1e-9, "first component variance {first}");
        assert!((second - 1.9).abs() < 1e-9, "second component variance {second}");
    }

    #[test]
    fn jacobi_recovers_a_known_spectrum() {
        let matrix = Array2::from_shape_vec((3, 3), vec![2.0, 1.0, 0.0, 1.0, 2.0, 0.0, 0.0, 0.0, 5.0])
            .unwrap();

        let (values, vectors) = symmetric_eigen(&matrix);

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        for (got, want) in sorted.iter().zip([1.0, 3.0, 5.0]) {
            assert!((got - want).abs() < 1e-12, "{got} != {want}");
        }
        for (i, value) in values.iter().enumerate() {
            let vector = vectors.column(i);
            let residual = &matrix.dot(&vector) - &(&vector * *value);
            assert!(residual.iter().all(|r| r.abs() < 1e-10));
        }
    }
}
