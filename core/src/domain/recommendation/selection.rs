use ndarray::Array2;

use crate::domain::recommendation::clustering::squared_distance;

/// For each centroid, the index of the closest point by Euclidean distance.
///
/// Ties go to the lowest index. Two centroids may share their closest point,
/// in which case the index appears twice.
pub fn nearest_to_centroids(centroids: &Array2<f64>, points: &Array2<f64>) -> Vec<usize> {
    centroids
        .rows()
        .into_iter()
        .filter_map(|centroid| {
            points
                .rows()
                .into_iter()
                .map(|point| squared_distance(point, centroid))
                .enumerate()
                .fold(None, |best: Option<(usize, f64)>, (i, distance)| match best {
                    Some((_, best_distance)) if best_distance <= distance => best,
                    _ => Some((i, distance)),
                })
                .map(|(i, _)| i)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn picks_the_closest_point_for_every_centroid() {
        let centroids = array![[0.0, 0.0], [10.0, 10.0]];
        let points = array![[9.0, 9.5], [0.2, -0.1], [5.0, 5.0], [10.5, 10.0]];

        assert_eq!(nearest_to_centroids(&centroids, &points), vec![1, 3]);
    }

    #[test]
    fn result_is_nearest_among_all_points() {
        let centroids = array![[1.0, 2.0], [-3.0, 0.5], [4.0, -4.0]];
        let points = array![[0.0, 0.0], [1.1, 1.9], [-2.5, 0.0], [3.0, -3.0], [4.2, -4.1]];

        let picked = nearest_to_centroids(&centroids, &points);

        for (c, &i) in picked.iter().enumerate() {
            let chosen = squared_distance(points.row(i), centroids.row(c));
            for point in points.rows() {
                assert!(chosen <= squared_distance(point, centroids.row(c)));
            }
        }
    }

    #[test]
    fn ties_go_to_the_lowest_index() {
        let centroids = array![[0.0, 0.0]];
        let points = array![[1.0, 0.0], [0.0, 1.0], [-1.0, 0.0]];

        assert_eq!(nearest_to_centroids(&centroids, &points), vec![0]);
    }

    #[test]
    fn collapsed_centroids_repeat_the_same_row() {
        let centroids = array![[0.0, 0.0], [0.1, 0.0], [50.0, 50.0]];
        let points = array![[0.05, 0.0], [49.0, 49.0]];

        assert_eq!(nearest_to_centroids(&centroids, &points), vec![0, 0, 1]);
    }

    #[test]
    fn no_points_means_no_selection() {
        let centroids = array![[0.0, 0.0]];
        let points = Array2::<f64>::zeros((0, 2));

        assert!(nearest_to_centroids(&centroids, &points).is_empty());
    }
}
