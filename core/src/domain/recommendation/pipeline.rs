use tracing::debug;

use crate::domain::{
    recipe::{
        entities::{RecipeRecord, Recommendation},
        value_objects::RecommendationMode,
    },
    recommendation::{
        PipelineError,
        clustering::{ClusteringParams, apply_clustering},
        preparation::{FeatureTable, prepare},
        selection::nearest_to_centroids,
        tabulation::{Cell, INSTRUCTIONS_COLUMN},
    },
};

/// Columns shown to the user; never used as clustering features.
pub const RECOMMENDATION_COLUMNS: [&str; 5] =
    ["id", "title", "image", "readyInMinutes", INSTRUCTIONS_COLUMN];

/// Turns an already filtered candidate batch into recommendations.
///
/// `Simple` returns every row. `Varied` clusters the batch and keeps the row
/// closest to each centroid, unless the batch has no more rows than
/// `params.cluster_count`, in which case all rows are returned as well.
pub fn recommend(
    records: &[RecipeRecord],
    params: &ClusteringParams,
    mode: RecommendationMode,
) -> Result<Vec<Recommendation>, PipelineError> {
    let table = prepare(records)?;

    let chosen = match mode {
        RecommendationMode::Varied if table.len() > params.cluster_count => {
            let features = table.without_columns(&RECOMMENDATION_COLUMNS);
            let assignment = apply_clustering(&features, params)?;
            let indices = nearest_to_centroids(&assignment.centroids, &assignment.points);
            debug!(rows = table.len(), selected = ?indices, "selected cluster representatives");
            table.select_rows(&indices)
        }
        _ => table,
    };

    Ok(to_recommendations(&chosen))
}

fn to_recommendations(table: &FeatureTable) -> Vec<Recommendation> {
    (0..table.len())
        .map(|row| Recommendation {
            id: number(table.cell(row, "id")),
            name: text(table.cell(row, "title")),
            image: text(table.cell(row, "image")),
            instructions: text(table.cell(row, INSTRUCTIONS_COLUMN)),
            time_minutes: number(table.cell(row, "readyInMinutes")),
        })
        .collect()
}

// Zero-filled text cells come back as an empty string, not "0".
fn text(cell: Option<&Cell>) -> String {
    match cell {
        Some(Cell::Text(value)) => value.clone(),
        _ => String::new(),
    }
}

fn number(cell: Option<&Cell>) -> i64 {
    cell.and_then(Cell::as_f64).map(|n| n as i64).unwrap_or_default()
}
