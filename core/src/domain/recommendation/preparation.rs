use serde_json::Value;

use crate::domain::{
    recipe::{
        entities::RecipeRecord,
        retrieval::{NESTED_FIELDS, RECIPE_FIELDS},
    },
    recommendation::{
        PipelineError,
        tabulation::{Cell, Frame, Tabulator},
    },
};

/// Dense recipe table: one row per candidate, every cell present.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl FeatureTable {
    /// Replaces every missing cell with zero.
    pub fn from_frame(frame: Frame) -> Self {
        let columns = frame.columns().to_vec();
        let rows = frame
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.clone().unwrap_or(Cell::Number(0.0)))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }

    /// Values of one column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(|row| &row[index]).collect())
    }

    pub fn without_columns(&self, names: &[&str]) -> FeatureTable {
        let keep: Vec<usize> = (0..self.columns.len())
            .filter(|&i| !names.contains(&self.columns[i].as_str()))
            .collect();

        FeatureTable {
            columns: keep.iter().map(|&i| self.columns[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| keep.iter().map(|&i| row[i].clone()).collect())
                .collect(),
        }
    }

    /// Rows at `indices`, in that order; repeated indices repeat the row.
    pub fn select_rows(&self, indices: &[usize]) -> FeatureTable {
        FeatureTable {
            columns: self.columns.clone(),
            rows: indices
                .iter()
                .filter_map(|&i| self.rows.get(i).cloned())
                .collect(),
        }
    }
}

/// Columns copied straight from each record: every retrieved field except the
/// nested ones.
pub fn display_fields() -> Vec<&'static str> {
    RECIPE_FIELDS
        .iter()
        .copied()
        .filter(|field| !NESTED_FIELDS.contains(field))
        .collect()
}

/// Builds the feature table of an already filtered candidate batch.
///
/// The display columns come first, then caloric breakdown, nutrient daily
/// needs and instructions. Rows keep the input order.
pub fn prepare(records: &[RecipeRecord]) -> Result<FeatureTable, PipelineError> {
    if records.is_empty() {
        return Err(PipelineError::NoRecipes);
    }

    let fields = display_fields();
    let display = Frame::with_columns(
        fields.iter().map(|f| f.to_string()).collect(),
        records
            .iter()
            .map(|record| {
                fields
                    .iter()
                    .map(|field| record.get(field).and_then(Cell::from_json))
                    .collect()
            })
            .collect(),
    );

    let nutrition: Vec<&Value> = records.iter().map(RecipeRecord::nutrition).collect();
    let instructions: Vec<&Value> = records
        .iter()
        .map(RecipeRecord::analyzed_instructions)
        .collect();

    let frame = Frame::concat_columns(vec![
        display,
        Tabulator::CaloricBreakdown.tabulate(&nutrition),
        Tabulator::NutrientDailyNeeds.tabulate(&nutrition),
        Tabulator::Instructions.tabulate(&instructions),
    ]);

    Ok(FeatureTable::from_frame(frame))
}
