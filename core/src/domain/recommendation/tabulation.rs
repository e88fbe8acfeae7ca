use serde_json::Value;

/// A scalar value of the recipe table.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl Cell {
    /// Scalars only; `null`, arrays and objects are treated as missing.
    pub fn from_json(value: &Value) -> Option<Cell> {
        match value {
            Value::Number(n) => n.as_f64().map(Cell::Number),
            Value::Bool(b) => Some(Cell::Bool(*b)),
            Value::String(s) => Some(Cell::Text(s.clone())),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Cell::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            Cell::Number(n) => n.to_string(),
            Cell::Bool(b) => b.to_string(),
            Cell::Text(s) => s.clone(),
        }
    }
}

/// Column-labelled rows where a cell may be missing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<Option<Cell>>>,
}

impl Frame {
    /// Builds a frame whose columns are the union of the row keys, in
    /// first-seen order. A repeated key within a row keeps the last value.
    pub fn from_sparse_rows(sparse: Vec<Vec<(String, Cell)>>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &sparse {
            for (name, _) in row {
                if !columns.contains(name) {
                    columns.push(name.clone());
                }
            }
        }

        let rows = sparse
            .into_iter()
            .map(|row| {
                let mut dense = vec![None; columns.len()];
                for (name, cell) in row {
                    if let Some(index) = columns.iter().position(|c| *c == name) {
                        dense[index] = Some(cell);
                    }
                }
                dense
            })
            .collect();

        Self { columns, rows }
    }

    /// Builds a frame with a fixed column list.
    pub fn with_columns(columns: Vec<String>, rows: Vec<Vec<Option<Cell>>>) -> Self {
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

    pub fn rows(&self) -> &[Vec<Option<Cell>>] {
        &self.rows
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&Cell> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(index)?.as_ref()
    }

    /// Side-by-side concatenation by row position. Frames shorter than the
    /// longest one are padded with missing cells.
    pub fn concat_columns(frames: Vec<Frame>) -> Frame {
        let height = frames.iter().map(Frame::len).max().unwrap_or(0);
        let mut columns = Vec::new();
        let mut rows: Vec<Vec<Option<Cell>>> = vec![Vec::new(); height];

        for frame in frames {
            let width = frame.columns.len();
            columns.extend(frame.columns);
            let mut frame_rows = frame.rows.into_iter();
            for row in rows.iter_mut() {
                match frame_rows.next() {
                    Some(cells) => row.extend(cells),
                    None => row.extend(std::iter::repeat_n(None, width)),
                }
            }
        }

        Frame { columns, rows }
    }
}

/// Flattens one nested concern of the recipe records into its own frame.
///
/// Every variant yields exactly one row per input value, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tabulator {
    /// `nutrition.caloricBreakdown`: one column per key, values passed through.
    CaloricBreakdown,
    /// `nutrition.nutrients[*]`: column `name`, value `percentOfDailyNeeds`.
    NutrientDailyNeeds,
    /// `analyzedInstructions[0].steps[*].step`, numbered and newline-joined.
    Instructions,
}

pub const INSTRUCTIONS_COLUMN: &str = "instructions";

impl Tabulator {
    /// `values` holds the nutrition objects for the nutrition tabulators and
    /// the instruction group lists for [`Tabulator::Instructions`].
    pub fn tabulate(&self, values: &[&Value]) -> Frame {
        match self {
            Tabulator::CaloricBreakdown => {
                Frame::from_sparse_rows(values.iter().map(|v| caloric_breakdown(v)).collect())
            }
            Tabulator::NutrientDailyNeeds => {
                Frame::from_sparse_rows(values.iter().map(|v| daily_needs(v)).collect())
            }
            Tabulator::Instructions => Frame::with_columns(
                vec![INSTRUCTIONS_COLUMN.to_string()],
                values
                    .iter()
                    .map(|v| vec![Some(Cell::Text(numbered_steps(v)))])
                    .collect(),
            ),
        }
    }
}

fn caloric_breakdown(nutrition: &Value) -> Vec<(String, Cell)> {
    nutrition
        .get("caloricBreakdown")
        .and_then(Value::as_object)
        .map(|breakdown| {
            breakdown
                .iter()
                .filter_map(|(key, value)| Cell::from_json(value).map(|cell| (key.clone(), cell)))
                .collect()
        })
        .unwrap_or_default()
}

fn daily_needs(nutrition: &Value) -> Vec<(String, Cell)> {
    let Some(nutrients) = nutrition.get("nutrients").and_then(Value::as_array) else {
        return Vec::new();
    };

    nutrients
        .iter()
        .filter_map(|nutrient| {
            let name = nutrient.get("name")?.as_str()?;
            let percent = Cell::from_json(nutrient.get("percentOfDailyNeeds")?)?;
            Some((name.to_string(), percent))
        })
        .collect()
}

fn numbered_steps(instruction_groups: &Value) -> String {
    let steps = instruction_groups
        .get(0)
        .and_then(|group| group.get("steps"))
        .and_then(Value::as_array);

    let Some(steps) = steps else {
        return String::new();
    };

    steps
        .iter()
        .filter_map(|step| step.get("step").and_then(Value::as_str))
        .enumerate()
        .map(|(index, text)| format!("{}. {}", index + 1, text))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nutrition(carbs: f64, nutrients: &[(&str, f64)]) -> Value {
        let nutrients: Vec<Value> = nutrients
            .iter()
            .map(|(name, pct)| json!({ "name": name, "amount": 1.0, "unit": "g", "percentOfDailyNeeds": pct }))
            .collect();
        json!({
            "caloricBreakdown": {
                "percentProtein": 20.0,
                "percentFat": 100.0 - 20.0 - carbs,
                "percentCarbs": carbs,
            },
            "nutrients": nutrients,
        })
    }

    #[test]
    fn caloric_breakdown_keeps_one_row_per_recipe_in_order() {
        let first = nutrition(50.0, &[]);
        let second = nutrition(10.0, &[]);
        let third = nutrition(70.0, &[]);

        let frame = Tabulator::CaloricBreakdown.tabulate(&[&first, &second, &third]);

        assert_eq!(frame.len(), 3);
        assert_eq!(frame.get(0, "percentCarbs"), Some(&Cell::Number(50.0)));
        assert_eq!(frame.get(1, "percentCarbs"), Some(&Cell::Number(10.0)));
        assert_eq!(frame.get(2, "percentCarbs"), Some(&Cell::Number(70.0)));
    }

    #[test]
    fn caloric_breakdown_is_not_validated() {
        let odd = json!({ "caloricBreakdown": { "percentProtein": -5.0, "percentFat": 300.0 } });

        let frame = Tabulator::CaloricBreakdown.tabulate(&[&odd]);

        assert_eq!(frame.get(0, "percentProtein"), Some(&Cell::Number(-5.0)));
        assert_eq!(frame.get(0, "percentCarbs"), None);
    }

    #[test]
    fn daily_needs_columns_are_the_union_of_nutrient_names() {
        let first = nutrition(50.0, &[("Calories", 12.0), ("Fat", 8.5)]);
        let second = nutrition(50.0, &[("Calories", 30.0), ("Vitamin C", 110.0)]);

        let frame = Tabulator::NutrientDailyNeeds.tabulate(&[&first, &second]);

        assert_eq!(frame.columns(), &["Calories", "Fat", "Vitamin C"]);
        assert_eq!(frame.get(0, "Vitamin C"), None);
        assert_eq!(frame.get(1, "Fat"), None);
        assert_eq!(frame.get(1, "Vitamin C"), Some(&Cell::Number(110.0)));
    }

    #[test]
    fn missing_nutrition_yields_an_empty_row_not_an_error() {
        let present = nutrition(50.0, &[("Calories", 12.0)]);

        let frame = Tabulator::NutrientDailyNeeds.tabulate(&[&Value::Null, &present]);

        assert_eq!(frame.len(), 2);
        assert_eq!(frame.get(0, "Calories"), None);
        assert_eq!(frame.get(1, "Calories"), Some(&Cell::Number(12.0)));
    }

    #[test]
    fn instructions_are_numbered_and_joined() {
        let groups = json!([
            { "name": "", "steps": [ { "number": 1, "step": "Preheat oven" }, { "number": 2, "step": "Bake 20 min" } ] },
            { "name": "Sauce", "steps": [ { "number": 1, "step": "Ignored" } ] }
        ]);

        let frame = Tabulator::Instructions.tabulate(&[&groups]);

        assert_eq!(
            frame.get(0, INSTRUCTIONS_COLUMN),
            Some(&Cell::Text("1. Preheat oven\n2. Bake 20 min".to_string()))
        );
    }

    #[test]
    fn no_groups_or_no_steps_give_an_empty_string() {
        let no_groups = json!([]);
        let no_steps = json!([{ "name": "", "steps": [] }]);

        let frame = Tabulator::Instructions.tabulate(&[&no_groups, &no_steps, &Value::Null]);

        let empty = Some(&Cell::Text(String::new()));
        assert_eq!(frame.len(), 3);
        assert_eq!(frame.get(0, INSTRUCTIONS_COLUMN), empty);
        assert_eq!(frame.get(1, INSTRUCTIONS_COLUMN), empty);
        assert_eq!(frame.get(2, INSTRUCTIONS_COLUMN), empty);
    }

    #[test]
    fn concat_aligns_rows_by_position() {
        let left = Frame::with_columns(
            vec!["id".to_string()],
            vec![vec![Some(Cell::Number(1.0))], vec![Some(Cell::Number(2.0))]],
        );
        let right = Frame::from_sparse_rows(vec![vec![("Fat".to_string(), Cell::Number(3.0))]]);

        let joined = Frame::concat_columns(vec![left, right]);

        assert_eq!(joined.columns(), &["id", "Fat"]);
        assert_eq!(joined.get(0, "Fat"), Some(&Cell::Number(3.0)));
        assert_eq!(joined.get(1, "id"), Some(&Cell::Number(2.0)));
        assert_eq!(joined.get(1, "Fat"), None);
    }
}
