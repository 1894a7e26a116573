use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Fallback stroke for line columns without a `colors` entry.
pub const DEFAULT_SERIES_COLOR: Color = Color::rgb8(0x3c, 0xc2, 0x3f);

/// Role of one dataset column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Plotted series sharing the x domain with all other line columns.
    Line,
    /// The single column supplying shared x-axis values (timestamp millis).
    X,
}

/// One named column of samples.
///
/// The column identifier lives next to the sample vector; the `[name, v1..vn]`
/// header slot of the JSON wire format is consumed during parsing and never
/// appears in the typed model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

impl Column {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Immutable chart input: ordered columns plus per-column metadata.
///
/// Preconditions (documented, not defensively validated): exactly one column
/// is tagged [`ColumnKind::X`]; every line column has the same sample count
/// as the x column. A dataset violating these produces visually undefined
/// output, but painting it never panics. [`Dataset::from_json_str`] is the
/// validating entry point for untrusted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<Column>,
    types: IndexMap<String, ColumnKind>,
    colors: IndexMap<String, Color>,
    names: IndexMap<String, String>,
}

impl Dataset {
    #[must_use]
    pub fn new(
        columns: Vec<Column>,
        types: IndexMap<String, ColumnKind>,
        colors: IndexMap<String, Color>,
        names: IndexMap<String, String>,
    ) -> Self {
        Self {
            columns,
            types,
            colors,
            names,
        }
    }

    /// Parses the column-oriented JSON wire format:
    ///
    /// ```json
    /// {
    ///   "columns": [["x", 1542412800000, 1542499200000], ["y0", 10, 20]],
    ///   "types": {"y0": "line", "x": "x"},
    ///   "colors": {"y0": "#3cc23f"},
    ///   "names": {"y0": "Joined"}
    /// }
    /// ```
    ///
    /// The first element of each column is its identifier; the rest are
    /// samples. Ragged columns, unknown type tags, a missing or duplicated
    /// x column, and malformed hex colors are rejected.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let raw: RawDataset = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidDataset(format!("malformed json payload: {e}")))?;

        let mut columns = Vec::with_capacity(raw.columns.len());
        for raw_column in &raw.columns {
            let Some(serde_json::Value::String(name)) = raw_column.first() else {
                return Err(ChartError::InvalidDataset(
                    "column must start with a string identifier".to_owned(),
                ));
            };

            let mut values = Vec::with_capacity(raw_column.len().saturating_sub(1));
            for value in &raw_column[1..] {
                let number = value.as_f64().ok_or_else(|| {
                    ChartError::InvalidDataset(format!(
                        "column `{name}` contains a non-numeric sample"
                    ))
                })?;
                values.push(number);
            }
            columns.push(Column::new(name.clone(), values));
        }

        let mut types = IndexMap::with_capacity(raw.types.len());
        for (name, tag) in &raw.types {
            let kind = match tag.as_str() {
                "line" => ColumnKind::Line,
                "x" => ColumnKind::X,
                other => {
                    return Err(ChartError::InvalidDataset(format!(
                        "column `{name}` has unknown type tag `{other}`"
                    )));
                }
            };
            types.insert(name.clone(), kind);
        }

        let x_count = columns
            .iter()
            .filter(|c| types.get(&c.name) == Some(&ColumnKind::X))
            .count();
        if x_count != 1 {
            return Err(ChartError::InvalidDataset(format!(
                "dataset must have exactly one x column, found {x_count}"
            )));
        }

        let sample_count = columns.first().map(Column::len).unwrap_or(0);
        if columns.iter().any(|c| c.len() != sample_count) {
            return Err(ChartError::InvalidDataset(
                "all columns must have the same sample count".to_owned(),
            ));
        }

        let mut colors = IndexMap::with_capacity(raw.colors.len());
        for (name, hex) in &raw.colors {
            let color = Color::from_hex(hex).map_err(|e| {
                ChartError::InvalidDataset(format!("column `{name}` color: {e}"))
            })?;
            colors.insert(name.clone(), color);
        }

        Ok(Self {
            columns,
            types,
            colors,
            names: raw.names,
        })
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Role of a column. Columns without a `types` entry count as non-line,
    /// matching the wire format where only tagged columns plot.
    #[must_use]
    pub fn kind_of(&self, name: &str) -> ColumnKind {
        self.types.get(name).copied().unwrap_or(ColumnKind::X)
    }

    /// Line columns in dataset order. Tooltip items follow this order.
    pub fn line_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns
            .iter()
            .filter(|c| self.kind_of(&c.name) == ColumnKind::Line)
    }

    /// The shared x-domain column, when the dataset carries one.
    #[must_use]
    pub fn x_column(&self) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| self.kind_of(&c.name) != ColumnKind::Line)
    }

    /// Shared sample count, taken from the x column.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.x_column()
            .or_else(|| self.columns.first())
            .map(Column::len)
            .unwrap_or(0)
    }

    #[must_use]
    pub fn color_of(&self, name: &str) -> Color {
        self.colors.get(name).copied().unwrap_or(DEFAULT_SERIES_COLOR)
    }

    #[must_use]
    pub fn label_of<'a>(&'a self, name: &'a str) -> &'a str {
        self.names.get(name).map(String::as_str).unwrap_or(name)
    }
}

#[derive(Deserialize)]
struct RawDataset {
    columns: Vec<Vec<serde_json::Value>>,
    types: IndexMap<String, String>,
    #[serde(default)]
    colors: IndexMap<String, String>,
    #[serde(default)]
    names: IndexMap<String, String>,
}
