//! Named-column tabular containers for examples and targets.

use crate::errors::ModelError;

/// A named-column, row-major table of `f32` predictor values.
///
/// Every row carries exactly one value per column; columns are addressed by
/// name, in declaration order. This is the shape a dataframe slice takes once
/// the caller has selected its predictor columns.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    columns: Vec<String>,
    rows: Vec<Vec<f32>>,
}

impl FeatureTable {
    /// Creates a table from column names and row-major data.
    ///
    /// Fails if no columns are given or any row length disagrees with the
    /// column count.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f32>>) -> Result<Self, ModelError> {
        if columns.is_empty() {
            return Err(ModelError::NoFeatureColumns);
        }
        for row in &rows {
            if row.len() != columns.len() {
                return Err(ModelError::RaggedRow {
                    expected: columns.len(),
                    actual: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Column names, in declaration order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of predictor columns.
    pub fn num_features(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The raw rows.
    pub fn rows(&self) -> &[Vec<f32>] {
        &self.rows
    }

    /// Flattens the selected rows into one row-major buffer for tensor
    /// construction. Indices must be in range.
    pub fn gather_rows(&self, indices: &[usize]) -> Vec<f32> {
        let mut flat = Vec::with_capacity(indices.len() * self.columns.len());
        for &index in indices {
            flat.extend_from_slice(&self.rows[index]);
        }
        flat
    }

    /// Flattens the whole table into one row-major buffer.
    pub fn flattened(&self) -> Vec<f32> {
        self.rows.iter().flat_map(|row| row.iter().copied()).collect()
    }
}

/// A single named column of regression labels.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetColumn {
    name: String,
    values: Vec<f32>,
}

impl TargetColumn {
    /// Creates a target column.
    pub fn new(name: impl Into<String>, values: Vec<f32>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// The column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The label values.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column holds no labels.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Collects the labels at the selected indices. Indices must be in range.
    pub fn gather(&self, indices: &[usize]) -> Vec<f32> {
        indices.iter().map(|&index| self.values[index]).collect()
    }
}
