//! Tooltip catalog loaded from a tab-delimited table.
//!
//! The header row must carry at least `mLabel`, `mName` and `mTooltip`
//! columns (the column names are part of the pipeline's file contract).
//! A name of `*` registers the per-label fallback.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{NavIndexError, Result};

const COLUMN_LABEL: &str = "mLabel";
const COLUMN_NAME: &str = "mName";
const COLUMN_TOOLTIP: &str = "mTooltip";
const WILDCARD_NAME: &str = "*";

/// Read-only (label, name) -> tooltip mapping, safe to share across workers.
#[derive(Debug, Default)]
pub struct TooltipCatalog {
    entries: HashMap<String, HashMap<String, String>>,
}

impl TooltipCatalog {
    /// Catalog with no entries; every lookup yields the empty string.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads a catalog from a tab-delimited file.
    ///
    /// # Errors
    /// Fails if the file cannot be read, a required column is missing, a row
    /// is shorter than the header, or a (label, name) pair occurs twice.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| NavIndexError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut lines = content.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());
        let Some((_, header)) = lines.next() else {
            return Ok(Self::default());
        };

        let columns: IndexMap<&str, usize> = header
            .split('\t')
            .enumerate()
            .map(|(index, name)| (name, index))
            .collect();
        let label_col = required_column(&columns, COLUMN_LABEL, path)?;
        let name_col = required_column(&columns, COLUMN_NAME, path)?;
        let tooltip_col = required_column(&columns, COLUMN_TOOLTIP, path)?;

        let mut catalog = Self::default();
        for (row, line) in lines {
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < columns.len() {
                return Err(NavIndexError::TooltipRow {
                    path: path.to_path_buf(),
                    row: row + 1,
                    expected: columns.len(),
                    found: fields.len(),
                });
            }
            catalog.insert(fields[label_col], fields[name_col], fields[tooltip_col])?;
        }
        Ok(catalog)
    }

    fn insert(&mut self, label: &str, name: &str, tooltip: &str) -> Result<()> {
        let names = self.entries.entry(label.to_string()).or_default();
        if names.contains_key(name) {
            return Err(NavIndexError::TooltipDuplicate {
                label: label.to_string(),
                name: name.to_string(),
            });
        }
        names.insert(name.to_string(), tooltip.to_string());
        Ok(())
    }

    /// Tooltip for (label, name): exact entry, else the label's wildcard
    /// entry, else the empty string.
    #[must_use]
    pub fn lookup(&self, label: &str, name: &str) -> &str {
        self.entries.get(label).map_or("", |names| {
            names
                .get(name)
                .or_else(|| names.get(WILDCARD_NAME))
                .map_or("", String::as_str)
        })
    }
}

fn required_column(columns: &IndexMap<&str, usize>, name: &str, path: &Path) -> Result<usize> {
    columns
        .get(name)
        .copied()
        .ok_or_else(|| NavIndexError::TooltipColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
