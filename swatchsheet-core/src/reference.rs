//! Named reference colors (Pantone-style tables).
//!
//! A table is a JSON array of `{ "pantone", "c", "m", "y", "k" }` records.
//! It is loaded once and never changes afterwards.

use crate::cmyk::{format_channel, CmykColor};
use crate::error::{Result, SwatchError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// One named color as stored in a reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceColor {
    #[serde(rename = "pantone")]
    pub name: String,
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl ReferenceColor {
    pub fn new(name: impl Into<String>, color: CmykColor) -> Self {
        let [c, m, y, k] = color.channels();
        Self {
            name: name.into(),
            c,
            m,
            y,
            k,
        }
    }

    /// The stored channels, clamped.
    pub fn color(&self) -> CmykColor {
        CmykColor::new(self.c, self.m, self.y, self.k)
    }
}

/// Immutable lookup table of reference colors.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    entries: Vec<ReferenceColor>,
    by_name: HashMap<String, usize>,
    by_lowercase_name: HashMap<String, usize>,
}

impl ReferenceTable {
    /// Builds a table, keeping the first entry of any repeated name.
    pub fn from_entries(records: Vec<ReferenceColor>) -> Result<Self> {
        let mut table = Self::default();

        for (position, record) in records.into_iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(SwatchError::ReferenceTable(format!(
                    "entry {position} has an empty name"
                )));
            }
            if table.by_name.contains_key(&record.name) {
                tracing::debug!(name = %record.name, "skipping duplicate reference color");
                continue;
            }

            let index = table.entries.len();
            table.by_name.insert(record.name.clone(), index);
            table
                .by_lowercase_name
                .entry(record.name.to_lowercase())
                .or_insert(index);
            table.entries.push(record);
        }

        Ok(table)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_entries(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Self::from_entries(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        let table = Self::from_reader(std::io::BufReader::new(file))?;
        tracing::debug!(
            path = %path.as_ref().display(),
            entries = table.len(),
            "loaded reference table"
        );
        Ok(table)
    }

    /// Exact name match, falling back to a case-insensitive one.
    pub fn get(&self, name: &str) -> Option<&ReferenceColor> {
        let name = name.trim();
        self.by_name
            .get(name)
            .or_else(|| self.by_lowercase_name.get(&name.to_lowercase()))
            .map(|&index| &self.entries[index])
    }

    /// Like [`ReferenceTable::get`], but a miss is an error.
    pub fn lookup(&self, name: &str) -> Result<&ReferenceColor> {
        self.get(name)
            .ok_or_else(|| SwatchError::UnknownReference(name.trim().to_string()))
    }

    /// Case-insensitive substring search over names, in table order.
    ///
    /// An empty query returns the first `limit` entries.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&ReferenceColor> {
        let needle = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|entry| needle.is_empty() || entry.name.to_lowercase().contains(&needle))
            .take(limit)
            .collect()
    }

    pub fn entries(&self) -> &[ReferenceColor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A vendor field that may arrive as a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum VendorValue {
    Number(f64),
    Text(String),
}

impl VendorValue {
    fn as_f64(&self) -> Option<f64> {
        match self {
            VendorValue::Number(n) => Some(*n),
            VendorValue::Text(s) => s.trim().parse().ok(),
        }
    }

    fn label(&self) -> String {
        match self {
            VendorValue::Number(n) => format_channel(*n),
            VendorValue::Text(s) => s.trim().to_string(),
        }
    }
}

/// One record of the vendor's color table. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VendorColor {
    #[serde(rename = "Code")]
    pub code: VendorValue,
    #[serde(rename = "C")]
    pub c: VendorValue,
    #[serde(rename = "M")]
    pub m: VendorValue,
    #[serde(rename = "Y")]
    pub y: VendorValue,
    #[serde(rename = "K")]
    pub k: VendorValue,
}

impl VendorColor {
    /// Reference entry named `Pantone <Code> C`.
    pub fn to_reference(&self) -> Result<ReferenceColor> {
        let code = self.code.label();
        let channel = |value: &VendorValue, channel: &str| {
            value.as_f64().ok_or_else(|| {
                SwatchError::ReferenceTable(format!(
                    "{code}: channel {channel} is not numeric ({})",
                    value.label()
                ))
            })
        };

        Ok(ReferenceColor {
            name: format!("Pantone {code} C"),
            c: channel(&self.c, "C")?,
            m: channel(&self.m, "M")?,
            y: channel(&self.y, "Y")?,
            k: channel(&self.k, "K")?,
        })
    }
}

/// Converts a vendor table (JSON array of `{Code, C, M, Y, K}`) into
/// reference records.
pub fn convert_vendor_table(json: &str) -> Result<Vec<ReferenceColor>> {
    let vendor: Vec<VendorColor> = serde_json::from_str(json)?;
    vendor.iter().map(VendorColor::to_reference).collect()
}
