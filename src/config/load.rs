use crate::config::types::NamingTable;
use anyhow::{Context, Result};

/// Naming conventions embedded at compile time (no external file needed).
const NAMING_TABLE_JSON: &str = include_str!("../data/naming_table.json");

impl NamingTable {
    pub fn load_embedded() -> Result<Self> {
        serde_json::from_str(NAMING_TABLE_JSON).context("failed to parse embedded naming table")
    }
}
