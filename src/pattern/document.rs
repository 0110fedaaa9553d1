use crate::pattern::model::{PatternConfig, StateGrid};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The exported/imported representation of everything the editor owns.
///
/// Serialized as camelCase JSON and pretty-printed on export so the output
/// area stays human-readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternDocument {
    pub led_count: usize,
    pub division_count: usize,
    pub arm_length: f32,
    pub state_matrix: Vec<Vec<bool>>,
}

impl PatternDocument {
    pub fn from_state(config: PatternConfig, grid: &StateGrid) -> Self {
        Self {
            led_count: config.leds_per_arm,
            division_count: config.divisions,
            arm_length: config.arm_offset,
            state_matrix: grid.rows().to_vec(),
        }
    }

    /// Validate the counts and shape the matrix to them.
    ///
    /// The counts are authoritative: a matrix with missing rows or cells is
    /// padded with off LEDs, surplus entries are dropped. Either way gets a
    /// warning in the log, since it means the document was edited by hand or
    /// produced elsewhere.
    pub fn into_state(self) -> anyhow::Result<(PatternConfig, StateGrid)> {
        let config = PatternConfig {
            leds_per_arm: self.led_count,
            divisions: self.division_count,
            arm_offset: self.arm_length,
        };
        config.validate()?;

        let well_shaped = self.state_matrix.len() == config.divisions
            && self
                .state_matrix
                .iter()
                .all(|row| row.len() == config.leds_per_arm);
        if !well_shaped {
            tracing::warn!(
                divisions = config.divisions,
                leds_per_arm = config.leds_per_arm,
                rows = self.state_matrix.len(),
                "state matrix does not match its counts; truncating/padding"
            );
        }
        let grid = StateGrid::from_rows(self.state_matrix, config.divisions, config.leds_per_arm);
        Ok((config, grid))
    }

    pub fn to_pretty_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("serialize pattern document")
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("parse pattern document")
    }

    /// Read and parse a document from disk; the import file picker hands us
    /// a path, not contents.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read pattern document {}", path.display()))?;
        Self::from_json(&text)
    }
}
