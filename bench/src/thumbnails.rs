use crate::error::BenchError;
use crate::identifier::MediaIdentifier;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::info;

/// Media to request and how many times to request each one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThumbnailPlan {
    entries: Vec<(MediaIdentifier, u32)>,
}

impl ThumbnailPlan {
    pub fn new(entries: Vec<(MediaIdentifier, u32)>) -> Self {
        Self { entries }
    }

    pub fn load(path: &Path) -> Result<Self, BenchError> {
        let json = std::fs::read_to_string(path).map_err(|source| {
            BenchError::CannotReadThumbnailsFile {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let plan = Self::from_json(&json)?;
        info!(
            "Loaded {} media identifiers ({} requests) from {}",
            plan.entries.len(),
            plan.total_requests(),
            path.display()
        );
        Ok(plan)
    }

    /// Parses a JSON object mapping identifiers to repeat counts.
    pub fn from_json(json: &str) -> Result<Self, BenchError> {
        let counts: BTreeMap<String, u32> = serde_json::from_str(json)?;
        let entries = counts
            .into_iter()
            .map(|(identifier, count)| {
                identifier
                    .parse::<MediaIdentifier>()
                    .map(|identifier| (identifier, count))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[(MediaIdentifier, u32)] {
        &self.entries
    }

    /// Distinct identifiers, ignoring repeat counts.
    pub fn identifiers(&self) -> BTreeSet<&MediaIdentifier> {
        self.entries.iter().map(|(identifier, _)| identifier).collect()
    }

    pub fn total_requests(&self) -> u64 {
        self.entries.iter().map(|(_, count)| *count as u64).sum()
    }
}
