//! Serialization and deserialization for design files.
//!
//! Designs are stored as JSON with the control points, wall parameters and
//! ring configuration. Ring bounds (`xvals`) are derived data and are never
//! written; recompute them with [`calc_rings`](crate::ring_calculator::calc_rings)
//! after loading.

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

use crate::model::ControlPointSet;
use crate::ring::{Ring, RingFactory};
use crate::ring_calculator::BowlProfile;

/// Current design file schema
pub const SCHEMA_VERSION: u32 = 3;

/// Number of snapshots kept by [`DesignHistory`]
pub const MAX_HISTORY: usize = 5;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const LEGACY_APP_VERSION: &str = "legacy";

/// Complete design file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignFile {
    pub schema_version: u32,
    pub metadata: DesignMetadata,
    pub design: BowlProfile,
    #[serde(default)]
    pub settings: DesignSettings,
}

/// Design metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignMetadata {
    #[serde(default)]
    pub name: Option<String>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub app_version: String,
}

/// Display settings saved alongside a design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSettings {
    #[serde(default)]
    pub inch: bool,
    #[serde(rename = "sawkerf", default = "default_saw_kerf")]
    pub saw_kerf: f64,
}

fn default_saw_kerf() -> f64 {
    3.0
}

impl Default for DesignSettings {
    fn default() -> Self {
        Self {
            inch: false,
            saw_kerf: default_saw_kerf(),
        }
    }
}

/// Pre-schema ring record; every field but `height` and `segs` may be absent.
#[derive(Debug, Deserialize)]
struct LegacyRing {
    height: f64,
    segs: usize,
    #[serde(default)]
    seglen: Vec<f64>,
    #[serde(default)]
    clrs: Vec<String>,
    #[serde(default)]
    wood: Vec<String>,
    #[serde(default)]
    theta: f64,
}

impl From<LegacyRing> for Ring {
    fn from(legacy: LegacyRing) -> Self {
        let mut ring = Ring::new(legacy.height, legacy.segs);
        ring.theta = legacy.theta;
        if !legacy.seglen.is_empty() {
            ring.seglen = legacy.seglen;
        }
        if !legacy.clrs.is_empty() {
            ring.clrs = legacy.clrs;
        }
        if !legacy.wood.is_empty() {
            ring.wood = legacy.wood;
        }
        ring
    }
}

/// Design stored directly at the document root, before schema versions.
#[derive(Debug, Deserialize)]
struct LegacyDesign {
    #[serde(default)]
    timestamp: Option<String>,
    #[serde(default = "legacy_thickness")]
    thick: f64,
    #[serde(default = "legacy_padding")]
    pad: f64,
    #[serde(default = "legacy_curve_segments")]
    curvesegs: usize,
    #[serde(default)]
    cpoint: Option<Value>,
    rings: Vec<LegacyRing>,
}

fn legacy_thickness() -> f64 {
    6.0
}

fn legacy_padding() -> f64 {
    3.0
}

fn legacy_curve_segments() -> usize {
    50
}

impl DesignFile {
    /// Create a new design file around `design`
    pub fn new(name: Option<String>, design: BowlProfile, settings: DesignSettings) -> Self {
        let now = Utc::now();
        Self {
            schema_version: SCHEMA_VERSION,
            metadata: DesignMetadata {
                name,
                created: now,
                modified: now,
                app_version: APP_VERSION.to_string(),
            },
            design,
            settings,
        }
    }

    /// Save design to file, stamping the modification time
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.metadata.modified = Utc::now();
        self.metadata.app_version = APP_VERSION.to_string();
        let json = self.to_json()?;

        std::fs::write(path.as_ref(), json).context("Failed to write design file")?;
        debug!("Saved design to {}", path.as_ref().display());

        Ok(())
    }

    /// Load and validate a design file, migrating legacy documents
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read design file")?;

        Self::from_json(&content)
            .with_context(|| format!("Failed to load design {}", path.as_ref().display()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize design")
    }

    /// Parse a design document of any known schema version
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).context("Failed to parse design file")?;

        let version = match value.get("schemaVersion") {
            None | Some(Value::Null) => None,
            Some(v) => Some(
                v.as_u64()
                    .ok_or_else(|| anyhow!("schemaVersion must be a non-negative integer"))?,
            ),
        };

        let file = match version {
            None | Some(1) => Self::migrate_legacy(value)?,
            Some(v) if v > u64::from(SCHEMA_VERSION) => {
                bail!("Design schema version {v} is newer than supported version {SCHEMA_VERSION}")
            }
            Some(_) => {
                serde_json::from_value::<DesignFile>(value).context("Invalid design document")?
            }
        };

        file.design.validate().context("Design failed validation")?;
        Ok(file)
    }

    fn migrate_legacy(value: Value) -> Result<Self> {
        if value.get("rings").is_none() {
            bail!("Unrecognised design format: no schemaVersion and no rings");
        }
        let legacy: LegacyDesign =
            serde_json::from_value(value).context("Invalid legacy design")?;

        // Old documents stored control points as canvas pixels
        if legacy.cpoint.as_ref().is_some_and(|v| !v.is_null()) {
            warn!("Legacy control points are in display pixels; using the default profile");
        }

        let created = legacy
            .timestamp
            .as_deref()
            .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or_else(Utc::now);

        let mut rings: Vec<Ring> = legacy.rings.into_iter().map(Ring::from).collect();
        if rings.is_empty() {
            RingFactory::default().ensure_len(&mut rings, 1);
        }

        debug!("Migrated legacy design with {} rings", rings.len());
        Ok(Self {
            schema_version: SCHEMA_VERSION,
            metadata: DesignMetadata {
                name: None,
                created,
                modified: created,
                app_version: LEGACY_APP_VERSION.to_string(),
            },
            design: BowlProfile {
                control_points: ControlPointSet::default(),
                thickness: legacy.thick,
                padding: legacy.pad,
                curve_segments: legacy.curvesegs,
                rings,
            },
            settings: DesignSettings::default(),
        })
    }
}

/// Display entry for one history snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistorySummary {
    pub index: usize,
    pub name: Option<String>,
    pub modified: DateTime<Utc>,
}

/// Most recent design snapshots, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignHistory {
    entries: Vec<DesignFile>,
}

impl DesignHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a snapshot at the front, dropping the oldest past [`MAX_HISTORY`]
    pub fn push(&mut self, design: DesignFile) {
        self.entries.insert(0, design);
        self.entries.truncate(MAX_HISTORY);
    }

    pub fn get(&self, index: usize) -> Option<&DesignFile> {
        self.entries.get(index)
    }

    pub fn remove(&mut self, index: usize) -> Option<DesignFile> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self) -> Vec<HistorySummary> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| HistorySummary {
                index,
                name: entry.metadata.name.clone(),
                modified: entry.metadata.modified,
            })
            .collect()
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize history")?;
        std::fs::write(path.as_ref(), json).context("Failed to write history file")?;
        Ok(())
    }

    /// Load history; a missing file is an empty history
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = std::fs::read_to_string(path).context("Failed to read history file")?;
        let mut history: DesignHistory =
            serde_json::from_str(&content).context("Failed to parse history file")?;
        history.entries.truncate(MAX_HISTORY);
        Ok(history)
    }
}
