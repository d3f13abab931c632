//! The persisted world-configuration record.
//!
//! Six integers in a fixed order — width, height, carnivores, herbivores,
//! obstacles, food — as one comma-delimited text line. Loading a record also
//! refreshes the well-known default file so the most recent configuration
//! comes back on the next launch.

use crate::error::{RecordError, Result};
use savanna_core::config::SimConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The default record consulted when no explicit path is given.
pub const DEFAULT_RECORD_FILE: &str = "last_config.csv";

const FIELD_COUNT: usize = 6;

/// The six construction parameters the core needs from persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldRecord {
    pub width: u32,
    pub height: u32,
    pub carnivores: usize,
    pub herbivores: usize,
    pub obstacles: usize,
    pub food: usize,
}

impl WorldRecord {
    /// Parses a delimited record line. A trailing delimiter (the historical
    /// writer always left one) and surrounding whitespace are tolerated.
    pub fn parse(text: &str) -> Result<Self> {
        let fields: Vec<&str> = text
            .trim()
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect();
        if fields.len() != FIELD_COUNT {
            return Err(RecordError::FieldCount {
                expected: FIELD_COUNT,
                found: fields.len(),
            });
        }

        fn field<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T> {
            value.parse().map_err(|_| RecordError::Parse {
                field: name,
                value: value.to_string(),
            })
        }

        Ok(Self {
            width: field("width", fields[0])?,
            height: field("height", fields[1])?,
            carnivores: field("carnivores", fields[2])?,
            herbivores: field("herbivores", fields[3])?,
            obstacles: field("obstacles", fields[4])?,
            food: field("food", fields[5])?,
        })
    }

    /// Renders the record as its one-line wire form.
    #[must_use]
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.width, self.height, self.carnivores, self.herbivores, self.obstacles, self.food
        )
    }

    /// Copies the six parameters into a simulation configuration.
    pub fn apply(&self, config: &mut SimConfig) {
        config.world.width = self.width;
        config.world.height = self.height;
        config.world.carnivores = self.carnivores;
        config.world.herbivores = self.herbivores;
        config.world.obstacles = self.obstacles;
        config.world.food = self.food;
    }

    /// Extracts the persistable parameters from a configuration.
    #[must_use]
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            width: config.world.width,
            height: config.world.height,
            carnivores: config.world.carnivores,
            herbivores: config.world.herbivores,
            obstacles: config.world.obstacles,
            food: config.world.food,
        }
    }
}

/// Reads a record from the given file.
pub fn load_record(path: impl AsRef<Path>) -> Result<WorldRecord> {
    let text = fs::read_to_string(path)?;
    WorldRecord::parse(&text)
}

/// Writes a record to the given file.
pub fn save_record(path: impl AsRef<Path>, record: &WorldRecord) -> Result<()> {
    fs::write(path, record.to_line())?;
    Ok(())
}

/// Reads the well-known default record from the working directory.
pub fn load_default_record() -> Result<WorldRecord> {
    load_record(DEFAULT_RECORD_FILE)
}

/// Refreshes the well-known default record.
pub fn save_default_record(record: &WorldRecord) -> Result<()> {
    save_record(DEFAULT_RECORD_FILE, record)
}
