//! CSV population loader.
//!
//! # CSV format
//!
//! One row per agent, in identity order (row `n` becomes `AgentId(n)`):
//!
//! ```csv
//! age,gender,is_indigenous
//! 34,F,true
//! 41,M,false
//! ```
//!
//! `gender` is `M` or `F`; `is_indigenous` accepts `true`/`false`/`1`/`0`.
//! Every loaded agent starts fully susceptible.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ce_core::{Demographics, Gender};

use crate::{AgentError, AgentResult, AgentStore, AgentStoreBuilder};

#[derive(Deserialize)]
struct PopulationRecord {
    age:           u8,
    gender:        String,
    is_indigenous: String,
}

/// Load an [`AgentStore`] from a CSV file.
pub fn load_population_csv(path: &Path) -> AgentResult<AgentStore> {
    let file = std::fs::File::open(path)?;
    load_population_reader(file)
}

/// Like [`load_population_csv`] but accepts any `Read` source.
pub fn load_population_reader<R: Read>(reader: R) -> AgentResult<AgentStore> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = AgentStoreBuilder::new();

    for (row, result) in csv_reader.deserialize::<PopulationRecord>().enumerate() {
        let record = result.map_err(|e| AgentError::Parse(e.to_string()))?;
        let gender: Gender = record
            .gender
            .parse()
            .map_err(|e| AgentError::Parse(format!("row {row}: {e}")))?;
        let is_indigenous = parse_flag(&record.is_indigenous)
            .map_err(|e| AgentError::Parse(format!("row {row}: {e}")))?;
        builder = builder.agent(Demographics::new(record.age, gender, is_indigenous));
    }

    builder.build()
}

fn parse_flag(s: &str) -> Result<bool, String> {
    match s.trim() {
        "true" | "True" | "TRUE" | "1" => Ok(true),
        "false" | "False" | "FALSE" | "0" => Ok(false),
        other => Err(format!("invalid is_indigenous {other:?}: expected true/false/1/0")),
    }
}
