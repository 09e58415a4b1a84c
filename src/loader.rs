//! CSV corpus loader.
//!
//! Reads the scraped storyline table and hands clean `CorpusRecord`s to the
//! model. Rows with a missing or blank name, text or id are dropped here so
//! the fit only ever sees usable records.

use std::{fs::File, io::Read, path::Path};

use log::{info, warn};

use crate::config::CorpusConfig;
use crate::error::{RecommendError, Result};
use crate::vectorizer::corpus::CorpusRecord;

/// Load records from the CSV file at `path`.
pub fn load_csv(path: &Path, config: &CorpusConfig) -> Result<Vec<CorpusRecord>> {
    let file = File::open(path)?;
    let records = read_records(file, config)?;
    info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Load records from any reader producing a headed CSV.
pub fn read_records<R: Read>(reader: R, config: &CorpusConfig) -> Result<Vec<CorpusRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let column = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| RecommendError::MissingColumn(name.to_string()))
    };
    let name_col = column(&config.name_column)?;
    let text_col = column(&config.text_column)?;
    let id_col = config.id_column.as_deref().map(column).transpose()?;

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for (row, result) in rdr.records().enumerate() {
        let row_data = result?;
        let field = |idx: usize| row_data.get(idx).map(str::trim).filter(|s| !s.is_empty());

        let (Some(name), Some(text)) = (field(name_col), field(text_col)) else {
            dropped += 1;
            continue;
        };
        let id = match id_col {
            Some(idx) => match field(idx) {
                Some(id) => id.to_string(),
                None => {
                    dropped += 1;
                    continue;
                }
            },
            None => row.to_string(),
        };
        records.push(CorpusRecord::new(id, name, text));
    }

    if dropped > 0 {
        warn!("dropped {} rows with missing fields", dropped);
    }
    Ok(records)
}
