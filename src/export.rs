//! 解析結果のJSON入出力

use crate::error::Result;
use retina_common::ClassificationResult;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub fn export_json(results: &[ClassificationResult], output: &Path) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let writer = BufWriter::new(File::create(output)?);
    serde_json::to_writer_pretty(writer, results)?;
    Ok(())
}

pub fn load_json(input: &Path) -> Result<Vec<ClassificationResult>> {
    let reader = BufReader::new(File::open(input)?);
    Ok(serde_json::from_reader(reader)?)
}
