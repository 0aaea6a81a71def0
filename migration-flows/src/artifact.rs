use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Spreadsheet flavour, chosen from the declared content type of a download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetFormat {
    /// BIFF workbook, `.xls`.
    Legacy,
    /// Office Open XML workbook, `.xlsx`.
    Modern,
}

pub const LEGACY_MIME: &str = "application/vnd.ms-excel";

impl SpreadsheetFormat {
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        match content_type {
            Some(ct) if ct.contains(LEGACY_MIME) => SpreadsheetFormat::Legacy,
            // Missing or unrecognised types are assumed to be xlsx.
            _ => SpreadsheetFormat::Modern,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            SpreadsheetFormat::Legacy => ".xls",
            SpreadsheetFormat::Modern => ".xlsx",
        }
    }
}

/// A downloaded spreadsheet written to the output directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub year: u16,
    pub format: SpreadsheetFormat,
    pub path: PathBuf,
}

impl Artifact {
    pub fn file_name(&self) -> String {
        file_name(self.year, self.format)
    }
}

pub fn file_name(year: u16, format: SpreadsheetFormat) -> String {
    format!("migration_flows_{}{}", year, format.extension())
}

pub fn artifact_path(dir: &Path, year: u16, format: SpreadsheetFormat) -> PathBuf {
    dir.join(file_name(year, format))
}

pub fn ensure_output_dir(dir: &Path) -> io::Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Write `bytes` to the artifact path, replacing whatever was there.
pub fn write_artifact(
    dir: &Path,
    year: u16,
    format: SpreadsheetFormat,
    bytes: &[u8],
) -> io::Result<Artifact> {
    let path = artifact_path(dir, year, format);
    fs::write(&path, bytes)?;
    Ok(Artifact { year, format, path })
}
