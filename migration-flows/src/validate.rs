use std::fmt::Display;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook, Reader, Xls, Xlsx};

use crate::artifact::SpreadsheetFormat;
use crate::error::ValidationError;

/// Check that `path` loads as a workbook of the given format.
///
/// Loading means opening the container and reading the first worksheet;
/// the cell contents are not inspected. Returns the first sheet's row count.
pub fn validate_artifact(path: &Path, format: SpreadsheetFormat) -> Result<usize, ValidationError> {
    match format {
        SpreadsheetFormat::Legacy => first_sheet_height::<Xls<BufReader<File>>>(path),
        SpreadsheetFormat::Modern => first_sheet_height::<Xlsx<BufReader<File>>>(path),
    }
}

fn first_sheet_height<R>(path: &Path) -> Result<usize, ValidationError>
where
    R: Reader<BufReader<File>>,
    R::Error: Display,
{
    let mut workbook =
        open_workbook::<R, _>(path).map_err(|e| ValidationError::Open(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ValidationError::NoWorksheet)?
        .map_err(|e| ValidationError::Sheet(e.to_string()))?;
    Ok(range.height())
}
