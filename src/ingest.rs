//! Spreadsheet ingestion.
//!
//! Reads a registrar export (.xlsx/.xls/.xlsb/.ods via calamine, or .csv),
//! finds the header row and turns every row below it into a [`CourseRow`].

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use coursecal_core::{CourseRow, InputConfig};
use tracing::{debug, info};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Workbook,
}

impl SourceFormat {
    /// Pick the reader by file extension; anything that isn't .csv goes to calamine.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => SourceFormat::Csv,
            _ => SourceFormat::Workbook,
        }
    }
}

/// Read the file at `path` and return its course rows.
pub async fn read_source(path: &Path, input: &InputConfig) -> Result<Vec<CourseRow>> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Could not read {}", path.display()))?;

    let rows = read_rows(bytes, SourceFormat::from_path(path), input)
        .with_context(|| format!("Could not load course rows from {}", path.display()))?;

    info!("read {} course rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Parse raw file bytes into course rows.
pub fn read_rows(bytes: Vec<u8>, format: SourceFormat, input: &InputConfig) -> Result<Vec<CourseRow>> {
    let grid = match format {
        SourceFormat::Csv => read_csv_grid(&bytes)?,
        SourceFormat::Workbook => read_workbook_grid(bytes, input.sheet.as_deref())?,
    };

    rows_from_grid(&grid, input.header_row)
}

fn read_csv_grid(bytes: &[u8]) -> Result<Vec<Vec<String>>> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(bytes);

    reader
        .records()
        .map(|result| {
            result
                .map(|record| record.iter().map(str::to_string).collect())
                .context("Failed to read CSV record")
        })
        .collect()
}

fn read_workbook_grid(bytes: Vec<u8>, sheet: Option<&str>) -> Result<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| anyhow!("Failed to open workbook: {e}"))?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .context("Workbook has no sheets")?,
    };
    debug!("reading sheet '{sheet_name}'");

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| anyhow!("Failed to read sheet '{sheet_name}': {e}"))?;

    Ok(grid_from_range(&range))
}

/// Lay a calamine range out on absolute sheet coordinates.
///
/// calamine trims leading empty rows and columns; padding them back keeps
/// the configured header row index equal to the sheet's own row numbering.
fn grid_from_range(range: &Range<Data>) -> Vec<Vec<String>> {
    let (row_offset, col_offset) = range
        .start()
        .map(|(row, col)| (row as usize, col as usize))
        .unwrap_or((0, 0));

    let mut grid = vec![Vec::new(); row_offset];
    for row in range.rows() {
        let mut cells = vec![String::new(); col_offset];
        cells.extend(row.iter().map(cell_to_string));
        grid.push(cells);
    }
    grid
}

/// Stringify a cell the way it reads in the sheet's raw values.
///
/// Date-typed cells become their serial number so date columns decode the
/// same whether or not the sheet applied a date format.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        other => other.to_string(),
    }
}

/// Map every row below `header_row` onto the header names.
///
/// Blank header cells are ignored and fully blank rows are skipped.
pub fn rows_from_grid(grid: &[Vec<String>], header_row: usize) -> Result<Vec<CourseRow>> {
    let Some(headers) = grid.get(header_row) else {
        bail!(
            "Header row {} not found: the sheet has {} rows",
            header_row,
            grid.len()
        );
    };

    let columns: Vec<(usize, &str)> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| (i, header.trim()))
        .filter(|(_, header)| !header.is_empty())
        .collect();

    if columns.is_empty() {
        bail!("Header row {header_row} is empty");
    }

    let rows = grid[header_row + 1..]
        .iter()
        .map(|cells| {
            columns
                .iter()
                .map(|&(i, header)| (header, cells.get(i).map(String::as_str).unwrap_or("")))
                .collect::<CourseRow>()
        })
        .filter(|row| !row.is_blank())
        .collect();

    Ok(rows)
}
