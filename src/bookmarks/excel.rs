use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use indexmap::IndexMap;
use log::{debug, info};

use crate::errors::ConvertError;
use crate::types::{Column, FrequencyUnit, Hertz, Mode};

use super::types::*;

/// File extensions `open_workbook_auto` knows how to read.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["xlsx", "xlsm", "xlsb", "xls", "xla", "ods"];

static EMPTY: Data = Data::Empty;

pub fn check_extension<P>(path: P) -> Result<(), ConvertError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false);

    if supported {
        Ok(())
    } else {
        Err(ConvertError::UnsupportedExtension(path.display().to_string()))
    }
}

/// Cell at a 1 based `row` and 0 based `column`; missing cells read as empty.
fn cell(range: &Range<Data>, row: u32, column: u32) -> &Data {
    match row.checked_sub(1) {
        Some(r) => range.get_value((r, column)).unwrap_or(&EMPTY),
        None => &EMPTY,
    }
}

/// 1 based index of the last populated row, `None` for an empty worksheet.
fn last_row(range: &Range<Data>) -> Option<u32> {
    range.end().map(|(row, _)| row + 1)
}

fn describe(value: &Data) -> String {
    match value {
        Data::Empty => "(empty)".to_string(),
        other => other.to_string(),
    }
}

/// Reads the optional `ShowOnWaterfall=True|False` directive from A1.
pub fn read_waterfall_directive(sheet: &str, range: &Range<Data>) -> Result<bool, ConvertError> {
    let directive = cell(range, 1, 0).to_string().trim().to_uppercase();
    if !directive.contains("WATERFALL") {
        return Ok(false);
    }

    match directive.split('=').nth(1) {
        Some(value) => Ok(value.contains("TRUE")),
        None => Err(ConvertError::WaterfallFormat(sheet.to_string())),
    }
}

/// Scans column A, top down, for the "Name" header.
/// The header has to sit above `last_row` so at least one data row follows it.
pub fn find_header_row(range: &Range<Data>, last_row: u32) -> Option<u32> {
    (1..last_row).find(|&row| match cell(range, row, 0) {
        Data::String(s) => s.trim().to_uppercase().contains("NAME"),
        _ => false,
    })
}

/// Columns A-E of one data row, before validation.
#[derive(Debug)]
pub struct RawRow<'a> {
    pub row: u32,
    pub name: String,
    pub frequency: &'a Data,
    pub frequency_units: &'a Data,
    pub bandwidth: &'a Data,
    pub mode: &'a Data,
}

fn read_cell<'a>(
    range: &'a Range<Data>,
    sheet: &str,
    row: u32,
    column: Column,
) -> Result<&'a Data, ConvertError> {
    let value = cell(range, row, column.index());
    let readable = match (column, value) {
        (_, Data::Error(_)) => false,
        (Column::Name, Data::String(s)) => !s.trim().is_empty(),
        (Column::Name, _) => false,
        _ => true,
    };

    if readable {
        Ok(value)
    } else {
        Err(ConvertError::UnreadableCell {
            column,
            row,
            sheet: sheet.to_string(),
        })
    }
}

/// Reads every row from `first_row` to `last_row` inclusive.
pub fn extract_rows<'a>(
    sheet: &str,
    range: &'a Range<Data>,
    first_row: u32,
    last_row: u32,
) -> Result<Vec<RawRow<'a>>, ConvertError> {
    (first_row..=last_row)
        .map(|row| {
            let name = read_cell(range, sheet, row, Column::Name)?
                .to_string()
                .trim()
                .to_string();
            Ok(RawRow {
                row,
                name,
                frequency: read_cell(range, sheet, row, Column::Frequency)?,
                frequency_units: read_cell(range, sheet, row, Column::FrequencyUnits)?,
                bandwidth: read_cell(range, sheet, row, Column::Bandwidth)?,
                mode: read_cell(range, sheet, row, Column::Mode)?,
            })
        })
        .collect()
}

/// Names used more than once, each reported once in first seen order.
pub fn find_duplicates(rows: &[RawRow]) -> Vec<String> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for row in rows {
        *counts.entry(row.name.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Whole Hz, truncated toward zero. Negative, non finite and out of range values are rejected.
fn truncate_to_hertz(value: f64) -> Option<Hertz> {
    let value = value.trunc();
    if value.is_finite() && value >= 0.0 && value < Hertz::MAX as f64 {
        Some(value as Hertz)
    } else {
        None
    }
}

/// Frequency has to be a number cell; text is never converted.
fn parse_frequency(value: &Data) -> Option<f64> {
    match value {
        Data::Int(i) => Some(*i as f64),
        Data::Float(f) => Some(*f),
        _ => None,
    }
}

fn parse_bandwidth(value: &Data) -> Option<Hertz> {
    match value {
        Data::Int(i) => Hertz::try_from(*i).ok(),
        Data::Float(f) => truncate_to_hertz(*f),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_label<T>(value: &Data, from_label: fn(&str) -> Option<T>) -> Option<T> {
    match value {
        Data::String(s) => from_label(s),
        _ => None,
    }
}

/// Validates one row and converts it to a bookmark.
pub fn normalize_row(sheet: &str, raw: &RawRow) -> Result<Bookmark, ConvertError> {
    let bandwidth =
        parse_bandwidth(raw.bandwidth).ok_or_else(|| ConvertError::InvalidBandwidth {
            name: raw.name.clone(),
            sheet: sheet.to_string(),
        })?;

    let unit = parse_label(raw.frequency_units, FrequencyUnit::from_label).ok_or_else(|| {
        ConvertError::InvalidFrequencyUnits {
            value: describe(raw.frequency_units),
            name: raw.name.clone(),
            sheet: sheet.to_string(),
        }
    })?;

    let frequency = parse_frequency(raw.frequency)
        .and_then(|value| truncate_to_hertz(value * unit.multiplier()))
        .ok_or_else(|| ConvertError::InvalidFrequency {
            value: describe(raw.frequency),
            name: raw.name.clone(),
            sheet: sheet.to_string(),
        })?;

    let mode =
        parse_label(raw.mode, Mode::from_label).ok_or_else(|| ConvertError::InvalidMode {
            value: describe(raw.mode),
            name: raw.name.clone(),
            sheet: sheet.to_string(),
        })?;

    Ok(Bookmark {
        bandwidth,
        frequency,
        mode,
    })
}

/// Turns one worksheet into a bookmark list.
pub fn read_worksheet(sheet: &str, range: &Range<Data>) -> Result<BookmarkList, ConvertError> {
    let show_on_waterfall = read_waterfall_directive(sheet, range)?;
    debug!("{}: showOnWaterfall={}", sheet, show_on_waterfall);

    let end_row = last_row(range).ok_or_else(|| ConvertError::MissingHeader(sheet.to_string()))?;
    let header_row = find_header_row(range, end_row)
        .ok_or_else(|| ConvertError::MissingHeader(sheet.to_string()))?;
    debug!("{}: header on row {}, last row {}", sheet, header_row, end_row);

    let rows = extract_rows(sheet, range, header_row + 1, end_row)?;

    let duplicates = find_duplicates(&rows);
    if !duplicates.is_empty() {
        return Err(ConvertError::DuplicateNames {
            names: duplicates,
            sheet: sheet.to_string(),
        });
    }

    let mut bookmarks = IndexMap::with_capacity(rows.len());
    for raw in &rows {
        let bookmark = normalize_row(sheet, raw)?;
        debug!(
            "{} row {}: {} {} Hz, {} Hz wide, {}",
            sheet, raw.row, raw.name, bookmark.frequency, bookmark.bandwidth, bookmark.mode
        );
        bookmarks.insert(raw.name.clone(), bookmark);
    }

    Ok(BookmarkList {
        bookmarks,
        show_on_waterfall,
    })
}

impl FrequencyManagerConfig {
    pub fn from_excel_file<P>(path: P) -> Result<FrequencyManagerConfig, ConvertError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let mut wb = open_workbook_auto(path).map_err(|source| ConvertError::OpenWorkbook {
            path: path.display().to_string(),
            source,
        })?;

        let sheet_names = wb.sheet_names().to_vec();
        info!("{} worksheet(s): {:?}", sheet_names.len(), sheet_names);

        sheet_names
            .iter()
            .try_fold(FrequencyManagerConfig::default(), |config, sheet| {
                info!("Processing Worksheet: {}", sheet);
                let range =
                    wb.worksheet_range(sheet)
                        .map_err(|source| ConvertError::ReadWorksheet {
                            sheet: sheet.clone(),
                            source,
                        })?;
                config.with_worksheet(sheet, &range)
            })
    }

    /// Reads `range` and returns the config with its list added.
    pub fn with_worksheet(
        mut self,
        sheet: &str,
        range: &Range<Data>,
    ) -> Result<FrequencyManagerConfig, ConvertError> {
        let list = read_worksheet(sheet, range)?;
        info!("{}: {} bookmark(s)", sheet.trim(), list.bookmarks.len());
        self.add_list(sheet, list);
        Ok(self)
    }
}
