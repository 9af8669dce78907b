use thiserror::Error;

use crate::types::Column;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("You must specify the spreadsheet to convert as a command line parameter.")]
    MissingArgument,
    #[error(
        "You must specify a spreadsheet to convert on the command line: {0}.\n\
         Supported file types are: 'xlsx', 'xlsm', 'xlsb', 'xls', 'xla' and 'ods'."
    )]
    UnsupportedExtension(String),
    #[error("Could not find or open the specified input spreadsheet: {path}.\n{source}")]
    OpenWorkbook {
        path: String,
        source: calamine::Error,
    },
    #[error("Could not read Worksheet: {sheet}.\n{source}")]
    ReadWorksheet {
        sheet: String,
        source: calamine::Error,
    },
    #[error(
        "The 'ShowOnWaterfall' parameter on sheet: {0}.\n\
         Was not in the correct form. The correct form is: 'ShowOnWaterfall=True' or 'ShowOnWaterfall=False'."
    )]
    WaterfallFormat(String),
    #[error("Could not find the header 'Name' on Worksheet: {0}.")]
    MissingHeader(String),
    #[error("'{}' error in Column: {}, Row: {row} on Worksheet: {sheet}.", .column.title(), .column.letter())]
    UnreadableCell {
        column: Column,
        row: u32,
        sheet: String,
    },
    #[error("Found duplicate Name(s): {names:?} on Worksheet: {sheet}.\nAll names must be unique.")]
    DuplicateNames { names: Vec<String>, sheet: String },
    #[error("The Bandwidth for: {name}, in Worksheet: {sheet} is invalid.")]
    InvalidBandwidth { name: String, sheet: String },
    #[error(
        "The Frequency Units: {value} for Name: {name} on Worksheet: {sheet} is invalid.\n\
         Valid Frequency Units are: 'Hz', 'kHz', 'MHz' and 'GHz'."
    )]
    InvalidFrequencyUnits {
        value: String,
        name: String,
        sheet: String,
    },
    #[error("The Frequency: {value} for Name: {name}, in Worksheet: {sheet} is invalid.")]
    InvalidFrequency {
        value: String,
        name: String,
        sheet: String,
    },
    #[error(
        "The Mode: {value} for Name: {name}, in Worksheet: {sheet} is invalid.\n\
         Valid Modes are: 'NFM', 'WFM', 'AM', 'DSB', 'USB', 'CW', 'LSB' and 'RAW'."
    )]
    InvalidMode {
        value: String,
        name: String,
        sheet: String,
    },
    #[error("Could not Open or Write to the file: \"{path}\".\n{source}")]
    WriteOutput {
        path: String,
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Process exit code reported for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::MissingArgument => -1,
            ConvertError::UnsupportedExtension(_) => -2,
            ConvertError::OpenWorkbook { .. } | ConvertError::ReadWorksheet { .. } => -3,
            ConvertError::WaterfallFormat(_) => -4,
            ConvertError::MissingHeader(_) => -5,
            ConvertError::UnreadableCell { column, .. } => match column {
                Column::Name => -6,
                Column::Frequency => -7,
                Column::FrequencyUnits => -8,
                Column::Bandwidth => -9,
                Column::Mode => -10,
            },
            ConvertError::DuplicateNames { .. } => -11,
            ConvertError::InvalidBandwidth { .. } => -12,
            ConvertError::InvalidFrequencyUnits { .. } => -13,
            ConvertError::InvalidFrequency { .. } => -14,
            ConvertError::InvalidMode { .. } => -15,
            ConvertError::WriteOutput { .. } => -16,
        }
    }
}
