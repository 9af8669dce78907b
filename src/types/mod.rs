use std::fmt;

use serde::{Deserialize, Serialize};

/// Frequencies and bandwidths are whole Hz.
pub type Hertz = u64;

/// Demodulation modes understood by the SDR++ frequency manager.
/// The discriminant is the code written to the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Mode {
    Nfm = 0,
    Wfm = 1,
    Am = 2,
    Dsb = 3,
    Usb = 4,
    Cw = 5,
    Lsb = 6,
    Raw = 7,
}

impl Mode {
    pub const ALL: [Mode; 8] = [
        Mode::Nfm,
        Mode::Wfm,
        Mode::Am,
        Mode::Dsb,
        Mode::Usb,
        Mode::Cw,
        Mode::Lsb,
        Mode::Raw,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Nfm => "NFM",
            Mode::Wfm => "WFM",
            Mode::Am => "AM",
            Mode::Dsb => "DSB",
            Mode::Usb => "USB",
            Mode::Cw => "CW",
            Mode::Lsb => "LSB",
            Mode::Raw => "RAW",
        }
    }

    /// Case-insensitive, surrounding whitespace ignored.
    pub fn from_label(s: &str) -> Option<Mode> {
        let s = s.trim();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(s))
    }
}

impl From<Mode> for u8 {
    fn from(mode: Mode) -> u8 {
        mode as u8
    }
}

impl TryFrom<u8> for Mode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Mode::ALL
            .into_iter()
            .find(|mode| *mode as u8 == value)
            .ok_or_else(|| format!("unknown mode code: {}", value))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyUnit {
    Hz,
    KHz,
    MHz,
    GHz,
}

impl FrequencyUnit {
    pub const ALL: [FrequencyUnit; 4] = [
        FrequencyUnit::Hz,
        FrequencyUnit::KHz,
        FrequencyUnit::MHz,
        FrequencyUnit::GHz,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FrequencyUnit::Hz => "Hz",
            FrequencyUnit::KHz => "kHz",
            FrequencyUnit::MHz => "MHz",
            FrequencyUnit::GHz => "GHz",
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            FrequencyUnit::Hz => 1.0,
            FrequencyUnit::KHz => 1_000.0,
            FrequencyUnit::MHz => 1_000_000.0,
            FrequencyUnit::GHz => 1_000_000_000.0,
        }
    }

    /// Case-insensitive, surrounding whitespace ignored.
    pub fn from_label(s: &str) -> Option<FrequencyUnit> {
        let s = s.trim();
        FrequencyUnit::ALL
            .into_iter()
            .find(|unit| unit.label().eq_ignore_ascii_case(s))
    }
}

/// The five columns read from each data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Frequency,
    FrequencyUnits,
    Bandwidth,
    Mode,
}

impl Column {
    /// Zero based column index inside the worksheet.
    pub fn index(self) -> u32 {
        match self {
            Column::Name => 0,
            Column::Frequency => 1,
            Column::FrequencyUnits => 2,
            Column::Bandwidth => 3,
            Column::Mode => 4,
        }
    }

    pub fn letter(self) -> char {
        (b'A' + self.index() as u8) as char
    }

    pub fn title(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Frequency => "Frequency",
            Column::FrequencyUnits => "Frequency Units",
            Column::Bandwidth => "Bandwidth",
            Column::Mode => "Mode",
        }
    }
}

#[cfg(test)]
mod types_tests {
    use super::*;

    fn code(s: &str) -> Option<u8> {
        Mode::from_label(s).map(u8::from)
    }

    fn multiplier(s: &str) -> Option<f64> {
        FrequencyUnit::from_label(s).map(FrequencyUnit::multiplier)
    }

    #[test]
    fn mode_codes_follow_label_order() {
        let labels = ["NFM", "WFM", "AM", "DSB", "USB", "CW", "LSB", "RAW"];
        for (expected, label) in labels.iter().enumerate() {
            assert_eq!(code(label), Some(expected as u8));
            assert_eq!(code(&label.to_lowercase()), Some(expected as u8));
            assert_eq!(code(&format!("  {}\t", label)), Some(expected as u8));
        }
    }

    #[test]
    fn unknown_mode_is_invalid() {
        for s in ["", "FM", "N FM", "nfm2", "SSB"] {
            assert_eq!(code(s), None, "{:?}", s);
        }
    }

    #[test]
    fn unit_multipliers() {
        assert_eq!(multiplier("Hz"), Some(1.0));
        assert_eq!(multiplier(" khz "), Some(1e3));
        assert_eq!(multiplier("MHZ"), Some(1e6));
        assert_eq!(multiplier("gHz\n"), Some(1e9));
    }

    #[test]
    fn unknown_unit_is_invalid() {
        for s in ["", "THz", "mhz.", "M Hz", "1"] {
            assert_eq!(multiplier(s), None, "{:?}", s);
        }
    }

    #[test]
    fn mode_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Mode::Usb).unwrap(), "4");
        let mode: Mode = serde_json::from_str("6").unwrap();
        assert_eq!(mode, Mode::Lsb);
        assert!(serde_json::from_str::<Mode>("8").is_err());
    }

    #[test]
    fn mode_displays_label() {
        let labels: Vec<String> = Mode::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["NFM", "WFM", "AM", "DSB", "USB", "CW", "LSB", "RAW"]);
    }

    #[test]
    fn column_letters() {
        let letters: String = [
            Column::Name,
            Column::Frequency,
            Column::FrequencyUnits,
            Column::Bandwidth,
            Column::Mode,
        ]
        .iter()
        .map(|c| c.letter())
        .collect();
        assert_eq!(letters, "ABCDE");
    }
}
