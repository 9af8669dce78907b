use std::{fs::File, io::Write, path::Path};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::errors::ConvertError;

use super::types::FrequencyManagerConfig;

/// Name SDR++ loads the frequency manager config from.
pub const DEFAULT_OUTPUT_FILE: &str = "frequency_manager_config.json";

impl FrequencyManagerConfig {
    /// Pretty printed with a 4 space indent.
    pub fn to_json_vec(&self) -> serde_json::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;
        Ok(buffer)
    }

    /// Renders the whole document first, then creates (or truncates) `path` and writes it.
    pub fn to_json_file<P>(&self, path: P) -> Result<(), ConvertError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let write_error = |source: std::io::Error| ConvertError::WriteOutput {
            path: path.display().to_string(),
            source,
        };

        let data = self.to_json_vec().map_err(|e| write_error(e.into()))?;

        let mut file = File::create(path).map_err(write_error)?;
        file.write_all(&data).map_err(write_error)?;
        file.sync_all().map_err(write_error)?;

        Ok(())
    }
}
