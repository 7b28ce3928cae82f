use serde::{Deserialize, Serialize};

use super::error::DaybookError;

/// Configuration for daybook extraction and output.
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaybookConfig {
    /// Voucher type to export, compared against the lowercased
    /// `VOUCHERTYPENAME`. Default "receipt".
    pub voucher_type: String,
    /// Worksheet name for spreadsheet output (max 31 chars).
    pub sheet_name: String,
}

impl Default for DaybookConfig {
    fn default() -> Self {
        Self {
            voucher_type: "receipt".into(),
            sheet_name: "Sheet1".into(),
        }
    }
}

impl DaybookConfig {
    /// Check the configuration before a run.
    pub fn validate(&self) -> Result<(), DaybookError> {
        if self.voucher_type.trim().is_empty() {
            return Err(DaybookError::Config("voucher type must not be empty".into()));
        }
        if self.voucher_type != self.voucher_type.to_lowercase() {
            return Err(DaybookError::Config(format!(
                "voucher type '{}' must be lowercase",
                self.voucher_type
            )));
        }
        let name = &self.sheet_name;
        if name.is_empty() || name.chars().count() > 31 {
            return Err(DaybookError::Config(format!(
                "sheet name '{name}' must be 1-31 characters"
            )));
        }
        if name.contains(['[', ']', ':', '*', '?', '/', '\\']) {
            return Err(DaybookError::Config(format!(
                "sheet name '{name}' contains a character not allowed by Excel"
            )));
        }
        if name.starts_with('\'') || name.ends_with('\'') {
            return Err(DaybookError::Config(format!(
                "sheet name '{name}' must not start or end with an apostrophe"
            )));
        }
        Ok(())
    }
}

/// Builder for [`DaybookConfig`].
///
/// # Example
///
/// ```
/// use tally_daybook::core::DaybookConfigBuilder;
///
/// let config = DaybookConfigBuilder::new()
///     .voucher_type("Receipt")
///     .sheet_name("Daybook")
///     .build()
///     .unwrap();
/// assert_eq!(config.voucher_type, "receipt");
/// ```
#[derive(Debug, Default)]
pub struct DaybookConfigBuilder {
    config: DaybookConfig,
}

impl DaybookConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the voucher type to export. Stored lowercased.
    pub fn voucher_type(mut self, name: impl Into<String>) -> Self {
        self.config.voucher_type = name.into().to_lowercase();
        self
    }

    /// Set the worksheet name.
    pub fn sheet_name(mut self, name: impl Into<String>) -> Self {
        self.config.sheet_name = name.into();
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<DaybookConfig, DaybookError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
