//! Workbook loading options.

/// Default suffix inserted before `.xlsx` when a mislabelled `.xls` file is
/// copied for the retry.
pub const DEFAULT_AMEND_SUFFIX: &str = "_amend";

/// Options controlling how workbooks are opened.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Retry a `.xls` file that is not an OLE2 container as `.xlsx`
    pub amend_fallback: bool,

    /// Suffix for the sibling file created by the retry
    pub amend_suffix: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            amend_fallback: true,
            amend_suffix: DEFAULT_AMEND_SUFFIX.to_string(),
        }
    }
}

impl LoadOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the `.xls` -> `.xlsx` retry.
    pub fn with_amend_fallback(mut self, enabled: bool) -> Self {
        self.amend_fallback = enabled;
        self
    }

    /// Set the suffix used for the sibling `.xlsx` file.
    pub fn with_amend_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.amend_suffix = suffix.into();
        self
    }
}
