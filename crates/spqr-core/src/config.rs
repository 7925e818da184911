//! Extraction settings.

/// Settings for template archive extraction.
///
/// # Examples
///
/// ```
/// use spqr_core::ExtractionConfig;
///
/// let config = ExtractionConfig::default();
/// assert!(config.preserve_permissions);
///
/// let plain = ExtractionConfig {
///     preserve_permissions: false,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Apply the permission bits stored in each entry (Unix only).
    ///
    /// Setuid, setgid and sticky bits are always dropped, and the owner keeps
    /// read/write access so a later run can truncate the file again.
    pub preserve_permissions: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            preserve_permissions: true,
        }
    }
}

impl ExtractionConfig {
    /// Configuration that ignores stored permission bits.
    #[must_use]
    pub fn without_permissions() -> Self {
        Self {
            preserve_permissions: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preserves_permissions() {
        assert!(ExtractionConfig::default().preserve_permissions);
    }

    #[test]
    fn test_without_permissions() {
        assert!(!ExtractionConfig::without_permissions().preserve_permissions);
    }
}
