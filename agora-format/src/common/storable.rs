//! Storage normalization shared by every dialect's `filter`

use crate::error::FormattingError;

/// Normalize raw markup for storage.
///
/// Line endings are folded to `\n`. Content carrying any other C0 control
/// character is rejected: such bytes survive no legitimate editor and the
/// renderers downstream assume they are absent.
pub fn normalize_storable(content: &str) -> Result<String, FormattingError> {
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");

    if let Some(bad) = normalized
        .chars()
        .find(|c| c.is_control() && *c != '\n' && *c != '\t')
    {
        return Err(FormattingError::Malformed(format!(
            "content contains control character U+{:04X}",
            bad as u32
        )));
    }

    Ok(normalized)
}
