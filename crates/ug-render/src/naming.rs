use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::error::RenderError;

/// Lowercase hex of the character's UTF-8 bytes.
///
/// Injective over `char`, and only ever `[0-9a-f]`.
///
/// # Example
/// ```
/// use ug_render::naming::utf8_hex;
/// assert_eq!(utf8_hex('A'), "41");
/// assert_eq!(utf8_hex('→'), "e28692");
/// ```
#[must_use]
pub fn utf8_hex(ch: char) -> String {
    let mut buf = [0u8; 4];
    let mut out = String::with_capacity(8);
    for byte in ch.encode_utf8(&mut buf).as_bytes() {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// `<hex>_<theme>.svg` for palette themes, `<hex>.svg` for explicit colors.
#[must_use]
pub fn icon_filename(ch: char, theme_suffix: Option<&str>) -> String {
    match theme_suffix {
        Some(theme) => format!("{}_{theme}.svg", utf8_hex(ch)),
        None => format!("{}.svg", utf8_hex(ch)),
    }
}

/// A category must map to exactly one directory level below the root.
///
/// # Errors
/// Returns `RenderError::InvalidCategory` for empty names, `.`/`..`, or names
/// containing a path separator or NUL.
pub fn check_category(category: &str) -> Result<(), RenderError> {
    let bad = category.is_empty()
        || category == "."
        || category == ".."
        || category.contains(['/', '\\', '\0']);
    if bad {
        return Err(RenderError::InvalidCategory {
            category: category.to_string(),
        });
    }
    Ok(())
}

/// `<root>/<category>/<folder>`.
#[must_use]
pub fn icon_dir(root: &Path, category: &str, folder: &str) -> PathBuf {
    root.join(category).join(folder)
}
