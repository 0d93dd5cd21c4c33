//! Mapping untrusted remote strings to path segments

/// Characters that cannot appear in a file or directory name on this platform
#[cfg(windows)]
const INVALID_CHARS: &[char] = &['"', '<', '>', '|', ':', '*', '?', '\\', '/', '\0'];

#[cfg(not(windows))]
const INVALID_CHARS: &[char] = &['/', '\0'];

/// Replacement for every illegal character
pub const REPLACEMENT: char = '_';

fn is_invalid(c: char) -> bool {
    INVALID_CHARS.contains(&c) || (cfg!(windows) && c.is_ascii_control())
}

/// Replace every character that is illegal in a path segment with `_`.
///
/// Everything else passes through untouched, including spaces and unicode.
/// Total and idempotent; an empty input stays empty.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if is_invalid(c) { REPLACEMENT } else { c })
        .collect()
}

/// Whether a sanitized name can be joined onto a directory as a child of it.
///
/// Blank names and the `.`/`..` components would resolve to the directory
/// itself or its parent.
pub fn is_usable_segment(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty() && trimmed != "." && trimmed != ".."
}
