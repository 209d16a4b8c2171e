//! File names for downloaded images.

use crate::config::ConflictPolicy;
use crate::core::file_name;
use std::path::{Path, PathBuf};
use url::Url;

/// Name used when a URL has no usable last path segment.
pub const FALLBACK_NAME: &str = "image";

/// Highest numeric suffix tried by [`ConflictPolicy::Rename`].
const MAX_RENAME_SUFFIX: u32 = 10_000;

/// Derives a safe file name from the last path segment of a URL.
///
/// The segment is percent-decoded; path separators and control characters
/// are replaced with `_`. Empty, `.` and `..` names become `"image"`.
///
/// # Examples
///
/// ```
/// use blogger_linked_images::sink::file_name_for;
/// use url::Url;
///
/// let url = Url::parse("http://1.bp.blogspot.com/-x/s1600/My%20Photo.jpg").unwrap();
/// assert_eq!(file_name_for(&url), "My Photo.jpg");
/// ```
#[must_use]
pub fn file_name_for(url: &Url) -> String {
    let raw = file_name(url).unwrap_or_default();
    let decoded = urlencoding::decode(raw).map_or_else(|_| raw.to_string(), |d| d.into_owned());
    sanitize(&decoded)
}

/// Replaces characters that cannot appear in a single path component.
#[must_use]
pub fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    let trimmed = cleaned.trim();

    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        FALLBACK_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Returns `name` with `-{n}` inserted before the extension.
///
/// `photo.jpg` becomes `photo-2.jpg`; `README` becomes `README-2`.
#[must_use]
pub fn numbered(name: &str, n: u32) -> String {
    let path = Path::new(name);
    let stem = path
        .file_stem()
        .map_or_else(|| name.to_string(), |s| s.to_string_lossy().into_owned());
    match path.extension() {
        Some(ext) => format!("{stem}-{n}.{}", ext.to_string_lossy()),
        None => format!("{stem}-{n}"),
    }
}

/// Picks the path to write `name` to inside `dir`.
///
/// `taken` reports names that must not be used regardless of policy (for
/// example, names already written earlier in the run). Returns `None` when
/// the policy says to leave an existing file alone.
pub fn target_path<T>(dir: &Path, name: &str, policy: ConflictPolicy, taken: T) -> Option<PathBuf>
where
    T: Fn(&str) -> bool,
{
    let free = |candidate: &str| !taken(candidate) && !dir.join(candidate).exists();

    if taken(name) {
        return next_free(dir, name, &free);
    }

    let path = dir.join(name);
    if !path.exists() {
        return Some(path);
    }

    match policy {
        ConflictPolicy::Overwrite => Some(path),
        ConflictPolicy::Skip => None,
        ConflictPolicy::Rename => next_free(dir, name, &free),
    }
}

fn next_free(dir: &Path, name: &str, free: &dyn Fn(&str) -> bool) -> Option<PathBuf> {
    (1..=MAX_RENAME_SUFFIX)
        .map(|n| numbered(name, n))
        .find(|candidate| free(candidate))
        .map(|candidate| dir.join(candidate))
}
