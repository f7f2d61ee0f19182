//! Path utilities: expand `~` in user-supplied paths.

use std::path::{MAIN_SEPARATOR, PathBuf};

/// Replace a leading `~` (alone, or followed by a separator) with the home
/// directory. Anything else, including `~user`, is returned as given.
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(rest) = path.strip_prefix('~') else {
        return PathBuf::from(path);
    };
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };

    match rest.chars().next() {
        None => home,
        Some(c) if c == '/' || c == MAIN_SEPARATOR => home.join(&rest[1..]),
        Some(_) => PathBuf::from(path),
    }
}
