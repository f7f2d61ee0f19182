use crate::ui::messages::warning;
use std::io::{self, Write};
use std::path::Path;

/// Ask a yes/no confirmation from the user; anything but `y`/`yes`
/// (including a closed stdin) is a no.
pub fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// True when `path` may be written: it does not exist yet, `force` is set,
/// or the user agrees to overwrite it.
pub fn confirm_overwrite(path: &Path, force: bool) -> bool {
    !path.exists()
        || force
        || ask_confirmation(&format!(
            "The file '{}' already exists. Overwrite it?",
            path.display()
        ))
}
