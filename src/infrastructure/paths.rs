//! Path handling for the Zellij plugin sandbox.
//!
//! Zellij mounts the host filesystem under `/host` (the cwd of the last
//! focused terminal, usually the user's home), so user-facing `~` paths have
//! to be rewritten before the plugin can open them.

use std::path::PathBuf;

/// Sandbox mount point of the host directory.
pub const HOST_ROOT: &str = "/host";

/// Directory holding the plugin's trace files.
///
/// Resolves to `~/.local/share/zellij/emotion-quiz` on the host when Zellij
/// was started from the home directory.
///
/// # Examples
///
/// ```
/// use emotion_quiz::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/emotion-quiz"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij").join("emotion-quiz")
}

/// Rewrites a leading `~` to the sandbox host mount.
///
/// # Examples
///
/// ```
/// use emotion_quiz::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/words.toml"), "/host/words.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/words.toml"), "/etc/words.toml");
/// assert_eq!(expand_tilde("~user/words.toml"), "~user/words.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}
