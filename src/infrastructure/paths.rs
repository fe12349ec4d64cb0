//! Paths inside the Zellij plugin sandbox, where the host's home directory
//! is mounted at `/host`.

use std::path::PathBuf;

/// Mount point of the host filesystem inside the sandbox.
pub const HOST_ROOT: &str = "/host";

/// Directory for plugin-owned files (trace output).
///
/// ```
/// use artscope::infrastructure::data_dir;
///
/// assert_eq!(data_dir().to_str(), Some("/host/.local/share/zellij/artscope"));
/// ```
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij/artscope")
}

/// Maps `~` and `~/...` onto the sandbox mount. Other paths pass through.
///
/// ```
/// use artscope::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dusk.toml"), "/host/themes/dusk.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/artscope.toml"), "/etc/artscope.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path == "~" {
        HOST_ROOT.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{HOST_ROOT}/{rest}")
    } else {
        path.to_string()
    }
}
