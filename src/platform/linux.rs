// LinkKeeper platform paths for Linux
// Config: ~/.config/linkkeeper

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for LinkKeeper on Linux.
/// Uses `$XDG_CONFIG_HOME/linkkeeper` if set, otherwise `~/.config/linkkeeper`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("linkkeeper")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("linkkeeper")
    }
}
