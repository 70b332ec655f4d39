// LinkKeeper platform paths for Windows
// Config: %APPDATA%/LinkKeeper

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for LinkKeeper on Windows.
pub fn get_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Temp"));
    PathBuf::from(appdata).join("LinkKeeper")
}
