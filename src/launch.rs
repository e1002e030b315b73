//! Opens the marketing site in the host's default browser.
//!
//! Fire and forget: the spawned opener is never waited on and nothing is
//! consumed from it. Failure to spawn is logged and absorbed.
use std::io::Result as IoResult;
use std::process::Command;

use log::{info, warn};

use crate::content::MARKETING_URL;

/// Launches the platform opener on the marketing URL.
pub fn open_marketing_site()
{
    match spawn_opener(MARKETING_URL)
    {
        Ok(()) => info!("Opened {MARKETING_URL} in the default browser"),
        Err(err) => warn!("Could not open {MARKETING_URL}: {err}"),
    }
}

/// Spawns the platform-specific URL opener without waiting for it.
fn spawn_opener(url: &str) -> IoResult<()>
{
    #[cfg(target_os = "macos")]
    let mut command = Command::new("open");

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut shell = Command::new("cmd");
        // `start` needs an empty title argument before the URL.
        shell.args(["/C", "start", ""]);
        shell
    };

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = Command::new("xdg-open");

    command.arg(url).spawn().map(drop)
}
