use anyhow::{Context, Result, bail};
use std::io;
use std::process::Command;

pub const ADB: &str = "adb";

pub fn check_adb_available() -> io::Result<()> {
    // try to execute adb version to check if it's available
    match Command::new(ADB).arg("version").output() {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(io::Error::new(
            io::ErrorKind::NotFound,
            "Error: 'adb' not found in PATH.\n\
                 \n\
                 lctee streams and clears device logs through adb, part of Android SDK Platform-Tools.\n\
                 \n\
                 Installation instructions:\n\
                 - macOS: brew install android-platform-tools\n\
                 - Linux: apt-get install android-tools-adb (Ubuntu/Debian)\n\
                 - Linux: yum install android-tools (CentOS/RHEL)\n\
                 - Windows: Download from https://developer.android.com/studio/releases/platform-tools\n\
                 \n\
                 To read saved logs without a device, use: lctee input <FILES>...",
        )),
        Err(e) => Err(e),
    }
}

/// clear the device log buffers (`adb logcat -c`)
pub fn clear_logcat() -> Result<()> {
    log::debug!("Clearing device log buffers");

    let status = Command::new(ADB)
        .args(["logcat", "-c"])
        .status()
        .context("Failed to run `adb logcat -c`")?;

    if !status.success() {
        bail!("`adb logcat -c` failed ({})", status);
    }

    Ok(())
}
