// lctee-android - Android logcat support for lctee
//
// Threadtime line parsing and the adb subprocess plumbing.

mod adb;
mod parser;
mod provider;

pub use adb::{ADB, check_adb_available, clear_logcat};
pub use parser::ThreadtimeParser;
pub use provider::AndroidLogProvider;
