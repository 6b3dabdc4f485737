use crate::adb::ADB;
use anyhow::{Context, Result, anyhow};
use lctee_framework::provider::{LogProvider, ReaderProvider};
use std::io::BufReader;
use std::process::{Child, ChildStdout, Command, Stdio};

/// log provider for Android device logs (adb logcat)
///
/// Runs `adb logcat -v threadtime` and yields its stdout line by line.
/// The stream ends when the device disconnects or adb exits.
pub struct AndroidLogProvider {
    program: String,
    args: Vec<String>,
    child: Option<Child>,
    stdout: Option<ReaderProvider<BufReader<ChildStdout>>>,
}

impl AndroidLogProvider {
    pub fn new() -> Self {
        Self::with_command(ADB, ["logcat", "-v", "threadtime"])
    }

    /// run another command in place of adb
    pub fn with_command<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            child: None,
            stdout: None,
        }
    }

    /// append extra arguments, e.g. a logcat filter like `*:W`
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for AndroidLogProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LogProvider for AndroidLogProvider {
    fn start(&mut self) -> Result<()> {
        log::debug!("AndroidLogProvider: Starting `{}`", self.command_line());

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdout(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to spawn `{}`", self.command_line()))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| anyhow!("`{}` has no stdout pipe", self.command_line()))?;

        self.stdout = Some(ReaderProvider::new(
            self.command_line(),
            BufReader::new(stdout),
        ));
        self.child = Some(child);

        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        log::debug!("AndroidLogProvider: Stopping");

        // close our end of the pipe first
        self.stdout = None;

        if let Some(mut child) = self.child.take() {
            // adb logcat runs until killed; a finished child must not be killed
            if child.try_wait()?.is_none() {
                if let Err(e) = child.kill() {
                    log::debug!("AndroidLogProvider: Failed to kill `{}`: {}", self.program, e);
                }
            }
            let status = child.wait()?;
            log::debug!("AndroidLogProvider: `{}` exited ({})", self.program, status);
        }

        Ok(())
    }

    fn next_line(&mut self) -> Option<String> {
        self.stdout.as_mut()?.next_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_line() {
        let provider = AndroidLogProvider::new();
        assert_eq!(provider.command_line(), "adb logcat -v threadtime");
    }

    #[test]
    fn test_extra_args() {
        let provider = AndroidLogProvider::new().with_args(["*:W"]);
        assert_eq!(provider.command_line(), "adb logcat -v threadtime *:W");
    }

    #[test]
    fn test_next_line_before_start() {
        let mut provider = AndroidLogProvider::new();
        assert_eq!(provider.next_line(), None);
        provider.stop().unwrap();
    }

    #[test]
    fn test_missing_program_fails_to_start() {
        let mut provider =
            AndroidLogProvider::with_command("lctee-no-such-program", Vec::<String>::new());
        let err = provider.start().unwrap_err();
        assert!(err.to_string().contains("Failed to spawn"));
    }

    #[cfg(unix)]
    #[test]
    fn test_streams_child_stdout() {
        let mut provider = AndroidLogProvider::with_command("echo", ["one line"]);
        provider.start().unwrap();

        assert_eq!(provider.next_line(), Some("one line".to_string()));
        assert_eq!(provider.next_line(), None);
        provider.stop().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_stop_kills_running_child() {
        let mut provider = AndroidLogProvider::with_command("sleep", ["30"]);
        provider.start().unwrap();

        let started = std::time::Instant::now();
        provider.stop().unwrap();

        assert!(started.elapsed() < std::time::Duration::from_secs(10));
        assert!(provider.child.is_none());
        assert_eq!(provider.next_line(), None);
    }
}
