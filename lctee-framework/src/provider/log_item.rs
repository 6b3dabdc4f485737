use serde::{Deserialize, Serialize};
use std::fmt;

/// single-letter logcat priority
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Level {
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
    /// any other code (`F`, `A`, a blank...), kept as it appeared
    Unknown(String),
}

impl Level {
    pub fn from_code(code: &str) -> Self {
        match code {
            "V" => Self::Verbose,
            "D" => Self::Debug,
            "I" => Self::Info,
            "W" => Self::Warn,
            "E" => Self::Error,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Verbose => "V",
            Self::Debug => "D",
            Self::Info => "I",
            Self::Warn => "W",
            Self::Error => "E",
            Self::Unknown(code) => code,
        }
    }
}

impl From<String> for Level {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.as_str().to_string()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// represents a single parsed logcat line
///
/// Field order is the serialization order used by the JSON printer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogItem {
    pub time: String,
    pub pid: String,
    pub tid: String,
    pub level: Level,
    pub tag: String,
    pub message: String,
}

impl LogItem {
    pub fn new(
        time: impl Into<String>,
        pid: impl Into<String>,
        tid: impl Into<String>,
        level: Level,
        tag: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            pid: pid.into(),
            tid: tid.into(),
            level,
            tag: tag.into(),
            message: message.into(),
        }
    }

    /// strip the column padding out of pid, tid and tag
    pub fn compact(mut self) -> Self {
        self.pid = remove_space(&self.pid);
        self.tid = remove_space(&self.tid);
        self.tag = remove_space(&self.tag);
        self
    }
}

pub fn remove_space(s: &str) -> String {
    s.replace(' ', "")
}

/// trait for turning a raw line into a [`LogItem`]
pub trait LogParser: Send + Sync {
    /// parse one line (without its line terminator)
    ///
    /// returning `None` makes the driver echo the line as `error: <line>`
    fn parse(&self, raw_line: &str) -> Option<LogItem>;
}
