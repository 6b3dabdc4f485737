//! Output styles for parsed log items.
//!
//! Every printer renders one [`LogItem`] into one line of text, optionally
//! colored by level. The driver writes that line followed by a blank line.
//!
//! - [`DefaultPrinter`]: pidcat-like `tag \tmessage` columns, tag shown once per run of lines
//! - [`LtsvPrinter`]: `time:…\tpid:…\ttid:…\tlevel:…\ttag:…\tmessage:…`
//! - [`JsonPrinter`]: one flat JSON object per line

mod default;
mod json;
mod ltsv;

pub use default::{DefaultPrinter, pad_tag};
pub use json::JsonPrinter;
pub use ltsv::LtsvPrinter;

use crate::provider::LogItem;
use anyhow::Result;
use std::{convert::Infallible, fmt, str::FromStr};

/// trait for rendering log items
///
/// Takes `&mut self` because a printer may carry state from one line to the
/// next (see [`DefaultPrinter`]); use one printer per stream.
pub trait LogPrinter {
    fn format(&mut self, item: LogItem) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// human readable columns, a.k.a. `pidcat`
    #[default]
    Default,
    Ltsv,
    Json,
}

impl OutputFormat {
    /// Resolve a format name. Unknown names fall back to [`OutputFormat::Default`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "ltsv" => Self::Ltsv,
            "json" => Self::Json,
            "pidcat" | "default" => Self::Default,
            other => {
                log::warn!("Unknown output format '{}', using pidcat", other);
                Self::Default
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "pidcat",
            Self::Ltsv => "ltsv",
            Self::Json => "json",
        }
    }

    /// fresh printer for one stream
    pub fn printer(self, color: bool) -> Box<dyn LogPrinter> {
        match self {
            Self::Default => Box::new(DefaultPrinter::new(color)),
            Self::Ltsv => Box::new(LtsvPrinter::new(color)),
            Self::Json => Box::new(JsonPrinter::new(color)),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
