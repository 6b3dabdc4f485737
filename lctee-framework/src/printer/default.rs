use super::LogPrinter;
use crate::{provider::LogItem, theme};
use anyhow::Result;

const TAG_WIDTH: usize = 23;
// over-long tags keep one extra column, eating the separator space
const TAG_TRUNCATE_WIDTH: usize = 24;

/// pidcat-like printer: tag column, then message
///
/// Consecutive lines with the same tag print the tag only once.
pub struct DefaultPrinter {
    color: bool,
    previous_tag: Option<String>,
}

impl DefaultPrinter {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            previous_tag: None,
        }
    }
}

/// pad `tag` to the tag column, or cut it if it does not fit
pub fn pad_tag(tag: &str) -> String {
    // there are tags far longer than the column, such as
    // com.amazon.kindle/com.amazon.identity.auth.device.utils.CentralApkUtils
    if tag.chars().count() > TAG_WIDTH {
        tag.chars().take(TAG_TRUNCATE_WIDTH).collect()
    } else {
        format!("{:<width$}", tag, width = TAG_WIDTH)
    }
}

impl LogPrinter for DefaultPrinter {
    fn format(&mut self, item: LogItem) -> Result<String> {
        let item = item.compact();

        let repeated = self
            .previous_tag
            .as_deref()
            .is_some_and(|prev| !prev.is_empty() && prev == item.tag);

        let message = if repeated {
            format!("{:width$}\t{}", "", item.message, width = TAG_TRUNCATE_WIDTH)
        } else {
            format!("{} \t{}", pad_tag(&item.tag), item.message)
        };

        let message = if self.color {
            theme::colorize(&item.level, &message)
        } else {
            message
        };

        self.previous_tag = Some(item.tag);
        Ok(message)
    }
}
