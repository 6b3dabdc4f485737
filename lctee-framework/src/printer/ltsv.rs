use super::LogPrinter;
use crate::{provider::LogItem, theme};
use anyhow::Result;

/// Labeled Tab-separated Values, fields printed exactly as parsed
pub struct LtsvPrinter {
    color: bool,
}

impl LtsvPrinter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl LogPrinter for LtsvPrinter {
    fn format(&mut self, item: LogItem) -> Result<String> {
        let message = format!(
            "time:{}\tpid:{}\ttid:{}\tlevel:{}\ttag:{}\tmessage:{}",
            item.time, item.pid, item.tid, item.level, item.tag, item.message
        );

        if self.color {
            Ok(theme::colorize(&item.level, &message))
        } else {
            Ok(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Level;

    #[test]
    fn test_ltsv_fields() {
        let item = LogItem::new(
            "10-19 12:34:56.789",
            " 1234",
            " 5678",
            Level::Warn,
            "ActivityManager",
            "Slow operation: 12ms",
        );

        let line = LtsvPrinter::new(false).format(item).unwrap();
        assert_eq!(
            line,
            "time:10-19 12:34:56.789\tpid: 1234\ttid: 5678\tlevel:W\ttag:ActivityManager\tmessage:Slow operation: 12ms"
        );
    }

    #[test]
    fn test_ltsv_labels_split_cleanly() {
        let item = LogItem::new("t", "1", "2", Level::Info, "Tag", "m");
        let line = LtsvPrinter::new(false).format(item).unwrap();

        let labels: Vec<&str> = line
            .split('\t')
            .filter_map(|field| field.split_once(':').map(|(label, _)| label))
            .collect();
        assert_eq!(labels, ["time", "pid", "tid", "level", "tag", "message"]);
    }

    #[test]
    fn test_ltsv_color_by_level() {
        let item = LogItem::new("t", "1", "2", Level::Error, "Tag", "m");
        let plain = LtsvPrinter::new(false).format(item.clone()).unwrap();
        let colored = LtsvPrinter::new(true).format(item).unwrap();
        assert_eq!(colored, theme::colorize(&Level::Error, &plain));
        assert_ne!(colored, plain);
    }
}
