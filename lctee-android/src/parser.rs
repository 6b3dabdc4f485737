use lctee_framework::provider::{Level, LogItem, LogParser};
use std::ops::Range;

// `adb logcat -v threadtime` columns:
// MM-DD HH:MM:SS.mmm  PID  TID L TAG: message
const TIME_RANGE: Range<usize> = 0..18;
const PID_RANGE: Range<usize> = 19..24;
const TID_RANGE: Range<usize> = 25..30;
const LEVEL_RANGE: Range<usize> = 31..32;
const BODY_START: usize = 33;

const UNFORMATTED_TIME: &str = "00-00 00:00:00.000";
const UNFORMATTED_ID: &str = "00000";
const UNFORMATTED_TAG: &str = "#";

/// Android logcat parser for the `threadtime` format
///
/// Fields are cut at fixed character offsets and kept raw, column padding
/// included. Lines that do not fit the layout become a verbose `#` item
/// carrying the whole line as message, so parsing never fails.
pub struct ThreadtimeParser;

impl ThreadtimeParser {
    pub fn new() -> Self {
        Self
    }

    fn unformatted(raw_log: &str) -> LogItem {
        LogItem::new(
            UNFORMATTED_TIME,
            UNFORMATTED_ID,
            UNFORMATTED_ID,
            Level::Verbose,
            UNFORMATTED_TAG,
            raw_log,
        )
    }
}

impl Default for ThreadtimeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LogParser for ThreadtimeParser {
    fn parse(&self, raw_log: &str) -> Option<LogItem> {
        let chars: Vec<char> = raw_log.chars().collect();

        // unformatted message, such as "--------- beginning of crash"
        if chars.len() < BODY_START {
            return Some(Self::unformatted(raw_log));
        }

        let field = |range: Range<usize>| chars[range].iter().collect::<String>();

        let body = field(BODY_START..chars.len()).replace('\t', " ");

        // separator does not exist
        let Some(colon_idx) = body.find(':') else {
            return Some(Self::unformatted(raw_log));
        };

        let tag = &body[..colon_idx];

        // skip the colon and the character after it, normally a space
        let mut rest = body[colon_idx + 1..].chars();
        rest.next();
        let message = rest.as_str();

        Some(LogItem::new(
            field(TIME_RANGE),
            field(PID_RANGE),
            field(TID_RANGE),
            Level::from_code(&field(LEVEL_RANGE)),
            tag,
            message,
        ))
    }
}
