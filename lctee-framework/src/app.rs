use crate::{
    filter::filter,
    printer::OutputFormat,
    provider::{LogParser, LogProvider},
};
use anyhow::Result;
use std::{
    io::{self, Write},
    sync::Arc,
};

// constants
const DEFAULT_COLOR: bool = true;

/// how a stream is rendered
#[derive(Clone)]
pub struct TeeDesc {
    pub format: OutputFormat,
    pub color: bool,
    pub parser: Arc<dyn LogParser>,
}

impl TeeDesc {
    pub fn new(parser: Arc<dyn LogParser>) -> Self {
        Self {
            format: OutputFormat::default(),
            color: DEFAULT_COLOR,
            parser,
        }
    }
}

/// Run a provider to stdout with custom configuration
pub fn start_with_desc<P>(provider: P, desc: &TeeDesc) -> Result<usize>
where
    P: LogProvider,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    start_with_writer(provider, desc, &mut out)
}

/// Run a provider into any writer
///
/// A new printer is built for every call, so printer state never leaks
/// from one stream into the next.
pub fn start_with_writer<P, W>(mut provider: P, desc: &TeeDesc, out: &mut W) -> Result<usize>
where
    P: LogProvider,
    W: Write + ?Sized,
{
    log::debug!(
        "Starting stream (format: {}, color: {})",
        desc.format,
        desc.color
    );

    let mut printer = desc.format.printer(desc.color);
    filter(&mut provider, desc.parser.as_ref(), printer.as_mut(), out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{Level, LogItem, ReaderProvider};

    struct TagParser;

    impl LogParser for TagParser {
        fn parse(&self, raw_line: &str) -> Option<LogItem> {
            let (tag, message) = raw_line.split_once(": ")?;
            Some(LogItem::new("t", "1", "2", Level::Info, tag, message))
        }
    }

    fn run(input: &'static str, desc: &TeeDesc) -> String {
        let mut out = Vec::new();
        start_with_writer(ReaderProvider::new("memory", input.as_bytes()), desc, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_desc_defaults() {
        let desc = TeeDesc::new(Arc::new(TagParser));
        assert_eq!(desc.format, OutputFormat::Default);
        assert!(desc.color);
    }

    #[test]
    fn test_each_run_gets_a_fresh_printer() {
        let mut desc = TeeDesc::new(Arc::new(TagParser));
        desc.color = false;

        let first = run("Net: up\n", &desc);
        let second = run("Net: down\n", &desc);

        assert!(first.starts_with("Net "));
        assert!(second.starts_with("Net "));
    }

    #[test]
    fn test_format_selection() {
        let mut desc = TeeDesc::new(Arc::new(TagParser));
        desc.color = false;
        desc.format = OutputFormat::Ltsv;

        assert_eq!(
            run("Net: up\n", &desc),
            "time:t\tpid:1\ttid:2\tlevel:I\ttag:Net\tmessage:up\n\n"
        );
    }
}
