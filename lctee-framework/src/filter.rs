use crate::{
    printer::LogPrinter,
    provider::{LogParser, LogProvider},
};
use anyhow::Result;
use std::io::Write;

/// Pumps every line of `provider` through `parser` and `printer` into `out`.
///
/// 1. Calls `provider.start()`
/// 2. Loops: `next_line()` → `parser.parse()` → `printer.format()` → write
/// 3. Calls `provider.stop()`, also when writing failed
///
/// Each rendered item is followed by a blank line. Lines the parser rejects are
/// echoed as `error: <line>`. Returns the number of lines read.
///
/// # Errors
///
/// - Errors from `start()` abort before reading
/// - Write and format errors stop the loop and are returned
/// - Errors from `stop()` are logged only
pub fn filter<P, W>(
    provider: &mut P,
    parser: &dyn LogParser,
    printer: &mut dyn LogPrinter,
    out: &mut W,
) -> Result<usize>
where
    P: LogProvider + ?Sized,
    W: Write + ?Sized,
{
    provider.start()?;
    log::debug!("Provider started");

    let result = pump(provider, parser, printer, out);

    if let Err(e) = provider.stop() {
        log::error!("Failed to stop log provider: {}", e);
    }

    match &result {
        Ok(count) => log::debug!("Provider stopped after {} lines", count),
        Err(e) => log::debug!("Provider stopped on error: {}", e),
    }

    result
}

fn pump<P, W>(
    provider: &mut P,
    parser: &dyn LogParser,
    printer: &mut dyn LogPrinter,
    out: &mut W,
) -> Result<usize>
where
    P: LogProvider + ?Sized,
    W: Write + ?Sized,
{
    let mut count = 0;

    while let Some(line) = provider.next_line() {
        count += 1;
        match parser.parse(&line) {
            Some(item) => {
                let rendered = printer.format(item)?;
                writeln!(out, "{}\n", rendered)?;
            }
            None => {
                writeln!(out, "error: {}", line)?;
            }
        }
    }

    out.flush()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        printer::DefaultPrinter,
        provider::{Level, LogItem, ReaderProvider},
    };
    use std::io;

    /// keeps lines starting with "keep:", rejects the rest
    struct PickyParser;

    impl LogParser for PickyParser {
        fn parse(&self, raw_line: &str) -> Option<LogItem> {
            let message = raw_line.strip_prefix("keep:")?;
            Some(LogItem::new("t", "1", "2", Level::Info, "Picky", message))
        }
    }

    struct CountingProvider {
        inner: ReaderProvider<&'static [u8]>,
        started: bool,
        stopped: bool,
    }

    impl CountingProvider {
        fn new(input: &'static str) -> Self {
            Self {
                inner: ReaderProvider::new("memory", input.as_bytes()),
                started: false,
                stopped: false,
            }
        }
    }

    impl LogProvider for CountingProvider {
        fn start(&mut self) -> Result<()> {
            self.started = true;
            Ok(())
        }

        fn stop(&mut self) -> Result<()> {
            self.stopped = true;
            Ok(())
        }

        fn next_line(&mut self) -> Option<String> {
            self.inner.next_line()
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_items_are_followed_by_blank_line() {
        let mut provider = CountingProvider::new("keep:one\nkeep:two\n");
        let mut printer = DefaultPrinter::new(false);
        let mut out = Vec::new();

        let count = filter(&mut provider, &PickyParser, &mut printer, &mut out).unwrap();

        let blank_tag = " ".repeat(24);
        let expected = format!("Picky{} \tone\n\n{}\ttwo\n\n", " ".repeat(18), blank_tag);
        assert_eq!(count, 2);
        assert_eq!(String::from_utf8(out).unwrap(), expected);
        assert!(provider.started);
        assert!(provider.stopped);
    }

    #[test]
    fn test_rejected_lines_are_echoed_as_errors() {
        let mut provider = CountingProvider::new("garbage\n");
        let mut printer = DefaultPrinter::new(false);
        let mut out = Vec::new();

        filter(&mut provider, &PickyParser, &mut printer, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "error: garbage\n");
    }

    #[test]
    fn test_empty_stream() {
        let mut provider = CountingProvider::new("");
        let mut printer = DefaultPrinter::new(false);
        let mut out = Vec::new();

        let count = filter(&mut provider, &PickyParser, &mut printer, &mut out).unwrap();
        assert_eq!(count, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_error_still_stops_provider() {
        let mut provider = CountingProvider::new("keep:one\n");
        let mut printer = DefaultPrinter::new(false);

        let err = filter(&mut provider, &PickyParser, &mut printer, &mut BrokenPipe).unwrap_err();
        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
        assert!(provider.stopped);
    }
}
