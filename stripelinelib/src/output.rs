//! Output destinations for rendered lines.
//!
//! [`OutputSink`] is the print primitive the formatter writes through. It is
//! implemented for [`console::Term`] and for [`CaptureSink`], which keeps
//! every write in memory.

use std::cell::{Cell, RefCell};
use std::io;

use console::Term;

/// Where rendered text goes.
pub trait OutputSink {
    /// Write `text`, followed by a newline if `newline` is set.
    fn write_text(&self, text: &str, newline: bool) -> io::Result<()>;

    /// Push any buffered output to its destination.
    fn flush(&self) -> io::Result<()>;
}

impl OutputSink for Term {
    fn write_text(&self, text: &str, newline: bool) -> io::Result<()> {
        if newline {
            self.write_line(text)
        } else {
            self.write_str(text)
        }
    }

    fn flush(&self) -> io::Result<()> {
        Term::flush(self)
    }
}

impl<T: OutputSink + ?Sized> OutputSink for &T {
    fn write_text(&self, text: &str, newline: bool) -> io::Result<()> {
        (**self).write_text(text, newline)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}

/// In-memory sink that records each write separately.
#[derive(Debug, Default)]
pub struct CaptureSink {
    writes: RefCell<Vec<String>>,
    flushes: Cell<usize>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write so far, newline included where one was requested.
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    /// All writes concatenated.
    pub fn contents(&self) -> String {
        self.writes.borrow().concat()
    }

    pub fn flush_count(&self) -> usize {
        self.flushes.get()
    }
}

impl OutputSink for CaptureSink {
    fn write_text(&self, text: &str, newline: bool) -> io::Result<()> {
        let mut line = text.to_string();
        if newline {
            line.push('\n');
        }
        self.writes.borrow_mut().push(line);
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        self.flushes.set(self.flushes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_capture_sink_records_writes() {
        let sink = CaptureSink::new();
        sink.write_text("one", true).unwrap();
        sink.write_text("two", false).unwrap();
        assert_eq!(sink.writes(), vec!["one\n".to_string(), "two".to_string()]);
        assert_eq!(sink.contents(), "one\ntwo");
        assert_eq!(sink.flush_count(), 0);
    }

    #[test]
    fn test_capture_sink_through_reference() {
        let sink = CaptureSink::new();
        let by_ref: &CaptureSink = &sink;
        OutputSink::write_text(&by_ref, "x", false).unwrap();
        OutputSink::flush(&by_ref).unwrap();
        assert_eq!(sink.contents(), "x");
        assert_eq!(sink.flush_count(), 1);
    }
}
