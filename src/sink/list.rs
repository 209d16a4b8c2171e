//! Sink that prints URLs.

use crate::error::Result;
use crate::sink::{Sink, SinkOutcome};
use std::io::Write;
use url::Url;

/// Writes each URL followed by a newline.
#[derive(Debug)]
pub struct ListSink<W> {
    out: W,
}

impl<W: Write> ListSink<W> {
    /// Creates a sink writing to `out` (normally stdout).
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for ListSink<W> {
    fn accept(&mut self, url: &Url) -> Result<SinkOutcome> {
        writeln!(self.out, "{url}")?;
        self.out.flush()?;
        Ok(SinkOutcome::Listed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_url_per_line() {
        let mut sink = ListSink::new(Vec::new());
        for u in ["https://a.com/1.jpg", "https://a.com/2.png"] {
            let outcome = sink.accept(&Url::parse(u).unwrap()).unwrap();
            assert_eq!(outcome, SinkOutcome::Listed);
        }
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "https://a.com/1.jpg\nhttps://a.com/2.png\n");
    }
}
