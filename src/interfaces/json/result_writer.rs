use crate::domain::operation::FunctionRunResult;
use crate::error::Result;
use std::io::Write;

/// Writes a `FunctionRunResult` as a single JSON document followed by a newline.
pub struct ResultWriter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn write_result(&mut self, result: &FunctionRunResult) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, result)?;
        } else {
            serde_json::to_writer(&mut self.writer, result)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
