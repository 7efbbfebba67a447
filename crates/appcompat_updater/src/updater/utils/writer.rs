use indicatif::MultiProgress;
use std::io::{self, Write};

/// Routes log output above the active spinners.
pub struct MultiProgressWriter {
    mp: MultiProgress,
}

impl MultiProgressWriter {
    pub fn new(mp: MultiProgress) -> Self {
        Self { mp }
    }
}

impl Write for MultiProgressWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // MultiProgress::println drops output when it isn't drawing.
        if self.mp.is_hidden() {
            return io::stderr().write(buf);
        }

        let line = String::from_utf8_lossy(buf);
        self.mp.println(line.trim_end_matches('\n'))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.mp.is_hidden() {
            return io::stderr().flush();
        }

        Ok(())
    }
}
