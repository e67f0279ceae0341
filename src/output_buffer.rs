// output_buffer.rs — Append-only listing buffer
//
// All output accumulates here and is written in a single call at the end, so a
// fatal error before that point leaves stdout untouched.  Capacity grows by
// doubling whenever an append would overflow it.

use std::io::Write;

/// Initial buffer capacity in bytes
pub const INITIAL_BUFFER_SIZE: usize = 100;

#[derive(Debug)]
pub struct OutputBuffer {
    bytes: Vec<u8>,
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputBuffer {
    pub fn new() -> Self {
        OutputBuffer {
            bytes: Vec::with_capacity(INITIAL_BUFFER_SIZE),
        }
    }

    /// Append raw bytes, doubling capacity until they fit.
    ///
    /// Allocation failure aborts the process, as with any Vec growth.
    pub fn append(&mut self, data: &[u8]) {
        let needed = self.bytes.len() + data.len();
        let mut capacity = self.bytes.capacity().max(INITIAL_BUFFER_SIZE);

        if needed > self.bytes.capacity() {
            while capacity < needed {
                capacity *= 2;
            }
            self.bytes.reserve_exact(capacity - self.bytes.len());
        }

        self.bytes.extend_from_slice(data);
    }

    pub fn push_str(&mut self, s: &str) {
        self.append(s.as_bytes());
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Write the buffer followed by a newline, consuming it.
    pub fn print_line<W: Write>(mut self, out: &mut W) -> std::io::Result<()> {
        self.append(b"\n");
        out.write_all(&self.bytes)?;
        out.flush()
    }
}
