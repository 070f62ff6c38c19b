/// Scratch space for the lexeme currently being assembled.
///
/// The tokenizer owns exactly one of these per run. It is cleared after each
/// lexeme is turned into a token; clearing keeps the allocation so the next
/// lexeme reuses it. Tokens never borrow from the buffer, they copy out of it
/// with [`LexemeBuffer::to_text`].
#[derive(Debug, Default)]
pub struct LexemeBuffer {
    bytes: Vec<u8>,
}

impl LexemeBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single byte.
    pub fn append(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    /// Append every byte of `bytes`.
    pub fn append_all(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// The bytes collected so far.
    #[must_use]
    pub fn get(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if nothing has been collected since the last clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Copy the contents out as text. Invalid UTF-8 is replaced, not rejected.
    #[must_use]
    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    /// Empty the buffer, keeping its capacity.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }
}
