//! Growable byte buffer used for assembling terminal output.
//!
//! `OutBuf` is the one allocation every frame of the picker and every token
//! expansion writes into. It is a thin `Vec<u8>` wrapper with one extra
//! capability: a caller can open a scoped [`Release`] guard before a
//! speculative append (e.g. scanning a possibly-malformed `{tag}`). If the
//! guard is dropped without calling [`Release::commit`], the buffer is
//! truncated back to where the guard was opened — bytes written during the
//! scoped region are released rather than kept.

#[derive(Debug, Default)]
pub struct OutBuf {
    bytes: Vec<u8>,
}

impl OutBuf {
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(cap),
        }
    }

    #[inline]
    pub fn push_byte(&mut self, b: u8) {
        self.bytes.push(b);
    }

    #[inline]
    pub fn push_str(&mut self, s: &str) {
        self.bytes.extend_from_slice(s.as_bytes());
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Marks the current length. Pair with [`OutBuf::truncate`] to roll back
    /// a speculative append without going through a [`Release`] guard.
    pub fn checkpoint(&self) -> usize {
        self.bytes.len()
    }

    pub fn truncate(&mut self, mark: usize) {
        self.bytes.truncate(mark);
    }

    /// Opens a scoped region: bytes appended after this call are dropped
    /// when the returned guard goes out of scope unless [`Release::commit`]
    /// is called first.
    pub fn release(&mut self) -> Release<'_> {
        let mark = self.checkpoint();
        Release {
            buf: self,
            mark,
            committed: false,
        }
    }
}

/// RAII guard for a speculative append into an [`OutBuf`]. Rolls back to the
/// checkpoint it was opened at unless [`commit`](Release::commit) is called.
pub struct Release<'a> {
    buf: &'a mut OutBuf,
    mark: usize,
    committed: bool,
}

impl<'a> Release<'a> {
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl std::ops::Deref for Release<'_> {
    type Target = OutBuf;
    fn deref(&self) -> &OutBuf {
        self.buf
    }
}

impl std::ops::DerefMut for Release<'_> {
    fn deref_mut(&mut self) -> &mut OutBuf {
        self.buf
    }
}

impl Drop for Release<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.buf.truncate(self.mark);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_read_back() {
        let mut buf = OutBuf::new();
        buf.push_str("hello");
        buf.push_byte(b'!');
        assert_eq!(buf.as_bytes(), b"hello!");
    }

    #[test]
    fn release_rolls_back_without_commit() {
        let mut buf = OutBuf::new();
        buf.push_str("kept");
        {
            let mut guard = buf.release();
            guard.push_str("speculative");
        }
        assert_eq!(buf.as_bytes(), b"kept");
    }

    #[test]
    fn release_keeps_bytes_when_committed() {
        let mut buf = OutBuf::new();
        buf.push_str("kept");
        {
            let mut guard = buf.release();
            guard.push_str("-and-more");
            guard.commit();
        }
        assert_eq!(buf.as_bytes(), b"kept-and-more");
    }

    #[test]
    fn checkpoint_truncate_round_trip() {
        let mut buf = OutBuf::new();
        buf.push_str("abc");
        let mark = buf.checkpoint();
        buf.push_str("def");
        buf.truncate(mark);
        assert_eq!(buf.as_bytes(), b"abc");
    }
}
