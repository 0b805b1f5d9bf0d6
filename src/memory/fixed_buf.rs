//! Fixed-capacity vertex buffer.

/// A bounded buffer of vertex ids with a capacity fixed at construction.
///
/// All kernel buffers are pre-sized once and reused; no allocation happens
/// while the kernel is running. `push` refuses writes past capacity instead
/// of growing, which is what lets intersection results degrade to a capped
/// count rather than an out-of-bounds write.
pub struct FixedBuf {
    data: Box<[u32]>,
    len: usize,
}

impl FixedBuf {
    /// Creates an empty buffer that can hold up to `capacity` ids.
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Maximum number of ids this buffer can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of ids currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no ids are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Discards the contents, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Appends `value` if capacity remains; returns whether it was stored.
    #[inline]
    pub fn push(&mut self, value: u32) -> bool {
        if self.len == self.data.len() {
            return false;
        }
        self.data[self.len] = value;
        self.len += 1;
        true
    }

    /// The stored ids, in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.data[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_respects_capacity() {
        let mut buf = FixedBuf::new(2);
        assert!(buf.push(7));
        assert!(buf.push(9));
        assert!(!buf.push(11));
        assert_eq!(buf.as_slice(), &[7, 9]);
        assert_eq!(buf.capacity(), 2);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buf = FixedBuf::new(3);
        buf.push(1);
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 3);
    }
}
