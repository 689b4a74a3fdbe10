//! Dirty pixel tracking.
//!
//! A [`DirtyPixels`] list receives the byte offsets of every pixel a draw call
//! writes. Hosts use it to re-composite only the touched region, or to undo a
//! frame by clearing exactly those bytes.

/// Append-only list of byte offsets written into a pixel buffer.
///
/// Each written pixel appends its four channel offsets `o, o+1, o+2, o+3`.
/// Offsets are not deduplicated: a pixel written twice in one call shows up
/// twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirtyPixels {
    offsets: Vec<usize>,
}

impl DirtyPixels {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offsets: Vec::new(),
        }
    }

    /// Create an empty list with room for `pixels` pixel records.
    #[must_use]
    pub fn with_capacity(pixels: usize) -> Self {
        Self {
            offsets: Vec::with_capacity(pixels.saturating_mul(4)),
        }
    }

    #[inline]
    pub(crate) fn record(&mut self, offset: usize) {
        self.offsets
            .extend_from_slice(&[offset, offset + 1, offset + 2, offset + 3]);
    }

    /// Recorded byte offsets in write order.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.offsets
    }

    /// Iterate over the recorded byte offsets.
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.offsets.iter()
    }

    /// Base offset of each recorded pixel write.
    pub fn pixel_offsets(&self) -> impl Iterator<Item = usize> + '_ {
        self.offsets.chunks_exact(4).map(|c| c[0])
    }

    /// Number of recorded byte offsets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// True when nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Forget all recorded offsets, keeping the allocation.
    pub fn clear(&mut self) {
        self.offsets.clear();
    }

    /// Take the recorded offsets.
    #[must_use]
    pub fn into_vec(self) -> Vec<usize> {
        self.offsets
    }

    /// Zero every recorded byte of `pixels`.
    ///
    /// Offsets beyond the end of `pixels` are ignored.
    pub fn erase(&self, pixels: &mut [u8]) {
        for &offset in &self.offsets {
            if let Some(byte) = pixels.get_mut(offset) {
                *byte = 0;
            }
        }
    }
}

impl<'a> IntoIterator for &'a DirtyPixels {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.offsets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_appends_four_channels() {
        let mut dirty = DirtyPixels::new();
        dirty.record(40);
        assert_eq!(dirty.as_slice(), &[40, 41, 42, 43]);
        assert_eq!(dirty.pixel_offsets().collect::<Vec<_>>(), vec![40]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut dirty = DirtyPixels::with_capacity(2);
        dirty.record(8);
        dirty.record(8);
        assert_eq!(dirty.len(), 8);
        assert_eq!(dirty.pixel_offsets().collect::<Vec<_>>(), vec![8, 8]);
    }

    #[test]
    fn test_erase_zeroes_recorded_bytes() {
        let mut pixels = vec![7u8; 16];
        let mut dirty = DirtyPixels::new();
        dirty.record(4);
        dirty.erase(&mut pixels);

        assert_eq!(&pixels[0..4], &[7, 7, 7, 7]);
        assert_eq!(&pixels[4..8], &[0, 0, 0, 0]);
        assert_eq!(&pixels[8..], &[7; 8]);
    }

    #[test]
    fn test_erase_ignores_out_of_range() {
        let mut pixels = vec![1u8; 4];
        let mut dirty = DirtyPixels::new();
        dirty.record(100);
        dirty.erase(&mut pixels);
        assert_eq!(pixels, vec![1; 4]);
    }

    #[test]
    fn test_clear() {
        let mut dirty = DirtyPixels::new();
        dirty.record(0);
        dirty.clear();
        assert!(dirty.is_empty());
    }
}
