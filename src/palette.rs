//! The 256 xterm background colors, as ready-to-copy escape strings.
//!
//! Formatting an escape sequence for every cell would dominate the
//! output loop, so every entry is built exactly once when the
//! [`Palette`] is constructed.  After that the table is immutable and
//! can be shared by reference with anything that needs it.

/// Number of entries in the table.
pub const PALETTE_SIZE: usize = 256;

/// Longest possible entry: `ESC[48;5;255m ESC[0m`.
pub const MAX_ENTRY_LEN: usize = 16;

#[derive(Copy, Clone)]
struct Entry {
    bytes: [u8; MAX_ENTRY_LEN],
    len: usize,
}

/// One "set background, print a space, reset" string per color index.
pub struct Palette {
    entries: [Entry; PALETTE_SIZE],
    max_len: usize,
}

impl Palette {
    /// Build every entry of the table.
    pub fn new() -> Palette {
        let mut entries = [Entry {
            bytes: [0; MAX_ENTRY_LEN],
            len: 0,
        }; PALETTE_SIZE];
        let mut max_len = 0;
        for (index, entry) in entries.iter_mut().enumerate() {
            let text = format!("\x1b[48;5;{}m \x1b[0m", index);
            assert!(
                text.len() <= MAX_ENTRY_LEN,
                "palette entry {} needs {} bytes",
                index,
                text.len()
            );
            entry.bytes[..text.len()].copy_from_slice(text.as_bytes());
            entry.len = text.len();
            max_len = max_len.max(entry.len);
        }
        Palette { entries, max_len }
    }

    /// The escape string for a color index.
    #[inline]
    pub fn entry(&self, color: u8) -> &[u8] {
        let entry = &self.entries[color as usize];
        &entry.bytes[..entry.len]
    }

    /// The length of the longest entry; a row of `width` cells never
    /// needs more than `width * max_len() + 1` bytes.
    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

impl Default for Palette {
    fn default() -> Palette {
        Palette::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_background_escapes() {
        let palette = Palette::new();
        assert_eq!(palette.entry(0), b"\x1b[48;5;0m \x1b[0m");
        assert_eq!(palette.entry(16), b"\x1b[48;5;16m \x1b[0m");
        assert_eq!(palette.entry(216), b"\x1b[48;5;216m \x1b[0m");
        assert_eq!(palette.entry(255), b"\x1b[48;5;255m \x1b[0m");
    }

    #[test]
    fn entry_lengths_follow_the_digit_count() {
        let palette = Palette::new();
        assert_eq!(palette.entry(9).len(), 14);
        assert_eq!(palette.entry(10).len(), 15);
        assert_eq!(palette.entry(100).len(), 16);
        assert_eq!(palette.max_len(), MAX_ENTRY_LEN);
    }

    #[test]
    fn entries_are_complete_escapes() {
        let palette = Palette::new();
        for index in 0..=255u8 {
            let expected = format!("\x1b[48;5;{}m \x1b[0m", index);
            assert_eq!(palette.entry(index), expected.as_bytes());
        }
    }

    #[test]
    fn every_entry_is_distinct() {
        let palette = Palette::new();
        for a in 0..255u8 {
            for b in (a + 1)..=255u8 {
                assert_ne!(palette.entry(a), palette.entry(b));
            }
        }
    }
}
