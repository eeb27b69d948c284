use terminal_size::{Width, terminal_size};

use crate::ui::ascii::ESC_BYTE;
type ByteIter<'a> = std::iter::Peekable<std::str::Bytes<'a>>;

const ELLIPSIS: char = '…';

#[derive(Debug, Default, Clone)]
pub struct WidthUtil;

impl WidthUtil {
    /// Drops CSI sequences. Multi-byte characters pass through untouched.
    pub fn strip_ansi(s: &str) -> String {
        let mut out: Vec<u8> = Vec::with_capacity(s.len());
        let mut bytes = s.bytes().peekable();

        while let Some(byte) = bytes.next() {
            if byte == ESC_BYTE && matches!(bytes.peek(), Some(b'[')) {
                Self::consume_csi(&mut bytes);
                continue;
            }
            out.push(byte);
        }
        String::from_utf8_lossy(&out).into_owned()
    }

    fn consume_csi(bytes: &mut ByteIter<'_>) {
        let _ = bytes.next(); // '['
        for b in bytes.by_ref() {
            if b.is_ascii_alphabetic() {
                break;
            }
        }
    }

    pub fn visible_width(&self, s: &str) -> usize {
        Self::strip_ansi(s).chars().count()
    }

    pub fn pad_visible(&self, s: &str, width: usize) -> String {
        let w = self.visible_width(s);
        if w >= width {
            return s.to_string();
        }
        let mut out = String::with_capacity(s.len() + (width - w));
        out.push_str(s);
        out.extend(std::iter::repeat_n(' ', width - w));
        out
    }

    /// Cuts plain text to `max` characters, marking the cut with an ellipsis.
    pub fn truncate(&self, s: &str, max: usize) -> String {
        if s.chars().count() <= max {
            return s.to_string();
        }
        if max == 0 {
            return String::new();
        }
        let mut out: String = s.chars().take(max - 1).collect();
        out.push(ELLIPSIS);
        out
    }

    /// Best-effort terminal width (defaults to 80).
    pub fn terminal_width(&self) -> usize {
        match terminal_size() {
            Some((Width(w), _)) => w as usize,
            None => 80,
        }
    }

    /// Widest cell that lets `columns` cells, a leading column of
    /// `lead_width`, and the ` | ` separators fit the terminal.
    pub fn cell_width_for(&self, columns: usize, lead_width: usize, min: usize, max: usize) -> usize {
        let separators = columns * 3;
        let available = self
            .terminal_width()
            .saturating_sub(lead_width + separators);
        (available / columns.max(1)).clamp(min, max)
    }
}
