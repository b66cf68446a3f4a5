//! Low-level RTF markup writer.
//!
//! [`RtfWriter`] knows nothing about documents. It writes groups, control
//! words, escaped text and hex bytes, and remembers whether the last thing it
//! wrote was a control word so that following text gets a delimiting space.
//! Group balance is the caller's responsibility.

use std::io::{self, Write};

use encoding_rs::WINDOWS_1252;

/// Windows code page declared in the header (`\ansicpg`).
pub const CODE_PAGE: i32 = 1252;

/// RTF markup writer over any byte sink.
#[derive(Debug)]
pub struct RtfWriter<W: Write> {
    /// Output writer
    writer: W,
    /// The previous emission was a control word that still needs a delimiter
    last_was_control: bool,
}

impl<W: Write> RtfWriter<W> {
    /// Create a new RTF writer
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_was_control: false,
        }
    }

    /// Open a group (`{`).
    pub fn start_group(&mut self) -> io::Result<()> {
        self.last_was_control = false;
        self.writer.write_all(b"{")
    }

    /// Close a group (`}`).
    pub fn end_group(&mut self) -> io::Result<()> {
        self.last_was_control = false;
        self.writer.write_all(b"}")
    }

    /// Write a control word without parameter (`\word`).
    pub fn control(&mut self, word: &str) -> io::Result<()> {
        self.write_control_word(word, None, false)
    }

    /// Write a control word with a numeric parameter (`\word42`).
    pub fn control_value(&mut self, word: &str, value: i32) -> io::Result<()> {
        self.write_control_word(word, Some(value), false)
    }

    /// Write a star-prefixed control word (`\*\word`). Readers that do not know
    /// the word skip its whole enclosing group.
    pub fn control_star(&mut self, word: &str, value: Option<i32>) -> io::Result<()> {
        self.write_control_word(word, value, true)
    }

    /// Write a control symbol that must not be followed by a padding space,
    /// such as `~` for a non-breaking space.
    pub fn control_unpadded(&mut self, symbol: &str) -> io::Result<()> {
        self.writer.write_all(b"\\")?;
        self.writer.write_all(symbol.as_bytes())?;
        self.last_was_control = false;
        Ok(())
    }

    fn write_control_word(&mut self, word: &str, value: Option<i32>, star: bool) -> io::Result<()> {
        if star {
            self.writer.write_all(b"\\*")?;
        }
        self.writer.write_all(b"\\")?;
        self.writer.write_all(word.as_bytes())?;
        if let Some(v) = value {
            let mut buf = itoa::Buffer::new();
            self.writer.write_all(buf.format(v).as_bytes())?;
        }
        self.last_was_control = true;
        Ok(())
    }

    /// Write plain text with RTF escaping.
    ///
    /// Backslash and braces are escaped, the soft hyphen becomes `\-`,
    /// characters of the Windows-1252 upper half become `\'hh` and anything
    /// else becomes `\uN?` (N as signed 16-bit, surrogate pairs above the BMP).
    pub fn write_text(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        if self.last_was_control {
            self.writer.write_all(b" ")?;
            self.last_was_control = false;
        }

        for ch in text.chars() {
            match ch {
                '\\' => self.writer.write_all(b"\\\\")?,
                '{' => self.writer.write_all(b"\\{")?,
                '}' => self.writer.write_all(b"\\}")?,
                '\u{AD}' => self.writer.write_all(b"\\-")?,
                '\t' => self.write_inline_control("tab")?,
                '\n' => self.write_inline_control("line")?,
                c if (' '..='\u{7E}').contains(&c) => {
                    let mut buf = [0u8; 4];
                    self.writer.write_all(c.encode_utf8(&mut buf).as_bytes())?;
                },
                c => self.write_non_ascii(c)?,
            }
        }
        Ok(())
    }

    /// Control word inside a text run; the next character is delimited by a space.
    fn write_inline_control(&mut self, word: &str) -> io::Result<()> {
        self.writer.write_all(b"\\")?;
        self.writer.write_all(word.as_bytes())?;
        self.writer.write_all(b" ")
    }

    fn write_non_ascii(&mut self, ch: char) -> io::Result<()> {
        if let Some(byte) = code_page_byte(ch) {
            self.writer.write_all(b"\\'")?;
            return self.write_hex(u32::from(byte));
        }
        let mut units = [0u16; 2];
        for unit in ch.encode_utf16(&mut units).iter() {
            let mut buf = itoa::Buffer::new();
            self.writer.write_all(b"\\u")?;
            // \u takes a signed 16-bit parameter
            self.writer.write_all(buf.format(*unit as i16).as_bytes())?;
            self.writer.write_all(b"?")?;
        }
        Ok(())
    }

    /// Write one byte as two lower-case hex digits. Values above 255 are ignored.
    pub fn write_hex(&mut self, value: u32) -> io::Result<()> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";
        if value > 0xFF {
            return Ok(());
        }
        if self.last_was_control {
            self.writer.write_all(b" ")?;
            self.last_was_control = false;
        }
        let pair = [DIGITS[(value >> 4) as usize], DIGITS[(value & 0xF) as usize]];
        self.writer.write_all(&pair)
    }

    /// Write a binary payload as hex digits, wrapped every 64 bytes.
    pub fn write_hex_data(&mut self, data: &[u8]) -> io::Result<()> {
        for (i, byte) in data.iter().enumerate() {
            if i > 0 && i % 64 == 0 {
                self.writer.write_all(b"\r\n")?;
            }
            self.write_hex(u32::from(*byte))?;
        }
        Ok(())
    }

    /// Write the `;` terminating font, color and style table entries.
    pub fn write_separator(&mut self) -> io::Result<()> {
        self.last_was_control = false;
        self.writer.write_all(b";")
    }

    /// Write pre-formatted markup unchanged, such as a field instruction that
    /// is already escaped.
    pub fn write_raw(&mut self, markup: &str) -> io::Result<()> {
        if markup.is_empty() {
            return Ok(());
        }
        if self.last_was_control {
            self.writer.write_all(b" ")?;
            self.last_was_control = false;
        }
        self.writer.write_all(markup.as_bytes())
    }

    /// Write a line break for readability. Readers ignore it.
    pub fn newline(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\r\n")
    }

    /// Flush the writer
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Unwrap the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Single-byte Windows-1252 encoding of a non-ASCII character, if it has one.
fn code_page_byte(ch: char) -> Option<u8> {
    let code = ch as u32;
    if (0xA0..=0xFF).contains(&code) {
        return Some(code as u8);
    }
    let mut buf = [0u8; 4];
    let (bytes, _, had_errors) = WINDOWS_1252.encode(ch.encode_utf8(&mut buf));
    match (had_errors, bytes.as_ref()) {
        (false, [b]) => Some(*b),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn render(f: impl FnOnce(&mut RtfWriter<&mut Vec<u8>>) -> io::Result<()>) -> String {
        let mut output = Vec::new();
        let mut writer = RtfWriter::new(&mut output);
        f(&mut writer).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_control_words() {
        let result = render(|w| {
            w.control_value("test", 42)?;
            w.control("flag")?;
            w.control_star("bkmkstart", None)?;
            w.control_value("fi", -360)
        });
        assert_eq!(result, "\\test42\\flag\\*\\bkmkstart\\fi-360");
    }

    #[test]
    fn test_text_is_padded_after_control_word() {
        let result = render(|w| {
            w.control("b")?;
            w.write_text("bold")?;
            w.write_text(" more")
        });
        assert_eq!(result, "\\b bold more");
    }

    #[test]
    fn test_unpadded_symbol() {
        let result = render(|w| {
            w.write_text("a")?;
            w.control_unpadded("~")?;
            w.write_text("b")
        });
        assert_eq!(result, "a\\~b");
    }

    #[test]
    fn test_group_resets_padding() {
        let result = render(|w| {
            w.control("par")?;
            w.start_group()?;
            w.write_text("x")?;
            w.end_group()
        });
        assert_eq!(result, "\\par{x}");
    }

    #[test]
    fn test_escaping() {
        let result = render(|w| w.write_text("a\\b{c}d\u{AD}e"));
        assert_eq!(result, "a\\\\b\\{c\\}d\\-e");
    }

    #[test]
    fn test_code_page_characters() {
        assert_eq!(render(|w| w.write_text("é")), "\\'e9");
        assert_eq!(render(|w| w.write_text("€")), "\\'80");
        assert_eq!(render(|w| w.write_text("™")), "\\'99");
    }

    #[test]
    fn test_unicode_fallback() {
        assert_eq!(render(|w| w.write_text("Ω")), "\\u937?");
        assert_eq!(render(|w| w.write_text("\u{FFFD}")), "\\u-3?");
        assert_eq!(render(|w| w.write_text("😀")), "\\u-10179?\\u-8704?");
    }

    #[test]
    fn test_hex() {
        assert_eq!(render(|w| w.write_hex(0x0A)), "0a");
        assert_eq!(render(|w| w.write_hex(0x100)), "");
        assert_eq!(render(|w| w.write_hex_data(&[0xDE, 0xAD])), "dead");
    }

    proptest! {
        #[test]
        fn prop_text_never_leaves_raw_braces_or_non_ascii(s in "\\PC*") {
            let out = render(|w| w.write_text(&s));
            prop_assert!(out.is_ascii());
            let bytes = out.as_bytes();
            for (i, b) in bytes.iter().enumerate() {
                if *b == b'{' || *b == b'}' {
                    // every brace is escaped by an odd run of backslashes
                    let run = bytes[..i].iter().rev().take_while(|c| **c == b'\\').count();
                    prop_assert!(run % 2 == 1);
                }
            }
        }
    }
}
