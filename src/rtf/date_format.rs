//! Translation of .NET-style date patterns into Word `\@` date pictures.
//!
//! The pattern is scanned once. Unquoted pattern letters that Word also knows
//! (`y M d H h m s`) pass through, every other unquoted character becomes a
//! single-quoted literal, and `/` and `:` turn into the locale's separators.
//! Double-quoted runs become single-quoted runs and backslash escapes a
//! single character.

use super::options::DateLocale;

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    Escaped,
    DoubleQuoted,
    SingleQuoted,
}

/// Result of a pattern translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatePicture {
    /// The `\@` picture, without surrounding quotes
    pub picture: String,
    /// Problems found in the pattern; the offending characters were dropped
    pub warnings: Vec<String>,
}

fn is_pattern_letter(c: char) -> bool {
    matches!(c, 'y' | 'M' | 'd' | 'H' | 'h' | 'm' | 's')
}

fn push_literal(out: &mut String, text: &str) {
    for c in text.chars() {
        out.push('\'');
        out.push(c);
        out.push('\'');
    }
}

/// Translate `pattern` (after expanding standard one-letter patterns).
pub fn translate_date_pattern(pattern: &str, locale: &DateLocale) -> DatePicture {
    let pattern = locale.expand(pattern);
    let mut out = DatePicture::default();
    let mut state = State::Normal;

    for c in pattern.chars() {
        if c.is_control() {
            out.warnings
                .push(format!("control character U+{:04X} in date pattern dropped", c as u32));
            continue;
        }
        state = match (state, c) {
            (State::Escaped, '\\') => {
                push_literal(&mut out.picture, "\\");
                State::Normal
            },
            (State::Escaped, '\'') => {
                out.warnings
                    .push("escaped single quote in date pattern is not supported".to_string());
                State::Normal
            },
            (State::Escaped, '"') => {
                out.picture.push_str("'\\\"'");
                State::Normal
            },
            (State::Escaped, c) => {
                push_literal(&mut out.picture, c.encode_utf8(&mut [0u8; 4]));
                State::Normal
            },
            (State::Normal, '\\') => State::Escaped,
            (State::Normal, '\'') => {
                out.picture.push('\'');
                State::SingleQuoted
            },
            (State::Normal, '"') => {
                out.picture.push('\'');
                State::DoubleQuoted
            },
            (State::Normal, '/') => {
                push_literal(&mut out.picture, &locale.date_separator);
                State::Normal
            },
            (State::Normal, ':') => {
                push_literal(&mut out.picture, &locale.time_separator);
                State::Normal
            },
            (State::Normal, c) if is_pattern_letter(c) => {
                out.picture.push(c);
                State::Normal
            },
            (State::Normal, c) => {
                push_literal(&mut out.picture, c.encode_utf8(&mut [0u8; 4]));
                State::Normal
            },
            (State::SingleQuoted, '\'') | (State::DoubleQuoted, '"') => {
                out.picture.push('\'');
                State::Normal
            },
            (State::SingleQuoted, '"') => {
                out.picture.push_str("\\\"");
                State::SingleQuoted
            },
            (State::DoubleQuoted, '\'') => {
                out.picture.push_str("\\'");
                State::DoubleQuoted
            },
            (quoted, c) => {
                out.picture.push(c);
                quoted
            },
        };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picture(pattern: &str) -> String {
        translate_date_pattern(pattern, &DateLocale::default()).picture
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(picture("yyyy-MM-dd"), "yyyy'-'MM'-'dd");
    }

    #[test]
    fn test_separators_follow_locale() {
        let locale = DateLocale::new().with_separators(".", "h");
        let translated = translate_date_pattern("dd/MM HH:mm", &locale);
        assert_eq!(translated.picture, "dd'.'MM' 'HH'h'mm");
    }

    #[test]
    fn test_quoted_runs() {
        assert_eq!(picture("'at' HH"), "'at'' 'HH");
        assert_eq!(picture("\"day\" d"), "'day'' 'd");
        assert_eq!(picture("\\d d"), "'d'' 'd");
        assert_eq!(picture("\\\\"), "'\\'");
    }

    #[test]
    fn test_quote_inside_other_quote_is_escaped() {
        assert_eq!(picture("\"it's\""), "'it\\'s'");
        assert_eq!(picture("'say \"hi\"'"), "'say \\\"hi\\\"'");
    }

    #[test]
    fn test_unknown_letters_are_quoted() {
        assert_eq!(picture("dddd tt"), "dddd' ''t''t'");
    }

    #[test]
    fn test_standard_pattern_expansion() {
        assert_eq!(picture("d"), "MM'/'dd'/'yyyy");
    }

    #[test]
    fn test_escaped_quote_warns() {
        let translated = translate_date_pattern("\\'d", &DateLocale::default());
        assert_eq!(translated.picture, "d");
        assert_eq!(translated.warnings.len(), 1);
    }

    #[test]
    fn test_unterminated_quote_is_accepted() {
        assert_eq!(picture("'open"), "'open");
    }
}
