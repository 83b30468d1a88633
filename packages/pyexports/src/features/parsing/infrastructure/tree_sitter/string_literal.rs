//! Python string literal decoding
//!
//! Works on the raw literal text (`r'...'`, `"""..."""`, `u"..."`) so it does
//! not depend on how the grammar splits string contents into child nodes.

/// Decode a single string literal token.
///
/// Returns `None` for bytes literals and f-strings, which are not `str`
/// constants.
pub(super) fn decode(literal: &str) -> Option<String> {
    let quote_at = literal.find(['"', '\''])?;
    let (prefix, quoted) = literal.split_at(quote_at);

    let prefix = prefix.to_ascii_lowercase();
    if prefix.contains('b') || prefix.contains('f') {
        return None;
    }
    let raw = prefix.contains('r');

    let body = strip_quotes(quoted)?;
    Some(if raw {
        body.to_string()
    } else {
        unescape(body)
    })
}

fn strip_quotes(quoted: &str) -> Option<&str> {
    for delim in ["\"\"\"", "'''", "\"", "'"] {
        if quoted.len() >= 2 * delim.len() && quoted.starts_with(delim) && quoted.ends_with(delim)
        {
            return Some(&quoted[delim.len()..quoted.len() - delim.len()]);
        }
    }
    None
}

fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let Some(escape) = chars.next() else {
            out.push('\\');
            break;
        };

        match escape {
            '\n' => {}
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0c}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\u{0b}'),
            '0'..='7' => {
                let mut value = escape.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                out.push(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            'x' | 'u' | 'U' => {
                let width = match escape {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let digits: String = chars.clone().take(width).collect();
                let well_formed =
                    digits.len() == width && digits.chars().all(|d| d.is_ascii_hexdigit());
                match u32::from_str_radix(&digits, 16) {
                    Ok(value) if well_formed => {
                        for _ in 0..width {
                            chars.next();
                        }
                        out.push(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER));
                    }
                    _ => {
                        out.push('\\');
                        out.push(escape);
                    }
                }
            }
            // \N{NAME} stays as written, so an element spelled with it never
            // matches a function name
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_quotes() {
        assert_eq!(decode("\"foo\"").as_deref(), Some("foo"));
        assert_eq!(decode("'foo'").as_deref(), Some("foo"));
        assert_eq!(decode("''").as_deref(), Some(""));
    }

    #[test]
    fn test_triple_quotes() {
        assert_eq!(decode("\"\"\"foo\"\"\"").as_deref(), Some("foo"));
        assert_eq!(decode("'''a'b'''").as_deref(), Some("a'b"));
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(decode("u'foo'").as_deref(), Some("foo"));
        assert_eq!(decode("R'a\\nb'").as_deref(), Some("a\\nb"));
        assert_eq!(decode("b'foo'"), None);
        assert_eq!(decode("rb'foo'"), None);
        assert_eq!(decode("f'foo'"), None);
    }

    #[test]
    fn test_escapes() {
        assert_eq!(decode("'a\\tb'").as_deref(), Some("a\tb"));
        assert_eq!(decode("'\\x41\\101\\u00e9'").as_deref(), Some("AAé"));
        assert_eq!(decode("'\\U0001F600'").as_deref(), Some("😀"));
        assert_eq!(decode("'it\\'s'").as_deref(), Some("it's"));
        assert_eq!(decode("'\\q'").as_deref(), Some("\\q"));
        assert_eq!(decode("'a\\\nb'").as_deref(), Some("ab"));
        assert_eq!(decode("'\\N{DASH}'").as_deref(), Some("\\N{DASH}"));
    }
}
