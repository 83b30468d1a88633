//! Starred tuples on assignment right-hand sides
//!
//! `x = *a, b` is a tuple display, but tree-sitter-python only accepts a
//! starred element inside brackets. [`parenthesize`] rewrites such right-hand
//! sides to `x = (*a, b)` so the source can be parsed again. Insertions never
//! add lines, so reported line numbers are unaffected.

/// Wrap every unbracketed starred tuple on the right of a bare `=`.
///
/// Returns `None` when there is nothing to rewrite.
pub(super) fn parenthesize(source: &str) -> Option<String> {
    let ranges = starred_ranges(source);
    if ranges.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(source.len() + 2 * ranges.len());
    let mut copied = 0;
    for (start, end) in ranges {
        out.push_str(&source[copied..start]);
        out.push('(');
        out.push_str(&source[start..end]);
        out.push(')');
        copied = end;
    }
    out.push_str(&source[copied..]);
    Some(out)
}

#[derive(Debug)]
struct RightHandSide {
    start: usize,
    has_star: bool,
    has_comma: bool,
}

impl RightHandSide {
    fn new(start: usize) -> Self {
        Self {
            start,
            has_star: false,
            has_comma: false,
        }
    }

    /// Byte range without surrounding whitespace, if it needs parentheses
    fn finish(self, source: &str, end: usize) -> Option<(usize, usize)> {
        if !(self.has_star && self.has_comma) {
            return None;
        }
        let text = &source[self.start..end];
        let start = self.start + (text.len() - text.trim_start().len());
        let end = self.start + text.trim_end().len();
        (start < end).then_some((start, end))
    }
}

/// Scan at bracket depth 0, skipping strings and comments
fn starred_ranges(source: &str) -> Vec<(usize, usize)> {
    let bytes = source.as_bytes();
    let mut ranges = Vec::new();
    let mut current: Option<RightHandSide> = None;
    let mut depth = 0usize;
    let mut previous = b'\n';
    let mut i = 0;

    let mut close = |current: &mut Option<RightHandSide>, end: usize| {
        if let Some(range) = current.take().and_then(|rhs| rhs.finish(source, end)) {
            ranges.push(range);
        }
    };

    while i < bytes.len() {
        let byte = bytes[i];
        match byte {
            b'#' => {
                close(&mut current, i);
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
                continue;
            }
            b'\'' | b'"' => {
                i = skip_string(bytes, i);
                previous = byte;
                continue;
            }
            b'\\' if matches!(bytes.get(i + 1), Some(b'\n' | b'\r')) => {
                i += 2;
                continue;
            }
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            b'\n' | b';' if depth == 0 => close(&mut current, i),
            b'=' if depth == 0 && is_bare_assign(bytes, i) => {
                close(&mut current, i);
                current = Some(RightHandSide::new(i + 1));
            }
            b',' if depth == 0 => {
                if let Some(rhs) = current.as_mut() {
                    rhs.has_comma = true;
                }
            }
            b'*' if depth == 0 && matches!(previous, b'=' | b',') => {
                if let Some(rhs) = current.as_mut() {
                    rhs.has_star = true;
                }
            }
            _ => {}
        }

        if !byte.is_ascii_whitespace() {
            previous = byte;
        }
        i += 1;
    }

    close(&mut current, bytes.len());
    ranges
}

/// `=` that is not part of `==`, `<=`, `:=`, `+=` and friends
fn is_bare_assign(bytes: &[u8], at: usize) -> bool {
    let before = at.checked_sub(1).map(|j| bytes[j]);
    let after = bytes.get(at + 1).copied();
    !matches!(
        before,
        Some(b'=' | b'!' | b'<' | b'>' | b':' | b'+' | b'-' | b'*' | b'/' | b'%' | b'&' | b'|' | b'^' | b'@')
    ) && after != Some(b'=')
}

/// Index just past the string literal opening at `start`
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let triple = bytes.get(start..start + 3) == Some(&[quote, quote, quote][..]);
    let mut i = start + if triple { 3 } else { 1 };

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' if !triple => return i,
            b if b == quote => {
                if !triple {
                    return i + 1;
                }
                if bytes.get(i..i + 3) == Some(&[quote, quote, quote][..]) {
                    return i + 3;
                }
                i += 1;
            }
            _ => i += 1,
        }
    }

    bytes.len()
}
