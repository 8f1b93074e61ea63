//! `.properties` text format: logical lines, separators, escapes.
//!
//! Parsing is tolerant. A logical line whose escapes cannot be decoded is
//! reported as [`MalformedLine`] and the remaining lines still load.

/// A logical line that could not be turned into an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// 1-based number of the natural line where the logical line starts.
    pub line: usize,
    pub reason: String,
}

/// Parse `.properties` text into entries in source order.
///
/// Duplicate keys are returned as they appear; callers inserting into a map
/// get last-one-wins semantics.
pub fn parse_entries(text: &str) -> Vec<Result<(String, String), MalformedLine>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines = natural_lines(text);
    let mut entries = Vec::new();

    let mut index = 0;
    while index < lines.len() {
        let start_line = index + 1;
        let first = trim_leading(lines[index]);
        index += 1;

        if first.is_empty() || first.starts_with('#') || first.starts_with('!') {
            continue;
        }

        let mut logical = String::new();
        let mut current = first;
        loop {
            if !continues(current) {
                logical.push_str(current);
                break;
            }
            logical.push_str(&current[..current.len() - 1]);
            match lines.get(index) {
                Some(next) => {
                    current = trim_leading(next);
                    index += 1;
                }
                None => break,
            }
        }

        entries.push(
            parse_logical_line(&logical).map_err(|reason| MalformedLine {
                line: start_line,
                reason,
            }),
        );
    }

    entries
}

/// Split on `\n`, `\r` and `\r\n`.
fn natural_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }

    lines
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{c}')
}

fn trim_leading(line: &str) -> &str {
    line.trim_start_matches(is_blank)
}

/// An odd run of trailing backslashes joins the next natural line.
fn continues(line: &str) -> bool {
    let trailing = line.bytes().rev().take_while(|b| *b == b'\\').count();
    trailing % 2 == 1
}

fn parse_logical_line(line: &str) -> Result<(String, String), String> {
    let chars: Vec<char> = line.chars().collect();

    let mut key_end = chars.len();
    let mut escaped = false;
    for (pos, &c) in chars.iter().enumerate() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || is_blank(c) {
            key_end = pos;
            break;
        }
    }

    let mut value_start = key_end;
    while value_start < chars.len() && is_blank(chars[value_start]) {
        value_start += 1;
    }
    if value_start < chars.len() && matches!(chars[value_start], '=' | ':') {
        value_start += 1;
        while value_start < chars.len() && is_blank(chars[value_start]) {
            value_start += 1;
        }
    }

    let key = unescape(&chars[..key_end], false)?;
    let value = unescape(&chars[value_start..], true)?;
    Ok((key, value))
}

/// Decode escapes; with `trim_trailing`, unescaped trailing blanks are dropped.
fn unescape(chars: &[char], trim_trailing: bool) -> Result<String, String> {
    let mut out = String::with_capacity(chars.len());
    let mut significant = 0;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        if c != '\\' {
            out.push(c);
            if !is_blank(c) {
                significant = out.len();
            }
            continue;
        }

        let Some(&escape) = chars.get(i) else {
            break;
        };
        i += 1;
        let decoded = match escape {
            't' => '\t',
            'n' => '\n',
            'r' => '\r',
            'f' => '\u{c}',
            'u' => {
                let high = read_hex4(chars, i)?;
                i += 4;
                decode_code_unit(high, chars, &mut i)?
            }
            other => other,
        };
        out.push(decoded);
        significant = out.len();
    }

    if trim_trailing {
        out.truncate(significant);
    }
    Ok(out)
}

fn read_hex4(chars: &[char], at: usize) -> Result<u32, String> {
    let digits = chars
        .get(at..at + 4)
        .ok_or_else(|| "malformed \\uxxxx encoding: too few hex digits".to_string())?;
    digits.iter().try_fold(0u32, |acc, c| {
        c.to_digit(16)
            .map(|d| acc * 16 + d)
            .ok_or_else(|| format!("malformed \\uxxxx encoding: invalid hex digit {:?}", c))
    })
}

/// Combine UTF-16 surrogate pairs written as two consecutive `\u` escapes.
fn decode_code_unit(unit: u32, chars: &[char], i: &mut usize) -> Result<char, String> {
    if (0xD800..0xDC00).contains(&unit) {
        let low_follows = chars.get(*i) == Some(&'\\') && chars.get(*i + 1) == Some(&'u');
        if low_follows {
            let low = read_hex4(chars, *i + 2)?;
            if (0xDC00..0xE000).contains(&low) {
                *i += 6;
                let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                return char::from_u32(combined)
                    .ok_or_else(|| format!("invalid code point U+{:X}", combined));
            }
        }
        return Err(format!("unpaired surrogate \\u{:04X}", unit));
    }
    char::from_u32(unit).ok_or_else(|| format!("unpaired surrogate \\u{:04X}", unit))
}
