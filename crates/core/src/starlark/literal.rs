//! Decoding of Starlark string literals

/// Decode the source text of a string literal into its value.
///
/// Handles `r`/`b` prefixes, single, double and triple quotes. Octal and `\x`
/// escapes denote bytes, so only the ASCII range is decoded; higher values,
/// unknown and malformed escapes are kept verbatim and decoding never fails.
pub fn unquote(text: &str) -> String {
    let quote_at = text.find(['"', '\'']).unwrap_or(text.len());
    let (prefix, quoted) = text.split_at(quote_at);
    let raw = prefix.contains(['r', 'R']);

    let body = strip_quotes(quoted);
    if raw {
        body.to_string()
    } else {
        decode_escapes(body)
    }
}

fn strip_quotes(quoted: &str) -> &str {
    for delim in ["\"\"\"", "'''", "\"", "'"] {
        if quoted.len() >= 2 * delim.len() && quoted.starts_with(delim) && quoted.ends_with(delim)
        {
            return &quoted[delim.len()..quoted.len() - delim.len()];
        }
    }
    quoted
}

fn decode_escapes(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(&next) = chars.peek() else {
            out.push('\\');
            break;
        };
        let simple = match next {
            '\\' => Some('\\'),
            '\'' => Some('\''),
            '"' => Some('"'),
            'n' => Some('\n'),
            'r' => Some('\r'),
            't' => Some('\t'),
            'a' => Some('\x07'),
            'b' => Some('\x08'),
            'f' => Some('\x0c'),
            'v' => Some('\x0b'),
            _ => None,
        };
        if let Some(decoded) = simple {
            chars.next();
            out.push(decoded);
            continue;
        }

        match next {
            // Line continuation
            '\n' => {
                chars.next();
            }
            '\r' => {
                chars.next();
                chars.next_if_eq(&'\n');
            }
            '0'..='7' => {
                let digits = take_digits(&mut chars, 3, 8);
                let decoded = u32::from_str_radix(&digits, 8)
                    .ok()
                    .filter(|&code| code <= 0x7f)
                    .and_then(char::from_u32);
                match decoded {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push('\\');
                        out.push_str(&digits);
                    }
                }
            }
            'x' | 'u' | 'U' => {
                chars.next();
                let width = match next {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let digits = take_digits(&mut chars, width, 16);
                let decoded = (digits.len() == width)
                    .then(|| u32::from_str_radix(&digits, 16).ok())
                    .flatten()
                    .filter(|&code| next != 'x' || code <= 0x7f)
                    .and_then(char::from_u32);
                match decoded {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push('\\');
                        out.push(next);
                        out.push_str(&digits);
                    }
                }
            }
            _ => out.push('\\'),
        }
    }

    out
}

fn take_digits(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    max: usize,
    radix: u32,
) -> String {
    let mut digits = String::new();
    while digits.len() < max {
        match chars.peek() {
            Some(c) if c.is_digit(radix) => {
                digits.push(*c);
                chars.next();
            }
            _ => break,
        }
    }
    digits
}
