#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedInt<'a> {
    pub value: i32,
    pub trailing: &'a str,
}

/// Longest signed decimal prefix, after leading whitespace.
pub fn parse_leading_i32(token: &str) -> Option<ParsedInt<'_>> {
    let s = token.trim_start_matches(is_c_space);
    let (negative, body) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digit_len = body.bytes().take_while(u8::is_ascii_digit).count();
    if digit_len == 0 {
        return None;
    }
    let (digits, trailing) = body.split_at(digit_len);

    let limit = i64::from(i32::MAX) + 1;
    let mut magnitude: i64 = 0;
    for b in digits.bytes() {
        magnitude = magnitude * 10 + i64::from(b - b'0');
        if magnitude > limit {
            return None;
        }
    }
    let signed = if negative { -magnitude } else { magnitude };
    let value = i32::try_from(signed).ok()?;

    Some(ParsedInt { value, trailing })
}

pub fn parse_strict_i32(token: &str) -> Option<i32> {
    token.parse::<i32>().ok()
}

fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/number.rs"]
mod tests;
