//! Single-character predicates used by the scanner's dispatch.

/// Whitespace other than the line terminator.
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace() && ch != '\n'
}

pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

pub fn is_letter_or_underscore(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Characters that may begin an operator lexeme.
pub fn is_operator_start(ch: char) -> bool {
    matches!(
        ch,
        '+' | '-' | '*' | '/' | '%' | '=' | '<' | '>' | '!' | '&' | '|' | '^' | '~'
    )
}

pub fn is_punctuation(ch: char) -> bool {
    matches!(ch, ';' | ',' | '.' | ':')
}

pub fn is_grouping_open(ch: char) -> bool {
    matches!(ch, '(' | '{' | '[')
}

pub fn is_grouping_close(ch: char) -> bool {
    matches!(ch, ')' | '}' | ']')
}

/// The closer that balances `open`, if `open` is an opener.
pub fn matching_close(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '{' => Some('}'),
        '[' => Some(']'),
        _ => None,
    }
}
