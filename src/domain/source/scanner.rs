//! Minimal token scanner for TypeScript-flavored source files.
//!
//! The edit operations only need structure: identifiers, string/template
//! literals as atomic units, and significant punctuation. Comments and
//! whitespace are skipped; numbers are folded into the identifier kind since
//! only their spelled-out text matters to the callers.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TokenKind {
    Ident,
    Str,
    Punct(u8),
}

#[derive(Debug, Clone, Copy)]
pub(super) struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn is_punct(&self, c: u8) -> bool {
        self.kind == TokenKind::Punct(c)
    }
}

pub(super) fn scan(text: &str) -> Vec<Token> {
    let bytes = text.as_bytes();
    let mut tokens: Vec<Token> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match b {
            b' ' | b'\t' | b'\r' | b'\n' => i += 1,
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i += 2;
                while i + 1 < bytes.len() && !(bytes[i] == b'*' && bytes[i + 1] == b'/') {
                    i += 1;
                }
                i = (i + 2).min(bytes.len());
            }
            b'/' if regex_can_start(tokens.last()) => {
                let end = skip_regex(bytes, i);
                tokens.push(Token { kind: TokenKind::Str, start: i, end });
                i = end;
            }
            b'\'' | b'"' => {
                let end = skip_simple_string(bytes, i);
                tokens.push(Token { kind: TokenKind::Str, start: i, end });
                i = end;
            }
            b'`' => {
                let end = skip_template(bytes, i);
                tokens.push(Token { kind: TokenKind::Str, start: i, end });
                i = end;
            }
            _ if is_ident_start(b) => {
                let start = i;
                while i < bytes.len() && is_ident_continue(bytes[i]) {
                    i += 1;
                }
                tokens.push(Token { kind: TokenKind::Ident, start, end: i });
            }
            _ if b.is_ascii_digit() => {
                let start = i;
                while i < bytes.len()
                    && (is_ident_continue(bytes[i]) || bytes[i] == b'.')
                {
                    i += 1;
                }
                tokens.push(Token { kind: TokenKind::Ident, start, end: i });
            }
            _ => {
                tokens.push(Token { kind: TokenKind::Punct(b), start: i, end: i + 1 });
                i += 1;
            }
        }
    }

    tokens
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$' || b >= 0x80
}

fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit()
}

/// A `/` starts a regex literal unless the previous token could end an
/// expression, in which case it is division.
fn regex_can_start(previous: Option<&Token>) -> bool {
    match previous {
        None => true,
        Some(token) => match token.kind {
            TokenKind::Ident | TokenKind::Str => false,
            TokenKind::Punct(b')') | TokenKind::Punct(b']') => false,
            TokenKind::Punct(_) => true,
        },
    }
}

/// Past the closing quote, or the end of the line for unterminated literals.
fn skip_simple_string(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' => return i,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Past the closing backtick, treating `${ ... }` interpolations (including
/// nested strings and templates) as part of the literal.
fn skip_template(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'`' => return i + 1,
            b'$' if bytes.get(i + 1) == Some(&b'{') => {
                i = skip_interpolation(bytes, i + 2);
            }
            _ => i += 1,
        }
    }
    bytes.len()
}

fn skip_interpolation(bytes: &[u8], mut i: usize) -> usize {
    let mut depth = 1usize;
    while i < bytes.len() && depth > 0 {
        match bytes[i] {
            b'{' => {
                depth += 1;
                i += 1;
            }
            b'}' => {
                depth -= 1;
                i += 1;
            }
            b'\'' | b'"' => i = skip_simple_string(bytes, i),
            b'`' => i = skip_template(bytes, i),
            _ => i += 1,
        }
    }
    i
}

/// Past the closing `/` of a regex literal, honoring escapes and character
/// classes (where an unescaped `/` does not terminate).
fn skip_regex(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    let mut in_class = false;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'[' => {
                in_class = true;
                i += 1;
            }
            b']' => {
                in_class = false;
                i += 1;
            }
            b'/' if !in_class => {
                i += 1;
                // flags
                while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
                    i += 1;
                }
                return i;
            }
            b'\n' => return i,
            _ => i += 1,
        }
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<String> {
        scan(text)
            .iter()
            .map(|t| format!("{:?}:{}", t.kind, &text[t.start..t.end]))
            .collect()
    }

    #[test]
    fn scans_identifiers_strings_and_punctuation() {
        let tokens = kinds("import { a } from \"mod\";");
        assert_eq!(
            tokens,
            [
                "Ident:import",
                "Punct(123):{",
                "Ident:a",
                "Punct(125):}",
                "Ident:from",
                "Str:\"mod\"",
                "Punct(59):;",
            ]
        );
    }

    #[test]
    fn skips_line_and_block_comments() {
        let tokens = kinds("a // trailing [1,2]\nb /* `tpl` */ c");
        assert_eq!(tokens, ["Ident:a", "Ident:b", "Ident:c"]);
    }

    #[test]
    fn template_with_interpolation_is_one_token() {
        let source = "const x = `a ${b({ c: \"}\" })} d`;";
        let tokens = scan(source);
        let strings: Vec<&str> =
            tokens.iter().filter(|t| t.kind == TokenKind::Str).map(|t| &source[t.start..t.end]).collect();
        assert_eq!(strings, ["`a ${b({ c: \"}\" })} d`"]);
    }

    #[test]
    fn distinguishes_regex_from_division() {
        let regex = "const r = /a[/]b/gi;";
        let strings: Vec<&str> = scan(regex)
            .iter()
            .filter(|t| t.kind == TokenKind::Str)
            .map(|t| &regex[t.start..t.end])
            .collect();
        assert_eq!(strings, ["/a[/]b/gi"]);

        let division = "const q = a / b / c;";
        assert!(scan(division).iter().all(|t| t.kind != TokenKind::Str));
    }

    #[test]
    fn unterminated_string_stops_at_line_end() {
        let tokens = scan("const a = \"oops\nnext");
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Ident));
    }
}
