//! Structural edits over TypeScript sources without a full parser.
//!
//! The template files the scaffold touches are configuration-shaped: import
//! lists, provider arrays, router registrations. The document model scans
//! tokens on demand and splices byte ranges, so untouched text survives
//! byte-for-byte. Every operation no-ops when the construct it targets is
//! absent; an already-applied edit simply finds nothing the second time.

mod scanner;

use scanner::{Token, TokenKind, scan};

/// A mutable source file. Operations locate constructs by shape and remove or
/// collapse them in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    text: String,
}

struct ImportDecl {
    specifier_range: (usize, usize),
    start: usize,
    end: usize,
    end_token: usize,
}

struct ArrayLiteral {
    /// Element spans, in order.
    elements: Vec<(usize, usize)>,
    /// Byte position of the comma following element `k`, when present.
    trailing_commas: Vec<Option<usize>>,
}

impl SourceDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Remove the first import declaration whose module specifier starts with
    /// `prefix`. Returns whether anything was removed.
    pub fn remove_import_starting_with(&mut self, prefix: &str) -> bool {
        self.remove_import_where(|specifier| specifier.starts_with(prefix))
    }

    /// Remove the first import declaration of exactly `specifier`.
    pub fn remove_import(&mut self, specifier: &str) -> bool {
        self.remove_import_where(|candidate| candidate == specifier)
    }

    /// Remove every element matching `predicate` from every array literal that
    /// appears as the value of a `property:` key. The predicate receives the
    /// element's source text. Returns the number of removed elements.
    pub fn remove_array_elements(
        &mut self,
        property: &str,
        predicate: impl Fn(&str) -> bool,
    ) -> usize {
        let tokens = scan(&self.text);
        let mut ranges: Vec<(usize, usize)> = Vec::new();
        let mut removed = 0usize;

        let mut idx = 0;
        while idx + 2 < tokens.len() {
            if self.is_property_key(&tokens, idx, property)
                && tokens[idx + 1].is_punct(b':')
                && tokens[idx + 2].is_punct(b'[')
            {
                let array = self.collect_array(&tokens, idx + 2);
                let matched: Vec<usize> = array
                    .elements
                    .iter()
                    .enumerate()
                    .filter(|(_, (start, end))| predicate(self.text[*start..*end].trim()))
                    .map(|(k, _)| k)
                    .collect();
                removed += matched.len();
                ranges.extend(removal_ranges(&array, &matched));
            }
            idx += 1;
        }

        for (start, mut end) in ranges.into_iter().rev() {
            // A removed trailing comma takes its separator space with it.
            let bytes = self.text.as_bytes();
            if end > 0 && bytes[end - 1] == b',' && bytes.get(end) == Some(&b' ') {
                end += 1;
            }
            let (start, end) = self.expand_to_blank_lines(start, end);
            self.text.replace_range(start..end, "");
        }
        removed
    }

    /// Collapse the first call of the form `receiver.method(args)` — where the
    /// first argument's source text contains `first_arg_contains` — down to
    /// `receiver`. Returns whether anything was collapsed.
    pub fn collapse_member_call(&mut self, method: &str, first_arg_contains: &str) -> bool {
        let tokens = scan(&self.text);
        let mut idx = 1;
        while idx + 2 < tokens.len() {
            let is_call = tokens[idx].is_punct(b'.')
                && tokens[idx + 1].kind == TokenKind::Ident
                && self.slice(tokens[idx + 1]) == method
                && tokens[idx + 2].is_punct(b'(')
                && ends_expression(&tokens[idx - 1]);
            if is_call {
                if let Some((close, first_arg)) = self.parse_call(&tokens, idx + 2) {
                    if first_arg.contains(first_arg_contains) {
                        let (start, end) =
                            self.expand_to_blank_lines(tokens[idx].start, tokens[close].end);
                        self.text.replace_range(start..end, "");
                        return true;
                    }
                    idx = close + 1;
                    continue;
                }
            }
            idx += 1;
        }
        false
    }

    fn remove_import_where(&mut self, matches: impl Fn(&str) -> bool) -> bool {
        let tokens = scan(&self.text);
        let mut idx = 0;
        while idx < tokens.len() {
            let token = tokens[idx];
            let is_keyword = token.kind == TokenKind::Ident
                && self.slice(token) == "import"
                && (idx == 0 || !tokens[idx - 1].is_punct(b'.'));
            if is_keyword {
                if let Some(decl) = self.parse_import(&tokens, idx) {
                    let (spec_start, spec_end) = decl.specifier_range;
                    if matches(&self.text[spec_start..spec_end]) {
                        let (start, end) = self.expand_to_blank_lines(decl.start, decl.end);
                        self.text.replace_range(start..end, "");
                        self.trim_blank_after_removal(start);
                        return true;
                    }
                    idx = decl.end_token + 1;
                    continue;
                }
            }
            idx += 1;
        }
        false
    }

    fn slice(&self, token: Token) -> &str {
        &self.text[token.start..token.end]
    }

    /// Unquoted text of a string token.
    fn str_value(&self, token: Token) -> &str {
        const QUOTES: &[char] = &['"', '\'', '`'];
        let raw = self.slice(token);
        raw.strip_prefix(QUOTES).and_then(|s| s.strip_suffix(QUOTES)).unwrap_or(raw)
    }

    fn is_property_key(&self, tokens: &[Token], idx: usize, property: &str) -> bool {
        match tokens[idx].kind {
            TokenKind::Ident => self.slice(tokens[idx]) == property,
            TokenKind::Str => self.str_value(tokens[idx]) == property,
            TokenKind::Punct(_) => false,
        }
    }

    /// Parse an import declaration starting at the `import` keyword token.
    /// Returns `None` for dynamic imports and anything else that does not end
    /// in a module specifier.
    fn parse_import(&self, tokens: &[Token], keyword: usize) -> Option<ImportDecl> {
        let next = tokens.get(keyword + 1)?;
        // Side-effect import: `import "specifier";`
        if next.kind == TokenKind::Str {
            let (end, end_token) = statement_end(tokens, keyword + 1);
            return Some(ImportDecl {
                specifier_range: value_range(self.slice(*next), *next),
                start: tokens[keyword].start,
                end,
                end_token,
            });
        }
        // Dynamic import: `import(...)` is an expression, not a declaration.
        if next.is_punct(b'(') {
            return None;
        }
        // Clause import: scan ahead for `from "specifier"`.
        let mut idx = keyword + 1;
        while idx + 1 < tokens.len() {
            let token = tokens[idx];
            if token.is_punct(b';') {
                return None;
            }
            if token.kind == TokenKind::Ident
                && self.slice(token) == "from"
                && tokens[idx + 1].kind == TokenKind::Str
            {
                let spec = tokens[idx + 1];
                let (end, end_token) = statement_end(tokens, idx + 1);
                return Some(ImportDecl {
                    specifier_range: value_range(self.slice(spec), spec),
                    start: tokens[keyword].start,
                    end,
                    end_token,
                });
            }
            idx += 1;
        }
        None
    }

    /// Collect the elements of the array literal whose `[` token sits at
    /// `open`.
    fn collect_array(&self, tokens: &[Token], open: usize) -> ArrayLiteral {
        let mut elements: Vec<(usize, usize)> = Vec::new();
        let mut trailing_commas: Vec<Option<usize>> = Vec::new();
        let mut depth = 1usize;
        let mut element_start: Option<usize> = None;
        let mut element_end = 0usize;

        for token in &tokens[open + 1..] {
            if depth == 1 {
                if token.is_punct(b',') {
                    if let Some(start) = element_start.take() {
                        elements.push((start, element_end));
                        trailing_commas.push(Some(token.start));
                    }
                    continue;
                }
                if token.is_punct(b']') {
                    if let Some(start) = element_start.take() {
                        elements.push((start, element_end));
                        trailing_commas.push(None);
                    }
                    break;
                }
            }
            match token.kind {
                TokenKind::Punct(b'(' | b'[' | b'{') => depth += 1,
                TokenKind::Punct(b')' | b']' | b'}') => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
            if element_start.is_none() {
                element_start = Some(token.start);
            }
            element_end = token.end;
        }

        ArrayLiteral { elements, trailing_commas }
    }

    /// Parse a call whose `(` token sits at `open`; returns the index of the
    /// matching `)` token and the first argument's source text.
    fn parse_call(&self, tokens: &[Token], open: usize) -> Option<(usize, String)> {
        let mut depth = 1usize;
        let mut first_arg_start: Option<usize> = None;
        let mut first_arg_end = 0usize;
        let mut first_arg_closed = false;

        for (offset, token) in tokens[open + 1..].iter().enumerate() {
            let idx = open + 1 + offset;
            if depth == 1 {
                if token.is_punct(b',') {
                    first_arg_closed = true;
                }
                if token.is_punct(b')') {
                    let arg = first_arg_start
                        .map(|start| self.text[start..first_arg_end].trim().to_string())
                        .unwrap_or_default();
                    return Some((idx, arg));
                }
            }
            match token.kind {
                TokenKind::Punct(b'(' | b'[' | b'{') => depth += 1,
                TokenKind::Punct(b')' | b']' | b'}') => depth -= 1,
                _ => {}
            }
            if !first_arg_closed {
                if first_arg_start.is_none() {
                    first_arg_start = Some(token.start);
                }
                first_arg_end = token.end;
            }
        }
        None
    }

    /// Collapse the doubled (or leading) blank line a removed import group
    /// leaves behind.
    fn trim_blank_after_removal(&mut self, start: usize) {
        let bytes = self.text.as_bytes();
        let leading_blank = start == 0 && bytes.first() == Some(&b'\n');
        let doubled_blank = start >= 2
            && bytes.get(start) == Some(&b'\n')
            && bytes[start - 1] == b'\n'
            && bytes[start - 2] == b'\n';
        if leading_blank || doubled_blank {
            self.text.remove(start);
        }
    }

    /// Widen a removal so it swallows surrounding indentation and the line
    /// break when the removal would otherwise leave a blank line behind.
    fn expand_to_blank_lines(&self, start: usize, end: usize) -> (usize, usize) {
        let bytes = self.text.as_bytes();
        let mut line_start = start;
        while line_start > 0 && matches!(bytes[line_start - 1], b' ' | b'\t') {
            line_start -= 1;
        }
        let at_line_start = line_start == 0 || bytes[line_start - 1] == b'\n';

        let mut line_end = end;
        while line_end < bytes.len() && matches!(bytes[line_end], b' ' | b'\t') {
            line_end += 1;
        }
        let mut with_newline = line_end;
        if with_newline < bytes.len() && bytes[with_newline] == b'\r' {
            with_newline += 1;
        }
        let ends_line = with_newline >= bytes.len() || bytes[with_newline] == b'\n';

        if at_line_start && ends_line {
            if with_newline < bytes.len() {
                with_newline += 1;
            }
            (line_start, with_newline)
        } else {
            (start, end)
        }
    }
}

/// Whether a token can terminate the receiver expression of a member call.
fn ends_expression(token: &Token) -> bool {
    matches!(token.kind, TokenKind::Ident | TokenKind::Str)
        || token.is_punct(b')')
        || token.is_punct(b']')
}

/// End offset of the statement whose last meaningful token sits at `idx`,
/// including an optional trailing `;`.
fn statement_end(tokens: &[Token], idx: usize) -> (usize, usize) {
    match tokens.get(idx + 1) {
        Some(next) if next.is_punct(b';') => (next.end, idx + 1),
        _ => (tokens[idx].end, idx),
    }
}

/// Byte range of a string token's value, without quotes.
fn value_range(raw: &str, token: Token) -> (usize, usize) {
    if raw.len() >= 2 {
        (token.start + 1, token.end - 1)
    } else {
        (token.start, token.end)
    }
}

/// Non-overlapping removal ranges for the matched element indices: maximal
/// runs are merged, and the separating comma is taken from whichever side
/// keeps the remaining list well-formed.
fn removal_ranges(array: &ArrayLiteral, matched: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut i = 0;
    while i < matched.len() {
        let run_start = matched[i];
        let mut run_end = run_start;
        while i + 1 < matched.len() && matched[i + 1] == run_end + 1 {
            i += 1;
            run_end = matched[i];
        }
        i += 1;

        let first = array.elements[run_start];
        let last = array.elements[run_end];
        let range = if run_end + 1 < array.elements.len() {
            // A kept element follows: take the run's trailing comma.
            let comma_end =
                array.trailing_commas[run_end].map_or(last.1, |comma| comma + 1);
            (first.0, comma_end)
        } else if run_start > 0 {
            // Removing the tail: take the preceding comma.
            let comma_start =
                array.trailing_commas[run_start - 1].unwrap_or(first.0);
            (comma_start, last.1)
        } else {
            // The whole list goes; a dangling trailing comma would be invalid.
            let end = array.trailing_commas[run_end].map_or(last.1, |comma| comma + 1);
            (first.0, end)
        };
        ranges.push(range);
    }
    ranges
}
