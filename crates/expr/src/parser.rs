//! Prompt expression parser.
//!
//! Grammar (informal, single character of lookahead):
//! ```text
//! expr      = (value ("," value)*)?
//! value     = ws group | ws plain
//! group     = "(" (value ("," value)*)? ")" weight?
//! plain     = text_run weight?
//! weight    = ws ":" DIGITS_AND_ONE_DOT
//! text_run  = any chars except ',' '(' ')' ':', trimmed
//! ```
//!
//! Each production is a function over a shared [`Cursor`]. A group returns
//! its members already multiplied by the group weight and with nested groups
//! spliced in, so the caller only ever has to flatten one level.

use tagweave_core::{DEFAULT_WEIGHT, TagToken, TagValue, WeightedTag};

/// Groups nested deeper than this are read as if their opening parenthesis
/// were absent, which keeps recursion bounded on hostile input.
pub const MAX_GROUP_DEPTH: usize = 64;

/// Parse prompt text into flat `{name, weight}` pairs.
pub fn parse(input: &str) -> Vec<WeightedTag> {
    parse_tokens(input)
        .into_iter()
        .filter_map(|token| match token.value {
            TagValue::Plain(name) => Some(WeightedTag::new(name, token.weight)),
            TagValue::Group(_) => None,
        })
        .collect()
}

/// Parse prompt text into plain [`TagToken`]s in prompt order.
///
/// Never fails and never returns a group token. Empty input gives an empty
/// list.
pub fn parse_tokens(input: &str) -> Vec<TagToken> {
    let mut cursor = Cursor::new(input);
    let mut tokens = Vec::new();

    while !cursor.at_end() {
        let start = cursor.pos;
        if let Some(token) = parse_value(&mut cursor) {
            splice(&mut tokens, token);
        }
        cursor.skip_whitespace();
        if cursor.eat(',') {
            continue;
        }
        // Nothing could start a value here (a stray ')' at top level).
        if cursor.pos == start {
            cursor.bump();
        }
    }

    tracing::trace!(input_len = input.len(), tokens = tokens.len(), "Parsed prompt");
    tokens
}

/// Byte-offset cursor over the prompt text.
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        self.take_while(char::is_whitespace);
    }

    fn take_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.input[start..self.pos]
    }
}

fn is_delimiter(c: char) -> bool {
    matches!(c, ',' | '(' | ')' | ':')
}

/// Append a parsed value to a sequence, flattening groups.
fn splice(out: &mut Vec<TagToken>, token: TagToken) {
    match token.value {
        TagValue::Plain(_) => out.push(token),
        TagValue::Group(members) => out.extend(members),
    }
}

fn parse_value(cursor: &mut Cursor<'_>) -> Option<TagToken> {
    cursor.skip_whitespace();
    match cursor.peek()? {
        '(' if cursor.depth < MAX_GROUP_DEPTH => Some(parse_group(cursor)),
        '(' => {
            cursor.bump();
            parse_plain(cursor)
        }
        _ => parse_plain(cursor),
    }
}

fn parse_group(cursor: &mut Cursor<'_>) -> TagToken {
    cursor.bump(); // '('
    cursor.depth += 1;

    let mut members = Vec::new();
    loop {
        cursor.skip_whitespace();
        match cursor.peek() {
            None | Some(')') => break,
            Some(_) => {}
        }
        let start = cursor.pos;
        if let Some(token) = parse_value(cursor) {
            splice(&mut members, token);
        }
        cursor.skip_whitespace();
        if !cursor.eat(',') && cursor.pos == start {
            cursor.bump();
        }
    }
    cursor.depth -= 1;

    // Unterminated groups keep what they collected and take no weight.
    let mut weight = DEFAULT_WEIGHT;
    if cursor.eat(')') {
        if let Some(group_weight) = parse_weight(cursor) {
            weight = group_weight;
            for member in &mut members {
                member.weight = scale(member.weight, group_weight);
            }
        }
    }

    TagToken::group(members, weight)
}

/// Group weights multiply in; a product that overflows falls back to the
/// default weight, as an unreadable weight does.
fn scale(weight: f64, factor: f64) -> f64 {
    let product = weight * factor;
    if product.is_finite() {
        product
    } else {
        DEFAULT_WEIGHT
    }
}

fn parse_plain(cursor: &mut Cursor<'_>) -> Option<TagToken> {
    let text = cursor.take_while(|c| !is_delimiter(c)).trim();
    // A weight with no tag in front of it is consumed and dropped.
    let weight = parse_weight(cursor);
    if text.is_empty() {
        return None;
    }
    Some(TagToken::plain(text, weight.unwrap_or(DEFAULT_WEIGHT)))
}

/// `None` when there is no `:` suffix; `Some(1.0)` when the suffix is junk.
fn parse_weight(cursor: &mut Cursor<'_>) -> Option<f64> {
    cursor.skip_whitespace();
    if !cursor.eat(':') {
        return None;
    }

    let mut seen_dot = false;
    let digits = cursor.take_while(|c| match c {
        '0'..='9' => true,
        '.' if !seen_dot => {
            seen_dot = true;
            true
        }
        _ => false,
    });

    let weight = digits
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite())
        .unwrap_or(DEFAULT_WEIGHT);
    Some(weight)
}

// ─── Tests ──────────────────────────────────────────────────────────
