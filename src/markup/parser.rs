//! Tag lexer and tree builder for the nested markup dialect.

use std::iter::Peekable;

use super::tags::{self, StyleChange, TagAction};
use super::ParseError;

/// One node of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Styled {
        change: StyleChange,
        children: Vec<Node>,
    },
}

/// Parsed form of a markup string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarkupDocument {
    pub nodes: Vec<Node>,
}

/// A lexically valid tag, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTag {
    pub closing: bool,
    /// Lower-cased tag name.
    pub name: String,
    pub args: Vec<String>,
}

/// Parse `text` into a document.
///
/// Anything that does not lex as a tag, and any tag outside the vocabulary,
/// stays literal. Only recognized tags with bad arguments fail.
pub fn parse(text: &str) -> Result<MarkupDocument, ParseError> {
    let mut builder = TreeBuilder::default();
    let mut literal = String::new();
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        match c {
            '\\' => match rest[1..].chars().next() {
                Some(escaped @ ('<' | '\\')) => {
                    literal.push(escaped);
                    rest = &rest[1 + escaped.len_utf8()..];
                }
                _ => {
                    literal.push('\\');
                    rest = &rest[1..];
                }
            },
            '<' => match lex_tag(rest) {
                Some((raw, len)) => {
                    let source = &rest[..len];
                    rest = &rest[len..];
                    if !builder.apply(&raw, &mut literal)? {
                        literal.push_str(source);
                    }
                }
                None => {
                    literal.push('<');
                    rest = &rest[1..];
                }
            },
            _ => {
                literal.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    builder.flush(&mut literal);
    Ok(builder.finish())
}

/// Lex a tag at the start of `input` (which begins with `<`). Returns the
/// tag and its length in bytes, or `None` when the text is not a tag.
fn lex_tag(input: &str) -> Option<(RawTag, usize)> {
    let mut chars = input.char_indices().skip(1).peekable();

    let closing = matches!(chars.peek(), Some(&(_, '/')));
    if closing {
        chars.next();
    }

    let mut name = String::new();
    while let Some(&(_, c)) = chars.peek() {
        if c.is_ascii_alphanumeric() || matches!(c, '_' | '#' | '-') {
            name.push(c.to_ascii_lowercase());
            chars.next();
        } else {
            break;
        }
    }
    if name.is_empty() {
        return None;
    }

    let mut args = Vec::new();
    loop {
        let (i, c) = chars.next()?;
        match c {
            '>' => return Some((RawTag { closing, name, args }, i + 1)),
            ':' => args.push(lex_argument(&mut chars)?),
            _ => return None,
        }
    }
}

fn lex_argument<I>(chars: &mut Peekable<I>) -> Option<String>
where
    I: Iterator<Item = (usize, char)>,
{
    let mut value = String::new();

    if let Some(&(_, quote @ ('\'' | '"'))) = chars.peek() {
        chars.next();
        loop {
            let (_, c) = chars.next()?;
            if c == quote {
                return Some(value);
            }
            if c == '\\' {
                if let Some(&(_, next)) = chars.peek() {
                    if next == quote {
                        value.push(next);
                        chars.next();
                        continue;
                    }
                }
            }
            value.push(c);
        }
    }

    while let Some(&(_, c)) = chars.peek() {
        match c {
            ':' | '>' => break,
            '<' | '\n' => return None,
            _ => {
                value.push(c);
                chars.next();
            }
        }
    }
    Some(value)
}

struct OpenSpan {
    key: String,
    change: StyleChange,
    children: Vec<Node>,
}

#[derive(Default)]
struct TreeBuilder {
    root: Vec<Node>,
    open: Vec<OpenSpan>,
}

impl TreeBuilder {
    fn children_mut(&mut self) -> &mut Vec<Node> {
        match self.open.last_mut() {
            Some(span) => &mut span.children,
            None => &mut self.root,
        }
    }

    fn flush(&mut self, literal: &mut String) {
        if !literal.is_empty() {
            let text = std::mem::take(literal);
            self.children_mut().push(Node::Text(text));
        }
    }

    /// Apply a lexed tag. Returns `false` when the tag is not recognized and
    /// must be kept as literal text.
    fn apply(&mut self, raw: &RawTag, literal: &mut String) -> Result<bool, ParseError> {
        let Some(action) = tags::interpret(raw)? else {
            return Ok(false);
        };

        self.flush(literal);
        match action {
            TagAction::Open { key, change } => self.open.push(OpenSpan {
                key,
                change,
                children: Vec::new(),
            }),
            TagAction::Close { key } => {
                // Unmatched closing tags are dropped.
                if let Some(pos) = self.open.iter().rposition(|span| span.key == key) {
                    while self.open.len() > pos {
                        self.close_innermost();
                    }
                }
            }
            TagAction::Reset => {
                while !self.open.is_empty() {
                    self.close_innermost();
                }
            }
            TagAction::Newline => self.children_mut().push(Node::Text("\n".to_string())),
        }
        Ok(true)
    }

    fn close_innermost(&mut self) {
        if let Some(span) = self.open.pop() {
            let node = Node::Styled {
                change: span.change,
                children: span.children,
            };
            self.children_mut().push(node);
        }
    }

    fn finish(mut self) -> MarkupDocument {
        while !self.open.is_empty() {
            self.close_innermost();
        }
        MarkupDocument { nodes: self.root }
    }
}
