//! Address template tokenizer
//!
//! Templates such as `%N%n%O%n%A%n%C, %S %Z` mix literal text with
//! two-character escapes: `%n` is a line break, any other `%X` names the
//! field whose code is `X`.

use postaddr_common::AddressField;

const ESCAPE: char = '%';
const NEWLINE: char = 'n';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    Field(AddressField),
    Newline,
    Literal(&'a str),
}

/// Split a template into tokens. Unknown escapes are kept as literal text.
pub fn tokenize(template: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut chars = template.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c != ESCAPE {
            continue;
        }
        let Some(&(j, code)) = chars.peek() else {
            break;
        };
        let token = if code == NEWLINE {
            Token::Newline
        } else if let Some(field) = AddressField::from_code(code) {
            Token::Field(field)
        } else {
            continue;
        };
        chars.next();
        if literal_start < i {
            tokens.push(Token::Literal(&template[literal_start..i]));
        }
        tokens.push(token);
        literal_start = j + code.len_utf8();
    }

    if literal_start < template.len() {
        tokens.push(Token::Literal(&template[literal_start..]));
    }
    tokens
}

/// Fields named by a template, first occurrence only
pub fn fields(template: &str) -> Vec<AddressField> {
    let mut fields = Vec::new();
    for token in tokenize(template) {
        if let Token::Field(field) = token {
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
    }
    fields
}
