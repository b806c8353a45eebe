//! Single-line array-literal serializer.
//!
//! Produces exactly the text the table scripts have always printed:
//!
//! ```text
//! const gamma : [u16; 1025] = [0,3,5,...,1023,1024];
//! ```
//!
//! A space on both sides of the `:`, no spaces inside the value list, no
//! trailing comma, and a single newline after the `;`.

use std::fmt::Write as FmtWrite;

use crate::error::{GammaError, Result};

/// Name of the constant declared by [`serialize`].
pub const LITERAL_NAME: &str = "gamma";

/// Serializes `table` as a `const gamma` array literal declaring `entry_count`
/// elements of `type_label`.
///
/// The declared length is written as given; callers pass the configuration's
/// entry count, which always equals `table.len()` for generated tables.
///
/// # Errors
///
/// This function is infallible; it always returns the complete literal.
#[must_use]
pub fn serialize(table: &[i64], type_label: &str, entry_count: usize) -> String {
    // Widest i64 is 20 characters; most entries are 1-4.
    let mut out = String::with_capacity(32 + table.len() * 5);
    let _ = write!(out, "const {LITERAL_NAME} : [{type_label}; {entry_count}] = [");
    for (i, value) in table.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{value}");
    }
    out.push_str("];\n");
    out
}

/// A `const` array declaration read back from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLiteral {
    /// Declared constant name.
    pub name: String,
    /// Declared element type, e.g. `u16`.
    pub type_label: String,
    /// Declared array length.
    pub declared_len: usize,
    /// Values in index order.
    pub values: Vec<i64>,
}

/// Parses the first `const` (or `pub const`) array declaration in `text`.
///
/// Accepts both the single-line literal produced by [`serialize`] and the
/// wrapped form written by the module emitter (trailing comma allowed).
/// Lines before the declaration are skipped; anything other than whitespace
/// after the closing `;` is rejected.
///
/// # Errors
///
/// Returns [`GammaError::MalformedLiteral`] when no declaration is found, a
/// token is missing, a value is not an integer, or the number of values
/// differs from the declared length.
pub fn parse_literal(text: &str) -> Result<ParsedLiteral> {
    let start = find_declaration(text)
        .ok_or_else(|| malformed("no `const` array declaration found"))?;
    let decl = &text[start..];
    let decl = decl.strip_prefix("pub ").unwrap_or(decl);
    let rest = decl
        .strip_prefix("const ")
        .ok_or_else(|| malformed("expected `const`"))?;

    let (name, rest) = rest
        .split_once(':')
        .ok_or_else(|| malformed("expected `:` after the constant name"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(malformed("missing constant name"));
    }

    let rest = expect(rest, '[', "array type")?;
    let (type_label, rest) = rest
        .split_once(';')
        .ok_or_else(|| malformed("expected `;` inside the array type"))?;
    let (len, rest) = rest
        .split_once(']')
        .ok_or_else(|| malformed("expected `]` closing the array type"))?;
    let declared_len: usize = len
        .trim()
        .parse()
        .map_err(|_| malformed(format!("array length `{}` is not an integer", len.trim())))?;

    let rest = expect(rest, '=', "initializer")?;
    let rest = expect(rest, '[', "value list")?;
    let (body, rest) = rest
        .split_once(']')
        .ok_or_else(|| malformed("expected `]` closing the value list"))?;
    let rest = expect(rest, ';', "end of statement")?;
    if !rest.trim().is_empty() {
        return Err(malformed("unexpected text after the declaration"));
    }

    let values = parse_values(body)?;
    if values.len() != declared_len {
        return Err(malformed(format!(
            "declared {declared_len} entries but found {}",
            values.len()
        )));
    }

    Ok(ParsedLiteral {
        name: name.to_string(),
        type_label: type_label.trim().to_string(),
        declared_len,
        values,
    })
}

/// Byte offset of the first line that starts a `const` array declaration.
/// Scalar constants such as `const X: u8 = 1;` are skipped.
fn find_declaration(text: &str) -> Option<usize> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let decl = trimmed.strip_prefix("pub ").unwrap_or(trimmed);
        let is_array = decl
            .strip_prefix("const ")
            .and_then(|rest| rest.split_once(':'))
            .is_some_and(|(_, ty)| ty.trim_start().starts_with('['));
        if is_array {
            return Some(offset + (line.len() - trimmed.len()));
        }
        offset += line.len();
    }
    None
}

/// Skips whitespace and consumes `token`.
fn expect<'a>(input: &'a str, token: char, what: &str) -> Result<&'a str> {
    input
        .trim_start()
        .strip_prefix(token)
        .ok_or_else(|| malformed(format!("expected `{token}` before the {what}")))
}

fn parse_values(body: &str) -> Result<Vec<i64>> {
    let body = body.trim();
    if body.is_empty() {
        return Ok(Vec::new());
    }
    let body = body.strip_suffix(',').unwrap_or(body);
    body.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<i64>()
                .map_err(|_| malformed(format!("`{token}` is not an integer")))
        })
        .collect()
}

fn malformed(reason: impl Into<String>) -> GammaError {
    GammaError::MalformedLiteral(reason.into())
}
