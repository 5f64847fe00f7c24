//! Line parser for the motif grammar.
//!
//! The grammar is line-oriented. Each non-blank, non-comment line is one of:
//!
//! ```text
//! A -> B                          edge that must exist
//! A !> B                          edge that must not exist
//! A -> B [weight >= 2, kind == "syn"]   edge with attribute constraints
//! A.size > 10                     node attribute constraint
//! ```
//!
//! `#` starts a comment (outside quoted strings) and runs to end of line.
//! Node and attribute names are ASCII identifiers: a letter or `_` followed
//! by letters, digits, or `_`. Values are numbers, `true`/`false`, quoted
//! strings, or bare words (kept as strings).

use crate::constraint::{AttrValue, Constraint, ConstraintOp};
use crate::error::MotifError;
use crate::motif::Motif;

/// Parses complete motif text into a [`Motif`].
pub(crate) fn parse_source(source: &str) -> Result<Motif, MotifError> {
    let mut motif = Motif::new();
    for (lineno, raw) in source.lines().enumerate() {
        let lno = lineno + 1;
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }
        parse_line(&mut motif, line, lno)?;
    }
    Ok(motif)
}

/// Removes a trailing `#` comment, ignoring `#` inside quoted strings.
fn strip_comment(line: &str) -> &str {
    let mut in_quotes = false;
    for (i, ch) in line.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            '#' if !in_quotes => return &line[..i],
            _ => {}
        }
    }
    line
}

fn parse_line(motif: &mut Motif, line: &str, lno: usize) -> Result<(), MotifError> {
    if let Some((lhs, exists, rhs)) = split_edge_operator(line) {
        return parse_edge_rule(motif, lhs, exists, rhs, lno);
    }
    if let Some(dot) = line.find('.') {
        return parse_node_constraint(motif, line, dot, lno);
    }
    Err(MotifError::syntax(
        lno,
        format!("expected an edge rule or node constraint, got '{}'", line),
    ))
}

/// Splits a line at the first edge operator, if any.
///
/// Identifiers cannot contain `-` or `!`, so the first occurrence of either
/// operator is unambiguous.
fn split_edge_operator(line: &str) -> Option<(&str, bool, &str)> {
    let pos_exists = line.find("->");
    let pos_forbid = line.find("!>");
    let (pos, exists) = match (pos_exists, pos_forbid) {
        (Some(a), Some(b)) if b < a => (b, false),
        (Some(a), _) => (a, true),
        (None, Some(b)) => (b, false),
        (None, None) => return None,
    };
    Some((&line[..pos], exists, &line[pos + 2..]))
}

fn parse_edge_rule(
    motif: &mut Motif,
    lhs: &str,
    exists: bool,
    rhs: &str,
    lno: usize,
) -> Result<(), MotifError> {
    let source = parse_identifier(lhs.trim(), "source node", lno)?;

    let rhs = rhs.trim();
    let (target_part, constraints) = match rhs.find('[') {
        Some(open) => {
            let rest = rhs[open..].trim();
            if !rest.ends_with(']') {
                return Err(MotifError::syntax(lno, "unclosed '[' in edge constraints"));
            }
            let inner = &rest[1..rest.len() - 1];
            (&rhs[..open], parse_constraint_list(inner, lno)?)
        }
        None => (rhs, Vec::new()),
    };
    let target = parse_identifier(target_part.trim(), "target node", lno)?;

    motif.add_edge_rule(source, target, exists, constraints)
}

// Identifiers cannot contain '.', so the first dot separates the node name
// from the attribute predicate.
fn parse_node_constraint(
    motif: &mut Motif,
    line: &str,
    dot: usize,
    lno: usize,
) -> Result<(), MotifError> {
    let name = parse_identifier(line[..dot].trim(), "node", lno)?.to_string();
    let constraint = parse_constraint(line[dot + 1..].trim(), lno)?;
    motif.add_node_constraint(&name, constraint);
    Ok(())
}

/// Parses a comma-separated `attr OP value` list (the bracketed edge form).
/// Commas inside quoted strings do not split.
fn parse_constraint_list(inner: &str, lno: usize) -> Result<Vec<Constraint>, MotifError> {
    let mut constraints = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;
    for (i, ch) in inner.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                constraints.push(parse_constraint(inner[start..i].trim(), lno)?);
                start = i + 1;
            }
            _ => {}
        }
    }
    let last = inner[start..].trim();
    if !last.is_empty() {
        constraints.push(parse_constraint(last, lno)?);
    } else if constraints.is_empty() {
        return Err(MotifError::syntax(lno, "empty edge constraint list"));
    }
    Ok(constraints)
}

/// Parses a single `attr OP value` predicate.
fn parse_constraint(text: &str, lno: usize) -> Result<Constraint, MotifError> {
    let op_start = text
        .find(|c| matches!(c, '=' | '!' | '<' | '>'))
        .ok_or_else(|| {
            MotifError::syntax(lno, format!("missing comparison operator in '{}'", text))
        })?;

    // Two-character operators take precedence over their one-character prefix.
    let two = text.get(op_start..op_start + 2);
    let (op_token, op_len) = match two {
        Some(t @ ("==" | "!=" | ">=" | "<=")) => (t, 2),
        _ => (&text[op_start..op_start + 1], 1),
    };
    let op = ConstraintOp::from_token(op_token).ok_or_else(|| {
        MotifError::syntax(lno, format!("unknown comparison operator '{}'", op_token))
    })?;

    let attr = parse_identifier(text[..op_start].trim(), "attribute", lno)?.to_string();
    let value = parse_value(text[op_start + op_len..].trim(), lno)?;

    Ok(Constraint { attr, op, value })
}

/// Validates an ASCII identifier (node or attribute name).
fn parse_identifier<'a>(text: &'a str, what: &str, lno: usize) -> Result<&'a str, MotifError> {
    let mut chars = text.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if !valid {
        return Err(MotifError::syntax(
            lno,
            format!("invalid {} name '{}'", what, text),
        ));
    }
    Ok(text)
}

/// Parses a constraint value: quoted string, bool, number, or bare word.
fn parse_value(text: &str, lno: usize) -> Result<AttrValue, MotifError> {
    if text.is_empty() {
        return Err(MotifError::syntax(lno, "missing constraint value"));
    }
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        return Ok(AttrValue::String(text[1..text.len() - 1].to_string()));
    }
    match text {
        "true" => return Ok(AttrValue::Bool(true)),
        "false" => return Ok(AttrValue::Bool(false)),
        _ => {}
    }
    if let Ok(n) = text.parse::<f64>() {
        return Ok(AttrValue::Number(n));
    }
    // Bare word: same lexical rules as identifiers.
    parse_identifier(text, "value", lno)?;
    Ok(AttrValue::String(text.to_string()))
}
