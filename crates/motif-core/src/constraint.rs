//! Attribute constraints attached to motif nodes and edges.
//!
//! A constraint is a single `attr OP value` predicate, e.g. `weight >= 2` or
//! `kind == "syn"`. Constraints are carried through parsing untouched and
//! surface in the node-link output grouped by attribute name.

use serde::{Deserialize, Serialize};

/// Comparison operator in an attribute constraint.
///
/// Serializes as the operator's surface syntax (`"=="`, `">="`, ...) so the
/// wire form reads the same as the motif text. `=` in source is an alias for
/// `==` and normalizes to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintOp {
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
}

impl ConstraintOp {
    /// Parses an operator token. Returns `None` for anything that is not
    /// one of the six comparators (or the `=` alias).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "==" | "=" => Some(ConstraintOp::Eq),
            "!=" => Some(ConstraintOp::Ne),
            ">" => Some(ConstraintOp::Gt),
            ">=" => Some(ConstraintOp::Ge),
            "<" => Some(ConstraintOp::Lt),
            "<=" => Some(ConstraintOp::Le),
            _ => None,
        }
    }

    /// The surface syntax of this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintOp::Eq => "==",
            ConstraintOp::Ne => "!=",
            ConstraintOp::Gt => ">",
            ConstraintOp::Ge => ">=",
            ConstraintOp::Lt => "<",
            ConstraintOp::Le => "<=",
        }
    }
}

/// A scalar constraint value.
///
/// Untagged: serializes as a bare JSON number, bool, or string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Number(f64),
    Bool(bool),
    String(String),
}

/// One `attr OP value` predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    /// Attribute name the predicate applies to.
    pub attr: String,
    /// Comparison operator.
    pub op: ConstraintOp,
    /// Right-hand value.
    pub value: AttrValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_from_token() {
        assert_eq!(ConstraintOp::from_token("=="), Some(ConstraintOp::Eq));
        assert_eq!(ConstraintOp::from_token("="), Some(ConstraintOp::Eq));
        assert_eq!(ConstraintOp::from_token("!="), Some(ConstraintOp::Ne));
        assert_eq!(ConstraintOp::from_token(">="), Some(ConstraintOp::Ge));
        assert_eq!(ConstraintOp::from_token("<="), Some(ConstraintOp::Le));
        assert_eq!(ConstraintOp::from_token(">"), Some(ConstraintOp::Gt));
        assert_eq!(ConstraintOp::from_token("<"), Some(ConstraintOp::Lt));
        assert_eq!(ConstraintOp::from_token("=>"), None);
        assert_eq!(ConstraintOp::from_token(""), None);
    }

    #[test]
    fn op_serializes_as_surface_syntax() {
        let json = serde_json::to_string(&ConstraintOp::Ge).unwrap();
        assert_eq!(json, "\">=\"");
        let back: ConstraintOp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ConstraintOp::Ge);
    }

    #[test]
    fn attr_value_is_untagged() {
        assert_eq!(
            serde_json::to_string(&AttrValue::Number(2.5)).unwrap(),
            "2.5"
        );
        assert_eq!(serde_json::to_string(&AttrValue::Bool(true)).unwrap(), "true");
        assert_eq!(
            serde_json::to_string(&AttrValue::String("syn".into())).unwrap(),
            "\"syn\""
        );
    }

    #[test]
    fn serde_roundtrip_constraint() {
        let c = Constraint {
            attr: "weight".into(),
            op: ConstraintOp::Ge,
            value: AttrValue::Number(2.0),
        };
        let json = serde_json::to_string(&c).unwrap();
        let back: Constraint = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
