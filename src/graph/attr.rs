//! Attribute value types for graph nodes and edges

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Attribute value attached to a node or edge.
///
/// Tagged union over the four supported scalar types; only the string
/// variant owns heap memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),
}

impl AttrValue {
    /// Get integer value if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttrValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get float value if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttrValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get boolean value if this is a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            AttrValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get string value if this is a string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::Integer(_) => "Integer",
            AttrValue::Float(_) => "Float",
            AttrValue::Boolean(_) => "Boolean",
            AttrValue::String(_) => "String",
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Integer(i) => write!(f, "{}", i),
            AttrValue::Float(fl) => write!(f, "{}", fl),
            AttrValue::Boolean(b) => write!(f, "{}", b),
            AttrValue::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

// Convenience conversions
impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        AttrValue::Integer(i)
    }
}

impl From<i32> for AttrValue {
    fn from(i: i32) -> Self {
        AttrValue::Integer(i as i64)
    }
}

impl From<f64> for AttrValue {
    fn from(f: f64) -> Self {
        AttrValue::Float(f)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Boolean(b)
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::String(s)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::String(s.to_string())
    }
}

/// Attribute map for storing node and edge attributes
pub type AttrMap = HashMap<String, AttrValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_value_types() {
        assert_eq!(AttrValue::Integer(42).type_name(), "Integer");
        assert_eq!(AttrValue::Float(3.14).type_name(), "Float");
        assert_eq!(AttrValue::Boolean(true).type_name(), "Boolean");
        assert_eq!(
            AttrValue::String("test".to_string()).type_name(),
            "String"
        );
    }

    #[test]
    fn test_attr_value_conversions() {
        let int_attr: AttrValue = 42i64.into();
        assert_eq!(int_attr.as_integer(), Some(42));

        let float_attr: AttrValue = 3.14.into();
        assert_eq!(float_attr.as_float(), Some(3.14));

        let bool_attr: AttrValue = true.into();
        assert_eq!(bool_attr.as_boolean(), Some(true));

        let string_attr: AttrValue = "hello".into();
        assert_eq!(string_attr.as_string(), Some("hello"));
    }

    #[test]
    fn test_wrong_variant_access() {
        let int_attr = AttrValue::Integer(7);
        assert_eq!(int_attr.as_float(), None);
        assert_eq!(int_attr.as_boolean(), None);
        assert_eq!(int_attr.as_string(), None);
    }

    #[test]
    fn test_attr_map() {
        let mut attrs = AttrMap::new();
        attrs.insert("name".to_string(), "Alice".into());
        attrs.insert("age".to_string(), 30i64.into());
        attrs.insert("active".to_string(), true.into());

        assert_eq!(attrs.get("name").unwrap().as_string(), Some("Alice"));
        assert_eq!(attrs.get("age").unwrap().as_integer(), Some(30));
        assert_eq!(attrs.get("active").unwrap().as_boolean(), Some(true));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", AttrValue::Integer(1)), "1");
        assert_eq!(format!("{}", AttrValue::Boolean(false)), "false");
        assert_eq!(format!("{}", AttrValue::String("x".into())), "\"x\"");
    }
}
