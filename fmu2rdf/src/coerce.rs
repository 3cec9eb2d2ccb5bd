//! Coercion of raw attribute strings into natively-typed values.
//!
//! Every literal embedded into the graph (start, min, max, nominal) goes
//! through [`coerce`] so that it carries the semantically correct XSD
//! datatype instead of an untyped copy of the XML attribute.

use crate::error::Error;

/// A raw value interpreted against its declared FMI type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// `Real` — floating point.
    Real(f64),
    /// `Integer` — whole number.
    Integer(i64),
    /// `Boolean` — true/false.
    Boolean(bool),
    /// `String`, or an untagged passthrough.
    String(String),
}

/// Interprets `value` against the declared type tag.
///
/// The tag is first normalized (`number` → `Real`, `integer` → `Integer`,
/// `boolean` → `Boolean`, `string` → `String`; the canonical five pass
/// through unchanged). A missing tag is an identity passthrough.
///
/// # Errors
///
/// - [`Error::UnsupportedType`] for `Enumeration` (no silent passthrough:
///   an enumeration start value is an integer index whose meaning depends
///   on the declared item list, and embedding it untyped would corrupt
///   downstream range checks).
/// - [`Error::UnknownType`] for tags outside the normalization table.
/// - [`Error::InvalidValue`] if the value does not parse as the tagged
///   type.
pub fn coerce(value: &str, type_tag: Option<&str>) -> Result<TypedValue, Error> {
    let Some(tag) = type_tag else {
        return Ok(TypedValue::String(value.to_owned()));
    };

    let normalized = match tag {
        "number" | "Real" => "Real",
        "integer" | "Integer" => "Integer",
        "boolean" | "Boolean" => "Boolean",
        "string" | "String" => "String",
        "Enumeration" => "Enumeration",
        other => return Err(Error::UnknownType(other.to_owned())),
    };

    match normalized {
        "Real" => value
            .parse::<f64>()
            .map(TypedValue::Real)
            .map_err(|_| invalid(value, "Real")),
        "Integer" => value
            .parse::<i64>()
            .map(TypedValue::Integer)
            .map_err(|_| invalid(value, "Integer")),
        // The FMI XML boolean lexical space admits 1/0 next to true/false.
        "Boolean" => match value {
            "true" | "1" => Ok(TypedValue::Boolean(true)),
            "false" | "0" => Ok(TypedValue::Boolean(false)),
            _ => Err(invalid(value, "Boolean")),
        },
        "String" => Ok(TypedValue::String(value.to_owned())),
        _ => Err(Error::UnsupportedType),
    }
}

fn invalid(value: &str, expected: &'static str) -> Error {
    Error::InvalidValue {
        value: value.to_owned(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn number_tag_normalizes_to_real() {
        assert_eq!(coerce("3.5", Some("number")).unwrap(), TypedValue::Real(3.5));
    }

    #[test]
    fn canonical_tags_pass_through_the_table() {
        assert_eq!(
            coerce("2", Some("integer")).unwrap(),
            TypedValue::Integer(2)
        );
        assert_eq!(
            coerce("2", Some("Integer")).unwrap(),
            TypedValue::Integer(2)
        );
        assert_eq!(
            coerce("true", Some("boolean")).unwrap(),
            TypedValue::Boolean(true)
        );
        assert_eq!(
            coerce("0", Some("Boolean")).unwrap(),
            TypedValue::Boolean(false)
        );
        assert_eq!(
            coerce("abc", Some("String")).unwrap(),
            TypedValue::String("abc".to_owned())
        );
    }

    #[test]
    fn missing_tag_is_identity_passthrough() {
        assert_eq!(
            coerce("raw", None).unwrap(),
            TypedValue::String("raw".to_owned())
        );
    }

    #[test]
    fn enumeration_signals_unsupported() {
        assert!(matches!(
            coerce("2", Some("Enumeration")),
            Err(Error::UnsupportedType)
        ));
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!(matches!(
            coerce("1", Some("Float64")),
            Err(Error::UnknownType(_))
        ));
    }

    #[test]
    fn unparsable_values_are_invalid() {
        assert!(matches!(
            coerce("abc", Some("Real")),
            Err(Error::InvalidValue {
                expected: "Real",
                ..
            })
        ));
        assert!(matches!(
            coerce("1.5", Some("Integer")),
            Err(Error::InvalidValue { .. })
        ));
        assert!(matches!(
            coerce("yes", Some("Boolean")),
            Err(Error::InvalidValue { .. })
        ));
    }
}
