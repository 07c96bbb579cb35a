//! Composite Key Module
//!
//! Builds deterministic cache keys out of several request parameters.

use std::fmt;

/// Separator placed between rendered key parts.
pub const KEY_DELIMITER: &str = "::";

// == Key Part ==
/// One segment of a composite key.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyPart {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    /// A missing parameter; renders as the empty string.
    Absent,
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPart::Text(text) => f.write_str(text),
            KeyPart::Int(value) => write!(f, "{}", value),
            KeyPart::UInt(value) => write!(f, "{}", value),
            // -0.0 renders like 0
            KeyPart::Float(value) if *value == 0.0 => f.write_str("0"),
            KeyPart::Float(value) => write!(f, "{}", value),
            KeyPart::Absent => Ok(()),
        }
    }
}

impl From<&str> for KeyPart {
    fn from(value: &str) -> Self {
        KeyPart::Text(value.to_string())
    }
}

impl From<String> for KeyPart {
    fn from(value: String) -> Self {
        KeyPart::Text(value)
    }
}

impl From<&String> for KeyPart {
    fn from(value: &String) -> Self {
        KeyPart::Text(value.clone())
    }
}

impl From<i32> for KeyPart {
    fn from(value: i32) -> Self {
        KeyPart::Int(value.into())
    }
}

impl From<i64> for KeyPart {
    fn from(value: i64) -> Self {
        KeyPart::Int(value)
    }
}

impl From<u32> for KeyPart {
    fn from(value: u32) -> Self {
        KeyPart::UInt(value.into())
    }
}

impl From<u64> for KeyPart {
    fn from(value: u64) -> Self {
        KeyPart::UInt(value)
    }
}

impl From<usize> for KeyPart {
    fn from(value: usize) -> Self {
        KeyPart::UInt(value as u64)
    }
}

impl From<f64> for KeyPart {
    fn from(value: f64) -> Self {
        KeyPart::Float(value)
    }
}

impl<T: Into<KeyPart>> From<Option<T>> for KeyPart {
    fn from(value: Option<T>) -> Self {
        value.map_or(KeyPart::Absent, Into::into)
    }
}

// == Composite Key ==
/// Renders every part and joins them with [`KEY_DELIMITER`].
///
/// Equal part sequences always produce equal keys. Parts that themselves
/// contain the delimiter can collide with a differently split sequence.
pub fn composite_key<I, P>(parts: I) -> String
where
    I: IntoIterator<Item = P>,
    P: Into<KeyPart>,
{
    parts
        .into_iter()
        .map(|part| part.into().to_string())
        .collect::<Vec<_>>()
        .join(KEY_DELIMITER)
}

/// Builds a composite key from mixed-type parts.
///
/// ```
/// use msbot_nexon::cache_key;
///
/// assert_eq!(cache_key!("tms", 1, None::<&str>, "b"), "tms::1::::b");
/// ```
#[macro_export]
macro_rules! cache_key {
    () => {
        ::std::string::String::new()
    };
    ($($part:expr),+ $(,)?) => {
        $crate::cache::composite_key([$($crate::cache::KeyPart::from($part)),+])
    };
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_with_delimiter() {
        assert_eq!(composite_key(["tms", "alice"]), "tms::alice");
    }

    #[test]
    fn test_absent_parts_render_empty() {
        let key = composite_key([
            KeyPart::from("a"),
            KeyPart::from(1),
            KeyPart::Absent,
            KeyPart::from("b"),
        ]);
        assert_eq!(key, "a::1::::b");
    }

    #[test]
    fn test_numbers_render_like_strings() {
        assert_eq!(cache_key!("a", 1), cache_key!("a", "1"));
        assert_eq!(cache_key!("a", 1u64), "a::1");
        assert_eq!(cache_key!("a", -3i64), "a::-3");
    }

    #[test]
    fn test_float_rendering() {
        assert_eq!(cache_key!(1.5), "1.5");
        assert_eq!(cache_key!(2.0), "2");
    }

    #[test]
    fn test_negative_zero_renders_as_zero() {
        assert_eq!(cache_key!("a", -0.0), "a::0");
        assert_eq!(cache_key!("a", -0.0), cache_key!("a", 0));
    }

    #[test]
    fn test_option_parts() {
        assert_eq!(cache_key!("x", Some("y")), "x::y");
        assert_eq!(cache_key!("x", None::<u32>), "x::");
    }

    #[test]
    fn test_deterministic() {
        let first = cache_key!("a", 1, None::<&str>, "b");
        let second = cache_key!("a", 1, None::<&str>, "b");
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(cache_key!(), "");
        assert_eq!(composite_key(Vec::<KeyPart>::new()), "");
        assert_eq!(cache_key!(None::<&str>), "");
    }

    #[test]
    fn test_delimiter_inside_part_collides() {
        assert_eq!(cache_key!("a::b", "c"), cache_key!("a", "b::c"));
    }
}
