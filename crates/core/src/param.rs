//! The typed parameter kinds and their coercion rules.
//!
//! A [`Param`] owns a handle to one storage [`Slot`] and knows how to turn
//! textual tokens into the slot's type. Options and arguments share the same
//! kinds; only registration differs.

use std::fmt::{Debug, Display, Formatter};

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::slot::Slot;
use crate::value::Value;

/// A typed parameter bound to caller storage.
pub enum Param {
    Bool(Slot<bool>),
    Str(Slot<String>),
    Int(Slot<i64>),
    Strings(Slot<Vec<String>>),
    Ints(Slot<Vec<i64>>),
    /// A caller-defined type, see [`Value`].
    Var(Box<dyn Value>),
}

impl Param {
    /// Interprets one token and writes it to storage.
    ///
    /// Scalar kinds overwrite the stored value, repeated kinds append to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBool`] or [`Error::InvalidInt`] when the token
    /// does not parse. Storage is left as it was.
    pub fn set(&mut self, raw: &str) -> Result<()> {
        match self {
            Self::Bool(slot) => *slot.borrow_mut() = parse_bool(raw)?,
            Self::Str(slot) => *slot.borrow_mut() = raw.to_string(),
            Self::Int(slot) => *slot.borrow_mut() = parse_int(raw)?,
            Self::Strings(slot) => slot.borrow_mut().push(raw.to_string()),
            Self::Ints(slot) => {
                let value = parse_int(raw)?;
                slot.borrow_mut().push(value);
            }
            Self::Var(value) => value.set(raw)?,
        }

        Ok(())
    }

    /// Replaces the stored sequence with a batch of tokens.
    ///
    /// Every token is trimmed first. Strings keep empty tokens, integers skip
    /// them. An integer batch is all-or-nothing: if one token fails the stored
    /// sequence is not touched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBatch`] when an integer token does not parse,
    /// or whatever a batch-capable [`Value`] returns.
    ///
    /// # Panics
    ///
    /// Panics when the parameter is not batch-capable (see
    /// [`is_batch`](Param::is_batch)). Reaching that branch means the caller
    /// classified the parameter wrongly; it is not an input error.
    pub fn set_multi(&mut self, raws: &[&str]) -> Result<()> {
        match self {
            Self::Strings(slot) => {
                let values = raws.iter().map(|raw| raw.trim().to_string()).collect();
                slot.replace(values);
                Ok(())
            }
            Self::Ints(slot) => {
                let values = raws
                    .iter()
                    .map(|raw| raw.trim())
                    .filter(|raw| !raw.is_empty())
                    .map(|raw| {
                        parse_int(raw).map_err(|e| Error::InvalidBatch {
                            raw: raw.to_string(),
                            source: Box::new(e),
                        })
                    })
                    .collect::<Result<Vec<i64>>>()?;
                slot.replace(values);
                Ok(())
            }
            Self::Var(value) => {
                assert!(
                    value.is_batch(),
                    "set_multi called on a custom value that does not accept batches"
                );
                value.set_multi(raws)
            }
            Self::Bool(_) | Self::Str(_) | Self::Int(_) => {
                panic!("set_multi called on a scalar parameter")
            }
        }
    }

    /// Whether the parameter consumes no following token on the command line.
    #[must_use]
    pub fn is_toggle(&self) -> bool {
        match self {
            Self::Bool(_) => true,
            Self::Var(value) => value.is_toggle(),
            _ => false,
        }
    }

    /// Whether the parameter accepts a whole batch via [`set_multi`](Param::set_multi).
    #[must_use]
    pub fn is_batch(&self) -> bool {
        match self {
            Self::Strings(_) | Self::Ints(_) => true,
            Self::Var(value) => value.is_batch(),
            _ => false,
        }
    }

    /// Short name of the kind, as used in definition files.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Str(_) => "string",
            Self::Int(_) => "int",
            Self::Strings(_) => "strings",
            Self::Ints(_) => "ints",
            Self::Var(_) => "var",
        }
    }
}

impl Display for Param {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(slot) => write!(formatter, "{}", *slot.borrow()),
            Self::Str(slot) => write!(formatter, "{:?}", *slot.borrow()),
            Self::Int(slot) => write!(formatter, "{}", *slot.borrow()),
            Self::Strings(slot) => write!(
                formatter,
                "[{}]",
                slot.borrow().iter().map(|s| format!("{s:?}")).join(", ")
            ),
            Self::Ints(slot) => write!(formatter, "[{}]", slot.borrow().iter().join(", ")),
            Self::Var(value) => write!(formatter, "{value}"),
        }
    }
}

impl Debug for Param {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Param::{}({})", self.kind(), self)
    }
}

/// Types that have a built-in [`Param`] kind.
pub trait Bindable: Sized + 'static {
    /// Wraps a storage slot in the matching parameter kind.
    fn bind(slot: Slot<Self>) -> Param;
}

impl Bindable for bool {
    fn bind(slot: Slot<Self>) -> Param {
        Param::Bool(slot)
    }
}

impl Bindable for String {
    fn bind(slot: Slot<Self>) -> Param {
        Param::Str(slot)
    }
}

impl Bindable for i64 {
    fn bind(slot: Slot<Self>) -> Param {
        Param::Int(slot)
    }
}

impl Bindable for Vec<String> {
    fn bind(slot: Slot<Self>) -> Param {
        Param::Strings(slot)
    }
}

impl Bindable for Vec<i64> {
    fn bind(slot: Slot<Self>) -> Param {
        Param::Ints(slot)
    }
}

/// Parses the boolean spellings `1 t T TRUE true True` and `0 f F FALSE false False`.
///
/// # Errors
///
/// Returns [`Error::InvalidBool`] for anything else.
pub fn parse_bool(raw: &str) -> Result<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(Error::InvalidBool(raw.to_string())),
    }
}

/// Parses a base-10 signed integer. Leading zeros and a leading `+` are accepted.
///
/// # Errors
///
/// Returns [`Error::InvalidInt`] when `raw` is not a valid 64-bit integer.
pub fn parse_int(raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|source| Error::InvalidInt {
        raw: raw.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_param() {
        let into = Slot::new(false);
        let mut param = Param::Bool(into.clone());

        assert!(param.is_toggle());
        assert!(!param.is_batch());

        let cases = [
            ("true", true),
            ("false", false),
            ("1", true),
            ("0", false),
            ("t", true),
            ("F", false),
            ("TRUE", true),
            ("False", false),
        ];

        for (input, expected) in cases {
            param.set(input).unwrap();
            assert_eq!(into.get(), expected, "input {input:?}");
            assert_eq!(param.to_string(), expected.to_string());
        }
    }

    #[test]
    fn test_bool_param_invalid_leaves_storage() {
        let into = Slot::new(true);
        let mut param = Param::Bool(into.clone());

        for input in ["123", "", "yes", "tRUE", " true"] {
            let result = param.set(input);
            assert!(matches!(result, Err(Error::InvalidBool(_))), "input {input:?}");
            assert!(into.get());
        }
    }

    #[test]
    fn test_string_param() {
        let into = Slot::new(String::new());
        let mut param = Param::Str(into.clone());

        assert!(!param.is_toggle());
        assert!(!param.is_batch());

        for (input, display) in [("a", "\"a\""), ("", "\"\""), ("say \"hi\"", r#""say \"hi\"""#)] {
            param.set(input).unwrap();
            assert_eq!(into.get(), input);
            assert_eq!(param.to_string(), display);
        }
    }

    #[test]
    fn test_int_param() {
        let into = Slot::new(0_i64);
        let mut param = Param::Int(into.clone());

        for (input, expected, display) in [
            ("12", 12, "12"),
            ("0", 0, "0"),
            ("01", 1, "1"),
            ("-7", -7, "-7"),
            ("+3", 3, "3"),
        ] {
            param.set(input).unwrap();
            assert_eq!(into.get(), expected);
            assert_eq!(param.to_string(), display);
        }
    }

    #[test]
    fn test_int_param_invalid_leaves_storage() {
        let into = Slot::new(42_i64);
        let mut param = Param::Int(into.clone());

        for input in ["", "abc", "1.5", " 1", "99999999999999999999"] {
            let result = param.set(input);
            assert!(matches!(result, Err(Error::InvalidInt { .. })), "input {input:?}");
            assert_eq!(into.get(), 42);
        }
    }

    #[test]
    fn test_strings_param() {
        let into = Slot::new(Vec::<String>::new());
        let mut param = Param::Strings(into.clone());

        assert!(param.is_batch());
        assert!(!param.is_toggle());

        param.set_multi(&["a", " b "]).unwrap();
        assert_eq!(into.get(), vec!["a", "b"]);

        param.set("c").unwrap();
        param.set("d").unwrap();

        assert_eq!(into.get(), vec!["a", "b", "c", "d"]);
        assert_eq!(param.to_string(), r#"["a", "b", "c", "d"]"#);
    }

    #[test]
    fn test_strings_set_multi_replaces_and_keeps_empty() {
        let into = Slot::new(vec!["old".to_string()]);
        let mut param = Param::Strings(into.clone());

        param.set_multi(&["x", "  ", "y"]).unwrap();

        assert_eq!(into.get(), vec!["x", "", "y"]);
        assert_eq!(param.to_string(), r#"["x", "", "y"]"#);
    }

    #[test]
    fn test_ints_param() {
        let into = Slot::new(Vec::<i64>::new());
        let mut param = Param::Ints(into.clone());

        assert!(param.is_batch());

        let result = param.set_multi(&["1", "a"]);
        assert!(matches!(result, Err(Error::InvalidBatch { .. })));
        assert!(
            into.get().is_empty(),
            "a failed set_multi should not modify storage"
        );

        param.set_multi(&["1", "  ", "2"]).unwrap();
        assert_eq!(into.get(), vec![1, 2]);

        assert!(param.set("c").is_err());
        assert_eq!(into.get(), vec![1, 2]);

        param.set("3").unwrap();
        assert_eq!(into.get(), vec![1, 2, 3]);

        assert_eq!(param.to_string(), "[1, 2, 3]");
    }

    #[test]
    fn test_empty_sequences_display() {
        assert_eq!(Param::Strings(Slot::new(vec![])).to_string(), "[]");
        assert_eq!(Param::Ints(Slot::new(vec![])).to_string(), "[]");
    }

    #[test]
    #[should_panic(expected = "scalar parameter")]
    fn test_set_multi_on_scalar_panics() {
        let mut param = Param::Int(Slot::new(0));
        let _ = param.set_multi(&["1"]);
    }

    #[test]
    fn test_bindable_kinds() {
        assert_eq!(bool::bind(Slot::new(true)).kind(), "bool");
        assert_eq!(String::bind(Slot::new(String::new())).kind(), "string");
        assert_eq!(i64::bind(Slot::new(0)).kind(), "int");
        assert_eq!(Vec::<String>::bind(Slot::new(vec![])).kind(), "strings");
        assert_eq!(Vec::<i64>::bind(Slot::new(vec![])).kind(), "ints");
    }

    #[test]
    fn test_debug_formatting() {
        let param = Param::Int(Slot::new(5));
        assert_eq!(format!("{param:?}"), "Param::int(5)");
    }
}
