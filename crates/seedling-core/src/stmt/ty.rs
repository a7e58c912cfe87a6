use super::Value;
use crate::{Error, Result};

/// A column type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// String type
    String,

    /// UUID
    Uuid,

    /// The type of `Value::Null`. Never declared on a field.
    Null,
}

impl Type {
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::I32 | Self::I64)
    }

    /// Converts `value` into this type.
    ///
    /// Integers widen freely and narrow only when in range. Strings and UUIDs
    /// convert both ways. Null passes through unchanged.
    pub fn cast(&self, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(value);
        }

        Ok(match (value, self) {
            (value @ Value::Bool(_), Self::Bool) => value,
            (value @ Value::I32(_), Self::I32) => value,
            (value @ Value::I64(_), Self::I64) => value,
            (value @ Value::String(_), Self::String) => value,
            (value @ Value::Uuid(_), Self::Uuid) => value,
            (Value::I32(v), Self::I64) => Value::I64(v.into()),
            (Value::I64(v), Self::I32) => match i32::try_from(v) {
                Ok(v) => Value::I32(v),
                Err(_) => return Err(Error::type_conversion(Value::I64(v), "i32")),
            },
            (Value::String(v), Self::Uuid) => Value::Uuid(v.parse()?),
            (Value::Uuid(v), Self::String) => Value::String(v.to_string()),
            (value, _) => return Err(Error::type_conversion(value, self.name())),
        })
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::String => "String",
            Self::Uuid => "Uuid",
            Self::Null => "null",
        }
    }
}
