use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Implements [`AggregateId`] for an `i64` newtype.
///
/// Route parameters arrive as text; surrounding whitespace is ignored.
#[macro_export]
macro_rules! impl_integer_aggregate_id {
    ($ty:ident, $label:literal) => {
        impl $crate::domain::common::AggregateId for $ty {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                s.trim()
                    .parse::<i64>()
                    .map($ty)
                    .map_err(|e| format!("Invalid {} '{}': {}", $label, s, e))
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
