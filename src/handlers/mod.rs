pub mod categories;
pub mod questions;
pub mod quizzes;

use crate::rejections::AppError;

/// Deserialize an optional id that may be either a JSON number or a string
/// containing a number. HTML forms always send values as strings.
fn deserialize_optional_i64<'de, D: serde::Deserializer<'de>>(
    d: D,
) -> Result<Option<i64>, D::Error> {
    struct Vis;
    impl<'de> serde::de::Visitor<'de> for Vis {
        type Value = Option<i64>;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("number, numeric string or null")
        }
        fn visit_none<E: serde::de::Error>(self) -> Result<Option<i64>, E> {
            Ok(None)
        }
        fn visit_unit<E: serde::de::Error>(self) -> Result<Option<i64>, E> {
            Ok(None)
        }
        fn visit_some<De: serde::Deserializer<'de>>(
            self,
            d: De,
        ) -> Result<Option<i64>, De::Error> {
            d.deserialize_any(self)
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Option<i64>, E> {
            Ok(Some(v))
        }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Option<i64>, E> {
            i64::try_from(v).map(Some).map_err(E::custom)
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Option<i64>, E> {
            v.trim().parse().map(Some).map_err(E::custom)
        }
    }
    d.deserialize_option(Vis)
}

pub async fn not_found() -> AppError {
    AppError::NotFound("resource not found")
}

/// A known path asked for with a method it does not serve.
pub async fn method_not_found() -> AppError {
    AppError::NotFound("resource not found for this method")
}
