//! Newtype codes for type-safe entity references.
//!
//! Use the `define_code!` macro to create type-safe wrappers around the
//! string codes the catalog uses (`"bev001"`, `"cat1"`, ...), preventing
//! accidentally mixing codes from different entity types.

/// Macro to define a type-safe code wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<&str>` and `From<String>` implementations
///
/// # Example
///
/// ```rust
/// # use shoplytix_core::define_code;
/// define_code!(ProductCode);
/// define_code!(CategoryId);
///
/// let prod = ProductCode::new("bev001");
/// let cat = CategoryId::new("cat1");
///
/// // These are different types, so this won't compile:
/// // let _: ProductCode = cat;
/// ```
#[macro_export]
macro_rules! define_code {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new code from any string-like value.
            #[must_use]
            pub fn new(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                Self(code.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(code: String) -> Self {
                Self(code)
            }
        }
    };
}

// Define standard entity codes
define_code!(ProductCode);
define_code!(Barcode);
define_code!(CategoryId);
define_code!(UnitId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        let code = ProductCode::new("bev001");
        assert_eq!(code.as_str(), "bev001");
        assert_eq!(code.to_string(), "bev001");
        assert_eq!(code, ProductCode::from("bev001"));
    }

    #[test]
    fn test_codes_hash_by_value() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(CategoryId::new("cat1"), "Beverages");
        assert_eq!(map.get(&CategoryId::from("cat1")), Some(&"Beverages"));
    }
}
