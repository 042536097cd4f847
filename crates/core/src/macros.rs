// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros for reducing boilerplate.
//!
//! - [`simple_display!`] — `Display` impl mapping enum variants to string literals
//! - [`named_variants!`] — `as_str`, `Display` and `FromStr` for unit-only enums

/// Generate a `Display` impl that maps enum variants to string literals.
///
/// ```ignore
/// crate::simple_display! {
///     MyEnum {
///         Foo => "foo",
///         Bar(..) => "bar",
///     }
/// }
/// ```
#[macro_export]
macro_rules! simple_display {
    ($enum:ty { $( $variant:ident $(( $($ignore:tt)* ))? => $str:expr ),+ $(,)? }) => {
        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    $( Self::$variant $(( $($ignore)* ))? => $str, )+
                })
            }
        }
    };
}

/// Generate `as_str()`, `Display` and `FromStr` for a unit-only enum whose
/// variants map one-to-one onto string names.
///
/// `FromStr` fails with the given error type, built from the rejected input.
///
/// ```ignore
/// crate::named_variants! {
///     Color, UnknownColor {
///         Red => "red",
///         Blue => "blue",
///     }
/// }
/// ```
#[macro_export]
macro_rules! named_variants {
    ($enum:ident, $err:ident { $( $variant:ident => $str:literal ),+ $(,)? }) => {
        impl $enum {
            /// Canonical lowercase name.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $str, )+
                }
            }
        }

        $crate::simple_display! {
            $enum { $( $variant => $str ),+ }
        }

        impl std::str::FromStr for $enum {
            type Err = $err;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $str => Ok(Self::$variant), )+
                    other => Err($err(other.to_string())),
                }
            }
        }
    };
}
