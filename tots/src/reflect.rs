//! The [`Reflect`] trait and its implementations for standard types.
//!
//! ## Deriving vs Manual Implementation
//!
//! Most users will derive this trait using `#[derive(Reflect)]`:
//!
//! ```rust,ignore
//! use tots::Reflect;
//!
//! #[derive(Reflect)]
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//! ```
//!
//! However, you can also implement it manually:
//!
//! ```rust
//! use tots::{FieldDescriptor, Reflect, TypeDescriptor};
//!
//! struct Point {
//!     x: f64,
//!     y: f64,
//! }
//!
//! impl Reflect for Point {
//!     fn type_descriptor() -> TypeDescriptor {
//!         TypeDescriptor::structure("geo::Point", "Point", || {
//!             vec![
//!                 FieldDescriptor::new("x", f64::type_descriptor()),
//!                 FieldDescriptor::new("y", f64::type_descriptor()),
//!             ]
//!         })
//!     }
//! }
//! ```
//!
//! ## Provided Implementations
//!
//! | Rust Type | Descriptor |
//! |-----------|------------|
//! | `bool`, integers, floats | `Scalar` |
//! | `String`, `str` | `Scalar(Kind::String)` |
//! | `char`, `()` | `Scalar` (no TypeScript mapping without an override) |
//! | `&T`, `Box<T>`, `Rc<T>`, `Arc<T>` | same as `T` |
//! | `Option<T>` | `Pointer(T)` |
//! | `Vec<T>`, `VecDeque<T>`, `[T]`, `[T; N]`, `HashSet<T>`, `BTreeSet<T>` | `Array(T)` |
//! | `HashMap<K, V>`, `BTreeMap<K, V>` | `Map(K, V)` |
//! | `serde_json::Value` | `Dynamic` |
//! | `uuid::Uuid` (uuid feature) | `Named` over string |
//! | `chrono` date/time types (chrono feature) | `Named` over string |

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::descriptor::{Kind, TypeDescriptor};

/// Types that can describe themselves to the converter.
pub trait Reflect {
    /// Returns the descriptor of this type.
    fn type_descriptor() -> TypeDescriptor;
}

// =============================================================================
// Primitives
// =============================================================================

macro_rules! impl_reflect_for_scalar {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn type_descriptor() -> TypeDescriptor {
                    TypeDescriptor::Scalar(Kind::$kind)
                }
            }
        )*
    };
}

impl_reflect_for_scalar!(
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => String,
    str => String,
    char => Char,
    () => Unit,
);

// =============================================================================
// Transparent wrappers
// =============================================================================

impl<T: Reflect + ?Sized> Reflect for &T {
    fn type_descriptor() -> TypeDescriptor {
        T::type_descriptor()
    }
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn type_descriptor() -> TypeDescriptor {
        T::type_descriptor()
    }
}

impl<T: Reflect + ?Sized> Reflect for Rc<T> {
    fn type_descriptor() -> TypeDescriptor {
        T::type_descriptor()
    }
}

impl<T: Reflect + ?Sized> Reflect for Arc<T> {
    fn type_descriptor() -> TypeDescriptor {
        T::type_descriptor()
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::pointer(T::type_descriptor())
    }
}

// =============================================================================
// Sequences
// =============================================================================

impl<T: Reflect> Reflect for Vec<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::array(T::type_descriptor())
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::array(T::type_descriptor())
    }
}

impl<T: Reflect> Reflect for [T] {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::array(T::type_descriptor())
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::array(T::type_descriptor())
    }
}

impl<T: Reflect, S> Reflect for HashSet<T, S> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::array(T::type_descriptor())
    }
}

impl<T: Reflect> Reflect for BTreeSet<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::array(T::type_descriptor())
    }
}

// =============================================================================
// Maps
// =============================================================================

impl<K: Reflect, V: Reflect, S> Reflect for HashMap<K, V, S> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::map(K::type_descriptor(), V::type_descriptor())
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::map(K::type_descriptor(), V::type_descriptor())
    }
}

// =============================================================================
// Open types
// =============================================================================

impl Reflect for serde_json::Value {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::Dynamic
    }
}

impl Reflect for serde_json::Map<String, serde_json::Value> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::map(
            TypeDescriptor::Scalar(Kind::String),
            TypeDescriptor::Dynamic,
        )
    }
}

// =============================================================================
// Feature-gated implementations
// =============================================================================

#[cfg(feature = "uuid")]
impl Reflect for uuid::Uuid {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::named("uuid::Uuid", TypeDescriptor::Scalar(Kind::String))
    }
}

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> Reflect for chrono::DateTime<Tz> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::named("chrono::DateTime", TypeDescriptor::Scalar(Kind::String))
    }
}

#[cfg(feature = "chrono")]
impl Reflect for chrono::NaiveDateTime {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::named(
            "chrono::NaiveDateTime",
            TypeDescriptor::Scalar(Kind::String),
        )
    }
}

#[cfg(feature = "chrono")]
impl Reflect for chrono::NaiveDate {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::named("chrono::NaiveDate", TypeDescriptor::Scalar(Kind::String))
    }
}
