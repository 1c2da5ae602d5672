// SPDX-License-Identifier: MIT OR Apache-2.0
//! Truthiness for the values a sequence is seeded from.
//!
//! Initial values arrive as a mixed bag (flags, counters, names, lookups),
//! and each one collapses to a single bit. [`Truthy`] is the seam that makes
//! that collapse explicit per type instead of leaving it to ad-hoc casts at
//! call sites. The [`bits!`](crate::bits) macro erases the concrete types so
//! one sequence can mix them freely.
//!
//! The rules follow the usual scripting-language conventions: zero numbers,
//! empty text, empty collections, and `None` are falsy; everything else is
//! truthy. Notably `"0"` is a non-empty string and therefore truthy.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// One-bit interpretation of a value.
///
/// Object-safe so heterogeneous inputs can be passed as `&[&dyn Truthy]`.
pub trait Truthy {
    /// `true` if the value should seed a set bit.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_truthy_for_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Truthy for $ty {
                // NaN compares unequal to zero and is therefore truthy;
                // negative zero compares equal and is falsy.
                fn is_truthy(&self) -> bool {
                    *self != 0.0
                }
            }
        )*
    };
}

impl_truthy_for_float!(f32, f64);

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T, const N: usize> Truthy for [T; N] {
    fn is_truthy(&self) -> bool {
        N != 0
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V, S> Truthy for HashMap<K, V, S> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> Truthy for BTreeMap<K, V> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T, S> Truthy for HashSet<T, S> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for BTreeSet<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    /// `None` is falsy; `Some(v)` delegates to `v`.
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
