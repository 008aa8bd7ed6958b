//! Primitive types
//!
//! This module defines the integer primitives of the runtime.
//!
//! Primitives are simple, fixed-size, allocation-free building blocks with
//! well-defined wrapping semantics. They do not attempt to provide checked,
//! saturating or arbitrary-precision arithmetic.
//!
//! Current primitives include:
//! - `FixedInt<W>`: a fixed-width integer tagged with one of the ten width
//!   classes, with an alias per class (`Int8` .. `Int128`, `UInt8` ..
//!   `UInt128`)
//! - `DynInt`: the same bit pattern tagged with its class at run time

mod dyn_int;
mod fixed;

pub use dyn_int::DynInt;
pub use fixed::{FixedInt, Primitive, convert_raw};

use crate::width;

pub type Int8 = FixedInt<width::I8>;
pub type Int16 = FixedInt<width::I16>;
pub type Int32 = FixedInt<width::I32>;
pub type Int64 = FixedInt<width::I64>;
pub type Int128 = FixedInt<width::I128>;

pub type UInt8 = FixedInt<width::U8>;
pub type UInt16 = FixedInt<width::U16>;
pub type UInt32 = FixedInt<width::U32>;
pub type UInt64 = FixedInt<width::U64>;
pub type UInt128 = FixedInt<width::U128>;
