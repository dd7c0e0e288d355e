//! Astro-int (astronomically large integer numbers) is a library that implements arbitrary
//! precision integers and exact integer math routines: the factorial, the integer square root,
//! and the binomial coefficient.
//!
//! The routines are pure functions over [BigInt]: there is no global state, no configuration,
//! and no initialization. All arithmetic is exact; the algorithms are chosen to stay fast when
//! the values grow to thousands of digits: the factorial is computed with a balanced product
//! tree, the square root with a Newton iteration over exact division, and the multiplication
//! of large numbers uses Karatsuba splitting.
//!
//! ## Examples
//!
//! ```rust
//! use astro_int::{comb, factorial, isqrt, BigInt, Error};
//!
//! // 30! has 33 decimal digits.
//! let f = factorial(30).unwrap();
//! assert_eq!(f.to_string(), "265252859812191058636308480000000");
//!
//! // The integer square root of 10^18.
//! let x = isqrt(1_000_000_000_000_000_000u64).unwrap();
//! assert_eq!(x, BigInt::from(1_000_000_000u32));
//!
//! // The number of poker hands.
//! let c = comb(52, 5).unwrap();
//! assert_eq!(c, BigInt::from(2598960u32));
//!
//! // Negative and non-integral arguments are rejected.
//! assert_eq!(factorial(-9), Err(Error::NegativeValue));
//! assert_eq!(isqrt(8.9), Err(Error::NotIntegral));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::module_inception)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod common;
mod conv;
mod defs;
mod magnitude;
mod num;
mod ops;
mod value;

#[cfg(feature = "std")]
mod for_3rd;

pub use crate::conv::ParseBigIntError;
pub use crate::defs::Error;
pub use crate::defs::Sign;
pub use crate::defs::Word;
pub use crate::num::BigInt;
pub use crate::ops::comb;
pub use crate::ops::factorial;
pub use crate::ops::isqrt;
pub use crate::value::Value;

pub use crate::defs::WORD_BASE;
pub use crate::defs::WORD_BIT_SIZE;
pub use crate::defs::WORD_MAX;
pub use crate::defs::WORD_SIGNIFICANT_BIT;
