//! Everything related to the magnitude of a number.

mod div;
mod magnitude;
mod mul;
mod toom2;

pub use magnitude::Magnitude;
