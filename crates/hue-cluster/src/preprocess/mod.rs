//! Preprocessing applied before the color frequency table is built.
//!
//! The only stage is chromatic-aberration reduction (see
//! [`reduce_aberration`]). It must run before color counting because it
//! merges distinct colors and changes their frequencies.

mod aberration;
mod cylindrical;
mod options;

pub use aberration::reduce_aberration;
pub use options::AberrationOptions;
