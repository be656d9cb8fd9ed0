//! Deterministic random numbers for simulation and game code.
//!
//! [`Pcg32`] is a PCG-XSH-RR generator with a single 64-bit state word. Given
//! the same seed it produces the same sequence on every run and platform,
//! which is what replays, procedural content, and tests need.
//!
//! On top of the raw 32-bit stream:
//!
//! - [`Pcg32::uniform_u32`] / [`Pcg32::uniform_i32`]: unbiased half-open
//!   integer ranges, two draws each, no rejection loop.
//! - [`Pcg32::uniform_f32_01`], [`Pcg32::uniform_f32`], [`Pcg32::probability`],
//!   [`Pcg32::next_bool`].
//! - [`shuffle()`] and [`shuffle_chunks`]: Fisher–Yates over typed slices or
//!   fixed-size records in a byte buffer.
//!
//! `Pcg32` also implements `rand_core::RngCore` and `SeedableRng`, so it can
//! drive anything in the `rand` ecosystem.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod pcg;
pub mod shuffle;

pub use pcg::Pcg32;
pub use shuffle::{shuffle, shuffle_chunks};
