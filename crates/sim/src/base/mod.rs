//! Foundational storage and randomness shared by the simulation.
//!
//! - [`ListArena`]: slot-vector doubly linked list holding a population's
//!   individuals.
//! - [`RandomSource`]: the injectable stream of Bernoulli, Poisson, Beta and
//!   Gamma draws, with [`DrawStream`] as the default implementation.

pub mod arena;
pub mod random;

pub use arena::{Handle, ListArena};
pub use random::{DrawStream, RandomSource, RngSource};
