#![warn(missing_docs)]
//! Reference environments implementing the [`Mdp`](tabrl_core::Mdp)
//! contract.
//!
//! Two small, fully enumerable tasks are provided:
//!
//! * [`GridWorld`] — navigation on a rectangular grid with impassable cells,
//!   stochastic perpendicular drift, and signed terminal rewards.
//! * [`BitFlip`] — a fixed-length bit-string toggling puzzle where flipping
//!   a bit may flip its right neighbor instead.
//!
//! Both environments are configured with serde-derived config structs and
//! built with an explicit random seed, so runs are reproducible:
//!
//! ```
//! use tabrl_core::Mdp;
//! use tabrl_env::{GridWorld, GridWorldConfig};
//!
//! let mut env = GridWorld::build(&GridWorldConfig::default(), 42).unwrap();
//! let step = env.reset();
//! assert_eq!(step.state, (0, 0));
//! ```
mod bitflip;
mod grid;
pub use bitflip::{bit_strings, BitFlip, BitFlipConfig};
pub use grid::{GridState, GridWorld, GridWorldConfig, DOWN, LEFT, RIGHT, UP};
