//! # Random Number Generation
//!
//! Seeded pseudo-random number generation for Monte Carlo pricing.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator is seeded; the same seed always
//!   yields the same sequence
//! - **Seed splitting**: parallel work units draw from independent streams
//!   derived from one user seed via [`derive_chunk_seed`], so results do not
//!   depend on the number of worker threads
//! - **Efficiency**: zero-allocation batch operations via `&mut [f64]` slices
//!
//! ## Module Structure
//!
//! - [`prng`]: Pseudo-random number generator wrapper with seed management
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Standard normal variates (mean=0, std=1)
//! let normal_value = rng.gen_normal();
//!
//! // Batch generation into pre-allocated buffer (zero allocation)
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//!
//! // Independent stream for work unit 3
//! let mut chunk_rng = PricerRng::for_chunk(12345, 3);
//! let _ = chunk_rng.gen_normal();
//! ```

pub mod prng;

// Public re-exports
pub use prng::{derive_chunk_seed, PricerRng};
