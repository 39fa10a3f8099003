//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form option pricing.
//!
//! This crate provides:
//! - The Black-Scholes-Merton kernel and `AnalyticStrategy`
//! - The Greeks calculator shared by closed-form pricing
//! - Standard normal distribution functions
//!
//! ## Design Principles
//!
//! - **Static dispatch**: strategies are plain values implementing
//!   `pricer_core::traits::PricingStrategy`
//! - **Validation at the boundary**: every strategy re-checks its inputs and
//!   reports the offending field

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
