//! Ready-made card sets.
//!
//! The engine is content-agnostic: cards are catalog data plus hook
//! implementations, and sets bundle the two. Only the basic set ships
//! today.

pub mod basic;
