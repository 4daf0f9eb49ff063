//! foldmap: per-fold target relabeling for cross-validated datasets.
//!
//! This crate provides a typed, row-aligned sample-attribute `Dataset`, a
//! small `Mapper` abstraction for chainable dataset transformations, and
//! `RelabelMapper`, which rewrites the targets of the currently held-out
//! partition of a cross-validation split using a per-chunk label table.
//!
//! The design favors small, testable modules: partitioning itself is owned
//! by the caller; this crate only consumes the resulting partition flags.
pub mod config;
pub mod dataset;
pub mod error;
pub mod io;
pub mod mappers;
