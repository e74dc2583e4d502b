//! Deterministic test-fixture entity generation for Fixtura.
//!
//! This crate turns `{seed, locale}` options into structurally valid JSON
//! entities (users, products, orders, invoices, ...) through a registry of
//! generators and a post-generation plugin pipeline. Equal seeds replay
//! byte-identical entities.

pub mod errors;
pub mod facade;
pub mod generators;
pub mod options;
pub mod plugins;
pub mod source;

pub use errors::GenerationError;
pub use facade::DataGenerator;
pub use options::Options;
pub use plugins::{Plugin, PluginError, PluginPipeline};
pub use source::{DeterministicSource, LocaleKey};
