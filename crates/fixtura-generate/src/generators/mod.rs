//! Entity generator registry.
//!
//! Each domain module registers one function per entity under a stable snake
//! case name. Generators receive the facade (for nested entities that must go
//! through the plugin pipeline) and the caller's options, and return the
//! entity as a JSON object with a fixed key set. Optional fields are emitted
//! as `null` rather than omitted.

pub mod business;
pub mod content;
pub mod ecommerce;
pub mod finance;
pub mod food;
pub mod healthcare;
pub mod realestate;
pub mod social;
pub mod technical;
pub mod travel;
pub mod user;

use std::collections::BTreeMap;

use serde_json::{Value, json};

use crate::errors::GenerationError;
use crate::facade::DataGenerator;
use crate::options::Options;
use crate::source::DeterministicSource;

/// How a generator's failures surface through [`DataGenerator::dispatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorChannel {
    /// Failures propagate as `Err`.
    Strict,
    /// Failures come back as an `{"error": message}` object.
    Soft,
}

pub type GeneratorFn = fn(&DataGenerator, &Options<'_>) -> Result<Value, GenerationError>;

pub struct Entry {
    pub channel: ErrorChannel,
    pub generate: GeneratorFn,
}

/// Name-indexed table of entity generators.
#[derive(Default)]
pub struct GeneratorRegistry {
    entries: BTreeMap<&'static str, Entry>,
}

impl GeneratorRegistry {
    /// Registry with every built-in entity generator.
    pub fn standard() -> Self {
        let mut registry = Self::default();
        user::register(&mut registry);
        ecommerce::register(&mut registry);
        social::register(&mut registry);
        business::register(&mut registry);
        finance::register(&mut registry);
        content::register(&mut registry);
        travel::register(&mut registry);
        realestate::register(&mut registry);
        food::register(&mut registry);
        technical::register(&mut registry);
        healthcare::register(&mut registry);
        registry
    }

    pub fn insert(&mut self, name: &'static str, generate: GeneratorFn) {
        self.entries.insert(
            name,
            Entry {
                channel: ErrorChannel::Strict,
                generate,
            },
        );
    }

    pub fn insert_soft(&mut self, name: &'static str, generate: GeneratorFn) {
        self.entries.insert(
            name,
            Entry {
                channel: ErrorChannel::Soft,
                generate,
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }
}

/// Postal address sub-object shared by several entities.
pub(crate) fn address_object(source: &mut DeterministicSource) -> Value {
    json!({
        "street": source.street_address(),
        "city": source.city(),
        "state": source.state(),
        "zipCode": source.zip_code(),
        "country": source.country(),
    })
}

/// `{id, name, email}` reference to a person.
pub(crate) fn contact_ref(source: &mut DeterministicSource) -> Value {
    json!({
        "id": source.uuid(),
        "name": source.full_name(),
        "email": source.email(),
    })
}
