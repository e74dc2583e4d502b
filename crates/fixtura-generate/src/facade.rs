use serde_json::{Value, json};

use fixtura_core::validate_positive_integer;

use crate::errors::GenerationError;
use crate::generators::{ErrorChannel, GeneratorRegistry};
use crate::options::Options;
use crate::plugins::{Plugin, PluginPipeline};

/// Entry point for entity generation.
///
/// Owns the generator registry and the plugin pipeline. Every generated
/// entity, including nested sub-entities produced through the facade, passes
/// through the pipeline before it is returned.
pub struct DataGenerator {
    registry: GeneratorRegistry,
    pipeline: PluginPipeline,
}

impl Default for DataGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DataGenerator {
    pub fn new() -> Self {
        Self {
            registry: GeneratorRegistry::standard(),
            pipeline: PluginPipeline::new(),
        }
    }

    pub fn register_plugin(&mut self, plugin: Plugin) {
        self.pipeline.register(plugin);
    }

    pub fn plugin_count(&self) -> usize {
        self.pipeline.len()
    }

    /// Registered generator names, sorted.
    pub fn generator_names(&self) -> Vec<&'static str> {
        self.registry.names()
    }

    /// Generate one entity, uniform `Result` surface.
    pub fn generate(&self, name: &str, options: Option<&Value>) -> Result<Value, GenerationError> {
        let entry = self
            .registry
            .get(name)
            .ok_or_else(|| GenerationError::UnknownGenerator(name.to_string()))?;
        if options.is_some_and(|value| !value.is_object() && !value.is_null()) {
            return Err(GenerationError::InvalidOptions(
                "options must be a JSON object".to_string(),
            ));
        }
        let opts = options.map(Options::new).unwrap_or_else(Options::empty);
        let entity = (entry.generate)(self, &opts)?;
        Ok(self.pipeline.apply(entity))
    }

    /// Generate one entity, preserving the per-family error contract of the
    /// task surface: generators on the soft channel report failures as an
    /// `Ok({"error": message})` object instead of `Err`.
    pub fn dispatch(&self, name: &str, options: Option<&Value>) -> Result<Value, GenerationError> {
        let channel = self
            .registry
            .get(name)
            .map(|entry| entry.channel)
            .ok_or_else(|| GenerationError::UnknownGenerator(name.to_string()))?;
        match self.generate(name, options) {
            Err(error) if channel == ErrorChannel::Soft => {
                Ok(json!({ "error": error.to_string() }))
            }
            other => other,
        }
    }

    /// Generate `count` entities by registry name.
    ///
    /// When a seed is present the i-th item is generated with `seed + i`, so
    /// items differ from each other while the whole batch stays reproducible.
    /// Offsets wrap on overflow; the PRNG truncates the seed to 64 bits
    /// either way, so wrapped seeds stay deterministic.
    pub fn generate_bulk(
        &self,
        name: &str,
        count: i64,
        options: Option<&Value>,
    ) -> Result<Vec<Value>, GenerationError> {
        if self.registry.get(name).is_none() {
            return Err(GenerationError::UnknownGenerator(name.to_string()));
        }
        self.generate_bulk_with(|generator, options| generator.generate(name, options), count, options)
    }

    /// Generate `count` entities with a caller-supplied function, same
    /// seed-offsetting contract as [`generate_bulk`](Self::generate_bulk).
    pub fn generate_bulk_with<F>(
        &self,
        generate: F,
        count: i64,
        options: Option<&Value>,
    ) -> Result<Vec<Value>, GenerationError>
    where
        F: Fn(&Self, Option<&Value>) -> Result<Value, GenerationError>,
    {
        validate_positive_integer(count, "count")?;
        let opts = options.map(Options::new).unwrap_or_else(Options::empty);
        let base_seed = opts.seed();

        let mut items = Vec::with_capacity(count as usize);
        for index in 0..count {
            let item = match base_seed {
                Some(seed) => {
                    let item_options = opts.with_seed(seed.wrapping_add(index));
                    generate(self, Some(&item_options))?
                }
                None => generate(self, options)?,
            };
            items.push(item);
        }
        Ok(items)
    }

    /// Generate `count` products tagged with `relatedToProductId`.
    ///
    /// A non-positive count yields an empty list rather than an error; only
    /// the seed and locale are forwarded to the product generator.
    pub fn generate_related_products(
        &self,
        main_product_id: &str,
        count: i64,
        options: Option<&Value>,
    ) -> Result<Vec<Value>, GenerationError> {
        if count <= 0 {
            return Ok(Vec::new());
        }
        let opts = options.map(Options::new).unwrap_or_else(Options::empty);
        let base_seed = opts.seed();

        let mut products = Vec::with_capacity(count as usize);
        for index in 0..count {
            let item_options = opts.seed_locale_only(base_seed.map(|seed| seed.wrapping_add(index)));
            let mut product = self.generate("product", Some(&item_options))?;
            if let Some(map) = product.as_object_mut() {
                map.insert(
                    "relatedToProductId".to_string(),
                    Value::from(main_product_id),
                );
            }
            products.push(product);
        }
        Ok(products)
    }

    /// Generate a product together with its related products.
    ///
    /// The related batch is seeded `seed + 100` so it does not replay the
    /// main product's value sequence.
    pub fn generate_product_with_relations(
        &self,
        options: Option<&Value>,
    ) -> Result<Value, GenerationError> {
        let opts = options.map(Options::new).unwrap_or_else(Options::empty);
        let related_count = opts.i64("relatedProductCount").unwrap_or(3);

        let main_options = opts.seed_locale_only(opts.seed());
        let mut main_product = self.generate("product", Some(&main_options))?;
        let main_id = main_product
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let related_options = opts.seed_locale_only(opts.seed().map(|seed| seed.wrapping_add(100)));
        let related =
            self.generate_related_products(&main_id, related_count, Some(&related_options))?;
        if let Some(map) = main_product.as_object_mut() {
            map.insert("relatedProducts".to_string(), Value::Array(related));
        }
        Ok(main_product)
    }
}
