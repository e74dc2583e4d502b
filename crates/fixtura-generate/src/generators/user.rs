//! User and address generators.

use serde_json::{Value, json};

use fixtura_core::{is_valid_email, validate_age_range};

use crate::errors::GenerationError;
use crate::facade::DataGenerator;
use crate::generators::GeneratorRegistry;
use crate::options::Options;
use crate::source::DeterministicSource;

pub(crate) fn register(registry: &mut GeneratorRegistry) {
    registry.insert_soft("user", user);
    registry.insert("address", address);
}

/// The effective age range is the intersection of `ageMin`/`ageMax` and the
/// `ageRange {min, max}` object; both default to 18..99.
fn user(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let age_min = options.i64("ageMin").unwrap_or(18);
    let age_max = options.i64("ageMax").unwrap_or(99);
    let range = options.object("ageRange");
    let range_min = range
        .and_then(|range| range.get("min"))
        .and_then(Value::as_i64)
        .unwrap_or(18);
    let range_max = range
        .and_then(|range| range.get("max"))
        .and_then(Value::as_i64)
        .unwrap_or(99);

    let effective_min = age_min.max(range_min);
    let effective_max = age_max.min(range_max);
    validate_age_range(effective_min, effective_max)?;

    let mut source = DeterministicSource::resolve(options.seed(), options.locale());
    let email = source.email();
    if !is_valid_email(&email) {
        return Err(fixtura_core::Error::Validation(
            "generated email has an invalid format".to_string(),
        )
        .into());
    }

    let country = match options.str("country") {
        Some(country) => country.to_string(),
        None => source.country(),
    };

    Ok(json!({
        "id": source.uuid(),
        "firstName": source.first_name(),
        "lastName": source.last_name(),
        "email": email,
        "age": source.int(effective_min, effective_max),
        "address": {
            "street": source.street_address(),
            "city": source.city(),
            "state": source.state(),
            "zipCode": source.zip_code(),
            "country": country,
        },
    }))
}

fn address(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());

    Ok(json!({
        "id": source.uuid(),
        "street": source.street_address(),
        "city": source.city(),
        "state": source.state(),
        "zipCode": source.zip_code(),
        "country": source.country(),
        "latitude": source.latitude(),
        "longitude": source.longitude(),
        "isDefault": source.boolean(),
    }))
}
