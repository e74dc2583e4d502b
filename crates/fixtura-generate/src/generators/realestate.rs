//! Real estate generators.

use serde_json::{Value, json};

use crate::errors::GenerationError;
use crate::facade::DataGenerator;
use crate::generators::GeneratorRegistry;
use crate::options::Options;
use crate::source::{self, DeterministicSource};

const PROPERTY_TYPES: &[&str] = &[
    "house",
    "apartment",
    "condo",
    "townhouse",
    "land",
    "commercial",
    "industrial",
];
const PROPERTY_STATUSES: &[&str] = &["for_sale", "for_rent", "sold", "pending", "off_market"];
const PROPERTY_FEATURES: &[&str] = &[
    "Swimming Pool",
    "Garage",
    "Garden",
    "Fireplace",
    "Central AC",
    "Hardwood Floors",
    "Granite Counters",
    "Stainless Appliances",
    "Walk-in Closet",
    "Smart Home",
    "Solar Panels",
    "Security System",
];
const OPEN_HOUSE_STARTS: &[&str] = &["10:00", "11:00", "12:00", "13:00", "14:00"];
const OPEN_HOUSE_ENDS: &[&str] = &["15:00", "16:00", "17:00", "18:00"];

pub(crate) fn register(registry: &mut GeneratorRegistry) {
    registry.insert("property", property);
}

fn property(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());
    let property_type = match options.str("type") {
        Some(property_type) => property_type.to_string(),
        None => source.pick(PROPERTY_TYPES),
    };

    let feature_count = source.int(3, 10);
    let features: Vec<Value> = (0..feature_count)
        .map(|_| Value::from(source.pick(PROPERTY_FEATURES)))
        .collect();

    let image_count = source.int(3, 15);
    let images: Vec<Value> = (0..image_count)
        .map(|_| Value::from(source.image_url()))
        .collect();

    let open_house_count = source.int(0, 3);
    let mut open_houses = Vec::with_capacity(open_house_count as usize);
    for _ in 0..open_house_count {
        open_houses.push(json!({
            "date": source::iso_date(source.date_future(36)),
            "startTime": source.pick(OPEN_HOUSE_STARTS),
            "endTime": source.pick(OPEN_HOUSE_ENDS),
        }));
    }

    Ok(json!({
        "id": source.uuid(),
        "listingId": format!("MLS-{}", source.numeric_string(8)),
        "type": property_type,
        "status": source.pick(PROPERTY_STATUSES),
        "title": source.sentence(4, 8),
        "description": source.paragraphs(3),
        "address": {
            "street": source.street_address(),
            "city": source.city(),
            "state": source.state(),
            "zipCode": source.zip_code(),
            "country": source.country(),
            "coordinates": {
                "latitude": source.latitude(),
                "longitude": source.longitude(),
            },
        },
        "price": source.int(50_000, 10_000_000),
        "currency": source.currency_code(),
        "pricePerSqFt": source.int(50, 1000),
        "bedrooms": source.int(0, 10),
        "bathrooms": source.float_step(1.0, 8.0, 0.5),
        "squareFeet": source.int(500, 10_000),
        "lotSize": source.float_step(0.1, 10.0, 0.01),
        "yearBuilt": source.year_past(100),
        "features": features,
        "images": images,
        "virtualTourUrl": source.maybe(|source| Value::from(source.url())),
        "agent": {
            "id": source.uuid(),
            "name": source.full_name(),
            "phone": source.phone_number(),
            "email": source.email(),
            "company": format!("{} Realty", source.company_name()),
            "photo": source.avatar_url(),
        },
        "openHouses": open_houses,
        "listedDate": source::iso_date(source.datetime_recent(90).date()),
        "daysOnMarket": source.int(1, 180),
        "views": source.int(0, 10_000),
        "saves": source.int(0, 500),
    }))
}
