//! Food and restaurant generators.

use serde_json::{Value, json};

use crate::errors::GenerationError;
use crate::facade::DataGenerator;
use crate::generators::GeneratorRegistry;
use crate::options::Options;
use crate::source::{self, DeterministicSource};

const CUISINES: &[&str] = &[
    "Italian",
    "Chinese",
    "Japanese",
    "Mexican",
    "Indian",
    "Thai",
    "French",
    "American",
    "Mediterranean",
    "Korean",
];
const PRICE_RANGES: &[&str] = &["$", "$$", "$$$", "$$$$"];
const RESTAURANT_SUFFIXES: &[&str] = &[
    "Restaurant",
    "Bistro",
    "Cafe",
    "Kitchen",
    "Grill",
    "Eatery",
];
const RESTAURANT_FEATURES: &[&str] = &[
    "Outdoor Seating",
    "Takeout",
    "Delivery",
    "Reservations",
    "Wifi",
    "Parking",
    "Wheelchair Accessible",
    "Live Music",
    "Happy Hour",
    "Private Dining",
    "Bar",
    "Kids Menu",
];
const DELIVERY_PARTNERS: &[&str] = &["Uber Eats", "DoorDash", "Grubhub", "Postmates"];
const MENU_CATEGORIES: &[&str] = &[
    "Appetizers",
    "Main Course",
    "Desserts",
    "Beverages",
    "Soups",
    "Salads",
    "Sides",
    "Specials",
];
const DIETARY_OPTIONS: &[&str] = &[
    "vegetarian",
    "vegan",
    "gluten-free",
    "dairy-free",
    "nut-free",
    "keto",
    "halal",
    "kosher",
];
const ALLERGENS: &[&str] = &["Nuts", "Dairy", "Gluten", "Eggs", "Soy", "Fish", "Shellfish"];
const CUSTOMIZATION_NAMES: &[&str] = &["Size", "Spice Level", "Add-ons", "Sauce"];
const ORDER_STATUSES: &[&str] = &[
    "pending",
    "confirmed",
    "preparing",
    "ready",
    "out_for_delivery",
    "delivered",
    "cancelled",
];
const ORDER_TYPES: &[&str] = &["delivery", "pickup", "dine_in"];
const ORDER_PAYMENT_METHODS: &[&str] = &[
    "credit_card",
    "debit_card",
    "cash",
    "apple_pay",
    "google_pay",
];

pub(crate) fn register(registry: &mut GeneratorRegistry) {
    registry.insert("restaurant", restaurant);
    registry.insert("menu_item", menu_item);
    registry.insert("food_order", food_order);
}

fn restaurant(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());

    let cuisine_count = source.int(1, 3);
    let cuisine: Vec<Value> = (0..cuisine_count)
        .map(|_| Value::from(source.pick(CUISINES)))
        .collect();

    let feature_count = source.int(2, 8);
    let features: Vec<Value> = (0..feature_count)
        .map(|_| Value::from(source.pick(RESTAURANT_FEATURES)))
        .collect();

    let image_count = source.int(3, 10);
    let images: Vec<Value> = (0..image_count)
        .map(|_| Value::from(source.image_url()))
        .collect();

    let partner_count = source.int(0, 3);
    let delivery_partners: Vec<Value> = (0..partner_count)
        .map(|_| Value::from(source.pick(DELIVERY_PARTNERS)))
        .collect();

    Ok(json!({
        "id": source.uuid(),
        "name": format!("{} {}", source.company_name(), source.pick(RESTAURANT_SUFFIXES)),
        "description": source.paragraph(),
        "cuisine": cuisine,
        "priceRange": source.pick(PRICE_RANGES),
        "rating": source.float_step(1.0, 5.0, 0.1),
        "reviewCount": source.int(0, 5000),
        "address": {
            "street": source.street_address(),
            "city": source.city(),
            "state": source.state(),
            "zipCode": source.zip_code(),
            "country": source.country(),
        },
        "coordinates": {
            "latitude": source.latitude(),
            "longitude": source.longitude(),
        },
        "phone": source.phone_number(),
        "email": source.email(),
        "website": source.url(),
        "hours": {
            "monday": { "open": "11:00", "close": "22:00" },
            "tuesday": { "open": "11:00", "close": "22:00" },
            "wednesday": { "open": "11:00", "close": "22:00" },
            "thursday": { "open": "11:00", "close": "22:00" },
            "friday": { "open": "11:00", "close": "23:00" },
            "saturday": { "open": "10:00", "close": "23:00" },
            "sunday": { "open": "10:00", "close": "21:00" },
        },
        "features": features,
        "images": images,
        "isOpen": source.boolean(),
        "acceptsReservations": source.boolean(),
        "deliveryPartners": delivery_partners,
        "averageWaitTime": source.int(5, 60),
        "establishedYear": source.year_past(50),
    }))
}

fn menu_item(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());
    let restaurant_id = match options.str("restaurantId") {
        Some(id) => id.to_string(),
        None => source.uuid(),
    };

    let ingredient_count = source.int(3, 10);
    let ingredients: Vec<Value> = (0..ingredient_count)
        .map(|_| Value::from(source.product_material()))
        .collect();

    let allergen_count = source.int(0, 4);
    let allergens: Vec<Value> = (0..allergen_count)
        .map(|_| Value::from(source.pick(ALLERGENS)))
        .collect();

    let dietary_count = source.int(0, 3);
    let dietary_info: Vec<Value> = (0..dietary_count)
        .map(|_| Value::from(source.pick(DIETARY_OPTIONS)))
        .collect();

    let customization_count = source.int(0, 3);
    let mut customizations = Vec::with_capacity(customization_count as usize);
    for _ in 0..customization_count {
        let option_count = source.int(2, 4);
        let mut choices = Vec::with_capacity(option_count as usize);
        for _ in 0..option_count {
            choices.push(json!({
                "name": source.word(),
                "priceModifier": source.price(0.0, 5.0),
            }));
        }
        customizations.push(json!({
            "name": source.pick(CUSTOMIZATION_NAMES),
            "options": choices,
        }));
    }

    Ok(json!({
        "id": source.uuid(),
        "restaurantId": restaurant_id,
        "name": source.product_name(),
        "description": source.sentence(10, 20),
        "category": source.pick(MENU_CATEGORIES),
        "price": source.price(5.0, 50.0),
        "currency": source.currency_code(),
        "image": source.image_url(),
        "ingredients": ingredients,
        "allergens": allergens,
        "dietaryInfo": dietary_info,
        "calories": source.int(100, 2000),
        "preparationTime": source.int(5, 45),
        "spicyLevel": source.int(0, 5),
        "isAvailable": source.boolean(),
        "isPopular": source.boolean(),
        "isNewItem": source.boolean(),
        "rating": source.float_step(1.0, 5.0, 0.1),
        "reviewCount": source.int(0, 500),
        "customizations": customizations,
        "nutritionInfo": {
            "protein": source.int(0, 50),
            "carbs": source.int(0, 100),
            "fat": source.int(0, 50),
            "fiber": source.int(0, 20),
            "sodium": source.int(0, 2000),
        },
    }))
}

fn food_order(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());
    let item_count = options.i64("itemCount").unwrap_or(3).max(1);

    let mut items = Vec::with_capacity(item_count as usize);
    let mut subtotal = 0.0;
    for _ in 0..item_count {
        let price = source.price(5.0, 30.0);
        let quantity = source.int(1, 5);
        let line_subtotal = source::round_currency(price * quantity as f64);
        subtotal += line_subtotal;
        let customizations = match source.maybe(|source| Value::from(source.word())) {
            Value::Null => json!([]),
            word => json!([word]),
        };
        items.push(json!({
            "id": source.uuid(),
            "name": source.product_name(),
            "price": price,
            "quantity": quantity,
            "subtotal": line_subtotal,
            "specialInstructions": source.maybe(|source| Value::from(source.sentence(3, 10))),
            "customizations": customizations,
        }));
    }

    let delivery_fee = source.price(0.0, 10.0);
    let tip = source::round_currency(subtotal * source.float_step(0.1, 0.25, 0.01));
    let tax = source::round_currency(subtotal * 0.08);

    Ok(json!({
        "id": source.uuid(),
        "orderNumber": format!("ORD-{}", source.numeric_string(8)),
        "status": source.pick(ORDER_STATUSES),
        "type": source.pick(ORDER_TYPES),
        "restaurant": {
            "id": source.uuid(),
            "name": format!("{} Restaurant", source.company_name()),
            "address": source.street_address(),
            "phone": source.phone_number(),
        },
        "customer": {
            "id": source.uuid(),
            "name": source.full_name(),
            "phone": source.phone_number(),
            "email": source.email(),
        },
        "deliveryAddress": {
            "street": source.street_address(),
            "city": source.city(),
            "state": source.state(),
            "zipCode": source.zip_code(),
            "instructions": source.maybe(|source| Value::from(source.sentence(3, 10))),
        },
        "items": items,
        "subtotal": source::round_currency(subtotal),
        "deliveryFee": delivery_fee,
        "tax": tax,
        "tip": tip,
        "total": source::round_currency(subtotal + delivery_fee + tax + tip),
        "paymentMethod": source.pick(ORDER_PAYMENT_METHODS),
        "isPaid": source.boolean(),
        "estimatedDeliveryTime": source.timestamp_soon(1),
        "actualDeliveryTime": source.maybe(|source| Value::from(source.timestamp_recent(1))),
        "driver": source.maybe(|source| json!({
            "id": source.uuid(),
            "name": source.full_name(),
            "phone": source.phone_number(),
            "vehicle": source.vehicle_model(),
            "rating": source.float_step(3.0, 5.0, 0.1),
        })),
        "rating": source.maybe(|source| Value::from(source.int(1, 5))),
        "review": source.maybe(|source| Value::from(source.sentence(3, 10))),
        "createdAt": source.timestamp_recent(7),
        "updatedAt": source.timestamp_recent(1),
    }))
}
