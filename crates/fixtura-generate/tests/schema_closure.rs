//! Entities expose fixed, closed key sets: optional fields are present with
//! `null` rather than omitted.

use serde_json::{Value, json};

use fixtura_core::is_valid_email;
use fixtura_generate::DataGenerator;

fn keys_of(entity: &Value) -> Vec<&str> {
    entity
        .as_object()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

fn assert_keys(entity: &Value, expected: &[&str]) {
    let mut actual = keys_of(entity);
    actual.sort_unstable();
    let mut expected: Vec<&str> = expected.to_vec();
    expected.sort_unstable();
    assert_eq!(actual, expected);
}

#[test]
fn user_schema_is_closed() {
    let generator = DataGenerator::new();
    let user = generator
        .generate("user", Some(&json!({"seed": 1})))
        .expect("user");
    assert_keys(
        &user,
        &["id", "firstName", "lastName", "email", "age", "address"],
    );
    assert_keys(
        user.get("address").expect("address"),
        &["street", "city", "state", "zipCode", "country"],
    );
    let email = user.get("email").and_then(Value::as_str).expect("email");
    assert!(is_valid_email(email));
}

#[test]
fn product_schema_is_closed() {
    let generator = DataGenerator::new();
    let product = generator
        .generate("product", Some(&json!({"seed": 2})))
        .expect("product");
    assert_keys(
        &product,
        &[
            "id",
            "name",
            "description",
            "price",
            "category",
            "inStock",
            "image",
            "sku",
            "relatedProducts",
        ],
    );
    let sku = product.get("sku").and_then(Value::as_str).expect("sku");
    assert_eq!(sku.len(), 8);
    assert!(sku.chars().all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit()));
}

#[test]
fn product_custom_fields_are_merged() {
    let generator = DataGenerator::new();
    let product = generator
        .generate(
            "product",
            Some(&json!({"seed": 2, "customFields": {"price": 9.99, "vendor": "Acme"}})),
        )
        .expect("product");
    assert_eq!(product.get("price"), Some(&json!(9.99)));
    assert_eq!(product.get("vendor"), Some(&json!("Acme")));
}

#[test]
fn representative_entities_expose_closed_key_sets() {
    let generator = DataGenerator::new();
    let expected: &[(&str, &[&str])] = &[
        (
            "address",
            &[
                "id", "street", "city", "state", "zipCode", "country", "latitude", "longitude",
                "isDefault",
            ],
        ),
        (
            "order",
            &[
                "id",
                "customerName",
                "orderDate",
                "products",
                "totalAmount",
                "shippingAddress",
            ],
        ),
        (
            "social_profile",
            &[
                "id",
                "platform",
                "username",
                "displayName",
                "bio",
                "avatarUrl",
                "coverImageUrl",
                "followers",
                "following",
                "postsCount",
                "isVerified",
                "isPrivate",
                "joinedDate",
                "website",
                "location",
            ],
        ),
        (
            "company",
            &[
                "id",
                "name",
                "industry",
                "foundedYear",
                "employees",
                "revenue",
                "headquarters",
                "ceo",
                "description",
                "stockSymbol",
                "website",
            ],
        ),
        (
            "credit_card",
            &[
                "id",
                "cardNumber",
                "cardHolder",
                "expiryDate",
                "cvv",
                "cardType",
                "isDefault",
            ],
        ),
        (
            "blog_post",
            &[
                "id",
                "slug",
                "title",
                "excerpt",
                "content",
                "featuredImage",
                "status",
                "author",
                "category",
                "tags",
                "readingTime",
                "views",
                "likes",
                "commentsCount",
                "isFeatured",
                "allowComments",
                "seo",
                "publishedAt",
                "updatedAt",
            ],
        ),
        (
            "vehicle",
            &[
                "id",
                "make",
                "model",
                "type",
                "color",
                "fuelType",
                "year",
                "mileage",
                "price",
                "vin",
                "licensePlate",
            ],
        ),
        (
            "property",
            &[
                "id",
                "listingId",
                "type",
                "status",
                "title",
                "description",
                "address",
                "price",
                "currency",
                "pricePerSqFt",
                "bedrooms",
                "bathrooms",
                "squareFeet",
                "lotSize",
                "yearBuilt",
                "features",
                "images",
                "virtualTourUrl",
                "agent",
                "openHouses",
                "listedDate",
                "daysOnMarket",
                "views",
                "saves",
            ],
        ),
        (
            "restaurant",
            &[
                "id",
                "name",
                "description",
                "cuisine",
                "priceRange",
                "rating",
                "reviewCount",
                "address",
                "coordinates",
                "phone",
                "email",
                "website",
                "hours",
                "features",
                "images",
                "isOpen",
                "acceptsReservations",
                "deliveryPartners",
                "averageWaitTime",
                "establishedYear",
            ],
        ),
        (
            "api_response",
            &[
                "success",
                "statusCode",
                "message",
                "data",
                "error",
                "meta",
                "pagination",
            ],
        ),
        (
            "medical_record",
            &[
                "patientId",
                "name",
                "dateOfBirth",
                "gender",
                "bloodType",
                "height",
                "weight",
                "allergies",
                "medications",
                "diagnoses",
                "treatmentHistory",
                "upcomingAppointments",
                "primaryCarePhysician",
            ],
        ),
    ];

    for (name, keys) in expected {
        let entity = generator
            .generate(name, Some(&json!({"seed": 4})))
            .expect(name);
        let mut actual = keys_of(&entity);
        actual.sort_unstable();
        let mut want: Vec<&str> = keys.to_vec();
        want.sort_unstable();
        assert_eq!(actual, want, "'{name}' key set changed");
    }
}

#[test]
fn optional_fields_are_null_not_absent() {
    let generator = DataGenerator::new();
    // Keys with a maybe() value must exist for every seed.
    for seed in 0..10 {
        let notification = generator
            .generate("notification", Some(&json!({"seed": seed})))
            .expect("notification");
        for key in ["actionUrl", "imageUrl", "senderId", "senderName", "expiresAt"] {
            assert!(
                notification.get(key).is_some(),
                "seed {seed}: key '{key}' missing"
            );
        }
    }
}

#[test]
fn review_values_stay_in_their_documented_ranges() {
    let generator = DataGenerator::new();
    for seed in 0..20 {
        let review = generator
            .generate("review", Some(&json!({"seed": seed})))
            .expect("review");
        let rating = review.get("rating").and_then(Value::as_i64).expect("rating");
        assert!((1..=5).contains(&rating));
        let helpful = review.get("helpful").and_then(Value::as_i64).expect("helpful");
        assert!((0..=100).contains(&helpful));
        let id = review.get("id").and_then(Value::as_str).expect("id");
        assert!(id.parse::<u32>().is_ok());
    }
}

#[test]
fn back_references_are_honored() {
    let generator = DataGenerator::new();
    let review = generator
        .generate("review", Some(&json!({"seed": 3, "productId": "prod-9"})))
        .expect("review");
    assert_eq!(review.get("productId"), Some(&json!("prod-9")));

    let comment = generator
        .generate(
            "comment",
            Some(&json!({"seed": 3, "postId": "post-1", "parentId": "c-1"})),
        )
        .expect("comment");
    assert_eq!(comment.get("postId"), Some(&json!("post-1")));
    assert_eq!(comment.get("parentId"), Some(&json!("c-1")));
    // Replies never report nested replies.
    assert_eq!(comment.get("repliesCount"), Some(&json!(0)));
}

#[test]
fn property_measurements_snap_to_their_steps() {
    let generator = DataGenerator::new();
    for seed in 0..20 {
        let property = generator
            .generate("property", Some(&json!({"seed": seed})))
            .expect("property");
        let bathrooms = property
            .get("bathrooms")
            .and_then(Value::as_f64)
            .expect("bathrooms");
        let doubled = bathrooms * 2.0;
        assert!((doubled - doubled.round()).abs() < 1e-9, "bathrooms {bathrooms}");
    }
}

#[test]
fn cart_totals_are_consistent() {
    let generator = DataGenerator::new();
    let cart = generator
        .generate("cart", Some(&json!({"seed": 11, "itemCount": 4})))
        .expect("cart");

    let items = cart.get("items").and_then(Value::as_array).expect("items");
    assert_eq!(items.len(), 4);

    let subtotal: f64 = items
        .iter()
        .filter_map(|item| item.get("subtotal").and_then(Value::as_f64))
        .sum();
    let reported = cart.get("subtotal").and_then(Value::as_f64).expect("subtotal");
    assert!((reported - (subtotal * 100.0).round() / 100.0).abs() < 1e-9);

    let tax = cart.get("tax").and_then(Value::as_f64).expect("tax");
    assert!((tax - (reported * 0.08 * 100.0).round() / 100.0).abs() < 0.02);
}

#[test]
fn item_counts_clamp_to_at_least_one() {
    let generator = DataGenerator::new();
    for name in ["cart", "wishlist", "invoice", "food_order"] {
        let entity = generator
            .generate(name, Some(&json!({"seed": 8, "itemCount": 0})))
            .expect(name);
        let items = entity.get("items").and_then(Value::as_array).expect("items");
        assert_eq!(items.len(), 1, "'{name}' did not clamp its item count");
    }
}

#[test]
fn api_response_success_flag_drives_the_envelope() {
    let generator = DataGenerator::new();

    let ok = generator
        .generate("api_response", Some(&json!({"seed": 6, "success": true})))
        .expect("success response");
    assert_eq!(ok.get("success"), Some(&json!(true)));
    assert!(ok.get("data").is_some_and(|data| !data.is_null()));
    assert!(ok.get("error").is_some_and(Value::is_null));
    assert_eq!(ok.get("message"), Some(&json!("Request successful")));

    let failed = generator
        .generate("api_response", Some(&json!({"seed": 6, "success": false})))
        .expect("failure response");
    assert_eq!(failed.get("success"), Some(&json!(false)));
    assert!(failed.get("data").is_some_and(Value::is_null));
    assert!(failed.get("error").is_some_and(|error| !error.is_null()));
    let code = failed
        .get("statusCode")
        .and_then(Value::as_i64)
        .expect("statusCode");
    assert!(code >= 400);
}

#[test]
fn log_entry_path_has_two_segments() {
    let generator = DataGenerator::new();
    for seed in 0..10 {
        let entry = generator
            .generate("log_entry", Some(&json!({"seed": seed})))
            .expect("log entry");
        let path = entry.get("path").and_then(Value::as_str).expect("path");
        assert!(path.starts_with('/'), "{path}");
        assert!(path.len() > 1, "{path}");
    }
}

#[test]
fn every_registered_generator_produces_an_object() {
    let generator = DataGenerator::new();
    for name in generator.generator_names() {
        let entity = generator
            .generate(name, Some(&json!({"seed": 99})))
            .unwrap_or_else(|error| panic!("generator '{name}' failed: {error}"));
        assert!(entity.is_object(), "generator '{name}' returned a non-object");
    }
}
