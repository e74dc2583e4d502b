use serde_json::{Value, json};

use fixtura_generate::{DataGenerator, GenerationError};

#[test]
fn bulk_generates_the_requested_count() {
    let generator = DataGenerator::new();
    let items = generator
        .generate_bulk("user", 5, Some(&json!({"seed": 10})))
        .expect("bulk users");
    assert_eq!(items.len(), 5);
}

#[test]
fn bulk_offsets_the_seed_per_item() {
    let generator = DataGenerator::new();
    let items = generator
        .generate_bulk("product", 3, Some(&json!({"seed": 50})))
        .expect("bulk products");

    for (index, item) in items.iter().enumerate() {
        let single = generator
            .generate("product", Some(&json!({"seed": 50 + index as i64})))
            .expect("single product");
        assert_eq!(item, &single, "item {index} does not match seed offset");
    }
}

#[test]
fn bulk_results_replay_with_pairwise_distinct_ids() {
    let generator = DataGenerator::new();
    let first = generator
        .generate_bulk("user", 5, Some(&json!({"seed": 21})))
        .expect("first batch");
    let second = generator
        .generate_bulk("user", 5, Some(&json!({"seed": 21})))
        .expect("second batch");
    assert_eq!(first, second);

    let ids: Vec<&str> = first
        .iter()
        .filter_map(|item| item.get("id").and_then(Value::as_str))
        .collect();
    assert_eq!(ids.len(), 5);
    for (index, id) in ids.iter().enumerate() {
        for other in &ids[index + 1..] {
            assert_ne!(id, other, "duplicate id within one batch");
        }
    }
}

#[test]
fn extreme_seeds_wrap_instead_of_overflowing() {
    let generator = DataGenerator::new();

    let items = generator
        .generate_bulk("product", 2, Some(&json!({"seed": i64::MAX})))
        .expect("bulk products");
    assert_eq!(items.len(), 2);

    let order = generator
        .generate("order", Some(&json!({"seed": i64::MAX, "productCount": 2})))
        .expect("order");
    let products = order
        .get("products")
        .and_then(Value::as_array)
        .expect("products array");
    assert_eq!(products.len(), 2);

    let product = generator
        .generate_product_with_relations(Some(&json!({"seed": i64::MAX})))
        .expect("product with relations");
    let related = product
        .get("relatedProducts")
        .and_then(Value::as_array)
        .expect("relatedProducts");
    assert_eq!(related.len(), 3);
}

#[test]
fn bulk_rejects_non_positive_counts() {
    let generator = DataGenerator::new();
    for count in [0, -1] {
        let result = generator.generate_bulk("user", count, None);
        match result {
            Err(GenerationError::Validation(error)) => {
                assert!(error.to_string().contains("count"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}

#[test]
fn bulk_rejects_unknown_generator_names() {
    let generator = DataGenerator::new();
    let result = generator.generate_bulk("nonexistent", 3, None);
    assert!(matches!(
        result,
        Err(GenerationError::UnknownGenerator(name)) if name == "nonexistent"
    ));
}

#[test]
fn bulk_with_accepts_a_custom_function() {
    let generator = DataGenerator::new();
    let items = generator
        .generate_bulk_with(
            |generator, options| generator.generate("review", options),
            4,
            Some(&json!({"seed": 9})),
        )
        .expect("bulk reviews");
    assert_eq!(items.len(), 4);
    let ratings_valid = items.iter().all(|item| {
        item.get("rating")
            .and_then(Value::as_i64)
            .is_some_and(|rating| (1..=5).contains(&rating))
    });
    assert!(ratings_valid);
}

#[test]
fn non_object_options_are_rejected() {
    let generator = DataGenerator::new();
    let result = generator.generate("user", Some(&json!("seed=1")));
    assert!(matches!(result, Err(GenerationError::InvalidOptions(_))));
}

#[test]
fn order_embeds_products_and_sums_their_prices() {
    let generator = DataGenerator::new();
    let order = generator
        .generate("order", Some(&json!({"seed": 77, "productCount": 4})))
        .expect("order");

    let products = order
        .get("products")
        .and_then(Value::as_array)
        .expect("products array");
    assert_eq!(products.len(), 4);

    let expected: f64 = products
        .iter()
        .filter_map(|product| product.get("price").and_then(Value::as_f64))
        .sum();
    let total = order
        .get("totalAmount")
        .and_then(Value::as_f64)
        .expect("totalAmount");
    assert!((total - (expected * 100.0).round() / 100.0).abs() < 1e-9);
}

#[test]
fn order_products_use_derived_seeds() {
    let generator = DataGenerator::new();
    let order = generator
        .generate("order", Some(&json!({"seed": 200})))
        .expect("order");
    let products = order
        .get("products")
        .and_then(Value::as_array)
        .expect("products array");

    for (index, product) in products.iter().enumerate() {
        let expected = generator
            .generate("product", Some(&json!({"seed": 200 + index as i64 + 1})))
            .expect("product");
        assert_eq!(product, &expected);
    }
}

#[test]
fn order_rejects_non_positive_product_counts() {
    let generator = DataGenerator::new();
    let result = generator.generate("order", Some(&json!({"productCount": 0})));
    assert!(matches!(result, Err(GenerationError::Validation(_))));

    // Strict channel: dispatch propagates the error too.
    let dispatched = generator.dispatch("order", Some(&json!({"productCount": -2})));
    assert!(dispatched.is_err());
}

#[test]
fn related_products_carry_the_back_reference() {
    let generator = DataGenerator::new();
    let related = generator
        .generate_related_products("main-123", 3, Some(&json!({"seed": 5})))
        .expect("related products");

    assert_eq!(related.len(), 3);
    for product in &related {
        assert_eq!(
            product.get("relatedToProductId").and_then(Value::as_str),
            Some("main-123")
        );
    }
}

#[test]
fn related_products_with_non_positive_count_yield_an_empty_list() {
    let generator = DataGenerator::new();
    for count in [0, -3] {
        let related = generator
            .generate_related_products("main-123", count, None)
            .expect("related products");
        assert!(related.is_empty());
    }
}

#[test]
fn product_with_relations_attaches_a_seeded_batch() {
    let generator = DataGenerator::new();
    let product = generator
        .generate_product_with_relations(Some(&json!({"seed": 30})))
        .expect("product with relations");

    let main_id = product
        .get("id")
        .and_then(Value::as_str)
        .expect("main id")
        .to_string();
    let related = product
        .get("relatedProducts")
        .and_then(Value::as_array)
        .expect("relatedProducts");
    assert_eq!(related.len(), 3);

    // The related batch is seeded seed + 100.
    let expected = generator
        .generate_related_products(&main_id, 3, Some(&json!({"seed": 130})))
        .expect("expected batch");
    assert_eq!(related, &expected);
}

#[test]
fn user_age_bounds_flow_into_the_generated_age() {
    let generator = DataGenerator::new();
    for seed in 0..20 {
        let user = generator
            .generate("user", Some(&json!({"seed": seed, "ageMin": 30, "ageMax": 35})))
            .expect("user");
        let age = user.get("age").and_then(Value::as_i64).expect("age");
        assert!((30..=35).contains(&age), "age {age} out of bounds");
    }
}

#[test]
fn invalid_age_range_is_soft_for_dispatch_and_loud_for_generate() {
    let generator = DataGenerator::new();
    let options = json!({"ageMin": 30, "ageMax": 20});

    let result = generator.generate("user", Some(&options));
    assert!(matches!(result, Err(GenerationError::Validation(_))));

    let dispatched = generator
        .dispatch("user", Some(&options))
        .expect("soft error object");
    let message = dispatched
        .get("error")
        .and_then(Value::as_str)
        .expect("error message");
    assert!(message.contains("30") && message.contains("20"), "{message}");
}

#[test]
fn country_override_is_passed_through() {
    let generator = DataGenerator::new();
    let user = generator
        .generate("user", Some(&json!({"seed": 1, "country": "Wonderland"})))
        .expect("user");
    assert_eq!(
        user.pointer("/address/country").and_then(Value::as_str),
        Some("Wonderland")
    );
}
