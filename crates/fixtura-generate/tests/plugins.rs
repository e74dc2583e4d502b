use serde_json::{Value, json};

use fixtura_generate::{DataGenerator, PluginError};

#[test]
fn registered_plugins_transform_every_entity() {
    let mut generator = DataGenerator::new();
    generator.register_plugin(Box::new(|mut entity| {
        entity["injected"] = json!(true);
        Ok(entity)
    }));
    assert_eq!(generator.plugin_count(), 1);

    let user = generator
        .generate("user", Some(&json!({"seed": 1})))
        .expect("user");
    assert_eq!(user.get("injected"), Some(&json!(true)));
}

#[test]
fn plugins_run_in_registration_order() {
    let mut generator = DataGenerator::new();
    generator.register_plugin(Box::new(|mut entity| {
        entity["stage"] = json!("first");
        Ok(entity)
    }));
    generator.register_plugin(Box::new(|mut entity| {
        entity["stage"] = json!("second");
        Ok(entity)
    }));

    let entity = generator
        .generate("address", Some(&json!({"seed": 2})))
        .expect("address");
    assert_eq!(entity.get("stage"), Some(&json!("second")));
}

#[test]
fn a_failing_plugin_does_not_break_generation() {
    let mut generator = DataGenerator::new();
    generator.register_plugin(Box::new(|_| {
        Err(PluginError::new("exploder", "always fails"))
    }));
    generator.register_plugin(Box::new(|mut entity| {
        entity["survived"] = json!(true);
        Ok(entity)
    }));

    let entity = generator
        .generate("product", Some(&json!({"seed": 3})))
        .expect("product");
    assert_eq!(entity.get("survived"), Some(&json!(true)));
    assert!(entity.get("sku").is_some());
}

#[test]
fn plugins_apply_to_nested_products_inside_orders() {
    let mut generator = DataGenerator::new();
    generator.register_plugin(Box::new(|mut entity| {
        if let Some(map) = entity.as_object_mut() {
            map.insert("tagged".to_string(), json!(true));
        }
        Ok(entity)
    }));

    let order = generator
        .generate("order", Some(&json!({"seed": 4, "productCount": 2})))
        .expect("order");
    assert_eq!(order.get("tagged"), Some(&json!(true)));

    let products = order
        .get("products")
        .and_then(Value::as_array)
        .expect("products");
    for product in products {
        assert_eq!(product.get("tagged"), Some(&json!(true)));
    }
}

#[test]
fn plugins_can_redact_fields_for_snapshots() {
    let mut generator = DataGenerator::new();
    generator.register_plugin(Box::new(|mut entity| {
        if let Some(map) = entity.as_object_mut() {
            if map.contains_key("email") {
                map.insert("email".to_string(), json!("[redacted]"));
            }
        }
        Ok(entity)
    }));

    let user = generator
        .generate("user", Some(&json!({"seed": 5})))
        .expect("user");
    assert_eq!(user.get("email"), Some(&json!("[redacted]")));
}
