use serde_json::json;

use fixtura_generate::DataGenerator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut generator = DataGenerator::new();
    generator.register_plugin(Box::new(|mut entity| {
        if let Some(map) = entity.as_object_mut() {
            map.insert("generatedBy".to_string(), json!("fixtura"));
        }
        Ok(entity)
    }));

    let user = generator.generate("user", Some(&json!({"seed": 42, "locale": "de"})))?;
    println!("{}", serde_json::to_string_pretty(&user)?);

    let orders = generator.generate_bulk("order", 2, Some(&json!({"seed": 7})))?;
    println!("{}", serde_json::to_string_pretty(&orders)?);

    let product = generator.generate_product_with_relations(Some(&json!({"seed": 1})))?;
    println!("{}", serde_json::to_string_pretty(&product)?);

    Ok(())
}
