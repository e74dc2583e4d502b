//! E-commerce generators: catalog, orders, carts, returns.

use serde_json::{Value, json};

use crate::errors::GenerationError;
use crate::facade::DataGenerator;
use crate::generators::{GeneratorRegistry, address_object};
use crate::options::Options;
use crate::source::{self, DeterministicSource};

const DISCOUNT_TYPES: &[&str] = &["percentage", "fixed"];
const SHIPPING_NAMES: &[&str] = &["Standard", "Express", "Overnight", "Economy", "Priority"];
const PAYMENT_TYPES: &[&str] = &[
    "Credit Card",
    "Debit Card",
    "PayPal",
    "Bank Transfer",
    "Cash on Delivery",
    "Apple Pay",
    "Google Pay",
];
const VARIANT_SIZES: &[&str] = &["XS", "S", "M", "L", "XL"];
const WISHLIST_NAMES: &[&str] = &["My Wishlist", "Birthday Ideas", "Holiday List", "Favorites"];
const PRIORITIES: &[&str] = &["low", "medium", "high"];
const RETURN_STATUSES: &[&str] = &[
    "pending",
    "approved",
    "rejected",
    "processing",
    "completed",
    "cancelled",
];
const RETURN_REASONS: &[&str] = &[
    "Defective product",
    "Wrong item received",
    "Item not as described",
    "Changed mind",
    "Better price found",
    "Arrived too late",
    "Damaged in shipping",
    "Size/fit issue",
];
const REFUND_METHODS: &[&str] = &["original_payment", "store_credit", "bank_transfer"];

pub(crate) fn register(registry: &mut GeneratorRegistry) {
    registry.insert("product", product);
    registry.insert("order", order);
    registry.insert("review", review);
    registry.insert("category", category);
    registry.insert("inventory", inventory);
    registry.insert("coupon", coupon);
    registry.insert("shipping_method", shipping_method);
    registry.insert("payment_method", payment_method);
    registry.insert("cart", cart);
    registry.insert("wishlist", wishlist);
    registry.insert("return_request", return_request);
}

/// `customFields` entries are merged over the generated object, so callers
/// can pin or add fields.
fn product(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());

    let related_products = options
        .get("relatedProducts")
        .cloned()
        .unwrap_or_else(|| json!([]));

    let mut product = json!({
        "id": source.uuid(),
        "name": source.product_name(),
        "description": source.paragraph(),
        "price": source.price(1.0, 1000.0),
        "category": source.department(),
        "inStock": source.boolean(),
        "image": source.image_url(),
        "sku": source.alphanumeric_upper(8),
        "relatedProducts": related_products,
    });

    if let (Some(map), Some(custom)) = (product.as_object_mut(), options.object("customFields")) {
        for (key, value) in custom {
            map.insert(key.clone(), value.clone());
        }
    }
    Ok(product)
}

/// Nested products go through the facade so plugins apply to them; the i-th
/// product is seeded `seed + i + 1`.
fn order(generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let product_count = options.i64("productCount").unwrap_or(3);
    if product_count <= 0 {
        return Err(fixtura_core::Error::Validation(
            "Product count must be a positive number".to_string(),
        )
        .into());
    }

    let mut source = DeterministicSource::resolve(options.seed(), options.locale());
    let base_seed = options.seed();

    let mut products = Vec::with_capacity(product_count as usize);
    for index in 0..product_count {
        let product_options =
            options.seed_locale_only(base_seed.map(|seed| seed.wrapping_add(index + 1)));
        products.push(generator.generate("product", Some(&product_options))?);
    }

    let total: f64 = products
        .iter()
        .filter_map(|product| product.get("price").and_then(Value::as_f64))
        .sum();

    Ok(json!({
        "id": source.uuid(),
        "customerName": source.full_name(),
        "orderDate": source.timestamp_recent(1),
        "products": products,
        "totalAmount": source::round_currency(total),
        "shippingAddress": address_object(&mut source),
    }))
}

fn review(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());

    let product_id = match options.str("productId") {
        Some(id) => id.to_string(),
        None => source.int(10_000, 99_999).to_string(),
    };

    Ok(json!({
        "id": source.int(10_000, 99_999).to_string(),
        "productId": product_id,
        "rating": source.int(1, 5),
        "comment": source.paragraph(),
        "reviewerName": source.full_name(),
        "reviewDate": source::iso_date(source.datetime_recent(30).date()),
        "helpful": source.int(0, 100),
        "verified": source.boolean(),
    }))
}

fn category(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());
    let parent_id = options.get("parentId").cloned().unwrap_or(Value::Null);
    let name = source.department();
    let slug = source::slugify(&name);

    Ok(json!({
        "id": source.uuid(),
        "name": name,
        "description": source.sentence(10, 20),
        "parentId": parent_id,
        "slug": slug,
        "isActive": source.boolean(),
    }))
}

fn inventory(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());
    let product_id = match options.str("productId") {
        Some(id) => id.to_string(),
        None => source.uuid(),
    };

    Ok(json!({
        "productId": product_id,
        "quantity": source.int(0, 1000),
        "lastUpdated": source.timestamp_recent(1),
        "warehouseLocation": source.city(),
        "reorderPoint": source.int(10, 100),
    }))
}

fn coupon(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());

    Ok(json!({
        "code": source.alphanumeric_upper(8),
        "discountType": source.pick(DISCOUNT_TYPES),
        "discountValue": source.int(5, 50),
        "expirationDate": source.timestamp_soon(365),
        "minPurchaseAmount": source.int(0, 100),
        "isActive": source.boolean(),
    }))
}

fn shipping_method(
    _generator: &DataGenerator,
    options: &Options<'_>,
) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());

    Ok(json!({
        "id": source.uuid(),
        "name": source.pick(SHIPPING_NAMES),
        "price": source.price(5.0, 50.0),
        "estimatedDeliveryDays": source.int(1, 10),
        "provider": source.company_name(),
        "isAvailable": source.boolean(),
    }))
}

fn payment_method(
    _generator: &DataGenerator,
    options: &Options<'_>,
) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());

    Ok(json!({
        "id": source.uuid(),
        "type": source.pick(PAYMENT_TYPES),
        "name": source.account_name(),
        "isDefault": source.boolean(),
        "lastFour": source.numeric_string(4),
        "expiryDate": source.timestamp_soon(365),
    }))
}

fn cart(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());
    let item_count = options.i64("itemCount").unwrap_or(3).max(1);

    let mut items = Vec::with_capacity(item_count as usize);
    let mut subtotal = 0.0;
    let mut quantity_total = 0;
    for _ in 0..item_count {
        let price = source.price(1.0, 1000.0);
        let quantity = source.int(1, 10);
        let line_subtotal = source::round_currency(price * quantity as f64);
        subtotal += line_subtotal;
        quantity_total += quantity;
        let variant = source.maybe(|source| {
            json!({
                "size": source.pick(VARIANT_SIZES),
                "color": source.color_name(),
            })
        });
        items.push(json!({
            "id": source.uuid(),
            "productId": source.uuid(),
            "productName": source.product_name(),
            "productImage": source.image_url(),
            "price": price,
            "quantity": quantity,
            "subtotal": line_subtotal,
            "variant": variant,
        }));
    }

    let tax = source::round_currency(subtotal * 0.08);

    Ok(json!({
        "id": source.uuid(),
        "userId": source.uuid(),
        "items": items,
        "itemCount": quantity_total,
        "subtotal": source::round_currency(subtotal),
        "tax": tax,
        "discount": source.price(0.0, 20.0),
        "total": source::round_currency(subtotal + tax),
        "couponCode": source.maybe(|source| Value::from(source.alphanumeric_upper(8))),
        "createdAt": source.timestamp_recent(7),
        "updatedAt": source.timestamp_recent(1),
        "expiresAt": source.timestamp_soon(36),
    }))
}

fn wishlist(_generator: &DataGenerator, options: &Options<'_>) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());
    let item_count = options.i64("itemCount").unwrap_or(5).max(1);

    let mut items = Vec::with_capacity(item_count as usize);
    let mut total_value = 0.0;
    for _ in 0..item_count {
        let price = source.price(1.0, 1000.0);
        total_value += price;
        items.push(json!({
            "id": source.uuid(),
            "productId": source.uuid(),
            "productName": source.product_name(),
            "productImage": source.image_url(),
            "price": price,
            "originalPrice": source.price(100.0, 500.0),
            "inStock": source.boolean(),
            "addedAt": source.timestamp_recent(30),
            "priority": source.pick(PRIORITIES),
            "notes": source.maybe(|source| Value::from(source.sentence(3, 10))),
        }));
    }

    Ok(json!({
        "id": source.uuid(),
        "userId": source.uuid(),
        "name": source.pick(WISHLIST_NAMES),
        "isPublic": source.boolean(),
        "items": items,
        "totalItems": item_count,
        "totalValue": source::round_currency(total_value),
        "createdAt": source.timestamp_recent(365),
        "updatedAt": source.timestamp_recent(7),
    }))
}

fn return_request(
    _generator: &DataGenerator,
    options: &Options<'_>,
) -> Result<Value, GenerationError> {
    let mut source = DeterministicSource::resolve(options.seed(), options.locale());
    let order_id = match options.str("orderId") {
        Some(id) => id.to_string(),
        None => source.uuid(),
    };

    let item_count = source.int(1, 3);
    let mut items = Vec::with_capacity(item_count as usize);
    for _ in 0..item_count {
        items.push(json!({
            "productId": source.uuid(),
            "productName": source.product_name(),
            "quantity": source.int(1, 5),
            "price": source.price(1.0, 1000.0),
        }));
    }

    let photo_count = source.int(0, 3);
    let photos: Vec<Value> = (0..photo_count)
        .map(|_| Value::from(source.image_url()))
        .collect();

    Ok(json!({
        "id": source.uuid(),
        "orderId": order_id,
        "customerId": source.uuid(),
        "status": source.pick(RETURN_STATUSES),
        "reason": source.pick(RETURN_REASONS),
        "description": source.paragraph(),
        "items": items,
        "refundAmount": source.price(10.0, 500.0),
        "refundMethod": source.pick(REFUND_METHODS),
        "returnShippingLabel": source.maybe(|source| Value::from(source.url())),
        "trackingNumber": source.maybe(|source| Value::from(source.alphanumeric_upper(12))),
        "photos": photos,
        "requestedAt": source.timestamp_recent(14),
        "processedAt": source.maybe(|source| Value::from(source.timestamp_recent(7))),
        "completedAt": source.maybe(|source| Value::from(source.timestamp_recent(3))),
    }))
}
