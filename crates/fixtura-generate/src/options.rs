use serde_json::{Map, Value};

/// Read-only view over a generation options object.
///
/// Options are plain JSON: `seed` and `locale` are shared by every generator,
/// entity-specific fields ride along in the same object.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options<'a> {
    value: Option<&'a Value>,
}

impl<'a> Options<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value: Some(value) }
    }

    pub fn empty() -> Self {
        Self { value: None }
    }

    /// Seed from the options object.
    ///
    /// Accepts an integer or a string of digits; a non-numeric string parses
    /// to `None` and the run degrades to unseeded generation.
    pub fn seed(&self) -> Option<i64> {
        self.get("seed").and_then(parse_seed)
    }

    pub fn locale(&self) -> Option<&'a str> {
        self.get("locale").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.value.and_then(|value| value.get(key))
    }

    pub fn i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    pub fn str(&self, key: &str) -> Option<&'a str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn object(&self, key: &str) -> Option<&'a Map<String, Value>> {
        self.get(key).and_then(Value::as_object)
    }

    /// Owned copy of the options with the seed replaced.
    ///
    /// Used by the composition helpers to hand the i-th call `seed + i`.
    pub fn with_seed(&self, seed: i64) -> Value {
        let mut map = self
            .value
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        map.insert("seed".to_string(), Value::from(seed));
        Value::Object(map)
    }

    /// Owned copy carrying only the shared seed/locale fields.
    pub fn seed_locale_only(&self, seed: Option<i64>) -> Value {
        let mut map = Map::new();
        if let Some(seed) = seed {
            map.insert("seed".to_string(), Value::from(seed));
        }
        if let Some(locale) = self.locale() {
            map.insert("locale".to_string(), Value::from(locale));
        }
        Value::Object(map)
    }
}

fn parse_seed(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn seed_accepts_numbers_and_digit_strings() {
        let value = json!({"seed": 42});
        assert_eq!(Options::new(&value).seed(), Some(42));

        let value = json!({"seed": "12345"});
        assert_eq!(Options::new(&value).seed(), Some(12345));
    }

    #[test]
    fn non_numeric_seed_is_treated_as_absent() {
        let value = json!({"seed": "invalid-seed"});
        assert_eq!(Options::new(&value).seed(), None);

        let value = json!({"seed": true});
        assert_eq!(Options::new(&value).seed(), None);

        assert_eq!(Options::empty().seed(), None);
    }

    #[test]
    fn with_seed_preserves_other_fields() {
        let value = json!({"seed": 1, "locale": "de", "itemCount": 5});
        let reseeded = Options::new(&value).with_seed(7);
        assert_eq!(reseeded["seed"], json!(7));
        assert_eq!(reseeded["locale"], json!("de"));
        assert_eq!(reseeded["itemCount"], json!(5));
    }
}
