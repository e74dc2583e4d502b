use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// Error a plugin transform may return.
///
/// Plugin failures are contained at the pipeline boundary: the failing
/// transform is skipped and generation continues with the untransformed
/// entity.
#[derive(Debug, Error)]
#[error("plugin '{plugin}' failed: {message}")]
pub struct PluginError {
    pub plugin: String,
    pub message: String,
}

impl PluginError {
    pub fn new(plugin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
            message: message.into(),
        }
    }
}

pub type Plugin = Box<dyn Fn(Value) -> Result<Value, PluginError> + Send + Sync>;

/// Ordered list of post-generation transforms.
#[derive(Default)]
pub struct PluginPipeline {
    plugins: Vec<Plugin>,
}

impl PluginPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, plugin: Plugin) {
        self.plugins.push(plugin);
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Fold the entity through every registered transform in order.
    ///
    /// Each transform receives the previous transform's output. A failing
    /// transform is logged and skipped; the fold continues with the value it
    /// was handed.
    pub fn apply(&self, entity: Value) -> Value {
        self.plugins.iter().fold(entity, |current, plugin| {
            let snapshot = current.clone();
            match plugin(current) {
                Ok(transformed) => transformed,
                Err(error) => {
                    warn!(plugin = %error.plugin, "plugin failed, skipping: {}", error.message);
                    snapshot
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plugins_apply_in_registration_order() {
        let mut pipeline = PluginPipeline::new();
        pipeline.register(Box::new(|mut entity| {
            entity["trail"] = json!("first");
            Ok(entity)
        }));
        pipeline.register(Box::new(|mut entity| {
            let prior = entity["trail"].as_str().unwrap_or("").to_string();
            entity["trail"] = json!(format!("{prior},second"));
            Ok(entity)
        }));

        let result = pipeline.apply(json!({}));
        assert_eq!(result["trail"], json!("first,second"));
    }

    #[test]
    fn failing_plugin_is_skipped_and_fold_continues() {
        let mut pipeline = PluginPipeline::new();
        pipeline.register(Box::new(|mut entity| {
            entity["kept"] = json!(true);
            Ok(entity)
        }));
        pipeline.register(Box::new(|_| {
            Err(PluginError::new("broken", "deliberate failure"))
        }));
        pipeline.register(Box::new(|mut entity| {
            entity["after"] = json!(true);
            Ok(entity)
        }));

        let result = pipeline.apply(json!({}));
        assert_eq!(result["kept"], json!(true));
        assert_eq!(result["after"], json!(true));
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let pipeline = PluginPipeline::new();
        let entity = json!({"id": 1});
        assert_eq!(pipeline.apply(entity.clone()), entity);
    }
}
