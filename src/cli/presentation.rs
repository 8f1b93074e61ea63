//! CLI presentation: text and json formatters for resolved properties.

use crate::loader::Resolved;
use serde_json::json;

pub fn format_properties_text(resolved: &Resolved, show_origins: bool) -> String {
    let properties = &resolved.properties;
    if properties.is_empty() {
        return "No properties found.".to_string();
    }
    if !show_origins {
        return properties.render_aligned();
    }

    let width = properties
        .keys()
        .map(|k| k.chars().count())
        .max()
        .unwrap_or(0);
    properties
        .iter()
        .map(|(key, value)| {
            let origin = resolved
                .origin(key)
                .map(|layer| layer.to_string())
                .unwrap_or_default();
            format!("{:<width$} = {}  [{}]", key, value, origin, width = width)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_properties_json(resolved: &Resolved, show_origins: bool) -> String {
    let out = if show_origins {
        let origins: serde_json::Map<String, serde_json::Value> = resolved
            .origins()
            .map(|(key, layer)| (key.to_string(), json!(layer)))
            .collect();
        json!({
            "properties": resolved.properties,
            "origins": origins,
            "layers": resolved.reports(),
        })
    } else {
        json!(resolved.properties)
    };
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}
