//! Layer merging for generator settings
//!
//! - Objects: merged key by key, recursively
//! - Arrays and scalars: the later layer wins outright

use serde_json::Value;

/// Overlay `layer` onto `base` in place.
pub fn overlay(base: &mut Value, layer: Value) {
    match (base, layer) {
        (Value::Object(base_map), Value::Object(layer_map)) => {
            for (key, value) in layer_map {
                match base_map.get_mut(&key) {
                    Some(existing) => overlay(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, layer) => *base = layer,
    }
}

/// Fold layers from lowest to highest precedence.
pub fn merge_layers(layers: Vec<Value>) -> Value {
    let mut merged = Value::Null;
    for layer in layers {
        overlay(&mut merged, layer);
    }
    merged
}
