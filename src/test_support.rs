//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::catalog::{Catalog, ElementId};
use crate::core::state::{Session, SessionOptions};

/// Three base elements, two tier 1 discoveries and one tier 2 discovery.
pub const SAMPLE_CATALOG: &str = r#"{
    "meta": { "topic": "Elements" },
    "library": [
        { "id": "water", "name": "Water", "image": "img/water.png", "tier": 0 },
        { "id": "earth", "name": "Earth", "image": "img/earth.png", "tier": 0 },
        { "id": "fire",  "name": "Fire",  "image": "img/fire.png",  "tier": 0 },
        { "id": "mud",   "name": "Mud",   "tier": 1, "recipes": [["water", "earth"]] },
        { "id": "steam", "name": "Steam", "tier": 1, "recipes": [["fire", "water"]] },
        { "id": "brick", "name": "Brick", "tier": 2, "recipes": [["mud", "fire"]] }
    ]
}"#;

pub fn sample_catalog() -> Catalog {
    Catalog::from_json(SAMPLE_CATALOG).expect("sample catalog is valid")
}

/// Creates a fresh session over the sample catalog with default options.
pub fn test_session() -> Session {
    Session::new(Arc::new(sample_catalog()), SessionOptions::default())
}

pub fn id(s: &str) -> ElementId {
    ElementId::from(s)
}
