//! # Catalog
//!
//! The immutable registry of every element and the recipes that produce it.
//! A `Catalog` only exists if the document it came from passed validation,
//! so the rest of the core never has to re-check ids or recipe shapes.
//!
//! ```text
//! { "meta": { "topic": "..." },
//!   "library": [
//!     { "id": "water", "name": "Water", "tier": 0 },
//!     { "id": "mud",   "name": "Mud",   "tier": 1, "recipes": [["water", "earth"]] }
//!   ] }
//! ```
//!
//! Recipes are indexed at load time by their normalised pair, which makes
//! resolution a single hash lookup instead of a scan over every element.

use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::source::SourceError;

pub const DEFAULT_TOPIC: &str = "Untitled";

// ============================================================================
// Identifiers and Recipes
// ============================================================================

/// Stable identifier of an element. Integer ids in the source document are
/// normalised to their decimal string so both spellings compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct ElementId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for ElementId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => ElementId(s),
            RawId::Number(n) => ElementId(n.to_string()),
        }
    }
}

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        ElementId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        ElementId(s.to_string())
    }
}

impl Borrow<str> for ElementId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An unordered pair of ingredients. Stored sorted, so `Recipe::new(a, b)`
/// and `Recipe::new(b, a)` are equal and hash identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Vec<ElementId>")]
pub struct Recipe {
    low: ElementId,
    high: ElementId,
}

impl Recipe {
    pub fn new(a: ElementId, b: ElementId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn ingredients(&self) -> (&ElementId, &ElementId) {
        (&self.low, &self.high)
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        &self.low == id || &self.high == id
    }
}

impl TryFrom<Vec<ElementId>> for Recipe {
    type Error = String;

    fn try_from(ids: Vec<ElementId>) -> Result<Self, Self::Error> {
        match <[ElementId; 2]>::try_from(ids) {
            Ok([a, b]) => Ok(Recipe::new(a, b)),
            Err(ids) => Err(format!(
                "a recipe must list exactly two ids, found {}",
                ids.len()
            )),
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} + {}]", self.low, self.high)
    }
}

// ============================================================================
// Elements
// ============================================================================

/// A single card definition. `name` and `image` are display metadata the
/// core never interprets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    pub name: String,
    pub image: Option<String>,
    pub tier: u32,
    pub recipes: Vec<Recipe>,
}

impl Element {
    /// Tier 0 elements are owned from the start of every session.
    pub fn is_base(&self) -> bool {
        self.tier == 0
    }
}

#[derive(Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    meta: Meta,
    library: Vec<RawElement>,
}

#[derive(Deserialize)]
struct Meta {
    #[serde(default = "default_topic")]
    topic: String,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            topic: default_topic(),
        }
    }
}

fn default_topic() -> String {
    DEFAULT_TOPIC.to_string()
}

#[derive(Deserialize)]
struct RawElement {
    id: ElementId,
    name: Option<String>,
    image: Option<String>,
    tier: u32,
    // `null` and a missing key both mean "no recipes"
    recipes: Option<Vec<Recipe>>,
}

impl From<RawElement> for Element {
    fn from(raw: RawElement) -> Self {
        let mut recipes: Vec<Recipe> = Vec::new();
        for recipe in raw.recipes.unwrap_or_default() {
            if !recipes.contains(&recipe) {
                recipes.push(recipe);
            }
        }
        Element {
            name: raw.name.unwrap_or_else(|| raw.id.to_string()),
            id: raw.id,
            image: raw.image,
            tier: raw.tier,
            recipes,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Why a catalog could not be produced. Fatal to session start.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not fetch catalog: {0}")]
    Source(#[from] SourceError),
    #[error("malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("duplicate element id '{0}'")]
    DuplicateId(ElementId),
    #[error("element '{0}' lists a recipe containing its own id")]
    SelfRecipe(ElementId),
    #[error("element '{element}' has a recipe referencing unknown element '{missing}'")]
    DanglingReference { element: ElementId, missing: ElementId },
    #[error("catalog has no tier 0 elements, so there is no starting inventory")]
    NoBaseElements,
    #[error("recipe {recipe} is claimed by both '{first}' and '{second}'")]
    AmbiguousRecipe {
        recipe: Recipe,
        first: ElementId,
        second: ElementId,
    },
}

// ============================================================================
// Catalog
// ============================================================================

/// Knobs for catalog validation.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Reject catalogs where two elements share a recipe. When off, the
    /// first element in library order keeps the pair.
    pub strict_recipes: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            strict_recipes: true,
        }
    }
}

#[derive(Debug)]
pub struct Catalog {
    topic: String,
    elements: Vec<Element>,
    positions: HashMap<ElementId, usize>,
    recipe_index: HashMap<Recipe, usize>,
}

impl Catalog {
    /// Parse and validate a catalog document with default options.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        Self::from_json_with(text, LoadOptions::default())
    }

    pub fn from_json_with(text: &str, options: LoadOptions) -> Result<Self, LoadError> {
        let document: CatalogDocument = serde_json::from_str(text)?;
        let elements = document.library.into_iter().map(Element::from).collect();
        Self::build(document.meta.topic, elements, options)
    }

    /// Validate a list of elements and build the lookup indexes.
    pub fn build(
        topic: String,
        elements: Vec<Element>,
        options: LoadOptions,
    ) -> Result<Self, LoadError> {
        let mut positions = HashMap::with_capacity(elements.len());
        for (i, element) in elements.iter().enumerate() {
            if positions.insert(element.id.clone(), i).is_some() {
                return Err(LoadError::DuplicateId(element.id.clone()));
            }
        }

        for element in &elements {
            for recipe in &element.recipes {
                if recipe.contains(&element.id) {
                    return Err(LoadError::SelfRecipe(element.id.clone()));
                }
                let (a, b) = recipe.ingredients();
                for ingredient in [a, b] {
                    if !positions.contains_key(ingredient) {
                        return Err(LoadError::DanglingReference {
                            element: element.id.clone(),
                            missing: ingredient.clone(),
                        });
                    }
                }
            }
        }

        if !elements.iter().any(Element::is_base) {
            return Err(LoadError::NoBaseElements);
        }

        let mut recipe_index = HashMap::new();
        for (i, element) in elements.iter().enumerate() {
            for recipe in &element.recipes {
                match recipe_index.entry(recipe.clone()) {
                    Entry::Vacant(slot) => {
                        slot.insert(i);
                    }
                    Entry::Occupied(slot) => {
                        let first: &Element = &elements[*slot.get()];
                        if options.strict_recipes {
                            return Err(LoadError::AmbiguousRecipe {
                                recipe: recipe.clone(),
                                first: first.id.clone(),
                                second: element.id.clone(),
                            });
                        }
                        warn!(
                            "Recipe {} claimed by both '{}' and '{}', keeping '{}'",
                            recipe, first.id, element.id, first.id
                        );
                    }
                }
            }
        }

        info!(
            "Catalog '{}' loaded: {} elements, {} recipes",
            topic,
            elements.len(),
            recipe_index.len()
        );
        debug!(
            "Base elements: {:?}",
            elements
                .iter()
                .filter(|e| e.is_base())
                .map(|e| e.id.as_str())
                .collect::<Vec<_>>()
        );

        Ok(Self {
            topic,
            elements,
            positions,
            recipe_index,
        })
    }

    /// Display title from `meta.topic`.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// All elements in library order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn lookup(&self, id: &str) -> Option<&Element> {
        self.positions.get(id).map(|&i| &self.elements[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn elements_by_tier(&self, tier: u32) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.tier == tier)
    }

    pub fn base_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements_by_tier(0)
    }

    /// Number of elements that can only be obtained by combining.
    pub fn discoverable_count(&self) -> usize {
        self.elements.iter().filter(|e| !e.is_base()).count()
    }

    /// The element produced by combining `a` and `b`, in either order.
    pub fn recipe_for(&self, a: &ElementId, b: &ElementId) -> Option<&Element> {
        let key = Recipe::new(a.clone(), b.clone());
        self.recipe_index.get(&key).map(|&i| &self.elements[i])
    }

    /// Recipes that produce `id`. Empty for base and unknown elements.
    pub fn recipes_producing(&self, id: &str) -> &[Recipe] {
        self.lookup(id).map(|e| e.recipes.as_slice()).unwrap_or(&[])
    }

    /// Elements that use `id` as an ingredient.
    pub fn recipes_using<'a>(&'a self, id: &'a ElementId) -> impl Iterator<Item = &'a Element> {
        self.elements
            .iter()
            .filter(move |e| e.recipes.iter().any(|r| r.contains(id)))
    }
}
