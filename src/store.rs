//! Sections and properties of a parsed configuration.
//!
//! Both levels are kept in insertion order with a name index for exact,
//! case-sensitive lookup. Neither level enforces uniqueness on insert; the
//! parser checks with a lookup first. When a name is inserted twice, lookups
//! return the first entry.

use std::collections::HashMap;

/// A key and its text value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    key: String,
    value: String,
}

impl Property {
    /// Property key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Raw text value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Ordered entries with an index on their key.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entries<T> {
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Entries<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> Entries<T> {
    #[expect(clippy::indexing_slicing, reason = "position of the item pushed above")]
    fn push(&mut self, key: String, item: T) -> &mut T {
        let position = self.items.len();
        self.index.entry(key).or_insert(position);
        self.items.push(item);
        &mut self.items[position]
    }

    fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).and_then(|&i| self.items.get(i))
    }

    fn clear(&mut self) {
        self.items.clear();
        self.index.clear();
    }
}

/// A named group of properties.
///
/// The empty name denotes the global section holding properties that appear
/// before any header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    properties: Entries<Property>,
}

impl Section {
    /// Create an empty section.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Entries::default(),
        }
    }

    /// Section name; empty for the global section.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is the unnamed global section.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.name.is_empty()
    }

    /// Add a property without checking for an existing key.
    pub fn insert_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &Property {
        let key = key.into();
        let property = Property {
            key: key.clone(),
            value: value.into(),
        };
        self.properties.push(key, property)
    }

    /// Find a property by exact key.
    #[must_use]
    pub fn find_property(&self, key: &str) -> Option<&Property> {
        self.properties.get(key)
    }

    /// Properties in file order.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.items.iter()
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.items.len()
    }

    /// Whether the section has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.items.is_empty()
    }

    /// Remove every property.
    pub fn clear(&mut self) {
        self.properties.clear();
    }
}

/// All sections of a configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    sections: Entries<Section>,
}

impl Store {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section without checking for an existing name.
    ///
    /// The new section is the most recently added one.
    pub fn insert_section(&mut self, name: impl Into<String>) -> &mut Section {
        let section = Section::new(name);
        self.sections.push(section.name.clone(), section)
    }

    /// Find a section by exact name.
    #[must_use]
    pub fn find_section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// The most recently added section.
    ///
    /// An empty store gains the global section first, so properties always
    /// have a section to land in.
    #[expect(clippy::indexing_slicing, reason = "store is non-empty here")]
    pub fn current_mut(&mut self) -> &mut Section {
        if self.is_empty() {
            return self.insert_section("");
        }
        let last = self.len() - 1;
        &mut self.sections.items[last]
    }

    /// Sections in file order, global section first.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.items.iter()
    }

    /// Number of sections, including the global one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.items.len()
    }

    /// Whether the store holds no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.items.is_empty()
    }

    /// Release every section and property.
    pub fn clear(&mut self) {
        let sections = self.len();
        let properties: usize = self.sections().map(Section::len).sum();
        for section in &mut self.sections.items {
            section.clear();
        }
        self.sections.clear();
        tracing::trace!(sections, properties, "Store cleared");
    }
}
