use std::collections::btree_map::{self, BTreeMap};

use log::{debug, trace};

use super::value::{Lookup, Value};

/// A named group of key-value pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    name: String,
    items: BTreeMap<String, Value>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Section {
            name: name.into(),
            items: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert an item, replacing any previous value stored under the same key
    pub fn add_item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = Value::new(self.name.as_str(), key.as_str(), value);
        trace!("{}.{} = '{}'", self.name, key, value);
        if let Some(old) = self.items.insert(key, value) {
            debug!(
                "Overwrote '{}.{}' (previous value '{}')",
                self.name,
                old.key(),
                old
            );
        }
    }

    /// Look up an item by key
    ///
    /// A missing key is reported as [`Lookup::Absent`]; nothing is stored for it.
    pub fn get<'a>(&'a self, key: &'a str) -> Lookup<'a> {
        match self.items.get(key) {
            Some(value) => Lookup::Present(value),
            None => Lookup::Absent {
                section: &self.name,
                key,
            },
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.items.iter(),
        }
    }
}

/// Iterator over the items of a [`Section`], ordered by key
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, Value>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
