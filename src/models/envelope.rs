//! Envelope model
//!
//! An envelope is a named sub-budget with an allocated amount. Envelopes are
//! kept in insertion order so they display in the order the user created
//! them; on disk they are a plain JSON object of `name -> amount`.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::money::Money;

/// A single named sub-budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Envelope name (case-sensitive, unique within the map)
    pub name: String,

    /// Amount allotted to this envelope for the period
    pub allocated: Money,
}

impl Envelope {
    pub fn new(name: impl Into<String>, allocated: Money) -> Self {
        Self {
            name: name.into(),
            allocated,
        }
    }
}

/// Insertion-ordered mapping from envelope name to allocated amount
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Envelopes {
    entries: Vec<Envelope>,
}

impl Envelopes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an envelope
    ///
    /// Overwriting keeps the envelope's original position. Returns the previous
    /// allocation if the name already existed.
    pub fn insert(&mut self, name: impl Into<String>, allocated: Money) -> Option<Money> {
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => Some(std::mem::replace(&mut existing.allocated, allocated)),
            None => {
                self.entries.push(Envelope::new(name, allocated));
                None
            }
        }
    }

    /// Get the allocation for an envelope by exact name
    pub fn get(&self, name: &str) -> Option<Money> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.allocated)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate envelopes in display order
    pub fn iter(&self) -> std::slice::Iter<'_, Envelope> {
        self.entries.iter()
    }

    /// Envelope names in display order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Sum of every envelope's allocation
    pub fn total_allocated(&self) -> Money {
        self.entries.iter().map(|e| e.allocated).sum()
    }
}

impl<'a> IntoIterator for &'a Envelopes {
    type Item = &'a Envelope;
    type IntoIter = std::slice::Iter<'a, Envelope>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<N: Into<String>> FromIterator<(N, Money)> for Envelopes {
    fn from_iter<I: IntoIterator<Item = (N, Money)>>(iter: I) -> Self {
        let mut envelopes = Envelopes::new();
        for (name, allocated) in iter {
            envelopes.insert(name, allocated);
        }
        envelopes
    }
}

impl Serialize for Envelopes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for envelope in &self.entries {
            map.serialize_entry(&envelope.name, &envelope.allocated)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Envelopes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EnvelopesVisitor;

        impl<'de> Visitor<'de> for EnvelopesVisitor {
            type Value = Envelopes;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of envelope names to amounts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Envelopes, A::Error> {
                let mut envelopes = Envelopes::new();
                // Duplicate keys: last one wins, first position kept
                while let Some((name, allocated)) = access.next_entry::<String, Money>()? {
                    envelopes.insert(name, allocated);
                }
                Ok(envelopes)
            }
        }

        deserializer.deserialize_map(EnvelopesVisitor)
    }
}
