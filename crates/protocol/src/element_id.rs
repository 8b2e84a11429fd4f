use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque handle naming one element of the page markup.
///
/// Wraps `Arc<str>` so handing the same id to several registries, timers
/// and emitted commands is a refcount bump, not an allocation. The engine
/// never interprets the contents; the host maps ids back to real nodes.
#[derive(Debug, Clone, Eq)]
pub struct ElementId(Arc<str>);

impl ElementId {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for ElementId {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || *self.0 == *other.0
    }
}

impl PartialEq<str> for ElementId {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for ElementId {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl std::hash::Hash for ElementId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (*self.0).hash(state);
    }
}

impl std::ops::Deref for ElementId {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ElementId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `HashMap<ElementId, _>` be queried with a plain `&str`.
impl std::borrow::Borrow<str> for ElementId {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    #[inline]
    fn from(s: &str) -> Self {
        ElementId(Arc::from(s))
    }
}

impl From<String> for ElementId {
    #[inline]
    fn from(s: String) -> Self {
        ElementId(Arc::from(s))
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for ElementId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ElementId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Owned on purpose: escaped JSON strings cannot be borrowed.
        let s = String::deserialize(deserializer)?;
        Ok(ElementId::from(s))
    }
}
