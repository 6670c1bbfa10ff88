use std::collections::HashMap;

use crate::verb::Verb;

/// Boolean-valued method annotations for one (controller, verb) pair.
///
/// The gate evaluator treats an absent key as `false`, so readers may return
/// only the annotations a method actually carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationSet {
    values: HashMap<String, bool>,
}

impl AnnotationSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: bool) {
        self.values.insert(key.into(), value);
    }

    /// Look up an annotation; `None` means the method does not carry it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<bool> {
        self.values.get(key).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for AnnotationSet {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Collaborator that inspects controller methods for annotation metadata.
///
/// `controller` is the fully qualified name from the routes file (namespace
/// prefix included), matching the key the controller registry and container
/// use for the same type.
pub trait AnnotationReader {
    fn method_annotations(&self, controller: &str, verb: Verb) -> AnnotationSet;
}

/// Reader that reports no annotations for any method. Useful for hosts that
/// only use unconditional middleware declarations.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAnnotations;

impl AnnotationReader for NoAnnotations {
    fn method_annotations(&self, _controller: &str, _verb: Verb) -> AnnotationSet {
        AnnotationSet::new()
    }
}
