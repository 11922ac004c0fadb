//! Call arguments: a positional list plus named (keyword) arguments.

use std::collections::BTreeMap;

/// The arguments of one call, `f(a, b, key=value)`.
///
/// Positional arguments keep their order. Named arguments are keyed by
/// parameter name; setting the same name twice keeps the last value.
///
/// ```rust
/// use decor::Args;
///
/// let args = Args::new().arg(1).arg(2).kwarg("scale", 10);
/// assert_eq!(args.positional_args(), &[1, 2]);
/// assert_eq!(args.get("scale"), Some(&10));
/// assert_eq!(args.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args<V> {
    positional: Vec<V>,
    named: BTreeMap<String, V>,
}

impl<V> Args<V> {
    pub fn new() -> Self {
        Self {
            positional: Vec::new(),
            named: BTreeMap::new(),
        }
    }

    /// Arguments made of positional values only.
    pub fn positional<T>(values: T) -> Self
    where
        T: IntoIterator<Item = V>,
    {
        Self {
            positional: values.into_iter().collect(),
            named: BTreeMap::new(),
        }
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: V) -> Self {
        self.positional.push(value);
        self
    }

    /// Set a named argument.
    pub fn kwarg(mut self, name: impl Into<String>, value: V) -> Self {
        self.named.insert(name.into(), value);
        self
    }

    pub fn positional_args(&self) -> &[V] {
        &self.positional
    }

    pub fn named_args(&self) -> &BTreeMap<String, V> {
        &self.named
    }

    /// Value of the named argument `name`, if it was passed.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.named.get(name)
    }

    /// Total number of arguments, positional and named.
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Keep only the named arguments whose name satisfies `keep`.
    ///
    /// Positional arguments are untouched.
    pub fn retain_named<F>(mut self, mut keep: F) -> Self
    where
        F: FnMut(&str) -> bool,
    {
        self.named.retain(|name, _| keep(name));
        self
    }

    pub fn into_parts(self) -> (Vec<V>, BTreeMap<String, V>) {
        (self.positional, self.named)
    }
}

impl<V> Default for Args<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<Vec<V>> for Args<V> {
    fn from(positional: Vec<V>) -> Self {
        Self::positional(positional)
    }
}

impl<V> FromIterator<(String, V)> for Args<V> {
    fn from_iter<T: IntoIterator<Item = (String, V)>>(iter: T) -> Self {
        Self {
            positional: Vec::new(),
            named: iter.into_iter().collect(),
        }
    }
}
