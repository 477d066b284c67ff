//! Construction options shared by every functor variant.

/// Flags fixed when a wrapper is built.
///
/// All flags default to `false`. `as_tree` becomes the default for the
/// `deep` argument of every later transform on the wrapper; the other flags
/// steer variant selection in [`select`](crate::selector::select) and
/// [`select_pointed`](crate::selector::select_pointed).
///
/// # Examples
///
/// ```rust
/// use phunctor::options::FunctorOptions;
///
/// let options = FunctorOptions::new().tree();
/// assert!(options.as_tree);
/// assert!(!options.as_base);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FunctorOptions {
    /// Treat the value as an opaque scalar regardless of its shape.
    pub as_base: bool,
    /// Force sequence treatment, e.g. to iterate a string character-wise.
    pub as_iterable: bool,
    /// Prefer the mapping variant for a mapping even when `as_iterable` is set.
    pub as_mapping: bool,
    /// Transform leaves of nested containers by default.
    pub as_tree: bool,
}

impl FunctorOptions {
    /// Options with every flag cleared.
    pub const fn new() -> Self {
        Self {
            as_base: false,
            as_iterable: false,
            as_mapping: false,
            as_tree: false,
        }
    }

    /// Sets `as_base`.
    #[must_use]
    pub const fn base(mut self) -> Self {
        self.as_base = true;
        self
    }

    /// Sets `as_iterable`.
    #[must_use]
    pub const fn iterable(mut self) -> Self {
        self.as_iterable = true;
        self
    }

    /// Sets `as_mapping`.
    #[must_use]
    pub const fn mapping(mut self) -> Self {
        self.as_mapping = true;
        self
    }

    /// Sets `as_tree`.
    #[must_use]
    pub const fn tree(mut self) -> Self {
        self.as_tree = true;
        self
    }

    /// Flags set in either `self` or `other`.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            as_base: self.as_base || other.as_base,
            as_iterable: self.as_iterable || other.as_iterable,
            as_mapping: self.as_mapping || other.as_mapping,
            as_tree: self.as_tree || other.as_tree,
        }
    }
}
