//! The [`Value`] capability trait: the store's sole extensibility point.

/// A value that can live in a [`KeyValueStore`].
///
/// `clone_value` must produce a *deep*, independent copy: mutating the
/// original after a `set`, or mutating what `get` hands back, must never
/// affect the stored entry. Types whose `Clone` shares ownership
/// (`Rc`, `Arc`) do not satisfy this contract as-is, which is why there
/// is no blanket impl over `Clone`.
///
/// ```
/// use kvs::Value;
///
/// #[derive(Debug, PartialEq)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// impl Value for Person {
///     fn clone_value(&self) -> Self {
///         Person {
///             name: self.name.clone(),
///             age: self.age,
///         }
///     }
/// }
/// ```
///
/// [`KeyValueStore`]: crate::KeyValueStore
pub trait Value: Send + Sync {
    /// Produce a deep, independent copy of the value.
    fn clone_value(&self) -> Self
    where
        Self: Sized;
}

// Owned std types whose `Clone` is already a deep copy.
macro_rules! impl_value_via_clone {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Value for $ty {
                fn clone_value(&self) -> Self {
                    self.clone()
                }
            }
        )*
    };
}

impl_value_via_clone!(
    String,
    Vec<u8>,
    bool,
    i32,
    i64,
    u32,
    u64,
    usize,
    f64,
);
