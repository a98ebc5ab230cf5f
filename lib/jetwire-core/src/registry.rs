//! Set of response types a metadata cache knows about.

use std::any::TypeId;
use std::collections::HashMap;

use crate::ApiResponse;

/// Decides which response types have metadata at all.
///
/// An open registry knows every [`ApiResponse`] type. A closed registry only
/// knows the types registered on its builder; metadata lookups for any other
/// type resolve to [`Metadata::Absent`](crate::Metadata::Absent).
///
/// # Example
///
/// ```ignore
/// let registry = TypeRegistry::builder()
///     .register::<StreamInfo>()
///     .register::<ConsumerInfo>()
///     .build();
/// let cache = MetadataCache::new(registry);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    known: Option<HashMap<TypeId, &'static str>>,
}

impl TypeRegistry {
    /// A registry that knows every [`ApiResponse`] type.
    #[must_use]
    pub fn open() -> Self {
        Self::default()
    }

    /// Create a builder for a closed registry.
    #[must_use]
    pub fn builder() -> TypeRegistryBuilder {
        TypeRegistryBuilder::default()
    }

    /// Returns `true` if every [`ApiResponse`] type is known.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.known.is_none()
    }

    /// Returns `true` if metadata can be built for `T`.
    #[must_use]
    pub fn contains<T: ApiResponse>(&self) -> bool {
        self.known
            .as_ref()
            .is_none_or(|known| known.contains_key(&TypeId::of::<T>()))
    }

    /// Names of the registered types, sorted. Empty for an open registry.
    #[must_use]
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .known
            .iter()
            .flat_map(HashMap::values)
            .copied()
            .collect();
        names.sort_unstable();
        names
    }
}

/// Builder for a closed [`TypeRegistry`].
#[derive(Debug, Clone, Default)]
pub struct TypeRegistryBuilder {
    known: HashMap<TypeId, &'static str>,
}

impl TypeRegistryBuilder {
    /// Register a response type.
    #[must_use]
    pub fn register<T: ApiResponse>(mut self) -> Self {
        self.known
            .insert(TypeId::of::<T>(), std::any::type_name::<T>());
        self
    }

    /// Build the registry.
    #[must_use]
    pub fn build(self) -> TypeRegistry {
        TypeRegistry {
            known: Some(self.known),
        }
    }
}
