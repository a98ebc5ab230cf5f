//! Memoized per-type decode metadata.
//!
//! [`MetadataCache`] resolves the metadata of a response type once: the
//! outcome, success or failure, is kept for the lifetime of the cache and
//! handed out on every later lookup. Concurrent first lookups of a type
//! run a single build and all observe its outcome.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, LazyLock, OnceLock};

use dashmap::DashMap;
use tracing::{debug, warn};

use crate::{ApiResponse, DecodeError, MetadataError, TypeInfo, TypeRegistry};

/// Resolved metadata for a response type.
pub enum Metadata<T> {
    /// Metadata is available.
    Ready(Arc<TypeInfo<T>>),
    /// Building metadata failed; the captured error is shared by all lookups.
    Failed(Arc<MetadataError>),
    /// The registry does not know the type.
    Absent,
}

impl<T> Metadata<T> {
    /// Returns `true` if metadata is available.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Returns `true` if building metadata failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns `true` if the type is unknown.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Convert into the metadata handle or the matching decode error.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Metadata`] with the captured error for a failed
    /// build, and [`DecodeError::UnknownResponseType`] for an unknown type.
    pub fn into_result(self) -> Result<Arc<TypeInfo<T>>, DecodeError> {
        match self {
            Self::Ready(info) => Ok(info),
            Self::Failed(err) => Err(DecodeError::Metadata(err)),
            Self::Absent => Err(DecodeError::UnknownResponseType(
                std::any::type_name::<T>(),
            )),
        }
    }
}

impl<T> Clone for Metadata<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Ready(info) => Self::Ready(Arc::clone(info)),
            Self::Failed(err) => Self::Failed(Arc::clone(err)),
            Self::Absent => Self::Absent,
        }
    }
}

impl<T> fmt::Debug for Metadata<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(info) => f.debug_tuple("Ready").field(info).finish(),
            Self::Failed(err) => f.debug_tuple("Failed").field(err).finish(),
            Self::Absent => f.write_str("Absent"),
        }
    }
}

type Slot<T> = OnceLock<Metadata<T>>;
type ErasedSlot = Arc<dyn Any + Send + Sync>;

static GLOBAL: LazyLock<Arc<MetadataCache>> =
    LazyLock::new(|| Arc::new(MetadataCache::new(TypeRegistry::open())));

/// Per-type metadata cache, keyed by [`TypeId`].
///
/// Entries are never evicted: the set of response types is bounded by the
/// program, not by the traffic.
///
/// # Example
///
/// ```ignore
/// let cache = MetadataCache::global();
/// match cache.get::<StreamInfo>() {
///     Metadata::Ready(info) => { /* decode with info */ }
///     Metadata::Failed(err) => eprintln!("{err}"),
///     Metadata::Absent => eprintln!("unknown response type"),
/// }
/// ```
pub struct MetadataCache {
    registry: TypeRegistry,
    slots: DashMap<TypeId, ErasedSlot>,
    build_attempts: AtomicUsize,
}

impl MetadataCache {
    /// Create an empty cache over the given registry.
    #[must_use]
    pub fn new(registry: TypeRegistry) -> Self {
        Self {
            registry,
            slots: DashMap::new(),
            build_attempts: AtomicUsize::new(0),
        }
    }

    /// The process-wide cache, over an open registry.
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL)
    }

    /// The registry deciding which types have metadata.
    #[must_use]
    pub const fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Metadata for `T`, building it on first use.
    pub fn get<T: ApiResponse>(&self) -> Metadata<T> {
        self.slot::<T>().get_or_init(|| self.build::<T>()).clone()
    }

    /// Metadata for `T` if it was already resolved; never builds.
    #[must_use]
    pub fn peek<T: ApiResponse>(&self) -> Option<Metadata<T>> {
        let erased = self
            .slots
            .get(&TypeId::of::<T>())
            .map(|slot| Arc::clone(slot.value()))?;
        downcast::<T>(erased).get().cloned()
    }

    /// How many times metadata resolution ran, across all types.
    #[must_use]
    pub fn build_attempts(&self) -> usize {
        self.build_attempts.load(Ordering::Acquire)
    }

    /// Number of response types looked up so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no response type was looked up.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn slot<T: ApiResponse>(&self) -> Arc<Slot<T>> {
        let id = TypeId::of::<T>();
        // The shard lock is released before the cell is initialized.
        let existing = self.slots.get(&id).map(|slot| Arc::clone(slot.value()));
        let erased = existing.unwrap_or_else(|| {
            let entry = self
                .slots
                .entry(id)
                .or_insert_with(|| Arc::new(Slot::<T>::new()) as ErasedSlot);
            Arc::clone(entry.value())
        });
        downcast::<T>(erased)
    }

    fn build<T: ApiResponse>(&self) -> Metadata<T> {
        let response_type = std::any::type_name::<T>();
        self.build_attempts.fetch_add(1, Ordering::AcqRel);

        if !self.registry.contains::<T>() {
            debug!(response_type, "response type is not registered");
            return Metadata::Absent;
        }

        match T::type_info() {
            Ok(info) => {
                debug!(response_type, schema = info.schema(), "built response metadata");
                Metadata::Ready(Arc::new(info))
            }
            Err(err) => {
                warn!(response_type, error = %err, "cannot build response metadata");
                Metadata::Failed(Arc::new(err))
            }
        }
    }
}

impl fmt::Debug for MetadataCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetadataCache")
            .field("registry", &self.registry)
            .field("types", &self.slots.len())
            .field("build_attempts", &self.build_attempts())
            .finish()
    }
}

impl Default for MetadataCache {
    fn default() -> Self {
        Self::new(TypeRegistry::open())
    }
}

fn downcast<T: ApiResponse>(erased: ErasedSlot) -> Arc<Slot<T>> {
    match erased.downcast::<Slot<T>>() {
        Ok(slot) => slot,
        Err(_) => unreachable!(
            "metadata slot for `{}` holds a cell of another type",
            std::any::type_name::<T>()
        ),
    }
}
