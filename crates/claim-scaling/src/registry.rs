//! Name-keyed scaler registry.
//!
//! A registry maps lowercase names to constructors, so every lookup yields a
//! fresh unfitted scaler. Entries keep registration order for listing.
//!
//! The process-wide registry behind [`create_scaler`] and friends starts with
//! the built-in scalers. [`register_scaler`] is expected to run during
//! startup, before scalers are created; the lock keeps concurrent access
//! sound but gives no ordering between writers.

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::debug;

use crate::affine::AffineScaler;
use crate::error::{Result, ScalingError};
use crate::identity::IdentityScaler;
use crate::scaler::Scaler;

/// Description returned for names that are not registered.
pub const UNKNOWN_SCALER_DESCRIPTION: &str = "Unknown scaler";

/// Builds a fresh scaler instance.
pub type ScalerConstructor = Arc<dyn Fn() -> Box<dyn Scaler> + Send + Sync>;

#[derive(Clone)]
struct ScalerEntry {
    name: String,
    description: String,
    constructor: ScalerConstructor,
}

/// Registry of scaler constructors indexed by case-insensitive name.
#[derive(Clone)]
pub struct ScalerRegistry {
    entries: Vec<ScalerEntry>,
}

impl std::fmt::Debug for ScalerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalerRegistry")
            .field("names", &self.names())
            .finish()
    }
}

impl Default for ScalerRegistry {
    /// A registry holding `none`, `standard`, `minmax` and `robust`.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(
            "none",
            || Box::new(IdentityScaler),
            Some("No scaling (identity transform)"),
        );
        registry.register(
            "standard",
            || Box::new(AffineScaler::standard()),
            Some("Standardize features by removing the mean and scaling to unit variance"),
        );
        registry.register(
            "minmax",
            || Box::new(AffineScaler::minmax()),
            Some("Scale features to the [0, 1] range"),
        );
        registry.register(
            "robust",
            || Box::new(AffineScaler::robust()),
            Some("Scale features using statistics robust to outliers (median and IQR)"),
        );
        registry
    }
}

impl ScalerRegistry {
    /// A registry with no entries.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers a constructor under `name`, replacing any existing entry.
    ///
    /// The description defaults to the name. A replaced entry keeps its
    /// position in [`names`](Self::names).
    pub fn register<F>(&mut self, name: &str, constructor: F, description: Option<&str>)
    where
        F: Fn() -> Box<dyn Scaler> + Send + Sync + 'static,
    {
        self.register_shared(name, Arc::new(constructor), description);
    }

    /// Same as [`register`](Self::register) for an already shared constructor.
    pub fn register_shared(
        &mut self,
        name: &str,
        constructor: ScalerConstructor,
        description: Option<&str>,
    ) {
        let key = name.trim().to_lowercase();
        let entry = ScalerEntry {
            description: description.unwrap_or(name).to_string(),
            name: key.clone(),
            constructor,
        };
        match self.entries.iter_mut().find(|e| e.name == key) {
            Some(existing) => {
                debug!(scaler = %key, "Replacing registered scaler");
                *existing = entry;
            }
            None => self.entries.push(entry),
        }
    }

    /// Creates a fresh scaler by name.
    ///
    /// # Errors
    ///
    /// [`ScalingError::UnknownScaler`] listing the registered names.
    pub fn create(&self, name: &str) -> Result<Box<dyn Scaler>> {
        self.entry(name)
            .map(|entry| (entry.constructor)())
            .ok_or_else(|| ScalingError::UnknownScaler {
                name: name.to_string(),
                available: self.names(),
            })
    }

    /// Human-readable description, or [`UNKNOWN_SCALER_DESCRIPTION`].
    pub fn description(&self, name: &str) -> &str {
        self.entry(name)
            .map_or(UNKNOWN_SCALER_DESCRIPTION, |entry| entry.description.as_str())
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, name: &str) -> Option<&ScalerEntry> {
        let key = name.trim().to_lowercase();
        self.entries.iter().find(|e| e.name == key)
    }
}

static GLOBAL_REGISTRY: OnceLock<RwLock<ScalerRegistry>> = OnceLock::new();

fn global() -> &'static RwLock<ScalerRegistry> {
    GLOBAL_REGISTRY.get_or_init(|| RwLock::new(ScalerRegistry::default()))
}

/// Creates a scaler from the process-wide registry.
pub fn create_scaler(name: &str) -> Result<Box<dyn Scaler>> {
    global()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .create(name)
}

/// Describes a scaler in the process-wide registry.
pub fn get_description(name: &str) -> String {
    global()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .description(name)
        .to_string()
}

/// Registers or replaces a scaler in the process-wide registry.
pub fn register_scaler<F>(name: &str, constructor: F, description: Option<&str>)
where
    F: Fn() -> Box<dyn Scaler> + Send + Sync + 'static,
{
    global()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register(name, constructor, description);
}

/// Names in the process-wide registry, in registration order.
pub fn list_available_scalers() -> Vec<String> {
    global()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .names()
}
