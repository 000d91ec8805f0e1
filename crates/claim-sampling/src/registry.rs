//! Name-keyed resampler registry.
//!
//! Mirrors the scaler registry: lowercase names map to constructors taking
//! the shared [`SamplerParams`], and the process-wide instance starts with
//! the built-in methods. Register custom methods during startup.

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::debug;

use crate::adasyn::Adasyn;
use crate::error::{Result, SamplingError};
use crate::passthrough::PassThrough;
use crate::random::RandomOverSampler;
use crate::resampler::{Resampler, SamplerParams};
use crate::smote::Smote;
use crate::strategy::SamplingStrategy;

/// Builds a fresh resampler from strategy and seed.
pub type SamplerConstructor = Arc<dyn Fn(SamplerParams) -> Box<dyn Resampler> + Send + Sync>;

/// Registry of resampler constructors indexed by case-insensitive name.
#[derive(Clone)]
pub struct SamplerRegistry {
    entries: Vec<(String, SamplerConstructor)>,
}

impl std::fmt::Debug for SamplerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SamplerRegistry")
            .field("names", &self.names())
            .finish()
    }
}

impl Default for SamplerRegistry {
    /// A registry holding `none`, `random`, `smote` and `adasyn`.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("none", |_| Box::new(PassThrough));
        registry.register("random", |params| Box::new(RandomOverSampler::new(params)));
        registry.register("smote", |params| Box::new(Smote::new(params)));
        registry.register("adasyn", |params| Box::new(Adasyn::new(params)));
        registry
    }
}

impl SamplerRegistry {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers a constructor under `name`, replacing any existing entry
    /// in place.
    pub fn register<F>(&mut self, name: &str, constructor: F)
    where
        F: Fn(SamplerParams) -> Box<dyn Resampler> + Send + Sync + 'static,
    {
        let key = name.trim().to_lowercase();
        let constructor: SamplerConstructor = Arc::new(constructor);
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => {
                debug!(method = %key, "Replacing registered sampler");
                entry.1 = constructor;
            }
            None => self.entries.push((key, constructor)),
        }
    }

    /// Creates a fresh resampler by name.
    ///
    /// # Errors
    ///
    /// [`SamplingError::UnknownSamplingMethod`] listing the registered names.
    pub fn create(
        &self,
        method: &str,
        strategy: SamplingStrategy,
        random_state: Option<u64>,
    ) -> Result<Box<dyn Resampler>> {
        let key = method.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, constructor)| constructor(SamplerParams::new(strategy, random_state)))
            .ok_or_else(|| SamplingError::UnknownSamplingMethod {
                name: method.to_string(),
                available: self.names(),
            })
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static GLOBAL_REGISTRY: OnceLock<RwLock<SamplerRegistry>> = OnceLock::new();

fn global() -> &'static RwLock<SamplerRegistry> {
    GLOBAL_REGISTRY.get_or_init(|| RwLock::new(SamplerRegistry::default()))
}

/// Creates a resampler from the process-wide registry.
pub fn create_strategy(
    method: &str,
    strategy: SamplingStrategy,
    random_state: Option<u64>,
) -> Result<Box<dyn Resampler>> {
    global()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .create(method, strategy, random_state)
}

/// Registers or replaces a resampler in the process-wide registry.
pub fn register_strategy<F>(name: &str, constructor: F)
where
    F: Fn(SamplerParams) -> Box<dyn Resampler> + Send + Sync + 'static,
{
    global()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register(name, constructor);
}

/// Names in the process-wide registry, in registration order.
pub fn list_available_strategies() -> Vec<String> {
    global()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .names()
}
