// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Narrow-phase policy and the storage port it is loaded through.
//!
//! Values are plain `f32`/enums so one JSON document configures both scalar
//! lanes; thresholds are converted with `Scalar::from_f32` at query time.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

/// Frame the contact normal is computed in.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalFrame {
    /// Cross product of world-space edges; correct for any orientation.
    #[default]
    World,
    /// Cross product of untransformed local vertices. Only agrees with
    /// `World` for identity orientations; kept to replay recordings made
    /// with the legacy normal.
    Local,
}

/// Tunables for sphere/triangle contact generation.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrowPhaseConfig {
    /// Frame used for the contact normal.
    pub normal_frame: NormalFrame,
    /// Report no contact for world-space triangles at or below `degenerate_epsilon`.
    pub reject_degenerate: bool,
    /// Largest area-normal length (twice the area) still treated as degenerate.
    ///
    /// The lane adds its own floor on top of this (`Triangle::precision_floor`):
    /// in the fixed-point lane faces with a squared area normal below `2^-22`
    /// are degenerate whatever this value is. For a right triangle that is a
    /// minimum leg length of about `0.022` world units.
    pub degenerate_epsilon: f32,
}

impl Default for NarrowPhaseConfig {
    fn default() -> Self {
        Self {
            normal_frame: NormalFrame::World,
            reject_degenerate: true,
            degenerate_epsilon: 1e-6,
        }
    }
}

impl NarrowPhaseConfig {
    /// Key under which the narrow-phase config is stored.
    pub const KEY: &'static str = "narrow_phase";

    /// Loads the stored config, falling back to defaults when none is saved.
    pub fn load_or_default<St: ConfigStore>(
        service: &ConfigService<St>,
    ) -> Result<Self, ConfigError> {
        Ok(service.load(Self::KEY)?.unwrap_or_default())
    }

    /// Persists this config under [`Self::KEY`].
    pub fn save<St: ConfigStore>(&self, service: &ConfigService<St>) -> Result<(), ConfigError> {
        service.save(Self::KEY, self)
    }
}

/// Storage port for raw config blobs (keyed by logical name).
pub trait ConfigStore {
    /// Load a raw config blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Persist a raw config blob.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Key not present in store.
    #[error("not found")]
    NotFound,
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Catch-all error variant.
    #[error("other: {0}")]
    Other(String),
}

/// Serializes config values as JSON and delegates storage to a `ConfigStore`.
pub struct ConfigService<St> {
    store: St,
}

impl<St> ConfigService<St> {
    /// Create a new service using the given store.
    pub fn new(store: St) -> Self {
        Self { store }
    }

    /// Borrow the inner store.
    pub fn store(&self) -> &St {
        &self.store
    }

    /// Consume the service and return the inner store.
    pub fn into_inner(self) -> St {
        self.store
    }
}

impl<St> ConfigService<St>
where
    St: ConfigStore,
{
    /// Load and deserialize a config value for `key`. Returns `Ok(None)` if missing.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned,
    {
        match self.store.load_raw(key) {
            Ok(bytes) if bytes.is_empty() => Ok(None),
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(ConfigError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Serialize and persist a config value for `key`.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), ConfigError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct MemStore {
        blobs: RefCell<BTreeMap<String, Vec<u8>>>,
    }

    impl ConfigStore for MemStore {
        fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
            self.blobs
                .borrow()
                .get(key)
                .cloned()
                .ok_or(ConfigError::NotFound)
        }

        fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
            self.blobs.borrow_mut().insert(key.to_owned(), data.to_vec());
            Ok(())
        }
    }

    #[test]
    fn missing_key_loads_defaults() {
        let svc = ConfigService::new(MemStore::default());
        let cfg = NarrowPhaseConfig::load_or_default(&svc).unwrap();
        assert_eq!(cfg, NarrowPhaseConfig::default());
    }

    #[test]
    fn saved_config_round_trips_through_the_store() {
        let svc = ConfigService::new(MemStore::default());
        let cfg = NarrowPhaseConfig {
            normal_frame: NormalFrame::Local,
            reject_degenerate: false,
            degenerate_epsilon: 0.25,
        };
        cfg.save(&svc).unwrap();
        assert_eq!(NarrowPhaseConfig::load_or_default(&svc).unwrap(), cfg);
    }

    #[test]
    fn partial_documents_fill_in_defaults() {
        let store = MemStore::default();
        store
            .save_raw(NarrowPhaseConfig::KEY, br#"{ "normal_frame": "local" }"#)
            .unwrap();
        let cfg = NarrowPhaseConfig::load_or_default(&ConfigService::new(store)).unwrap();
        assert_eq!(cfg.normal_frame, NormalFrame::Local);
        assert!(cfg.reject_degenerate);
    }

    #[test]
    fn malformed_documents_surface_serde_errors() {
        let store = MemStore::default();
        store.save_raw(NarrowPhaseConfig::KEY, b"{ not json").unwrap();
        let err = NarrowPhaseConfig::load_or_default(&ConfigService::new(store)).unwrap_err();
        assert!(matches!(err, ConfigError::Serde(_)));
    }
}
