//! Thread-safe handle around a typed object.
//!
//! Typed objects themselves are plain values with no interior locking. When
//! one document is read and reloaded from several threads, wrap it in
//! [`Shared`]: loads happen on a private copy and are swapped in under the
//! write lock, so readers never observe a half-loaded object.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::config::{KeyStyle, LoadOptions};
use crate::error::Result;
use crate::object::TypedObject;
use crate::value::Value;

#[derive(Debug, Clone)]
pub struct Shared {
    inner: Arc<RwLock<TypedObject>>,
}

impl Shared {
    pub fn new(object: TypedObject) -> Self {
        Self {
            inner: Arc::new(RwLock::new(object)),
        }
    }

    /// Replace the contents from JSON. On failure the previous contents stay.
    pub fn load(&self, content: serde_json::Value) -> Result<()> {
        self.load_with(content, LoadOptions::default())
    }

    pub fn load_with(&self, content: serde_json::Value, options: LoadOptions) -> Result<()> {
        let mut next = self.inner.read().clone();
        next.load_with(content, options)?;
        *self.inner.write() = next;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.inner.read().validate()
    }

    pub fn to_map(&self, keys: KeyStyle) -> Result<serde_json::Map<String, serde_json::Value>> {
        self.inner.read().to_map(keys)
    }

    /// Copy of a client-visible value.
    pub fn get(&self, name: &str) -> Result<Option<Value>> {
        Ok(self.inner.read().get(name)?.cloned())
    }

    pub fn set(&self, name: &str, value: impl Into<Value>) -> Result<()> {
        self.inner.write().set(name, value)?;
        Ok(())
    }

    /// Read guard for inspecting the object in place.
    pub fn read(&self) -> RwLockReadGuard<'_, TypedObject> {
        self.inner.read()
    }

    /// Clone of the current contents.
    pub fn snapshot(&self) -> TypedObject {
        self.inner.read().clone()
    }
}

impl From<TypedObject> for Shared {
    fn from(object: TypedObject) -> Self {
        Self::new(object)
    }
}
