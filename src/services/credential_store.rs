// ============================================================================
// CREDENTIAL STORE - Persistencia del token entre recargas
// ============================================================================
// Un único slot de localStorage. Si el almacenamiento no está disponible se
// comporta como "sin credencial": nunca propaga errores al llamador.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::utils::constants::STORAGE_KEY_TOKEN;
use crate::utils::storage::{load_raw, remove_from_storage, save_raw};

/// Almacén durable de la credencial
pub trait CredentialStore {
    fn read(&self) -> Option<String>;
    fn write(&self, value: &str);
    fn clear(&self);
}

/// Implementación sobre `window.localStorage`
#[derive(Debug, Clone)]
pub struct LocalStorageCredentialStore {
    key: String,
}

impl LocalStorageCredentialStore {
    pub fn new() -> Self {
        Self {
            key: STORAGE_KEY_TOKEN.to_string(),
        }
    }
}

impl Default for LocalStorageCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for LocalStorageCredentialStore {
    fn read(&self) -> Option<String> {
        load_raw(&self.key).filter(|token| !token.is_empty())
    }

    fn write(&self, value: &str) {
        if let Err(e) = save_raw(&self.key, value) {
            log::warn!("⚠️ [STORE] No se pudo persistir el token: {}", e);
        }
    }

    fn clear(&self) {
        if let Err(e) = remove_from_storage(&self.key) {
            log::warn!("⚠️ [STORE] No se pudo eliminar el token: {}", e);
        }
    }
}

/// Almacén en memoria. Los clones comparten el mismo slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(value.to_string()))),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn read(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn write(&self, value: &str) {
        *self.slot.borrow_mut() = Some(value.to_string());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}
