use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::sync::{PoisonError, RwLock};

/// Opaque identifier of a live native camera view.
///
/// The host view system hands this out when the native view mounts. Zero is
/// never a valid handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewHandle(NonZeroU64);

impl ViewHandle {
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The handle of the currently mounted view, if any.
///
/// Written only by mount/unmount, read by every command. Readers copy the
/// handle out so the lock is never held across an await.
#[derive(Debug, Default)]
pub struct HandleSlot {
    current: RwLock<Option<ViewHandle>>,
}

impl HandleSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<ViewHandle> {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store `handle` unless one is already bound, in which case the bound
    /// handle is returned as the error.
    pub fn bind(&self, handle: ViewHandle) -> std::result::Result<(), ViewHandle> {
        let mut slot = self.current.write().unwrap_or_else(PoisonError::into_inner);
        match *slot {
            Some(existing) => Err(existing),
            None => {
                *slot = Some(handle);
                Ok(())
            }
        }
    }

    pub fn clear(&self) -> Option<ViewHandle> {
        self.current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_a_handle() {
        assert!(ViewHandle::new(0).is_none());
        assert!(serde_json::from_str::<ViewHandle>("0").is_err());
        let handle: ViewHandle = serde_json::from_str("42").unwrap();
        assert_eq!(handle.get(), 42);
    }

    #[test]
    fn bind_once_until_cleared() {
        let slot = HandleSlot::new();
        let first = ViewHandle::new(7).unwrap();
        let second = ViewHandle::new(8).unwrap();

        assert_eq!(slot.current(), None);
        slot.bind(first).unwrap();
        assert_eq!(slot.bind(second), Err(first));
        assert_eq!(slot.current(), Some(first));

        assert_eq!(slot.clear(), Some(first));
        assert_eq!(slot.current(), None);
        assert_eq!(slot.clear(), None);

        slot.bind(second).unwrap();
        assert_eq!(slot.current(), Some(second));
    }
}
