use serde_json::Value;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::handle::{HandleSlot, ViewHandle};
use crate::registry::{BoxFuture, NativeRegistry};

/// Forwards commands to a native module, gated on the module actually
/// providing them.
///
/// The proxy owns the handle of the mounted view; commands are addressed to
/// that handle and rejected while nothing is mounted.
#[derive(Debug)]
pub struct CommandProxy {
    registry: Arc<NativeRegistry>,
    handle: HandleSlot,
}

impl CommandProxy {
    pub fn new(registry: NativeRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            handle: HandleSlot::new(),
        }
    }

    pub fn registry(&self) -> &NativeRegistry {
        &self.registry
    }

    pub fn is_available(&self, capability: &str) -> bool {
        self.registry.contains(capability)
    }

    pub fn handle(&self) -> Option<ViewHandle> {
        self.handle.current()
    }

    /// Bind the proxy to a freshly mounted view.
    pub fn bind(&self, handle: ViewHandle) -> Result<()> {
        self.handle.bind(handle).map_err(Error::AlreadyMounted)?;
        log::info!("Camera view mounted with handle {}", handle);
        Ok(())
    }

    /// Forget the mounted view. Returns the handle that was bound, if any.
    pub fn unbind(&self) -> Option<ViewHandle> {
        let previous = self.handle.clear();
        if let Some(handle) = previous {
            log::info!("Camera view {} unmounted", handle);
        }
        previous
    }

    /// Check `capability` and the bound handle, then start the native call.
    ///
    /// All checks happen here, before a future exists, so an unsupported
    /// capability or a missing view is reported without touching the native
    /// module. The returned future is the native call's own, unchanged.
    pub fn dispatch(
        &self,
        capability: &str,
        args: Vec<Value>,
    ) -> Result<BoxFuture<'static, Result<Value>>> {
        let Some(native) = self.registry.get(capability) else {
            log::warn!(
                "{}.{} is not available on {}",
                self.registry.subsystem(),
                capability,
                std::env::consts::OS
            );
            return Err(Error::Unavailable {
                subsystem: self.registry.subsystem().to_string(),
                capability: capability.to_string(),
                platform: std::env::consts::OS,
            });
        };

        let handle = self.handle.current().ok_or_else(|| Error::NotMounted {
            capability: capability.to_string(),
        })?;

        log::debug!("Dispatching {} to camera view {}", capability, handle);
        Ok(native(args, handle))
    }

    pub async fn invoke(&self, capability: &str, args: Vec<Value>) -> Result<Value> {
        self.dispatch(capability, args)?.await
    }
}
