use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::Result;
use crate::handle::ViewHandle;

/// Boxed future returned by native calls.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A native implementation of one capability: positional arguments plus the
/// handle of the view it targets.
pub type NativeFn =
    Arc<dyn Fn(Vec<Value>, ViewHandle) -> BoxFuture<'static, Result<Value>> + Send + Sync>;

/// Subsystem name used in unavailability errors.
pub const CAMERA_SUBSYSTEM: &str = "Camera";

/// Every command the camera view can forward to the native side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    PausePreview,
    ResumePreview,
    TakePicture,
    Record,
    StopRecording,
    GetAvailableRatios,
    GetAvailablePictureSizes,
    FocusOnPoint,
    UpdateProps,
}

impl Capability {
    pub const ALL: [Capability; 9] = [
        Capability::PausePreview,
        Capability::ResumePreview,
        Capability::TakePicture,
        Capability::Record,
        Capability::StopRecording,
        Capability::GetAvailableRatios,
        Capability::GetAvailablePictureSizes,
        Capability::FocusOnPoint,
        Capability::UpdateProps,
    ];

    /// Method name on the native module.
    pub fn name(self) -> &'static str {
        match self {
            Capability::PausePreview => "pausePreview",
            Capability::ResumePreview => "resumePreview",
            Capability::TakePicture => "takePictureAsync",
            Capability::Record => "recordAsync",
            Capability::StopRecording => "stopRecording",
            Capability::GetAvailableRatios => "getAvailableRatiosAsync",
            Capability::GetAvailablePictureSizes => "getAvailablePictureSizesAsync",
            Capability::FocusOnPoint => "focusOnPoint",
            Capability::UpdateProps => "updateProps",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The capabilities a native module actually provides on this platform/build.
///
/// Fixed once built; a capability that was never registered is unavailable.
#[derive(Clone)]
pub struct NativeRegistry {
    subsystem: String,
    entries: HashMap<String, NativeFn>,
}

impl NativeRegistry {
    pub fn new(subsystem: impl Into<String>) -> Self {
        Self {
            subsystem: subsystem.into(),
            entries: HashMap::new(),
        }
    }

    /// Register the native implementation backing `capability`.
    ///
    /// Registering the same name twice replaces the earlier entry.
    pub fn register<F, Fut>(mut self, capability: impl Into<String>, f: F) -> Self
    where
        F: Fn(Vec<Value>, ViewHandle) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        let entry: NativeFn = Arc::new(
            move |args: Vec<Value>, handle: ViewHandle| -> BoxFuture<'static, Result<Value>> {
                Box::pin(f(args, handle))
            },
        );
        self.entries.insert(capability.into(), entry);
        self
    }

    pub fn subsystem(&self) -> &str {
        &self.subsystem
    }

    pub fn get(&self, capability: &str) -> Option<&NativeFn> {
        self.entries.get(capability)
    }

    pub fn contains(&self, capability: &str) -> bool {
        self.entries.contains_key(capability)
    }

    /// Registered capability names, sorted.
    pub fn capabilities(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for NativeRegistry {
    fn default() -> Self {
        Self::new(CAMERA_SUBSYSTEM)
    }
}

impl fmt::Debug for NativeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeRegistry")
            .field("subsystem", &self.subsystem)
            .field("capabilities", &self.capabilities())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn capability_names_are_distinct() {
        let mut names: Vec<&str> = Capability::ALL.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Capability::ALL.len());
        assert_eq!(Capability::GetAvailableRatios.to_string(), "getAvailableRatiosAsync");
    }

    #[tokio::test]
    async fn registered_entries_are_callable() {
        let registry = NativeRegistry::default()
            .register("pausePreview", |_, _| async { Ok::<_, crate::Error>(Value::Null) })
            .register("focusOnPoint", |args, handle| async move {
                Ok::<_, crate::Error>(json!({ "args": args, "handle": handle }))
            });

        assert_eq!(registry.subsystem(), "Camera");
        assert_eq!(registry.capabilities(), vec!["focusOnPoint", "pausePreview"]);
        assert!(registry.contains("pausePreview"));
        assert!(!registry.contains("recordAsync"));
        assert!(registry.get("recordAsync").is_none());

        let focus = registry.get("focusOnPoint").unwrap();
        let handle = ViewHandle::new(3).unwrap();
        let out = focus(vec![json!({ "x": 0.5, "y": 0.5 })], handle).await.unwrap();
        assert_eq!(out, json!({ "args": [{ "x": 0.5, "y": 0.5 }], "handle": 3 }));
    }
}
