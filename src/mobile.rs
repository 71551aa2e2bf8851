use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tauri::{
    plugin::{PluginApi, PluginHandle},
    AppHandle, Runtime,
};

use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::handle::ViewHandle;
use crate::models::Config;
use crate::registry::{Capability, NativeRegistry};
use crate::view::CameraView;

#[cfg(target_os = "android")]
const PLUGIN_IDENTIFIER: &str = "app.tauri.cameraview";

#[cfg(target_os = "ios")]
tauri::ios_plugin_binding!(init_plugin_camera_view);

// Android's camera view reports every capability.
#[cfg(target_os = "android")]
const PLATFORM_CAPABILITIES: &[Capability] = &Capability::ALL;

// AVFoundation offers no aspect ratio enumeration.
#[cfg(target_os = "ios")]
const PLATFORM_CAPABILITIES: &[Capability] = &[
    Capability::PausePreview,
    Capability::ResumePreview,
    Capability::TakePicture,
    Capability::Record,
    Capability::StopRecording,
    Capability::GetAvailablePictureSizes,
    Capability::FocusOnPoint,
    Capability::UpdateProps,
];

// Payload handed to the native plugin for every command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NativeRequest {
    view_tag: ViewHandle,
    args: Vec<Value>,
}

pub fn init<R: Runtime>(
    app: &AppHandle<R>,
    api: PluginApi<R, Option<Config>>,
    registry: Option<NativeRegistry>,
) -> Result<Camera<R>> {
    let config = api.config().clone().unwrap_or_default();

    let registry = match registry {
        Some(registry) => registry,
        None => {
            #[cfg(target_os = "android")]
            let handle = api.register_android_plugin(PLUGIN_IDENTIFIER, "CameraViewPlugin")?;
            #[cfg(target_os = "ios")]
            let handle = api.register_ios_plugin(init_plugin_camera_view)?;
            native_registry(handle)
        }
    };
    log::debug!(
        "Camera view capabilities on {}: {:?}",
        std::env::consts::OS,
        registry.capabilities()
    );

    Ok(Camera::new(app.clone(), CameraView::new(registry, config.props)))
}

/// One registry entry per capability the platform plugin implements, each
/// forwarding to the plugin method of the same name.
fn native_registry<R: Runtime>(handle: PluginHandle<R>) -> NativeRegistry {
    let plugin = Arc::new(handle);
    PLATFORM_CAPABILITIES
        .iter()
        .fold(NativeRegistry::default(), |registry, capability| {
            let plugin = plugin.clone();
            let command = capability.name();
            registry.register(command, move |args, view_tag| {
                let plugin = plugin.clone();
                async move {
                    let request = NativeRequest { view_tag, args };
                    // run_mobile_plugin blocks until the native side answers.
                    let value = tauri::async_runtime::spawn_blocking(move || {
                        plugin.run_mobile_plugin::<Value>(command, request)
                    })
                    .await??;
                    Ok::<_, Error>(value)
                }
            })
        })
}
