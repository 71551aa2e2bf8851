use tauri::{plugin::PluginApi, AppHandle, Runtime};

use crate::camera::Camera;
use crate::error::Result;
use crate::models::Config;
use crate::registry::NativeRegistry;
use crate::view::CameraView;

/// Desktop has no bundled native camera view; the application supplies the
/// capabilities it implements through [`crate::Builder::registry`].
pub fn init<R: Runtime>(
    app: &AppHandle<R>,
    api: PluginApi<R, Option<Config>>,
    registry: Option<NativeRegistry>,
) -> Result<Camera<R>> {
    let config = api.config().clone().unwrap_or_default();
    let registry = registry.unwrap_or_default();
    log::debug!(
        "Camera view capabilities on {}: {:?}",
        std::env::consts::OS,
        registry.capabilities()
    );

    Ok(Camera::new(app.clone(), CameraView::new(registry, config.props)))
}
