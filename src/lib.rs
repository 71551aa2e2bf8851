use tauri::{
    plugin::{self, TauriPlugin},
    Manager, Runtime,
};

pub use models::*;

#[cfg(desktop)]
mod desktop;
#[cfg(mobile)]
mod mobile;

mod camera;
mod commands;
mod error;
mod handle;
mod models;
mod proxy;
mod registry;
mod view;

pub use camera::{Camera, MOUNT_ERROR_EVENT, READY_EVENT};
pub use error::{Error, Result};
pub use handle::ViewHandle;
pub use proxy::CommandProxy;
pub use registry::{BoxFuture, Capability, NativeFn, NativeRegistry, CAMERA_SUBSYSTEM};
pub use view::CameraView;

const PLUGIN_NAME: &str = "camera-view";

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`] to access the camera view APIs.
pub trait CameraExt<R: Runtime> {
    fn camera(&self) -> &Camera<R>;
}

impl<R: Runtime, T: Manager<R>> crate::CameraExt<R> for T {
    fn camera(&self) -> &Camera<R> {
        self.state::<Camera<R>>().inner()
    }
}

/// Builds the plugin, optionally with an application-provided native registry.
///
/// On Android and iOS the bundled native plugin is used unless a registry is
/// given. On desktop there is no bundled camera view, so without a registry
/// every command reports itself unavailable.
#[derive(Default)]
pub struct Builder {
    registry: Option<NativeRegistry>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(mut self, registry: NativeRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn build<R: Runtime>(self) -> TauriPlugin<R, Option<Config>> {
        let registry = self.registry;
        plugin::Builder::<R, Option<Config>>::new(PLUGIN_NAME)
            .invoke_handler(tauri::generate_handler![
                commands::mount_view,
                commands::unmount_view,
                commands::report_mount_error,
                commands::get_props,
                commands::set_props,
                commands::pause_preview,
                commands::resume_preview,
                commands::take_picture,
                commands::record,
                commands::stop_recording,
                commands::get_available_ratios,
                commands::get_available_picture_sizes,
                commands::focus_on_point,
            ])
            .setup(move |app, api| {
                #[cfg(mobile)]
                let camera = mobile::init(app, api, registry)?;
                #[cfg(desktop)]
                let camera = desktop::init(app, api, registry)?;
                app.manage(camera);
                Ok(())
            })
            .build()
    }
}

/// Initializes the plugin.
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<Config>> {
    Builder::new().build()
}
