use std::future::Future;
use tauri::{AppHandle, Emitter, Runtime};

use crate::error::Result;
use crate::handle::ViewHandle;
use crate::models::*;
use crate::view::CameraView;

pub const READY_EVENT: &str = "camera-view://ready";
pub const MOUNT_ERROR_EVENT: &str = "camera-view://mount-error";

/// Access to the camera view APIs.
pub struct Camera<R: Runtime> {
    app: AppHandle<R>,
    view: CameraView,
}

impl<R: Runtime> Camera<R> {
    pub(crate) fn new(app: AppHandle<R>, view: CameraView) -> Self {
        Self { app, view }
    }

    pub fn view(&self) -> &CameraView {
        &self.view
    }

    /// Bind the native view that just mounted, push the current props to it,
    /// then notify the frontend.
    ///
    /// If the native view rejects the props the view stays bound and `ready`
    /// is not emitted.
    pub async fn mount(&self, handle: ViewHandle) -> Result<()> {
        self.view.mount(handle)?.await?;
        self.app.emit(READY_EVENT, ReadyEvent { handle })?;
        Ok(())
    }

    pub fn unmount(&self) -> Option<ViewHandle> {
        self.view.unmount()
    }

    /// Relay a native mount failure to the frontend.
    ///
    /// Any binding left from the failed mount is dropped so later commands are
    /// rejected instead of reaching a view that never started.
    pub fn report_mount_error(&self, message: String) -> Result<()> {
        log::warn!("Camera view failed to mount: {}", message);
        self.view.unmount();
        self.app.emit(MOUNT_ERROR_EVENT, MountErrorEvent { message })?;
        Ok(())
    }

    pub fn props(&self) -> CameraProps {
        self.view.props()
    }

    pub fn set_props(
        &self,
        props: CameraProps,
    ) -> Result<impl Future<Output = Result<()>> + Send + 'static> {
        self.view.set_props(props)
    }

    pub fn pause_preview(&self) -> Result<impl Future<Output = Result<()>> + Send + 'static> {
        self.view.pause_preview()
    }

    pub fn resume_preview(&self) -> Result<impl Future<Output = Result<()>> + Send + 'static> {
        self.view.resume_preview()
    }

    pub fn take_picture(
        &self,
        options: PictureOptions,
    ) -> Result<impl Future<Output = Result<PictureResponse>> + Send + 'static> {
        self.view.take_picture(options)
    }

    pub fn record(
        &self,
        options: RecordingOptions,
    ) -> Result<impl Future<Output = Result<VideoResponse>> + Send + 'static> {
        self.view.record(options)
    }

    pub fn stop_recording(&self) -> Result<impl Future<Output = Result<()>> + Send + 'static> {
        self.view.stop_recording()
    }

    pub fn get_available_ratios(
        &self,
    ) -> Result<impl Future<Output = Result<Vec<String>>> + Send + 'static> {
        self.view.get_available_ratios()
    }

    pub fn get_available_picture_sizes(
        &self,
        ratio: &str,
    ) -> Result<impl Future<Output = Result<Vec<String>>> + Send + 'static> {
        self.view.get_available_picture_sizes(ratio)
    }

    pub fn focus_on_point(
        &self,
        point: Point,
    ) -> Result<impl Future<Output = Result<bool>> + Send + 'static> {
        self.view.focus_on_point(point)
    }
}
