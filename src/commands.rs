use tauri::{command, AppHandle, Runtime};

use crate::handle::ViewHandle;
use crate::models::*;
use crate::CameraExt;
use crate::Result;

/// Called by the frontend once the native camera view exists.
#[command]
pub(crate) async fn mount_view<R: Runtime>(app: AppHandle<R>, handle: ViewHandle) -> Result<()> {
    app.camera().mount(handle).await
}

#[command]
pub(crate) async fn unmount_view<R: Runtime>(app: AppHandle<R>) -> Result<Option<ViewHandle>> {
    Ok(app.camera().unmount())
}

#[command]
pub(crate) async fn report_mount_error<R: Runtime>(
    app: AppHandle<R>,
    message: String,
) -> Result<()> {
    app.camera().report_mount_error(message)
}

#[command]
pub(crate) async fn get_props<R: Runtime>(app: AppHandle<R>) -> Result<CameraProps> {
    Ok(app.camera().props())
}

#[command]
pub(crate) async fn set_props<R: Runtime>(app: AppHandle<R>, props: CameraProps) -> Result<()> {
    app.camera().set_props(props)?.await
}

#[command]
pub(crate) async fn pause_preview<R: Runtime>(app: AppHandle<R>) -> Result<()> {
    app.camera().pause_preview()?.await
}

#[command]
pub(crate) async fn resume_preview<R: Runtime>(app: AppHandle<R>) -> Result<()> {
    app.camera().resume_preview()?.await
}

#[command]
pub(crate) async fn take_picture<R: Runtime>(
    app: AppHandle<R>,
    options: Option<PictureOptions>,
) -> Result<PictureResponse> {
    app.camera().take_picture(options.unwrap_or_default())?.await
}

/// Resolves when the recording stops, not when it starts.
#[command]
pub(crate) async fn record<R: Runtime>(
    app: AppHandle<R>,
    options: Option<RecordingOptions>,
) -> Result<VideoResponse> {
    app.camera().record(options.unwrap_or_default())?.await
}

#[command]
pub(crate) async fn stop_recording<R: Runtime>(app: AppHandle<R>) -> Result<()> {
    app.camera().stop_recording()?.await
}

#[command]
pub(crate) async fn get_available_ratios<R: Runtime>(app: AppHandle<R>) -> Result<Vec<String>> {
    app.camera().get_available_ratios()?.await
}

#[command]
pub(crate) async fn get_available_picture_sizes<R: Runtime>(
    app: AppHandle<R>,
    ratio: String,
) -> Result<Vec<String>> {
    app.camera().get_available_picture_sizes(&ratio)?.await
}

#[command]
pub(crate) async fn focus_on_point<R: Runtime>(app: AppHandle<R>, point: Point) -> Result<bool> {
    app.camera().focus_on_point(point)?.await
}
