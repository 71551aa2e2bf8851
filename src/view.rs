use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;
use std::future::Future;
use std::sync::{PoisonError, RwLock};

use crate::error::{Error, Result};
use crate::handle::ViewHandle;
use crate::models::*;
use crate::proxy::CommandProxy;
use crate::registry::{Capability, NativeRegistry};

/// Typed control surface of one camera preview.
///
/// Every command is dispatched before the returned future is created, so an
/// unsupported capability or a missing view fails at the call site:
///
/// ```ignore
/// let picture = view.take_picture(PictureOptions::default())?.await?;
/// ```
#[derive(Debug)]
pub struct CameraView {
    proxy: CommandProxy,
    props: RwLock<CameraProps>,
}

impl CameraView {
    pub fn new(registry: NativeRegistry, props: CameraProps) -> Self {
        Self {
            proxy: CommandProxy::new(registry),
            props: RwLock::new(props),
        }
    }

    pub fn proxy(&self) -> &CommandProxy {
        &self.proxy
    }

    pub fn is_available(&self, capability: Capability) -> bool {
        self.proxy.is_available(capability.name())
    }

    /// Bind a freshly mounted native view and push the current props to it.
    ///
    /// The binding takes effect immediately; the returned future resolves once
    /// the native view has accepted the props, or right away when the platform
    /// has no `updateProps`.
    pub fn mount(
        &self,
        handle: ViewHandle,
    ) -> Result<impl Future<Output = Result<()>> + Send + 'static> {
        let args = vec![serde_json::to_value(self.props())?];
        self.proxy.bind(handle)?;
        let pending = if self.is_available(Capability::UpdateProps) {
            Some(self.call_unit(Capability::UpdateProps, args)?)
        } else {
            None
        };
        Ok(async move {
            match pending {
                Some(pending) => pending.await,
                None => Ok(()),
            }
        })
    }

    pub fn unmount(&self) -> Option<ViewHandle> {
        self.proxy.unbind()
    }

    pub fn props(&self) -> CameraProps {
        self.props
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the current props and push them to the native view.
    ///
    /// The props are kept even when the push is rejected; [`CameraView::mount`]
    /// pushes them to the next view.
    pub fn set_props(
        &self,
        props: CameraProps,
    ) -> Result<impl Future<Output = Result<()>> + Send + 'static> {
        let args = vec![serde_json::to_value(&props)?];
        *self.props.write().unwrap_or_else(PoisonError::into_inner) = props;
        self.call_unit(Capability::UpdateProps, args)
    }

    pub fn pause_preview(&self) -> Result<impl Future<Output = Result<()>> + Send + 'static> {
        self.call_unit(Capability::PausePreview, vec![])
    }

    pub fn resume_preview(&self) -> Result<impl Future<Output = Result<()>> + Send + 'static> {
        self.call_unit(Capability::ResumePreview, vec![])
    }

    pub fn take_picture(
        &self,
        options: PictureOptions,
    ) -> Result<impl Future<Output = Result<PictureResponse>> + Send + 'static> {
        let options = options.normalized();
        self.call(Capability::TakePicture, vec![serde_json::to_value(&options)?])
    }

    /// Start recording. The returned future resolves once recording stops,
    /// either through [`CameraView::stop_recording`] or a native limit.
    pub fn record(
        &self,
        options: RecordingOptions,
    ) -> Result<impl Future<Output = Result<VideoResponse>> + Send + 'static> {
        self.call(Capability::Record, vec![serde_json::to_value(&options)?])
    }

    pub fn stop_recording(&self) -> Result<impl Future<Output = Result<()>> + Send + 'static> {
        self.call_unit(Capability::StopRecording, vec![])
    }

    pub fn get_available_ratios(
        &self,
    ) -> Result<impl Future<Output = Result<Vec<String>>> + Send + 'static> {
        self.call(Capability::GetAvailableRatios, vec![])
    }

    pub fn get_available_picture_sizes(
        &self,
        ratio: &str,
    ) -> Result<impl Future<Output = Result<Vec<String>>> + Send + 'static> {
        self.call(
            Capability::GetAvailablePictureSizes,
            vec![Value::String(ratio.to_string())],
        )
    }

    /// Focus on a point of the preview. The effect lasts until the next
    /// autofocus pass.
    pub fn focus_on_point(
        &self,
        point: Point,
    ) -> Result<impl Future<Output = Result<bool>> + Send + 'static> {
        if !point.is_normalized() {
            return Err(Error::InvalidArgument(format!(
                "focus point ({}, {}) is outside [0, 1]",
                point.x, point.y
            )));
        }
        self.call(Capability::FocusOnPoint, vec![serde_json::to_value(point)?])
    }

    fn call<T>(
        &self,
        capability: Capability,
        args: Vec<Value>,
    ) -> Result<impl Future<Output = Result<T>> + Send + 'static>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let pending = self.proxy.dispatch(capability.name(), args)?;
        Ok(async move {
            let value = pending.await?;
            serde_json::from_value::<T>(value).map_err(Error::from)
        })
    }

    // Commands without a payload accept whatever the native side resolves with.
    fn call_unit(
        &self,
        capability: Capability,
        args: Vec<Value>,
    ) -> Result<impl Future<Output = Result<()>> + Send + 'static> {
        let pending = self.call::<IgnoredAny>(capability, args)?;
        Ok(async move { pending.await.map(|_| ()) })
    }
}
