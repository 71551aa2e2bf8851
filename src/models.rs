use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::handle::ViewHandle;

// Plugin configuration (`plugins.camera-view` in tauri.conf.json)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Props applied to the camera view until the frontend overrides them.
    #[serde(default)]
    pub props: CameraProps,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AutoFocus {
    On,
    #[default]
    Off,
    Auto,
    SingleShot,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CameraFacing {
    Front,
    #[default]
    Back,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlashMode {
    On,
    #[default]
    Off,
    Auto,
    Torch,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WhiteBalance {
    #[default]
    Auto,
    Sunny,
    Cloudy,
    Shadow,
    Fluorescent,
    Incandescent,
}

/// Props consumed by the native camera view.
///
/// Values are only checked for shape here; ranges such as `zoom` in [0, 1]
/// are enforced by the native side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CameraProps {
    pub autofocus: AutoFocus,
    pub facing: CameraFacing,
    pub flash_mode: FlashMode,
    pub focus_depth: f64,
    pub white_balance: WhiteBalance,
    pub zoom: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_size: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageFormat {
    #[default]
    Jpg,
    Png,
}

// Request for a still capture
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureOptions {
    /// Compression quality in [0, 1]. Defaults to 1 when absent.
    pub quality: Option<f64>,
    #[serde(default)]
    pub format: ImageFormat,
    #[serde(default)]
    pub skip_processing: bool,
    #[serde(default)]
    pub base64: bool,
    #[serde(default)]
    pub exif: bool,
}

impl PictureOptions {
    pub const DEFAULT_QUALITY: f64 = 1.0;

    /// Fill in the defaults the native side expects.
    pub fn normalized(mut self) -> Self {
        let quality = match self.quality {
            Some(q) if q.is_finite() => q.clamp(0.0, 1.0),
            _ => Self::DEFAULT_QUALITY,
        };
        self.quality = Some(quality);
        self
    }
}

// Captured still, as reported by the native camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureResponse {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base64: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exif: Option<Value>,
    /// Fields the native camera reports beyond the ones above, kept as sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoQuality {
    #[serde(rename = "2160p")]
    Uhd2160p,
    #[serde(rename = "1080p")]
    Fhd1080p,
    #[serde(rename = "720p")]
    Hd720p,
    #[serde(rename = "480p")]
    Sd480p,
    #[serde(rename = "4:3")]
    FourByThree,
}

// Request to start recording
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingOptions {
    /// Seconds after which recording stops on its own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<f64>,
    /// Bytes after which recording stops on its own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_size: Option<u64>,
    #[serde(default)]
    pub mute: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<VideoQuality>,
}

// Finished recording
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Normalized view coordinates, both axes in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn is_normalized(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

// Event sent to frontend once the native view is bound
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyEvent {
    pub handle: ViewHandle,
}

// Event sent to frontend when the native view could not start
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MountErrorEvent {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn props_default_when_unset() {
        let props: CameraProps = serde_json::from_value(json!({})).unwrap();
        assert_eq!(props.autofocus, AutoFocus::Off);
        assert_eq!(props.facing, CameraFacing::Back);
        assert_eq!(props.flash_mode, FlashMode::Off);
        assert_eq!(props.focus_depth, 0.0);
        assert_eq!(props.white_balance, WhiteBalance::Auto);
        assert_eq!(props.zoom, 0.0);
        assert_eq!(props, CameraProps::default());
    }

    #[test]
    fn props_use_camel_case_on_the_wire() {
        let props: CameraProps = serde_json::from_value(json!({
            "flashMode": "torch",
            "whiteBalance": "cloudy",
            "autofocus": "singleShot",
            "zoom": 0.25,
        }))
        .unwrap();
        assert_eq!(props.flash_mode, FlashMode::Torch);
        assert_eq!(props.white_balance, WhiteBalance::Cloudy);
        assert_eq!(props.autofocus, AutoFocus::SingleShot);
        assert_eq!(props.facing, CameraFacing::Back);

        let wire = serde_json::to_value(&props).unwrap();
        assert_eq!(wire["flashMode"], "torch");
        assert_eq!(wire["focusDepth"], 0.0);
        assert!(wire.get("ratio").is_none());
    }

    #[test]
    fn config_without_props_uses_defaults() {
        let config: Config = serde_json::from_value(json!({})).unwrap();
        assert_eq!(config.props, CameraProps::default());

        let config: Config =
            serde_json::from_value(json!({ "props": { "facing": "front" } })).unwrap();
        assert_eq!(config.props.facing, CameraFacing::Front);
        assert_eq!(config.props.zoom, 0.0);
    }

    #[test]
    fn picture_quality_defaults_and_clamps() {
        assert_eq!(PictureOptions::default().normalized().quality, Some(1.0));
        let opts = PictureOptions {
            quality: Some(1.7),
            ..Default::default()
        };
        assert_eq!(opts.normalized().quality, Some(1.0));
        let opts = PictureOptions {
            quality: Some(0.3),
            ..Default::default()
        };
        assert_eq!(opts.normalized().quality, Some(0.3));
        let opts = PictureOptions {
            quality: Some(f64::NAN),
            ..Default::default()
        };
        assert_eq!(opts.normalized().quality, Some(1.0));
    }

    #[test]
    fn recording_options_omit_unset_limits() {
        let opts = RecordingOptions {
            max_duration: Some(10.0),
            quality: Some(VideoQuality::Hd720p),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&opts).unwrap(),
            json!({ "maxDuration": 10.0, "mute": false, "quality": "720p" })
        );
    }

    #[test]
    fn point_range() {
        assert!(Point { x: 0.0, y: 1.0 }.is_normalized());
        assert!(!Point { x: -0.1, y: 0.5 }.is_normalized());
        assert!(!Point { x: 0.5, y: f64::NAN }.is_normalized());
    }
}
