use serde::{ser::Serializer, Serialize};

use crate::handle::ViewHandle;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[error(transparent)]
  Tauri(#[from] tauri::Error),
  #[cfg(mobile)]
  #[error(transparent)]
  PluginInvoke(#[from] tauri::plugin::mobile::PluginInvokeError),
  #[error(
    "The method or property {subsystem}.{capability} is not available on {platform}, \
     are you sure you've linked all the native dependencies properly?"
  )]
  Unavailable {
    subsystem: String,
    capability: String,
    platform: &'static str,
  },
  #[error("Cannot call {capability}: no camera view is mounted")]
  NotMounted { capability: String },
  #[error("A camera view is already mounted with handle {0}")]
  AlreadyMounted(ViewHandle),
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),
  #[error("Unexpected response from native camera: {0}")]
  InvalidResponse(#[from] serde_json::Error),
  #[error("Native camera error: {0}")]
  Native(String),
}

impl Error {
  /// Whether the error came from the capability gate rather than the native side.
  pub fn is_unavailable(&self) -> bool {
    matches!(self, Error::Unavailable { .. })
  }
}

impl Serialize for Error {
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(self.to_string().as_ref())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unavailable_message_names_subsystem_and_capability() {
    let err = Error::Unavailable {
      subsystem: "Camera".into(),
      capability: "getAvailableRatiosAsync".into(),
      platform: "ios",
    };
    let message = err.to_string();
    assert!(message.contains("Camera.getAvailableRatiosAsync"));
    assert!(message.contains("ios"));
    assert!(err.is_unavailable());
  }

  #[test]
  fn serializes_as_display_string() {
    let err = Error::NotMounted {
      capability: "pausePreview".into(),
    };
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(
      json,
      serde_json::json!("Cannot call pausePreview: no camera view is mounted")
    );
  }
}
