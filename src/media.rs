//! Host-provided media capabilities.
//!
//! Device enumeration and permission state live with the embedding host
//! (a browser shell, a desktop webview, an OS media layer), not with this
//! crate. The [`MediaHost`] trait is the injected seam: applications
//! implement it once, and the wrappers here fold its failures into the
//! graceful defaults the rest of the UI expects.

use async_trait::async_trait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Common error type for host capability calls.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Capability not available: {0}")]
    Unsupported(String),

    #[error("Host query failed: {0}")]
    Query(String),
}

/// What a media device captures or plays back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    AudioInput,
    AudioOutput,
    VideoInput,
}

/// One device descriptor as reported by the host's enumeration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaDevice {
    pub device_id: String,
    pub kind: DeviceKind,
    pub label: String,
}

/// Devices partitioned by kind, plus the presence flags screens key off.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub audio_input_devices: Vec<MediaDevice>,
    pub video_input_devices: Vec<MediaDevice>,
    pub audio_output_devices: Vec<MediaDevice>,
    pub has_audio_input_devices: bool,
    pub has_video_input_devices: bool,
}

/// Resource names accepted by the host's permission query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionResource {
    Camera,
    Microphone,
}

impl fmt::Display for PermissionResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PermissionResource::Camera => "camera",
            PermissionResource::Microphone => "microphone",
        };
        f.write_str(name)
    }
}

/// Permission state as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    Granted,
    Denied,
    Prompt,
}

/// Capabilities the embedding host provides to the media helpers.
///
/// Both calls are awaited at most once per wrapper invocation, with no
/// retry and no timeout; a host without one of the capabilities should
/// return [`HostError::Unsupported`] and the wrappers will degrade.
#[async_trait]
pub trait MediaHost: Send + Sync {
    /// Enumerates the media devices currently visible to the host.
    async fn enumerate_devices(&self) -> Result<Vec<MediaDevice>, HostError>;

    /// Queries the current permission state for a resource.
    async fn query_permission(
        &self,
        resource: PermissionResource,
    ) -> Result<PermissionState, HostError>;
}

/// Enumerates devices and partitions them by kind.
///
/// Enumeration failure is not propagated: it logs a warning and reports an
/// empty [`DeviceInfo`], so callers can treat "no host" and "no devices"
/// the same way.
pub async fn device_info(host: &dyn MediaHost) -> DeviceInfo {
    let devices = match host.enumerate_devices().await {
        Ok(devices) => devices,
        Err(e) => {
            warn!("Device enumeration failed, reporting no devices: {e}");
            return DeviceInfo::default();
        }
    };

    let mut info = DeviceInfo::default();
    for device in devices {
        match device.kind {
            DeviceKind::AudioInput => info.audio_input_devices.push(device),
            DeviceKind::VideoInput => info.video_input_devices.push(device),
            DeviceKind::AudioOutput => info.audio_output_devices.push(device),
        }
    }
    info.has_audio_input_devices = !info.audio_input_devices.is_empty();
    info.has_video_input_devices = !info.video_input_devices.is_empty();

    info
}

/// True only when the host positively reports the permission as denied.
///
/// A missing capability or a failing query answers `false`: callers use
/// this to decide whether to show a "permission blocked" hint, and an
/// unknown state should never trigger it.
pub async fn is_permission_denied(host: &dyn MediaHost, resource: PermissionResource) -> bool {
    match host.query_permission(resource).await {
        Ok(state) => state == PermissionState::Denied,
        Err(e) => {
            debug!("Permission query for {resource} failed, assuming not denied: {e}");
            false
        }
    }
}
