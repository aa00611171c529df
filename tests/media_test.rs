use async_trait::async_trait;
use frontdesk::media::*;
use serde_json::json;

struct MockHost {
    devices: Vec<MediaDevice>,
    fail_enumeration: bool,
    permission: Option<PermissionState>,
}

impl MockHost {
    fn with_devices(devices: Vec<MediaDevice>) -> Self {
        Self {
            devices,
            fail_enumeration: false,
            permission: Some(PermissionState::Granted),
        }
    }

    fn failing() -> Self {
        Self {
            devices: Vec::new(),
            fail_enumeration: true,
            permission: None,
        }
    }

    fn with_permission(permission: PermissionState) -> Self {
        Self {
            devices: Vec::new(),
            fail_enumeration: false,
            permission: Some(permission),
        }
    }
}

#[async_trait]
impl MediaHost for MockHost {
    async fn enumerate_devices(&self) -> Result<Vec<MediaDevice>, HostError> {
        if self.fail_enumeration {
            Err(HostError::Query("mock enumeration failure".to_string()))
        } else {
            Ok(self.devices.clone())
        }
    }

    async fn query_permission(
        &self,
        _resource: PermissionResource,
    ) -> Result<PermissionState, HostError> {
        self.permission
            .ok_or_else(|| HostError::Unsupported("permissions".to_string()))
    }
}

fn device(id: &str, kind: DeviceKind) -> MediaDevice {
    MediaDevice {
        device_id: id.to_string(),
        kind,
        label: format!("{id} label"),
    }
}

#[tokio::test]
async fn test_device_info_partitions_devices_by_kind() {
    let host = MockHost::with_devices(vec![
        device("mic-1", DeviceKind::AudioInput),
        device("cam-1", DeviceKind::VideoInput),
        device("mic-2", DeviceKind::AudioInput),
        device("speaker-1", DeviceKind::AudioOutput),
    ]);

    let info = device_info(&host).await;

    assert_eq!(info.audio_input_devices.len(), 2);
    assert_eq!(info.video_input_devices.len(), 1);
    assert_eq!(info.audio_output_devices.len(), 1);
    assert_eq!(info.audio_input_devices[0].device_id, "mic-1");
    assert_eq!(info.video_input_devices[0].device_id, "cam-1");
    assert!(info.has_audio_input_devices);
    assert!(info.has_video_input_devices);
}

#[tokio::test]
async fn test_device_info_no_devices_clears_flags() {
    let host = MockHost::with_devices(Vec::new());
    let info = device_info(&host).await;
    assert!(!info.has_audio_input_devices);
    assert!(!info.has_video_input_devices);
    assert!(info.audio_output_devices.is_empty());
}

#[tokio::test]
async fn test_device_info_enumeration_failure_reports_empty() {
    let host = MockHost::failing();
    assert_eq!(device_info(&host).await, DeviceInfo::default());
}

#[tokio::test]
async fn test_is_permission_denied_only_on_positive_denial() {
    let denied = MockHost::with_permission(PermissionState::Denied);
    assert!(is_permission_denied(&denied, PermissionResource::Camera).await);

    let granted = MockHost::with_permission(PermissionState::Granted);
    assert!(!is_permission_denied(&granted, PermissionResource::Camera).await);

    let prompt = MockHost::with_permission(PermissionState::Prompt);
    assert!(!is_permission_denied(&prompt, PermissionResource::Microphone).await);
}

#[tokio::test]
async fn test_is_permission_denied_query_failure_is_not_denial() {
    let host = MockHost::failing();
    assert!(!is_permission_denied(&host, PermissionResource::Camera).await);
}

#[test]
fn test_device_kind_wire_names() {
    assert_eq!(serde_json::to_value(DeviceKind::AudioInput).unwrap(), json!("audioinput"));
    assert_eq!(serde_json::to_value(DeviceKind::AudioOutput).unwrap(), json!("audiooutput"));
    assert_eq!(serde_json::to_value(DeviceKind::VideoInput).unwrap(), json!("videoinput"));
}

#[test]
fn test_permission_resource_display_names() {
    assert_eq!(PermissionResource::Camera.to_string(), "camera");
    assert_eq!(PermissionResource::Microphone.to_string(), "microphone");
}

#[test]
fn test_media_device_parses_host_shaped_json() {
    let parsed: MediaDevice = serde_json::from_value(json!({
        "device_id": "mic-1",
        "kind": "audioinput",
        "label": "Built-in Microphone"
    }))
    .unwrap();
    assert_eq!(parsed.kind, DeviceKind::AudioInput);
    assert_eq!(parsed.label, "Built-in Microphone");
}
