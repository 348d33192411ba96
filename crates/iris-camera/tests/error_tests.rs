use iris_camera::CameraError;
use std::io;

#[test]
fn test_from_io_error() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "no such device");
    let cam_err: CameraError = io_err.into();

    match cam_err {
        CameraError::Device(msg) => assert!(msg.contains("no such device")),
        _ => panic!("Expected CameraError::Device variant"),
    }
}

#[test]
fn test_error_display() {
    let not_found = CameraError::NotFound(5);
    assert_eq!(not_found.to_string(), "camera 5 not found");

    let no_caps = CameraError::NoCapabilities(2);
    assert!(no_caps.to_string().contains("no capabilities"));

    let invalid = CameraError::InvalidRequest("zero dimension".to_string());
    assert!(invalid.to_string().contains("zero dimension"));

    let device = CameraError::Device("V4L2 error".to_string());
    assert!(device.to_string().contains("V4L2 error"));

    let stream = CameraError::Stream("streaming failed".to_string());
    assert!(stream.to_string().contains("streaming failed"));

    let channel = CameraError::Channel("channel closed".to_string());
    assert!(channel.to_string().contains("channel closed"));
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_err: &E) {}
    assert_error(&CameraError::NotFound(0));
}
