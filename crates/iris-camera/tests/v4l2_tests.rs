#[cfg(feature = "v4l2")]
mod v4l2_tests {
    use iris_camera::{
        CameraDriver, CameraError, FrameSink, NegotiatedConfig, Resolution, V4l2Driver,
    };

    struct NullSink;

    impl FrameSink for NullSink {
        fn push_frame(&mut self, _frame: &[u8]) -> bool {
            true
        }
    }

    #[test]
    fn test_list_cameras_descriptors_are_usable() {
        let driver = V4l2Driver::new();
        let cameras = driver.list_cameras().expect("enumeration never fails");

        // whatever is present must honor the descriptor contract
        for camera in cameras {
            assert!(!camera.resolutions.is_empty());
            assert!(!camera.frame_rates.is_empty());
            assert!(!camera.front_facing);
            assert_eq!(camera.orientation, 0);
        }
    }

    #[test]
    fn test_open_session_unknown_camera() {
        let driver = V4l2Driver::new();
        let config = NegotiatedConfig {
            camera_id: 250,
            resolution: Resolution::new(640, 480),
            frame_rate: 30,
        };

        let result = driver.open_session(&config, Box::new(NullSink));

        match result {
            Err(CameraError::Device(_)) => {}
            Ok(session) => {
                driver.close_session(session);
                panic!("Expected open to fail on /dev/video250");
            }
            Err(other) => panic!("Expected CameraError::Device, got {:?}", other),
        }
    }
}
