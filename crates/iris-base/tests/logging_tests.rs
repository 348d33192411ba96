use iris_base::logging::{StdoutLogger, format_timestamp, init_stdout_logger};
use log::Log;

#[test]
fn test_stdout_logger_implements_log_trait() {
    let logger = StdoutLogger;

    let metadata = log::MetadataBuilder::new()
        .level(log::Level::Info)
        .target("test")
        .build();

    assert!(logger.enabled(&metadata));

    let record = log::RecordBuilder::new()
        .level(log::Level::Info)
        .target("test")
        .args(format_args!("test message"))
        .build();

    // This should not panic
    logger.log(&record);
    logger.flush();
}

#[test]
fn test_timestamp_format_shape() {
    let ts = format_timestamp();

    // YYYY-MM-DDTHH:MM:SS
    assert_eq!(ts.len(), 19);
    assert_eq!(&ts[4..5], "-");
    assert_eq!(&ts[7..8], "-");
    assert_eq!(&ts[10..11], "T");
    assert_eq!(&ts[13..14], ":");
    assert_eq!(&ts[16..17], ":");

    let year: u32 = ts[0..4].parse().unwrap();
    assert!(year >= 2024);
}

#[test]
fn test_init_stdout_logger_is_idempotent() {
    init_stdout_logger();
    init_stdout_logger();

    log::info!("logger initialized twice without panicking");
}
