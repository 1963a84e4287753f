use tasklane_log::{Config, LogError, LoggerBuilder};

// One process-wide subscriber: every assertion that installs one lives in
// this single test.
#[test]
fn install_once_then_refuse() {
    let bad = Config {
        level: "info,tasklane=loud".to_string(),
        ..Config::test()
    };
    assert!(matches!(
        LoggerBuilder::from_config(bad).build(),
        Err(LogError::Filter(_))
    ));

    let guard = LoggerBuilder::from_config(Config {
        service: Some("tasklane-test".to_string()),
        ..Config::test()
    })
    .build()
    .expect("first install succeeds");
    tracing::info!(answer = 42, "inside app span");

    assert!(matches!(
        LoggerBuilder::from_config(Config::test()).build(),
        Err(LogError::Init(_))
    ));

    tasklane_log::init_test();
    tasklane_log::init_test();
    drop(guard);
}
