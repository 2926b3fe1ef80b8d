//! Logging setup for tests.

/// Initialize the logger once; safe to call from every test.
pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}
