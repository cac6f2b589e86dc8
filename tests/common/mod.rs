pub mod fixtures;
pub mod test_context;

/// Loads a recorded Paystack response from `tests/fixtures/responses`.
macro_rules! fixture {
    ($name:literal) => {
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/responses/",
            $name,
            ".json"
        ))
    };
}
