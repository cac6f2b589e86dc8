#[macro_use]
mod common;
mod integration_tests;
