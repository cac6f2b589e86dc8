#[cfg(not(feature = "acceptance-tests"))]
mod customers;
mod errors;
mod fixtures;
mod miscellaneous;
mod transfer_control;
#[cfg(not(feature = "acceptance-tests"))]
mod transfers;
