use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// Decodes `raw`, encodes the result again and checks that decoding it a second time
/// produces exactly the same value.
pub fn assert_round_trips<T>(raw: &str) -> T
where
    T: Serialize + DeserializeOwned + PartialEq + Debug,
{
    let decoded: T = serde_json::from_str(raw).expect("Fixture does not decode");
    let encoded = serde_json::to_string(&decoded).unwrap();
    let decoded_again: T = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded, decoded_again);
    decoded
}
