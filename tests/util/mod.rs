mod test_utils;

pub use test_utils::{response_json, TestContextExt};
