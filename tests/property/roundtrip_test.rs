// tests/property/roundtrip_test.rs

//! Property-based round-trip tests: what goes in comes back out, in order.

use crate::test_helpers::{TestContext, lrange_to_strings};
use listdb::core::RespValue;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 100,
        ..ProptestConfig::default()
    })]

    #[test]
    fn test_rpush_lrange_roundtrip(
        key in "[a-zA-Z0-9_]{1,32}",
        values in prop::collection::vec("[a-z0-9]{0,16}", 1..=40)
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let ctx = TestContext::new().await;
            let refs: Vec<&str> = values.iter().map(String::as_str).collect();

            let pushed = ctx.rpush(&key, &refs).await.unwrap();
            assert_eq!(pushed, RespValue::Integer(values.len() as i64));

            let result = ctx.lrange(&key, 0, -1).await.unwrap();
            assert_eq!(lrange_to_strings(&result), values);
        });
    }

    #[test]
    fn test_lpush_lrange_reverses(
        key in "[a-zA-Z0-9_]{1,32}",
        values in prop::collection::vec("[a-z0-9]{0,16}", 1..=40)
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let ctx = TestContext::new().await;
            let refs: Vec<&str> = values.iter().map(String::as_str).collect();
            ctx.lpush(&key, &refs).await.unwrap();

            let mut expected = values.clone();
            expected.reverse();
            let result = ctx.lrange(&key, 0, -1).await.unwrap();
            assert_eq!(lrange_to_strings(&result), expected);
        });
    }

    #[test]
    fn test_lrange_matches_slice_semantics(
        values in prop::collection::vec("[a-z]{1,4}", 0..=20),
        start in -30i64..30,
        stop in -30i64..30
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let ctx = TestContext::new().await;
            if !values.is_empty() {
                let refs: Vec<&str> = values.iter().map(String::as_str).collect();
                ctx.rpush("list", &refs).await.unwrap();
            }

            let len = values.len() as i64;
            let from = if start < 0 { (len + start).max(0) } else { start };
            let to = if stop < 0 { len + stop } else { stop.min(len - 1) };
            let expected: Vec<String> = if len == 0 || from > to || from >= len {
                vec![]
            } else {
                values[from as usize..=to as usize].to_vec()
            };

            let result = ctx.lrange("list", start, stop).await.unwrap();
            assert_eq!(lrange_to_strings(&result), expected);
        });
    }
}
