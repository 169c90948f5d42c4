// tests/integration/list_commands_test.rs

//! Integration tests for list commands
//! Tests: LPUSH, RPUSH, LPUSHX, RPUSHX, LPOP, RPOP, RPOPLPUSH, LLEN, LRANGE,
//! LINDEX, LSET, LTRIM, LINSERT, LREM

use super::test_helpers::{TestContext, assert_lrange_equals};
use bytes::Bytes;
use listdb::core::{ListDbError, RespValue};

// ===== Basic LPUSH/RPUSH Tests =====

#[tokio::test]
async fn test_lpush_basic() {
    let ctx = TestContext::new().await;

    let result = ctx.lpush("mylist", &["value1"]).await.unwrap();
    assert_eq!(result, RespValue::Integer(1));

    let result = ctx.lrange("mylist", 0, -1).await.unwrap();
    assert_lrange_equals(&result, &["value1"], "test_lpush_basic");
}

#[tokio::test]
async fn test_lpush_multiple_values_reverses_order() {
    let ctx = TestContext::new().await;

    // Each value is pushed at the head in turn, so the last argument ends up first.
    let result = ctx.lpush("mylist", &["a", "b", "c"]).await.unwrap();
    assert_eq!(result, RespValue::Integer(3));

    let result = ctx.lrange("mylist", 0, -1).await.unwrap();
    assert_lrange_equals(&result, &["c", "b", "a"], "test_lpush_multiple_values");
}

#[tokio::test]
async fn test_rpush_multiple_values_keeps_order() {
    let ctx = TestContext::new().await;

    let result = ctx.rpush("mylist", &["a", "b", "c"]).await.unwrap();
    assert_eq!(result, RespValue::Integer(3));

    let result = ctx.lrange("mylist", 0, -1).await.unwrap();
    assert_lrange_equals(&result, &["a", "b", "c"], "test_rpush_multiple_values");
}

#[tokio::test]
async fn test_push_returns_running_length() {
    let ctx = TestContext::new().await;

    assert_eq!(
        ctx.rpush("mylist", &["a", "b"]).await.unwrap(),
        RespValue::Integer(2)
    );
    assert_eq!(
        ctx.lpush("mylist", &["z"]).await.unwrap(),
        RespValue::Integer(3)
    );

    let result = ctx.lrange("mylist", 0, -1).await.unwrap();
    assert_lrange_equals(&result, &["z", "a", "b"], "test_push_returns_running_length");
}

#[tokio::test]
async fn test_push_onto_string_is_wrongtype() {
    let ctx = TestContext::new().await;
    ctx.set("mykey", "hello").await.unwrap();

    let err = ctx.lpush("mykey", &["x"]).await.unwrap_err();
    assert_eq!(err, ListDbError::WrongType);
    let err = ctx.rpush("mykey", &["x"]).await.unwrap_err();
    assert_eq!(err, ListDbError::WrongType);

    // The string value is untouched.
    assert_eq!(
        ctx.get("mykey").await.unwrap(),
        RespValue::BulkString(Bytes::from("hello"))
    );
}

// ===== LPUSHX/RPUSHX Tests =====

#[tokio::test]
async fn test_pushx_on_absent_key_creates_nothing() {
    let ctx = TestContext::new().await;

    assert_eq!(
        ctx.lpushx("nolist", &["a"]).await.unwrap(),
        RespValue::Integer(0)
    );
    assert_eq!(
        ctx.rpushx("nolist", &["a", "b"]).await.unwrap(),
        RespValue::Integer(0)
    );

    assert_eq!(ctx.llen("nolist").await.unwrap(), RespValue::Integer(0));
    assert_eq!(ctx.exists(&["nolist"]).await.unwrap(), RespValue::Integer(0));
}

#[tokio::test]
async fn test_pushx_on_existing_list() {
    let ctx = TestContext::new().await;
    ctx.rpush("mylist", &["m"]).await.unwrap();

    assert_eq!(
        ctx.lpushx("mylist", &["b", "a"]).await.unwrap(),
        RespValue::Integer(3)
    );
    assert_eq!(
        ctx.rpushx("mylist", &["y", "z"]).await.unwrap(),
        RespValue::Integer(5)
    );

    let result = ctx.lrange("mylist", 0, -1).await.unwrap();
    assert_lrange_equals(&result, &["a", "b", "m", "y", "z"], "test_pushx_on_existing_list");
}

#[tokio::test]
async fn test_pushx_on_string_is_wrongtype() {
    let ctx = TestContext::new().await;
    ctx.set("mykey", "v").await.unwrap();

    let err = ctx.lpushx("mykey", &["a"]).await.unwrap_err();
    assert_eq!(err, ListDbError::WrongType);
}

// ===== LPOP/RPOP Tests =====

#[tokio::test]
async fn test_lpop_and_rpop() {
    let ctx = TestContext::new().await;
    ctx.rpush("mylist", &["a", "b", "c"]).await.unwrap();

    assert_eq!(
        ctx.lpop("mylist").await.unwrap(),
        RespValue::BulkString(Bytes::from("a"))
    );
    assert_eq!(
        ctx.rpop("mylist").await.unwrap(),
        RespValue::BulkString(Bytes::from("c"))
    );
    assert_eq!(ctx.llen("mylist").await.unwrap(), RespValue::Integer(1));

    let result = ctx.lrange("mylist", 0, -1).await.unwrap();
    assert_lrange_equals(&result, &["b"], "test_lpop_and_rpop");
}

#[tokio::test]
async fn test_pop_absent_key_is_nil() {
    let ctx = TestContext::new().await;
    assert_eq!(ctx.lpop("nolist").await.unwrap(), RespValue::Null);
    assert_eq!(ctx.rpop("nolist").await.unwrap(), RespValue::Null);
}

#[tokio::test]
async fn test_pop_to_empty_removes_key() {
    let ctx = TestContext::new().await;
    ctx.rpush("mylist", &["only"]).await.unwrap();

    assert_eq!(
        ctx.rpop("mylist").await.unwrap(),
        RespValue::BulkString(Bytes::from("only"))
    );
    assert_eq!(ctx.exists(&["mylist"]).await.unwrap(), RespValue::Integer(0));
    assert_eq!(ctx.type_of("mylist").await.unwrap(), RespValue::SimpleString("none".into()));
    assert_eq!(ctx.lrange("mylist", 0, -1).await.unwrap(), RespValue::Array(vec![]));
    assert_eq!(ctx.state.db.get_key_count(), 0);
}

#[tokio::test]
async fn test_pop_with_count_is_arity_error() {
    let ctx = TestContext::new().await;
    ctx.rpush("mylist", &["a", "b"]).await.unwrap();

    let err = ctx.run("LPOP", &["mylist", "2"]).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "ERR wrong number of arguments for 'lpop' command"
    );
    // Nothing was popped.
    assert_eq!(ctx.llen("mylist").await.unwrap(), RespValue::Integer(2));
}

#[tokio::test]
async fn test_pop_on_string_is_wrongtype() {
    let ctx = TestContext::new().await;
    ctx.set("mykey", "v").await.unwrap();

    assert_eq!(ctx.lpop("mykey").await.unwrap_err(), ListDbError::WrongType);
    assert_eq!(ctx.rpop("mykey").await.unwrap_err(), ListDbError::WrongType);
}

// ===== RPOPLPUSH Tests =====

#[tokio::test]
async fn test_rpoplpush_moves_tail_to_head() {
    let ctx = TestContext::new().await;
    ctx.rpush("src", &["a", "b", "c"]).await.unwrap();
    ctx.rpush("dst", &["x", "y"]).await.unwrap();

    let result = ctx.rpoplpush("src", "dst").await.unwrap();
    assert_eq!(result, RespValue::BulkString(Bytes::from("c")));

    let src = ctx.lrange("src", 0, -1).await.unwrap();
    assert_lrange_equals(&src, &["a", "b"], "rpoplpush source");
    let dst = ctx.lrange("dst", 0, -1).await.unwrap();
    assert_lrange_equals(&dst, &["c", "x", "y"], "rpoplpush destination");
}

#[tokio::test]
async fn test_rpoplpush_creates_destination() {
    let ctx = TestContext::new().await;
    ctx.rpush("src", &["only"]).await.unwrap();

    let result = ctx.rpoplpush("src", "dst").await.unwrap();
    assert_eq!(result, RespValue::BulkString(Bytes::from("only")));

    // Source was emptied and deleted.
    assert_eq!(ctx.exists(&["src"]).await.unwrap(), RespValue::Integer(0));
    let dst = ctx.lrange("dst", 0, -1).await.unwrap();
    assert_lrange_equals(&dst, &["only"], "rpoplpush created destination");
}

#[tokio::test]
async fn test_rpoplpush_absent_source_leaves_destination() {
    let ctx = TestContext::new().await;
    ctx.rpush("dst", &["x"]).await.unwrap();

    assert_eq!(ctx.rpoplpush("nosrc", "dst").await.unwrap(), RespValue::Null);
    assert_eq!(ctx.rpoplpush("nosrc", "nodst").await.unwrap(), RespValue::Null);

    let dst = ctx.lrange("dst", 0, -1).await.unwrap();
    assert_lrange_equals(&dst, &["x"], "rpoplpush absent source");
    assert_eq!(ctx.exists(&["nodst"]).await.unwrap(), RespValue::Integer(0));
}

#[tokio::test]
async fn test_rpoplpush_same_key_rotates() {
    let ctx = TestContext::new().await;
    ctx.rpush("ring", &["a", "b", "c"]).await.unwrap();

    let result = ctx.rpoplpush("ring", "ring").await.unwrap();
    assert_eq!(result, RespValue::BulkString(Bytes::from("c")));

    let ring = ctx.lrange("ring", 0, -1).await.unwrap();
    assert_lrange_equals(&ring, &["c", "a", "b"], "rpoplpush rotation");
}

#[tokio::test]
async fn test_rpoplpush_wrongtype_destination_leaves_source() {
    let ctx = TestContext::new().await;
    ctx.rpush("src", &["a", "b"]).await.unwrap();
    ctx.set("dst", "string").await.unwrap();

    let err = ctx.rpoplpush("src", "dst").await.unwrap_err();
    assert_eq!(err, ListDbError::WrongType);

    let src = ctx.lrange("src", 0, -1).await.unwrap();
    assert_lrange_equals(&src, &["a", "b"], "rpoplpush failed move");
}

#[tokio::test]
async fn test_rpoplpush_wrongtype_source() {
    let ctx = TestContext::new().await;
    ctx.set("src", "string").await.unwrap();

    let err = ctx.rpoplpush("src", "dst").await.unwrap_err();
    assert_eq!(err, ListDbError::WrongType);
    assert_eq!(ctx.exists(&["dst"]).await.unwrap(), RespValue::Integer(0));
}

#[tokio::test]
async fn test_rpoplpush_concurrent_opposite_moves() {
    let ctx = TestContext::new().await;
    let left: Vec<String> = (0..50).map(|i| format!("l{i}")).collect();
    let right: Vec<String> = (0..50).map(|i| format!("r{i}")).collect();
    let left_refs: Vec<&str> = left.iter().map(String::as_str).collect();
    let right_refs: Vec<&str> = right.iter().map(String::as_str).collect();
    ctx.rpush("left", &left_refs).await.unwrap();
    ctx.rpush("right", &right_refs).await.unwrap();

    let mut handles = Vec::new();
    for i in 0..100 {
        let router = ctx.router.clone();
        handles.push(tokio::spawn(async move {
            let (src, dst) = if i % 2 == 0 {
                ("left", "right")
            } else {
                ("right", "left")
            };
            router
                .route_frame(listdb::core::protocol::RespFrame::command(
                    "RPOPLPUSH",
                    [src, dst].map(|s| Bytes::from(s.to_string())),
                ))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    // Elements are only ever moved, never lost or duplicated.
    let l = ctx.llen("left").await.unwrap();
    let r = ctx.llen("right").await.unwrap();
    match (l, r) {
        (RespValue::Integer(l), RespValue::Integer(r)) => assert_eq!(l + r, 100),
        other => panic!("unexpected LLEN replies: {other:?}"),
    }
}

// ===== LLEN/LRANGE Tests =====

#[tokio::test]
async fn test_llen() {
    let ctx = TestContext::new().await;
    assert_eq!(ctx.llen("nolist").await.unwrap(), RespValue::Integer(0));

    ctx.rpush("mylist", &["a", "b", "c"]).await.unwrap();
    assert_eq!(ctx.llen("mylist").await.unwrap(), RespValue::Integer(3));

    ctx.set("mykey", "v").await.unwrap();
    assert_eq!(ctx.llen("mykey").await.unwrap_err(), ListDbError::WrongType);
}

#[tokio::test]
async fn test_lrange_clamps_and_handles_negatives() {
    let ctx = TestContext::new().await;
    ctx.rpush("mylist", &["a", "b", "c", "d", "e"]).await.unwrap();

    let result = ctx.lrange("mylist", 1, 3).await.unwrap();
    assert_lrange_equals(&result, &["b", "c", "d"], "lrange middle");

    let result = ctx.lrange("mylist", -2, -1).await.unwrap();
    assert_lrange_equals(&result, &["d", "e"], "lrange negative");

    let result = ctx.lrange("mylist", -100, 100).await.unwrap();
    assert_lrange_equals(&result, &["a", "b", "c", "d", "e"], "lrange clamped");

    assert_eq!(ctx.lrange("mylist", 3, 1).await.unwrap(), RespValue::Array(vec![]));
    assert_eq!(ctx.lrange("mylist", 5, 10).await.unwrap(), RespValue::Array(vec![]));
    assert_eq!(ctx.lrange("nolist", 0, -1).await.unwrap(), RespValue::Array(vec![]));
}

#[tokio::test]
async fn test_lrange_non_integer_bounds() {
    let ctx = TestContext::new().await;
    ctx.rpush("mylist", &["a"]).await.unwrap();

    let err = ctx.run("LRANGE", &["mylist", "zero", "-1"]).await.unwrap_err();
    assert_eq!(err, ListDbError::NotAnInteger);
    assert_eq!(
        err.to_string(),
        "ERR value is not an integer or out of range"
    );
}

#[tokio::test]
async fn test_lrange_respects_configured_limit() {
    let mut config = listdb::config::Config::default();
    config.safety.max_list_range_len = 2;
    let ctx = TestContext::with_config(config).await;
    ctx.rpush("mylist", &["a", "b", "c"]).await.unwrap();

    let result = ctx.lrange("mylist", 0, 1).await.unwrap();
    assert_lrange_equals(&result, &["a", "b"], "lrange under limit");

    let err = ctx.lrange("mylist", 0, -1).await.unwrap_err();
    assert!(matches!(err, ListDbError::InvalidRequest(_)));
}

// ===== LINDEX Tests =====

#[tokio::test]
async fn test_lindex() {
    let ctx = TestContext::new().await;
    ctx.rpush("mylist", &["a", "b", "c"]).await.unwrap();

    assert_eq!(
        ctx.lindex("mylist", 0).await.unwrap(),
        RespValue::BulkString(Bytes::from("a"))
    );
    assert_eq!(
        ctx.lindex("mylist", -1).await.unwrap(),
        RespValue::BulkString(Bytes::from("c"))
    );
    assert_eq!(ctx.lindex("mylist", 4).await.unwrap(), RespValue::Null);
    assert_eq!(ctx.lindex("mylist", -4).await.unwrap(), RespValue::Null);
    assert_eq!(ctx.lindex("nolist", 0).await.unwrap(), RespValue::Null);
}

#[tokio::test]
async fn test_lindex_extra_argument_is_arity_error() {
    let ctx = TestContext::new().await;
    ctx.rpush("mylist", &["a", "b", "c"]).await.unwrap();

    let err = ctx.run("LINDEX", &["mylist", "1", "2"]).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "ERR wrong number of arguments for 'lindex' command"
    );
}

// ===== LSET Tests =====

#[tokio::test]
async fn test_lset_positive_and_negative() {
    let ctx = TestContext::new().await;
    ctx.rpush("mylist", &["a", "b", "c"]).await.unwrap();

    assert_eq!(ctx.lset("mylist", 0, "x").await.unwrap(), RespValue::ok());
    assert_eq!(ctx.lset("mylist", -2, "y").await.unwrap(), RespValue::ok());

    let result = ctx.lrange("mylist", 0, -1).await.unwrap();
    assert_lrange_equals(&result, &["x", "y", "c"], "test_lset");
}

#[tokio::test]
async fn test_lset_errors() {
    let ctx = TestContext::new().await;

    let err = ctx.lset("nolist", 0, "x").await.unwrap_err();
    assert_eq!(err.to_string(), "ERR no such key");

    ctx.rpush("mylist", &["a"]).await.unwrap();
    let err = ctx.lset("mylist", 1, "x").await.unwrap_err();
    assert_eq!(err.to_string(), "ERR index out of range");
    let err = ctx.lset("mylist", -2, "x").await.unwrap_err();
    assert_eq!(err, ListDbError::IndexOutOfRange);

    let result = ctx.lrange("mylist", 0, -1).await.unwrap();
    assert_lrange_equals(&result, &["a"], "lset failure leaves list");
}

// ===== LTRIM Tests =====

#[tokio::test]
async fn test_ltrim_keeps_range() {
    let ctx = TestContext::new().await;
    ctx.rpush("mylist", &["a", "b", "c"]).await.unwrap();

    assert_eq!(ctx.ltrim("mylist", 1, -1).await.unwrap(), RespValue::ok());
    let result = ctx.lrange("mylist", 0, -1).await.unwrap();
    assert_lrange_equals(&result, &["b", "c"], "ltrim tail");
}

#[tokio::test]
async fn test_ltrim_full_range_is_noop() {
    let ctx = TestContext::new().await;
    ctx.rpush("mylist", &["a", "b", "c"]).await.unwrap();
    let dirty_before = ctx.state.stats.get_dirty();

    assert_eq!(ctx.ltrim("mylist", 0, -1).await.unwrap(), RespValue::ok());
    let result = ctx.lrange("mylist", 0, -1).await.unwrap();
    assert_lrange_equals(&result, &["a", "b", "c"], "ltrim full range");
    assert_eq!(ctx.state.stats.get_dirty(), dirty_before);
}

#[tokio::test]
async fn test_ltrim_empty_range_deletes_key() {
    let ctx = TestContext::new().await;
    ctx.rpush("mylist", &["a", "b", "c"]).await.unwrap();

    assert_eq!(ctx.ltrim("mylist", 2, 1).await.unwrap(), RespValue::ok());
    assert_eq!(ctx.exists(&["mylist"]).await.unwrap(), RespValue::Integer(0));

    // Absent key is fine too.
    assert_eq!(ctx.ltrim("nolist", 0, 1).await.unwrap(), RespValue::ok());
}

// ===== LINSERT Tests =====

#[tokio::test]
async fn test_linsert_before_and_after() {
    let ctx = TestContext::new().await;
    ctx.rpush("mylist", &["a", "b"]).await.unwrap();

    assert_eq!(
        ctx.linsert("mylist", "BEFORE", "b", "c").await.unwrap(),
        RespValue::Integer(3)
    );
    let result = ctx.lrange("mylist", 0, -1).await.unwrap();
    assert_lrange_equals(&result, &["a", "c", "b"], "linsert before");

    assert_eq!(
        ctx.linsert("mylist", "AFTER", "b", "d").await.unwrap(),
        RespValue::Integer(4)
    );
    let result = ctx.lrange("mylist", 0, -1).await.unwrap();
    assert_lrange_equals(&result, &["a", "c", "b", "d"], "linsert after");
}

#[tokio::test]
async fn test_linsert_missing_pivot_and_key() {
    let ctx = TestContext::new().await;
    assert_eq!(
        ctx.linsert("nolist", "BEFORE", "a", "x").await.unwrap(),
        RespValue::Integer(0)
    );
    assert_eq!(ctx.exists(&["nolist"]).await.unwrap(), RespValue::Integer(0));

    ctx.rpush("mylist", &["a"]).await.unwrap();
    assert_eq!(
        ctx.linsert("mylist", "AFTER", "zz", "x").await.unwrap(),
        RespValue::Integer(-1)
    );
}

#[tokio::test]
async fn test_linsert_pivot_uses_first_match() {
    let ctx = TestContext::new().await;
    ctx.rpush("mylist", &["p", "a", "p"]).await.unwrap();

    ctx.linsert("mylist", "AFTER", "p", "x").await.unwrap();
    let result = ctx.lrange("mylist", 0, -1).await.unwrap();
    assert_lrange_equals(&result, &["p", "x", "a", "p"], "linsert first pivot");
}

#[tokio::test]
async fn test_linsert_position_token_is_case_sensitive() {
    let ctx = TestContext::new().await;
    ctx.rpush("mylist", &["a"]).await.unwrap();

    let err = ctx.linsert("mylist", "before", "a", "x").await.unwrap_err();
    assert_eq!(err.to_string(), "ERR syntax error");
    let err = ctx.linsert("mylist", "MIDDLE", "a", "x").await.unwrap_err();
    assert_eq!(err, ListDbError::SyntaxError);
}

// ===== LREM Tests =====

#[tokio::test]
async fn test_lrem_from_tail() {
    let ctx = TestContext::new().await;
    ctx.rpush("mylist", &["v", "v", "w", "v"]).await.unwrap();

    assert_eq!(ctx.lrem("mylist", -2, "v").await.unwrap(), RespValue::Integer(2));
    let result = ctx.lrange("mylist", 0, -1).await.unwrap();
    assert_lrange_equals(&result, &["v", "w"], "lrem negative count");
}

#[tokio::test]
async fn test_lrem_from_head() {
    let ctx = TestContext::new().await;
    ctx.rpush("mylist", &["v", "w", "v", "v"]).await.unwrap();

    assert_eq!(ctx.lrem("mylist", 2, "v").await.unwrap(), RespValue::Integer(2));
    let result = ctx.lrange("mylist", 0, -1).await.unwrap();
    assert_lrange_equals(&result, &["w", "v"], "lrem positive count");
}

#[tokio::test]
async fn test_lrem_all_and_delete() {
    let ctx = TestContext::new().await;
    ctx.rpush("mylist", &["v", "v", "v"]).await.unwrap();

    assert_eq!(ctx.lrem("mylist", 0, "v").await.unwrap(), RespValue::Integer(3));
    assert_eq!(ctx.exists(&["mylist"]).await.unwrap(), RespValue::Integer(0));
    assert_eq!(ctx.lrem("mylist", 0, "v").await.unwrap(), RespValue::Integer(0));
}

#[tokio::test]
async fn test_lrem_exact_byte_match() {
    let ctx = TestContext::new().await;
    ctx.rpush("mylist", &["V", "v", "v "]).await.unwrap();

    assert_eq!(ctx.lrem("mylist", 0, "v").await.unwrap(), RespValue::Integer(1));
    let result = ctx.lrange("mylist", 0, -1).await.unwrap();
    assert_lrange_equals(&result, &["V", "v "], "lrem exact match");
}
