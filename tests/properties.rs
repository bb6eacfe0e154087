use orderline::engine::dispatcher::dispatch_line;
use proptest::prelude::*;
use serde_json::{json, Value};

proptest! {
    #[test]
    fn test_dispatch_never_panics(line in "\\PC*") {
        let resp = serde_json::to_value(dispatch_line(&line)).unwrap();

        // Every response carries the protocol version and exactly one
        // of result/error.
        prop_assert_eq!(&resp["jsonrpc"], &json!("2.0"));
        let has_result = resp.get("result").is_some();
        let has_error = resp.get("error").is_some();
        prop_assert!(has_result ^ has_error);
    }

    #[test]
    fn test_id_round_trip_for_numbers(id in any::<i64>()) {
        let line = serde_json::to_string(&json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": "order.place",
            "params": {}
        })).unwrap();

        let resp = serde_json::to_value(dispatch_line(&line)).unwrap();
        prop_assert_eq!(&resp["id"], &json!(id));
    }

    #[test]
    fn test_id_round_trip_for_strings(id in "\\PC*") {
        let line = serde_json::to_string(&json!({
            "jsonrpc": "2.0",
            "id": id.clone(),
            "method": "order.place",
            "params": {}
        })).unwrap();

        let resp = serde_json::to_value(dispatch_line(&line)).unwrap();
        prop_assert_eq!(&resp["id"], &Value::String(id));
    }

    #[test]
    fn test_quantity_string_agrees_with_number(q in any::<i64>()) {
        let as_number = serde_json::to_string(&json!({
            "jsonrpc": "2.0", "id": 1, "method": "order.place",
            "params": {"quantity": q}
        })).unwrap();
        let as_string = serde_json::to_string(&json!({
            "jsonrpc": "2.0", "id": 1, "method": "order.place",
            "params": {"quantity": q.to_string()}
        })).unwrap();

        let a = serde_json::to_value(dispatch_line(&as_number)).unwrap();
        let b = serde_json::to_value(dispatch_line(&as_string)).unwrap();
        prop_assert_eq!(&a["result"]["quantity"], &json!(q));
        prop_assert_eq!(&b["result"]["quantity"], &json!(q));
    }

    #[test]
    fn test_unknown_methods_echo_id(method in "[a-z]{1,12}", id in any::<u32>()) {
        // No dot in the generated name, so it can never be "order.place".
        let line = serde_json::to_string(&json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": {}
        })).unwrap();

        let resp = serde_json::to_value(dispatch_line(&line)).unwrap();
        prop_assert_eq!(&resp["error"]["code"], &json!(-32601));
        prop_assert_eq!(&resp["id"], &json!(id));
    }
}
