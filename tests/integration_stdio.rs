use assert_cmd::Command;
use serde_json::{json, Value};

fn run_lines(input: &str) -> Vec<Value> {
    let bin_path = env!("CARGO_BIN_EXE_orderline");
    let output = Command::new(bin_path)
        .write_stdin(input)
        .output()
        .expect("failed to run binary");
    assert!(output.status.success(), "process exited with failure");

    String::from_utf8(output.stdout)
        .expect("stdout is not UTF-8")
        .lines()
        .map(|l| serde_json::from_str(l).expect("response line is not JSON"))
        .collect()
}

#[test]
fn test_place_order_over_stdio() {
    let responses = run_lines(
        r#"{"jsonrpc":"2.0","id":1,"method":"order.place","params":{"item":"widget","quantity":3}}
"#,
    );
    assert_eq!(responses.len(), 1);
    let resp = &responses[0];
    assert_eq!(resp["jsonrpc"], json!("2.0"));
    assert_eq!(resp["id"], json!(1));
    assert_eq!(resp["result"]["item"], json!("widget"));
    assert_eq!(resp["result"]["quantity"], json!(3));
    assert_eq!(resp["result"]["status"], json!("CREATED"));

    let order_id = resp["result"]["orderId"].as_str().expect("orderId missing");
    assert!(order_id.starts_with("ORD-"));
    let suffix = order_id.strip_prefix("ORD-").unwrap();
    assert_eq!(suffix.len(), 8);
    assert!(suffix
        .chars()
        .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
}

#[test]
fn test_defaults_when_params_empty() {
    let responses =
        run_lines("{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"order.place\",\"params\":{}}\n");
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["result"]["item"], json!("unknown"));
    assert_eq!(responses[0]["result"]["quantity"], json!(1));
}

#[test]
fn test_method_not_found() {
    let responses = run_lines("{\"jsonrpc\":\"2.0\",\"id\":3,\"method\":\"ping\"}\n");
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["id"], json!(3));
    assert_eq!(responses[0]["error"]["code"], json!(-32601));
    assert_eq!(responses[0]["error"]["message"], json!("Method not found"));
    assert!(responses[0].get("result").is_none());
}

#[test]
fn test_garbage_input() {
    let responses = run_lines("not json\n");
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["id"], json!(null));
    assert_eq!(responses[0]["error"]["code"], json!(-32603));
    assert!(!responses[0]["error"]["message"]
        .as_str()
        .unwrap()
        .is_empty());
}

#[test]
fn test_blank_lines_are_skipped() {
    let responses = run_lines("\n   \n\n");
    assert!(responses.is_empty());
}

#[test]
fn test_one_response_per_line_mixed_session() {
    let input = concat!(
        "{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"order.place\",\"params\":{\"item\":\"a\"}}\n",
        "\n",
        "garbage\n",
        "{\"jsonrpc\":\"2.0\",\"id\":\"x\",\"method\":\"nope\"}\n",
    );
    let responses = run_lines(input);
    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0]["id"], json!(1));
    assert_eq!(responses[1]["id"], json!(null));
    assert_eq!(responses[1]["error"]["code"], json!(-32603));
    assert_eq!(responses[2]["id"], json!("x"));
    assert_eq!(responses[2]["error"]["code"], json!(-32601));
}

#[test]
fn test_repeated_orders_get_fresh_ids() {
    let line = "{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"order.place\",\"params\":{\"item\":\"w\",\"quantity\":2}}\n";
    let responses = run_lines(&format!("{}{}", line, line));
    assert_eq!(responses.len(), 2);
    assert_eq!(
        responses[0]["result"]["quantity"],
        responses[1]["result"]["quantity"]
    );
    assert_ne!(
        responses[0]["result"]["orderId"],
        responses[1]["result"]["orderId"]
    );
}

#[test]
fn test_binary_help() {
    let bin_path = env!("CARGO_BIN_EXE_orderline");
    let mut cmd = Command::new(bin_path);
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("orderline"));
}
