use crate::data::{SuiteDef, Task};
use crate::format::{begin_header, build_line, seconds, start_header};
use crate::style::NoStyle;
use k9::assert_equal;
use serde_json::json;

#[test]
fn durations_render_with_two_decimals() {
    assert_equal!(seconds(1234), "1.23s".to_string());
    assert_equal!(seconds(500), "0.50s".to_string());
}

#[test]
fn navigation_task_line() {
    let task = Task::nav("opens the cart").took(1234);
    assert_equal!(
        build_line(&task, &NoStyle),
        " opens the cart   [1.23s] ".to_string()
    );

    // No suffix until the task resolves.
    let task = Task::nav("opens the cart");
    assert_equal!(build_line(&task, &NoStyle), " opens the cart  ".to_string());
}

#[test]
fn param_task_line_preserves_insertion_order() {
    let task = Task::step("get").param("url", "/cart").param("status", 200);
    assert_equal!(
        build_line(&task, &NoStyle),
        "get  url : /cart status : 200  ".to_string()
    );

    let reversed = Task::step("get").param("status", 200).param("url", "/cart");
    assert_equal!(
        build_line(&reversed, &NoStyle),
        "get  status : 200 url : /cart  ".to_string()
    );
}

#[test]
fn build_line_is_deterministic() {
    let task = Task::step("post")
        .param("url", "/order")
        .param("body", json!({ "items": [1, 2] }))
        .took(320);
    assert_equal!(build_line(&task, &NoStyle), build_line(&task, &NoStyle));
}

#[test]
fn long_param_values_are_capped() {
    // 25 characters in, 16 + "..." out.
    let task = Task::step("get").param("q", "abcdefghijklmnopqrstuvwxy");
    assert_equal!(
        build_line(&task, &NoStyle),
        "get  q : abcdefghijklmnop...  ".to_string()
    );

    // Exactly 20 characters pass through untouched.
    let task = Task::step("get").param("q", "aaaaaaaaaaaaaaaaaaaa");
    assert_equal!(
        build_line(&task, &NoStyle),
        "get  q : aaaaaaaaaaaaaaaaaaaa  ".to_string()
    );
}

#[test]
fn object_params_serialize_compact() {
    let task = Task::step("post").param("body", json!({ "a": 1 }));
    assert_equal!(
        build_line(&task, &NoStyle),
        "post  body : {\"a\":1}  ".to_string()
    );
}

#[test]
fn begin_header_joins_suite_names() {
    let suites = vec![
        "a.json".to_string(),
        "b.json".to_string(),
        "c.json".to_string(),
    ];
    assert_equal!(
        begin_header(&suites, &NoStyle),
        "\n begin 3 suites : a.json, b.json and c.json ".to_string()
    );

    let one = vec!["a.json".to_string()];
    assert_equal!(
        begin_header(&one, &NoStyle),
        "\n begin 1 suite : a.json ".to_string()
    );
}

#[test]
fn start_header_without_definition_is_just_the_name() {
    assert_equal!(
        start_header("suites/missing.json", None, &NoStyle),
        "\n    missing ".to_string()
    );
}

#[test]
fn start_header_with_definition_adds_detail() {
    let def: SuiteDef = serde_json::from_value(json!({
        "config": {
            "describe": "Checkout flow",
            "url": "https://shop.example",
            "retries": 3
        },
        "tasks": [ { "type": "get" }, { "type": "post" } ]
    }))
    .unwrap();

    // Two tasks plus the navigation entry; url and describe stay out of
    // the configuration line.
    assert_equal!(
        start_header("suites/checkout.json", Some(&def), &NoStyle),
        "\n    checkout: Checkout flow (3 tasks) \n    - configuration  retries : 3   ".to_string()
    );
}
