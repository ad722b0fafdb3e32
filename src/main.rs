use serde_json::json;
use std::time::Duration;
use tattler::{Event, Reporter, StaticSuiteLookup, SuiteDef, Task};

/// Scripted demo run: feeds the reporter the same event sequence a real
/// runner would emit, with pauses long enough to watch the spinner.
#[tokio::main]
async fn main() {
    let mut suites = StaticSuiteLookup::new();
    suites.add(
        "suites/checkout.json",
        suite(json!({
            "describe": "Checkout flow",
            "url": "https://shop.example",
            "retries": 2,
            "timeout": 5000
        })),
    );

    let mut reporter = Reporter::stdout(Box::new(suites));

    reporter.handle(Event::Begin(vec![
        "checkout.json".to_string(),
        "search.json".to_string(),
    ]));

    reporter.handle(Event::Start("suites/checkout.json".to_string()));

    let get_cart = Task::step("get").param("url", "/cart").param("status", 200);
    reporter.handle(Event::Pending(get_cart.clone()));
    tokio::time::sleep(Duration::from_millis(1500)).await;
    reporter.handle(Event::Pass(get_cart.took(320)));

    let post_order = Task::step("post")
        .param("url", "/order")
        .param("body", json!({ "items": [1, 2, 3], "coupon": "WELCOME10" }));
    reporter.handle(Event::Pending(post_order.clone()));
    tokio::time::sleep(Duration::from_millis(1200)).await;
    reporter.handle(Event::Error(json!("slow response")));
    reporter.handle(Event::Error(json!({ "code": 299, "warn": "deprecated api" })));
    reporter.handle(Event::Pass(post_order.took(2100)));

    let assert_total = Task::step("assert").param("selector", "#total");
    reporter.handle(Event::Pending(assert_total.clone()));
    tokio::time::sleep(Duration::from_millis(900)).await;
    reporter.handle(Event::Fail(assert_total, Some(json!("expected $42, got $0"))));

    let nav = Task::nav("checkout happy path");
    reporter.handle(Event::Pending(nav.clone()));
    tokio::time::sleep(Duration::from_millis(800)).await;
    reporter.handle(Event::Pass(nav.took(4500)));

    // This one has no definition on record; only the name renders.
    reporter.handle(Event::Start("suites/search.json".to_string()));
    let search = Task::nav("search returns results");
    reporter.handle(Event::Pending(search.clone()));
    tokio::time::sleep(Duration::from_millis(700)).await;
    reporter.handle(Event::Pass(search.took(900)));

    reporter.handle(Event::Finish(
        serde_json::from_value(json!({
            "timing": {
                "total": 8200,
                "slowest": { "test": { "it": "checkout happy path", "duration": 4500 } },
                "above": [
                    { "test": { "it": "checkout happy path" } },
                    { "test": { "it": "post /order" } }
                ]
            },
            "errors": {
                "byError": {
                    "assertion": {
                        "error": {
                            "type": "AssertionError",
                            "details": { "selector": "#total", "expected": "$42", "actual": "$0" }
                        },
                        "tests": [ { "test": { "it": "checkout happy path" } } ]
                    }
                }
            }
        }))
        .unwrap_or_default(),
    ));
}

fn suite(config: serde_json::Value) -> SuiteDef {
    SuiteDef {
        config: config.as_object().cloned().unwrap_or_default(),
        tasks: vec![
            Task::step("get").param("url", "/cart"),
            Task::step("post").param("url", "/order"),
            Task::step("assert").param("selector", "#total"),
        ],
    }
}
