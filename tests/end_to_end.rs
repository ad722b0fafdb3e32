use k9::assert_equal;
use serde_json::json;
use std::sync::Arc;
use tattler::{Event, NoStyle, Report, Reporter, StaticSuiteLookup, StringWriter, SuiteDef, Task};

fn setup() -> (Reporter, StringWriter) {
    let def: SuiteDef = serde_json::from_value(json!({
        "config": {
            "describe": "Checkout flow",
            "url": "https://shop.example",
            "retries": 2
        },
        "tasks": [
            { "type": "get", "params": { "url": "/cart" } },
            { "type": "post", "params": { "url": "/order" } }
        ]
    }))
    .unwrap();

    let mut lookup = StaticSuiteLookup::new();
    lookup.add("suites/checkout.json", def);

    let writer = StringWriter::new();
    let reporter = Reporter::new(
        Box::new(writer.clone()),
        Arc::new(NoStyle),
        Box::new(lookup),
    );
    (reporter, writer)
}

#[test]
fn full_run_transcript() {
    let (mut reporter, writer) = setup();

    reporter.handle(Event::Begin(vec![
        "checkout.json".to_string(),
        "search.json".to_string(),
    ]));

    reporter.handle(Event::Start("suites/checkout.json".to_string()));

    let get = Task::step("get").param("url", "/cart");
    reporter.handle(Event::Pending(get.clone()));
    reporter.handle(Event::Pass(get.took(320)));

    let post = Task::step("post").param("url", "/order");
    reporter.handle(Event::Pending(post.clone()));
    reporter.handle(Event::Error(json!("slow response")));
    reporter.handle(Event::Error(json!({ "code": 299 })));
    reporter.handle(Event::Pass(post.took(2100)));

    let assert_step = Task::step("assert").param("selector", "#total");
    reporter.handle(Event::Pending(assert_step.clone()));
    reporter.handle(Event::Fail(assert_step, Some(json!("expected $42"))));

    let nav = Task::nav("checkout happy path");
    reporter.handle(Event::Pending(nav.clone()));
    reporter.handle(Event::Pass(nav.took(4500)));

    // no definition on record for this one
    reporter.handle(Event::Start("suites/search.json".to_string()));

    let report: Report = serde_json::from_value(json!({
        "timing": {
            "total": 8200,
            "slowest": { "test": { "it": "checkout happy path", "duration": 4500 } },
            "above": [ { "test": { "it": "checkout happy path" } } ]
        },
        "errors": {
            "byError": {
                "assertion": {
                    "error": {
                        "type": "AssertionError",
                        "details": { "selector": "#total" }
                    },
                    "tests": [ { "test": { "it": "checkout happy path" } } ]
                }
            }
        }
    }))
    .unwrap();
    reporter.handle(Event::Finish(report));

    let expected = "\n begin 2 suites : checkout.json and search.json \n\
                    \n    checkout: Checkout flow (3 tasks) \n\
                    \x20   - configuration  retries : 2   \n\
                    \x20    [ √ ] get  url : /cart   [0.32s] \n\
                    \x20    [ ! ] post  url : /order   [2.10s]  2 error(s) \n\
                    \x20    [ x ] assert  selector : #total    expected $42  \n\
                    \x20    [ √ ]  checkout happy path   [4.50s] \n\
                    \n    search \n\
                    \n Report \n\
                    - Ran for : 8.20s \n\
                    - Slowest : checkout happy path 4.50s \n\
                    - Above median : \n    - checkout happy path \n\
                    \n- Errors : \n\
                    \x20   - [AssertionError] assertion : \n\
                    \x20       - checkout happy path \n\
                    {\n\t\"selector\": \"#total\"\n}\n\n";
    assert_equal!(writer.to_string(), expected.to_string());
}
