//! Page router and load-once flags.

mod common;

use common::{MockBackend, TestApp};
use medref::traits::Document;
use medref::view_state::Page;
use serde_json::json;

fn active_pages(fixture: &TestApp) -> Vec<String> {
    fixture
        .doc
        .ids_with_class("page")
        .into_iter()
        .filter(|id| fixture.doc.has_class(id, "active"))
        .collect()
}

#[tokio::test]
async fn unknown_page_changes_nothing() {
    let fixture = TestApp::new(MockBackend::new().build());
    let before = fixture.doc.snapshot();

    assert!(!fixture.app.navigate_to("does-not-exist").await);

    assert_eq!(fixture.doc.snapshot(), before);
    assert_eq!(fixture.app.current_page(), Page::Home);
    assert!(fixture.http.get_requests().is_empty());
}

#[tokio::test]
async fn exactly_one_page_is_active_after_any_sequence() {
    let fixture = TestApp::new(
        MockBackend::new()
            .with_data("/api/health-tips", json!({}))
            .build(),
    );

    for name in ["about", "tips", "home", "contact", "contact", "login", "about"] {
        fixture.app.navigate_to(name).await;
        assert_eq!(active_pages(&fixture).len(), 1, "after {}", name);
    }
    assert_eq!(active_pages(&fixture), vec!["page-about"]);
}

#[tokio::test]
async fn tips_are_fetched_once() {
    let fixture = TestApp::new(
        MockBackend::new()
            .with_data(
                "/api/health-tips",
                json!({ "nutrition": [{ "id": 1, "category": "nutrition",
                                         "title": "Eat greens", "description": "Daily." }] }),
            )
            .build(),
    );

    fixture.app.navigate_to("tips").await;
    fixture.app.navigate_to("home").await;
    fixture.app.navigate_to("tips").await;

    assert_eq!(fixture.count("GET", "/api/health-tips"), 1);
    let html = fixture.doc.inner_html("tips-content").unwrap();
    assert!(html.contains("Eat greens"));
}

#[tokio::test]
async fn failed_tips_load_retries_on_next_visit() {
    let fixture = TestApp::new(
        MockBackend::new()
            .with_failure("/api/health-tips", "Database unavailable")
            .build(),
    );

    fixture.app.navigate_to("tips").await;
    assert!(fixture
        .doc
        .inner_html("tips-content")
        .unwrap()
        .contains("Could not load tips: Database unavailable"));

    fixture.app.navigate_to("tips").await;
    assert_eq!(fixture.count("GET", "/api/health-tips"), 2);
}

#[tokio::test]
async fn admin_entry_refreshes_stats_every_time() {
    let fixture = TestApp::new(MockBackend::new().with_empty_admin().build());

    fixture.app.navigate_to("admin").await;
    fixture.app.navigate_to("home").await;
    fixture.app.navigate_to("admin").await;

    assert_eq!(fixture.count("GET", "/admin/stats"), 2);
    assert!(!fixture.doc.is_visible("main-header"));
}
