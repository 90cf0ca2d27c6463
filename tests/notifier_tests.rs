#![cfg(feature = "telegram")]

use market_notifier::infrastructure::bootstrap::build_notifier;
use market_notifier::testkit::config::{config, telegram_credentials};
use market_notifier::testkit::http::StubServer;

#[tokio::test]
async fn configured_notifier_posts_to_configured_chat() {
    let server = StubServer::respond(200, r#"{"ok":true}"#).await;
    let config = config(
        &format!("[telegram]\napi_url = \"{}\"\n", server.url()),
        telegram_credentials(),
    );

    let notifier = build_notifier(&config, false).expect("telegram notifier");
    notifier.send("report").await.expect("delivered");
    let request = server.request().await;

    assert_eq!(request.target, "/bot123456:test-token-abcdef/sendMessage");
    assert!(request.body.starts_with("chat_id=-1001234567890&text=report"));
    assert!(request.body.ends_with("parse_mode=HTML"));
}

#[tokio::test]
async fn dry_run_notifier_never_touches_the_network() {
    let config = config("", Default::default());
    let notifier = build_notifier(&config, true).expect("log notifier");

    notifier.send("report").await.expect("logged");
    assert_eq!(notifier.name(), "log");
}
