use std::time::Duration;

use super::*;

const TTL: Duration = Duration::from_millis(1000);

#[tokio::test(start_paused = true)]
async fn test_show_then_expire() {
    let overlay = ConsoleOverlay::new(TTL);
    overlay.show("London").await.unwrap();
    assert_eq!(overlay.current().as_deref(), Some("London"));

    tokio::time::sleep(TTL + Duration::from_millis(10)).await;
    assert_eq!(overlay.current(), None);
}

#[tokio::test(start_paused = true)]
async fn test_show_replaces_previous() {
    let overlay = ConsoleOverlay::new(TTL);
    overlay.show("first").await.unwrap();
    overlay.show("second").await.unwrap();
    assert_eq!(overlay.current().as_deref(), Some("second"));
}

#[tokio::test(start_paused = true)]
async fn test_stale_expiry_does_not_clear_newer_message() {
    let overlay = ConsoleOverlay::new(TTL);
    overlay.show("first").await.unwrap();

    // Replace just before the first message would expire.
    tokio::time::sleep(TTL - Duration::from_millis(10)).await;
    overlay.show("second").await.unwrap();

    // The first message's expiry fires now but must not clear "second".
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(overlay.current().as_deref(), Some("second"));

    // "second" still expires on its own schedule.
    tokio::time::sleep(TTL).await;
    assert_eq!(overlay.current(), None);
}

#[tokio::test(start_paused = true)]
async fn test_sink_id() {
    let overlay = ConsoleOverlay::new(TTL);
    assert_eq!(overlay.id(), "console");
}
