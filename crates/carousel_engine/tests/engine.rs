use std::sync::{mpsc, Arc};
use std::time::Duration;

use carousel_core::{FeedEntry, Msg, Rating};
use carousel_engine::{EngineHandle, FailureKind, FeedError, FeedRequest, FeedSource, FetchError};

struct StaticSource {
    result: Result<Vec<FeedEntry>, FeedError>,
}

#[async_trait::async_trait]
impl FeedSource for StaticSource {
    async fn fetch_entries(&self, request: &FeedRequest) -> Result<Vec<FeedEntry>, FeedError> {
        assert_eq!(request.app_id, "42");
        self.result.clone()
    }
}

fn engine_with(result: Result<Vec<FeedEntry>, FeedError>) -> (EngineHandle, mpsc::Receiver<Msg>) {
    carousel_logging::init_test_logging_once();
    let (tx, rx) = mpsc::channel();
    let engine = EngineHandle::new(
        Arc::new(StaticSource { result }),
        FeedRequest::new("us", "42"),
        tx,
    )
    .unwrap();
    (engine, rx)
}

#[test]
fn fetch_delivers_entries_with_sequence_number() {
    let entry = FeedEntry::new(Rating::new(4).unwrap(), "ann", "Nice");
    let (engine, rx) = engine_with(Ok(vec![entry.clone()]));

    engine.fetch(3);

    assert_eq!(
        rx.recv_timeout(Duration::from_secs(2)),
        Ok(Msg::FeedFetched {
            seq: 3,
            entries: vec![entry]
        })
    );
}

#[test]
fn fetch_failure_becomes_failed_message() {
    let err = FeedError::Fetch(FetchError {
        kind: FailureKind::Timeout,
        message: "deadline".to_string(),
    });
    let (engine, rx) = engine_with(Err(err));

    engine.fetch(1);

    match rx.recv_timeout(Duration::from_secs(2)) {
        Ok(Msg::FeedFailed { seq, error }) => {
            assert_eq!(seq, 1);
            assert!(error.contains("timeout"));
        }
        other => panic!("unexpected message {other:?}"),
    }
}

#[test]
fn shutdown_stops_timers_and_fetches() {
    let (mut engine, rx) = engine_with(Ok(Vec::new()));
    engine
        .timers()
        .repeating(Duration::from_millis(200), Duration::from_millis(200), || {
            Msg::TransitionTick
        });

    engine.shutdown();
    engine.fetch(9);

    assert!(rx.recv_timeout(Duration::from_millis(400)).is_err());
}
