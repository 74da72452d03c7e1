//! Timed vote-collection windows.
//!
//! Each `/wyr` invocation that requested voting opens one window: a spawned
//! task that owns a private [`VoteTally`], drains votes from an mpsc
//! channel, and resolves exactly once when the fixed deadline elapses.
//! There is no cancellation path; a window always runs to completion.

use std::{collections::HashMap, sync::Arc, time::Duration};

use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, warn};

use crate::{
    domain::{MessageId, UserId},
    ports::ReportSink,
    questions::Question,
    vote::{VoteSide, VoteTally},
};

/// How long a window accepts votes. Fixed; no override is exposed.
pub const VOTE_WINDOW: Duration = Duration::from_secs(300);

/// Registry of open windows, keyed by the posted question message.
///
/// The gateway's reaction stream is global, so incoming votes are routed
/// here by message id. Each window's tally stays private to its task; the
/// registry only holds the ingest senders. Window tasks remove their own
/// entry when they resolve.
#[derive(Default)]
pub struct ActiveWindows {
    inner: Mutex<HashMap<MessageId, mpsc::UnboundedSender<(UserId, VoteSide)>>>,
}

impl ActiveWindows {
    /// Open a window for `message` and start its timer.
    pub async fn open(
        self: &Arc<Self>,
        message: MessageId,
        question: Question,
        duration: Duration,
        sink: Arc<dyn ReportSink>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner.lock().await.insert(message, tx);
        info!("vote window opened for message {}", message.0);

        let windows = Arc::clone(self);
        tokio::spawn(async move {
            run_window(question, duration, rx, sink).await;
            windows.inner.lock().await.remove(&message);
            info!("vote window closed for message {}", message.0);
        });
    }

    /// Route a vote to the window for `message`, if one is open.
    /// Votes for unknown messages (closed windows, legacy posts) are dropped.
    pub async fn ingest(&self, message: MessageId, voter: UserId, side: VoteSide) {
        let map = self.inner.lock().await;
        let Some(tx) = map.get(&message) else {
            return;
        };
        if tx.send((voter, side)).is_err() {
            debug!("vote for message {} arrived while its window was resolving", message.0);
        }
    }

    pub async fn is_open(&self, message: MessageId) -> bool {
        self.inner.lock().await.contains_key(&message)
    }
}

async fn run_window(
    question: Question,
    duration: Duration,
    mut rx: mpsc::UnboundedReceiver<(UserId, VoteSide)>,
    sink: Arc<dyn ReportSink>,
) {
    let mut tally = VoteTally::default();
    let deadline = tokio::time::sleep(duration);
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            _ = &mut deadline => break,
            vote = rx.recv() => {
                let Some((voter, side)) = vote else {
                    // All senders gone; nothing more can arrive, but the
                    // window still resolves on its own deadline.
                    deadline.as_mut().await;
                    break;
                };
                tally.ingest(voter, side);
            }
        }
    }

    // Zero votes: resolve silently.
    let Some(report) = tally.report(question) else {
        return;
    };
    if let Err(e) = sink.publish(report).await {
        warn!("failed to publish vote results: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{vote::VoteReport, Result};
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;

    #[derive(Default)]
    struct RecordingSink {
        reports: StdMutex<Vec<VoteReport>>,
    }

    #[async_trait]
    impl ReportSink for RecordingSink {
        async fn publish(&self, report: VoteReport) -> Result<()> {
            self.reports.lock().unwrap().push(report);
            Ok(())
        }
    }

    fn question() -> Question {
        Question {
            option_a: "left",
            option_b: "right",
        }
    }

    const SHORT: Duration = Duration::from_millis(50);

    #[tokio::test]
    async fn window_resolves_once_with_deduplicated_tally() {
        let windows = Arc::new(ActiveWindows::default());
        let sink = Arc::new(RecordingSink::default());
        let msg = MessageId(100);

        windows.open(msg, question(), SHORT, sink.clone()).await;
        assert!(windows.is_open(msg).await);

        windows.ingest(msg, UserId(1), VoteSide::A).await;
        windows.ingest(msg, UserId(2), VoteSide::A).await;
        windows.ingest(msg, UserId(3), VoteSide::A).await;
        windows.ingest(msg, UserId(4), VoteSide::B).await;
        // Duplicates and side switches are ignored.
        windows.ingest(msg, UserId(1), VoteSide::B).await;
        windows.ingest(msg, UserId(4), VoteSide::B).await;

        tokio::time::sleep(SHORT * 4).await;

        let reports = sink.reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        let report = reports[0];
        assert_eq!(report.count_a, 3);
        assert_eq!(report.count_b, 1);
        assert_eq!(report.percent_a, 75);
        assert_eq!(report.percent_b, 25);
        assert_eq!(report.total, 4);
    }

    #[tokio::test]
    async fn window_with_no_votes_publishes_nothing() {
        let windows = Arc::new(ActiveWindows::default());
        let sink = Arc::new(RecordingSink::default());
        let msg = MessageId(200);

        windows.open(msg, question(), SHORT, sink.clone()).await;
        tokio::time::sleep(SHORT * 4).await;

        assert!(sink.reports.lock().unwrap().is_empty());
        assert!(!windows.is_open(msg).await);
    }

    #[tokio::test]
    async fn votes_after_close_are_dropped() {
        let windows = Arc::new(ActiveWindows::default());
        let sink = Arc::new(RecordingSink::default());
        let msg = MessageId(300);

        windows.open(msg, question(), SHORT, sink.clone()).await;
        windows.ingest(msg, UserId(1), VoteSide::B).await;
        tokio::time::sleep(SHORT * 4).await;

        assert!(!windows.is_open(msg).await);
        windows.ingest(msg, UserId(2), VoteSide::A).await;
        tokio::time::sleep(SHORT).await;

        let reports = sink.reports.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].count_a, 0);
        assert_eq!(reports[0].count_b, 1);
    }

    #[tokio::test]
    async fn votes_for_unknown_messages_are_ignored() {
        let windows = Arc::new(ActiveWindows::default());
        // Never opened; must not panic or leak state.
        windows.ingest(MessageId(9), UserId(1), VoteSide::A).await;
        assert!(!windows.is_open(MessageId(9)).await);
    }

    #[tokio::test]
    async fn concurrent_windows_do_not_share_tallies() {
        let windows = Arc::new(ActiveWindows::default());
        let sink_a = Arc::new(RecordingSink::default());
        let sink_b = Arc::new(RecordingSink::default());

        windows.open(MessageId(1), question(), SHORT, sink_a.clone()).await;
        windows.open(MessageId(2), question(), SHORT, sink_b.clone()).await;

        windows.ingest(MessageId(1), UserId(7), VoteSide::A).await;
        windows.ingest(MessageId(2), UserId(7), VoteSide::B).await;

        tokio::time::sleep(SHORT * 4).await;

        let a = sink_a.reports.lock().unwrap();
        let b = sink_b.reports.lock().unwrap();
        assert_eq!((a[0].count_a, a[0].count_b), (1, 0));
        assert_eq!((b[0].count_a, b[0].count_b), (0, 1));
    }
}
