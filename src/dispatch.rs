//! Background delivery dispatcher
//!
//! A bounded mpsc queue feeding a worker task that fans each event out
//! to all configured sinks. `dispatch` never blocks the caller: when the
//! queue is full the event is dropped from delivery, logged, and counted.
//! Sink failures are likewise logged and counted, never propagated.

use crate::metrics::DeliveryMetrics;
use crate::sink::DeliverySink;
use crate::types::AuditEvent;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Hands recorded events to delivery sinks without blocking the recorder
pub struct Dispatcher {
    tx: mpsc::Sender<AuditEvent>,
    metrics: Arc<DeliveryMetrics>,
}

impl Dispatcher {
    /// Spawn the delivery worker with a bounded queue
    ///
    /// Must be called within a tokio runtime.
    pub fn new(queue_capacity: usize, sinks: Vec<Arc<dyn DeliverySink>>) -> Self {
        let metrics = Arc::new(DeliveryMetrics::default());
        let (tx, rx) = mpsc::channel(queue_capacity.max(1));

        tokio::spawn(Self::worker(rx, sinks, Arc::clone(&metrics)));

        Self { tx, metrics }
    }

    async fn worker(
        mut rx: mpsc::Receiver<AuditEvent>,
        sinks: Vec<Arc<dyn DeliverySink>>,
        metrics: Arc<DeliveryMetrics>,
    ) {
        while let Some(event) = rx.recv().await {
            for sink in &sinks {
                match sink.deliver(&event).await {
                    Ok(()) => metrics.record_delivered(),
                    Err(e) => {
                        metrics.record_failed();
                        tracing::warn!(
                            sink = sink.name(),
                            event_id = %event.id,
                            error = %e,
                            "Audit delivery failed"
                        );
                    }
                }
            }
        }
    }

    /// Queue an event for delivery
    ///
    /// Returns `true` if the event was queued, `false` if it was dropped
    /// because the queue was full or the worker has stopped.
    pub fn dispatch(&self, event: AuditEvent) -> bool {
        match self.tx.try_send(event) {
            Ok(()) => {
                self.metrics.record_enqueued();
                true
            }
            Err(err) => {
                let event = err.into_inner();
                self.metrics.record_dropped();
                tracing::warn!(
                    event_id = %event.id,
                    "Audit delivery queue full, event dropped"
                );
                false
            }
        }
    }

    /// Delivery counters for this dispatcher
    pub fn metrics(&self) -> &DeliveryMetrics {
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AuditError, Result};
    use crate::types::EventDraft;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;
    use tokio::time::{sleep, Duration};

    struct CountingSink {
        count: AtomicUsize,
    }

    impl CountingSink {
        fn new() -> Self {
            Self {
                count: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl DeliverySink for CountingSink {
        fn name(&self) -> &str {
            "counting"
        }

        async fn deliver(&self, _event: &AuditEvent) -> Result<()> {
            self.count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingSink;

    #[async_trait]
    impl DeliverySink for FailingSink {
        fn name(&self) -> &str {
            "failing"
        }

        async fn deliver(&self, _event: &AuditEvent) -> Result<()> {
            Err(AuditError::Delivery {
                sink: "failing".to_string(),
                reason: "test error".to_string(),
            })
        }
    }

    struct BlockingSink {
        release: Arc<Notify>,
    }

    #[async_trait]
    impl DeliverySink for BlockingSink {
        fn name(&self) -> &str {
            "blocking"
        }

        async fn deliver(&self, _event: &AuditEvent) -> Result<()> {
            self.release.notified().await;
            Ok(())
        }
    }

    fn test_event() -> AuditEvent {
        EventDraft::new("user-1", "user.login", "user").into_event()
    }

    #[tokio::test]
    async fn test_dispatch_reaches_sink() {
        let sink = Arc::new(CountingSink::new());
        let dispatcher = Dispatcher::new(16, vec![sink.clone()]);

        assert!(dispatcher.dispatch(test_event()));
        sleep(Duration::from_millis(50)).await;

        assert_eq!(sink.count.load(Ordering::SeqCst), 1);
        let snap = dispatcher.metrics().snapshot();
        assert_eq!(snap.enqueued, 1);
        assert_eq!(snap.delivered, 1);
    }

    #[tokio::test]
    async fn test_fan_out_to_all_sinks() {
        let a = Arc::new(CountingSink::new());
        let b = Arc::new(CountingSink::new());
        let dispatcher = Dispatcher::new(16, vec![a.clone(), b.clone()]);

        dispatcher.dispatch(test_event());
        dispatcher.dispatch(test_event());
        sleep(Duration::from_millis(50)).await;

        assert_eq!(a.count.load(Ordering::SeqCst), 2);
        assert_eq!(b.count.load(Ordering::SeqCst), 2);
        assert_eq!(dispatcher.metrics().snapshot().delivered, 4);
    }

    #[tokio::test]
    async fn test_failing_sink_counted_not_propagated() {
        let good = Arc::new(CountingSink::new());
        let dispatcher = Dispatcher::new(16, vec![Arc::new(FailingSink), good.clone()]);

        assert!(dispatcher.dispatch(test_event()));
        sleep(Duration::from_millis(50)).await;

        assert_eq!(good.count.load(Ordering::SeqCst), 1);
        let snap = dispatcher.metrics().snapshot();
        assert_eq!(snap.failed, 1);
        assert_eq!(snap.delivered, 1);
    }

    #[tokio::test]
    async fn test_full_queue_drops_event() {
        let release = Arc::new(Notify::new());
        let dispatcher = Dispatcher::new(
            1,
            vec![Arc::new(BlockingSink {
                release: release.clone(),
            })],
        );

        // First event occupies the worker, second fills the queue.
        dispatcher.dispatch(test_event());
        sleep(Duration::from_millis(20)).await;
        dispatcher.dispatch(test_event());

        let dropped = dispatcher.dispatch(test_event());
        assert!(!dropped);
        assert_eq!(dispatcher.metrics().snapshot().dropped, 1);

        release.notify_waiters();
        release.notify_one();
    }
}
