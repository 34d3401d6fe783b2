use crate::subscription::{SubscriptionId, SubscriptionSource};
use futures::stream::BoxStream;
use futures::StreamExt;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;

/// A repeating timer that fires at a fixed interval.
///
/// Each tick emits the current [`Instant`]. Two `Every` sources with the same
/// `id` are the same subscription, whatever their intervals.
///
/// ```rust,ignore
/// let sub = subscribe(Every::new(Duration::from_millis(16), "bouquet-fade"))
///     .map(Message::Tick);
/// ```
pub struct Every {
    /// The interval between ticks.
    pub interval: Duration,
    /// Distinguishes this timer from other `Every` timers.
    pub id: &'static str,
}

impl Every {
    /// Create a new repeating timer with the given interval and identifier.
    pub fn new(interval: Duration, id: &'static str) -> Self {
        Self { interval, id }
    }
}

impl SubscriptionSource for Every {
    type Output = Instant;

    fn id(&self) -> SubscriptionId {
        SubscriptionId::with_str::<Self>(self.id)
    }

    fn stream(self) -> BoxStream<'static, Instant> {
        let mut interval = tokio::time::interval(self.interval);
        // A stalled frame should not replay a burst of stale ticks.
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let stream = tokio_stream::wrappers::IntervalStream::new(interval)
            .map(|tick| tick.into_std());
        Box::pin(stream)
    }
}
