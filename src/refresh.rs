//! Periodic schedule refresh.
//!
//! The controller is owned by the view showing the schedule. Fetches and the
//! timer run as tokio tasks and report back through a channel; the owning view
//! drains that channel on its own task and feeds completions to [`RefreshController::apply`].
//!
//! Every fetch carries a sequence number. A completion older than the last one
//! applied, or for a date that is no longer shown, is discarded, so overlapping
//! requests can never put stale data on screen.

use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::api::{DailySchedule, GameDate};
use crate::data_provider::NHLDataProvider;

/// Period of the recurring fetch when auto-refresh is on
pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_secs(20);

/// What triggered a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOrigin {
    Mount,
    Timer,
    Manual,
    DateChange,
}

#[derive(Debug)]
pub enum RefreshEvent {
    /// The recurring timer fired
    Tick { generation: u64 },
    /// A fetch finished, successfully or not
    Loaded(FetchCompletion),
}

#[derive(Debug)]
pub struct FetchCompletion {
    pub seq: u64,
    pub origin: FetchOrigin,
    pub date: GameDate,
    /// Scroll offset captured when the fetch was issued
    pub anchor: Option<u16>,
    pub result: Result<DailySchedule, String>,
}

/// Result of applying a completion that was not stale
#[derive(Debug, PartialEq)]
pub enum RefreshOutcome {
    Loaded {
        schedule: DailySchedule,
        anchor: Option<u16>,
    },
    /// The failed cycle never restores scroll
    Failed { message: String },
}

struct InFlight {
    seq: u64,
    origin: FetchOrigin,
    handle: JoinHandle<()>,
}

pub struct RefreshController {
    provider: Arc<dyn NHLDataProvider>,
    date: GameDate,
    period: Duration,
    events_tx: mpsc::UnboundedSender<RefreshEvent>,
    mounted: bool,
    enabled: bool,
    timer: Option<JoinHandle<()>>,
    timer_generation: u64,
    in_flight: Vec<InFlight>,
    next_seq: u64,
    applied_seq: u64,
    last_refresh: Option<SystemTime>,
}

impl RefreshController {
    /// Create a controller and the receiving end of its event channel
    pub fn new(
        provider: Arc<dyn NHLDataProvider>,
        date: GameDate,
        period: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<RefreshEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let controller = RefreshController {
            provider,
            date,
            period,
            events_tx,
            mounted: false,
            enabled: false,
            timer: None,
            timer_generation: 0,
            in_flight: Vec::new(),
            next_seq: 0,
            applied_seq: 0,
            last_refresh: None,
        };
        (controller, events_rx)
    }

    /// Issue the initial fetch. Only the first call does anything.
    pub fn mount(&mut self) -> Option<u64> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        Some(self.spawn_fetch(FetchOrigin::Mount, None))
    }

    pub fn is_auto_refresh_enabled(&self) -> bool {
        self.enabled
    }

    /// Turn the recurring fetch on or off
    ///
    /// Enabling does not fetch immediately; the first timer fetch happens one
    /// full period later. Disabling cancels the timer and any timer fetch
    /// still in flight.
    pub fn set_auto_refresh(&mut self, enabled: bool) {
        if enabled == self.enabled {
            return;
        }
        self.enabled = enabled;

        if enabled {
            self.start_timer();
            info!(period_secs = self.period.as_secs(), "Auto-refresh enabled");
        } else {
            self.stop_timer();
            self.abort_in_flight(|f| f.origin == FetchOrigin::Timer);
            info!("Auto-refresh disabled");
        }
    }

    pub fn toggle_auto_refresh(&mut self) -> bool {
        self.set_auto_refresh(!self.enabled);
        self.enabled
    }

    /// React to a timer tick; ticks from a cancelled timer are ignored
    pub fn handle_tick(&mut self, generation: u64, anchor: Option<u16>) -> Option<u64> {
        if !self.enabled || generation != self.timer_generation {
            debug!(generation, current = self.timer_generation, "Ignoring stale timer tick");
            return None;
        }
        Some(self.spawn_fetch(FetchOrigin::Timer, anchor))
    }

    /// Fetch right away, outside the timer
    pub fn refresh_now(&mut self, anchor: Option<u16>) -> u64 {
        self.spawn_fetch(FetchOrigin::Manual, anchor)
    }

    /// Show another date: drop everything in flight and fetch the new date
    pub fn set_date(&mut self, date: GameDate) -> u64 {
        self.date = date;
        self.abort_in_flight(|_| true);
        self.spawn_fetch(FetchOrigin::DateChange, None)
    }

    /// Apply a completion, or discard it if something newer already landed
    pub fn apply(&mut self, completion: FetchCompletion) -> Option<RefreshOutcome> {
        self.in_flight.retain(|f| f.seq != completion.seq);

        if completion.date != self.date || completion.seq <= self.applied_seq {
            debug!(
                seq = completion.seq,
                applied = self.applied_seq,
                date = %completion.date,
                "Discarding stale schedule response"
            );
            return None;
        }
        self.applied_seq = completion.seq;

        match completion.result {
            Ok(schedule) => {
                self.last_refresh = Some(SystemTime::now());
                info!(
                    seq = completion.seq,
                    origin = ?completion.origin,
                    date = %completion.date,
                    games = schedule.games.len(),
                    "Schedule refreshed"
                );
                Some(RefreshOutcome::Loaded {
                    schedule,
                    anchor: completion.anchor,
                })
            }
            Err(message) => {
                warn!(
                    seq = completion.seq,
                    origin = ?completion.origin,
                    error = %message,
                    "Schedule refresh failed"
                );
                Some(RefreshOutcome::Failed { message })
            }
        }
    }

    /// Time of the last successfully applied fetch
    pub fn last_refresh(&self) -> Option<SystemTime> {
        self.last_refresh
    }

    pub fn date(&self) -> GameDate {
        self.date
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of fetches still running
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.iter().filter(|f| !f.handle.is_finished()).count()
    }

    /// Cancel the timer and every in-flight fetch
    pub fn shutdown(&mut self) {
        self.enabled = false;
        self.stop_timer();
        self.abort_in_flight(|_| true);
    }

    fn spawn_fetch(&mut self, origin: FetchOrigin, anchor: Option<u16>) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        let date = self.date;
        let provider = Arc::clone(&self.provider);
        let events_tx = self.events_tx.clone();

        debug!(seq, ?origin, %date, "Dispatching schedule fetch");
        let handle = tokio::spawn(async move {
            let result = provider
                .daily_schedule(&date)
                .await
                .map_err(|e| e.to_string());
            let completion = FetchCompletion {
                seq,
                origin,
                date,
                anchor,
                result,
            };
            let _ = events_tx.send(RefreshEvent::Loaded(completion));
        });

        self.in_flight.retain(|f| !f.handle.is_finished());
        self.in_flight.push(InFlight { seq, origin, handle });
        seq
    }

    fn start_timer(&mut self) {
        self.stop_timer();
        self.timer_generation += 1;

        let generation = self.timer_generation;
        let period = self.period;
        let events_tx = self.events_tx.clone();
        self.timer = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if events_tx.send(RefreshEvent::Tick { generation }).is_err() {
                    break;
                }
            }
        }));
    }

    fn stop_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    fn abort_in_flight(&mut self, mut should_abort: impl FnMut(&InFlight) -> bool) {
        self.in_flight.retain(|f| {
            if should_abort(f) {
                debug!(seq = f.seq, origin = ?f.origin, "Cancelling in-flight fetch");
                f.handle.abort();
                false
            } else {
                true
            }
        });
    }
}

impl Drop for RefreshController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
