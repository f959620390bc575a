use std::{
    collections::{BTreeMap, HashMap},
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Duration,
};

use tokio::time::{Instant, Sleep};

use crate::interfaces::{TimeoutScheduler, TimerId};

/// [`TimeoutScheduler`] backed by `tokio::time::sleep`.
pub struct TokioTimer {
    timer_deadlines: HashMap<TimerId, Instant>,
    deadline_queue: BTreeMap<Instant, TimerId>,
    active_sleep: Option<(Pin<Box<Sleep>>, TimerId)>,
    needs_reschedule: bool,
}

impl Default for TokioTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TokioTimer {
    pub fn new() -> Self {
        Self {
            timer_deadlines: HashMap::new(),
            deadline_queue: BTreeMap::new(),
            active_sleep: None,
            needs_reschedule: false,
        }
    }

    fn next_deadline(&self) -> Option<(Instant, TimerId)> {
        self.deadline_queue.iter().next().map(|(k, v)| (*k, *v))
    }

    fn expire(&mut self, id: TimerId) -> Poll<TimerId> {
        if let Some(when) = self.timer_deadlines.remove(&id) {
            self.deadline_queue.remove(&when);
        }
        self.active_sleep = None;
        self.needs_reschedule = true;
        Poll::Ready(id)
    }
}

impl TimeoutScheduler for TokioTimer {
    async fn add_or_update_timeout(&mut self, id: TimerId, timeout: u64) {
        let when = Instant::now() + Duration::from_secs(timeout);
        if let Some(prev) = self.timer_deadlines.insert(id, when) {
            self.deadline_queue.remove(&prev);
        }
        self.deadline_queue.insert(when, id);
        self.needs_reschedule = true;
    }

    async fn remove_all_timeouts(&mut self) {
        self.timer_deadlines.clear();
        self.deadline_queue.clear();
        self.active_sleep = None;
        self.needs_reschedule = false;
    }

    fn poll_timeout(&mut self, cx: &mut Context<'_>) -> Poll<TimerId> {
        if self.needs_reschedule {
            let Some((deadline, timer_id)) = self.next_deadline() else {
                self.active_sleep = None;
                self.needs_reschedule = false;
                return Poll::Pending;
            };
            if Instant::now() >= deadline {
                return self.expire(timer_id);
            }
            self.needs_reschedule = false;
            self.active_sleep = Some((Box::pin(tokio::time::sleep_until(deadline)), timer_id));
        }
        let fired = match &mut self.active_sleep {
            Some((sleep_fut, id)) => match sleep_fut.as_mut().poll(cx) {
                Poll::Ready(()) => *id,
                Poll::Pending => return Poll::Pending,
            },
            None => return Poll::Pending,
        };
        self.expire(fired)
    }
}
