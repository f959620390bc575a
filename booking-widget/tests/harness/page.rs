use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
    task::{Context, Poll},
};

use booking_widget::{view::PageView, PageHost, UserEvent};
use futures::task::AtomicWaker;

use super::event::{Event, EventTx};

#[derive(Debug)]
struct Inner {
    closed: AtomicBool,
    inbox: Mutex<VecDeque<UserEvent>>,
    event_tx: EventTx,
    waker: AtomicWaker,
}

pub struct MockPage {
    inner: Arc<Inner>,
}

impl MockPage {
    pub fn new(event_tx: EventTx) -> (Self, MockPageHandle) {
        let inner = Arc::new(Inner {
            closed: AtomicBool::new(false),
            inbox: Default::default(),
            event_tx,
            waker: AtomicWaker::new(),
        });
        (
            Self {
                inner: inner.clone(),
            },
            MockPageHandle { inner },
        )
    }
}

impl PageHost for MockPage {
    async fn render(&mut self, view: &PageView) {
        self.inner.event_tx.push(Event::Rendered(view.clone()));
    }

    fn poll_user_event(&mut self, cx: &mut Context<'_>) -> Poll<Option<UserEvent>> {
        if let Some(ev) = self.inner.inbox.lock().unwrap().pop_front() {
            return Poll::Ready(Some(ev));
        }
        if self.inner.closed.load(Ordering::Acquire) {
            return Poll::Ready(None);
        }
        self.inner.waker.register(cx.waker());
        if let Some(ev) = self.inner.inbox.lock().unwrap().pop_front() {
            return Poll::Ready(Some(ev));
        }
        if self.inner.closed.load(Ordering::Acquire) {
            return Poll::Ready(None);
        }
        Poll::Pending
    }
}

#[derive(Clone, Debug)]
pub struct MockPageHandle {
    inner: Arc<Inner>,
}

impl MockPageHandle {
    pub fn send(&self, ev: UserEvent) {
        self.inner.inbox.lock().unwrap().push_back(ev);
        self.inner.waker.wake();
    }

    pub fn close(&self) {
        self.inner.closed.store(true, Ordering::Release);
        self.inner.waker.wake();
    }
}
