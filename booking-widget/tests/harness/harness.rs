use std::{future::Future, sync::Once};

use booking_core::format::frame::Request;
use booking_widget::{
    view::{FormKind, PageView, Tab},
    BookingWidget, Field, RequestId, TokioTimer, UserEvent, WidgetConfig, WidgetInterfaceFacade,
};
use log::LevelFilter;
use tokio::task::LocalSet;

use super::{
    event::{event_bus, Event, EventRx},
    gateway::{MockGateway, MockGatewayHandle},
    identity::{IdentityScript, MockIdentity},
    page::{MockPage, MockPageHandle},
};

pub const APP_ID: &str = "1650000000-test";

static INIT: Once = Once::new();

fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Trace)
            .try_init()
            .ok();
    });
}

/// The widget must stay on one thread, so every scenario runs on a `LocalSet`.
pub async fn local<F: Future<Output = ()>>(f: F) {
    LocalSet::new().run_until(f).await;
}

pub fn default_config() -> WidgetConfig {
    let mut config = WidgetConfig::new("https://script.example.com/macros/s/exec", APP_ID);
    config.auto_close_delay = 1;
    config
}

#[derive(Debug)]
pub struct WidgetHarness {
    pub gateway: MockGatewayHandle,
    pub page: MockPageHandle,
    pub bus_rx: EventRx,
}

impl WidgetHarness {
    pub fn new(timeout: u64, config: WidgetConfig, identity: IdentityScript) -> Self {
        init_logger();
        let (tx, rx) = event_bus(timeout);
        let (gateway, gateway_handle) = MockGateway::new(tx.clone());
        let (page, page_handle) = MockPage::new(tx.clone());
        let identity = MockIdentity::new(identity, tx.clone());
        let interface = WidgetInterfaceFacade::new(gateway, identity, TokioTimer::new(), page);
        let widget = BookingWidget::new(interface, config);
        tokio::task::spawn_local(async move {
            widget.run().await;
            tx.push(Event::Stopped);
        });
        Self {
            gateway: gateway_handle,
            page: page_handle,
            bus_rx: rx,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(3, default_config(), IdentityScript::default())
    }

    pub async fn next_event(&self) -> Event {
        let (ev, _) = self.bus_rx.next().await.expect("timed out waiting for widget");
        ev
    }

    /// Waits for the next outgoing call, skipping renders.
    pub async fn expect_call(&mut self) -> (RequestId, Request) {
        loop {
            match self.next_event().await {
                Event::Call(id, request) => return (id, request),
                Event::Rendered(_) => continue,
                ev => panic!("expected call, got {:?}", ev),
            }
        }
    }

    /// Waits until the next matching render.
    pub async fn expect_view<F: Fn(&PageView) -> bool>(&mut self, pred: F) -> PageView {
        loop {
            match self.next_event().await {
                Event::Rendered(view) if pred(&view) => return view,
                Event::Rendered(_) | Event::IdentityInit(_) => continue,
                ev => panic!("expected render, got {:?}", ev),
            }
        }
    }

    /// Waits for a specific non-render event.
    pub async fn expect_event<F: Fn(&Event) -> bool>(&mut self, pred: F) -> Event {
        loop {
            let ev = self.next_event().await;
            if pred(&ev) {
                return ev;
            }
            if let Event::Rendered(_) = ev {
                continue;
            }
            panic!("unexpected event {:?}", ev);
        }
    }

    /// Drains the bus until it stays quiet for its timeout; panics on any call.
    pub async fn expect_no_call(&self) {
        while let Some((ev, _)) = self.bus_rx.next().await {
            if !matches!(ev, Event::Rendered(_)) {
                panic!("expected silence, got {:?}", ev);
            }
        }
    }

    /// Waits for the identity bootstrap and its first render.
    pub async fn boot(&mut self) {
        self.expect_event(|ev| matches!(ev, Event::IdentityInit(_))).await;
        self.expect_view(|view| !view.booking.picker.date_min.is_empty()).await;
    }

    pub fn input(&self, form: FormKind, field: Field, value: &str) {
        self.page.send(UserEvent::Input {
            form,
            field,
            value: value.to_string(),
        });
    }

    pub fn select_slot(&self, form: FormKind, index: usize) {
        self.page.send(UserEvent::SelectSlot { form, index });
    }

    pub fn submit(&self, form: FormKind) {
        self.page.send(UserEvent::Submit(form));
    }

    pub fn show_tab(&self, tab: Tab) {
        self.page.send(UserEvent::ShowTab(tab));
    }

    pub async fn close(self) {
        self.page.close();
        loop {
            if let Event::Stopped = self.next_event().await {
                break;
            }
        }
    }
}
