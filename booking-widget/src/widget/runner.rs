use std::{collections::VecDeque, task::Poll};

use booking_core::format::{envelope::Reply, error::CallError, message::EncodeDecode};
use chrono::Utc;

use crate::{
    interfaces::{IdentityError, Profile, RequestId, TimerId, UserEvent, WidgetInterface},
    state_machine::actions::WidgetActions,
};

use super::{config::WidgetConfig, core::WidgetCore};

enum WidgetEvent {
    User(Option<UserEvent>),
    Gateway(RequestId, Result<Reply, CallError>),
    Timeout(TimerId),
}

/// Drives a [`WidgetCore`] against a [`WidgetInterface`] until the page closes.
pub struct BookingWidget<I: WidgetInterface> {
    interface: I,
    core: WidgetCore,
}

impl<I: WidgetInterface> BookingWidget<I> {
    pub fn new(interface: I, config: WidgetConfig) -> Self {
        Self {
            interface,
            core: WidgetCore::new(config),
        }
    }

    /// Runs the widget and hands the interface back once the page host is gone.
    pub async fn run(self) -> I {
        let BookingWidget {
            mut interface,
            mut core,
        } = self;
        let actions = core.init(Utc::now().date_naive());
        Self::execute(&mut interface, &mut core, actions).await;
        interface.render(core.view()).await;
        loop {
            let event = futures::future::poll_fn(|cx| {
                if let Poll::Ready(ev) = interface.poll_user_event(cx) {
                    return Poll::Ready(WidgetEvent::User(ev));
                }
                if let Poll::Ready((id, res)) = interface.poll_gateway_response(cx) {
                    return Poll::Ready(WidgetEvent::Gateway(id, res));
                }
                if let Poll::Ready(id) = interface.poll_timeout(cx) {
                    return Poll::Ready(WidgetEvent::Timeout(id));
                }
                Poll::Pending
            })
            .await;
            let actions = match event {
                WidgetEvent::User(None) => {
                    log::info!("page closed");
                    break;
                }
                WidgetEvent::User(Some(ev)) => {
                    log::debug!("user event {:?}", ev);
                    core.user_event(ev)
                }
                WidgetEvent::Gateway(id, res) => core.gateway_response(id, res),
                WidgetEvent::Timeout(id) => {
                    log::trace!("id timedout: {:?}", id);
                    core.handle_timeout(id)
                }
            };
            Self::execute(&mut interface, &mut core, actions).await;
            interface.render(core.view()).await;
        }
        interface.remove_all_timeouts().await;
        interface
    }

    async fn execute(interface: &mut I, core: &mut WidgetCore, actions: Vec<WidgetActions>) {
        let mut queue: VecDeque<WidgetActions> = actions.into();
        while let Some(action) = queue.pop_front() {
            match action {
                WidgetActions::BootstrapIdentity(app_id) => {
                    log::debug!("bootstrap identity, app_id: {}", app_id);
                    let res = Self::bootstrap_identity(interface, &app_id).await;
                    queue.extend(core.identity_resolved(res));
                }
                WidgetActions::SendRequest(id, request) => {
                    log::debug!("[CALL_OUT] {} {}", id, request.encode());
                    interface.send_request(id, request).await;
                }
                WidgetActions::AddTimeout(id, timeout) => {
                    log::trace!("add timeout, id: {:?}, timeout: {}", id, timeout);
                    interface.add_or_update_timeout(id, timeout).await;
                }
                WidgetActions::CloseWindow => {
                    if interface.is_in_client() {
                        log::info!("closing window");
                        interface.close_window().await;
                    } else {
                        log::debug!("not in client, window stays open");
                    }
                }
            }
        }
    }

    async fn bootstrap_identity(interface: &mut I, app_id: &str) -> Result<Option<Profile>, IdentityError> {
        interface.identity_init(app_id).await?;
        if !interface.is_logged_in() {
            return Ok(None);
        }
        interface.get_profile().await.map(Some)
    }
}
