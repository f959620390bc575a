use booking_core::format::frame::Request;

use crate::{
    interfaces::{RequestId, TimerId},
    widget::core::WidgetCore,
};

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetActions {
    /// Initialise the identity provider with this app id and read the profile.
    BootstrapIdentity(String),
    SendRequest(RequestId, Request),
    AddTimeout(TimerId, u64),
    /// Close the in-app window, if the page runs inside the client.
    CloseWindow,
}

impl WidgetCore {
    pub(crate) fn bootstrap_identity(&mut self, app_id: String) {
        self.queued_actions
            .push_back(WidgetActions::BootstrapIdentity(app_id));
    }

    pub(crate) fn send_request(&mut self, id: RequestId, request: Request) {
        log::info!("outgoing call {} {}", id, request.action);
        self.queued_actions
            .push_back(WidgetActions::SendRequest(id, request));
    }

    pub(crate) fn add_timeout(&mut self, timer_id: TimerId, timeout_secs: u64) {
        self.queued_actions
            .push_back(WidgetActions::AddTimeout(timer_id, timeout_secs));
    }

    pub(crate) fn close_window(&mut self) {
        self.queued_actions.push_back(WidgetActions::CloseWindow);
    }

    pub(crate) fn handle_timeout_helper(&mut self, timer_id: TimerId) {
        log::debug!("timeout {:?}", timer_id);
        match timer_id {
            TimerId::AutoClose => self.close_window(),
        }
    }
}
