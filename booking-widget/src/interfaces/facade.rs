use core::task::{Context, Poll};

use booking_core::format::{envelope::Reply, error::CallError, frame::Request};

use crate::view::PageView;

use super::{
    Gateway, IdentityError, IdentityProvider, PageHost, Profile, RequestId, TimeoutScheduler,
    TimerId, UserEvent, WidgetInterface,
};

/// Builds a [`WidgetInterface`] out of independent parts.
pub struct WidgetInterfaceFacade<G, Id, Ts, P> {
    gateway: G,
    identity: Id,
    ts: Ts,
    page: P,
}

impl<G, Id, Ts, P> WidgetInterfaceFacade<G, Id, Ts, P> {
    pub fn new(gateway: G, identity: Id, ts: Ts, page: P) -> Self {
        Self {
            gateway,
            identity,
            ts,
            page,
        }
    }

    pub fn into_parts(self) -> (G, Id, Ts, P) {
        (self.gateway, self.identity, self.ts, self.page)
    }
}

impl<G, Id, Ts, P> Gateway for WidgetInterfaceFacade<G, Id, Ts, P>
where
    G: Gateway,
{
    async fn send_request(&mut self, id: RequestId, request: Request) {
        self.gateway.send_request(id, request).await
    }
    fn poll_gateway_response(&mut self, cx: &mut Context<'_>) -> Poll<(RequestId, Result<Reply, CallError>)> {
        self.gateway.poll_gateway_response(cx)
    }
}

impl<G, Id, Ts, P> IdentityProvider for WidgetInterfaceFacade<G, Id, Ts, P>
where
    Id: IdentityProvider,
{
    async fn identity_init(&mut self, app_id: &str) -> Result<(), IdentityError> {
        self.identity.identity_init(app_id).await
    }
    fn is_logged_in(&self) -> bool {
        self.identity.is_logged_in()
    }
    async fn get_profile(&mut self) -> Result<Profile, IdentityError> {
        self.identity.get_profile().await
    }
    fn is_in_client(&self) -> bool {
        self.identity.is_in_client()
    }
    async fn close_window(&mut self) {
        self.identity.close_window().await
    }
}

impl<G, Id, Ts, P> TimeoutScheduler for WidgetInterfaceFacade<G, Id, Ts, P>
where
    Ts: TimeoutScheduler,
{
    async fn add_or_update_timeout(&mut self, id: TimerId, timeout: u64) {
        self.ts.add_or_update_timeout(id, timeout).await
    }
    async fn remove_all_timeouts(&mut self) {
        self.ts.remove_all_timeouts().await
    }
    fn poll_timeout(&mut self, cx: &mut Context<'_>) -> Poll<TimerId> {
        self.ts.poll_timeout(cx)
    }
}

impl<G, Id, Ts, P> PageHost for WidgetInterfaceFacade<G, Id, Ts, P>
where
    P: PageHost,
{
    async fn render(&mut self, view: &PageView) {
        self.page.render(view).await
    }
    fn poll_user_event(&mut self, cx: &mut Context<'_>) -> Poll<Option<UserEvent>> {
        self.page.poll_user_event(cx)
    }
}

impl<G, Id, Ts, P> WidgetInterface for WidgetInterfaceFacade<G, Id, Ts, P>
where
    G: Gateway,
    Id: IdentityProvider,
    Ts: TimeoutScheduler,
    P: PageHost,
{
}
