use core::task::{Context, Poll};

use booking_core::format::{envelope::Reply, error::CallError, frame::Request};

use crate::view::{FormKind, PageView, Tab};

// gateway

#[derive(serde::Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl core::fmt::Display for RequestId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[allow(async_fn_in_trait)]
pub trait Gateway {
    /// Starts a call. The outcome is reported later through
    /// [`Gateway::poll_gateway_response`], in whatever order calls complete.
    async fn send_request(&mut self, id: RequestId, request: Request);
    fn poll_gateway_response(&mut self, cx: &mut Context<'_>) -> Poll<(RequestId, Result<Reply, CallError>)>;
}

// identity

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub user_id: String,
    pub display_name: Option<String>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum IdentityError {
    #[error("identity init failed: {0}")]
    Init(String),
    #[error("profile unavailable: {0}")]
    Profile(String),
}

#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    async fn identity_init(&mut self, app_id: &str) -> Result<(), IdentityError>;
    fn is_logged_in(&self) -> bool;
    async fn get_profile(&mut self) -> Result<Profile, IdentityError>;
    fn is_in_client(&self) -> bool;
    async fn close_window(&mut self);
}

// time

#[derive(Eq, Hash, Clone, Copy, PartialEq, Debug, PartialOrd, Ord)]
pub enum TimerId {
    AutoClose,
}

#[allow(async_fn_in_trait)]
pub trait TimeoutScheduler {
    async fn add_or_update_timeout(&mut self, id: TimerId, timeout: u64);
    async fn remove_all_timeouts(&mut self);
    fn poll_timeout(&mut self, cx: &mut Context<'_>) -> Poll<TimerId>;
}

// page

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Phone,
    ReservationType,
    Date,
    ReservationId,
    ActionType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserEvent {
    Input {
        form: FormKind,
        field: Field,
        value: String,
    },
    SelectSlot {
        form: FormKind,
        index: usize,
    },
    Submit(FormKind),
    ShowTab(Tab),
    /// The page learned that the user already holds a reservation.
    ExistingReservation,
}

#[allow(async_fn_in_trait)]
pub trait PageHost {
    async fn render(&mut self, view: &PageView);
    /// `None` once the page is gone.
    fn poll_user_event(&mut self, cx: &mut Context<'_>) -> Poll<Option<UserEvent>>;
}

// main

pub trait WidgetInterface: Gateway + IdentityProvider + TimeoutScheduler + PageHost {}
