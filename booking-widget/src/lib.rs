mod drivers;
pub mod interfaces;
mod state_machine;
pub mod view;
mod widget;

pub use interfaces::{
    Field, Gateway, IdentityError, IdentityProvider, PageHost, Profile, RequestId, TimeoutScheduler,
    TimerId, UserEvent, WidgetInterface, WidgetInterfaceFacade,
};
pub use state_machine::{actions::WidgetActions, submission::SubmissionState};
pub use widget::{
    config::{ConfigError, WidgetConfig},
    core::WidgetCore,
    runner::BookingWidget,
};

#[cfg(feature = "http_gateway")]
pub use drivers::http::HttpGateway;
#[cfg(feature = "tokio_timer")]
pub use drivers::timers::TokioTimer;
