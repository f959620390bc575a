use chrono::NaiveDate;

use crate::{
    interfaces::{IdentityError, Profile},
    view::{text, MessageStyle},
    widget::core::WidgetCore,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum IdentityState {
    Idle,
    Initializing,
    Ready,
    Failed,
}

impl WidgetCore {
    pub(crate) fn init_helper(&mut self, today: NaiveDate) {
        if self.identity_state != IdentityState::Idle {
            log::warn!("widget already initialised");
            return;
        }
        let min = today.format("%Y-%m-%d").to_string();
        self.view.booking.picker.date_min = min.clone();
        self.view.manage.picker.date_min = min;
        self.identity_state = IdentityState::Initializing;
        self.bootstrap_identity(self.config.app_id.clone());
    }

    /// `Ok(None)` means the session is not logged in.
    pub(crate) fn identity_resolved_helper(&mut self, res: Result<Option<Profile>, IdentityError>) {
        if self.identity_state != IdentityState::Initializing {
            log::warn!("identity resolved while {:?}, ignoring", self.identity_state);
            return;
        }
        match res {
            Ok(Some(profile)) => {
                log::debug!("identity ready");
                self.view.booking.line_user_id = profile.user_id;
                self.identity_state = IdentityState::Ready;
            }
            Ok(None) => {
                log::debug!("not logged in, identity left empty");
                self.identity_state = IdentityState::Ready;
            }
            Err(e) => {
                log::error!("identity bootstrap failed: {}", e);
                self.view
                    .booking
                    .controls
                    .message
                    .show(MessageStyle::Error, text::IDENTITY_INIT_FAILED);
                self.identity_state = IdentityState::Failed;
            }
        }
    }
}
