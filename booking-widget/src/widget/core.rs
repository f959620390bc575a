use std::collections::{BTreeMap, VecDeque};

use chrono::NaiveDate;
use rand::{rngs::SmallRng, SeedableRng};

use booking_core::format::{envelope::Reply, error::CallError};

use crate::{
    interfaces::{Field, IdentityError, Profile, RequestId, TimerId, UserEvent},
    state_machine::{
        actions::WidgetActions,
        availability::AvailabilityState,
        call::CallTarget,
        identity::IdentityState,
        submission::SubmissionState,
    },
    view::{FormKind, PageView, Tab},
};

use super::config::WidgetConfig;

/// One value per form.
#[derive(Debug, Default)]
pub(crate) struct PerForm<T> {
    pub booking: T,
    pub manage: T,
}

impl<T> PerForm<T> {
    pub fn get(&self, form: FormKind) -> &T {
        match form {
            FormKind::Booking => &self.booking,
            FormKind::Manage => &self.manage,
        }
    }

    pub fn get_mut(&mut self, form: FormKind) -> &mut T {
        match form {
            FormKind::Booking => &mut self.booking,
            FormKind::Manage => &mut self.manage,
        }
    }
}

pub struct WidgetCore {
    pub(crate) config: WidgetConfig,
    pub(crate) view: PageView,
    pub(crate) queued_actions: VecDeque<WidgetActions>,
    pub(crate) last_request_id: u64,
    pub(crate) in_flight: BTreeMap<RequestId, CallTarget>,
    pub(crate) identity_state: IdentityState,
    pub(crate) availability_state: PerForm<AvailabilityState>,
    pub(crate) submission_state: PerForm<SubmissionState>,
    pub(crate) submission_tokens: PerForm<Option<String>>,
    pub(crate) rng: SmallRng,
}

impl WidgetCore {
    pub fn new(config: WidgetConfig) -> Self {
        let rng = SmallRng::seed_from_u64(config.seed);
        Self {
            config,
            view: PageView::default(),
            queued_actions: VecDeque::new(),
            last_request_id: 0,
            in_flight: BTreeMap::new(),
            identity_state: IdentityState::Idle,
            availability_state: PerForm::default(),
            submission_state: PerForm::default(),
            submission_tokens: PerForm::default(),
            rng,
        }
    }

    pub fn view(&self) -> &PageView {
        &self.view
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn submission_state(&self, form: FormKind) -> SubmissionState {
        *self.submission_state.get(form)
    }

    /// Token attached to the next submit of `form`, if tokens are enabled and
    /// one has been issued.
    pub fn submission_token(&self, form: FormKind) -> Option<&str> {
        self.submission_tokens.get(form).as_deref()
    }

    pub fn init(&mut self, today: NaiveDate) -> Vec<WidgetActions> {
        self.init_helper(today);
        self.queued_actions.drain(..).collect()
    }
    pub fn identity_resolved(&mut self, res: Result<Option<Profile>, IdentityError>) -> Vec<WidgetActions> {
        self.identity_resolved_helper(res);
        self.queued_actions.drain(..).collect()
    }
    pub fn user_event(&mut self, ev: UserEvent) -> Vec<WidgetActions> {
        match ev {
            UserEvent::Input { form, field, value } => self.input_changed(form, field, value),
            UserEvent::SelectSlot { form, index } => self.slot_clicked(form, index),
            UserEvent::Submit(form) => self.submit(form),
            UserEvent::ShowTab(tab) => self.show_tab(tab),
            UserEvent::ExistingReservation => self.existing_reservation(),
        }
    }
    pub fn input_changed(&mut self, form: FormKind, field: Field, value: String) -> Vec<WidgetActions> {
        self.input_changed_helper(form, field, value);
        self.queued_actions.drain(..).collect()
    }
    pub fn slot_clicked(&mut self, form: FormKind, index: usize) -> Vec<WidgetActions> {
        self.slot_clicked_helper(form, index);
        self.queued_actions.drain(..).collect()
    }
    pub fn submit(&mut self, form: FormKind) -> Vec<WidgetActions> {
        self.submit_helper(form);
        self.queued_actions.drain(..).collect()
    }
    pub fn show_tab(&mut self, tab: Tab) -> Vec<WidgetActions> {
        self.show_tab_helper(tab);
        self.queued_actions.drain(..).collect()
    }
    pub fn existing_reservation(&mut self) -> Vec<WidgetActions> {
        self.existing_reservation_helper();
        self.queued_actions.drain(..).collect()
    }
    pub fn gateway_response(&mut self, id: RequestId, res: Result<Reply, CallError>) -> Vec<WidgetActions> {
        self.gateway_response_helper(id, res);
        self.queued_actions.drain(..).collect()
    }
    pub fn handle_timeout(&mut self, id: TimerId) -> Vec<WidgetActions> {
        self.handle_timeout_helper(id);
        self.queued_actions.drain(..).collect()
    }
}
