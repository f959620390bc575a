use booking_core::{
    format::{envelope::Reply, error::CallError, frame::Request},
    reservation::{
        messages::{
            create_reservation::{CreateReservationRequest, ReservationRequest},
            manage_reservation::{ManageReservationRequest, ReservationMutation},
        },
        types::{Action, ActionType, SubmissionReceipt},
    },
};
use serde_json::Value;

use crate::{
    interfaces::{RequestId, TimerId},
    view::{text, FormKind, MessageStyle},
    widget::core::WidgetCore,
};

use super::call::CallTarget;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting(RequestId),
    /// Terminal for the page instance.
    Completed,
}

impl WidgetCore {
    pub(crate) fn submit_helper(&mut self, form: FormKind) {
        if self.view.controls(form).inputs_disabled {
            log::warn!("{:?} is locked, ignoring submit", form);
            return;
        }
        let state = *self.submission_state.get(form);
        if state != SubmissionState::Idle {
            log::warn!("{:?} submit ignored while {:?}", form, state);
            return;
        }
        let id = self.next_request_id();
        *self.submission_state.get_mut(form) = SubmissionState::Submitting(id);
        let controls = self.view.controls_mut(form);
        controls.submit.disabled = true;
        controls.submit.label = text::PROCESSING_LABEL.to_string();
        controls.message.clear();

        let request = self.submission_request(form);
        self.enqueue_call(id, CallTarget::Submission(form), request);
    }

    fn submission_request(&mut self, form: FormKind) -> Result<Request, CallError> {
        let request = match form {
            FormKind::Booking => {
                let booking = &self.view.booking;
                let mut form_data = ReservationRequest {
                    name: booking.name.clone(),
                    email: booking.email.clone(),
                    phone: booking.phone.clone(),
                    reservation_type: booking.picker.reservation_type.clone(),
                    line_user_id: booking.line_user_id.clone(),
                    ..Default::default()
                };
                form_data.set_slot(booking.picker.selected_slot().as_ref());
                Request::new(
                    Action::CreateReservation.as_str(),
                    CreateReservationRequest { form_data },
                )?
            }
            FormKind::Manage => {
                let manage = &self.view.manage;
                let reservation_id = manage.reservation_id.clone();
                let form_data = match manage.action_type {
                    ActionType::Cancel => ReservationMutation::cancel(reservation_id),
                    ActionType::Change => ReservationMutation::change(
                        reservation_id,
                        manage.picker.selected_slot().as_ref(),
                        manage.picker.reservation_type.clone(),
                    ),
                };
                Request::new(
                    Action::ManageReservation.as_str(),
                    ManageReservationRequest { form_data },
                )?
            }
        };
        Ok(match self.issue_submission_token(form) {
            Some(token) => request.with_param("submissionToken", Value::String(token)),
            None => request,
        })
    }

    pub(crate) fn submission_response(&mut self, form: FormKind, id: RequestId, res: Result<Reply, CallError>) {
        if *self.submission_state.get(form) != SubmissionState::Submitting(id) {
            log::warn!("{:?} got unexpected submission response {}", form, id);
            return;
        }
        match res {
            Ok(reply) => self.submission_succeeded(form, SubmissionReceipt::from_reply(&reply)),
            Err(e) => self.submission_failed(form, e),
        }
    }

    fn submission_succeeded(&mut self, form: FormKind, receipt: SubmissionReceipt) {
        log::info!("{:?} submitted", form);
        let mut message = receipt.message;
        if let Some(reservation_id) = &receipt.reservation_id {
            message.push_str(&text::reservation_id_suffix(reservation_id));
        }
        self.reset_form(form);
        let controls = self.view.controls_mut(form);
        controls.message.show(MessageStyle::Success, message);
        controls.submit.label = text::COMPLETE_LABEL.to_string();
        controls.submit.disabled = true;
        *self.submission_state.get_mut(form) = SubmissionState::Completed;
        *self.submission_tokens.get_mut(form) = None;
        self.add_timeout(TimerId::AutoClose, self.config.auto_close_delay);
    }

    fn submission_failed(&mut self, form: FormKind, e: CallError) {
        log::info!("{:?} submit failed: {}", form, e);
        let controls = self.view.controls_mut(form);
        controls
            .message
            .show(MessageStyle::Error, format!("{}{}", text::ERROR_PREFIX, e));
        controls.submit.label = form.submit_label().to_string();
        // a form locked while the call was in flight stays locked
        controls.submit.disabled = controls.inputs_disabled;
        *self.submission_state.get_mut(form) = SubmissionState::Idle;
    }

    /// Clears what the user typed. The hidden identity field survives.
    fn reset_form(&mut self, form: FormKind) {
        match form {
            FormKind::Booking => {
                let booking = &mut self.view.booking;
                booking.name.clear();
                booking.email.clear();
                booking.phone.clear();
                booking.picker.reset();
            }
            FormKind::Manage => {
                let manage = &mut self.view.manage;
                manage.reservation_id.clear();
                manage.action_type = ActionType::default();
                manage.change_fields_visible = false;
                manage.picker.reset();
            }
        }
        self.invalidate_availability(form);
    }
}
