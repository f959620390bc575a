use booking_core::{
    format::{error::CallError, frame::Request},
    reservation::{
        messages::get_available_slots::{GetAvailableSlotsRequest, GetAvailableSlotsResponse},
        types::Action,
    },
};

use crate::{
    interfaces::RequestId,
    view::{FormKind, SlotListing},
    widget::core::WidgetCore,
};

use super::call::CallTarget;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub(crate) enum AvailabilityState {
    #[default]
    Idle,
    /// Only a response to this id may touch the container.
    WaitingForResponse(RequestId),
}

impl WidgetCore {
    /// Re-queries the slots of `form` after its date or type changed.
    pub(crate) fn refresh_availability(&mut self, form: FormKind) {
        let query = self
            .view
            .picker(form)
            .query()
            .map(|(date, reservation_type)| GetAvailableSlotsRequest {
                date_str: date.to_string(),
                reservation_type: reservation_type.to_string(),
            });
        let Some(payload) = query else {
            log::debug!("{:?} availability query incomplete", form);
            *self.availability_state.get_mut(form) = AvailabilityState::Idle;
            self.view.picker_mut(form).listing = SlotListing::Prompt;
            return;
        };
        let id = self.next_request_id();
        *self.availability_state.get_mut(form) = AvailabilityState::WaitingForResponse(id);
        self.view.picker_mut(form).listing = SlotListing::Loading;
        let request = Request::new(Action::GetAvailableSlots.as_str(), payload);
        self.enqueue_call(id, CallTarget::Availability(form), request);
    }

    /// Drops the outstanding query of `form`, if any.
    pub(crate) fn invalidate_availability(&mut self, form: FormKind) {
        *self.availability_state.get_mut(form) = AvailabilityState::Idle;
    }

    pub(crate) fn availability_response(
        &mut self,
        form: FormKind,
        id: RequestId,
        res: Result<GetAvailableSlotsResponse, CallError>,
    ) {
        if *self.availability_state.get(form) != AvailabilityState::WaitingForResponse(id) {
            log::debug!("discarding stale availability {} for {:?}", id, form);
            return;
        }
        *self.availability_state.get_mut(form) = AvailabilityState::Idle;
        let listing = match res {
            Ok(slots) => {
                log::debug!("{:?} got {} slots", form, slots.len());
                SlotListing::from_slots(slots)
            }
            Err(e) => SlotListing::Failed {
                message: e.to_string(),
            },
        };
        self.view.picker_mut(form).listing = listing;
    }
}
