use crate::{interfaces::Field, view::FormKind, widget::core::WidgetCore};

impl WidgetCore {
    pub(crate) fn input_changed_helper(&mut self, form: FormKind, field: Field, value: String) {
        if self.view.controls(form).inputs_disabled {
            log::warn!("{:?} is locked, ignoring {:?} input", form, field);
            return;
        }
        match (form, field) {
            (_, Field::ReservationType) => {
                self.view.picker_mut(form).reservation_type = value;
                self.refresh_availability(form);
            }
            (_, Field::Date) => {
                self.view.picker_mut(form).date = value;
                self.refresh_availability(form);
            }
            (FormKind::Booking, Field::Name) => self.view.booking.name = value,
            (FormKind::Booking, Field::Email) => self.view.booking.email = value,
            (FormKind::Booking, Field::Phone) => self.view.booking.phone = value,
            (FormKind::Manage, Field::ReservationId) => self.view.manage.reservation_id = value,
            (FormKind::Manage, Field::ActionType) => self.set_action_type(&value),
            (form, field) => log::warn!("{:?} has no {:?} field", form, field),
        }
    }
}
