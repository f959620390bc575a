use booking_core::reservation::types::ActionType;

use crate::{
    view::{text, FormKind, MessageStyle, Tab},
    widget::core::WidgetCore,
};

impl WidgetCore {
    pub(crate) fn show_tab_helper(&mut self, tab: Tab) {
        let previous = self.view.tabs.active();
        for t in [Tab::Book, Tab::Manage] {
            let view = self.view.tabs.get_mut(t);
            view.panel_visible = false;
            view.button_active = false;
        }
        let target = self.view.tabs.get_mut(tab);
        target.panel_visible = true;
        target.button_active = true;
        if let Some(previous) = previous.filter(|p| *p != tab) {
            log::debug!("tab {:?} -> {:?}", previous, tab);
            self.clear_selection(previous.form());
        }
    }

    /// Shows the change section only for `change`.
    pub(crate) fn set_action_type(&mut self, value: &str) {
        let Ok(action_type) = value.parse::<ActionType>() else {
            log::warn!("unknown action type {:?}", value);
            return;
        };
        let visible = action_type == ActionType::Change;
        if self.view.manage.change_fields_visible && !visible {
            self.clear_selection(FormKind::Manage);
        }
        self.view.manage.action_type = action_type;
        self.view.manage.change_fields_visible = visible;
    }

    pub(crate) fn existing_reservation_helper(&mut self) {
        log::info!("user already holds a reservation, locking booking form");
        let controls = &mut self.view.booking.controls;
        controls.inputs_disabled = true;
        controls.submit.disabled = true;
        controls
            .message
            .show(MessageStyle::Plain, text::EXISTING_RESERVATION);
        self.invalidate_availability(FormKind::Booking);
        self.show_tab_helper(Tab::Manage);
    }
}
