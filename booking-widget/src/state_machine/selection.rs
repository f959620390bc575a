use crate::{view::FormKind, widget::core::WidgetCore};

impl WidgetCore {
    pub(crate) fn slot_clicked_helper(&mut self, form: FormKind, index: usize) {
        if self.view.controls(form).inputs_disabled {
            log::warn!("{:?} is locked, ignoring slot click", form);
            return;
        }
        if self.view.picker_mut(form).listing.select(index) {
            log::debug!("{:?} selected slot {}", form, index);
        } else {
            log::warn!("{:?} has no slot {}", form, index);
        }
    }

    pub(crate) fn clear_selection(&mut self, form: FormKind) {
        self.view.picker_mut(form).listing.clear_selection();
    }
}
