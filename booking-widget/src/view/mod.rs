//! Page model rendered by the host.
//!
//! Everything the markup layer shows lives here: panel visibility, field
//! values, the slot container of each form, submit buttons and message areas.
//! The core mutates it, the driver hands it to [`crate::PageHost::render`].

use booking_core::reservation::types::{ActionType, SelectedSlot, Slot};
use serde::Serialize;

pub mod text;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum FormKind {
    /// Create a new reservation.
    Booking,
    /// Cancel or change an existing one.
    Manage,
}

impl FormKind {
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormKind::Booking => text::BOOKING_SUBMIT_LABEL,
            FormKind::Manage => text::MANAGE_SUBMIT_LABEL,
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            FormKind::Booking => Tab::Book,
            FormKind::Manage => Tab::Manage,
        }
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum Tab {
    #[default]
    Book,
    Manage,
}

impl Tab {
    pub fn form(&self) -> FormKind {
        match self {
            Tab::Book => FormKind::Booking,
            Tab::Manage => FormKind::Manage,
        }
    }
}

/// Content of a form's slot container.
#[derive(Serialize, Clone, Debug, PartialEq, Default)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SlotListing {
    /// Nothing requested yet.
    #[default]
    Blank,
    /// Date or type missing.
    Prompt,
    Loading,
    /// The backend returned no slots.
    Empty,
    Slots {
        slots: Vec<Slot>,
        selected: Option<usize>,
    },
    Failed {
        message: String,
    },
}

impl SlotListing {
    pub fn from_slots(slots: Vec<Slot>) -> Self {
        if slots.is_empty() {
            SlotListing::Empty
        } else {
            SlotListing::Slots {
                slots,
                selected: None,
            }
        }
    }

    /// Text shown instead of a list, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            SlotListing::Blank | SlotListing::Slots { .. } => None,
            SlotListing::Prompt => Some(text::SELECT_TYPE_AND_DATE.to_string()),
            SlotListing::Loading => Some(text::SEARCHING_SLOTS.to_string()),
            SlotListing::Empty => Some(text::NO_SLOTS.to_string()),
            SlotListing::Failed { message } => Some(format!("{}{}", text::SLOTS_FAILED_PREFIX, message)),
        }
    }

    pub fn slots(&self) -> &[Slot] {
        match self {
            SlotListing::Slots { slots, .. } => slots,
            _ => &[],
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        match self {
            SlotListing::Slots { selected, .. } => *selected,
            _ => None,
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_index() == Some(index)
    }

    pub fn selected_slot(&self) -> Option<SelectedSlot> {
        match self {
            SlotListing::Slots {
                slots,
                selected: Some(index),
            } => slots.get(*index).map(Slot::selected),
            _ => None,
        }
    }

    /// Marks `index` as the only selected entry. Returns false when there is
    /// no such entry.
    pub fn select(&mut self, index: usize) -> bool {
        match self {
            SlotListing::Slots { slots, selected } if index < slots.len() => {
                *selected = Some(index);
                true
            }
            _ => false,
        }
    }

    pub fn clear_selection(&mut self) {
        if let SlotListing::Slots { selected, .. } = self {
            *selected = None;
        }
    }
}

/// Date and type inputs plus the slot container they drive.
#[derive(Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SlotPicker {
    pub reservation_type: String,
    pub date: String,
    /// `min` attribute of the date input.
    pub date_min: String,
    pub listing: SlotListing,
}

impl SlotPicker {
    /// Both inputs filled in.
    pub fn query(&self) -> Option<(&str, &str)> {
        if self.date.is_empty() || self.reservation_type.is_empty() {
            None
        } else {
            Some((self.date.as_str(), self.reservation_type.as_str()))
        }
    }

    /// The form's selected start/end pair.
    pub fn selected_slot(&self) -> Option<SelectedSlot> {
        self.listing.selected_slot()
    }

    pub(crate) fn reset(&mut self) {
        self.reservation_type.clear();
        self.date.clear();
        self.listing = SlotListing::Blank;
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum MessageStyle {
    #[default]
    Plain,
    Success,
    Error,
}

impl MessageStyle {
    pub fn class_name(&self) -> &'static str {
        match self {
            MessageStyle::Plain => "message",
            MessageStyle::Success => "message success",
            MessageStyle::Error => "message error",
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MessageArea {
    pub style: MessageStyle,
    pub text: String,
}

impl MessageArea {
    pub fn show(&mut self, style: MessageStyle, text: impl Into<String>) {
        self.style = style;
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.show(MessageStyle::Plain, String::new());
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormControls {
    pub submit: SubmitButton,
    pub message: MessageArea,
    /// Every input of the form is disabled.
    pub inputs_disabled: bool,
}

impl FormControls {
    pub fn new(form: FormKind) -> Self {
        Self {
            submit: SubmitButton {
                label: form.submit_label().to_string(),
                disabled: false,
            },
            message: MessageArea::default(),
            inputs_disabled: false,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingFormView {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Hidden field, written once by the identity bootstrap.
    pub line_user_id: String,
    pub picker: SlotPicker,
    pub controls: FormControls,
}

impl Default for BookingFormView {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            line_user_id: String::new(),
            picker: SlotPicker::default(),
            controls: FormControls::new(FormKind::Booking),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManageFormView {
    pub reservation_id: String,
    pub action_type: ActionType,
    /// The "change" section holding the new type, date and slot inputs.
    pub change_fields_visible: bool,
    pub picker: SlotPicker,
    pub controls: FormControls,
}

impl Default for ManageFormView {
    fn default() -> Self {
        Self {
            reservation_id: String::new(),
            action_type: ActionType::default(),
            change_fields_visible: false,
            picker: SlotPicker::default(),
            controls: FormControls::new(FormKind::Manage),
        }
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TabView {
    pub panel_visible: bool,
    pub button_active: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TabStrip {
    pub book: TabView,
    pub manage: TabView,
}

impl Default for TabStrip {
    fn default() -> Self {
        Self {
            book: TabView {
                panel_visible: true,
                button_active: true,
            },
            manage: TabView::default(),
        }
    }
}

impl TabStrip {
    pub fn get(&self, tab: Tab) -> &TabView {
        match tab {
            Tab::Book => &self.book,
            Tab::Manage => &self.manage,
        }
    }

    pub fn get_mut(&mut self, tab: Tab) -> &mut TabView {
        match tab {
            Tab::Book => &mut self.book,
            Tab::Manage => &mut self.manage,
        }
    }

    /// The tab whose panel is showing.
    pub fn active(&self) -> Option<Tab> {
        [Tab::Book, Tab::Manage]
            .into_iter()
            .find(|tab| self.get(*tab).panel_visible)
    }

    pub fn visible_panels(&self) -> usize {
        [self.book, self.manage].iter().filter(|t| t.panel_visible).count()
    }

    pub fn active_buttons(&self) -> usize {
        [self.book, self.manage].iter().filter(|t| t.button_active).count()
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub tabs: TabStrip,
    pub booking: BookingFormView,
    pub manage: ManageFormView,
}

impl PageView {
    pub fn picker(&self, form: FormKind) -> &SlotPicker {
        match form {
            FormKind::Booking => &self.booking.picker,
            FormKind::Manage => &self.manage.picker,
        }
    }

    pub fn picker_mut(&mut self, form: FormKind) -> &mut SlotPicker {
        match form {
            FormKind::Booking => &mut self.booking.picker,
            FormKind::Manage => &mut self.manage.picker,
        }
    }

    pub fn controls(&self, form: FormKind) -> &FormControls {
        match form {
            FormKind::Booking => &self.booking.controls,
            FormKind::Manage => &self.manage.controls,
        }
    }

    pub fn controls_mut(&mut self, form: FormKind) -> &mut FormControls {
        match form {
            FormKind::Booking => &mut self.booking.controls,
            FormKind::Manage => &mut self.manage.controls,
        }
    }
}
