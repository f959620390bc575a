use booking_widget::{
    view::{text, FormKind, MessageStyle, Tab},
    Field,
};
use serde_json::{json, Value};

use crate::harness::{
    event::Event,
    fixtures::{two_slots, DATE},
    harness::WidgetHarness,
};

pub async fn cancel_sends_nulls() {
    let mut h = WidgetHarness::with_defaults();
    h.boot().await;
    h.show_tab(Tab::Manage);
    h.input(FormKind::Manage, Field::ReservationId, "R-100");
    // change then back to cancel: the change values must not leak
    h.input(FormKind::Manage, Field::ActionType, "change");
    h.input(FormKind::Manage, Field::ReservationType, "B");
    h.input(FormKind::Manage, Field::Date, DATE);
    let (id, _) = h.expect_call().await;
    h.gateway.respond_ok(id, two_slots());
    h.expect_view(|v| v.manage.picker.listing.slots().len() == 2)
        .await;
    h.select_slot(FormKind::Manage, 0);
    h.expect_view(|v| v.manage.picker.listing.is_selected(0)).await;
    h.input(FormKind::Manage, Field::ActionType, "cancel");
    let view = h.expect_view(|v| !v.manage.change_fields_visible).await;
    assert_eq!(view.manage.picker.selected_slot(), None);

    h.submit(FormKind::Manage);
    let (id, request) = h.expect_call().await;
    assert_eq!(request.action, "manageReservation");
    let form_data = request.param("formData").unwrap().as_object().unwrap().clone();
    assert_eq!(form_data.len(), 5);
    assert_eq!(form_data["reservationId"], json!("R-100"));
    assert_eq!(form_data["actionType"], json!("cancel"));
    assert_eq!(form_data["newSlotStart"], Value::Null);
    assert_eq!(form_data["newSlotEnd"], Value::Null);
    assert_eq!(form_data["newType"], Value::Null);

    h.gateway.respond_ok(id, json!({ "message": "キャンセルしました" }));
    let view = h
        .expect_view(|v| v.manage.controls.message.style == MessageStyle::Success)
        .await;
    assert_eq!(view.manage.controls.message.text, "キャンセルしました");
    assert!(view.manage.reservation_id.is_empty());
    assert_eq!(view.manage.controls.submit.label, text::COMPLETE_LABEL);
    h.expect_event(|ev| matches!(ev, Event::WindowClosed)).await;
    h.close().await;
}

pub async fn change_sends_new_slot() {
    let mut h = WidgetHarness::with_defaults();
    h.boot().await;
    h.show_tab(Tab::Manage);
    h.input(FormKind::Manage, Field::ReservationId, "R-7");
    h.input(FormKind::Manage, Field::ActionType, "change");
    let view = h.expect_view(|v| v.manage.change_fields_visible).await;
    assert!(view.tabs.manage.button_active);
    h.input(FormKind::Manage, Field::ReservationType, "B");
    h.input(FormKind::Manage, Field::Date, DATE);
    let (id, _) = h.expect_call().await;
    h.gateway.respond_ok(id, two_slots());
    h.expect_view(|v| v.manage.picker.listing.slots().len() == 2)
        .await;
    h.select_slot(FormKind::Manage, 0);
    h.expect_view(|v| v.manage.picker.listing.is_selected(0)).await;

    h.submit(FormKind::Manage);
    let (id, request) = h.expect_call().await;
    let form_data = request.param("formData").unwrap();
    assert_eq!(form_data["actionType"], json!("change"));
    assert_eq!(form_data["newSlotStart"], json!("2025-06-01T10:00:00+09:00"));
    assert_eq!(form_data["newSlotEnd"], json!("2025-06-01T11:00:00+09:00"));
    assert_eq!(form_data["newType"], json!("B"));

    h.gateway.fail_transport(id, "Network error");
    let view = h
        .expect_view(|v| v.manage.controls.message.style == MessageStyle::Error)
        .await;
    assert_eq!(view.manage.controls.submit.label, text::MANAGE_SUBMIT_LABEL);
    assert!(view.manage.change_fields_visible);
    assert!(view.manage.picker.listing.is_selected(0));
    h.close().await;
}
