use booking_widget::{
    view::{text, FormKind, MessageStyle, SlotListing, Tab},
    Field, IdentityError,
};
use serde_json::json;

use crate::harness::{
    event::Event,
    fixtures::{two_slots, DATE, TYPE_A},
    harness::{default_config, WidgetHarness, APP_ID},
    identity::IdentityScript,
};

pub async fn failed_bootstrap_does_not_block() {
    let script = IdentityScript {
        init: Err(IdentityError::Init("sdk unavailable".to_string())),
        ..Default::default()
    };
    let mut h = WidgetHarness::new(3, default_config(), script);
    let ev = h.expect_event(|ev| matches!(ev, Event::IdentityInit(_))).await;
    assert!(matches!(ev, Event::IdentityInit(app_id) if app_id == APP_ID));
    let view = h
        .expect_view(|v| v.booking.controls.message.style == MessageStyle::Error)
        .await;
    assert_eq!(view.booking.controls.message.text, text::IDENTITY_INIT_FAILED);
    assert!(view.booking.line_user_id.is_empty());
    assert!(!view.booking.picker.date_min.is_empty());

    h.input(FormKind::Booking, Field::Date, DATE);
    h.input(FormKind::Booking, Field::ReservationType, TYPE_A);
    let (id, _) = h.expect_call().await;
    h.gateway.respond_ok(id, two_slots());
    h.expect_view(|v| v.booking.picker.listing.slots().len() == 2)
        .await;
    h.close().await;
}

pub async fn logged_out_sends_empty_identity() {
    let script = IdentityScript {
        profile: None,
        ..Default::default()
    };
    let mut h = WidgetHarness::new(3, default_config(), script);
    h.boot().await;
    h.submit(FormKind::Booking);
    let (_, request) = h.expect_call().await;
    assert_eq!(request.param("formData").unwrap()["lineUserId"], json!(""));
    h.close().await;
}

pub async fn existing_reservation_locks_booking() {
    let mut h = WidgetHarness::with_defaults();
    h.boot().await;
    h.page.send(booking_widget::UserEvent::ExistingReservation);
    let view = h.expect_view(|v| v.tabs.manage.panel_visible).await;
    assert!(view.booking.controls.inputs_disabled);
    assert!(view.booking.controls.submit.disabled);
    assert_eq!(view.booking.controls.message.text, text::EXISTING_RESERVATION);
    assert!(!view.tabs.book.panel_visible);
    assert_eq!(view.tabs.active(), Some(Tab::Manage));

    // locked inputs never reach the backend
    h.input(FormKind::Booking, Field::Date, DATE);
    h.input(FormKind::Booking, Field::ReservationType, TYPE_A);
    h.submit(FormKind::Booking);
    h.expect_no_call().await;

    // the manage form still works
    h.input(FormKind::Manage, Field::ReservationId, "R-9");
    h.submit(FormKind::Manage);
    let (_, request) = h.expect_call().await;
    assert_eq!(request.action, "manageReservation");
    h.close().await;
}

pub async fn prompt_without_type() {
    let mut h = WidgetHarness::with_defaults();
    h.boot().await;
    h.input(FormKind::Booking, Field::Date, DATE);
    let view = h
        .expect_view(|v| v.booking.picker.listing == SlotListing::Prompt)
        .await;
    assert_eq!(view.booking.picker.listing.message().unwrap(), text::SELECT_TYPE_AND_DATE);
    h.expect_no_call().await;
    h.close().await;
}
