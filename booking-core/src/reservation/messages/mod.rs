pub mod create_reservation;
pub mod get_available_slots;
pub mod manage_reservation;
