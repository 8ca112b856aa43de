mod device;
mod sensor_reading;
mod session;
mod user;
mod wardrobe_item;

pub use device::DeviceRepository;
pub use sensor_reading::{ReadingChanges, ReadingFilter, SensorReadingRepository};
pub use session::SessionRepository;
pub use user::UserRepository;
pub use wardrobe_item::{WardrobeItemChanges, WardrobeItemRepository};

/// Maps the driver's unique-constraint violation so handlers can surface
/// duplicate usernames/emails/device ids as a bad request instead of a 500.
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(e) if e.is_unique_violation())
}
