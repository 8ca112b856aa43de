pub mod device;
pub mod sensor_reading;
pub mod session;
pub mod timestamp;
pub mod user;
pub mod wardrobe_item;

pub use device::{Device, DeviceTable};
pub use sensor_reading::{OrderKey, ReadingTable, SensorKind, SensorReading};
pub use session::{Session, SessionTable};
pub use user::{User, UserTable};
pub use wardrobe_item::{WardrobeItem, WardrobeTable};

pub trait Table {
    /// The name of the table
    fn name(&self) -> &'static str;

    /// The SQL statement to create the table
    fn create(&self) -> String;

    /// The SQL statement to dispose the table
    fn dispose(&self) -> String;

    /// The dependencies of the table
    fn dependencies(&self) -> Vec<&'static str>;
}
