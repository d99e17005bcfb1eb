pub mod activity;
pub mod gear;
pub mod profile;

pub use activity::{Activity, METERS_PER_STEP};
pub use gear::{Gear, GearType};
pub use profile::Profile;
