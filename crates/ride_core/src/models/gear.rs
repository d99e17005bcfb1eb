//! Gear: the bikes a rider owns and takes on activities

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Kind of bike a gear entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GearType {
    RoadBike,
    MountainBike,
    CommuterBike,
    ElectricBike,
    TandemBike,
}

impl std::fmt::Display for GearType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            GearType::RoadBike => "road bike",
            GearType::MountainBike => "mountain bike",
            GearType::CommuterBike => "commuter bike",
            GearType::ElectricBike => "electric bike",
            GearType::TandemBike => "tandem bike",
        };
        f.write_str(label)
    }
}

/// A named piece of equipment with its rated average speed in km/h.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gear {
    gear_type: GearType,
    name: String,
    avg_speed_kmh: i32,
}

impl Gear {
    pub fn new(gear_type: GearType, name: impl Into<String>, avg_speed_kmh: i32) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(GridError::InvalidArgument("gear name cannot be empty".to_string()));
        }
        if avg_speed_kmh <= 0 {
            return Err(GridError::InvalidArgument(format!(
                "gear average speed must be positive, received {}",
                avg_speed_kmh
            )));
        }
        Ok(Self { gear_type, name, avg_speed_kmh })
    }

    pub fn gear_type(&self) -> GearType {
        self.gear_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn avg_speed_kmh(&self) -> i32 {
        self.avg_speed_kmh
    }
}
