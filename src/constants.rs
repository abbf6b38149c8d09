//! Constants
//!
//! Centralized defaults shared by the store, the controllers and the config layer.

/// Remote endpoint serving the baseline vehicle list
pub const VEHICLES_URL: &str = "https://ofc-test-01.tspb.su/test-task/vehicles";

/// Map center used when there is no vehicle to center on (Saint Petersburg)
pub const DEFAULT_MAP_CENTER: (f64, f64) = (59.95, 30.28);

/// Initial map zoom level
pub const DEFAULT_MAP_ZOOM: u8 = 10;

/// Earliest model year accepted by the form
pub const MIN_VEHICLE_YEAR: i32 = 1900;

/// Color preselected for a new vehicle
pub const DEFAULT_VEHICLE_COLOR: &str = "red";

/// Decimal places shown for marker coordinates
pub const COORDINATE_PRECISION: usize = 4;

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "VEHICLE_MANAGER_CONFIG";

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application name used for directories and log files
pub const APP_NAME: &str = "vehicle-manager";
