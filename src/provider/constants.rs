// Acuity Scheduling REST API
pub const DEFAULT_BASE_URL: &str = "https://acuityscheduling.com/api/v1/";
pub const AVAILABILITY_TIMES_PATH: &str = "availability/times";

// query parameter names, spelled the way the provider spells them
pub const PARAM_DATE: &str = "date";
pub const PARAM_APPOINTMENT_TYPE_ID: &str = "appointmentTypeID";
pub const PARAM_CALENDAR_ID: &str = "calendarID";

pub const DATE_FORMAT: &str = "%Y-%m-%d";

// service defaults, all overridable from the environment
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 1000;
pub const DEFAULT_SCAN_HORIZON_DAYS: u32 = 30;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 7;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 8;
pub const DEFAULT_LOCALE: &str = "en-US";
