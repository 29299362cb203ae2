use serde::Serialize;

pub const NO_TYPE_SPECIFIED: &str = "No type specified";
pub const NO_APPOINTMENTS: &str = "No appointments available";

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentSummary {
    #[serde(rename = "type")]
    pub kind: String,
    pub is_available: bool,
}

/// What the widget receives, and what the cache stores.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct NextAppointmentResult {
    pub found: bool,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appointment: Option<AppointmentSummary>,
}

impl NextAppointmentResult {
    pub fn available(kind: &str, datetime: String, display: String) -> Self {
        NextAppointmentResult {
            found: true,
            display,
            datetime: Some(datetime),
            appointment: Some(AppointmentSummary {
                kind: kind.to_string(),
                is_available: true,
            }),
        }
    }

    pub fn not_found(display: &str) -> Self {
        NextAppointmentResult {
            found: false,
            display: display.to_string(),
            datetime: None,
            appointment: None,
        }
    }
}
