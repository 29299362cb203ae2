use serde::Deserialize;

/// Query parameters accepted by the next-appointment endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailabilityQuery {
    #[serde(rename = "appointmentTypeID")]
    pub appointment_type_id: Option<String>,
    #[serde(rename = "calendarID")]
    pub calendar_id: Option<String>,
    pub locale: Option<String>,
}

/// The field a query is identified by. Appointment type wins over calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryTarget<'a> {
    AppointmentType(&'a str),
    Calendar(&'a str),
}

impl AvailabilityQuery {
    pub fn appointment_type(&self) -> Option<&str> {
        non_empty(self.appointment_type_id.as_deref())
    }

    pub fn calendar(&self) -> Option<&str> {
        non_empty(self.calendar_id.as_deref())
    }

    /// `None` when neither identifying parameter was given.
    pub fn target(&self) -> Option<QueryTarget<'_>> {
        self.appointment_type()
            .map(QueryTarget::AppointmentType)
            .or_else(|| self.calendar().map(QueryTarget::Calendar))
    }
}

impl QueryTarget<'_> {
    pub fn id(&self) -> &str {
        match self {
            QueryTarget::AppointmentType(id) | QueryTarget::Calendar(id) => id,
        }
    }

    pub fn cache_key(&self) -> String {
        match self {
            QueryTarget::AppointmentType(id) => format!("type:{id}"),
            QueryTarget::Calendar(id) => format!("calendar:{id}"),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
