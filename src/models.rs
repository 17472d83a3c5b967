use serde::Deserialize;

fn unknown() -> String {
    "Unknown".to_string()
}

fn unnamed() -> String {
    "Unnamed service".to_string()
}

#[derive(Debug, Deserialize, Default)]
pub struct StatusSummary {
    #[serde(default)]
    pub page: PageInfo,
    #[serde(default)]
    pub status: StatusInfo,
    #[serde(default)]
    pub components: Vec<Component>,
}

#[derive(Debug, Deserialize)]
pub struct PageInfo {
    #[serde(default = "unknown")]
    pub name: String,
    #[serde(default = "unknown")]
    pub url: String,
    #[serde(default = "unknown")]
    pub updated_at: String,
}

impl Default for PageInfo {
    fn default() -> Self {
        PageInfo {
            name: unknown(),
            url: unknown(),
            updated_at: unknown(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusInfo {
    #[serde(default = "unknown")]
    pub description: String,
    #[serde(default = "unknown")]
    pub indicator: String,
}

impl Default for StatusInfo {
    fn default() -> Self {
        StatusInfo {
            description: unknown(),
            indicator: unknown(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Component {
    #[serde(default)]
    pub id: String,
    #[serde(default = "unnamed")]
    pub name: String,
    #[serde(default)]
    pub status: ComponentStatus,
    #[serde(default)]
    pub group_id: Option<String>,
}

/// Component status as reported by the endpoint. Strings the endpoint may
/// introduce later land in `Other` with the raw value kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ComponentStatus {
    Operational,
    DegradedPerformance,
    PartialOutage,
    MajorOutage,
    Maintenance,
    Other(String),
}

impl From<String> for ComponentStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "operational" => ComponentStatus::Operational,
            "degraded_performance" => ComponentStatus::DegradedPerformance,
            "partial_outage" => ComponentStatus::PartialOutage,
            "major_outage" => ComponentStatus::MajorOutage,
            "maintenance" => ComponentStatus::Maintenance,
            _ => ComponentStatus::Other(raw),
        }
    }
}

impl Default for ComponentStatus {
    fn default() -> Self {
        ComponentStatus::Other("unknown".to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Availability {
    pub percent: f64,
    pub operational: usize,
    pub total: usize,
}
