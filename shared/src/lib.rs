use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Reads a stored number that may have been written as `null`
/// (a NaN or infinity serialized by a browser) as zero
fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// A cow profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cow {
    /// Epoch-millis string assigned by the store
    pub id: String,
    pub name: String,
    pub breed: String,
    /// Live weight in kilograms
    pub weight: f64,
    /// Ear tag, not required to be unique
    pub tag_number: String,
    pub dob: String, // ISO 8601 date format (YYYY-MM-DD)
}

/// Request for adding a new cow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCowRequest {
    pub name: String,
    pub breed: String,
    pub weight: f64,
    pub tag_number: String,
    pub dob: String,
}

/// Partial update for a cow, only `Some` fields are applied
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCowRequest {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub weight: Option<f64>,
    pub tag_number: Option<String>,
    pub dob: Option<String>,
}

/// A farm expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    pub name: String,
    pub amount: f64,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExpenseRequest {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
}

/// A farm income entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: String,
    /// Where the money came from, e.g. "Milk sale"
    pub source: String,
    pub amount: f64,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIncomeRequest {
    pub source: String,
    pub amount: f64,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIncomeRequest {
    pub source: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
}

/// Milking slot of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MilkTime {
    Morning,
    MidMorning,
    Evening,
    Night,
}

impl MilkTime {
    pub const ALL: [MilkTime; 4] = [
        MilkTime::Morning,
        MilkTime::MidMorning,
        MilkTime::Evening,
        MilkTime::Night,
    ];

    /// Wire name of the slot ("mid-morning" etc.)
    pub fn as_str(&self) -> &'static str {
        match self {
            MilkTime::Morning => "morning",
            MilkTime::MidMorning => "mid-morning",
            MilkTime::Evening => "evening",
            MilkTime::Night => "night",
        }
    }

    /// Parse a wire name, case-insensitive
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|slot| slot.as_str() == value)
    }
}

impl fmt::Display for MilkTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single milking record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilkRecord {
    pub id: String,
    /// Litres collected
    pub amount: f64,
    pub time: MilkTime,
    pub date: String,
    pub comments: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMilkRecordRequest {
    pub amount: f64,
    pub time: MilkTime,
    pub date: String,
    #[serde(default)]
    pub comments: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMilkRecordRequest {
    pub amount: Option<f64>,
    pub time: Option<MilkTime>,
    pub date: Option<String>,
    pub comments: Option<String>,
}

/// A worker labor record
///
/// This is also the persisted shape: the worker list is stored as a JSON
/// array of these with camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub hours_worked: f64,
    /// Hourly wage
    #[serde(default, deserialize_with = "number_or_zero")]
    pub wage: f64,
    #[serde(default)]
    pub notes: String,
    /// Day the record was created (YYYY-MM-DD)
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkerRequest {
    pub name: String,
    pub role: String,
    pub hours_worked: f64,
    pub wage: f64,
    #[serde(default)]
    pub notes: String,
    /// Defaults to today when absent
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkerRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    pub hours_worked: Option<f64>,
    pub wage: Option<f64>,
    pub notes: Option<String>,
    pub date: Option<String>,
}

/// Raw add/edit dialog input for a cow. Every field arrives as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CowForm {
    pub name: String,
    pub breed: String,
    pub weight: String,
    pub tag_number: String,
    pub dob: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpenseForm {
    pub name: String,
    pub amount: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomeForm {
    pub source: String,
    pub amount: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MilkRecordForm {
    pub amount: String,
    pub time: String,
    pub date: String,
    pub comments: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkerForm {
    pub name: String,
    pub role: String,
    pub hours_worked: String,
    pub wage: String,
    pub notes: String,
}

/// Result of an update or delete against a record list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationOutcome {
    Updated,
    Deleted,
    NotFound,
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        !matches!(self, MutationOutcome::NotFound)
    }
}

/// Response after a create, update or delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordResponse<T> {
    pub record: Option<T>,
    pub outcome: Option<MutationOutcome>,
    pub success_message: String,
}

/// Response containing a whole record list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordListResponse<T> {
    pub records: Vec<T>,
    /// Bumped on every applied mutation of the list
    pub revision: u64,
}

/// Request for logging in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response from a login attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
}

/// Current session state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStatus {
    pub logged_in: bool,
    pub username: Option<String>,
}

/// Body of every non-2xx API response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Where the client should navigate instead, if anywhere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            redirect: None,
        }
    }
}

/// Named client routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Dashboard,
    Cattle,
    Expenses,
    Income,
    Reports,
    Feeds,
    MilkProduction,
    Workers,
    Login,
    NotFound,
}

impl Route {
    pub const NAMED: [Route; 9] = [
        Route::Dashboard,
        Route::Cattle,
        Route::Expenses,
        Route::Income,
        Route::Reports,
        Route::Feeds,
        Route::MilkProduction,
        Route::Workers,
        Route::Login,
    ];

    /// Path of a named route. `NotFound` has no path of its own.
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Route::Dashboard => Some("/"),
            Route::Cattle => Some("/cattle"),
            Route::Expenses => Some("/expenses"),
            Route::Income => Some("/income"),
            Route::Reports => Some("/reports"),
            Route::Feeds => Some("/feeds"),
            Route::MilkProduction => Some("/milk-production"),
            Route::Workers => Some("/workers"),
            Route::Login => Some("/login"),
            Route::NotFound => None,
        }
    }
}

/// What the client should do for a requested path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RouteDecision {
    Render { route: Route },
    Redirect { to: String },
}

/// Milk totals for the production page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilkTotalsResponse {
    pub date: Option<String>,
    pub total_for_date: f64,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub total_for_month: f64,
    pub all_time_total: f64,
    pub records_for_date: Vec<MilkRecord>,
}

/// Income summed per source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeBySource {
    pub name: String,
    pub value: f64,
}

/// Revenue and expenditure for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub revenue: f64,
    pub expenditure: f64,
    pub net_revenue: f64,
}

/// Farm summary report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmReport {
    pub total_revenue: f64,
    pub total_expenditure: f64,
    pub net_revenue: f64,
    pub total_milk: f64,
    pub income_by_source: Vec<IncomeBySource>,
    pub monthly: Option<MonthlySummary>,
}

/// A standard supplement recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedFormula {
    pub id: String,
    pub title: String,
    pub description: String,
    pub notes: Option<String>,
    pub ingredients: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_uses_browser_field_names() {
        let worker = Worker {
            id: "1700000000000".to_string(),
            name: "Kamau".to_string(),
            role: "Milker".to_string(),
            hours_worked: 8.0,
            wage: 2.5,
            notes: String::new(),
            date: "2024-01-01".to_string(),
        };

        let value = serde_json::to_value(&worker).unwrap();
        assert_eq!(value["hoursWorked"], 8.0);
        assert!(value.get("hours_worked").is_none());
    }

    #[test]
    fn test_worker_null_numbers_read_as_zero() {
        let worker: Worker = serde_json::from_str(
            r#"{"id":"1","name":"Kamau","role":"Milker","hoursWorked":null,"wage":null,"notes":"","date":"2024-01-01"}"#,
        )
        .unwrap();

        assert_eq!(worker.hours_worked, 0.0);
        assert_eq!(worker.wage, 0.0);
    }

    #[test]
    fn test_milk_time_wire_names() {
        let json = serde_json::to_string(&MilkTime::MidMorning).unwrap();
        assert_eq!(json, "\"mid-morning\"");
        assert_eq!(MilkTime::parse(" Mid-Morning "), Some(MilkTime::MidMorning));
        assert_eq!(MilkTime::parse("noon"), None);
    }

    #[test]
    fn test_route_decision_is_tagged() {
        let decision = RouteDecision::Redirect { to: "/login".to_string() };
        let value = serde_json::to_value(&decision).unwrap();
        assert_eq!(value["action"], "redirect");
        assert_eq!(value["to"], "/login");
    }

    #[test]
    fn test_named_routes_have_paths() {
        for route in Route::NAMED {
            assert!(route.path().is_some(), "{:?} should have a path", route);
        }
        assert_eq!(Route::NotFound.path(), None);
    }
}
