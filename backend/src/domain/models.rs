//! [`Record`] implementations for the farm entities.
//!
//! The entity types themselves are the `shared` DTOs; this module only
//! teaches the record list how to build and patch them.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use shared::{
    Cow, CreateCowRequest, CreateExpenseRequest, CreateIncomeRequest, CreateMilkRecordRequest,
    CreateWorkerRequest, Expense, Income, MilkRecord, UpdateCowRequest, UpdateExpenseRequest,
    UpdateIncomeRequest, UpdateMilkRecordRequest, UpdateWorkerRequest, Worker,
};

use super::record_list::Record;

/// Today's UTC date in the `YYYY-MM-DD` form every entity uses
pub fn today() -> String {
    utc_date(Utc::now())
}

/// The UTC calendar date of `instant`, whatever zone it was taken in
pub fn utc_date<Tz: TimeZone>(instant: DateTime<Tz>) -> String {
    instant.with_timezone(&Utc).format("%Y-%m-%d").to_string()
}

/// True when `date` (YYYY-MM-DD) falls in the given month.
/// Dates that do not parse are in no month.
pub fn is_in_month(date: &str, year: i32, month: u32) -> bool {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map(|parsed| parsed.year() == year && parsed.month() == month)
        .unwrap_or(false)
}

fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

impl Record for Cow {
    type Fields = CreateCowRequest;
    type Patch = UpdateCowRequest;

    const KIND: &'static str = "cow";

    fn from_fields(id: String, fields: CreateCowRequest) -> Self {
        Cow {
            id,
            name: fields.name,
            breed: fields.breed,
            weight: fields.weight,
            tag_number: fields.tag_number,
            dob: fields.dob,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply_patch(&mut self, patch: UpdateCowRequest) {
        merge(&mut self.name, patch.name);
        merge(&mut self.breed, patch.breed);
        merge(&mut self.weight, patch.weight);
        merge(&mut self.tag_number, patch.tag_number);
        merge(&mut self.dob, patch.dob);
    }
}

impl Record for Expense {
    type Fields = CreateExpenseRequest;
    type Patch = UpdateExpenseRequest;

    const KIND: &'static str = "expense";

    fn from_fields(id: String, fields: CreateExpenseRequest) -> Self {
        Expense {
            id,
            name: fields.name,
            amount: fields.amount,
            date: fields.date,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply_patch(&mut self, patch: UpdateExpenseRequest) {
        merge(&mut self.name, patch.name);
        merge(&mut self.amount, patch.amount);
        merge(&mut self.date, patch.date);
    }
}

impl Record for Income {
    type Fields = CreateIncomeRequest;
    type Patch = UpdateIncomeRequest;

    const KIND: &'static str = "income";

    fn from_fields(id: String, fields: CreateIncomeRequest) -> Self {
        Income {
            id,
            source: fields.source,
            amount: fields.amount,
            date: fields.date,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply_patch(&mut self, patch: UpdateIncomeRequest) {
        merge(&mut self.source, patch.source);
        merge(&mut self.amount, patch.amount);
        merge(&mut self.date, patch.date);
    }
}

impl Record for MilkRecord {
    type Fields = CreateMilkRecordRequest;
    type Patch = UpdateMilkRecordRequest;

    const KIND: &'static str = "milk record";

    fn from_fields(id: String, fields: CreateMilkRecordRequest) -> Self {
        MilkRecord {
            id,
            amount: fields.amount,
            time: fields.time,
            date: fields.date,
            comments: fields.comments,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply_patch(&mut self, patch: UpdateMilkRecordRequest) {
        merge(&mut self.amount, patch.amount);
        merge(&mut self.time, patch.time);
        merge(&mut self.date, patch.date);
        merge(&mut self.comments, patch.comments);
    }
}

impl Record for Worker {
    type Fields = CreateWorkerRequest;
    type Patch = UpdateWorkerRequest;

    const KIND: &'static str = "worker";

    fn from_fields(id: String, fields: CreateWorkerRequest) -> Self {
        Worker {
            id,
            name: fields.name,
            role: fields.role,
            hours_worked: fields.hours_worked,
            wage: fields.wage,
            notes: fields.notes,
            date: fields.date.unwrap_or_else(today),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn apply_patch(&mut self, patch: UpdateWorkerRequest) {
        merge(&mut self.name, patch.name);
        merge(&mut self.role, patch.role);
        merge(&mut self.hours_worked, patch.hours_worked);
        merge(&mut self.wage, patch.wage);
        merge(&mut self.notes, patch.notes);
        merge(&mut self.date, patch.date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use shared::MilkTime;

    #[test]
    fn test_cow_patch_keeps_unsupplied_fields() {
        let mut cow = Cow::from_fields(
            "1".to_string(),
            CreateCowRequest {
                name: "Bella".to_string(),
                breed: "Jersey".to_string(),
                weight: 300.0,
                tag_number: "A1".to_string(),
                dob: "2022-01-01".to_string(),
            },
        );

        cow.apply_patch(UpdateCowRequest {
            weight: Some(320.0),
            ..Default::default()
        });

        assert_eq!(cow.id, "1");
        assert_eq!(cow.name, "Bella");
        assert_eq!(cow.weight, 320.0);
        assert_eq!(cow.tag_number, "A1");
    }

    #[test]
    fn test_worker_date_defaults_to_today() {
        let worker = Worker::from_fields(
            "1".to_string(),
            CreateWorkerRequest {
                name: "Kamau".to_string(),
                role: "Milker".to_string(),
                hours_worked: 8.0,
                wage: 2.5,
                notes: String::new(),
                date: None,
            },
        );

        assert_eq!(worker.date, today());
        assert_eq!(worker.date.len(), 10);
    }

    #[test]
    fn test_dates_are_taken_in_utc() {
        let nairobi = FixedOffset::east_opt(3 * 3600).unwrap();
        let just_after_midnight = nairobi.with_ymd_and_hms(2024, 1, 1, 1, 30, 0).unwrap();
        assert_eq!(utc_date(just_after_midnight), "2023-12-31");

        let midday = nairobi.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(utc_date(midday), "2024-01-01");
    }

    #[test]
    fn test_is_in_month() {
        assert!(is_in_month("2023-12-19", 2023, 12));
        assert!(!is_in_month("2023-12-19", 2023, 11));
        assert!(!is_in_month("2024-12-19", 2023, 12));
        assert!(!is_in_month("19/12/2023", 2023, 12));
    }

    #[test]
    fn test_milk_patch_changes_slot() {
        let mut record = MilkRecord::from_fields(
            "1".to_string(),
            CreateMilkRecordRequest {
                amount: 12.0,
                time: MilkTime::Night,
                date: "2023-12-19".to_string(),
                comments: "Fair".to_string(),
            },
        );

        record.apply_patch(UpdateMilkRecordRequest {
            time: Some(MilkTime::Morning),
            ..Default::default()
        });

        assert_eq!(record.time, MilkTime::Morning);
        assert_eq!(record.comments, "Fair");
    }
}
