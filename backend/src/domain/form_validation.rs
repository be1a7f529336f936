//! # Form Validation
//!
//! The add and edit dialogs submit every field as text. This module turns
//! those forms into typed create requests and patches.
//!
//! Rules, matching what the dialogs enforce:
//! - required fields must be non-empty after trimming;
//! - numeric fields must parse as finite numbers;
//! - nothing else (no ranges, no date format checks).
//!
//! All missing fields are reported together. Numbers are only checked once
//! every required field is present.

use shared::{
    Cow, CowForm, CreateCowRequest, CreateExpenseRequest, CreateIncomeRequest,
    CreateMilkRecordRequest, CreateWorkerRequest, Expense, ExpenseForm, Income, IncomeForm,
    MilkRecord, MilkRecordForm, MilkTime, UpdateCowRequest, UpdateExpenseRequest,
    UpdateIncomeRequest, UpdateMilkRecordRequest, UpdateWorkerRequest, Worker, WorkerForm,
};

use super::record_list::Record;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormValidationError {
    #[error("Please fill all required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("Unknown milking time '{0}'")]
    InvalidMilkTime(String),
    #[error("Please enter both username and password")]
    MissingCredentials,
}

/// A text form that creates or edits one kind of record
pub trait RecordForm {
    type Target: Record;

    /// Fields for a new record (add dialog)
    fn to_fields(&self) -> Result<<Self::Target as Record>::Fields, FormValidationError>;

    /// Patch for an existing record (edit dialog)
    fn to_patch(&self) -> Result<<Self::Target as Record>::Patch, FormValidationError>;
}

#[derive(Default)]
struct Presence {
    missing: Vec<&'static str>,
}

impl Presence {
    fn required(&mut self, field: &'static str, value: &str) -> String {
        let value = value.trim();
        if value.is_empty() {
            self.missing.push(field);
        }
        value.to_string()
    }

    fn finish(self) -> Result<(), FormValidationError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(FormValidationError::MissingFields(self.missing))
        }
    }
}

fn number(field: &'static str, value: &str) -> Result<f64, FormValidationError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| FormValidationError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

pub fn validate_cow(form: &CowForm) -> Result<CreateCowRequest, FormValidationError> {
    let mut presence = Presence::default();
    let name = presence.required("name", &form.name);
    let breed = presence.required("breed", &form.breed);
    let weight = presence.required("weight", &form.weight);
    let tag_number = presence.required("tagNumber", &form.tag_number);
    let dob = presence.required("dob", &form.dob);
    presence.finish()?;

    Ok(CreateCowRequest {
        name,
        breed,
        weight: number("weight", &weight)?,
        tag_number,
        dob,
    })
}

pub fn validate_expense(form: &ExpenseForm) -> Result<CreateExpenseRequest, FormValidationError> {
    let mut presence = Presence::default();
    let name = presence.required("name", &form.name);
    let amount = presence.required("amount", &form.amount);
    let date = presence.required("date", &form.date);
    presence.finish()?;

    Ok(CreateExpenseRequest {
        name,
        amount: number("amount", &amount)?,
        date,
    })
}

pub fn validate_income(form: &IncomeForm) -> Result<CreateIncomeRequest, FormValidationError> {
    let mut presence = Presence::default();
    let source = presence.required("source", &form.source);
    let amount = presence.required("amount", &form.amount);
    let date = presence.required("date", &form.date);
    presence.finish()?;

    Ok(CreateIncomeRequest {
        source,
        amount: number("amount", &amount)?,
        date,
    })
}

pub fn validate_milk_record(
    form: &MilkRecordForm,
) -> Result<CreateMilkRecordRequest, FormValidationError> {
    let mut presence = Presence::default();
    let amount = presence.required("amount", &form.amount);
    let time = presence.required("time", &form.time);
    let date = presence.required("date", &form.date);
    presence.finish()?;

    Ok(CreateMilkRecordRequest {
        amount: number("amount", &amount)?,
        time: MilkTime::parse(&time).ok_or(FormValidationError::InvalidMilkTime(time))?,
        date,
        comments: form.comments.trim().to_string(),
    })
}

pub fn validate_worker(form: &WorkerForm) -> Result<CreateWorkerRequest, FormValidationError> {
    let mut presence = Presence::default();
    let name = presence.required("name", &form.name);
    let role = presence.required("role", &form.role);
    let hours_worked = presence.required("hoursWorked", &form.hours_worked);
    let wage = presence.required("wage", &form.wage);
    presence.finish()?;

    Ok(CreateWorkerRequest {
        name,
        role,
        hours_worked: number("hoursWorked", &hours_worked)?,
        wage: number("wage", &wage)?,
        notes: form.notes.trim().to_string(),
        date: None,
    })
}

impl RecordForm for CowForm {
    type Target = Cow;

    fn to_fields(&self) -> Result<CreateCowRequest, FormValidationError> {
        validate_cow(self)
    }

    fn to_patch(&self) -> Result<UpdateCowRequest, FormValidationError> {
        let cow = validate_cow(self)?;
        Ok(UpdateCowRequest {
            name: Some(cow.name),
            breed: Some(cow.breed),
            weight: Some(cow.weight),
            tag_number: Some(cow.tag_number),
            dob: Some(cow.dob),
        })
    }
}

impl RecordForm for ExpenseForm {
    type Target = Expense;

    fn to_fields(&self) -> Result<CreateExpenseRequest, FormValidationError> {
        validate_expense(self)
    }

    fn to_patch(&self) -> Result<UpdateExpenseRequest, FormValidationError> {
        let expense = validate_expense(self)?;
        Ok(UpdateExpenseRequest {
            name: Some(expense.name),
            amount: Some(expense.amount),
            date: Some(expense.date),
        })
    }
}

impl RecordForm for IncomeForm {
    type Target = Income;

    fn to_fields(&self) -> Result<CreateIncomeRequest, FormValidationError> {
        validate_income(self)
    }

    fn to_patch(&self) -> Result<UpdateIncomeRequest, FormValidationError> {
        let income = validate_income(self)?;
        Ok(UpdateIncomeRequest {
            source: Some(income.source),
            amount: Some(income.amount),
            date: Some(income.date),
        })
    }
}

impl RecordForm for MilkRecordForm {
    type Target = MilkRecord;

    fn to_fields(&self) -> Result<CreateMilkRecordRequest, FormValidationError> {
        validate_milk_record(self)
    }

    fn to_patch(&self) -> Result<UpdateMilkRecordRequest, FormValidationError> {
        let record = validate_milk_record(self)?;
        Ok(UpdateMilkRecordRequest {
            amount: Some(record.amount),
            time: Some(record.time),
            date: Some(record.date),
            comments: Some(record.comments),
        })
    }
}

impl RecordForm for WorkerForm {
    type Target = Worker;

    fn to_fields(&self) -> Result<CreateWorkerRequest, FormValidationError> {
        validate_worker(self)
    }

    /// Editing a worker keeps the date the record was created on
    fn to_patch(&self) -> Result<UpdateWorkerRequest, FormValidationError> {
        let worker = validate_worker(self)?;
        Ok(UpdateWorkerRequest {
            name: Some(worker.name),
            role: Some(worker.role),
            hours_worked: Some(worker.hours_worked),
            wage: Some(worker.wage),
            notes: Some(worker.notes),
            date: None,
        })
    }
}
