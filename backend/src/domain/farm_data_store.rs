//! # Farm Data Store
//!
//! Single source of truth for the four in-memory entity lists: cattle,
//! expenses, income and milk records. Lists live for the process lifetime
//! and are never persisted.
//!
//! The store does no validation. Callers check required fields before
//! calling `add`; `update` and `delete` report a missing id as
//! [`MutationOutcome::NotFound`] and leave the list untouched.

use std::sync::Arc;

use shared::{
    Cow, CreateCowRequest, CreateExpenseRequest, CreateIncomeRequest, CreateMilkRecordRequest,
    Expense, Income, MilkRecord, MutationOutcome, UpdateCowRequest, UpdateExpenseRequest,
    UpdateIncomeRequest, UpdateMilkRecordRequest,
};

use super::id_generator::IdGenerator;
use super::record_list::{Record, RecordList};
use super::sample_data;

/// A record kind held by the [`FarmDataStore`]
pub trait FarmRecord: Record {
    fn list(store: &FarmDataStore) -> &RecordList<Self>;
    fn list_mut(store: &mut FarmDataStore) -> &mut RecordList<Self>;
}

pub struct FarmDataStore {
    ids: Arc<IdGenerator>,
    cows: RecordList<Cow>,
    expenses: RecordList<Expense>,
    incomes: RecordList<Income>,
    milk_records: RecordList<MilkRecord>,
}

impl FarmDataStore {
    /// Empty store
    pub fn new(ids: Arc<IdGenerator>) -> Self {
        Self {
            ids,
            cows: RecordList::new(),
            expenses: RecordList::new(),
            incomes: RecordList::new(),
            milk_records: RecordList::new(),
        }
    }

    /// Store seeded with the fixed sample records
    pub fn with_sample_data(ids: Arc<IdGenerator>) -> Self {
        Self {
            cows: RecordList::from_records(sample_data::sample_cows(), &ids),
            expenses: RecordList::from_records(sample_data::sample_expenses(), &ids),
            incomes: RecordList::from_records(sample_data::sample_incomes(), &ids),
            milk_records: RecordList::from_records(sample_data::sample_milk_records(), &ids),
            ids,
        }
    }

    pub fn list<T: FarmRecord>(&self) -> &RecordList<T> {
        T::list(self)
    }

    pub fn add<T: FarmRecord>(&mut self, fields: T::Fields) -> T {
        let ids = Arc::clone(&self.ids);
        T::list_mut(self).add(&ids, fields).clone()
    }

    pub fn update<T: FarmRecord>(&mut self, id: &str, patch: T::Patch) -> MutationOutcome {
        T::list_mut(self).update(id, patch)
    }

    pub fn delete<T: FarmRecord>(&mut self, id: &str) -> MutationOutcome {
        T::list_mut(self).delete(id)
    }

    pub fn cows(&self) -> &[Cow] {
        self.cows.records()
    }

    pub fn add_cow(&mut self, cow: CreateCowRequest) -> Cow {
        self.add::<Cow>(cow)
    }

    pub fn update_cow(&mut self, id: &str, cow: UpdateCowRequest) -> MutationOutcome {
        self.update::<Cow>(id, cow)
    }

    pub fn delete_cow(&mut self, id: &str) -> MutationOutcome {
        self.delete::<Cow>(id)
    }

    pub fn expenses(&self) -> &[Expense] {
        self.expenses.records()
    }

    pub fn add_expense(&mut self, expense: CreateExpenseRequest) -> Expense {
        self.add::<Expense>(expense)
    }

    pub fn update_expense(&mut self, id: &str, expense: UpdateExpenseRequest) -> MutationOutcome {
        self.update::<Expense>(id, expense)
    }

    pub fn delete_expense(&mut self, id: &str) -> MutationOutcome {
        self.delete::<Expense>(id)
    }

    pub fn incomes(&self) -> &[Income] {
        self.incomes.records()
    }

    pub fn add_income(&mut self, income: CreateIncomeRequest) -> Income {
        self.add::<Income>(income)
    }

    pub fn update_income(&mut self, id: &str, income: UpdateIncomeRequest) -> MutationOutcome {
        self.update::<Income>(id, income)
    }

    pub fn delete_income(&mut self, id: &str) -> MutationOutcome {
        self.delete::<Income>(id)
    }

    pub fn milk_records(&self) -> &[MilkRecord] {
        self.milk_records.records()
    }

    pub fn add_milk_record(&mut self, record: CreateMilkRecordRequest) -> MilkRecord {
        self.add::<MilkRecord>(record)
    }

    pub fn update_milk_record(
        &mut self,
        id: &str,
        record: UpdateMilkRecordRequest,
    ) -> MutationOutcome {
        self.update::<MilkRecord>(id, record)
    }

    pub fn delete_milk_record(&mut self, id: &str) -> MutationOutcome {
        self.delete::<MilkRecord>(id)
    }
}

impl FarmRecord for Cow {
    fn list(store: &FarmDataStore) -> &RecordList<Self> {
        &store.cows
    }

    fn list_mut(store: &mut FarmDataStore) -> &mut RecordList<Self> {
        &mut store.cows
    }
}

impl FarmRecord for Expense {
    fn list(store: &FarmDataStore) -> &RecordList<Self> {
        &store.expenses
    }

    fn list_mut(store: &mut FarmDataStore) -> &mut RecordList<Self> {
        &mut store.expenses
    }
}

impl FarmRecord for Income {
    fn list(store: &FarmDataStore) -> &RecordList<Self> {
        &store.incomes
    }

    fn list_mut(store: &mut FarmDataStore) -> &mut RecordList<Self> {
        &mut store.incomes
    }
}

impl FarmRecord for MilkRecord {
    fn list(store: &FarmDataStore) -> &RecordList<Self> {
        &store.milk_records
    }

    fn list_mut(store: &mut FarmDataStore) -> &mut RecordList<Self> {
        &mut store.milk_records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::MilkTime;

    fn empty_store() -> FarmDataStore {
        FarmDataStore::new(Arc::new(IdGenerator::new()))
    }

    fn bella() -> CreateCowRequest {
        CreateCowRequest {
            name: "Bella".to_string(),
            breed: "Jersey".to_string(),
            weight: 300.0,
            tag_number: "A1".to_string(),
            dob: "2022-01-01".to_string(),
        }
    }

    #[test]
    fn test_add_cow_to_empty_list() {
        let mut store = empty_store();

        let cow = store.add_cow(bella());

        assert_eq!(store.cows().len(), 1);
        assert_eq!(store.cows()[0], cow);
        assert!(!cow.id.is_empty());
        assert_eq!(cow.name, "Bella");
        assert_eq!(cow.breed, "Jersey");
        assert_eq!(cow.weight, 300.0);
        assert_eq!(cow.tag_number, "A1");
        assert_eq!(cow.dob, "2022-01-01");
    }

    #[test]
    fn test_rapid_adds_get_distinct_ids() {
        let mut store = empty_store();

        let first = store.add_cow(bella());
        let second = store.add_cow(bella());

        assert_ne!(first.id, second.id);
        assert_eq!(store.cows().len(), 2);
    }

    #[test]
    fn test_lists_are_independent() {
        let mut store = empty_store();

        store.add_expense(CreateExpenseRequest {
            name: "Vet visit".to_string(),
            amount: 40.0,
            date: "2024-01-02".to_string(),
        });

        assert_eq!(store.expenses().len(), 1);
        assert!(store.cows().is_empty());
        assert!(store.incomes().is_empty());
        assert!(store.milk_records().is_empty());
        assert_eq!(store.list::<Expense>().revision(), 1);
        assert_eq!(store.list::<Cow>().revision(), 0);
    }

    #[test]
    fn test_update_income_in_place() {
        let mut store = FarmDataStore::with_sample_data(Arc::new(IdGenerator::new()));
        let before: Vec<String> = store.incomes().iter().map(|i| i.id.clone()).collect();

        let outcome = store.update_income(
            "2",
            UpdateIncomeRequest {
                amount: Some(2500.0),
                ..Default::default()
            },
        );

        assert_eq!(outcome, MutationOutcome::Updated);
        let after: Vec<String> = store.incomes().iter().map(|i| i.id.clone()).collect();
        assert_eq!(before, after);
        assert_eq!(store.incomes()[1].amount, 2500.0);
        assert_eq!(store.incomes()[1].source, "Milk sale");
    }

    #[test]
    fn test_missing_ids_are_reported() {
        let mut store = FarmDataStore::with_sample_data(Arc::new(IdGenerator::new()));
        let before = store.milk_records().to_vec();

        assert_eq!(
            store.update_milk_record("99", UpdateMilkRecordRequest::default()),
            MutationOutcome::NotFound
        );
        assert_eq!(store.delete_milk_record("99"), MutationOutcome::NotFound);
        assert_eq!(store.milk_records(), before.as_slice());
    }

    #[test]
    fn test_delete_expense_keeps_order() {
        let mut store = FarmDataStore::with_sample_data(Arc::new(IdGenerator::new()));

        assert_eq!(store.delete_expense("2"), MutationOutcome::Deleted);

        let names: Vec<&str> = store.expenses().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Feeds purchase", "Disease treatment", "Equipment upgrade"]
        );
    }

    #[test]
    fn test_sample_data_is_seeded() {
        let store = FarmDataStore::with_sample_data(Arc::new(IdGenerator::new()));

        assert_eq!(store.cows().len(), 3);
        assert_eq!(store.expenses().len(), 4);
        assert_eq!(store.incomes().len(), 4);
        assert_eq!(store.milk_records().len(), 4);
        assert_eq!(store.cows()[0].name, "Nyakairo");
        assert_eq!(store.milk_records()[2].time, MilkTime::MidMorning);
    }

    #[test]
    fn test_added_milk_record_goes_last() {
        let mut store = FarmDataStore::with_sample_data(Arc::new(IdGenerator::new()));

        let record = store.add_milk_record(CreateMilkRecordRequest {
            amount: 9.5,
            time: MilkTime::Evening,
            date: "2023-12-20".to_string(),
            comments: String::new(),
        });

        assert_eq!(store.milk_records().len(), 5);
        assert_eq!(store.milk_records().last(), Some(&record));
    }
}
