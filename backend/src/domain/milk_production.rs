use anyhow::Result;
use serde::Deserialize;
use shared::{MilkRecord, MilkTotalsResponse};
use tracing::info;

use super::farm_data_service::FarmDataService;
use super::models::is_in_month;

/// Which day and month to total
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MilkTotalsQuery {
    pub date: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u32>,
}

pub fn records_for_date<'a>(records: &'a [MilkRecord], date: &str) -> Vec<&'a MilkRecord> {
    records.iter().filter(|record| record.date == date).collect()
}

/// Litres recorded on exactly `date`
pub fn total_for_date(records: &[MilkRecord], date: &str) -> f64 {
    records_for_date(records, date)
        .into_iter()
        .map(|record| record.amount)
        .sum()
}

pub fn total_for_month(records: &[MilkRecord], year: i32, month: u32) -> f64 {
    records
        .iter()
        .filter(|record| is_in_month(&record.date, year, month))
        .map(|record| record.amount)
        .sum()
}

pub fn all_time_total(records: &[MilkRecord]) -> f64 {
    records.iter().map(|record| record.amount).sum()
}

/// Totals shown on the milk production page
#[derive(Clone)]
pub struct MilkProductionService {
    farm_data: FarmDataService,
}

impl MilkProductionService {
    pub fn new(farm_data: FarmDataService) -> Self {
        Self { farm_data }
    }

    pub fn totals(&self, query: MilkTotalsQuery) -> Result<MilkTotalsResponse> {
        info!("Calculating milk totals for {:?}", query);

        self.farm_data.read(|store| {
            let records = store.milk_records();

            let (total_for_day, records_for_day) = match &query.date {
                Some(date) => (
                    total_for_date(records, date),
                    records_for_date(records, date).into_iter().cloned().collect(),
                ),
                None => (0.0, Vec::new()),
            };

            let month_total = match (query.year, query.month) {
                (Some(year), Some(month)) => total_for_month(records, year, month),
                _ => 0.0,
            };

            MilkTotalsResponse {
                date: query.date.clone(),
                total_for_date: total_for_day,
                year: query.year,
                month: query.month,
                total_for_month: month_total,
                all_time_total: all_time_total(records),
                records_for_date: records_for_day,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::farm_data_store::FarmDataStore;
    use crate::domain::id_generator::IdGenerator;
    use shared::{CreateMilkRecordRequest, MilkTime};
    use std::sync::Arc;

    fn record(amount: f64, date: &str) -> MilkRecord {
        MilkRecord {
            id: format!("{}-{}", date, amount),
            amount,
            time: MilkTime::Morning,
            date: date.to_string(),
            comments: String::new(),
        }
    }

    #[test]
    fn test_total_for_date() {
        let records = vec![
            record(10.0, "2024-01-01"),
            record(5.0, "2024-01-01"),
            record(7.0, "2024-01-02"),
        ];

        assert_eq!(total_for_date(&records, "2024-01-01"), 15.0);
        assert_eq!(total_for_date(&records, "2024-01-02"), 7.0);
        assert_eq!(total_for_date(&records, "2024-01-03"), 0.0);
        assert_eq!(all_time_total(&records), 22.0);
    }

    #[test]
    fn test_total_for_month() {
        let records = vec![
            record(10.0, "2024-01-01"),
            record(5.0, "2024-01-31"),
            record(7.0, "2024-02-01"),
            record(3.0, "2023-01-15"),
        ];

        assert_eq!(total_for_month(&records, 2024, 1), 15.0);
        assert_eq!(total_for_month(&records, 2024, 2), 7.0);
        assert_eq!(total_for_month(&records, 2023, 1), 3.0);
    }

    #[test]
    fn test_service_totals_over_store() {
        let farm_data = FarmDataService::new(FarmDataStore::with_sample_data(Arc::new(
            IdGenerator::new(),
        )));
        farm_data
            .add::<MilkRecord>(CreateMilkRecordRequest {
                amount: 10.0,
                time: MilkTime::Morning,
                date: "2023-12-20".to_string(),
                comments: String::new(),
            })
            .unwrap();

        let service = MilkProductionService::new(farm_data);
        let totals = service
            .totals(MilkTotalsQuery {
                date: Some("2023-12-19".to_string()),
                year: Some(2023),
                month: Some(12),
            })
            .unwrap();

        assert_eq!(totals.total_for_date, 65.0);
        assert_eq!(totals.records_for_date.len(), 4);
        assert_eq!(totals.total_for_month, 75.0);
        assert_eq!(totals.all_time_total, 75.0);
    }
}
