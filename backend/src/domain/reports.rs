//! Financial and production summaries for the reports page.

use anyhow::Result;
use shared::{Expense, FarmReport, Income, IncomeBySource, MilkRecord, MonthlySummary};
use tracing::info;

use super::farm_data_service::FarmDataService;
use super::milk_production::all_time_total;
use super::models::is_in_month;

pub fn total_revenue(incomes: &[Income]) -> f64 {
    incomes.iter().map(|income| income.amount).sum()
}

pub fn total_expenditure(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|expense| expense.amount).sum()
}

/// Income summed per source, sources in the order they first appear
pub fn income_by_source(incomes: &[Income]) -> Vec<IncomeBySource> {
    let mut grouped: Vec<IncomeBySource> = Vec::new();

    for income in incomes {
        match grouped.iter_mut().find(|entry| entry.name == income.source) {
            Some(entry) => entry.value += income.amount,
            None => grouped.push(IncomeBySource {
                name: income.source.clone(),
                value: income.amount,
            }),
        }
    }

    grouped
}

pub fn monthly_summary(
    incomes: &[Income],
    expenses: &[Expense],
    year: i32,
    month: u32,
) -> MonthlySummary {
    let revenue: f64 = incomes
        .iter()
        .filter(|income| is_in_month(&income.date, year, month))
        .map(|income| income.amount)
        .sum();
    let expenditure: f64 = expenses
        .iter()
        .filter(|expense| is_in_month(&expense.date, year, month))
        .map(|expense| expense.amount)
        .sum();

    MonthlySummary {
        year,
        month,
        revenue,
        expenditure,
        net_revenue: revenue - expenditure,
    }
}

pub fn build_report(
    incomes: &[Income],
    expenses: &[Expense],
    milk_records: &[MilkRecord],
    month: Option<(i32, u32)>,
) -> FarmReport {
    let total_revenue = total_revenue(incomes);
    let total_expenditure = total_expenditure(expenses);

    FarmReport {
        total_revenue,
        total_expenditure,
        net_revenue: total_revenue - total_expenditure,
        total_milk: all_time_total(milk_records),
        income_by_source: income_by_source(incomes),
        monthly: month.map(|(year, month)| monthly_summary(incomes, expenses, year, month)),
    }
}

#[derive(Clone)]
pub struct ReportService {
    farm_data: FarmDataService,
}

impl ReportService {
    pub fn new(farm_data: FarmDataService) -> Self {
        Self { farm_data }
    }

    pub fn report(&self, month: Option<(i32, u32)>) -> Result<FarmReport> {
        info!("Building farm report (month: {:?})", month);

        self.farm_data.read(|store| {
            build_report(
                store.incomes(),
                store.expenses(),
                store.milk_records(),
                month,
            )
        })
    }
}
