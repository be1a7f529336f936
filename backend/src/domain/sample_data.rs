//! Fixed records the farm data store is seeded with at start-up.

use shared::{Cow, Expense, Income, MilkRecord, MilkTime};

pub fn sample_cows() -> Vec<Cow> {
    [
        ("1", "Nyakairo", "Ayrshire", 358.0, "123v", "2023-12-19"),
        ("2", "Nguno", "Holstein Fresian", 345.0, "zx444", "2018-10-19"),
        ("3", "Reedi", "Holstein Fresian", 451.0, "00912", "2020-05-10"),
    ]
    .into_iter()
    .map(|(id, name, breed, weight, tag_number, dob)| Cow {
        id: id.to_string(),
        name: name.to_string(),
        breed: breed.to_string(),
        weight,
        tag_number: tag_number.to_string(),
        dob: dob.to_string(),
    })
    .collect()
}

pub fn sample_expenses() -> Vec<Expense> {
    [
        ("1", "Feeds purchase", 1250.0, "2023-12-18"),
        ("2", "Workers payment", 1256.0, "2023-12-19"),
        ("3", "Disease treatment", 1590.0, "2023-12-16"),
        ("4", "Equipment upgrade", 1500.0, "2023-12-15"),
    ]
    .into_iter()
    .map(|(id, name, amount, date)| Expense {
        id: id.to_string(),
        name: name.to_string(),
        amount,
        date: date.to_string(),
    })
    .collect()
}

pub fn sample_incomes() -> Vec<Income> {
    [
        ("1", "Cow sale", 1580.0, "2023-12-19"),
        ("2", "Milk sale", 2200.0, "2023-12-18"),
        ("3", "Fodder sale", 1005.0, "2023-12-17"),
        ("4", "Cow sale", 1500.0, "2023-12-15"),
    ]
    .into_iter()
    .map(|(id, source, amount, date)| Income {
        id: id.to_string(),
        source: source.to_string(),
        amount,
        date: date.to_string(),
    })
    .collect()
}

pub fn sample_milk_records() -> Vec<MilkRecord> {
    [
        ("1", 12.0, MilkTime::Night, "Fair"),
        ("2", 18.0, MilkTime::Evening, "Good"),
        ("3", 14.0, MilkTime::MidMorning, "Fair"),
        ("4", 21.0, MilkTime::Morning, "Good"),
    ]
    .into_iter()
    .map(|(id, amount, time, comments)| MilkRecord {
        id: id.to_string(),
        amount,
        time,
        date: "2023-12-19".to_string(),
        comments: comments.to_string(),
    })
    .collect()
}
