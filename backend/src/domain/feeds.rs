//! The supplement formulas shown on the feeds page.

use shared::FeedFormula;

fn formula(
    id: &str,
    title: &str,
    description: &str,
    notes: Option<&str>,
    ingredients: &[&str],
) -> FeedFormula {
    FeedFormula {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        notes: notes.map(str::to_string),
        ingredients: ingredients.iter().map(|item| item.to_string()).collect(),
    }
}

pub fn feed_formulas() -> Vec<FeedFormula> {
    vec![
        formula(
            "high-yielder",
            "High Yielder Dairy Supplement",
            "Making 100kg of high-yielding dairy supplement",
            None,
            &[
                "Maize germ: 50kg",
                "Wheat pollard: 16kg",
                "Molasses: 2L",
                "Cotton seedcake: 14kg",
                "Lucern hay: 12kg",
                "Fishmeal: 4kg",
            ],
        ),
        formula(
            "advanced-dairy-meal",
            "Advanced Dairy Meal",
            "Making advanced dairy meal 70kg",
            Some("Protein content should be 16% and should not exceed 30% of dry matter"),
            &[
                "Maize germ: 10kg",
                "Wheat pollard: 23kg",
                "Wheat bran: 18kg",
                "Cotton seed cake: 2kg",
                "Livestock lime: 3kg",
                "Salt: 300g",
                "Sunflower seed cake: 12kg",
                "Dairy premix: 100g",
                "DCP: 100g",
                "Yeast: 2kg",
                "Molasses: 3L",
                "Adolac by-pass fat: 1kg",
            ],
        ),
        formula(
            "ordinary-dairy",
            "Ordinary Dairy Cattle Supplement",
            "Making 100kg of ordinary dairy cattle supplement",
            None,
            &[
                "Maize germ: 57kg",
                "Wheat pollard: 18kg",
                "Lucern hay: 17kg",
                "Fish/Soya meal",
                "DCP: 2kg",
            ],
        ),
    ]
}
