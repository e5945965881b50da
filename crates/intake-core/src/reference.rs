//! Static reference data.
//!
//! The standard instrument catalog and the address tables that back the
//! static lookup implementations. Loaded once per process; never mutated.

use std::sync::LazyLock;

use crate::models::address::HouseNumberLookup;
use crate::models::assessment::{AgeRange, AssessmentCategory, AssessmentDefinition, ScoringType};

/// The five instruments every installation ships with.
pub fn standard_assessments() -> &'static [AssessmentDefinition] {
    static CATALOG: LazyLock<Vec<AssessmentDefinition>> = LazyLock::new(|| {
        let entries = [
            (
                1,
                "Canadian Occupational Performance Measure",
                "COPM",
                AssessmentCategory::Adl,
                "Client-centered outcome measure for occupational performance",
                (1.0, 10.0),
                (8, 99),
                30,
                "Client identifies occupational performance problems and rates performance and satisfaction",
            ),
            (
                2,
                "Functional Independence Measure",
                "FIM",
                AssessmentCategory::Adl,
                "Measures functional independence in activities of daily living",
                (18.0, 126.0),
                (18, 99),
                45,
                "Rate each item from 1 (total assistance) to 7 (complete independence)",
            ),
            (
                3,
                "Montreal Cognitive Assessment",
                "MoCA",
                AssessmentCategory::Cognitive,
                "Cognitive screening tool for mild cognitive impairment",
                (0.0, 30.0),
                (18, 99),
                15,
                "Administer all items and sum total score",
            ),
            (
                4,
                "Nine-Hole Peg Test",
                "NHPT",
                AssessmentCategory::Motor,
                "Measures finger dexterity and hand function",
                (10.0, 300.0),
                (4, 99),
                10,
                "Time patient placing and removing pegs from holes",
            ),
            (
                5,
                "Sensory Profile",
                "SP",
                AssessmentCategory::Sensory,
                "Measures sensory processing patterns",
                (40.0, 200.0),
                (3, 14),
                20,
                "Caregiver completes questionnaire about sensory behaviors",
            ),
        ];

        entries
            .into_iter()
            .map(
                |(id, name, code, category, description, (min, max), (age_min, age_max), minutes, instructions)| {
                    AssessmentDefinition {
                        id,
                        name: name.to_string(),
                        code: code.to_string(),
                        category,
                        description: description.to_string(),
                        max_score: max,
                        min_score: min,
                        scoring_type: ScoringType::Numeric,
                        is_standardized: true,
                        age_range: AgeRange {
                            min: age_min,
                            max: age_max,
                        },
                        administration_time: minutes,
                        instructions: instructions.to_string(),
                    }
                },
            )
            .collect()
    });
    &CATALOG
}

/// Known postal codes and the street data behind them.
pub fn postal_codes() -> &'static [HouseNumberLookup] {
    static POSTAL_CODES: LazyLock<Vec<HouseNumberLookup>> = LazyLock::new(|| {
        let entries: [(&str, &str, &str, &str, &[u32]); 3] = [
            ("12345", "Main Street", "Springfield", "IL", &[1, 2, 3, 4, 5, 10, 15, 20]),
            ("67890", "Oak Avenue", "Madison", "WI", &[100, 102, 104, 106, 108, 110]),
            ("54321", "Pine Road", "Franklin", "TN", &[25, 27, 29, 31, 33, 35]),
        ];

        entries
            .into_iter()
            .map(|(postal_code, street, city, province, numbers)| HouseNumberLookup {
                street: street.to_string(),
                city: city.to_string(),
                municipality: city.to_string(),
                postal_code: postal_code.to_string(),
                province: province.to_string(),
                house_numbers: numbers.to_vec(),
            })
            .collect()
    });
    &POSTAL_CODES
}

pub fn postal_code(code: &str) -> Option<&'static HouseNumberLookup> {
    postal_codes().iter().find(|lookup| lookup.postal_code == code)
}

/// House-number additions, keyed by house number alone.
pub fn house_number_additions(house_number: &str) -> &'static [&'static str] {
    match house_number {
        "1" => &["A", "B"],
        "2" => &["A"],
        "100" => &["A", "B", "C"],
        "102" => &["A", "B"],
        "25" => &["A"],
        "27" => &["A", "B"],
        _ => &[],
    }
}
