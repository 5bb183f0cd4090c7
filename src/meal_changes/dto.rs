use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Canonical slot order, used everywhere a list of meals is produced.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        };
        f.write_str(label)
    }
}

/// One swap record per meal slot per day. `food_id` and `changed_at` are only
/// present once the slot has been swapped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealSlotChange {
    pub changed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub changed_at: Option<OffsetDateTime>,
}

/// All four slots for one calendar day. The day itself lives in the storage
/// key, not in the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayChanges {
    #[serde(default)]
    pub breakfast: MealSlotChange,
    #[serde(default)]
    pub lunch: MealSlotChange,
    #[serde(default)]
    pub dinner: MealSlotChange,
    #[serde(default)]
    pub snack: MealSlotChange,
}

impl DayChanges {
    pub fn slot(&self, meal: MealType) -> &MealSlotChange {
        match meal {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snack => &self.snack,
        }
    }

    pub fn slot_mut(&mut self, meal: MealType) -> &mut MealSlotChange {
        match meal {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
            MealType::Snack => &mut self.snack,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecordChangeRequest {
    pub food_id: String,
}

#[derive(Debug, Serialize)]
pub struct AllowanceResponse {
    pub can_change: bool,
}

#[derive(Debug, Serialize)]
pub struct NewDayResponse {
    pub new_day: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn meal_type_serializes_snake_case_and_displays_capitalized() {
        assert_eq!(serde_json::to_value(MealType::Snack).unwrap(), json!("snack"));
        assert_eq!(
            serde_json::from_value::<MealType>(json!("breakfast")).unwrap(),
            MealType::Breakfast
        );
        assert_eq!(MealType::Lunch.to_string(), "Lunch");
    }

    #[test]
    fn fresh_day_serializes_with_all_slots_unchanged() {
        let value = serde_json::to_value(DayChanges::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "breakfast": {"changed": false},
                "lunch": {"changed": false},
                "dinner": {"changed": false},
                "snack": {"changed": false},
            })
        );
    }

    #[test]
    fn partial_records_deserialize_with_defaults() {
        let day: DayChanges = serde_json::from_value(json!({
            "lunch": {"changed": true, "food_id": "F9"}
        }))
        .unwrap();
        assert!(day.lunch.changed);
        assert_eq!(day.lunch.food_id.as_deref(), Some("F9"));
        assert!(!day.breakfast.changed);
        assert!(day.breakfast.changed_at.is_none());
    }
}
