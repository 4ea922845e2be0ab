use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};

/// Who owes whom.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DebtDirection {
    #[serde(rename = "OWES_ME")]
    TheyOweMe,
    #[serde(rename = "I_OWE")]
    IOweThem,
}

impl DebtDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebtDirection::TheyOweMe => "OWES_ME",
            DebtDirection::IOweThem => "I_OWE",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "owes_me" | "they_owe_me" | "owed" => Some(DebtDirection::TheyOweMe),
            "i_owe" | "i_owe_them" | "owe" => Some(DebtDirection::IOweThem),
            _ => None,
        }
    }
}

impl fmt::Display for DebtDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum DebtStatus {
    #[default]
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "PAID")]
    Settled,
}

impl DebtStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebtStatus::Pending => "PENDING",
            DebtStatus::Settled => "PAID",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DebtStatus::Pending => DebtStatus::Settled,
            DebtStatus::Settled => DebtStatus::Pending,
        }
    }
}

impl fmt::Display for DebtStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked obligation between the user and a named counterparty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: Uuid,
    pub person: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub direction: DebtDirection,
    #[serde(default)]
    pub status: DebtStatus,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_date_as_none"
    )]
    pub due_date: Option<NaiveDate>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_text_as_none"
    )]
    pub description: Option<String>,
}

impl Debt {
    /// Creates a pending debt with a freshly assigned identifier.
    pub fn new(person: impl Into<String>, amount: Decimal, direction: DebtDirection) -> Self {
        Self {
            id: Uuid::new_v4(),
            person: person.into(),
            amount,
            direction,
            status: DebtStatus::Pending,
            due_date: None,
            description: None,
        }
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_pending(&self) -> bool {
        self.status == DebtStatus::Pending
    }

    /// Flips PENDING <-> PAID and returns the new status.
    pub fn toggle_status(&mut self) -> DebtStatus {
        self.status = self.status.toggled();
        self.status
    }
}

impl Identifiable for Debt {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Debt {
    fn display_label(&self) -> String {
        format!("debt:{} [{} - {}] {}", self.id, self.direction, self.status, self.person)
    }
}

// Forms that leave optional inputs untouched store them as empty strings.
fn blank_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(de::Error::custom),
    }
}

fn blank_text_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn new_debt_starts_pending() {
        let debt = Debt::new("Asha", dec!(500), DebtDirection::TheyOweMe);
        assert_eq!(debt.status, DebtStatus::Pending);
        assert!(debt.is_pending());
    }

    #[test]
    fn toggle_flips_between_pending_and_settled() {
        let mut debt = Debt::new("Ravi", dec!(200), DebtDirection::IOweThem);
        assert_eq!(debt.toggle_status(), DebtStatus::Settled);
        assert_eq!(debt.toggle_status(), DebtStatus::Pending);
    }

    #[test]
    fn uses_original_wire_labels() {
        let debt = Debt::new("Ravi", dec!(200), DebtDirection::IOweThem)
            .with_due_date(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
        let value = serde_json::to_value(&debt).unwrap();
        assert_eq!(value["type"], "I_OWE");
        assert_eq!(value["status"], "PENDING");
        assert_eq!(value["dueDate"], "2024-06-30");
        assert!(value.get("description").is_none());

        let mut settled = debt.clone();
        settled.toggle_status();
        let value = serde_json::to_value(&settled).unwrap();
        assert_eq!(value["status"], "PAID");
    }

    #[test]
    fn blank_optional_fields_read_as_none() {
        let raw = r#"{"id":"0d6f3c1e-8a2b-4c5d-9e0f-112233445566","person":"Meera",
            "amount":75,"type":"OWES_ME","status":"PENDING","dueDate":"","description":"  "}"#;
        let debt: Debt = serde_json::from_str(raw).unwrap();
        assert_eq!(debt.due_date, None);
        assert_eq!(debt.description, None);
        assert_eq!(debt.direction, DebtDirection::TheyOweMe);
    }

    #[test]
    fn direction_parses_aliases() {
        assert_eq!(DebtDirection::parse("owes_me"), Some(DebtDirection::TheyOweMe));
        assert_eq!(DebtDirection::parse("I_OWE_THEM"), Some(DebtDirection::IOweThem));
        assert_eq!(DebtDirection::parse("lent"), None);
    }
}
