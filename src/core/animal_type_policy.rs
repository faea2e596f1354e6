use crate::domain::model::{AnimalType, Availability};
use crate::domain::ports::AnimalTypePolicy;
use crate::utils::error::{BookError, Result};
use std::collections::BTreeMap;

/// 以「availability → 允許的動物種類」對照表判斷 animal type 是否合法
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePolicy {
    allowed: BTreeMap<Availability, Vec<String>>,
}

impl TablePolicy {
    pub fn new(allowed: BTreeMap<Availability, Vec<String>>) -> Self {
        Self { allowed }
    }

    pub fn allowed_for(&self, availability: Availability) -> &[String] {
        self.allowed
            .get(&availability)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for TablePolicy {
    fn default() -> Self {
        let mut allowed = BTreeMap::new();
        allowed.insert(
            Availability::Available,
            vec!["able.Dog".to_string(), "able.Cat".to_string()],
        );
        allowed.insert(
            Availability::NotAvailable,
            vec!["current.Dog".to_string(), "current.Cat".to_string()],
        );
        allowed.insert(Availability::Nil, Vec::new());
        Self { allowed }
    }
}

impl AnimalTypePolicy for TablePolicy {
    fn parse_animal_type(&self, raw: &str, availability: &str) -> Result<AnimalType> {
        let availability = Availability::parse(availability.trim())?;
        let raw = raw.trim();
        let allowed = self.allowed_for(availability);

        if let Some(canonical) = allowed.iter().find(|t| t.eq_ignore_ascii_case(raw)) {
            return Ok(AnimalType::from_policy(canonical.as_str()));
        }

        let message = if allowed.is_empty() {
            format!(
                "Animal type cannot be set when availability is {}",
                availability
            )
        } else {
            format!(
                "Animal type should be one of {} when availability is {}",
                allowed.join(", "),
                availability
            )
        };
        Err(BookError::invalid_field("animal type", message))
    }
}
