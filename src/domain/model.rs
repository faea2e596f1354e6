use crate::utils::error::{BookError, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[[:alnum:]][[:alnum:] ]*$").expect("valid name regex"));

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let local = r"[a-zA-Z0-9]+([+_.\-][a-zA-Z0-9]+)*";
    let label = r"[a-zA-Z0-9]+(-[a-zA-Z0-9]+)*";
    let pattern = format!(r"^{local}@({label}\.)*({label}){{2,}}$");
    Regex::new(&pattern).expect("valid email regex")
});

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[[:alnum:]]+$").expect("valid tag regex"));

/// 人名與動物名稱共用同一套規則
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    pub fn new(value: &str) -> Result<Self> {
        if !Self::is_valid(value) {
            return Err(BookError::invalid_field("name", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(value.to_string()))
    }

    pub fn is_valid(value: &str) -> bool {
        NAME_REGEX.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    pub fn new(value: &str) -> Result<Self> {
        if !Self::is_valid(value) {
            return Err(BookError::invalid_field("phone", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(value.to_string()))
    }

    pub fn is_valid(value: &str) -> bool {
        PHONE_REGEX.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain and adhere to the following constraints:\n\
        1. The local-part should only contain alphanumeric characters and these special characters, excluding the parentheses, (+_.-). \
        The local-part may not start or end with any special characters.\n\
        2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels separated by periods.\n\
        The domain name must:\n    \
        - end with a domain label at least 2 characters long\n    \
        - have each domain label start and end with alphanumeric characters\n    \
        - have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    pub fn new(value: &str) -> Result<Self> {
        if !Self::is_valid(value) {
            return Err(BookError::invalid_field("email", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(value.to_string()))
    }

    pub fn is_valid(value: &str) -> bool {
        EMAIL_REGEX.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Addresses can take any values, and it should not be blank";

    pub fn new(value: &str) -> Result<Self> {
        if !Self::is_valid(value) {
            return Err(BookError::invalid_field("address", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(value.to_string()))
    }

    pub fn is_valid(value: &str) -> bool {
        value.chars().next().is_some_and(|c| !c.is_whitespace())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    pub fn new(value: &str) -> Result<Self> {
        if !Self::is_valid(value) {
            return Err(BookError::invalid_field("tag", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(value.to_string()))
    }

    pub fn is_valid(value: &str) -> bool {
        TAG_REGEX.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Availability {
    Available,
    NotAvailable,
    #[serde(rename = "nil")]
    Nil,
}

impl Availability {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Availability should be Available, NotAvailable or nil";

    /// 大小寫不敏感，回傳正規化後的值
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "available" => Ok(Availability::Available),
            "notavailable" => Ok(Availability::NotAvailable),
            "nil" => Ok(Availability::Nil),
            _ => Err(BookError::invalid_field(
                "availability",
                Self::MESSAGE_CONSTRAINTS,
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::NotAvailable => "NotAvailable",
            Availability::Nil => "nil",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 合法與否由 `AnimalTypePolicy` 決定，這裡只保存結果
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AnimalType(String);

impl AnimalType {
    pub(crate) fn from_policy(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub const MESSAGE_AVAILABILITY_REQUIRED: &str =
    "Availability is required when providing animalName or animalType.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
    animal_name: Option<Name>,
    availability: Option<Availability>,
    animal_type: Option<AnimalType>,
}

impl Person {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
        animal_name: Option<Name>,
        availability: Option<Availability>,
        animal_type: Option<AnimalType>,
    ) -> Result<Self> {
        if (animal_name.is_some() || animal_type.is_some()) && availability.is_none() {
            return Err(BookError::MissingDependency {
                message: MESSAGE_AVAILABILITY_REQUIRED.to_string(),
            });
        }

        Ok(Self {
            name,
            phone,
            email,
            address,
            tags,
            animal_name,
            availability,
            animal_type,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn animal_name(&self) -> Option<&Name> {
        self.animal_name.as_ref()
    }

    pub fn availability(&self) -> Option<Availability> {
        self.availability
    }

    pub fn animal_type(&self) -> Option<&AnimalType> {
        self.animal_type.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> (Name, Phone, Email, Address) {
        (
            Name::new("Jane Doe").unwrap(),
            Phone::new("98765432").unwrap(),
            Email::new("jane@example.com").unwrap(),
            Address::new("1 Main St").unwrap(),
        )
    }

    #[test]
    fn test_name_validation() {
        assert!(Name::is_valid("Jane Doe"));
        assert!(Name::is_valid("R2D2"));
        assert!(!Name::is_valid(""));
        assert!(!Name::is_valid(" Jane"));
        assert!(!Name::is_valid("Jane*"));
    }

    #[test]
    fn test_phone_validation() {
        assert!(Phone::is_valid("123"));
        assert!(Phone::is_valid("98765432"));
        assert!(!Phone::is_valid("12"));
        assert!(!Phone::is_valid("9011p041"));
        assert!(!Phone::is_valid("9312 1534"));
    }

    #[test]
    fn test_email_validation() {
        assert!(Email::is_valid("j@e.com"));
        assert!(Email::is_valid("peter_jack@very-very-very-long-example.com"));
        assert!(Email::is_valid("a1+be.d@example1.com"));
        assert!(Email::is_valid("peterjack@example"));
        assert!(!Email::is_valid("@example.com"));
        assert!(!Email::is_valid("peterjack@"));
        assert!(!Email::is_valid("-peterjack@example.com"));
        assert!(!Email::is_valid("peterjack@example.c"));
        assert!(!Email::is_valid("peterjack@-example.com"));
        assert!(!Email::is_valid("peter jack@example.com"));
    }

    #[test]
    fn test_address_validation() {
        assert!(Address::is_valid("Blk 456, Den Road, #01-355"));
        assert!(Address::is_valid("-"));
        assert!(!Address::is_valid(""));
        assert!(!Address::is_valid(" Street"));
    }

    #[test]
    fn test_tag_validation() {
        assert!(Tag::is_valid("friends"));
        assert!(!Tag::is_valid("best friend"));
        assert!(!Tag::is_valid("#friend"));
    }

    #[test]
    fn test_availability_parse_is_case_insensitive() {
        assert_eq!(
            Availability::parse("available").unwrap(),
            Availability::Available
        );
        assert_eq!(
            Availability::parse("NOTAVAILABLE").unwrap(),
            Availability::NotAvailable
        );
        assert_eq!(Availability::parse("Nil").unwrap(), Availability::Nil);
        assert!(Availability::parse("maybe").is_err());
        assert_eq!(Availability::NotAvailable.to_string(), "NotAvailable");
    }

    #[test]
    fn test_person_requires_availability_for_animal_fields() {
        let (name, phone, email, address) = contact();
        let err = Person::new(
            name,
            phone,
            email,
            address,
            BTreeSet::new(),
            Some(Name::new("Rex").unwrap()),
            None,
            None,
        )
        .unwrap_err();

        assert_eq!(err.to_string(), MESSAGE_AVAILABILITY_REQUIRED);
    }

    #[test]
    fn test_person_without_animal_fields() {
        let (name, phone, email, address) = contact();
        let person = Person::new(
            name,
            phone,
            email,
            address,
            BTreeSet::new(),
            None,
            None,
            None,
        )
        .unwrap();

        assert_eq!(person.name().as_str(), "Jane Doe");
        assert!(person.animal_name().is_none());
        assert!(person.availability().is_none());
        assert!(person.animal_type().is_none());
    }
}
