//! Per-field parse functions. Each one trims its input before validating.

use crate::domain::model::{Address, Availability, Email, Name, Phone, Tag};
use crate::utils::error::Result;
use std::collections::BTreeSet;

pub fn parse_name(raw: &str) -> Result<Name> {
    Name::new(raw.trim())
}

pub fn parse_phone(raw: &str) -> Result<Phone> {
    Phone::new(raw.trim())
}

pub fn parse_email(raw: &str) -> Result<Email> {
    Email::new(raw.trim())
}

pub fn parse_address(raw: &str) -> Result<Address> {
    Address::new(raw.trim())
}

pub fn parse_tag(raw: &str) -> Result<Tag> {
    Tag::new(raw.trim())
}

pub fn parse_tags(raw: &[String]) -> Result<BTreeSet<Tag>> {
    raw.iter().map(|tag| parse_tag(tag)).collect()
}

pub fn parse_availability(raw: &str) -> Result<Availability> {
    Availability::parse(raw.trim())
}
