use crate::core::tokenizer::Prefix;

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_ANIMAL_NAME: Prefix = Prefix::new("an/");
pub const PREFIX_AVAILABILITY: Prefix = Prefix::new("av/");
pub const PREFIX_ANIMAL_TYPE: Prefix = Prefix::new("at/");

/// add 指令認得的全部前綴
pub const ALL_ADD_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_TAG,
    PREFIX_ANIMAL_NAME,
    PREFIX_AVAILABILITY,
    PREFIX_ANIMAL_TYPE,
];
