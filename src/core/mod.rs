pub mod add_parser;
pub mod animal_type_policy;
pub mod cli_syntax;
pub mod command;
pub mod field_parser;
pub mod rules;
pub mod tokenizer;
