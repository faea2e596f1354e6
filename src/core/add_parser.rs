use crate::core::animal_type_policy::TablePolicy;
use crate::core::cli_syntax::*;
use crate::core::command::AddCommand;
use crate::core::field_parser;
use crate::core::rules::{availability_rule, DependencyRule};
use crate::core::tokenizer::{tokenize, ArgumentMultimap, Prefix};
use crate::domain::model::Person;
use crate::domain::ports::{AnimalTypePolicy, CommandParser};
use crate::utils::error::{BookError, Result};

/// 沒有 av/ 時傳給 animal type policy 的值
const AVAILABILITY_NIL: &str = "nil";

/// Parses the arguments of an `add` command into an [`AddCommand`].
///
/// Checks run fail-fast in a fixed order: required prefixes and empty
/// preamble, then the dependency rules, then duplicate single-valued
/// prefixes, then each field's own grammar.
pub struct AddCommandParser {
    rules: Vec<DependencyRule>,
    animal_types: Box<dyn AnimalTypePolicy>,
}

impl AddCommandParser {
    pub fn new(animal_types: impl AnimalTypePolicy + 'static) -> Self {
        Self {
            rules: vec![availability_rule()],
            animal_types: Box::new(animal_types),
        }
    }

    /// 追加一條跨欄位規則，會在預設規則之後檢查
    pub fn with_rule(mut self, rule: DependencyRule) -> Self {
        self.rules.push(rule);
        self
    }

    fn are_prefixes_present(args: &ArgumentMultimap) -> bool {
        [PREFIX_NAME, PREFIX_ADDRESS, PREFIX_PHONE, PREFIX_EMAIL]
            .iter()
            .all(|prefix| args.is_present(*prefix))
    }

    fn build_person(&self, args: &ArgumentMultimap) -> Result<Person> {
        // 必填欄位在前面已確認存在
        let required = |prefix: Prefix| args.value(prefix).unwrap_or_default();

        let name = field_parser::parse_name(required(PREFIX_NAME))?;
        let phone = field_parser::parse_phone(required(PREFIX_PHONE))?;
        let email = field_parser::parse_email(required(PREFIX_EMAIL))?;
        let address = field_parser::parse_address(required(PREFIX_ADDRESS))?;
        let tags = field_parser::parse_tags(args.all_values(PREFIX_TAG))?;

        let animal_name = args
            .value(PREFIX_ANIMAL_NAME)
            .map(field_parser::parse_name)
            .transpose()?;

        let availability = args
            .value(PREFIX_AVAILABILITY)
            .map(field_parser::parse_availability)
            .transpose()?;

        let availability_value = args.value(PREFIX_AVAILABILITY).unwrap_or(AVAILABILITY_NIL);
        let animal_type = args
            .value(PREFIX_ANIMAL_TYPE)
            .map(|raw| self.animal_types.parse_animal_type(raw, availability_value))
            .transpose()?;

        Person::new(
            name,
            phone,
            email,
            address,
            tags,
            animal_name,
            availability,
            animal_type,
        )
    }
}

impl Default for AddCommandParser {
    fn default() -> Self {
        Self::new(TablePolicy::default())
    }
}

impl CommandParser<AddCommand> for AddCommandParser {
    fn parse(&self, args: &str) -> Result<AddCommand> {
        let args = tokenize(args, ALL_ADD_PREFIXES);

        if !Self::are_prefixes_present(&args) || !args.preamble().is_empty() {
            tracing::debug!(
                "Rejecting add command: missing required prefix or preamble '{}'",
                args.preamble()
            );
            return Err(BookError::InvalidCommandFormat {
                usage: AddCommand::MESSAGE_USAGE.to_string(),
            });
        }

        for rule in &self.rules {
            rule.check(&args)?;
        }

        args.verify_no_duplicate_prefixes_for(&[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
        ])?;

        let person = self.build_person(&args)?;
        tracing::debug!("Parsed add command for {}", person.name().as_str());

        Ok(AddCommand::new(person))
    }
}
