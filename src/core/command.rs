use crate::domain::model::Person;
use serde::Serialize;

/// 新增聯絡人的指令，建立後不可變更
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddCommand {
    person: Person,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";

    pub const MESSAGE_USAGE: &'static str = "add: Adds a person to the address book. \
        Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]... \
        [an/ANIMAL_NAME] [av/AVAILABILITY] [at/ANIMAL_TYPE]\n\
        Example: add n/John Doe p/98765432 e/johnd@example.com \
        a/311, Clementi Ave 2, #02-25 t/friends an/Rex av/Available at/able.Dog";

    pub fn new(person: Person) -> Self {
        Self { person }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn into_person(self) -> Person {
        self.person
    }
}
