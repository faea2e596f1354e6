use crate::core::command::AddCommand;
use crate::domain::model::Person;
use crate::domain::ports::CommandParser;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    /// 從 1 開始的行號
    pub line: usize,
    pub input: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub imported: Vec<Person>,
    pub failures: Vec<LineFailure>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.imported.len() + self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Drops a leading `add` command word, if any.
pub fn strip_command_word(line: &str) -> &str {
    let trimmed = line.trim_start();
    match trimmed.strip_prefix(AddCommand::COMMAND_WORD) {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest,
        _ => line,
    }
}

pub struct BatchImporter<P: CommandParser<AddCommand>> {
    parser: P,
}

impl<P: CommandParser<AddCommand>> BatchImporter<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Parses every non-blank, non-comment line on its own; one bad line
    /// never stops the rest.
    pub fn import(&self, text: &str) -> BatchReport {
        let mut report = BatchReport::default();

        for (index, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            match self.parser.parse(strip_command_word(line)) {
                Ok(command) => report.imported.push(command.into_person()),
                Err(e) => {
                    tracing::warn!("Line {} rejected: {}", index + 1, e);
                    report.failures.push(LineFailure {
                        line: index + 1,
                        input: trimmed.to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }

        tracing::debug!(
            "Batch import finished: {} imported, {} rejected",
            report.imported.len(),
            report.failures.len()
        );
        report
    }
}
