use crate::domain::model::Person;
use crate::domain::ports::Storage;
use crate::utils::error::{BookError, Result};
use serde::Serialize;
use std::io::Write;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const BUNDLE_NAME: &str = "contacts_export.zip";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            other => Err(BookError::InvalidConfigValueError {
                field: "export.formats".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: csv, tsv, json".to_string(),
            }),
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "contacts.csv",
            ExportFormat::Tsv => "contacts.tsv",
            ExportFormat::Json => "contacts.json",
        }
    }
}

/// 一筆聯絡人在 CSV/TSV 中的欄位，tags 以分號串接
#[derive(Debug, Serialize)]
struct ContactRow<'a> {
    name: &'a str,
    phone: &'a str,
    email: &'a str,
    address: &'a str,
    tags: String,
    animal_name: Option<&'a str>,
    availability: Option<&'static str>,
    animal_type: Option<&'a str>,
}

impl<'a> From<&'a Person> for ContactRow<'a> {
    fn from(person: &'a Person) -> Self {
        Self {
            name: person.name().as_str(),
            phone: person.phone().as_str(),
            email: person.email().as_str(),
            address: person.address().as_str(),
            tags: person
                .tags()
                .iter()
                .map(|tag| tag.as_str())
                .collect::<Vec<_>>()
                .join(";"),
            animal_name: person.animal_name().map(|name| name.as_str()),
            availability: person.availability().map(|a| a.as_str()),
            animal_type: person.animal_type().map(|t| t.as_str()),
        }
    }
}

pub fn render_delimited(people: &[Person], delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    for person in people {
        writer.serialize(ContactRow::from(person))?;
    }

    writer
        .into_inner()
        .map_err(|e| BookError::IoError(e.into_error()))
}

pub fn render_json(people: &[Person]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(people)?)
}

pub struct ContactExporter<S: Storage> {
    storage: S,
    formats: Vec<ExportFormat>,
}

impl<S: Storage> ContactExporter<S> {
    pub fn new(storage: S, formats: Vec<ExportFormat>) -> Self {
        Self { storage, formats }
    }

    pub fn from_names(storage: S, formats: &[String]) -> Result<Self> {
        let formats = formats
            .iter()
            .map(|f| ExportFormat::parse(f))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(storage, formats))
    }

    fn render(&self, format: ExportFormat, people: &[Person]) -> Result<Vec<u8>> {
        match format {
            ExportFormat::Csv => render_delimited(people, b','),
            ExportFormat::Tsv => render_delimited(people, b'\t'),
            ExportFormat::Json => render_json(people),
        }
    }

    /// Writes one zip bundle with a file per configured format and returns
    /// its name relative to the storage root.
    pub fn export(&self, people: &[Person]) -> Result<String> {
        tracing::debug!(
            "Creating export bundle with {} files for {} contacts",
            self.formats.len(),
            people.len()
        );

        let zip_data = {
            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

            for format in &self.formats {
                zip.start_file(format.file_name(), SimpleFileOptions::default())?;
                zip.write_all(&self.render(*format, people)?)?;
            }

            let cursor = zip.finish()?;
            cursor.into_inner()
        };

        tracing::debug!("Writing export bundle ({} bytes) to storage", zip_data.len());
        self.storage.write_file(BUNDLE_NAME, &zip_data)?;

        Ok(BUNDLE_NAME.to_string())
    }
}
