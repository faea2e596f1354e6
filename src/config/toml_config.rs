use crate::core::animal_type_policy::TablePolicy;
use crate::domain::model::Availability;
use crate::utils::error::{BookError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const EXPORT_FORMATS: &[&str] = &["csv", "tsv", "json"];
pub const LOG_FORMATS: &[&str] = &["compact", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    pub logging: LoggingConfig,
    pub export: ExportConfig,
    /// availability → 允許的動物種類
    pub animal_types: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub output_path: String,
    pub formats: Vec<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_path: "./output".to_string(),
            formats: EXPORT_FORMATS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl Default for BookConfig {
    fn default() -> Self {
        let policy = TablePolicy::default();
        let animal_types = [
            Availability::Available,
            Availability::NotAvailable,
            Availability::Nil,
        ]
        .into_iter()
        .map(|a| (a.as_str().to_string(), policy.allowed_for(a).to_vec()))
        .collect();

        Self {
            logging: LoggingConfig::default(),
            export: ExportConfig::default(),
            animal_types,
        }
    }
}

impl BookConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BookError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BookError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BookError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 由 animal_types 表建立 policy，鍵值必須是合法的 availability
    pub fn animal_type_policy(&self) -> Result<TablePolicy> {
        let mut allowed = BTreeMap::new();
        for (key, types) in &self.animal_types {
            let availability =
                Availability::parse(key).map_err(|_| BookError::InvalidConfigValueError {
                    field: "animal_types".to_string(),
                    value: key.clone(),
                    reason: Availability::MESSAGE_CONSTRAINTS.to_string(),
                })?;
            // `Available` 與 `available` 視為同一個鍵
            if allowed.contains_key(&availability) {
                return Err(BookError::InvalidConfigValueError {
                    field: "animal_types".to_string(),
                    value: key.clone(),
                    reason: format!("{} is listed more than once", availability),
                });
            }
            allowed.insert(
                availability,
                types.iter().map(|t| t.trim().to_string()).collect(),
            );
        }
        Ok(TablePolicy::new(allowed))
    }

    pub fn uses_json_logs(&self) -> bool {
        self.logging.format.as_deref() == Some("json")
    }
}

impl Validate for BookConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("export.output_path", &self.export.output_path)?;

        for format in &self.export.formats {
            validation::validate_one_of("export.formats", format, EXPORT_FORMATS)?;
        }
        validation::validate_unique("export.formats", &self.export.formats)?;

        if let Some(format) = &self.logging.format {
            validation::validate_one_of("logging.format", format, LOG_FORMATS)?;
        }

        for (availability, types) in &self.animal_types {
            let field = format!("animal_types.{}", availability);
            for animal_type in types {
                validation::validate_non_empty_string(&field, animal_type)?;
            }
            validation::validate_unique(&field, types)?;
        }

        // 鍵值合法性交由 policy 建立時檢查
        self.animal_type_policy().map(|_| ())
    }
}
