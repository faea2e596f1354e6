use crate::utils::error::{BookError, Result};
use std::collections::HashMap;
use std::fmt;

/// 參數前綴，例如 `n/`、`p/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Values grouped by prefix, in the order they appeared, plus the preamble.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    values: HashMap<Prefix, Vec<String>>,
    preamble: String,
}

impl ArgumentMultimap {
    pub fn put(&mut self, prefix: Prefix, value: String) {
        self.values.entry(prefix).or_default().push(value);
    }

    /// 同一前綴出現多次時取最後一個
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.value(prefix).is_some()
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Fails if any of `prefixes` was given more than once, naming all of them.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> Result<()> {
        let mut duplicated: Vec<&str> = Vec::new();
        for prefix in prefixes {
            if self.all_values(*prefix).len() > 1 && !duplicated.contains(&prefix.as_str()) {
                duplicated.push(prefix.as_str());
            }
        }

        if duplicated.is_empty() {
            return Ok(());
        }

        Err(BookError::DuplicateFields {
            prefixes: duplicated.join(" "),
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct PrefixPosition {
    prefix: Prefix,
    start: usize,
}

/// Splits `args` into values keyed by the recognised `prefixes`.
///
/// A prefix only counts at the start of the input or right after
/// whitespace, so `an/` never yields an `n/` and `x@a/b` stays intact.
/// Values are trimmed; text before the first prefix becomes the preamble.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<PrefixPosition> = prefixes
        .iter()
        .flat_map(|prefix| find_prefix_positions(args, *prefix))
        .collect();
    // 同一位置只保留最長的前綴（重複傳入或互為開頭的前綴）
    positions.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| b.prefix.as_str().len().cmp(&a.prefix.as_str().len()))
    });
    positions.dedup_by_key(|position| position.start);

    extract_arguments(args, &positions)
}

fn find_prefix_positions(args: &str, prefix: Prefix) -> Vec<PrefixPosition> {
    args.match_indices(prefix.as_str())
        .filter(|(start, _)| *start == 0 || args[..*start].ends_with(char::is_whitespace))
        .map(|(start, _)| PrefixPosition { prefix, start })
        .collect()
}

fn extract_arguments(args: &str, positions: &[PrefixPosition]) -> ArgumentMultimap {
    let mut multimap = ArgumentMultimap::default();

    let preamble_end = positions.first().map(|p| p.start).unwrap_or(args.len());
    multimap.preamble = args[..preamble_end].trim().to_string();

    for (index, position) in positions.iter().enumerate() {
        let value_start = position.start + position.prefix.as_str().len();
        let value_end = positions
            .get(index + 1)
            .map(|next| next.start)
            .unwrap_or(args.len());
        let value = args[value_start..value_end].trim().to_string();
        multimap.put(position.prefix, value);
    }

    multimap
}
