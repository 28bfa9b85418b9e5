use std::fmt;

use serde::{
    de::{self, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};

use crate::phone::MAX_DIGITS;

const FLAG_CDN_URL: &str = "https://flagcdn.com/w40";

/// A country as published by the country directory service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    pub id: String,
    pub name: String,
    pub calling_code: String,
    #[serde(deserialize_with = "deserialize_digit_length")]
    pub expected_digit_length: u8,
}

fn deserialize_digit_length<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let len = u8::deserialize(deserializer)?;
    if len == 0 || usize::from(len) > MAX_DIGITS {
        return Err(de::Error::custom(format!(
            "invalid value for expectedDigitLength: {} (must be between 1 and {})",
            len, MAX_DIGITS
        )));
    }
    Ok(len)
}

impl CountryRecord {
    pub fn expected_length(&self) -> usize {
        usize::from(self.expected_digit_length)
    }
}

/// The active country of the form: a record and the region code it is keyed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySelection {
    pub record: CountryRecord,
    pub region_code: String,
}

impl CountrySelection {
    pub fn new(region_code: impl Into<String>, record: CountryRecord) -> Self {
        Self {
            record,
            region_code: region_code.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.record.id
    }

    pub fn expected_length(&self) -> usize {
        self.record.expected_length()
    }

    pub fn flag(&self) -> Flag {
        Flag::new(&self.region_code)
    }
}

impl fmt::Display for CountrySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.record.name, self.record.calling_code)
    }
}

/// Flag asset of a region, derived from its lower-cased region code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Flag(String);

impl Flag {
    pub fn new(region_code: &str) -> Self {
        Self(region_code.to_lowercase())
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    pub fn url(&self) -> String {
        format!("{}/{}.png", FLAG_CDN_URL, self.0)
    }
}

/// A snapshot of the country directory.
///
/// Entries keep the order they were inserted in, which for a JSON document is
/// the order of its keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryDirectory {
    entries: Vec<(String, CountryRecord)>,
}

impl CountryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, CountryRecord)>,
        S: Into<String>,
    {
        let mut directory = Self::new();
        for (region_code, record) in entries {
            directory.insert(region_code, record);
        }
        directory
    }

    /// Adds a record, replacing in place any record already keyed by `region_code`.
    pub fn insert(&mut self, region_code: impl Into<String>, record: CountryRecord) {
        let region_code = region_code.into();
        match self.entries.iter_mut().find(|(code, _)| *code == region_code) {
            Some(entry) => entry.1 = record,
            None => self.entries.push((region_code, record)),
        }
    }

    pub fn get(&self, region_code: &str) -> Option<&CountryRecord> {
        self.entries
            .iter()
            .find(|(code, _)| code == region_code)
            .map(|(_, record)| record)
    }

    pub fn first(&self) -> Option<(&str, &CountryRecord)> {
        self.entries
            .first()
            .map(|(code, record)| (code.as_str(), record))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CountryRecord)> {
        self.entries
            .iter()
            .map(|(code, record)| (code.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selection(&self, region_code: &str) -> Option<CountrySelection> {
        self.get(region_code)
            .map(|record| CountrySelection::new(region_code, record.clone()))
    }

    pub fn first_selection(&self) -> Option<CountrySelection> {
        self.first()
            .map(|(code, record)| CountrySelection::new(code, record.clone()))
    }
}

impl<'de> Deserialize<'de> for CountryDirectory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DirectoryVisitor;

        impl<'de> Visitor<'de> for DirectoryVisitor {
            type Value = CountryDirectory;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a map of region codes to countries")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut directory = CountryDirectory::new();
                while let Some((region_code, record)) =
                    map.next_entry::<String, CountryRecord>()?
                {
                    directory.insert(region_code, record);
                }
                Ok(directory)
            }
        }

        deserializer.deserialize_map(DirectoryVisitor)
    }
}
