use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_newtype!(Ticker);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub name: String,
    pub ticker: Ticker,
}

impl CompanyRecord {
    pub fn new(name: impl Into<String>, ticker: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ticker: Ticker::new(ticker),
        }
    }

    /// Display label used by the selector and result headings: `"<name> (<ticker>)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.ticker)
    }
}

/// Companies available for selection, in source file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<CompanyRecord>,
}

impl Catalog {
    pub fn new(records: Vec<CompanyRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompanyRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[CompanyRecord] {
        &self.records
    }

    pub fn find(&self, ticker: &Ticker) -> Option<&CompanyRecord> {
        self.records.iter().find(|record| &record.ticker == ticker)
    }

    pub fn contains(&self, ticker: &Ticker) -> bool {
        self.find(ticker).is_some()
    }
}

impl FromIterator<CompanyRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = CompanyRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_combines_name_and_ticker() {
        let record = CompanyRecord::new("Acme Corp", "ACM");
        assert_eq!(record.label(), "Acme Corp (ACM)");
    }

    #[test]
    fn find_returns_first_matching_record() {
        let catalog: Catalog = [
            CompanyRecord::new("Acme Corp", "ACM"),
            CompanyRecord::new("Globex", "GBX"),
        ]
        .into_iter()
        .collect();

        let found = catalog.find(&Ticker::new("GBX")).expect("record");
        assert_eq!(found.name, "Globex");
        assert!(!catalog.contains(&Ticker::new("NOPE")));
    }
}
