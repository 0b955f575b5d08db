use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The logical catalog tables audit entries can refer to. The filter dropdown
/// lists every value; ingestion rejects anything outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectType {
    Team,
    ProductArea,
    Cluster,
    Resource,
    Tag,
    Location,
    Settings,
}

impl ObjectType {
    pub const ALL: [ObjectType; 7] = [
        ObjectType::Team,
        ObjectType::ProductArea,
        ObjectType::Cluster,
        ObjectType::Resource,
        ObjectType::Tag,
        ObjectType::Location,
        ObjectType::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Team => "Team",
            ObjectType::ProductArea => "ProductArea",
            ObjectType::Cluster => "Cluster",
            ObjectType::Resource => "Resource",
            ObjectType::Tag => "Tag",
            ObjectType::Location => "Location",
            ObjectType::Settings => "Settings",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectType::ALL
            .iter()
            .find(|ot| ot.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown table name: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_listed_value() {
        for ot in ObjectType::ALL {
            assert_eq!(ot.as_str().parse::<ObjectType>(), Ok(ot));
        }
    }

    #[test]
    fn rejects_unknown_table_name() {
        assert!("Teams".parse::<ObjectType>().is_err());
        assert!("".parse::<ObjectType>().is_err());
    }
}
