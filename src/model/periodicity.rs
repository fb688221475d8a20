use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// How often a magazine is published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Periodicity {
    Weekly,
    Monthly,
    Yearly,
}

impl Periodicity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Periodicity::Weekly => "Weekly",
            Periodicity::Monthly => "Monthly",
            Periodicity::Yearly => "Yearly",
        }
    }
}

impl Display for Periodicity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Periodicity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Weekly" => Ok(Periodicity::Weekly),
            "Monthly" => Ok(Periodicity::Monthly),
            "Yearly" => Ok(Periodicity::Yearly),
            _ => Err(format!("Unknown periodicity: {}", s)),
        }
    }
}
