//! Two-input truth tables used as toy datasets.

use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::data::dataset::Dataset;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicTable {
    #[default]
    Xor,
    And,
    Or,
}

impl LogicTable {
    fn apply(&self, a: bool, b: bool) -> bool {
        match self {
            LogicTable::Xor => a ^ b,
            LogicTable::And => a && b,
            LogicTable::Or => a || b,
        }
    }

    /// The four rows of the table as a 2-feature, 1-target dataset.
    pub fn dataset(&self) -> Dataset {
        let rows = [(false, false), (false, true), (true, false), (true, true)];
        let as_f64 = |v: bool| if v { 1.0 } else { 0.0 };
        let features = rows.iter().map(|&(a, b)| vec![as_f64(a), as_f64(b)]).collect();
        let targets = rows.iter().map(|&(a, b)| vec![as_f64(self.apply(a, b))]).collect();
        Dataset::new(features, targets).expect("truth tables are rectangular")
    }
}

impl fmt::Display for LogicTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogicTable::Xor => "xor",
            LogicTable::And => "and",
            LogicTable::Or => "or",
        })
    }
}

impl FromStr for LogicTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "xor" => Ok(LogicTable::Xor),
            "and" => Ok(LogicTable::And),
            "or" => Ok(LogicTable::Or),
            other => Err(Error::Configuration(format!("unknown dataset `{other}`"))),
        }
    }
}

pub fn xor() -> Dataset {
    LogicTable::Xor.dataset()
}

pub fn and() -> Dataset {
    LogicTable::And.dataset()
}

pub fn or() -> Dataset {
    LogicTable::Or.dataset()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_table() {
        let data = xor();
        assert_eq!(data.len(), 4);
        assert_eq!(data.features()[1], vec![0.0, 1.0]);
        let targets: Vec<f64> = data.targets().iter().map(|t| t[0]).collect();
        assert_eq!(targets, vec![0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn and_or_tables() {
        let and: Vec<f64> = and().targets().iter().map(|t| t[0]).collect();
        let or: Vec<f64> = or().targets().iter().map(|t| t[0]).collect();
        assert_eq!(and, vec![0.0, 0.0, 0.0, 1.0]);
        assert_eq!(or, vec![0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn parses_names() {
        assert_eq!("or".parse::<LogicTable>().unwrap(), LogicTable::Or);
        assert!("nand".parse::<LogicTable>().is_err());
    }
}
