//! Define all supported transactions.
use serde::Serialize;
use serde_with::{serde_as, DisplayFromStr};

use crate::core::{Fruit, Quantity};

/// Column names of the `type,fruit,quantity` format.
pub const HEADER: [&str; 3] = ["type", "fruit", "quantity"];

/// The kind of a [Transaction], written as a single-letter code in the input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    /// The stock of a fruit at the start of the working day.
    Balance,
    /// Fruits received from a supplier.
    Supply,
    /// Fruits bought by a customer.
    Purchase,
    /// Fruits brought back by a customer.
    Return,
}

impl Operation {
    pub const ALL: [Operation; 4] = [Self::Balance, Self::Supply, Self::Purchase, Self::Return];

    /// Look up the operation matching `code`. The match is exact: no trimming, no case folding.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "b" => Some(Self::Balance),
            "s" => Some(Self::Supply),
            "p" => Some(Self::Purchase),
            "r" => Some(Self::Return),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Balance => "b",
            Self::Supply => "s",
            Self::Purchase => "p",
            Self::Return => "r",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A single warehouse event. Serializes to the same `type,fruit,quantity` shape it is parsed from.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    #[serde_as(as = "DisplayFromStr")]
    pub operation: Operation,
    pub fruit: Fruit,
    pub quantity: Quantity,
}

impl Transaction {
    pub fn new(operation: Operation, fruit: impl Into<Fruit>, quantity: i32) -> Self {
        Self {
            operation,
            fruit: fruit.into(),
            quantity: Quantity(quantity),
        }
    }

    /// Serialize a list of [Transaction] to CSV, header included.
    pub fn dump_csv<'a, W, I>(transactions: I, output: W) -> csv::Result<()>
    where
        W: std::io::Write,
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut writer = csv::Writer::from_writer(output);
        let mut transactions = transactions.into_iter().peekable();
        // The header is otherwise written along with the first serialized record
        if transactions.peek().is_none() {
            writer.write_record(HEADER)?;
        }
        for tx in transactions {
            writer.serialize(tx)?;
        }
        writer.flush()?;
        Ok(())
    }
}
