//! Turn `type,fruit,quantity` rows into [Transaction] values.
//!
//! This is not a CSV reader: fields are split on every comma, no quoting or trimming
//! is involved, and each row must hold exactly three fields.

use crate::{Fruit, Operation, ParseError, ParseResult, Quantity, Transaction};

const FIELD_SEPARATOR: char = ',';

/// Parse `rows` into a list of [Transaction], in the same order. The first row is a header and is
/// skipped without being looked at.
///
/// Parsing stops at the first invalid row, in which case nothing but the error is returned.
pub fn parse<I>(rows: I) -> ParseResult<Vec<Transaction>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    rows.into_iter()
        .zip(1..)
        .skip(1)
        .map(|(row, line)| parse_row(line, row.as_ref()))
        .collect()
}

/// Same as [parse], taking the lines of `input` as rows.
pub fn parse_str(input: &str) -> ParseResult<Vec<Transaction>> {
    parse(input.lines())
}

fn parse_row(line: usize, row: &str) -> ParseResult<Transaction> {
    let fields: Vec<&str> = row.split(FIELD_SEPARATOR).collect();
    let &[code, fruit, quantity] = fields.as_slice() else {
        return Err(ParseError::MalformedRow {
            line,
            row: row.to_owned(),
        });
    };

    let operation = Operation::from_code(code).ok_or_else(|| ParseError::UnknownOperation {
        line,
        row: row.to_owned(),
    })?;
    let quantity: Quantity = quantity
        .parse()
        .map_err(|_| ParseError::InvalidQuantity {
            line,
            row: row.to_owned(),
        })?;

    Ok(Transaction {
        operation,
        fruit: Fruit::from(fruit),
        quantity,
    })
}
