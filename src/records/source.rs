use super::{InputError, ItemRecord, RecordSource};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Raw row as it appears in the exported material list
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Item", alias = "kind")]
    item: Option<String>,
    #[serde(rename = "Total", alias = "quantity")]
    total: Option<String>,
}

/// Reads `Item`/`Total` columns from a CSV material list.
///
/// Any other columns are ignored. The first malformed row fails the whole
/// read.
pub struct CsvRecordSource<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CsvRecordSource<R> {
    pub fn new(input: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(input);
        Self { reader }
    }
}

impl CsvRecordSource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, InputError> {
        let file = File::open(path).map_err(|source| InputError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read> RecordSource for CsvRecordSource<R> {
    fn read_records(&mut self) -> Result<Vec<ItemRecord>, InputError> {
        let headers = self.reader.headers()?.clone();
        let mut records = Vec::new();

        for result in self.reader.records() {
            let record = result?;
            // Physical line where the row starts; blank lines and quoted
            // newlines make this differ from the row count
            let line = record.position().map_or(0, |p| p.line() as usize);
            let row: RawRow = record.deserialize(Some(&headers))?;
            records.push(validate_row(row, line)?);
        }

        Ok(records)
    }
}

fn validate_row(row: RawRow, line: usize) -> Result<ItemRecord, InputError> {
    let kind = row
        .item
        .filter(|s| !s.is_empty())
        .ok_or(InputError::MissingField { line, field: "Item" })?;

    let total = row
        .total
        .filter(|s| !s.is_empty())
        .ok_or(InputError::MissingField {
            line,
            field: "Total",
        })?;

    let quantity = total
        .parse::<u64>()
        .map_err(|_| InputError::InvalidQuantity { line, value: total })?;

    Ok(ItemRecord::new(kind, quantity))
}

/// Read every record from the CSV file at `path`
pub fn read_records_from_path(path: &Path) -> Result<Vec<ItemRecord>, InputError> {
    CsvRecordSource::open(path)?.read_records()
}
