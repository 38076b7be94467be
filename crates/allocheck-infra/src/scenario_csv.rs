//! CSV loaders for capacities and requests (simple format)

use std::path::Path;

use allocheck_domain::model::{Capacities, Request, RequestEntry};
use allocheck_types::{Amount, LoaderError};
use log::{debug, warn};

/// Load capacities from a CSV file
///
/// Expected columns (header optional):
/// resource, capacity
pub fn load_capacities_from_csv<P: AsRef<Path>>(path: P) -> Result<Capacities, LoaderError> {
    let path = path.as_ref();
    let records = read_records(path, 1, &["resource", "name", "capacity"])?;

    let mut capacities = Capacities::new();
    for (row, record) in records {
        let resource = required_field(&record, 0, "resource", row)?;
        if resource.is_empty() {
            warn!("{}: row {} has no resource name, skipped", path.display(), row);
            continue;
        }
        let capacity = parse_amount(&record, 1, "capacity", row)?;
        if capacities.insert(resource.to_string(), capacity).is_some() {
            return Err(LoaderError::DuplicateEntry {
                row,
                key: resource.to_string(),
            });
        }
    }
    debug!("loaded {} capacities from {}", capacities.len(), path.display());
    Ok(capacities)
}

/// Load requests from a CSV file
///
/// Expected columns (header optional):
/// request, resource, amount
///
/// Consecutive rows sharing a request id form one request. A row with both
/// resource and amount empty contributes an empty request. A resource listed
/// twice in the same request is rejected.
pub fn load_requests_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<RequestEntry>, LoaderError> {
    let path = path.as_ref();
    let records = read_records(path, 2, &["request", "resource", "amount"])?;

    let mut requests: Vec<Request> = Vec::new();
    let mut current_id: Option<String> = None;
    for (row, record) in records {
        let id = required_field(&record, 0, "request", row)?;
        if current_id.as_deref() != Some(id) {
            requests.push(Request::new());
            current_id = Some(id.to_string());
        }

        let resource = record.get(1).unwrap_or("");
        if resource.is_empty() {
            if record.get(2).is_some_and(|amount| !amount.is_empty()) {
                return Err(LoaderError::MissingColumn {
                    row,
                    column: "resource".to_string(),
                });
            }
            continue;
        }
        let amount = parse_amount(&record, 2, "amount", row)?;
        if let Some(request) = requests.last_mut() {
            if request.insert(resource.to_string(), amount).is_some() {
                return Err(LoaderError::DuplicateEntry {
                    row,
                    key: format!("{}/{}", id, resource),
                });
            }
        }
    }
    debug!("loaded {} requests from {}", requests.len(), path.display());
    Ok(requests.into_iter().map(RequestEntry::from).collect())
}

/// Read all non-empty records tagged with their line number, skipping a
/// header row if the first record looks like one.
fn read_records(
    path: &Path,
    amount_column: usize,
    header_keywords: &[&str],
) -> Result<Vec<(usize, csv::StringRecord)>, LoaderError> {
    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(LoaderError::Empty(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(idx + 1);
        if idx == 0 && is_header(&record, amount_column, header_keywords) {
            continue;
        }
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        records.push((row, record));
    }
    Ok(records)
}

/// A header row names a column with a keyword and has no number where the
/// amount goes. A row whose amount parses is always data.
fn is_header(record: &csv::StringRecord, amount_column: usize, keywords: &[&str]) -> bool {
    let amount_parses = record
        .get(amount_column)
        .is_some_and(|value| value.parse::<Amount>().is_ok());
    !amount_parses
        && record.iter().any(|field| {
            let lower = field.to_lowercase();
            keywords.iter().any(|k| lower.contains(k))
        })
}

fn required_field<'r>(
    record: &'r csv::StringRecord,
    index: usize,
    column: &str,
    row: usize,
) -> Result<&'r str, LoaderError> {
    record.get(index).ok_or_else(|| LoaderError::MissingColumn {
        row,
        column: column.to_string(),
    })
}

fn parse_amount(
    record: &csv::StringRecord,
    index: usize,
    column: &str,
    row: usize,
) -> Result<Amount, LoaderError> {
    let value = required_field(record, index, column, row)?;
    match value.parse::<Amount>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(LoaderError::InvalidNumber {
            row,
            column: column.to_string(),
            value: value.to_string(),
        }),
    }
}
