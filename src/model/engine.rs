use super::field::Field;
use super::lookup::LookupTable;
use super::record::FormRecord;
use super::validation::{ValidationResult, check_field, validate_field};

/// An immutable snapshot of a fully valid [`FormRecord`].
///
/// Only [`FormEngine::try_submit`] produces one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    record: FormRecord,
}

impl SubmissionPayload {
    /// Returns the submitted value of `field`.
    pub fn get(&self, field: Field) -> &str {
        self.record.get(field)
    }

    /// Iterates `(field, value)` pairs in schema order.
    pub fn entries(&self) -> impl Iterator<Item = (Field, &str)> {
        self.record.entries()
    }

    /// Returns `(label, value)` display rows in schema order.
    ///
    /// Labels are the field keys with their first letter capitalized.
    pub fn rows(&self) -> Vec<(String, &str)> {
        self.entries()
            .map(|(field, value)| (field.capitalized_key(), value))
            .collect()
    }

    /// Returns a copy of the submitted record.
    pub fn to_record(&self) -> FormRecord {
        self.record.clone()
    }
}

/// Derives validity from records and turns valid ones into payloads.
///
/// Holds no form state of its own; every operation is a pure function of
/// the record passed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormEngine {
    table: LookupTable,
}

impl FormEngine {
    /// Creates an engine that validates cities against `table`.
    pub fn new(table: LookupTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &LookupTable {
        &self.table
    }

    /// Returns `true` if `field` is acceptable in `record`.
    pub fn validate_field(&self, field: Field, record: &FormRecord) -> bool {
        validate_field(field, record, &self.table)
    }

    /// Returns `true` if every field of `record` passes its validator.
    pub fn is_form_valid(&self, record: &FormRecord) -> bool {
        Field::all()
            .iter()
            .all(|&field| self.validate_field(field, record))
    }

    /// Checks every field and reports all failures together.
    pub fn validate_all(&self, record: &FormRecord) -> ValidationResult {
        Field::all()
            .iter()
            .filter_map(|&field| check_field(field, record, &self.table).err())
            .collect()
    }

    /// Validates `record` and snapshots it on success.
    ///
    /// On failure the full error set is returned and nothing else happens.
    pub fn try_submit(&self, record: &FormRecord) -> Result<SubmissionPayload, ValidationResult> {
        let errors = self.validate_all(record);
        if errors.is_empty() {
            log::info!("submission accepted");
            Ok(SubmissionPayload {
                record: record.clone(),
            })
        } else {
            log::info!("submission rejected: {} invalid field(s)", errors.len());
            Err(errors)
        }
    }

    /// Counts validated fields that currently pass.
    pub fn completed_fields(&self, record: &FormRecord) -> usize {
        Field::all()
            .iter()
            .filter(|f| f.is_validated())
            .filter(|&&field| self.validate_field(field, record))
            .count()
    }
}
