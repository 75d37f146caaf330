use super::field::{Field, UnknownField};
use super::lookup::DEFAULT_PHONE_CODE;

/// The current value of every field in one form session.
///
/// Every schema field is always present (possibly empty) and there are no
/// extra keys. Records are never edited in place: [`set_field`](Self::set_field)
/// returns a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRecord {
    values: [String; Field::COUNT],
}

impl Default for FormRecord {
    fn default() -> Self {
        Self::new(DEFAULT_PHONE_CODE)
    }
}

impl FormRecord {
    /// Creates a record with every field empty except the phone code.
    pub fn new(phone_code: impl Into<String>) -> Self {
        let mut values: [String; Field::COUNT] = Default::default();
        values[Field::PhoneCode.index()] = phone_code.into();
        Self { values }
    }

    /// Returns the value of `field`.
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Returns a record with `field` set to `value`.
    ///
    /// When the value actually changes, every field that depends on `field`
    /// is cleared in the same returned record, so a country change never
    /// leaves a stale city behind. Setting the current value returns an
    /// equal record.
    pub fn set_field(&self, field: Field, value: impl Into<String>) -> FormRecord {
        let value = value.into();
        let mut next = self.clone();
        if next.values[field.index()] == value {
            return next;
        }
        for dependent in field.dependents() {
            next.values[dependent.index()].clear();
        }
        next.values[field.index()] = value;
        next
    }

    /// Like [`set_field`](Self::set_field), addressing the field by its key.
    pub fn set_field_by_key(
        &self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<FormRecord, UnknownField> {
        let field: Field = key.parse()?;
        Ok(self.set_field(field, value))
    }

    /// Iterates `(field, value)` pairs in schema order.
    pub fn entries(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::all()
            .iter()
            .map(move |&field| (field, self.get(field)))
    }
}
