use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::field::Field;
use super::lookup::LookupTable;
use super::record::FormRecord;

/// A single invalid field, with the message shown next to it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldValidationError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldValidationError {
    /// `None` for fields that are never rejected.
    fn for_field(field: Field) -> Option<Self> {
        error_message(field).map(|message| Self { field, message })
    }
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid hardcoded regex"));

static PHONE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid hardcoded regex"));

static PAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("valid hardcoded regex"));

static AADHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{12}$").expect("valid hardcoded regex"));

/// Message reported when `field` fails validation, or `None` if `field` is
/// never validated.
pub fn error_message(field: Field) -> Option<&'static str> {
    let message = match field {
        Field::FirstName => "First Name is required",
        Field::LastName => "Last Name is required",
        Field::Username => "Username is required",
        Field::Email => "Valid email is required",
        Field::Password => "Password is required",
        Field::PhoneCode => return None,
        Field::PhoneNumber => "10-digit number required",
        Field::Country => "Country is required",
        Field::City => "City is required",
        Field::Pan => "Valid PAN format required",
        Field::Aadhar => "12-digit Aadhar required",
    };
    Some(message)
}

fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Checks one field of `record`.
///
/// `city` is checked against the city list of the record's current country.
/// PAN and Aadhar are checked for shape only.
pub fn check_field(
    field: Field,
    record: &FormRecord,
    table: &LookupTable,
) -> Result<(), FieldValidationError> {
    let value = record.get(field);
    let ok = match field {
        Field::FirstName | Field::LastName | Field::Username | Field::Password => {
            not_blank(value)
        }
        Field::Email => EMAIL_RE.is_match(value),
        Field::PhoneCode => return Ok(()),
        Field::PhoneNumber => PHONE_NUMBER_RE.is_match(value),
        Field::Country => table.has_country(value),
        Field::City => table.has_city(record.get(Field::Country), value),
        Field::Pan => PAN_RE.is_match(value),
        Field::Aadhar => AADHAR_RE.is_match(value),
    };
    if ok {
        return Ok(());
    }
    FieldValidationError::for_field(field).map_or(Ok(()), Err)
}

/// Returns `true` if `field` is acceptable in `record`.
pub fn validate_field(field: Field, record: &FormRecord, table: &LookupTable) -> bool {
    check_field(field, record, table).is_ok()
}

/// Errors for the currently invalid fields, in schema order.
///
/// Empty if and only if the record it was computed from is fully valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    errors: BTreeMap<Field, FieldValidationError>,
}

impl ValidationResult {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the message for `field`, if it is invalid.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).map(|e| e.message)
    }

    /// Returns the invalid fields in schema order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldValidationError> {
        self.errors.values()
    }
}

impl FromIterator<FieldValidationError> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = FieldValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().map(|e| (e.field, e)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn table() -> LookupTable {
        LookupTable::builtin()
    }

    fn with(field: Field, value: &str) -> FormRecord {
        FormRecord::default().set_field(field, value)
    }

    fn valid(field: Field, value: &str) -> bool {
        validate_field(field, &with(field, value), &table())
    }

    // --- required text fields ---

    #[test]
    fn names_require_non_blank() {
        for field in [Field::FirstName, Field::LastName, Field::Username, Field::Password] {
            assert!(valid(field, "x"), "{field:?} should accept x");
            assert!(!valid(field, ""), "{field:?} should reject empty");
            assert!(!valid(field, "   \t"), "{field:?} should reject blank");
        }
    }

    #[test]
    fn surrounding_whitespace_is_kept_but_allowed() {
        assert!(valid(Field::FirstName, "  Asha "));
    }

    // --- email ---

    #[test]
    fn email_simple() {
        assert!(valid(Field::Email, "a@b.com"));
    }

    #[test]
    fn email_missing_dot() {
        assert!(!valid(Field::Email, "a@bcom"));
    }

    #[test]
    fn email_missing_at() {
        assert!(!valid(Field::Email, "ab.com"));
    }

    #[test]
    fn email_with_space() {
        assert!(!valid(Field::Email, "a @b.com"));
    }

    #[test]
    fn email_empty() {
        assert!(!valid(Field::Email, ""));
    }

    // --- phone number ---

    #[test]
    fn phone_number_ten_digits() {
        assert!(valid(Field::PhoneNumber, "9876543210"));
    }

    #[test]
    fn phone_number_wrong_length() {
        assert!(!valid(Field::PhoneNumber, "987654321"));
        assert!(!valid(Field::PhoneNumber, "98765432101"));
    }

    #[test]
    fn phone_number_non_ascii_digits() {
        assert!(!valid(Field::PhoneNumber, "९८७६५४३२१०"));
    }

    // --- pan ---

    #[test]
    fn pan_valid() {
        assert!(valid(Field::Pan, "ABCDE1234F"));
    }

    #[test]
    fn pan_lowercase() {
        assert!(!valid(Field::Pan, "abcde1234f"));
    }

    #[test]
    fn pan_no_trailing_letter() {
        assert!(!valid(Field::Pan, "ABCDE12345"));
    }

    #[test]
    fn pan_too_long() {
        assert!(!valid(Field::Pan, "ABCDE1234FG"));
    }

    // --- aadhar ---

    #[test]
    fn aadhar_twelve_digits() {
        assert!(valid(Field::Aadhar, "123456789012"));
    }

    #[test]
    fn aadhar_eleven_digits() {
        assert!(!valid(Field::Aadhar, "12345678901"));
    }

    #[test]
    fn aadhar_with_spaces() {
        assert!(!valid(Field::Aadhar, "1234 5678 9012"));
    }

    // --- country / city ---

    #[test]
    fn country_must_be_in_table() {
        assert!(valid(Field::Country, "India"));
        assert!(!valid(Field::Country, "France"));
        assert!(!valid(Field::Country, ""));
    }

    #[test]
    fn city_must_belong_to_selected_country() {
        let record = FormRecord::default()
            .set_field(Field::Country, "India")
            .set_field(Field::City, "Delhi");
        assert!(validate_field(Field::City, &record, &table()));

        let record = record.set_field(Field::City, "Chicago");
        assert!(!validate_field(Field::City, &record, &table()));
    }

    #[test]
    fn city_without_country_is_invalid() {
        assert!(!valid(Field::City, "Delhi"));
    }

    #[test]
    fn city_checked_against_injected_table() {
        static ENTRIES: crate::model::LookupEntries = &[("Nepal", &["Kathmandu"])];
        let table = LookupTable::new(ENTRIES).unwrap();
        let record = FormRecord::default()
            .set_field(Field::Country, "Nepal")
            .set_field(Field::City, "Kathmandu");
        assert!(validate_field(Field::City, &record, &table));
        assert!(!validate_field(Field::City, &record, &LookupTable::builtin()));
    }

    // --- phone code ---

    #[test]
    fn phone_code_always_valid() {
        assert!(valid(Field::PhoneCode, ""));
        assert!(valid(Field::PhoneCode, "anything"));
    }

    // --- errors ---

    #[test]
    fn check_field_reports_message() {
        let err = check_field(Field::Pan, &with(Field::Pan, "bad"), &table()).unwrap_err();
        assert_eq!(err.field, Field::Pan);
        assert_eq!(err.to_string(), "Valid PAN format required");
    }

    #[test]
    fn validated_fields_have_a_message() {
        for field in Field::all().iter().filter(|f| f.is_validated()) {
            let message = error_message(*field);
            assert!(message.is_some_and(|m| !m.is_empty()), "{field:?}");
        }
    }

    #[test]
    fn phone_code_has_no_message() {
        assert_eq!(error_message(Field::PhoneCode), None);
        assert_eq!(FieldValidationError::for_field(Field::PhoneCode), None);
    }

    #[test]
    fn result_orders_by_schema() {
        let result: ValidationResult = [Field::Aadhar, Field::FirstName, Field::City]
            .into_iter()
            .filter_map(FieldValidationError::for_field)
            .collect();
        assert_eq!(
            result.fields().collect::<Vec<_>>(),
            vec![Field::FirstName, Field::City, Field::Aadhar]
        );
        assert_eq!(result.get(Field::City), Some("City is required"));
        assert_eq!(result.get(Field::Email), None);
        assert_eq!(result.len(), 3);
    }

    #[quickcheck]
    fn any_twelve_digits_is_valid_aadhar(digits: Vec<u8>) -> bool {
        let aadhar: String = digits
            .iter()
            .cycle()
            .take(12)
            .map(|d| char::from(b'0' + d % 10))
            .collect();
        digits.is_empty() || valid(Field::Aadhar, &aadhar)
    }

    #[quickcheck]
    fn pan_shape_always_accepted(letters: Vec<u8>, number: u16) -> bool {
        if letters.is_empty() {
            return true;
        }
        let mut it = letters.iter().cycle().map(|l| char::from(b'A' + l % 26));
        let head: String = it.by_ref().take(5).collect();
        let tail = it.next().unwrap_or('Z');
        let pan = format!("{head}{:04}{tail}", number % 10000);
        valid(Field::Pan, &pan)
    }
}
