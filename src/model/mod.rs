mod engine;
mod field;
mod lookup;
mod record;
mod validation;

pub use engine::{FormEngine, SubmissionPayload};
pub use field::{Field, FieldKind, UnknownField};
pub use lookup::{DEFAULT_PHONE_CODE, LookupEntries, LookupError, LookupTable, PHONE_CODES};
pub use record::FormRecord;
pub use validation::{
    FieldValidationError, ValidationResult, check_field, error_message, validate_field,
};
