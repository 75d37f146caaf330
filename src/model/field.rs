use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A field key that is not part of the registration schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

/// How a field is edited on the registration screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, typed character by character.
    Text,
    /// Free text that is masked unless explicitly revealed.
    Secret,
    /// One value out of a fixed option list.
    Choice,
}

/// A registration form field, in schema order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    PhoneCode,
    PhoneNumber,
    Country,
    City,
    Pan,
    Aadhar,
}

static ALL_FIELDS: &[Field] = &[
    Field::FirstName,
    Field::LastName,
    Field::Username,
    Field::Email,
    Field::Password,
    Field::PhoneCode,
    Field::PhoneNumber,
    Field::Country,
    Field::City,
    Field::Pan,
    Field::Aadhar,
];

impl Field {
    /// Number of fields in the schema.
    pub const COUNT: usize = 11;

    /// Returns all fields in schema order.
    pub fn all() -> &'static [Field] {
        ALL_FIELDS
    }

    /// Position of this field in the schema.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the record key (e.g. `firstName`).
    pub fn key(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::PhoneCode => "phoneCode",
            Field::PhoneNumber => "phoneNumber",
            Field::Country => "country",
            Field::City => "city",
            Field::Pan => "pan",
            Field::Aadhar => "aadhar",
        }
    }

    /// Returns the input label shown on the registration screen.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Username => "Username",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::PhoneCode => "Phone Code",
            Field::PhoneNumber => "Phone Number",
            Field::Country => "Country",
            Field::City => "City",
            Field::Pan => "PAN No.",
            Field::Aadhar => "Aadhar No.",
        }
    }

    /// Returns the key with its first letter uppercased (e.g. `FirstName`).
    ///
    /// Used as the row label on the confirmation screen.
    pub fn capitalized_key(self) -> String {
        let key = self.key();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Password => FieldKind::Secret,
            Field::PhoneCode | Field::Country | Field::City => FieldKind::Choice,
            _ => FieldKind::Text,
        }
    }

    /// The field whose value this field's validity depends on, if any.
    ///
    /// A change to the parent field resets this field to empty.
    pub fn depends_on(self) -> Option<Field> {
        match self {
            Field::City => Some(Field::Country),
            _ => None,
        }
    }

    /// Fields that declare a dependency on `self`.
    pub fn dependents(self) -> impl Iterator<Item = Field> {
        ALL_FIELDS
            .iter()
            .copied()
            .filter(move |f| f.depends_on() == Some(self))
    }

    /// Returns `false` for fields carried through without validation.
    pub fn is_validated(self) -> bool {
        self != Field::PhoneCode
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_FIELDS
            .iter()
            .copied()
            .find(|f| f.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[mutants::skip]
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
