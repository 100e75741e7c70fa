//! Driver Domain Model
//!
//! Represents a registered driver, identified by a national identification number.

use std::num::ParseIntError;
use std::str::FromStr;

use chrono::NaiveDate;

/// Newtype wrapper for the driver's national identification number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DriverId(i64);

impl DriverId {
    /// Create a DriverId from a raw number
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the underlying number
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for DriverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for DriverId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for DriverId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// What an explicit `null` in an update payload means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullPolicy {
    /// Null leaves the stored value untouched
    #[default]
    Ignore,
    /// Null clears the stored value
    Clear,
}

/// Tri-state value of a single field in a partial update
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldPatch<T> {
    /// The field was not part of the payload
    #[default]
    Missing,
    /// The field was sent as an explicit null
    Null,
    /// The field was sent with a value
    Value(T),
}

impl<T> FieldPatch<T> {
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl<T> From<Option<T>> for FieldPatch<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

/// Data required to create a new Driver
#[derive(Debug, Clone, Default)]
pub struct CreateDriverData {
    pub id: i64,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub licence_number: Option<String>,
}

/// Partial update of a Driver. There is no id field: the key is never patched.
#[derive(Debug, Clone, Default)]
pub struct DriverPatch {
    pub name: FieldPatch<String>,
    pub surname: FieldPatch<String>,
    pub birth_date: FieldPatch<NaiveDate>,
    pub phone_number: FieldPatch<String>,
    pub email: FieldPatch<String>,
    pub licence_number: FieldPatch<String>,
}

/// A single staged column assignment. `None` clears the column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverChange {
    Name(Option<String>),
    Surname(Option<String>),
    BirthDate(Option<NaiveDate>),
    PhoneNumber(Option<String>),
    Email(Option<String>),
    LicenceNumber(Option<String>),
}

impl DriverChange {
    /// Column name in the `drivers` table
    #[must_use]
    pub fn column(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Surname(_) => "surname",
            Self::BirthDate(_) => "birth_date",
            Self::PhoneNumber(_) => "phone_number",
            Self::Email(_) => "email",
            Self::LicenceNumber(_) => "licence_number",
        }
    }
}

/// Ordered set of staged changes produced by [`Driver::diff`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverChanges(Vec<DriverChange>);

impl DriverChanges {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DriverChange> {
        self.0.iter()
    }

    /// Names of the changed columns, in staging order
    #[must_use]
    pub fn columns(&self) -> Vec<&'static str> {
        self.0.iter().map(DriverChange::column).collect()
    }
}

impl FromIterator<DriverChange> for DriverChanges {
    fn from_iter<I: IntoIterator<Item = DriverChange>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DriverChanges {
    type Item = &'a DriverChange;
    type IntoIter = std::slice::Iter<'a, DriverChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Decides whether one field's patch produces a change against its stored value
fn stage<T>(current: Option<&T>, patch: &FieldPatch<T>, nulls: NullPolicy) -> Option<Option<T>>
where
    T: PartialEq + Clone,
{
    match patch {
        FieldPatch::Missing => None,
        FieldPatch::Value(value) if current != Some(value) => Some(Some(value.clone())),
        FieldPatch::Value(_) => None,
        FieldPatch::Null if nulls == NullPolicy::Clear && current.is_some() => Some(None),
        FieldPatch::Null => None,
    }
}

/// Driver domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    id: DriverId,
    name: Option<String>,
    surname: Option<String>,
    birth_date: Option<NaiveDate>,
    phone_number: Option<String>,
    email: Option<String>,
    licence_number: Option<String>,
}

impl Driver {
    /// Create a new Driver from creation data
    #[must_use]
    pub fn new(data: CreateDriverData) -> Self {
        Self {
            id: DriverId::new(data.id),
            name: data.name,
            surname: data.surname,
            birth_date: data.birth_date,
            phone_number: data.phone_number,
            email: data.email,
            licence_number: data.licence_number,
        }
    }

    /// Restore a Driver from persisted data
    #[must_use]
    pub fn restore(
        id: DriverId,
        name: Option<String>,
        surname: Option<String>,
        birth_date: Option<NaiveDate>,
        phone_number: Option<String>,
        email: Option<String>,
        licence_number: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            surname,
            birth_date,
            phone_number,
            email,
            licence_number,
        }
    }

    /// Compare a patch against this driver and stage the fields that differ
    #[must_use]
    pub fn diff(&self, patch: &DriverPatch, nulls: NullPolicy) -> DriverChanges {
        let mut changes = Vec::new();

        if let Some(v) = stage(self.name.as_ref(), &patch.name, nulls) {
            changes.push(DriverChange::Name(v));
        }
        if let Some(v) = stage(self.surname.as_ref(), &patch.surname, nulls) {
            changes.push(DriverChange::Surname(v));
        }
        if let Some(v) = stage(self.birth_date.as_ref(), &patch.birth_date, nulls) {
            changes.push(DriverChange::BirthDate(v));
        }
        if let Some(v) = stage(self.phone_number.as_ref(), &patch.phone_number, nulls) {
            changes.push(DriverChange::PhoneNumber(v));
        }
        if let Some(v) = stage(self.email.as_ref(), &patch.email, nulls) {
            changes.push(DriverChange::Email(v));
        }
        if let Some(v) = stage(self.licence_number.as_ref(), &patch.licence_number, nulls) {
            changes.push(DriverChange::LicenceNumber(v));
        }

        DriverChanges(changes)
    }

    /// Apply staged changes, returning a new instance. The id is never touched.
    #[must_use]
    pub fn with_changes(mut self, changes: &DriverChanges) -> Self {
        for change in changes {
            match change.clone() {
                DriverChange::Name(v) => self.name = v,
                DriverChange::Surname(v) => self.surname = v,
                DriverChange::BirthDate(v) => self.birth_date = v,
                DriverChange::PhoneNumber(v) => self.phone_number = v,
                DriverChange::Email(v) => self.email = v,
                DriverChange::LicenceNumber(v) => self.licence_number = v,
            }
        }
        self
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> DriverId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn surname(&self) -> Option<&str> {
        self.surname.as_deref()
    }

    #[must_use]
    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    #[must_use]
    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn licence_number(&self) -> Option<&str> {
        self.licence_number.as_deref()
    }
}
