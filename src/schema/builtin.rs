//! Built-in sign-up rule sets
//!
//! Two revisions of the sign-up form exist: the standard one with a
//! `country` field and an earlier one without it. Field order is the
//! on-screen order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::SchemaResult;
use super::types::{Check, FieldDef, FormSchema};

/// Field names of the built-in schemas
pub mod fields {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const AGE: &str = "age";
    pub const PASSWORD1: &str = "password1";
    pub const PASSWORD2: &str = "password2";
    pub const GENDER: &str = "gender";
    pub const COUNTRY: &str = "country";
    pub const TERMS: &str = "terms";
}

const EMAIL_SHAPE: &str = r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$";

/// Which built-in rule set to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaVariant {
    /// All fields including `country`
    #[default]
    Standard,
    /// Same rules without `country`
    NoCountry,
}

impl SchemaVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaVariant::Standard => "standard",
            SchemaVariant::NoCountry => "no_country",
        }
    }

    /// Builds the rule set for this variant
    pub fn schema(&self) -> SchemaResult<FormSchema> {
        let mut list = vec![name()?, email()?, age(), password1()?, password2(), gender()];
        if *self == SchemaVariant::Standard {
            list.push(country());
        }
        list.push(terms());
        FormSchema::new(self.as_str(), list)
    }
}

impl fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SchemaVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(SchemaVariant::Standard),
            "no_country" => Ok(SchemaVariant::NoCountry),
            other => Err(format!(
                "unknown schema variant '{}', expected 'standard' or 'no_country'",
                other
            )),
        }
    }
}

fn name() -> SchemaResult<FieldDef> {
    Ok(FieldDef::text(fields::NAME)
        .rule(Check::Required, "Name is required")
        .rule(Check::pattern("^[A-Z]")?, "Name must start with a capital letter"))
}

fn email() -> SchemaResult<FieldDef> {
    Ok(FieldDef::text(fields::EMAIL)
        .rule(Check::Required, "Email is required")
        .rule(Check::pattern(EMAIL_SHAPE)?, "Invalid email address"))
}

fn age() -> FieldDef {
    FieldDef::number(fields::AGE)
        .rule(Check::Required, "Age is required")
        .rule(Check::Number, "Age must be a number")
        .rule(Check::Positive, "Age must be a positive number")
        .rule(Check::Integer, "Age must be an integer")
}

fn password1() -> SchemaResult<FieldDef> {
    Ok(FieldDef::text(fields::PASSWORD1)
        .rule(Check::Required, "Password is required")
        .rule(
            Check::MinLength { min: 8 },
            "Weak password: password must be at least 8 characters long",
        )
        .rule(
            Check::pattern("[A-Z]")?,
            "Weak password: password must contain at least one uppercase letter",
        )
        .rule(
            Check::pattern("[a-z]")?,
            "Weak password: password must contain at least one lowercase letter",
        )
        .rule(
            Check::pattern("[0-9]")?,
            "Weak password: password must contain at least one number",
        )
        .rule(
            Check::pattern("[@$!%*?&#]")?,
            "Weak password: password must contain at least one special character @$!%*?&#",
        ))
}

fn password2() -> FieldDef {
    FieldDef::text(fields::PASSWORD2)
        .rule(Check::Required, "Repeat your password")
        .rule(Check::matches(fields::PASSWORD1), "Passwords must match")
}

fn gender() -> FieldDef {
    FieldDef::text(fields::GENDER).rule(Check::Required, "Gender is required")
}

fn country() -> FieldDef {
    FieldDef::text(fields::COUNTRY).rule(Check::Required, "Country is required")
}

fn terms() -> FieldDef {
    FieldDef::flag(fields::TERMS).rule(Check::Accepted, "You must accept the Terms and Conditions")
}
