//! Invited company value object.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{CompanyId, EmailAddress, ValidationError};

/// Company details as entered by the requester, before ids are assigned.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompanyInput {
    pub name: String,
    pub email: String,
}

impl CompanyInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A company invited to submit an offer.
///
/// Embedded in its request; it has no lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    id: CompanyId,
    name: String,
    email: EmailAddress,
}

impl Company {
    /// Validates one entry and assigns it a fresh id.
    pub fn new(input: &CompanyInput) -> Result<Self, ValidationError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("company_name"));
        }
        let email = EmailAddress::parse("company_email", &input.email)?;

        Ok(Self {
            id: CompanyId::generate(),
            name: name.to_string(),
            email,
        })
    }

    /// Validates the whole invitation list.
    ///
    /// The list must be non-empty and names must be unique (ignoring case).
    pub fn new_list(inputs: &[CompanyInput]) -> Result<Vec<Self>, ValidationError> {
        if inputs.is_empty() {
            return Err(ValidationError::empty_field("companies"));
        }

        let mut seen = HashSet::new();
        let mut companies = Vec::with_capacity(inputs.len());
        for input in inputs {
            let company = Self::new(input)?;
            if !seen.insert(company.name.to_lowercase()) {
                return Err(ValidationError::duplicate("companies", company.name));
            }
            companies.push(company);
        }
        Ok(companies)
    }

    pub fn id(&self) -> &CompanyId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_company_with_fresh_id() {
        let a = Company::new(&CompanyInput::new("Acme", "a@acme.com")).unwrap();
        let b = Company::new(&CompanyInput::new("Acme", "a@acme.com")).unwrap();
        assert_eq!(a.name(), "Acme");
        assert_eq!(a.email().as_str(), "a@acme.com");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn rejects_blank_name() {
        let err = Company::new(&CompanyInput::new("  ", "a@acme.com")).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("company_name"));
    }

    #[test]
    fn rejects_invalid_email() {
        let err = Company::new(&CompanyInput::new("Acme", "acme")).unwrap_err();
        assert_eq!(err.field(), "company_email");
    }

    #[test]
    fn list_must_not_be_empty() {
        assert_eq!(
            Company::new_list(&[]),
            Err(ValidationError::empty_field("companies"))
        );
    }

    #[test]
    fn list_rejects_duplicate_names() {
        let inputs = [
            CompanyInput::new("Acme", "a@acme.com"),
            CompanyInput::new("acme ", "b@acme.com"),
        ];
        assert!(matches!(
            Company::new_list(&inputs),
            Err(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn list_preserves_order() {
        let inputs = [
            CompanyInput::new("Acme", "a@acme.com"),
            CompanyInput::new("Globex", "bids@globex.com"),
        ];
        let names: Vec<_> = Company::new_list(&inputs)
            .unwrap()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(names, vec!["Acme", "Globex"]);
    }
}
