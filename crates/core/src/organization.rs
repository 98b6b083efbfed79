//! Legal form of an organization.

use crate::error::CoreError;

/// Individual entrepreneur.
pub const ORG_TYPE_IE: &str = "IE";

/// Limited liability company.
pub const ORG_TYPE_LLC: &str = "LLC";

/// Joint-stock company.
pub const ORG_TYPE_JSC: &str = "JSC";

/// All valid organization type values.
pub const VALID_ORG_TYPES: &[&str] = &[ORG_TYPE_IE, ORG_TYPE_LLC, ORG_TYPE_JSC];

/// Legal form stored in `organization.type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganizationType {
    Ie,
    Llc,
    Jsc,
}

impl OrganizationType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ie => ORG_TYPE_IE,
            Self::Llc => ORG_TYPE_LLC,
            Self::Jsc => ORG_TYPE_JSC,
        }
    }

    /// Parse a stored or submitted value.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            ORG_TYPE_IE => Ok(Self::Ie),
            ORG_TYPE_LLC => Ok(Self::Llc),
            ORG_TYPE_JSC => Ok(Self::Jsc),
            other => Err(CoreError::Validation(format!(
                "Invalid organization type '{other}'. Must be one of: {}",
                VALID_ORG_TYPES.join(", ")
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_types_accepted() {
        assert_eq!(OrganizationType::parse("IE").unwrap(), OrganizationType::Ie);
        assert_eq!(OrganizationType::parse("LLC").unwrap(), OrganizationType::Llc);
        assert_eq!(OrganizationType::parse("JSC").unwrap(), OrganizationType::Jsc);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let err = OrganizationType::parse("GmbH").unwrap_err();
        assert!(err.to_string().contains("Invalid organization type 'GmbH'"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(OrganizationType::parse("llc").is_err());
    }

    #[test]
    fn test_as_str_matches_constants() {
        for value in VALID_ORG_TYPES {
            assert_eq!(OrganizationType::parse(value).unwrap().as_str(), *value);
        }
    }
}
