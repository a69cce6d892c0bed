use serde::{Deserialize, Serialize};

/// Interview tracks offered by the question bank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SoftwareEngineer,
    DataScientist,
    ProductManager,
    MarketingManager,
    SalesRepresentative,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::SoftwareEngineer,
        Role::DataScientist,
        Role::ProductManager,
        Role::MarketingManager,
        Role::SalesRepresentative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SoftwareEngineer => "software_engineer",
            Role::DataScientist => "data_scientist",
            Role::ProductManager => "product_manager",
            Role::MarketingManager => "marketing_manager",
            Role::SalesRepresentative => "sales_representative",
        }
    }

    /// Lowercase phrase used inside feedback sentences ("software engineer").
    pub fn label(&self) -> &'static str {
        match self {
            Role::SoftwareEngineer => "software engineer",
            Role::DataScientist => "data scientist",
            Role::ProductManager => "product manager",
            Role::MarketingManager => "marketing manager",
            Role::SalesRepresentative => "sales representative",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::SoftwareEngineer => "Software Engineer",
            Role::DataScientist => "Data Scientist",
            Role::ProductManager => "Product Manager",
            Role::MarketingManager => "Marketing Manager",
            Role::SalesRepresentative => "Sales Representative",
        }
    }

    pub fn parse(raw: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.as_str() == raw)
    }
}

/// Result of scoring one answer. Returned to the caller, never stored as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Evaluation {
    pub score: f64, // 1.0 – 10.0, one decimal
    pub feedback: String,
    pub is_satisfactory: bool,
    pub specific_issues: Vec<String>,
    pub improvement_suggestions: Vec<String>,
}

/// An accepted answer kept on the session for the final summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnsweredQuestion {
    pub question: String,
    pub answer: String,
    pub score: f64,
    pub feedback: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_role() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_display_forms() {
        assert_eq!(Role::parse("astronaut"), None);
        assert_eq!(Role::parse("Software Engineer"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_role_serializes_snake_case() {
        let json = serde_json::to_string(&Role::SalesRepresentative).unwrap();
        assert_eq!(json, "\"sales_representative\"");
    }
}
