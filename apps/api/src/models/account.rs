use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UnknownVariant;

/// Account role. Fixed at signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    PlacementOfficer,
    CompanyHr,
    Principal,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "STUDENT",
            Role::PlacementOfficer => "PLACEMENT_OFFICER",
            Role::CompanyHr => "COMPANY_HR",
            Role::Principal => "PRINCIPAL",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STUDENT" => Ok(Role::Student),
            "PLACEMENT_OFFICER" => Ok(Role::PlacementOfficer),
            "COMPANY_HR" => Ok(Role::CompanyHr),
            "PRINCIPAL" => Ok(Role::Principal),
            other => Err(UnknownVariant {
                kind: "role",
                value: other.to_string(),
            }),
        }
    }
}

/// A registered user. The password hash never leaves the process.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for `users`.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Public projection of an account, embedded in application views.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Role,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            role: account.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_string_forms_agree_with_serde() {
        for role in [
            Role::Student,
            Role::PlacementOfficer,
            Role::CompanyHr,
            Role::Principal,
        ] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let err = "ADMIN".parse::<Role>().unwrap_err();
        assert_eq!(err.to_string(), "unknown role 'ADMIN'");
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let account = Account {
            id: 1,
            email: "a@b.edu".to_string(),
            password_hash: "$2b$secret".to_string(),
            role: Role::Student,
            first_name: Some("Asha".to_string()),
            last_name: None,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&account).unwrap();
        assert!(value.get("passwordHash").is_none());
        assert_eq!(value["firstName"], "Asha");
        assert_eq!(value["role"], "STUDENT");
    }
}
