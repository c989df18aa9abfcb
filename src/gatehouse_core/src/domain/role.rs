use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::user::UserError;

/// Which portal an account belongs to. Fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Intern,
    Company,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Intern => "intern",
            Role::Company => "company",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intern" => Ok(Role::Intern),
            "company" => Ok(Role::Company),
            other => Err(UserError::InvalidRole(format!(
                "\"{}\" is not a valid choice",
                other
            ))),
        }
    }
}
