//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Storage-assigned identifier, immutable once assigned
    pub id: i32,
    pub name: String,
    /// Age is optional; no range constraints apply
    pub age: Option<i32>,
}

impl User {
    /// Age rendered for CLI output, `-` when unset.
    pub fn display_age(&self) -> String {
        self.age.map_or_else(|| "-".to_string(), |a| a.to_string())
    }

    /// Render the user the way the CLI prints it: `id: name (age)`.
    pub fn display_line(&self) -> String {
        format!("{}: {} ({})", self.id, self.name, self.display_age())
    }
}

/// Field changes for the unified update operation.
///
/// A `None` field is left untouched. `age: Some(None)` clears the
/// stored age, which plain `Option<i32>` could not express.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub age: Option<Option<i32>>,
}

impl UserChanges {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }
}

/// User creation request with validation
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// User display name
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Alice")]
    pub name: String,
    /// Optional age
    #[schema(example = 30)]
    pub age: Option<i32>,
}

/// User update request with validation.
///
/// Absent fields keep their stored value. The HTTP surface cannot clear
/// `age`; use the CLI's `--clear-age` for that.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// New display name
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Alice")]
    pub name: Option<String>,
    /// New age
    #[schema(example = 31)]
    pub age: Option<i32>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            name: req.name,
            age: req.age.map(Some),
        }
    }
}

/// User response (client-facing shape)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: i32,
    /// User display name
    #[schema(example = "Alice")]
    pub name: String,
    /// Age, if set
    #[schema(example = 30)]
    pub age: Option<i32>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            age: user.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_line_renders_id_name_and_age() {
        let user = User {
            id: 1,
            name: "Alice".to_string(),
            age: Some(30),
        };
        assert_eq!(user.display_line(), "1: Alice (30)");
    }

    #[test]
    fn display_age_falls_back_to_dash_when_unset() {
        let user = User {
            id: 2,
            name: "Bob".to_string(),
            age: None,
        };
        assert_eq!(user.display_age(), "-");
        assert_eq!(user.display_line(), "2: Bob (-)");
    }
}
