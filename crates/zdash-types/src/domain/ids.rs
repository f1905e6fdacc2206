use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a project inside a workspace
    ProjectId
);

string_id!(
    /// Identifier of a styleguide inside a workspace
    StyleguideId
);

string_id!(
    /// Identifier of the workspace (organization) that owns projects and styleguides
    OrganizationId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_transparently() {
        let id = StyleguideId::from("sg1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"sg1\"");

        let parsed: ProjectId = serde_json::from_str("\"p-42\"").unwrap();
        assert_eq!(parsed.as_str(), "p-42");
        assert_eq!(parsed.to_string(), "p-42");
    }
}
