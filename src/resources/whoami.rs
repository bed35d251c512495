/// Identity view for `whoami`: the user block, the account block, or both.
use serde_json::Value;

use super::ITEM_FORMATS;
use crate::render::{Capabilities, OutputFormat, RenderError, Renderable, TextView, TreeView, tree};
use crate::types::Identity;

/// `whoami` response.
#[derive(Debug, Clone)]
pub struct Whoami(pub Identity);

impl TextView for Whoami {
    fn fields(&self) -> Vec<(String, String)> {
        let mut fields = Vec::new();

        if let Some(user) = &self.0.user {
            fields.push(("User".to_owned(), String::new()));
            fields.push(("  ID".to_owned(), user.id.to_string()));
            fields.push(("  Email".to_owned(), user.email.clone()));
        }

        if let Some(account) = &self.0.account {
            fields.push(("Account".to_owned(), String::new()));
            fields.push(("  ID".to_owned(), account.id.to_string()));
            fields.push(("  Email".to_owned(), account.email.clone()));
            fields.push((
                "  Plan identifier".to_owned(),
                account.plan_identifier.clone(),
            ));
            fields.push(("  Created at".to_owned(), account.created_at.clone()));
            fields.push(("  Updated at".to_owned(), account.updated_at.clone()));
        }

        fields
    }
}

impl TreeView for Whoami {
    fn tree(&self) -> Result<Value, RenderError> {
        tree::to_tree(&self.0)
    }
}

impl Capabilities for Whoami {
    const TYPE_NAME: &'static str = "Whoami";
    const FORMATS: &'static [OutputFormat] = ITEM_FORMATS;
}

impl Renderable for Whoami {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn as_text(&self) -> Option<&dyn TextView> {
        Some(self)
    }

    fn as_tree(&self) -> Option<&dyn TreeView> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Account, User};

    fn account() -> Account {
        Account {
            id: 1,
            email: "ops@example.com".to_owned(),
            plan_identifier: "teams-v1-monthly".to_owned(),
            created_at: "2023-01-01T00:00:00Z".to_owned(),
            updated_at: "2023-01-02T00:00:00Z".to_owned(),
        }
    }

    #[test]
    fn test_account_only() {
        let fields = Whoami(Identity {
            user: None,
            account: Some(account()),
        })
        .fields();
        assert_eq!(fields[0].0, "Account");
        assert_eq!(fields.len(), 6);
    }

    #[test]
    fn test_user_and_account() {
        let fields = Whoami(Identity {
            user: Some(User {
                id: 9,
                email: "me@example.com".to_owned(),
                ..User::default()
            }),
            account: Some(account()),
        })
        .fields();
        let labels: Vec<&str> = fields.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels[0], "User");
        assert_eq!(labels[3], "Account");
        assert_eq!(fields.len(), 9);
    }

    #[test]
    fn test_empty_identity_renders_nothing() {
        assert!(Whoami(Identity::default()).fields().is_empty());
    }

    #[test]
    fn test_tree_omits_absent_blocks() {
        let tree = Whoami(Identity {
            user: None,
            account: Some(account()),
        })
        .tree()
        .unwrap();
        assert!(tree.get("user").is_none());
        assert_eq!(tree["account"]["id"], 1);
    }

    #[test]
    fn test_yaml_omits_absent_user() {
        use crate::render::{OutputFormat, RenderRequest, render};

        let whoami = Whoami(Identity {
            user: None,
            account: Some(account()),
        });
        let out = render(&whoami, &RenderRequest::new(OutputFormat::Yaml)).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("account:\n"));
        assert!(!out.contains("user"));
    }
}
