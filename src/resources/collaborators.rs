/// Domain collaborator list view.
use serde_json::Value;

use super::{LIST_FORMATS, opt_id, opt_str};
use crate::render::table::yes_no;
use crate::render::{
    Capabilities, Column, OutputFormat, RenderError, Renderable,
    Row, TableView, TreeView, table, tree,
};
use crate::types::Collaborator;

const COLUMNS: &[Column<Collaborator>] = &[
    Column {
        title: "ID",
        value: |c| c.id.to_string(),
    },
    Column {
        title: "DOMAIN ID",
        value: |c| c.domain_id.to_string(),
    },
    Column {
        title: "DOMAIN NAME",
        value: |c| c.domain_name.clone(),
    },
    Column {
        title: "USER ID",
        value: |c| opt_id(c.user_id),
    },
    Column {
        title: "USER EMAIL",
        value: |c| c.user_email.clone(),
    },
    Column {
        title: "INVITATION",
        value: |c| yes_no(c.invitation),
    },
    Column {
        title: "CREATED AT",
        value: |c| c.created_at.clone(),
    },
    Column {
        title: "UPDATED AT",
        value: |c| c.updated_at.clone(),
    },
    Column {
        title: "ACCEPTED AT",
        value: |c| opt_str(c.accepted_at.as_ref()),
    },
];

/// `collaborators list` response.
#[derive(Debug, Clone)]
pub struct CollaboratorList(pub Vec<Collaborator>);

impl TableView for CollaboratorList {
    fn columns(&self) -> Vec<&'static str> {
        table::titles(COLUMNS)
    }

    fn rows(&self) -> Vec<Row> {
        table::rows(&self.0, COLUMNS)
    }
}

impl TreeView for CollaboratorList {
    fn tree(&self) -> Result<Value, RenderError> {
        tree::to_tree(&self.0)
    }
}

impl Capabilities for CollaboratorList {
    const TYPE_NAME: &'static str = "CollaboratorList";
    const FORMATS: &'static [OutputFormat] = LIST_FORMATS;
}

impl Renderable for CollaboratorList {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn as_table(&self) -> Option<&dyn TableView> {
        Some(self)
    }

    fn as_tree(&self) -> Option<&dyn TreeView> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_invitation_has_empty_user_fields() {
        let list = CollaboratorList(vec![Collaborator {
            id: 100,
            domain_id: 1,
            domain_name: "example.com".to_owned(),
            user_id: None,
            user_email: "invitee@example.com".to_owned(),
            invitation: true,
            created_at: "2024-01-01T00:00:00Z".to_owned(),
            updated_at: "2024-01-01T00:00:00Z".to_owned(),
            accepted_at: None,
        }]);
        let rows = list.rows();
        assert_eq!(rows[0]["USER ID"], "");
        assert_eq!(rows[0]["INVITATION"], "yes");
        assert_eq!(rows[0]["ACCEPTED AT"], "");
        assert_eq!(list.columns().len(), rows[0].len());
    }
}
