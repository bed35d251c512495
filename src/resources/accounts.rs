/// Account list view.
use serde_json::Value;

use super::LIST_FORMATS;
use crate::render::{
    Capabilities, Column, OutputFormat, RenderError, Renderable,
    Row, TableView, TreeView, table, tree,
};
use crate::types::Account;

const COLUMNS: &[Column<Account>] = &[
    Column {
        title: "ID",
        value: |a| a.id.to_string(),
    },
    Column {
        title: "EMAIL",
        value: |a| a.email.clone(),
    },
    Column {
        title: "PLAN IDENTIFIER",
        value: |a| a.plan_identifier.clone(),
    },
    Column {
        title: "CREATED AT",
        value: |a| a.created_at.clone(),
    },
    Column {
        title: "UPDATED AT",
        value: |a| a.updated_at.clone(),
    },
];

/// `accounts list` response.
#[derive(Debug, Clone)]
pub struct AccountList(pub Vec<Account>);

impl TableView for AccountList {
    fn columns(&self) -> Vec<&'static str> {
        table::titles(COLUMNS)
    }

    fn rows(&self) -> Vec<Row> {
        table::rows(&self.0, COLUMNS)
    }
}

impl TreeView for AccountList {
    fn tree(&self) -> Result<Value, RenderError> {
        tree::to_tree(&self.0)
    }
}

impl Capabilities for AccountList {
    const TYPE_NAME: &'static str = "AccountList";
    const FORMATS: &'static [OutputFormat] = LIST_FORMATS;
}

impl Renderable for AccountList {
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
    use crate::render::{RenderRequest, render};

    fn accounts() -> AccountList {
        AccountList(vec![
            Account {
                id: 1,
                email: "a@x.com".to_owned(),
                plan_identifier: "teams-v1-monthly".to_owned(),
                created_at: "2023-01-01T00:00:00Z".to_owned(),
                updated_at: "2023-01-02T00:00:00Z".to_owned(),
            },
            Account {
                id: 2,
                email: "b@y.com".to_owned(),
                plan_identifier: "solo-v1-monthly".to_owned(),
                created_at: "2023-02-01T00:00:00Z".to_owned(),
                updated_at: "2023-02-02T00:00:00Z".to_owned(),
            },
        ])
    }

    fn run(format: &str, query: Option<&str>) -> String {
        let request = RenderRequest::parse(format, query).unwrap();
        String::from_utf8(render(&accounts(), &request).unwrap()).unwrap()
    }

    #[test]
    fn test_table_keeps_source_order() {
        let out = run("table", None);
        let ids: Vec<&str> = out
            .lines()
            .skip(1)
            .filter_map(|l| l.split_whitespace().next())
            .collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn test_json_query_emails() {
        assert_eq!(
            run("json", Some("[].email")),
            "[\n  \"a@x.com\",\n  \"b@y.com\"\n]\n"
        );
    }

    #[test]
    fn test_yaml_query_first_plan() {
        assert_eq!(run("yaml", Some("[0].plan_identifier")), "teams-v1-monthly\n");
    }
}
