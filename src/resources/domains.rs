/// Domain list and single-domain views.
use serde_json::Value;

use super::{ITEM_FORMATS, LIST_FORMATS, opt_id, opt_str};
use crate::render::table::yes_no;
use crate::render::{
    Capabilities, Column, Field, OutputFormat, RenderError, Renderable,
    Row, TableView, TextView, TreeView, table, text, tree,
};
use crate::types::Domain;

const COLUMNS: &[Column<Domain>] = &[
    Column {
        title: "ID",
        value: |d| d.id.to_string(),
    },
    Column {
        title: "ACCOUNT ID",
        value: |d| d.account_id.to_string(),
    },
    Column {
        title: "REGISTRANT ID",
        value: |d| opt_id(d.registrant_id),
    },
    Column {
        title: "NAME",
        value: |d| d.name.clone(),
    },
    Column {
        title: "UNICODE NAME",
        value: |d| d.unicode_name.clone(),
    },
    Column {
        title: "TOKEN",
        value: |d| opt_str(d.token.as_ref()),
    },
    Column {
        title: "STATE",
        value: |d| d.state.clone(),
    },
    Column {
        title: "AUTO RENEW",
        value: |d| yes_no(d.auto_renew),
    },
    Column {
        title: "PRIVATE WHOIS",
        value: |d| yes_no(d.private_whois),
    },
    Column {
        title: "EXPIRES AT",
        value: |d| opt_str(d.expires_at.as_ref()),
    },
    Column {
        title: "CREATED AT",
        value: |d| d.created_at.clone(),
    },
    Column {
        title: "UPDATED AT",
        value: |d| d.updated_at.clone(),
    },
];

const FIELDS: &[Field<Domain>] = &[
    Field {
        label: "ID",
        value: |d| d.id.to_string(),
    },
    Field {
        label: "Account ID",
        value: |d| d.account_id.to_string(),
    },
    Field {
        label: "Registrant ID",
        value: |d| opt_id(d.registrant_id),
    },
    Field {
        label: "Name",
        value: |d| d.name.clone(),
    },
    Field {
        label: "Unicode name",
        value: |d| d.unicode_name.clone(),
    },
    Field {
        label: "Token",
        value: |d| opt_str(d.token.as_ref()),
    },
    Field {
        label: "State",
        value: |d| d.state.clone(),
    },
    Field {
        label: "Auto renew",
        value: |d| yes_no(d.auto_renew),
    },
    Field {
        label: "Private whois",
        value: |d| yes_no(d.private_whois),
    },
    Field {
        label: "Expires at",
        value: |d| opt_str(d.expires_at.as_ref()),
    },
    Field {
        label: "Created at",
        value: |d| d.created_at.clone(),
    },
    Field {
        label: "Updated at",
        value: |d| d.updated_at.clone(),
    },
];

/// `domains list` response.
#[derive(Debug, Clone)]
pub struct DomainList(pub Vec<Domain>);

impl TableView for DomainList {
    fn columns(&self) -> Vec<&'static str> {
        table::titles(COLUMNS)
    }

    fn rows(&self) -> Vec<Row> {
        table::rows(&self.0, COLUMNS)
    }
}

impl TreeView for DomainList {
    fn tree(&self) -> Result<Value, RenderError> {
        tree::to_tree(&self.0)
    }
}

impl Capabilities for DomainList {
    const TYPE_NAME: &'static str = "DomainList";
    const FORMATS: &'static [OutputFormat] = LIST_FORMATS;
}

impl Renderable for DomainList {
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

/// `domains get` response.
#[derive(Debug, Clone)]
pub struct DomainItem(pub Domain);

impl TextView for DomainItem {
    fn fields(&self) -> Vec<(String, String)> {
        text::pairs(&self.0, FIELDS)
    }
}

impl TreeView for DomainItem {
    fn tree(&self) -> Result<Value, RenderError> {
        tree::to_tree(&self.0)
    }
}

impl Capabilities for DomainItem {
    const TYPE_NAME: &'static str = "DomainItem";
    const FORMATS: &'static [OutputFormat] = ITEM_FORMATS;
}

impl Renderable for DomainItem {
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
    use crate::render::{OutputFormat, RenderRequest, render};

    fn domain(id: i64, name: &str) -> Domain {
        Domain {
            id,
            account_id: 1010,
            registrant_id: Some(7),
            name: name.to_owned(),
            unicode_name: name.to_owned(),
            token: None,
            state: "registered".to_owned(),
            auto_renew: true,
            private_whois: false,
            expires_at: Some("2027-01-16T22:08:07Z".to_owned()),
            created_at: "2024-01-16T16:08:50Z".to_owned(),
            updated_at: "2024-01-16T22:08:07Z".to_owned(),
        }
    }

    fn run(value: &dyn Renderable, format: OutputFormat) -> String {
        String::from_utf8(render(value, &RenderRequest::new(format)).unwrap()).unwrap()
    }

    #[test]
    fn test_list_table() {
        let list = DomainList(vec![domain(1, "example.com"), domain(2, "example.org")]);
        let out = run(&list, OutputFormat::Table);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID  ACCOUNT ID  REGISTRANT ID  NAME"));
        assert!(lines[1].contains("example.com"));
        assert!(lines[1].contains("yes"));
        assert!(lines[2].contains("example.org"));
    }

    #[test]
    fn test_list_formats() {
        assert_eq!(
            DomainList::FORMATS,
            &[OutputFormat::Table, OutputFormat::Json, OutputFormat::Yaml]
        );
        assert_eq!(
            DomainItem::FORMATS,
            &[OutputFormat::Text, OutputFormat::Json, OutputFormat::Yaml]
        );
    }

    #[test]
    fn test_item_text() {
        let out = run(&DomainItem(domain(1, "example.com")), OutputFormat::Text);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), FIELDS.len());
        assert_eq!(lines[0], "ID:                 1");
        assert_eq!(lines[5].trim_end(), "Token:");
        assert_eq!(lines[7], "Auto renew:         yes");
    }

    #[test]
    fn test_item_json_is_data_only() {
        let out = run(&DomainItem(domain(1, "example.com")), OutputFormat::Json);
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["name"], "example.com");
        assert!(v.get("token").is_none());
    }

    #[test]
    fn test_item_has_no_table() {
        let err = render(
            &DomainItem(domain(1, "example.com")),
            &RenderRequest::new(OutputFormat::Table),
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::CapabilityMissing { .. }));
    }
}
