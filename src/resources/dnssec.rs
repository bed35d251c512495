/// DNSSEC status view.
use serde_json::Value;

use super::{ITEM_FORMATS, opt_str};
use crate::render::table::yes_no;
use crate::render::{
    Capabilities, Field, OutputFormat, RenderError, Renderable, TextView, TreeView, text, tree,
};
use crate::types::Dnssec;

const FIELDS: &[Field<Dnssec>] = &[
    Field {
        label: "Enabled",
        value: |d| yes_no(d.enabled),
    },
    Field {
        label: "Created at",
        value: |d| opt_str(d.created_at.as_ref()),
    },
    Field {
        label: "Updated at",
        value: |d| opt_str(d.updated_at.as_ref()),
    },
];

/// `dnssec status` response.
#[derive(Debug, Clone)]
pub struct DnssecStatus(pub Dnssec);

impl TextView for DnssecStatus {
    fn fields(&self) -> Vec<(String, String)> {
        text::pairs(&self.0, FIELDS)
    }
}

impl TreeView for DnssecStatus {
    fn tree(&self) -> Result<Value, RenderError> {
        tree::to_tree(&self.0)
    }
}

impl Capabilities for DnssecStatus {
    const TYPE_NAME: &'static str = "DnssecStatus";
    const FORMATS: &'static [OutputFormat] = ITEM_FORMATS;
}

impl Renderable for DnssecStatus {
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
    use crate::render::{RenderRequest, render};

    #[test]
    fn test_text() {
        let status = DnssecStatus(Dnssec {
            enabled: true,
            created_at: Some("2017-03-03T13:49:58Z".to_owned()),
            updated_at: Some("2017-03-03T13:49:58Z".to_owned()),
        });
        let out = render(&status, &RenderRequest::parse("text", None).unwrap()).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Enabled:            yes\n"));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_query_enabled_flag() {
        let status = DnssecStatus(Dnssec {
            enabled: false,
            ..Dnssec::default()
        });
        let out = render(&status, &RenderRequest::parse("json", Some("enabled")).unwrap()).unwrap();
        assert_eq!(out, b"false\n");
    }
}
