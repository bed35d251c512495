/// Delegation signer record views.
///
/// Digests and public keys are long base64/hex strings, so both views cut
/// them short; JSON and YAML keep the full values.
use serde_json::Value;

use super::{ITEM_FORMATS, LIST_FORMATS, opt_str};
use crate::render::table::truncate;
use crate::render::{
    Capabilities, Column, Field, OutputFormat, RenderError, Renderable,
    Row, TableView, TextView, TreeView, table, text, tree,
};
use crate::types::DelegationSignerRecord;

/// Characters of digest/public key kept in the table.
const TABLE_KEY_LEN: usize = 10;
/// Characters of digest/public key kept in the text view.
const TEXT_KEY_LEN: usize = 8;

const COLUMNS: &[Column<DelegationSignerRecord>] = &[
    Column {
        title: "ID",
        value: |r| r.id.to_string(),
    },
    Column {
        title: "DOMAIN ID",
        value: |r| r.domain_id.to_string(),
    },
    Column {
        title: "ALGORITHM",
        value: |r| r.algorithm.clone(),
    },
    Column {
        title: "DIGEST",
        value: |r| truncate(&opt_str(r.digest.as_ref()), TABLE_KEY_LEN),
    },
    Column {
        title: "DIGEST TYPE",
        value: |r| opt_str(r.digest_type.as_ref()),
    },
    Column {
        title: "KEYTAG",
        value: |r| opt_str(r.keytag.as_ref()),
    },
    Column {
        title: "PUBLIC KEY",
        value: |r| truncate(&opt_str(r.public_key.as_ref()), TABLE_KEY_LEN),
    },
    Column {
        title: "CREATED AT",
        value: |r| r.created_at.clone(),
    },
    Column {
        title: "UPDATED AT",
        value: |r| r.updated_at.clone(),
    },
];

const FIELDS: &[Field<DelegationSignerRecord>] = &[
    Field {
        label: "ID",
        value: |r| r.id.to_string(),
    },
    Field {
        label: "Domain ID",
        value: |r| r.domain_id.to_string(),
    },
    Field {
        label: "Algorithm",
        value: |r| r.algorithm.clone(),
    },
    Field {
        label: "Digest",
        value: |r| truncate(&opt_str(r.digest.as_ref()), TEXT_KEY_LEN),
    },
    Field {
        label: "Digest type",
        value: |r| opt_str(r.digest_type.as_ref()),
    },
    Field {
        label: "Keytag",
        value: |r| opt_str(r.keytag.as_ref()),
    },
    Field {
        label: "Public key",
        value: |r| truncate(&opt_str(r.public_key.as_ref()), TEXT_KEY_LEN),
    },
    Field {
        label: "Created at",
        value: |r| r.created_at.clone(),
    },
    Field {
        label: "Updated at",
        value: |r| r.updated_at.clone(),
    },
];

/// `dsr list` response.
#[derive(Debug, Clone)]
pub struct DsrList(pub Vec<DelegationSignerRecord>);

impl TableView for DsrList {
    fn columns(&self) -> Vec<&'static str> {
        table::titles(COLUMNS)
    }

    fn rows(&self) -> Vec<Row> {
        table::rows(&self.0, COLUMNS)
    }
}

impl TreeView for DsrList {
    fn tree(&self) -> Result<Value, RenderError> {
        tree::to_tree(&self.0)
    }
}

impl Capabilities for DsrList {
    const TYPE_NAME: &'static str = "DsrList";
    const FORMATS: &'static [OutputFormat] = LIST_FORMATS;
}

impl Renderable for DsrList {
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

/// `dsr get` response.
#[derive(Debug, Clone)]
pub struct DsrItem(pub DelegationSignerRecord);

impl TextView for DsrItem {
    fn fields(&self) -> Vec<(String, String)> {
        text::pairs(&self.0, FIELDS)
    }
}

impl TreeView for DsrItem {
    fn tree(&self) -> Result<Value, RenderError> {
        tree::to_tree(&self.0)
    }
}

impl Capabilities for DsrItem {
    const TYPE_NAME: &'static str = "DsrItem";
    const FORMATS: &'static [OutputFormat] = ITEM_FORMATS;
}

impl Renderable for DsrItem {
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
