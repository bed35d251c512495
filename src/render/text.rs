/// Key/value rendering for single-item views.
use std::fmt::Write;

/// Width of the label field, colon included.
pub const LABEL_WIDTH: usize = 20;

/// A field definition: label plus how to extract the value from an item.
pub struct Field<T> {
    pub label: &'static str,
    pub value: fn(&T) -> String,
}

/// Values that can be rendered as `Label:  value` lines.
pub trait TextView {
    /// Ordered `(label, value)` pairs.
    fn fields(&self) -> Vec<(String, String)>;
}

/// Evaluate a field set against one item.
#[must_use]
pub fn pairs<T>(item: &T, fields: &[Field<T>]) -> Vec<(String, String)> {
    fields
        .iter()
        .map(|f| (f.label.to_owned(), (f.value)(item)))
        .collect()
}

/// Render a text view, one left-justified label per line.
#[must_use]
pub fn write_text(view: &dyn TextView) -> String {
    let mut out = String::new();
    for (label, value) in view.fields() {
        let label = format!("{label}:");
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{label:<width$}{value}", width = LABEL_WIDTH);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item;

    impl TextView for Item {
        fn fields(&self) -> Vec<(String, String)> {
            vec![
                ("ID".to_owned(), "1".to_owned()),
                ("Unicode name".to_owned(), "example.com".to_owned()),
            ]
        }
    }

    #[test]
    fn test_labels_are_left_justified() {
        let out = write_text(&Item);
        assert_eq!(
            out,
            "ID:                 1\nUnicode name:       example.com\n"
        );
    }

    #[test]
    fn test_long_label_is_not_cut() {
        struct Long;
        impl TextView for Long {
            fn fields(&self) -> Vec<(String, String)> {
                vec![("A label longer than twenty".to_owned(), "v".to_owned())]
            }
        }
        assert_eq!(write_text(&Long), "A label longer than twenty:v\n");
    }

    #[test]
    fn test_pairs_follow_field_order() {
        const FIELDS: &[Field<u32>] = &[
            Field {
                label: "Double",
                value: |n| (n * 2).to_string(),
            },
            Field {
                label: "Value",
                value: |n| n.to_string(),
            },
        ];
        assert_eq!(
            pairs(&4, FIELDS),
            vec![
                ("Double".to_owned(), "8".to_owned()),
                ("Value".to_owned(), "4".to_owned()),
            ]
        );
    }
}
