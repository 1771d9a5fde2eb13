//! Selectable list rows

/// Maximum characters in a row label
pub const LABEL_LEN: usize = 24;

/// Fixed-capacity label text
pub type Label = heapless::String<LABEL_LEN>;

/// One selectable row: a label plus an opaque value
///
/// Immutable once constructed; copied by value into containers. The `value`
/// carries whatever the dialog's callback wants to interpret (a locomotive
/// address, a turnout number, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ListItem {
    label: Label,
    value: i32,
}

impl ListItem {
    /// Create an item; labels longer than `LABEL_LEN` are truncated
    pub fn new(label: &str, value: i32) -> Self {
        Self {
            label: truncate_label(label),
            value,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

/// Copy as much of `text` as fits into a fixed-capacity label
pub(crate) fn truncate_label(text: &str) -> Label {
    let mut label = Label::new();
    for ch in text.chars() {
        if label.push(ch).is_err() {
            break;
        }
    }
    label
}
