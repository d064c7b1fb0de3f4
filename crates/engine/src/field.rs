use core::fmt;

use crate::entry::EntryId;

/// Identifies one input of the editor, the target of a focus request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldId {
    NewDescription,
    NewValue,
    EntryDescription(EntryId),
    EntryValue(EntryId),
}

impl FieldId {
    /// The entry this field edits, if any.
    pub fn entry_id(self) -> Option<EntryId> {
        match self {
            Self::EntryDescription(id) | Self::EntryValue(id) => Some(id),
            Self::NewDescription | Self::NewValue => None,
        }
    }

    pub fn is_new_entry_row(self) -> bool {
        self.entry_id().is_none()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewDescription => write!(f, "new-desc"),
            Self::NewValue => write!(f, "new-val"),
            Self::EntryDescription(id) => write!(f, "entry-desc-{id}"),
            Self::EntryValue(id) => write!(f, "entry-val-{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert_eq!(FieldId::NewDescription.to_string(), "new-desc");
        assert_eq!(FieldId::NewValue.to_string(), "new-val");
        assert_eq!(FieldId::EntryDescription(3).to_string(), "entry-desc-3");
        assert_eq!(FieldId::EntryValue(12).to_string(), "entry-val-12");
    }

    #[test]
    fn entry_row_fields_carry_their_id() {
        assert_eq!(FieldId::EntryValue(5).entry_id(), Some(5));
        assert!(FieldId::NewValue.is_new_entry_row());
        assert!(!FieldId::EntryDescription(1).is_new_entry_row());
    }
}
