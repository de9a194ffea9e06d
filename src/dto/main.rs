use serde::Serialize;

use crate::directory::pager::PagerAction;

/// One table row, with timestamps already turned into phrases.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct AttendeeRow {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Registration time relative to now ("há 3 dias").
    pub registered: String,
    /// Check-in time relative to now, or the "not checked in" placeholder.
    pub checked_in: String,
    pub is_checked_in: bool,
}

/// A pager button. Disabled controls carry no link.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PagerControl {
    pub action: PagerAction,
    pub disabled: bool,
    pub href: Option<String>,
}

/// A query parameter the search form submits.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

/// Data required to render the main index template.
#[derive(Clone, Debug, Serialize)]
pub struct IndexPageData {
    /// Search text echoed back into the search box.
    pub search: String,
    pub page: usize,
    pub total: usize,
    pub total_pages: usize,
    pub rows: Vec<AttendeeRow>,
    /// "Mostrando R de T itens".
    pub showing: String,
    /// "Página P de N".
    pub page_label: String,
    pub controls: Vec<PagerControl>,
    /// Path the search form submits to.
    pub form_action: String,
    /// Search form fields in address order. The `search` field is the text
    /// box, every other one is hidden.
    pub form_fields: Vec<FormField>,
}

impl IndexPageData {
    pub fn control(&self, action: PagerAction) -> Option<&PagerControl> {
        self.controls.iter().find(|c| c.action == action)
    }
}
