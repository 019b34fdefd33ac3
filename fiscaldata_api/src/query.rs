//! Query builder for the standard dataset-table parameters.

use crate::params::Params;

/// Builder for the query surface shared by every dataset table: field
/// selection, sorting, row filters, and pagination.
///
/// The default query requests the first page of 100 records with all fields.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordsQuery {
    /// Fields to include in the response. Empty means all fields.
    pub fields: Vec<String>,
    /// Sort keys, e.g. `-record_date` for descending.
    pub sort: Vec<String>,
    /// Row filters, e.g. `record_fiscal_year:gte:2007`.
    pub filters: Vec<String>,
    /// Page number (1-indexed).
    pub page_number: i64,
    /// Number of rows returned per page.
    pub page_size: i64,
}

impl Default for RecordsQuery {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            sort: Vec::new(),
            filters: Vec::new(),
            page_number: 1,
            page_size: 100,
        }
    }
}

impl RecordsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: &str) -> Self {
        self.fields.push(field.to_string());
        self
    }

    pub fn with_fields(mut self, fields: &[&str]) -> Self {
        self.fields.extend(fields.iter().map(|f| f.to_string()));
        self
    }

    pub fn with_sort(mut self, sort: &str) -> Self {
        self.sort.push(sort.to_string());
        self
    }

    pub fn with_sorts(mut self, sorts: &[&str]) -> Self {
        self.sort.extend(sorts.iter().map(|s| s.to_string()));
        self
    }

    pub fn with_filter(mut self, filter: &str) -> Self {
        self.filters.push(filter.to_string());
        self
    }

    pub fn with_filters(mut self, filters: &[&str]) -> Self {
        self.filters.extend(filters.iter().map(|f| f.to_string()));
        self
    }

    pub fn with_page_number(mut self, page_number: i64) -> Self {
        self.page_number = page_number;
        self
    }

    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = page_size;
        self
    }

    /// Packages the query into request parameters.
    ///
    /// `fields`, `sort`, and `filters` are comma-joined in their original
    /// order; empty sequences are omitted entirely. The comma here is a
    /// facade-layer convention — the session reserves the semicolon for its
    /// own tag-name joins, and the remote API distinguishes the two.
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.insert("format", "json");
        params.insert("page[number]", self.page_number);
        params.insert("page[size]", self.page_size);
        if !self.fields.is_empty() {
            params.insert("fields", self.fields.join(","));
        }
        if !self.sort.is_empty() {
            params.insert("sort", self.sort.join(","));
        }
        if !self.filters.is_empty() {
            params.insert("filters", self.filters.join(","));
        }
        params
    }
}
