//! Search Filter Composition
//!
//! A [`SearchFilters`] value is transient view state (query text, file-type
//! selection, date/size buckets, sort) that is turned into exactly one query
//! string. Only non-empty criteria are encoded; the server applies all
//! filtering and sorting.
//!
//! [`filter_by_name`] is the one local filter, for lists the server returned
//! unfiltered.

use std::fmt;
use std::str::FromStr;

use crate::client::api::QueryParams;
use crate::client::endpoints::Pagination;
use crate::shared::models::FileItem;

/// File-type buckets understood by the search endpoint, with display labels
pub const FILE_TYPE_OPTIONS: [(&str, &str); 7] = [
    ("image", "Images"),
    ("video", "Videos"),
    ("audio", "Audio"),
    ("document", "Documents"),
    ("pdf", "PDF"),
    ("text", "Text"),
    ("archive", "Archives"),
];

macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal, $label:literal;)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Value sent on the wire
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(format!(
                        "unknown {} '{}' (expected one of: {})",
                        stringify!($name),
                        other,
                        [$($wire),+].join(", ")
                    )),
                }
            }
        }
    };
}

wire_enum! {
    /// Upload-date bucket
    DateRange {
        Today => "today", "Today";
        Week => "week", "This Week";
        Month => "month", "This Month";
        Year => "year", "This Year";
    }
}

wire_enum! {
    /// File-size bucket
    SizeRange {
        Small => "small", "< 1 MB";
        Medium => "medium", "1 MB - 10 MB";
        Large => "large", "10 MB - 100 MB";
        XLarge => "xlarge", "> 100 MB";
    }
}

wire_enum! {
    /// Sort key
    SortKey {
        Name => "name", "Name";
        Size => "size", "Size";
        UploadedAt => "uploadedAt", "Date";
        Type => "type", "Type";
    }
}

wire_enum! {
    SortOrder {
        Asc => "asc", "Asc";
        Desc => "desc", "Desc";
    }
}

/// Search criteria for one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub query: String,
    pub file_types: Vec<String>,
    pub date_range: Option<DateRange>,
    pub size_range: Option<SizeRange>,
    pub sort_by: Option<SortKey>,
    pub sort_order: Option<SortOrder>,
    pub pagination: Option<Pagination>,
}

impl SearchFilters {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// The search view's starting point: newest uploads first.
    pub fn newest_first() -> Self {
        Self {
            sort_by: Some(SortKey::UploadedAt),
            sort_order: Some(SortOrder::Desc),
            ..Self::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_file_type(mut self, file_type: impl Into<String>) -> Self {
        self.toggle_file_type(&file_type.into(), true);
        self
    }

    /// Select or deselect a file type. Selecting twice has no effect.
    pub fn toggle_file_type(&mut self, file_type: &str, checked: bool) {
        let file_type = file_type.trim();
        if file_type.is_empty() {
            return;
        }
        if checked {
            if !self.file_types.iter().any(|t| t == file_type) {
                self.file_types.push(file_type.to_string());
            }
        } else {
            self.file_types.retain(|t| t != file_type);
        }
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn with_size_range(mut self, range: SizeRange) -> Self {
        self.size_range = Some(range);
        self
    }

    pub fn sorted_by(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort_by = Some(key);
        self.sort_order = Some(order);
        self
    }

    pub fn paged(mut self, page: u32, limit: u32) -> Self {
        self.pagination = Some(Pagination::new(page, limit));
        self
    }

    /// Reset to the search view's defaults.
    pub fn clear(&mut self) {
        *self = Self::newest_first();
    }

    /// Parameters for `GET /files/search/user` (free text as `q`)
    pub fn search_params(&self) -> QueryParams {
        self.encode("q")
    }

    /// Parameters for `GET /files` (free text as `query`)
    pub fn list_params(&self) -> QueryParams {
        self.encode("query")
    }

    fn encode(&self, text_key: &str) -> QueryParams {
        let mut params = QueryParams::new();
        params.push(text_key, self.query.trim());
        if !self.file_types.is_empty() {
            params.push("fileTypes", self.file_types.join(","));
        }
        params
            .push_opt("dateRange", self.date_range)
            .push_opt("sizeRange", self.size_range)
            .push_opt("sortBy", self.sort_by)
            .push_opt("sortOrder", self.sort_order)
            .push_opt("page", self.pagination.map(|p| p.page))
            .push_opt("limit", self.pagination.map(|p| p.limit));
        params
    }
}

/// Case-insensitive substring match on file names. An empty query keeps
/// everything. Applying it twice with the same query changes nothing.
pub fn filter_by_name(files: &[FileItem], query: &str) -> Vec<FileItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return files.to_vec();
    }
    files
        .iter()
        .filter(|file| file.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
