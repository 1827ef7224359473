//! Filter field declarations
//!
//! Every filterable field has a key, a default value and a parser from the raw
//! query-string value. Parsers never fail loudly: `None` means "use the
//! default".

use std::fmt;
use std::num::NonZeroU32;
use tracklist_core::{SortField, SortOrder};

pub const DEFAULT_SEARCH_TERM: &str = "";
pub const DEFAULT_GENRE: &str = "";
pub const DEFAULT_ARTIST: &str = "";
pub const DEFAULT_SORT_FIELD: SortField = SortField::CreatedAt;
pub const DEFAULT_SORT_ORDER: SortOrder = SortOrder::Desc;
pub const DEFAULT_PAGE: NonZeroU32 = NonZeroU32::MIN;

/// Allowed page sizes, in display order
pub const PAGE_SIZES: [u32; 5] = [10, 20, 30, 50, 100];

/// Sort field options with display labels
pub const SORT_OPTIONS: [(SortField, &str); 4] = [
    (SortField::CreatedAt, "Newest"),
    (SortField::Title, "Title"),
    (SortField::Artist, "Artist"),
    (SortField::Album, "Album"),
];

/// Sort order options with display labels
pub const SORT_ORDER_OPTIONS: [(SortOrder, &str); 2] =
    [(SortOrder::Asc, "Ascending"), (SortOrder::Desc, "Descending")];

/// Page size restricted to [`PAGE_SIZES`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageSize(u32);

impl PageSize {
    pub const DEFAULT: PageSize = PageSize(20);

    /// Every allowed page size
    pub const ALL: [PageSize; 5] = [
        PageSize(10),
        PageSize(20),
        PageSize(30),
        PageSize(50),
        PageSize(100),
    ];

    /// `None` unless `size` is one of the allowed sizes
    pub fn new(size: u32) -> Option<Self> {
        PAGE_SIZES.contains(&size).then_some(Self(size))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// URL token for a sort field.
///
/// Kept separate from the REST tokens so URLs stay stable if the API changes.
pub fn sort_param(field: SortField) -> &'static str {
    match field {
        SortField::Title => "title",
        SortField::Artist => "artist",
        SortField::Album => "album",
        SortField::CreatedAt => "created_at",
    }
}

/// URL token for a sort order
pub fn order_param(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => "asc",
        SortOrder::Desc => "desc",
    }
}

fn parse_sort_param(raw: &str) -> Option<SortField> {
    SortField::ALL
        .into_iter()
        .find(|field| sort_param(*field) == raw)
}

fn parse_order_param(raw: &str) -> Option<SortOrder> {
    SortOrder::ALL
        .into_iter()
        .find(|order| order_param(*order) == raw)
}

/// Identifier of a filter field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Search,
    Genre,
    Artist,
    Sort,
    Order,
    Page,
    Limit,
}

impl FilterKey {
    /// All keys, in the order they appear in the query string
    pub const ALL: [FilterKey; 7] = [
        FilterKey::Search,
        FilterKey::Genre,
        FilterKey::Artist,
        FilterKey::Sort,
        FilterKey::Order,
        FilterKey::Page,
        FilterKey::Limit,
    ];

    /// Query parameter name
    pub fn name(self) -> &'static str {
        match self {
            FilterKey::Search => "search",
            FilterKey::Genre => "genre",
            FilterKey::Artist => "artist",
            FilterKey::Sort => "sort",
            FilterKey::Order => "order",
            FilterKey::Page => "page",
            FilterKey::Limit => "limit",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    pub fn default_value(self) -> FilterValue {
        match self {
            FilterKey::Search => FilterValue::Search(DEFAULT_SEARCH_TERM.to_string()),
            FilterKey::Genre => FilterValue::Genre(DEFAULT_GENRE.to_string()),
            FilterKey::Artist => FilterValue::Artist(DEFAULT_ARTIST.to_string()),
            FilterKey::Sort => FilterValue::Sort(DEFAULT_SORT_FIELD),
            FilterKey::Order => FilterValue::Order(DEFAULT_SORT_ORDER),
            FilterKey::Page => FilterValue::Page(DEFAULT_PAGE),
            FilterKey::Limit => FilterValue::Limit(PageSize::DEFAULT),
        }
    }

    /// Parse a raw (already percent-decoded) query value for this key.
    ///
    /// Input is trimmed first. Returns `None` for anything outside the
    /// field's domain: unknown sort/order tokens, non-numeric or
    /// non-positive pages, page sizes outside [`PAGE_SIZES`].
    pub fn parse(self, raw: &str) -> Option<FilterValue> {
        let raw = raw.trim();
        match self {
            FilterKey::Search => Some(FilterValue::Search(raw.to_string())),
            FilterKey::Genre => Some(FilterValue::Genre(raw.to_string())),
            FilterKey::Artist => Some(FilterValue::Artist(raw.to_string())),
            FilterKey::Sort => parse_sort_param(raw).map(FilterValue::Sort),
            FilterKey::Order => parse_order_param(raw).map(FilterValue::Order),
            FilterKey::Page => raw
                .parse::<u32>()
                .ok()
                .and_then(NonZeroU32::new)
                .map(FilterValue::Page),
            FilterKey::Limit => raw
                .parse::<u32>()
                .ok()
                .and_then(PageSize::new)
                .map(FilterValue::Limit),
        }
    }

    /// Parse, substituting the default for unparseable input
    pub fn parse_or_default(self, raw: Option<&str>) -> FilterValue {
        raw.and_then(|raw| self.parse(raw))
            .unwrap_or_else(|| self.default_value())
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed value for one filter field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Search(String),
    Genre(String),
    Artist(String),
    Sort(SortField),
    Order(SortOrder),
    Page(NonZeroU32),
    Limit(PageSize),
}

impl FilterValue {
    pub fn key(&self) -> FilterKey {
        match self {
            FilterValue::Search(_) => FilterKey::Search,
            FilterValue::Genre(_) => FilterKey::Genre,
            FilterValue::Artist(_) => FilterKey::Artist,
            FilterValue::Sort(_) => FilterKey::Sort,
            FilterValue::Order(_) => FilterKey::Order,
            FilterValue::Page(_) => FilterKey::Page,
            FilterValue::Limit(_) => FilterKey::Limit,
        }
    }

    /// Query-string representation (before percent-encoding)
    pub fn to_param(&self) -> String {
        match self {
            FilterValue::Search(s) | FilterValue::Genre(s) | FilterValue::Artist(s) => s.clone(),
            FilterValue::Sort(field) => sort_param(*field).to_string(),
            FilterValue::Order(order) => order_param(*order).to_string(),
            FilterValue::Page(page) => page.to_string(),
            FilterValue::Limit(limit) => limit.to_string(),
        }
    }

    pub fn is_default(&self) -> bool {
        *self == self.key().default_value()
    }
}
