use std::str::FromStr;

use sea_orm::sea_query::Order;

use crate::entities::student;
use crate::errors::ServiceError;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Name,
    Age,
    Sex,
}

impl SortColumn {
    pub fn column(self) -> student::Column {
        match self {
            SortColumn::Id => student::Column::Id,
            SortColumn::Name => student::Column::Name,
            SortColumn::Age => student::Column::Age,
            SortColumn::Sex => student::Column::Sex,
        }
    }
}

impl FromStr for SortColumn {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortColumn::Id),
            "name" => Ok(SortColumn::Name),
            "age" => Ok(SortColumn::Age),
            "sex" => Ok(SortColumn::Sex),
            other => Err(ServiceError::bad_request(format!(
                "Unknown sort property '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("asc") {
            Some(SortDirection::Asc)
        } else if token.eq_ignore_ascii_case("desc") {
            Some(SortDirection::Desc)
        } else {
            None
        }
    }
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortOrder {
    #[cfg(test)]
    pub fn asc(column: SortColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Asc,
        }
    }

    #[cfg(test)]
    pub fn desc(column: SortColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Desc,
        }
    }

    /// Parses `property[,property...][,asc|desc]`. The trailing direction
    /// applies to every property in the expression.
    pub fn parse_expression(expression: &str) -> Result<Vec<SortOrder>, ServiceError> {
        let mut tokens: Vec<&str> = expression
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect();

        let direction = match tokens.last().and_then(|last| SortDirection::parse(last)) {
            Some(direction) => {
                tokens.pop();
                direction
            }
            None => SortDirection::Asc,
        };

        if tokens.is_empty() {
            return Err(ServiceError::bad_request(format!(
                "Sort expression '{}' names no property",
                expression
            )));
        }

        tokens
            .into_iter()
            .map(|token| token.parse::<SortColumn>().map(|column| SortOrder { column, direction }))
            .collect()
    }
}

/// Zero-based page index, page size and ordering for a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: Vec<SortOrder>,
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page,
            size,
            sort: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn sorted_by(mut self, order: SortOrder) -> Self {
        self.sort.push(order);
        self
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// Defaults and limits applied to incoming page requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSettings {
    pub default_size: u64,
    pub max_size: u64,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_PAGE_SIZE,
            max_size: MAX_PAGE_SIZE,
        }
    }
}

impl PageSettings {
    /// Builds a [`PageRequest`] from raw request values. A zero size is
    /// rejected; sizes above `max_size` are clamped.
    pub fn resolve(
        &self,
        page: Option<u64>,
        size: Option<u64>,
        sort: &[String],
    ) -> Result<PageRequest, ServiceError> {
        let size = match size {
            Some(0) => {
                return Err(ServiceError::bad_request(
                    "Page size must be greater than zero",
                ));
            }
            Some(size) => size.min(self.max_size),
            None => self.default_size.min(self.max_size),
        };

        let mut orders = Vec::new();
        for expression in sort {
            orders.extend(SortOrder::parse_expression(expression)?);
        }

        Ok(PageRequest {
            page: page.unwrap_or(0),
            size,
            sort: orders,
        })
    }
}

/// One page of a larger result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub page: u64,
    pub size: u64,
}

impl<T> Page<T> {
    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    pub fn is_last(&self) -> bool {
        self.page.saturating_add(1) >= self.total_pages
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            page: self.page,
            size: self.size,
        }
    }
}
