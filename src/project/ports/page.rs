//! Paging types shared by the repository port and its callers.

use crate::project::domain::Project;

/// Zero-based page request with a positive page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Creates a page request, returning `None` when `size` is zero.
    #[must_use]
    pub const fn new(page: u32, size: u32) -> Option<Self> {
        if size == 0 {
            return None;
        }
        Some(Self { page, size })
    }

    /// Returns the zero-based page index.
    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn size(self) -> u32 {
        self.size
    }

    /// Returns the number of records preceding this page.
    #[must_use]
    pub const fn offset(self) -> u64 {
        self.page as u64 * self.size as u64
    }
}

/// One page of projects ordered by ascending identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPage {
    content: Vec<Project>,
    request: PageRequest,
    total_elements: u64,
}

impl ProjectPage {
    /// Creates a page from its items and the total record count.
    #[must_use]
    pub const fn new(content: Vec<Project>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            request,
            total_elements,
        }
    }

    /// Returns the projects on this page.
    #[must_use]
    pub fn content(&self) -> &[Project] {
        &self.content
    }

    /// Consumes the page and returns its projects.
    #[must_use]
    pub fn into_content(self) -> Vec<Project> {
        self.content
    }

    /// Returns the request this page answers.
    #[must_use]
    pub const fn request(&self) -> PageRequest {
        self.request
    }

    /// Returns the number of records across all pages.
    #[must_use]
    pub const fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Returns the number of pages needed to hold every record.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(self.request.size as u64)
    }
}
