use crate::date::Date;
use crate::error::{Result, StintError};
use crate::model::{Internship, Status};
use tracing::debug;

pub const COMPANY_MAXLEN: usize = 15;
pub const ROLE_MAXLEN: usize = 30;

/// Ordering applied by the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Insertion order, left untouched.
    #[default]
    Default,
    Ascending,
    Descending,
}

/// The in-memory collection of internships plus the session username.
///
/// All indexes are 0-based here; translating from the 1-based indexes users
/// type is the parser's job. Every index-taking operation validates bounds
/// before mutating anything.
#[derive(Debug, Default)]
pub struct InternshipList {
    items: Vec<Internship>,
    username: Option<String>,
}

impl InternshipList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: Internship) {
        self.items.push(item);
    }

    pub fn get(&self, index: usize) -> Result<&Internship> {
        self.items.get(index).ok_or(StintError::InvalidIndex)
    }

    pub fn delete(&mut self, index: usize) -> Result<Internship> {
        if index >= self.items.len() {
            return Err(StintError::InvalidIndex);
        }
        Ok(self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Internship> {
        self.items.iter()
    }

    pub fn update_company(&mut self, index: usize, company: String) -> Result<()> {
        self.get_mut(index)?.company = company;
        Ok(())
    }

    pub fn update_role(&mut self, index: usize, role: String) -> Result<()> {
        self.get_mut(index)?.role = role;
        Ok(())
    }

    pub fn update_deadline(&mut self, index: usize, deadline: Date) -> Result<()> {
        self.get_mut(index)?.deadline = deadline;
        Ok(())
    }

    pub fn update_pay(&mut self, index: usize, pay: u32) -> Result<()> {
        self.get_mut(index)?.pay = pay;
        Ok(())
    }

    /// Validates the status string (case-insensitively) and stores the
    /// canonical variant.
    pub fn update_status(&mut self, index: usize, status: &str) -> Result<Status> {
        let parsed: Status = status.parse()?;
        self.get_mut(index)?.status = parsed;
        Ok(parsed)
    }

    /// Reorders by deadline. `sort_by` is stable, so re-sorting an already
    /// sorted list leaves it unchanged.
    pub fn sort(&mut self, order: SortOrder) {
        match order {
            SortOrder::Default => {}
            SortOrder::Ascending => self.items.sort_by(|a, b| a.deadline.cmp(&b.deadline)),
            SortOrder::Descending => self.items.sort_by(|a, b| b.deadline.cmp(&a.deadline)),
        }
        debug!(?order, "sorted internships");
    }

    /// Case-insensitive substring match against company or role, in the
    /// collection's current order.
    pub fn find<'a>(&'a self, keyword: &str) -> impl Iterator<Item = &'a Internship> {
        let needle = keyword.to_lowercase();
        self.items.iter().filter(move |i| {
            i.company.to_lowercase().contains(&needle) || i.role.to_lowercase().contains(&needle)
        })
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn set_username(&mut self, username: String) {
        self.username = Some(username);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replaces the entire collection, used when loading from storage.
    pub fn replace(&mut self, items: Vec<Internship>) {
        self.items = items;
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Internship> {
        self.items.get_mut(index).ok_or(StintError::InvalidIndex)
    }
}
