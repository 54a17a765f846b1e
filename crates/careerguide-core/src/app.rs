//! Application state: the current page, the signed-in user, and their likes.
//!
//! Transitions take `self` by value and return the next state, so a caller
//! always holds exactly one consistent snapshot.

use crate::likes::{LikeChange, LikeKind, LikedItems};
use crate::model::Profile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Login,
    Dashboard,
    CareerGuidance,
    ClassDetail(String),
    /// The quiz, optionally started from a class level.
    Quiz(Option<String>),
    CourseDetail(String),
    CollegeDetail(String),
    ScholarshipDetail(String),
}

impl Page {
    fn requires_user(&self) -> bool {
        !matches!(self, Page::Login)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    page: Page,
    user: Option<Profile>,
    likes: LikedItems,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            page: Page::Login,
            user: None,
            likes: LikedItems::default(),
        }
    }

    /// Resume from persisted data: a saved profile lands on the dashboard.
    pub fn restore(user: Option<Profile>, likes: LikedItems) -> Self {
        match user {
            Some(profile) => Self {
                page: Page::Dashboard,
                user: Some(profile),
                likes,
            },
            None => Self::new(),
        }
    }

    pub fn login(self, profile: Profile, likes: LikedItems) -> Self {
        tracing::info!(user = %profile.name, "signed in");
        Self {
            page: Page::Dashboard,
            user: Some(profile),
            likes,
        }
    }

    pub fn logout(self) -> Self {
        if let Some(user) = &self.user {
            tracing::info!(user = %user.name, "signed out");
        }
        Self::new()
    }

    /// Move to `page`. Without a signed-in user every page resolves to Login.
    pub fn navigate(self, page: Page) -> Self {
        let page = if page.requires_user() && self.user.is_none() {
            tracing::debug!(?page, "no user, redirecting to login");
            Page::Login
        } else {
            page
        };
        Self { page, ..self }
    }

    /// Toggle a liked item. Without a user nothing changes and `None` is returned.
    pub fn toggle_like(mut self, kind: LikeKind, id: &str) -> (Self, Option<LikeChange>) {
        if self.user.is_none() {
            return (self, None);
        }
        let change = self.likes.toggle(kind, id);
        (self, Some(change))
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn user(&self) -> Option<&Profile> {
        self.user.as_ref()
    }

    pub fn likes(&self) -> &LikedItems {
        &self.likes
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
