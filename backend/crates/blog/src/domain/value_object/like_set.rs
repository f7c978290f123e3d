//! Like Set
//!
//! The users who like a post. Each user appears at most once; iteration
//! follows the order in which likes were given.

use kernel::id::UserId;
use serde::Serialize;

/// Outcome of [`LikeSet::toggle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeToggle {
    Liked,
    Unliked,
}

impl LikeToggle {
    pub fn is_liked(&self) -> bool {
        matches!(self, LikeToggle::Liked)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LikeSet(Vec<UserId>);

impl LikeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, user_id: &UserId) -> bool {
        self.0.contains(user_id)
    }

    /// Add `user_id` if absent, remove it if present
    pub fn toggle(&mut self, user_id: UserId) -> LikeToggle {
        match self.0.iter().position(|id| *id == user_id) {
            Some(index) => {
                self.0.remove(index);
                LikeToggle::Unliked
            }
            None => {
                self.0.push(user_id);
                LikeToggle::Liked
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserId> {
        self.0.iter()
    }
}

impl FromIterator<UserId> for LikeSet {
    /// Duplicates are dropped; the first occurrence keeps its position
    fn from_iter<I: IntoIterator<Item = UserId>>(iter: I) -> Self {
        let mut set = LikeSet::new();
        for id in iter {
            if !set.contains(&id) {
                set.0.push(id);
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_membership() {
        let user = UserId::new();
        let mut likes = LikeSet::new();

        assert_eq!(likes.toggle(user), LikeToggle::Liked);
        assert!(likes.contains(&user));
        assert_eq!(likes.len(), 1);

        assert_eq!(likes.toggle(user), LikeToggle::Unliked);
        assert!(!likes.contains(&user));
        assert!(likes.is_empty());
    }

    #[test]
    fn test_from_iter_dedups() {
        let a = UserId::new();
        let b = UserId::new();
        let likes: LikeSet = [a, b, a].into_iter().collect();

        assert_eq!(likes.len(), 2);
        assert_eq!(likes.iter().copied().collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn test_toggle_keeps_other_users() {
        let a = UserId::new();
        let b = UserId::new();
        let mut likes: LikeSet = [a, b].into_iter().collect();

        likes.toggle(a);
        assert_eq!(likes.iter().copied().collect::<Vec<_>>(), vec![b]);
    }
}
