//! Contact categories
//!
//! The scene's collision bitmasks as a closed set of named categories.
//! Only membership is ever asked of a mask, so the bit layout stays private.

use serde::{Deserialize, Serialize};

use crate::error::{GameBoardError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactCategory {
    Ball,
    Pin,
    Floor,
    FinishFloor,
    Bullet,
    Target,
    Player,
    Collectible,
    Hazard,
}

impl ContactCategory {
    pub const ALL: [ContactCategory; 9] = [
        ContactCategory::Ball,
        ContactCategory::Pin,
        ContactCategory::Floor,
        ContactCategory::FinishFloor,
        ContactCategory::Bullet,
        ContactCategory::Target,
        ContactCategory::Player,
        ContactCategory::Collectible,
        ContactCategory::Hazard,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ContactCategory::Ball => "ball",
            ContactCategory::Pin => "pin",
            ContactCategory::Floor => "floor",
            ContactCategory::FinishFloor => "finish_floor",
            ContactCategory::Bullet => "bullet",
            ContactCategory::Target => "target",
            ContactCategory::Player => "player",
            ContactCategory::Collectible => "collectible",
            ContactCategory::Hazard => "hazard",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == name)
            .ok_or_else(|| GameBoardError::UnknownCategory(name.to_string()))
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

// ============================================================================
// MASKS
// ============================================================================

/// Set of categories a body reports contacts with
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<ContactCategory>", from = "Vec<ContactCategory>")]
pub struct ContactMask {
    bits: u16,
}

impl ContactMask {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn of(categories: &[ContactCategory]) -> Self {
        categories.iter().copied().collect()
    }

    pub fn contains(&self, category: ContactCategory) -> bool {
        self.bits & category.bit() != 0
    }

    pub fn union(&self, other: ContactMask) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    pub fn intersects(&self, other: ContactMask) -> bool {
        self.bits & other.bits != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn categories(&self) -> impl Iterator<Item = ContactCategory> + '_ {
        ContactCategory::ALL
            .into_iter()
            .filter(move |c| self.contains(*c))
    }
}

impl FromIterator<ContactCategory> for ContactMask {
    fn from_iter<I: IntoIterator<Item = ContactCategory>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().fold(0, |bits, c| bits | c.bit()),
        }
    }
}

impl From<Vec<ContactCategory>> for ContactMask {
    fn from(categories: Vec<ContactCategory>) -> Self {
        categories.into_iter().collect()
    }
}

impl From<ContactMask> for Vec<ContactCategory> {
    fn from(mask: ContactMask) -> Self {
        mask.categories().collect()
    }
}

/// Physics body tag attached to spawned nodes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicsTag {
    pub category: ContactCategory,
    pub contact_mask: ContactMask,
}

impl PhysicsTag {
    pub fn new(category: ContactCategory, contacts: &[ContactCategory]) -> Self {
        Self {
            category,
            contact_mask: ContactMask::of(contacts),
        }
    }
}

/// Either body asking for the other's category is enough
pub fn reports_contact(a: &PhysicsTag, b: &PhysicsTag) -> bool {
    a.contact_mask.contains(b.category) || b.contact_mask.contains(a.category)
}

// ============================================================================
// CONTACT EVENTS
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct ContactBody {
    pub node: String,
    pub category: ContactCategory,
}

impl ContactBody {
    pub fn new(node: impl Into<String>, category: ContactCategory) -> Self {
        Self {
            node: node.into(),
            category,
        }
    }
}

/// Contact reported by the host's physics engine, bodies in no particular order
#[derive(Clone, Debug, PartialEq)]
pub struct Contact {
    pub a: ContactBody,
    pub b: ContactBody,
}

impl Contact {
    pub fn new(a: ContactBody, b: ContactBody) -> Self {
        Self { a, b }
    }

    /// The two bodies ordered as `(first, second)` when the contact is
    /// between those categories
    pub fn between(
        &self,
        first: ContactCategory,
        second: ContactCategory,
    ) -> Option<(&ContactBody, &ContactBody)> {
        if self.a.category == first && self.b.category == second {
            Some((&self.a, &self.b))
        } else if self.b.category == first && self.a.category == second {
            Some((&self.b, &self.a))
        } else {
            None
        }
    }

    pub fn involves(&self, category: ContactCategory) -> bool {
        self.a.category == category || self.b.category == category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_membership() {
        let mask = ContactMask::of(&[ContactCategory::Ball, ContactCategory::Pin]);
        assert!(mask.contains(ContactCategory::Pin));
        assert!(!mask.contains(ContactCategory::Floor));
        assert!(!ContactMask::empty().contains(ContactCategory::Ball));
    }

    #[test]
    fn test_union_and_intersects() {
        let a = ContactMask::of(&[ContactCategory::Player]);
        let b = ContactMask::of(&[ContactCategory::Hazard]);
        assert!(!a.intersects(b));
        let both = a.union(b);
        assert!(both.intersects(a));
        assert_eq!(both.categories().count(), 2);
    }

    #[test]
    fn test_reports_contact_either_direction() {
        let ball = PhysicsTag::new(ContactCategory::Ball, &[ContactCategory::FinishFloor]);
        let finish = PhysicsTag::new(ContactCategory::FinishFloor, &[]);
        let pin = PhysicsTag::new(ContactCategory::Pin, &[]);
        assert!(reports_contact(&ball, &finish));
        assert!(reports_contact(&finish, &ball));
        assert!(!reports_contact(&pin, &finish));
    }

    #[test]
    fn test_mask_serializes_as_names() {
        let tag = PhysicsTag::new(ContactCategory::Bullet, &[ContactCategory::Target]);
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, r#"{"category":"bullet","contact_mask":["target"]}"#);
        let back: PhysicsTag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tag);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(
            ContactCategory::from_name("finish_floor").unwrap(),
            ContactCategory::FinishFloor
        );
        assert!(matches!(
            ContactCategory::from_name("lava"),
            Err(GameBoardError::UnknownCategory(name)) if name == "lava"
        ));
    }

    #[test]
    fn test_between_orders_bodies() {
        let contact = Contact::new(
            ContactBody::new("target3", ContactCategory::Target),
            ContactBody::new("bullet7", ContactCategory::Bullet),
        );
        let (bullet, target) = contact
            .between(ContactCategory::Bullet, ContactCategory::Target)
            .unwrap();
        assert_eq!(bullet.node, "bullet7");
        assert_eq!(target.node, "target3");
        assert!(contact.between(ContactCategory::Ball, ContactCategory::Pin).is_none());
        assert!(contact.involves(ContactCategory::Target));
    }
}
