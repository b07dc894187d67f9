//! Per-kind record metadata shared by every backend.
//!
//! Deletion behaviour is a property of the entity kind, declared once here
//! through [`Deletable::DELETE_POLICY`]. Backends implement `delete_*`
//! generically over it instead of hard-coding the behaviour per operation.

use uuid::Uuid;

use crate::site::{
    ContactSubmission, Content, Destination, GalleryImage, NewsletterSubscription, Package, User,
};

/// How `delete_*` treats a row of a given kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Keep the row, flag it inactive, hide it from listings.
    Soft,
    /// Remove the row.
    Hard,
}

/// A stored record with a storage-assigned identifier.
pub trait Record: Clone + Send + Sync + 'static {
    /// Name used in errors and logs.
    const KIND: &'static str;

    fn id(&self) -> Uuid;
}

/// A record kind that supports `delete_*`.
pub trait Deletable: Record {
    const DELETE_POLICY: DeletePolicy;

    /// Flags the record inactive. Only called for [`DeletePolicy::Soft`] kinds.
    fn deactivate(&mut self) {}
}

impl Record for User {
    const KIND: &'static str = "User";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Destination {
    const KIND: &'static str = "Destination";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Deletable for Destination {
    const DELETE_POLICY: DeletePolicy = DeletePolicy::Soft;

    fn deactivate(&mut self) {
        self.is_active = false;
    }
}

impl Record for Content {
    const KIND: &'static str = "Content";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for ContactSubmission {
    const KIND: &'static str = "ContactSubmission";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for NewsletterSubscription {
    const KIND: &'static str = "NewsletterSubscription";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Package {
    const KIND: &'static str = "Package";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Deletable for Package {
    const DELETE_POLICY: DeletePolicy = DeletePolicy::Soft;

    fn deactivate(&mut self) {
        self.is_active = false;
    }
}

impl Record for GalleryImage {
    const KIND: &'static str = "GalleryImage";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Deletable for GalleryImage {
    const DELETE_POLICY: DeletePolicy = DeletePolicy::Hard;
}
