use async_trait::async_trait;
use uuid::Uuid;

use crate::site::{
    ContactSubmission, Content, Destination, DestinationPatch, DestinationType, GalleryImage,
    NewContactSubmission, NewContent, NewDestination, NewGalleryImage, NewNewsletterSubscription,
    NewPackage, NewUser, NewsletterSubscription, Package, PackagePatch, User,
};

use super::Result;

/// Repository for admin accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by ID.
    async fn get_user(&self, id: Uuid) -> Result<Option<User>>;

    /// Gets the first user with the given username.
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Stores a new user.
    async fn create_user(&self, user: NewUser) -> Result<User>;

    /// Replaces a user's password, returning the updated user.
    async fn update_user_password(&self, id: Uuid, password: &str) -> Result<Option<User>>;
}

/// Repository for destinations. Deletes are soft.
#[async_trait]
pub trait DestinationRepository: Send + Sync {
    /// Lists active destinations.
    async fn get_destinations(&self) -> Result<Vec<Destination>>;

    /// Lists active destinations of one type.
    async fn get_destinations_by_type(
        &self,
        destination_type: DestinationType,
    ) -> Result<Vec<Destination>>;

    /// Gets a destination by ID, active or not.
    async fn get_destination(&self, id: Uuid) -> Result<Option<Destination>>;

    async fn create_destination(&self, destination: NewDestination) -> Result<Destination>;

    async fn update_destination(
        &self,
        id: Uuid,
        patch: DestinationPatch,
    ) -> Result<Option<Destination>>;

    /// Marks a destination inactive. Returns false if the ID is unknown.
    async fn delete_destination(&self, id: Uuid) -> Result<bool>;
}

/// Repository for editable site copy, keyed by `key`.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn get_content(&self) -> Result<Vec<Content>>;

    async fn get_content_by_key(&self, key: &str) -> Result<Option<Content>>;

    /// Inserts the key or overwrites its value. Never creates a duplicate key.
    async fn set_content(&self, content: NewContent) -> Result<Content>;

    /// Overwrites the value of an existing key. Unknown keys return `None`.
    async fn update_content(&self, key: &str, value: &str) -> Result<Option<Content>>;
}

/// Repository for contact form submissions. Append-only apart from status.
#[async_trait]
pub trait ContactSubmissionRepository: Send + Sync {
    async fn get_contact_submissions(&self) -> Result<Vec<ContactSubmission>>;

    async fn get_contact_submission(&self, id: Uuid) -> Result<Option<ContactSubmission>>;

    async fn create_contact_submission(
        &self,
        submission: NewContactSubmission,
    ) -> Result<ContactSubmission>;

    async fn update_contact_submission_status(
        &self,
        id: Uuid,
        status: &str,
    ) -> Result<Option<ContactSubmission>>;
}

/// Repository for newsletter sign-ups, one row per email.
#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    async fn get_newsletter_subscriptions(&self) -> Result<Vec<NewsletterSubscription>>;

    async fn get_newsletter_subscription(&self, id: Uuid)
        -> Result<Option<NewsletterSubscription>>;

    async fn get_newsletter_subscription_by_email(
        &self,
        email: &str,
    ) -> Result<Option<NewsletterSubscription>>;

    /// Subscribes an email.
    ///
    /// An existing row for the email is returned instead of a new one, and
    /// is reactivated if it had been unsubscribed.
    async fn create_newsletter_subscription(
        &self,
        subscription: NewNewsletterSubscription,
    ) -> Result<NewsletterSubscription>;

    /// Marks the subscription for `email` inactive.
    async fn unsubscribe_newsletter(&self, email: &str)
        -> Result<Option<NewsletterSubscription>>;
}

/// Repository for travel packages. Deletes are soft.
#[async_trait]
pub trait PackageRepository: Send + Sync {
    /// Lists active packages.
    async fn get_packages(&self) -> Result<Vec<Package>>;

    /// Lists active packages for one destination.
    async fn get_packages_by_destination(&self, destination_id: Uuid) -> Result<Vec<Package>>;

    /// Lists active packages flagged as featured.
    async fn get_featured_packages(&self) -> Result<Vec<Package>>;

    /// Gets a package by ID, active or not.
    async fn get_package(&self, id: Uuid) -> Result<Option<Package>>;

    async fn create_package(&self, package: NewPackage) -> Result<Package>;

    async fn update_package(&self, id: Uuid, patch: PackagePatch) -> Result<Option<Package>>;

    /// Marks a package inactive. Returns false if the ID is unknown.
    async fn delete_package(&self, id: Uuid) -> Result<bool>;
}

/// Repository for gallery images. Deletes are hard.
#[async_trait]
pub trait GalleryImageRepository: Send + Sync {
    async fn get_gallery_images(&self) -> Result<Vec<GalleryImage>>;

    async fn get_approved_gallery_images(&self) -> Result<Vec<GalleryImage>>;

    async fn get_gallery_image(&self, id: Uuid) -> Result<Option<GalleryImage>>;

    async fn create_gallery_image(&self, image: NewGalleryImage) -> Result<GalleryImage>;

    async fn approve_gallery_image(&self, id: Uuid) -> Result<Option<GalleryImage>>;

    /// Removes the image. Returns false if the ID is unknown.
    async fn delete_gallery_image(&self, id: Uuid) -> Result<bool>;
}

/// The full storage contract: every repository, behind one handle.
///
/// Implemented automatically for any type that implements all the
/// repository traits, so callers can hold an `Arc<dyn Storage>`.
pub trait Storage:
    UserRepository
    + DestinationRepository
    + ContentRepository
    + ContactSubmissionRepository
    + NewsletterRepository
    + PackageRepository
    + GalleryImageRepository
{
}

impl<T> Storage for T where
    T: UserRepository
        + DestinationRepository
        + ContentRepository
        + ContactSubmissionRepository
        + NewsletterRepository
        + PackageRepository
        + GalleryImageRepository
{
}
