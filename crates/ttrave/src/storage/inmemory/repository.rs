//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use ttrave_core::site::{
    ContactSubmission, Content, Destination, DestinationPatch, DestinationType, GalleryImage,
    NewContactSubmission, NewContent, NewDestination, NewGalleryImage, NewNewsletterSubscription,
    NewPackage, NewUser, NewsletterSubscription, Package, PackagePatch, SeedData, User,
};
use ttrave_core::storage::{
    ContactSubmissionRepository, ContentRepository, DestinationRepository, GalleryImageRepository,
    NewsletterRepository, PackageRepository, Result, UserRepository,
};

use super::table::Table;

/// In-memory storage backend.
///
/// Each kind lives in its own table behind an `Arc<RwLock<_>>`. Operations
/// that read then write hold the write lock for the whole step, so
/// concurrent callers never interleave inside one operation.
/// Data is not persisted and is lost when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    users: Arc<RwLock<Table<User>>>,
    destinations: Arc<RwLock<Table<Destination>>>,
    content: Arc<RwLock<Table<Content>>>,
    submissions: Arc<RwLock<Table<ContactSubmission>>>,
    subscriptions: Arc<RwLock<Table<NewsletterSubscription>>>,
    packages: Arc<RwLock<Table<Package>>>,
    gallery: Arc<RwLock<Table<GalleryImage>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a repository holding the default admin account and site copy.
    pub fn new() -> Self {
        Self::with_seed(&SeedData::default())
    }

    /// Creates a repository with no rows at all.
    pub fn empty() -> Self {
        Self::from_tables(Table::default(), Table::default())
    }

    /// Creates a repository pre-populated from `seed`.
    pub fn with_seed(seed: &SeedData) -> Self {
        let now = Utc::now();

        let mut users = Table::default();
        users.insert(seed.admin.clone().into_user(Uuid::new_v4(), now));

        let mut content = Table::default();
        for row in &seed.content {
            content.insert(row.clone().into_content(Uuid::new_v4(), now));
        }

        tracing::debug!(
            users = users.len(),
            content = content.len(),
            "Seeded in-memory storage"
        );

        Self::from_tables(users, content)
    }

    fn from_tables(users: Table<User>, content: Table<Content>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
            destinations: Arc::new(RwLock::new(Table::default())),
            content: Arc::new(RwLock::new(content)),
            submissions: Arc::new(RwLock::new(Table::default())),
            subscriptions: Arc::new(RwLock::new(Table::default())),
            packages: Arc::new(RwLock::new(Table::default())),
            gallery: Arc::new(RwLock::new(Table::default())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.find(|u| u.username == username))
    }

    async fn create_user(&self, user: NewUser) -> Result<User> {
        let mut users = self.users.write().await;
        Ok(users.insert(user.into_user(Uuid::new_v4(), Utc::now())))
    }

    async fn update_user_password(&self, id: Uuid, password: &str) -> Result<Option<User>> {
        let mut users = self.users.write().await;
        Ok(users.modify(id, |u| u.password = password.to_string()))
    }
}

#[async_trait]
impl DestinationRepository for InMemoryRepository {
    async fn get_destinations(&self) -> Result<Vec<Destination>> {
        let destinations = self.destinations.read().await;
        Ok(destinations.filter(|d| d.is_active))
    }

    async fn get_destinations_by_type(
        &self,
        destination_type: DestinationType,
    ) -> Result<Vec<Destination>> {
        let destinations = self.destinations.read().await;
        Ok(destinations.filter(|d| d.is_active && d.destination_type == destination_type))
    }

    async fn get_destination(&self, id: Uuid) -> Result<Option<Destination>> {
        let destinations = self.destinations.read().await;
        Ok(destinations.get(id))
    }

    async fn create_destination(&self, destination: NewDestination) -> Result<Destination> {
        let mut destinations = self.destinations.write().await;
        Ok(destinations.insert(destination.into_destination(Uuid::new_v4(), Utc::now())))
    }

    async fn update_destination(
        &self,
        id: Uuid,
        patch: DestinationPatch,
    ) -> Result<Option<Destination>> {
        let mut destinations = self.destinations.write().await;
        Ok(destinations.modify(id, |d| patch.apply_to(d)))
    }

    async fn delete_destination(&self, id: Uuid) -> Result<bool> {
        let mut destinations = self.destinations.write().await;
        Ok(destinations.delete(id))
    }
}

#[async_trait]
impl ContentRepository for InMemoryRepository {
    async fn get_content(&self) -> Result<Vec<Content>> {
        let content = self.content.read().await;
        Ok(content.all())
    }

    async fn get_content_by_key(&self, key: &str) -> Result<Option<Content>> {
        let content = self.content.read().await;
        Ok(content.find(|c| c.key == key))
    }

    async fn set_content(&self, new_content: NewContent) -> Result<Content> {
        let mut content = self.content.write().await;
        let now = Utc::now();

        if let Some(id) = content.find(|c| c.key == new_content.key).map(|c| c.id) {
            if let Some(updated) = content.modify(id, |c| {
                c.value = new_content.value.clone();
                c.updated_at = now;
            }) {
                return Ok(updated);
            }
        }

        Ok(content.insert(new_content.into_content(Uuid::new_v4(), now)))
    }

    async fn update_content(&self, key: &str, value: &str) -> Result<Option<Content>> {
        let mut content = self.content.write().await;
        let Some(id) = content.find(|c| c.key == key).map(|c| c.id) else {
            return Ok(None);
        };
        Ok(content.modify(id, |c| {
            c.value = value.to_string();
            c.updated_at = Utc::now();
        }))
    }
}

#[async_trait]
impl ContactSubmissionRepository for InMemoryRepository {
    async fn get_contact_submissions(&self) -> Result<Vec<ContactSubmission>> {
        let submissions = self.submissions.read().await;
        Ok(submissions.all())
    }

    async fn get_contact_submission(&self, id: Uuid) -> Result<Option<ContactSubmission>> {
        let submissions = self.submissions.read().await;
        Ok(submissions.get(id))
    }

    async fn create_contact_submission(
        &self,
        submission: NewContactSubmission,
    ) -> Result<ContactSubmission> {
        let mut submissions = self.submissions.write().await;
        Ok(submissions.insert(submission.into_submission(Uuid::new_v4(), Utc::now())))
    }

    async fn update_contact_submission_status(
        &self,
        id: Uuid,
        status: &str,
    ) -> Result<Option<ContactSubmission>> {
        let mut submissions = self.submissions.write().await;
        Ok(submissions.modify(id, |s| s.status = status.to_string()))
    }
}

#[async_trait]
impl NewsletterRepository for InMemoryRepository {
    async fn get_newsletter_subscriptions(&self) -> Result<Vec<NewsletterSubscription>> {
        let subscriptions = self.subscriptions.read().await;
        Ok(subscriptions.all())
    }

    async fn get_newsletter_subscription(
        &self,
        id: Uuid,
    ) -> Result<Option<NewsletterSubscription>> {
        let subscriptions = self.subscriptions.read().await;
        Ok(subscriptions.get(id))
    }

    async fn get_newsletter_subscription_by_email(
        &self,
        email: &str,
    ) -> Result<Option<NewsletterSubscription>> {
        let subscriptions = self.subscriptions.read().await;
        Ok(subscriptions.find(|s| s.email == email))
    }

    async fn create_newsletter_subscription(
        &self,
        subscription: NewNewsletterSubscription,
    ) -> Result<NewsletterSubscription> {
        let mut subscriptions = self.subscriptions.write().await;

        let existing = subscriptions
            .find(|s| s.email == subscription.email)
            .map(|s| s.id);
        if let Some(id) = existing {
            if let Some(reactivated) = subscriptions.modify(id, |s| s.is_active = true) {
                return Ok(reactivated);
            }
        }

        Ok(subscriptions.insert(subscription.into_subscription(Uuid::new_v4(), Utc::now())))
    }

    async fn unsubscribe_newsletter(&self, email: &str) -> Result<Option<NewsletterSubscription>> {
        let mut subscriptions = self.subscriptions.write().await;
        let Some(id) = subscriptions.find(|s| s.email == email).map(|s| s.id) else {
            return Ok(None);
        };
        Ok(subscriptions.modify(id, |s| s.is_active = false))
    }
}

#[async_trait]
impl PackageRepository for InMemoryRepository {
    async fn get_packages(&self) -> Result<Vec<Package>> {
        let packages = self.packages.read().await;
        Ok(packages.filter(|p| p.is_active))
    }

    async fn get_packages_by_destination(&self, destination_id: Uuid) -> Result<Vec<Package>> {
        let packages = self.packages.read().await;
        Ok(packages.filter(|p| p.is_active && p.destination_id == destination_id))
    }

    async fn get_featured_packages(&self) -> Result<Vec<Package>> {
        let packages = self.packages.read().await;
        Ok(packages.filter(|p| p.is_active && p.is_featured))
    }

    async fn get_package(&self, id: Uuid) -> Result<Option<Package>> {
        let packages = self.packages.read().await;
        Ok(packages.get(id))
    }

    async fn create_package(&self, package: NewPackage) -> Result<Package> {
        let mut packages = self.packages.write().await;
        Ok(packages.insert(package.into_package(Uuid::new_v4(), Utc::now())))
    }

    async fn update_package(&self, id: Uuid, patch: PackagePatch) -> Result<Option<Package>> {
        let mut packages = self.packages.write().await;
        Ok(packages.modify(id, |p| patch.apply_to(p)))
    }

    async fn delete_package(&self, id: Uuid) -> Result<bool> {
        let mut packages = self.packages.write().await;
        Ok(packages.delete(id))
    }
}

#[async_trait]
impl GalleryImageRepository for InMemoryRepository {
    async fn get_gallery_images(&self) -> Result<Vec<GalleryImage>> {
        let gallery = self.gallery.read().await;
        Ok(gallery.all())
    }

    async fn get_approved_gallery_images(&self) -> Result<Vec<GalleryImage>> {
        let gallery = self.gallery.read().await;
        Ok(gallery.filter(|g| g.is_approved))
    }

    async fn get_gallery_image(&self, id: Uuid) -> Result<Option<GalleryImage>> {
        let gallery = self.gallery.read().await;
        Ok(gallery.get(id))
    }

    async fn create_gallery_image(&self, image: NewGalleryImage) -> Result<GalleryImage> {
        let mut gallery = self.gallery.write().await;
        Ok(gallery.insert(image.into_image(Uuid::new_v4(), Utc::now())))
    }

    async fn approve_gallery_image(&self, id: Uuid) -> Result<Option<GalleryImage>> {
        let mut gallery = self.gallery.write().await;
        Ok(gallery.modify(id, |g| g.is_approved = true))
    }

    async fn delete_gallery_image(&self, id: Uuid) -> Result<bool> {
        let mut gallery = self.gallery.write().await;
        Ok(gallery.delete(id))
    }
}
