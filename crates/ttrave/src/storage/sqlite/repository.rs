//! SQLite repository implementation.
//!
//! Implements the repository traits from `ttrave_core::storage` using SQLite.

use std::borrow::Cow;

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Row};
use tokio_rusqlite::Connection;
use uuid::Uuid;

use ttrave_core::site::{
    ContactSubmission, Content, Destination, DestinationPatch, DestinationType, GalleryImage,
    NewContactSubmission, NewContent, NewDestination, NewGalleryImage, NewNewsletterSubscription,
    NewPackage, NewUser, NewsletterSubscription, Package, PackagePatch, SeedData, User,
};
use ttrave_core::storage::{
    ContactSubmissionRepository, ContentRepository, DestinationRepository, GalleryImageRepository,
    NewsletterRepository, PackageRepository, Record, RepositoryError, Result, UserRepository,
};

use super::conversions::{
    contact_submission_params, content_params, destination_params, destination_patch_params,
    format_datetime, gallery_image_params, package_params, package_patch_params,
    row_to_contact_submission, row_to_content, row_to_destination, row_to_gallery_image,
    row_to_newsletter_subscription, row_to_package, row_to_user, user_params,
};
use super::error::map_tokio_rusqlite_error_with_id;
use super::schema::{self, delete_statement, SqliteTable};

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

type RowReader<T> = fn(&Row<'_>) -> rusqlite::Result<T>;

/// What [`SqliteRepository::seed_defaults`] wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    pub admin_created: bool,
    pub content_rows: usize,
}

/// SQLite-based repository implementation.
///
/// A repository built with [`SqliteRepository::disconnected`] has no
/// database behind it. Reads, updates and deletes behave as if no row
/// matched; creates, `set_content` and seeding fail with
/// [`RepositoryError::Unavailable`].
pub struct SqliteRepository {
    conn: Option<Connection>,
}

impl SqliteRepository {
    /// Opens (or creates) a file-based database and seeds the default rows.
    pub async fn new(path: &str) -> Result<Self> {
        Self::open(path, &SeedData::default()).await
    }

    /// Opens (or creates) a file-based database and seeds it from `seed`.
    ///
    /// Schema tables are created automatically. A seeding failure is logged
    /// and does not prevent the repository from being returned.
    pub async fn open(path: &str, seed: &SeedData) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::connect(conn, seed).await
    }

    /// Creates a seeded repository over a private in-memory database.
    pub async fn new_in_memory() -> Result<Self> {
        Self::open_in_memory(&SeedData::default()).await
    }

    pub async fn open_in_memory(seed: &SeedData) -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::connect(conn, seed).await
    }

    /// A repository with no database at all.
    pub fn disconnected() -> Self {
        Self { conn: None }
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    async fn connect(conn: Connection, seed: &SeedData) -> Result<Self> {
        Self::init_schema(&conn).await?;

        let repo = Self { conn: Some(conn) };
        match repo.seed_defaults(seed).await {
            Ok(outcome) => tracing::debug!(
                admin_created = outcome.admin_created,
                content_rows = outcome.content_rows,
                "Seeded default data"
            ),
            Err(e) => tracing::error!(error = %e, "Failed to seed default data"),
        }

        Ok(repo)
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    /// Writes the admin account and site copy if they are missing.
    ///
    /// The admin is created only when no user has its username, and the
    /// content only when the content table is empty, so running this again
    /// never duplicates rows.
    pub async fn seed_defaults(&self, seed: &SeedData) -> Result<SeedOutcome> {
        let conn = self.connection()?;
        let now = Utc::now();
        let admin = seed.admin.clone().into_user(Uuid::new_v4(), now);
        let content: Vec<Content> = seed
            .content
            .iter()
            .map(|row| row.clone().into_content(Uuid::new_v4(), now))
            .collect();

        conn.call(move |conn| {
            let tx = conn.transaction().map_err(wrap_err)?;
            let mut outcome = SeedOutcome::default();

            let admin_exists: bool = tx
                .query_row(schema::USER_EXISTS_BY_USERNAME, [&admin.username], |row| {
                    row.get(0)
                })
                .map_err(wrap_err)?;
            if !admin_exists {
                tx.execute(schema::INSERT_USER, params_from_iter(user_params(&admin)))
                    .map_err(wrap_err)?;
                outcome.admin_created = true;
            }

            let has_content: bool = tx
                .query_row(schema::CONTENT_EXISTS, [], |row| row.get(0))
                .map_err(wrap_err)?;
            if !has_content {
                let mut stmt = tx.prepare(schema::INSERT_CONTENT).map_err(wrap_err)?;
                for row in &content {
                    stmt.execute(params_from_iter(content_params(row)))
                        .map_err(wrap_err)?;
                }
                outcome.content_rows = content.len();
            }

            tx.commit().map_err(wrap_err)?;
            Ok(outcome)
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error_with_id(e, User::KIND, "seed"))
    }

    fn connection(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or(RepositoryError::Unavailable)
    }

    /// Runs a single-row query. No database means no row.
    async fn fetch_one<T: Send + 'static>(
        &self,
        sql: &'static str,
        params: Vec<Value>,
        read: RowReader<T>,
        entity_type: &'static str,
        id: String,
    ) -> Result<Option<T>> {
        let Some(conn) = &self.conn else {
            return Ok(None);
        };
        query_optional(conn, sql, params, read)
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, entity_type, id))
    }

    /// Runs a listing query. No database means an empty listing.
    async fn fetch_all<T: Send + 'static>(
        &self,
        sql: &'static str,
        params: Vec<Value>,
        read: RowReader<T>,
        entity_type: &'static str,
    ) -> Result<Vec<T>> {
        let Some(conn) = &self.conn else {
            return Ok(Vec::new());
        };
        conn.call(move |conn| {
            let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
            let rows = stmt
                .query_map(params_from_iter(params), read)
                .map_err(wrap_err)?;
            let items = rows
                .collect::<rusqlite::Result<Vec<T>>>()
                .map_err(wrap_err)?;
            Ok(items)
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error_with_id(e, entity_type, "*"))
    }

    /// Runs an `UPDATE ... RETURNING`. `None` when no row matched, and
    /// when there is no database to match against.
    async fn update_returning<T: Send + 'static>(
        &self,
        sql: &'static str,
        params: Vec<Value>,
        read: RowReader<T>,
        entity_type: &'static str,
        id: String,
    ) -> Result<Option<T>> {
        self.fetch_one(sql, params, read, entity_type, id).await
    }

    /// Runs an upsert with a `RETURNING` clause. Needs a database.
    async fn upsert_returning<T: Send + 'static>(
        &self,
        sql: &'static str,
        params: Vec<Value>,
        read: RowReader<T>,
        entity_type: &'static str,
        id: String,
    ) -> Result<Option<T>> {
        let conn = self.connection()?;
        query_optional(conn, sql, params, read)
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, entity_type, id))
    }

    /// Runs a write and returns the number of rows it touched.
    async fn execute(
        &self,
        sql: impl Into<Cow<'static, str>>,
        params: Vec<Value>,
        entity_type: &'static str,
        id: String,
    ) -> Result<usize> {
        let conn = self.connection()?;
        let sql = sql.into();
        conn.call(move |conn| {
            conn.execute(&sql, params_from_iter(params))
                .map_err(wrap_err)
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error_with_id(e, entity_type, id))
    }

    /// No database means nothing to delete.
    async fn delete<T: SqliteTable>(&self, id: Uuid) -> Result<bool> {
        if self.conn.is_none() {
            return Ok(false);
        }
        let changed = self
            .execute(
                delete_statement::<T>(),
                vec![id.to_string().into()],
                T::KIND,
                id.to_string(),
            )
            .await?;
        Ok(changed > 0)
    }
}

async fn query_optional<T: Send + 'static>(
    conn: &Connection,
    sql: &'static str,
    params: Vec<Value>,
    read: RowReader<T>,
) -> tokio_rusqlite::Result<Option<T>> {
    conn.call(move |conn| {
        let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
        match stmt.query_row(params_from_iter(params), read) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(wrap_err(e)),
        }
    })
    .await
}

// ============================================================================
// UserRepository implementation
// ============================================================================

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        self.fetch_one(
            schema::SELECT_USER_BY_ID,
            vec![id.to_string().into()],
            row_to_user,
            User::KIND,
            id.to_string(),
        )
        .await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.fetch_one(
            schema::SELECT_USER_BY_USERNAME,
            vec![username.to_string().into()],
            row_to_user,
            User::KIND,
            username.to_string(),
        )
        .await
    }

    async fn create_user(&self, user: NewUser) -> Result<User> {
        let user = user.into_user(Uuid::new_v4(), Utc::now());
        self.execute(
            schema::INSERT_USER,
            user_params(&user),
            User::KIND,
            user.id.to_string(),
        )
        .await?;
        Ok(user)
    }

    async fn update_user_password(&self, id: Uuid, password: &str) -> Result<Option<User>> {
        self.update_returning(
            schema::UPDATE_USER_PASSWORD,
            vec![id.to_string().into(), password.to_string().into()],
            row_to_user,
            User::KIND,
            id.to_string(),
        )
        .await
    }
}

// ============================================================================
// DestinationRepository implementation
// ============================================================================

#[async_trait]
impl DestinationRepository for SqliteRepository {
    async fn get_destinations(&self) -> Result<Vec<Destination>> {
        self.fetch_all(
            schema::SELECT_ACTIVE_DESTINATIONS,
            Vec::new(),
            row_to_destination,
            Destination::KIND,
        )
        .await
    }

    async fn get_destinations_by_type(
        &self,
        destination_type: DestinationType,
    ) -> Result<Vec<Destination>> {
        self.fetch_all(
            schema::SELECT_ACTIVE_DESTINATIONS_BY_TYPE,
            vec![destination_type.as_str().to_string().into()],
            row_to_destination,
            Destination::KIND,
        )
        .await
    }

    async fn get_destination(&self, id: Uuid) -> Result<Option<Destination>> {
        self.fetch_one(
            schema::SELECT_DESTINATION_BY_ID,
            vec![id.to_string().into()],
            row_to_destination,
            Destination::KIND,
            id.to_string(),
        )
        .await
    }

    async fn create_destination(&self, destination: NewDestination) -> Result<Destination> {
        let destination = destination.into_destination(Uuid::new_v4(), Utc::now());
        self.execute(
            schema::INSERT_DESTINATION,
            destination_params(&destination),
            Destination::KIND,
            destination.id.to_string(),
        )
        .await?;
        Ok(destination)
    }

    async fn update_destination(
        &self,
        id: Uuid,
        patch: DestinationPatch,
    ) -> Result<Option<Destination>> {
        self.update_returning(
            schema::UPDATE_DESTINATION,
            destination_patch_params(id, patch),
            row_to_destination,
            Destination::KIND,
            id.to_string(),
        )
        .await
    }

    async fn delete_destination(&self, id: Uuid) -> Result<bool> {
        self.delete::<Destination>(id).await
    }
}

// ============================================================================
// ContentRepository implementation
// ============================================================================

#[async_trait]
impl ContentRepository for SqliteRepository {
    async fn get_content(&self) -> Result<Vec<Content>> {
        self.fetch_all(schema::SELECT_CONTENT, Vec::new(), row_to_content, Content::KIND)
            .await
    }

    async fn get_content_by_key(&self, key: &str) -> Result<Option<Content>> {
        self.fetch_one(
            schema::SELECT_CONTENT_BY_KEY,
            vec![key.to_string().into()],
            row_to_content,
            Content::KIND,
            key.to_string(),
        )
        .await
    }

    async fn set_content(&self, content: NewContent) -> Result<Content> {
        let key = content.key.clone();
        let params = vec![
            Uuid::new_v4().to_string().into(),
            content.key.into(),
            content.value.into(),
            format_datetime(&Utc::now()).into(),
        ];

        self.upsert_returning(
            schema::UPSERT_CONTENT,
            params,
            row_to_content,
            Content::KIND,
            key.clone(),
        )
        .await?
        .ok_or(RepositoryError::NotFound {
            entity_type: Content::KIND,
            id: key,
        })
    }

    async fn update_content(&self, key: &str, value: &str) -> Result<Option<Content>> {
        self.update_returning(
            schema::UPDATE_CONTENT_VALUE,
            vec![
                key.to_string().into(),
                value.to_string().into(),
                format_datetime(&Utc::now()).into(),
            ],
            row_to_content,
            Content::KIND,
            key.to_string(),
        )
        .await
    }
}

// ============================================================================
// ContactSubmissionRepository implementation
// ============================================================================

#[async_trait]
impl ContactSubmissionRepository for SqliteRepository {
    async fn get_contact_submissions(&self) -> Result<Vec<ContactSubmission>> {
        self.fetch_all(
            schema::SELECT_CONTACT_SUBMISSIONS,
            Vec::new(),
            row_to_contact_submission,
            ContactSubmission::KIND,
        )
        .await
    }

    async fn get_contact_submission(&self, id: Uuid) -> Result<Option<ContactSubmission>> {
        self.fetch_one(
            schema::SELECT_CONTACT_SUBMISSION_BY_ID,
            vec![id.to_string().into()],
            row_to_contact_submission,
            ContactSubmission::KIND,
            id.to_string(),
        )
        .await
    }

    async fn create_contact_submission(
        &self,
        submission: NewContactSubmission,
    ) -> Result<ContactSubmission> {
        let submission = submission.into_submission(Uuid::new_v4(), Utc::now());
        self.execute(
            schema::INSERT_CONTACT_SUBMISSION,
            contact_submission_params(&submission),
            ContactSubmission::KIND,
            submission.id.to_string(),
        )
        .await?;
        Ok(submission)
    }

    async fn update_contact_submission_status(
        &self,
        id: Uuid,
        status: &str,
    ) -> Result<Option<ContactSubmission>> {
        self.update_returning(
            schema::UPDATE_CONTACT_SUBMISSION_STATUS,
            vec![id.to_string().into(), status.to_string().into()],
            row_to_contact_submission,
            ContactSubmission::KIND,
            id.to_string(),
        )
        .await
    }
}

// ============================================================================
// NewsletterRepository implementation
// ============================================================================

#[async_trait]
impl NewsletterRepository for SqliteRepository {
    async fn get_newsletter_subscriptions(&self) -> Result<Vec<NewsletterSubscription>> {
        self.fetch_all(
            schema::SELECT_NEWSLETTER_SUBSCRIPTIONS,
            Vec::new(),
            row_to_newsletter_subscription,
            NewsletterSubscription::KIND,
        )
        .await
    }

    async fn get_newsletter_subscription(
        &self,
        id: Uuid,
    ) -> Result<Option<NewsletterSubscription>> {
        self.fetch_one(
            schema::SELECT_NEWSLETTER_SUBSCRIPTION_BY_ID,
            vec![id.to_string().into()],
            row_to_newsletter_subscription,
            NewsletterSubscription::KIND,
            id.to_string(),
        )
        .await
    }

    async fn get_newsletter_subscription_by_email(
        &self,
        email: &str,
    ) -> Result<Option<NewsletterSubscription>> {
        self.fetch_one(
            schema::SELECT_NEWSLETTER_SUBSCRIPTION_BY_EMAIL,
            vec![email.to_string().into()],
            row_to_newsletter_subscription,
            NewsletterSubscription::KIND,
            email.to_string(),
        )
        .await
    }

    async fn create_newsletter_subscription(
        &self,
        subscription: NewNewsletterSubscription,
    ) -> Result<NewsletterSubscription> {
        let email = subscription.email.clone();
        let params = vec![
            Uuid::new_v4().to_string().into(),
            subscription.email.into(),
            format_datetime(&Utc::now()).into(),
        ];

        self.upsert_returning(
            schema::UPSERT_NEWSLETTER_SUBSCRIPTION,
            params,
            row_to_newsletter_subscription,
            NewsletterSubscription::KIND,
            email.clone(),
        )
        .await?
        .ok_or(RepositoryError::NotFound {
            entity_type: NewsletterSubscription::KIND,
            id: email,
        })
    }

    async fn unsubscribe_newsletter(&self, email: &str) -> Result<Option<NewsletterSubscription>> {
        self.update_returning(
            schema::UNSUBSCRIBE_NEWSLETTER,
            vec![email.to_string().into()],
            row_to_newsletter_subscription,
            NewsletterSubscription::KIND,
            email.to_string(),
        )
        .await
    }
}

// ============================================================================
// PackageRepository implementation
// ============================================================================

#[async_trait]
impl PackageRepository for SqliteRepository {
    async fn get_packages(&self) -> Result<Vec<Package>> {
        self.fetch_all(
            schema::SELECT_ACTIVE_PACKAGES,
            Vec::new(),
            row_to_package,
            Package::KIND,
        )
        .await
    }

    async fn get_packages_by_destination(&self, destination_id: Uuid) -> Result<Vec<Package>> {
        self.fetch_all(
            schema::SELECT_ACTIVE_PACKAGES_BY_DESTINATION,
            vec![destination_id.to_string().into()],
            row_to_package,
            Package::KIND,
        )
        .await
    }

    async fn get_featured_packages(&self) -> Result<Vec<Package>> {
        self.fetch_all(
            schema::SELECT_FEATURED_PACKAGES,
            Vec::new(),
            row_to_package,
            Package::KIND,
        )
        .await
    }

    async fn get_package(&self, id: Uuid) -> Result<Option<Package>> {
        self.fetch_one(
            schema::SELECT_PACKAGE_BY_ID,
            vec![id.to_string().into()],
            row_to_package,
            Package::KIND,
            id.to_string(),
        )
        .await
    }

    async fn create_package(&self, package: NewPackage) -> Result<Package> {
        let package = package.into_package(Uuid::new_v4(), Utc::now());
        self.execute(
            schema::INSERT_PACKAGE,
            package_params(&package),
            Package::KIND,
            package.id.to_string(),
        )
        .await?;
        Ok(package)
    }

    async fn update_package(&self, id: Uuid, patch: PackagePatch) -> Result<Option<Package>> {
        self.update_returning(
            schema::UPDATE_PACKAGE,
            package_patch_params(id, patch),
            row_to_package,
            Package::KIND,
            id.to_string(),
        )
        .await
    }

    async fn delete_package(&self, id: Uuid) -> Result<bool> {
        self.delete::<Package>(id).await
    }
}

// ============================================================================
// GalleryImageRepository implementation
// ============================================================================

#[async_trait]
impl GalleryImageRepository for SqliteRepository {
    async fn get_gallery_images(&self) -> Result<Vec<GalleryImage>> {
        self.fetch_all(
            schema::SELECT_GALLERY_IMAGES,
            Vec::new(),
            row_to_gallery_image,
            GalleryImage::KIND,
        )
        .await
    }

    async fn get_approved_gallery_images(&self) -> Result<Vec<GalleryImage>> {
        self.fetch_all(
            schema::SELECT_APPROVED_GALLERY_IMAGES,
            Vec::new(),
            row_to_gallery_image,
            GalleryImage::KIND,
        )
        .await
    }

    async fn get_gallery_image(&self, id: Uuid) -> Result<Option<GalleryImage>> {
        self.fetch_one(
            schema::SELECT_GALLERY_IMAGE_BY_ID,
            vec![id.to_string().into()],
            row_to_gallery_image,
            GalleryImage::KIND,
            id.to_string(),
        )
        .await
    }

    async fn create_gallery_image(&self, image: NewGalleryImage) -> Result<GalleryImage> {
        let image = image.into_image(Uuid::new_v4(), Utc::now());
        self.execute(
            schema::INSERT_GALLERY_IMAGE,
            gallery_image_params(&image),
            GalleryImage::KIND,
            image.id.to_string(),
        )
        .await?;
        Ok(image)
    }

    async fn approve_gallery_image(&self, id: Uuid) -> Result<Option<GalleryImage>> {
        self.update_returning(
            schema::APPROVE_GALLERY_IMAGE,
            vec![id.to_string().into()],
            row_to_gallery_image,
            GalleryImage::KIND,
            id.to_string(),
        )
        .await
    }

    async fn delete_gallery_image(&self, id: Uuid) -> Result<bool> {
        self.delete::<GalleryImage>(id).await
    }
}

#[cfg(test)]
mod tests {
    use ttrave_core::site::{DEFAULT_ADMIN_PASSWORD, DEFAULT_CONTENT};

    use super::*;

    #[tokio::test]
    async fn test_fresh_database_is_seeded() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let admin = repo.get_user_by_username("admin").await.unwrap().unwrap();
        assert_eq!(admin.password, DEFAULT_ADMIN_PASSWORD);

        let content = repo.get_content().await.unwrap();
        assert_eq!(content.len(), DEFAULT_CONTENT.len());
    }

    #[tokio::test]
    async fn test_seeding_twice_adds_nothing() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let outcome = repo.seed_defaults(&SeedData::default()).await.unwrap();

        assert_eq!(outcome, SeedOutcome::default());
        assert_eq!(repo.get_content().await.unwrap().len(), DEFAULT_CONTENT.len());
    }

    #[tokio::test]
    async fn test_seeding_skips_content_when_any_row_exists() {
        let repo = SqliteRepository::open_in_memory(&SeedData {
            admin: NewUser::new("admin", "pw"),
            content: vec![NewContent::new("site.name", "Custom")],
        })
        .await
        .unwrap();

        let outcome = repo.seed_defaults(&SeedData::default()).await.unwrap();

        assert!(!outcome.admin_created);
        assert_eq!(outcome.content_rows, 0);
        let content = repo.get_content().await.unwrap();
        assert_eq!(content.len(), 1);
        assert_eq!(content[0].value, "Custom");
    }

    #[tokio::test]
    async fn test_file_database_persists_across_reopen() {
        let dir = std::env::temp_dir().join(format!("ttrave-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("ttrave.db");
        let path = path.to_str().unwrap();

        let created = {
            let repo = SqliteRepository::new(path).await.unwrap();
            repo.create_gallery_image(NewGalleryImage::new("Dunes", "https://img/dunes.jpg"))
                .await
                .unwrap()
        };

        let reopened = SqliteRepository::new(path).await.unwrap();
        assert_eq!(
            reopened.get_gallery_image(created.id).await.unwrap(),
            Some(created)
        );
        assert_eq!(
            reopened.get_content().await.unwrap().len(),
            DEFAULT_CONTENT.len()
        );

        drop(reopened);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn test_disconnected_reads_are_empty() {
        let repo = SqliteRepository::disconnected();

        assert!(!repo.is_connected());
        assert!(repo.get_destinations().await.unwrap().is_empty());
        assert!(repo.get_content().await.unwrap().is_empty());
        assert!(repo.get_user(Uuid::new_v4()).await.unwrap().is_none());
        assert!(repo
            .get_content_by_key("hero.title")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_disconnected_creates_are_unavailable() {
        let repo = SqliteRepository::disconnected();

        assert_eq!(
            repo.create_user(NewUser::new("admin", "pw")).await,
            Err(RepositoryError::Unavailable)
        );
        assert_eq!(
            repo.create_contact_submission(NewContactSubmission::new("A", "a@b.c", "Hi"))
                .await,
            Err(RepositoryError::Unavailable)
        );
        assert_eq!(
            repo.set_content(NewContent::new("k", "v")).await,
            Err(RepositoryError::Unavailable)
        );
        assert_eq!(
            repo.create_newsletter_subscription(NewNewsletterSubscription::new("a@b.c"))
                .await,
            Err(RepositoryError::Unavailable)
        );
        assert_eq!(
            repo.create_gallery_image(NewGalleryImage::new("Dunes", "https://img/dunes.jpg"))
                .await,
            Err(RepositoryError::Unavailable)
        );
        assert_eq!(
            repo.seed_defaults(&SeedData::default()).await,
            Err(RepositoryError::Unavailable)
        );
    }

    #[tokio::test]
    async fn test_disconnected_updates_and_deletes_match_nothing() {
        let repo = SqliteRepository::disconnected();
        let id = Uuid::new_v4();

        assert_eq!(repo.update_user_password(id, "x").await, Ok(None));
        assert_eq!(
            repo.update_destination(id, DestinationPatch::new().with_name("Goa"))
                .await,
            Ok(None)
        );
        assert_eq!(repo.update_content("site.name", "X").await, Ok(None));
        assert_eq!(
            repo.update_contact_submission_status(id, "read").await,
            Ok(None)
        );
        assert_eq!(repo.unsubscribe_newsletter("a@b.c").await, Ok(None));
        assert_eq!(
            repo.update_package(id, PackagePatch::new().with_price(1)).await,
            Ok(None)
        );
        assert_eq!(repo.approve_gallery_image(id).await, Ok(None));
        assert_eq!(repo.delete_destination(id).await, Ok(false));
        assert_eq!(repo.delete_package(id).await, Ok(false));
        assert_eq!(repo.delete_gallery_image(id).await, Ok(false));
    }

    #[tokio::test]
    async fn test_seeding_failure_does_not_prevent_opening() {
        let dir = std::env::temp_dir().join(format!("ttrave-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("ttrave.db");
        {
            let conn = rusqlite::Connection::open(&path).unwrap();
            conn.execute_batch(
                "CREATE TABLE users (id TEXT PRIMARY KEY, username TEXT NOT NULL, created_at TEXT NOT NULL);",
            )
            .unwrap();
        }

        let repo = SqliteRepository::new(path.to_str().unwrap()).await.unwrap();

        assert!(repo.is_connected());
        assert!(repo.get_content().await.unwrap().is_empty());

        drop(repo);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn test_duplicate_usernames_resolve_to_first() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        let second = repo.create_user(NewUser::new("admin", "other")).await.unwrap();

        let found = repo.get_user_by_username("admin").await.unwrap().unwrap();
        assert_ne!(found.id, second.id);
        assert_eq!(found.password, DEFAULT_ADMIN_PASSWORD);
    }
}
