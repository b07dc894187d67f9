//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and site records.
//! Each reader expects the column order used by the matching `schema` query.

use chrono::{DateTime, Utc};
use rusqlite::types::{Type, Value};
use rusqlite::Row;
use uuid::Uuid;

use ttrave_core::site::{
    ContactSubmission, Content, Destination, DestinationPatch, DestinationType, GalleryImage,
    NewsletterSubscription, Package, PackagePatch, User,
};

/// Expected columns: id, username, password, created_at
pub fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: parse_uuid(0, &row.get::<_, String>(0)?)?,
        username: row.get(1)?,
        password: row.get(2)?,
        created_at: parse_datetime(3, &row.get::<_, String>(3)?)?,
    })
}

/// Expected columns: id, name, description, type, image_url, icon, is_active, created_at
pub fn row_to_destination(row: &Row) -> rusqlite::Result<Destination> {
    Ok(Destination {
        id: parse_uuid(0, &row.get::<_, String>(0)?)?,
        name: row.get(1)?,
        description: row.get(2)?,
        destination_type: parse_destination_type(3, &row.get::<_, String>(3)?)?,
        image_url: row.get(4)?,
        icon: row.get(5)?,
        is_active: row.get(6)?,
        created_at: parse_datetime(7, &row.get::<_, String>(7)?)?,
    })
}

/// Expected columns: id, key, value, created_at, updated_at
pub fn row_to_content(row: &Row) -> rusqlite::Result<Content> {
    Ok(Content {
        id: parse_uuid(0, &row.get::<_, String>(0)?)?,
        key: row.get(1)?,
        value: row.get(2)?,
        created_at: parse_datetime(3, &row.get::<_, String>(3)?)?,
        updated_at: parse_datetime(4, &row.get::<_, String>(4)?)?,
    })
}

/// Expected columns: id, name, email, phone, subject, message, status, created_at
pub fn row_to_contact_submission(row: &Row) -> rusqlite::Result<ContactSubmission> {
    Ok(ContactSubmission {
        id: parse_uuid(0, &row.get::<_, String>(0)?)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        subject: row.get(4)?,
        message: row.get(5)?,
        status: row.get(6)?,
        created_at: parse_datetime(7, &row.get::<_, String>(7)?)?,
    })
}

/// Expected columns: id, email, is_active, created_at
pub fn row_to_newsletter_subscription(row: &Row) -> rusqlite::Result<NewsletterSubscription> {
    Ok(NewsletterSubscription {
        id: parse_uuid(0, &row.get::<_, String>(0)?)?,
        email: row.get(1)?,
        is_active: row.get(2)?,
        created_at: parse_datetime(3, &row.get::<_, String>(3)?)?,
    })
}

/// Expected columns: id, destination_id, title, description, price, duration,
/// image_url, is_featured, is_active, created_at
pub fn row_to_package(row: &Row) -> rusqlite::Result<Package> {
    Ok(Package {
        id: parse_uuid(0, &row.get::<_, String>(0)?)?,
        destination_id: parse_uuid(1, &row.get::<_, String>(1)?)?,
        title: row.get(2)?,
        description: row.get(3)?,
        price: row.get(4)?,
        duration: row.get(5)?,
        image_url: row.get(6)?,
        is_featured: row.get(7)?,
        is_active: row.get(8)?,
        created_at: parse_datetime(9, &row.get::<_, String>(9)?)?,
    })
}

/// Expected columns: id, title, image_url, description, uploaded_by, is_approved, created_at
pub fn row_to_gallery_image(row: &Row) -> rusqlite::Result<GalleryImage> {
    Ok(GalleryImage {
        id: parse_uuid(0, &row.get::<_, String>(0)?)?,
        title: row.get(1)?,
        image_url: row.get(2)?,
        description: row.get(3)?,
        uploaded_by: row.get(4)?,
        is_approved: row.get(5)?,
        created_at: parse_datetime(6, &row.get::<_, String>(6)?)?,
    })
}

fn conversion_error(
    column: usize,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err))
}

fn parse_uuid(column: usize, s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| conversion_error(column, e))
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_error(column, e))
}

fn parse_destination_type(column: usize, s: &str) -> rusqlite::Result<DestinationType> {
    s.parse().map_err(|e| conversion_error(column, e))
}

/// Format a DateTime<Utc> for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

// ============================================================================
// Statement parameters, in `schema` placeholder order
// ============================================================================

pub fn user_params(user: &User) -> Vec<Value> {
    vec![
        user.id.to_string().into(),
        user.username.clone().into(),
        user.password.clone().into(),
        format_datetime(&user.created_at).into(),
    ]
}

pub fn destination_params(destination: &Destination) -> Vec<Value> {
    vec![
        destination.id.to_string().into(),
        destination.name.clone().into(),
        destination.description.clone().into(),
        destination.destination_type.as_str().to_string().into(),
        destination.image_url.clone().into(),
        destination.icon.clone().into(),
        destination.is_active.into(),
        format_datetime(&destination.created_at).into(),
    ]
}

/// A nullable patch field as (value, set flag). The flag tells a clear apart
/// from "leave unchanged".
fn nullable_patch_params(field: Option<Option<String>>) -> (Value, Value) {
    match field {
        Some(value) => (value.into(), true.into()),
        None => (Value::Null, false.into()),
    }
}

pub fn destination_patch_params(id: Uuid, patch: DestinationPatch) -> Vec<Value> {
    let (image_url, set_image_url) = nullable_patch_params(patch.image_url);
    vec![
        id.to_string().into(),
        patch.name.into(),
        patch.description.into(),
        patch
            .destination_type
            .map(|t| t.as_str().to_string())
            .into(),
        image_url,
        patch.icon.into(),
        patch.is_active.into(),
        set_image_url,
    ]
}

pub fn content_params(content: &Content) -> Vec<Value> {
    vec![
        content.id.to_string().into(),
        content.key.clone().into(),
        content.value.clone().into(),
        format_datetime(&content.created_at).into(),
        format_datetime(&content.updated_at).into(),
    ]
}

pub fn contact_submission_params(submission: &ContactSubmission) -> Vec<Value> {
    vec![
        submission.id.to_string().into(),
        submission.name.clone().into(),
        submission.email.clone().into(),
        submission.phone.clone().into(),
        submission.subject.clone().into(),
        submission.message.clone().into(),
        submission.status.clone().into(),
        format_datetime(&submission.created_at).into(),
    ]
}

pub fn package_params(package: &Package) -> Vec<Value> {
    vec![
        package.id.to_string().into(),
        package.destination_id.to_string().into(),
        package.title.clone().into(),
        package.description.clone().into(),
        package.price.into(),
        package.duration.clone().into(),
        package.image_url.clone().into(),
        package.is_featured.into(),
        package.is_active.into(),
        format_datetime(&package.created_at).into(),
    ]
}

pub fn package_patch_params(id: Uuid, patch: PackagePatch) -> Vec<Value> {
    let (image_url, set_image_url) = nullable_patch_params(patch.image_url);
    vec![
        id.to_string().into(),
        patch.destination_id.map(|d| d.to_string()).into(),
        patch.title.into(),
        patch.description.into(),
        patch.price.into(),
        patch.duration.into(),
        image_url,
        patch.is_featured.into(),
        patch.is_active.into(),
        set_image_url,
    ]
}

pub fn gallery_image_params(image: &GalleryImage) -> Vec<Value> {
    vec![
        image.id.to_string().into(),
        image.title.clone().into(),
        image.image_url.clone().into(),
        image.description.clone().into(),
        image.uploaded_by.clone().into(),
        image.is_approved.into(),
        format_datetime(&image.created_at).into(),
    ]
}
