//! Input types for creating and updating site records.
//!
//! Callers never supply identifiers or timestamps; those are assigned by the
//! storage backend when it turns one of these into a stored record.
//! Following the Functional Core pattern, these are pure data types with no I/O.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{
    ContactSubmission, Content, Destination, DestinationType, GalleryImage,
    NewsletterSubscription, Package, User, DEFAULT_DESTINATION_ICON, DEFAULT_SUBMISSION_STATUS,
};
use crate::serde::{deserialize_nullable_string, deserialize_optional_string};

/// Treats `Some("")` the same as `None`.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn into_user(self, id: Uuid, now: DateTime<Utc>) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDestination {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub destination_type: DestinationType,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub icon: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl NewDestination {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        destination_type: DestinationType,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            destination_type,
            image_url: None,
            icon: None,
            is_active: None,
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = Some(false);
        self
    }

    /// Applies defaults: the map-pin icon and `is_active = true`.
    pub fn into_destination(self, id: Uuid, now: DateTime<Utc>) -> Destination {
        Destination {
            id,
            name: self.name,
            description: self.description,
            destination_type: self.destination_type,
            image_url: non_empty(self.image_url),
            icon: non_empty(self.icon).unwrap_or_else(|| DEFAULT_DESTINATION_ICON.to_string()),
            is_active: self.is_active.unwrap_or(true),
            created_at: now,
        }
    }
}

/// Partial update for a destination. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub destination_type: Option<DestinationType>,
    /// `Some(None)` clears the image.
    #[serde(
        default,
        deserialize_with = "deserialize_nullable_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl DestinationPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_type(mut self, destination_type: DestinationType) -> Self {
        self.destination_type = Some(destination_type);
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(Some(image_url.into()));
        self
    }

    pub fn without_image_url(mut self) -> Self {
        self.image_url = Some(None);
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn apply_to(self, destination: &mut Destination) {
        if let Some(name) = self.name {
            destination.name = name;
        }
        if let Some(description) = self.description {
            destination.description = description;
        }
        if let Some(destination_type) = self.destination_type {
            destination.destination_type = destination_type;
        }
        if let Some(image_url) = self.image_url {
            destination.image_url = image_url;
        }
        if let Some(icon) = self.icon {
            destination.icon = icon;
        }
        if let Some(is_active) = self.is_active {
            destination.is_active = is_active;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContent {
    pub key: String,
    pub value: String,
}

impl NewContent {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn into_content(self, id: Uuid, now: DateTime<Utc>) -> Content {
        Content {
            id,
            key: self.key,
            value: self.value,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub subject: Option<String>,
    pub message: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub status: Option<String>,
}

impl NewContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            subject: None,
            message: message.into(),
            status: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn into_submission(self, id: Uuid, now: DateTime<Utc>) -> ContactSubmission {
        ContactSubmission {
            id,
            name: self.name,
            email: self.email,
            phone: non_empty(self.phone),
            subject: non_empty(self.subject),
            message: self.message,
            status: non_empty(self.status)
                .unwrap_or_else(|| DEFAULT_SUBMISSION_STATUS.to_string()),
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNewsletterSubscription {
    pub email: String,
}

impl NewNewsletterSubscription {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// New subscriptions always start active.
    pub fn into_subscription(self, id: Uuid, now: DateTime<Utc>) -> NewsletterSubscription {
        NewsletterSubscription {
            id,
            email: self.email,
            is_active: true,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPackage {
    pub destination_id: Uuid,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub duration: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl NewPackage {
    pub fn new(
        destination_id: Uuid,
        title: impl Into<String>,
        description: impl Into<String>,
        price: i64,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            destination_id,
            title: title.into(),
            description: description.into(),
            price,
            duration: duration.into(),
            image_url: None,
            is_featured: None,
            is_active: None,
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn featured(mut self) -> Self {
        self.is_featured = Some(true);
        self
    }

    /// Applies defaults: not featured, active.
    pub fn into_package(self, id: Uuid, now: DateTime<Utc>) -> Package {
        Package {
            id,
            destination_id: self.destination_id,
            title: self.title,
            description: self.description,
            price: self.price,
            duration: self.duration,
            image_url: non_empty(self.image_url),
            is_featured: self.is_featured.unwrap_or(false),
            is_active: self.is_active.unwrap_or(true),
            created_at: now,
        }
    }
}

/// Partial update for a package. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// `Some(None)` clears the image.
    #[serde(
        default,
        deserialize_with = "deserialize_nullable_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl PackagePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_price(mut self, price: i64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(Some(image_url.into()));
        self
    }

    pub fn without_image_url(mut self) -> Self {
        self.image_url = Some(None);
        self
    }

    pub fn with_featured(mut self, is_featured: bool) -> Self {
        self.is_featured = Some(is_featured);
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn apply_to(self, package: &mut Package) {
        if let Some(destination_id) = self.destination_id {
            package.destination_id = destination_id;
        }
        if let Some(title) = self.title {
            package.title = title;
        }
        if let Some(description) = self.description {
            package.description = description;
        }
        if let Some(price) = self.price {
            package.price = price;
        }
        if let Some(duration) = self.duration {
            package.duration = duration;
        }
        if let Some(image_url) = self.image_url {
            package.image_url = image_url;
        }
        if let Some(is_featured) = self.is_featured {
            package.is_featured = is_featured;
        }
        if let Some(is_active) = self.is_active {
            package.is_active = is_active;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGalleryImage {
    pub title: String,
    pub image_url: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub uploaded_by: Option<String>,
}

impl NewGalleryImage {
    pub fn new(title: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image_url: image_url.into(),
            description: None,
            uploaded_by: None,
        }
    }

    pub fn with_uploader(mut self, uploaded_by: impl Into<String>) -> Self {
        self.uploaded_by = Some(uploaded_by.into());
        self
    }

    /// Images always start unapproved, whatever the submitter claims.
    pub fn into_image(self, id: Uuid, now: DateTime<Utc>) -> GalleryImage {
        GalleryImage {
            id,
            title: self.title,
            image_url: self.image_url,
            description: non_empty(self.description),
            uploaded_by: non_empty(self.uploaded_by),
            is_approved: false,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_defaults() {
        let destination = NewDestination::new("Goa", "Beaches", DestinationType::Domestic)
            .into_destination(Uuid::new_v4(), Utc::now());

        assert_eq!(destination.icon, DEFAULT_DESTINATION_ICON);
        assert!(destination.is_active);
        assert_eq!(destination.image_url, None);
    }

    #[test]
    fn test_destination_empty_icon_uses_default() {
        let destination = NewDestination::new("Bali", "Temples", DestinationType::International)
            .with_icon("")
            .into_destination(Uuid::new_v4(), Utc::now());

        assert_eq!(destination.icon, DEFAULT_DESTINATION_ICON);
    }

    #[test]
    fn test_destination_explicit_values_kept() {
        let destination = NewDestination::new("Bali", "Temples", DestinationType::International)
            .with_icon("bi-airplane")
            .inactive()
            .into_destination(Uuid::new_v4(), Utc::now());

        assert_eq!(destination.icon, "bi-airplane");
        assert!(!destination.is_active);
    }

    #[test]
    fn test_destination_patch_only_touches_supplied_fields() {
        let mut destination = NewDestination::new("Goa", "Beaches", DestinationType::Domestic)
            .with_image_url("https://img/goa.jpg")
            .into_destination(Uuid::new_v4(), Utc::now());
        let before = destination.clone();

        DestinationPatch::new()
            .with_name("North Goa")
            .apply_to(&mut destination);

        assert_eq!(destination.name, "North Goa");
        assert_eq!(destination.description, before.description);
        assert_eq!(destination.image_url, before.image_url);
        assert_eq!(destination.id, before.id);
        assert_eq!(destination.created_at, before.created_at);
    }

    #[test]
    fn test_patch_can_clear_image_url() {
        let mut package = NewPackage::new(Uuid::new_v4(), "Goa Getaway", "Sun", 25_000, "4D/3N")
            .with_image_url("https://img/goa.jpg")
            .into_package(Uuid::new_v4(), Utc::now());

        PackagePatch::new().with_price(1).apply_to(&mut package);
        assert_eq!(package.image_url.as_deref(), Some("https://img/goa.jpg"));

        PackagePatch::new().without_image_url().apply_to(&mut package);
        assert_eq!(package.image_url, None);
    }

    #[test]
    fn test_patch_json_null_clears_and_absent_keeps() {
        let clear: DestinationPatch = serde_json::from_str(r#"{"imageUrl":null}"#).unwrap();
        let keep: DestinationPatch = serde_json::from_str(r#"{"name":"Goa"}"#).unwrap();
        let set: DestinationPatch =
            serde_json::from_str(r#"{"imageUrl":"https://img/goa.jpg"}"#).unwrap();

        assert_eq!(clear.image_url, Some(None));
        assert_eq!(keep.image_url, None);
        assert_eq!(set.image_url, Some(Some("https://img/goa.jpg".to_string())));
    }

    #[test]
    fn test_submission_status_defaults_to_new() {
        let submission = NewContactSubmission::new("Asha", "asha@example.com", "Hello")
            .into_submission(Uuid::new_v4(), Utc::now());
        assert_eq!(submission.status, "new");

        let mut with_blank = NewContactSubmission::new("Asha", "asha@example.com", "Hello");
        with_blank.status = Some("  ".to_string());
        let submission = with_blank.into_submission(Uuid::new_v4(), Utc::now());
        assert_eq!(submission.status, "new");
    }

    #[test]
    fn test_package_defaults() {
        let package = NewPackage::new(Uuid::new_v4(), "Goa Getaway", "Sun", 25_000, "4D/3N")
            .into_package(Uuid::new_v4(), Utc::now());

        assert!(!package.is_featured);
        assert!(package.is_active);
    }

    #[test]
    fn test_gallery_image_starts_unapproved() {
        let image = NewGalleryImage::new("Sunset", "https://img/sunset.jpg")
            .with_uploader("Ravi")
            .into_image(Uuid::new_v4(), Utc::now());

        assert!(!image.is_approved);
        assert_eq!(image.uploaded_by.as_deref(), Some("Ravi"));
    }

    #[test]
    fn test_new_destination_from_form_json() {
        let json = r#"{"name":"Goa","description":"Beaches","type":"domestic","icon":""}"#;
        let input: NewDestination = serde_json::from_str(json).unwrap();

        assert_eq!(input.destination_type, DestinationType::Domestic);
        assert_eq!(input.icon, None);
        assert_eq!(input.is_active, None);
    }
}
