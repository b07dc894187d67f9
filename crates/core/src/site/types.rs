use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::SiteError;

/// Icon used for destinations created without one.
pub const DEFAULT_DESTINATION_ICON: &str = "bi-geo-alt-fill";

/// Status given to contact submissions created without one.
pub const DEFAULT_SUBMISSION_STATUS: &str = "new";

/// An account that can sign in to the admin area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Stored as supplied. Hashing, if any, happens before it reaches storage.
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Whether a destination is inside or outside the country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationType {
    Domestic,
    International,
}

impl DestinationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DestinationType::Domestic => "domestic",
            DestinationType::International => "international",
        }
    }
}

impl fmt::Display for DestinationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DestinationType {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "domestic" => Ok(DestinationType::Domestic),
            "international" => Ok(DestinationType::International),
            _ => Err(SiteError::UnknownDestinationType(s.to_string())),
        }
    }
}

/// A place the agency sells trips to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub destination_type: DestinationType,
    pub image_url: Option<String>,
    /// Bootstrap icon class.
    pub icon: String,
    /// Inactive destinations are hidden from listings but still resolvable by id.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// A single editable key/value pair of site copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: Uuid,
    pub key: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A message left through the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    /// Free-form workflow status, `"new"` until staff changes it.
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// A newsletter sign-up. One row per email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscription {
    pub id: Uuid,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// A bookable trip to a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: Uuid,
    pub destination_id: Uuid,
    pub title: String,
    pub description: String,
    /// Price in whole rupees.
    pub price: i64,
    /// Human readable duration, e.g. "5 Days / 4 Nights".
    pub duration: String,
    pub image_url: Option<String>,
    pub is_featured: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// A traveller photo submitted for the public gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: Uuid,
    pub title: String,
    pub image_url: String,
    pub description: Option<String>,
    pub uploaded_by: Option<String>,
    /// Only approved images are shown publicly.
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_type_from_str() {
        assert_eq!(
            "domestic".parse::<DestinationType>().unwrap(),
            DestinationType::Domestic
        );
        assert_eq!(
            "International".parse::<DestinationType>().unwrap(),
            DestinationType::International
        );
        assert_eq!(
            "space".parse::<DestinationType>(),
            Err(SiteError::UnknownDestinationType("space".to_string()))
        );
    }

    #[test]
    fn test_destination_serializes_type_field() {
        let destination = Destination {
            id: Uuid::nil(),
            name: "Goa".to_string(),
            description: "Beaches".to_string(),
            destination_type: DestinationType::Domestic,
            image_url: None,
            icon: DEFAULT_DESTINATION_ICON.to_string(),
            is_active: true,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&destination).unwrap();

        assert_eq!(json["type"], "domestic");
        assert_eq!(json["isActive"], true);
        assert_eq!(json["icon"], "bi-geo-alt-fill");
    }
}
