//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Column order in every `SELECT` and `RETURNING` list
//! matches the row readers in `conversions`.

use ttrave_core::site::{Destination, GalleryImage, Package};
use ttrave_core::storage::{DeletePolicy, Deletable};

/// SQL statement to create all tables.
///
/// Booleans are stored as 0/1 integers and timestamps as RFC 3339 text.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    username TEXT NOT NULL,
    password TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS destinations (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    type TEXT NOT NULL CHECK (type IN ('domestic', 'international')),
    image_url TEXT,
    icon TEXT NOT NULL DEFAULT 'bi-geo-alt-fill',
    is_active INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS content (
    id TEXT PRIMARY KEY,
    "key" TEXT NOT NULL UNIQUE,
    value TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS contact_submissions (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT,
    subject TEXT,
    message TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'new',
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS newsletter_subscriptions (
    id TEXT PRIMARY KEY,
    email TEXT NOT NULL UNIQUE,
    is_active INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS packages (
    id TEXT PRIMARY KEY,
    destination_id TEXT NOT NULL,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    price INTEGER NOT NULL,
    duration TEXT NOT NULL,
    image_url TEXT,
    is_featured INTEGER NOT NULL DEFAULT 0,
    is_active INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS gallery_images (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    image_url TEXT NOT NULL,
    description TEXT,
    uploaded_by TEXT,
    is_approved INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_users_username ON users(username);
CREATE INDEX IF NOT EXISTS idx_destinations_type ON destinations(type, is_active);
CREATE INDEX IF NOT EXISTS idx_packages_destination_id ON packages(destination_id);
"#;

// User queries
pub const INSERT_USER: &str = r#"
INSERT INTO users (id, username, password, created_at)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const SELECT_USER_BY_ID: &str = r#"
SELECT id, username, password, created_at
FROM users
WHERE id = ?1
"#;

pub const SELECT_USER_BY_USERNAME: &str = r#"
SELECT id, username, password, created_at
FROM users
WHERE username = ?1
ORDER BY rowid
LIMIT 1
"#;

pub const UPDATE_USER_PASSWORD: &str = r#"
UPDATE users SET password = ?2
WHERE id = ?1
RETURNING id, username, password, created_at
"#;

pub const USER_EXISTS_BY_USERNAME: &str = r#"
SELECT EXISTS(SELECT 1 FROM users WHERE username = ?1)
"#;

// Destination queries
pub const INSERT_DESTINATION: &str = r#"
INSERT INTO destinations (id, name, description, type, image_url, icon, is_active, created_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
"#;

pub const SELECT_ACTIVE_DESTINATIONS: &str = r#"
SELECT id, name, description, type, image_url, icon, is_active, created_at
FROM destinations
WHERE is_active = 1
ORDER BY rowid
"#;

pub const SELECT_ACTIVE_DESTINATIONS_BY_TYPE: &str = r#"
SELECT id, name, description, type, image_url, icon, is_active, created_at
FROM destinations
WHERE is_active = 1 AND type = ?1
ORDER BY rowid
"#;

pub const SELECT_DESTINATION_BY_ID: &str = r#"
SELECT id, name, description, type, image_url, icon, is_active, created_at
FROM destinations
WHERE id = ?1
"#;

/// `NULL` parameters leave the column unchanged. `image_url` is written,
/// possibly as `NULL`, only when its flag parameter is true.
pub const UPDATE_DESTINATION: &str = r#"
UPDATE destinations SET
    name = COALESCE(?2, name),
    description = COALESCE(?3, description),
    type = COALESCE(?4, type),
    image_url = CASE WHEN ?8 THEN ?5 ELSE image_url END,
    icon = COALESCE(?6, icon),
    is_active = COALESCE(?7, is_active)
WHERE id = ?1
RETURNING id, name, description, type, image_url, icon, is_active, created_at
"#;

// Content queries
pub const INSERT_CONTENT: &str = r#"
INSERT INTO content (id, "key", value, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_CONTENT: &str = r#"
SELECT id, "key", value, created_at, updated_at
FROM content
ORDER BY rowid
"#;

pub const SELECT_CONTENT_BY_KEY: &str = r#"
SELECT id, "key", value, created_at, updated_at
FROM content
WHERE "key" = ?1
"#;

pub const UPSERT_CONTENT: &str = r#"
INSERT INTO content (id, "key", value, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?4)
ON CONFLICT("key") DO UPDATE SET
    value = excluded.value,
    updated_at = excluded.updated_at
RETURNING id, "key", value, created_at, updated_at
"#;

pub const UPDATE_CONTENT_VALUE: &str = r#"
UPDATE content SET value = ?2, updated_at = ?3
WHERE "key" = ?1
RETURNING id, "key", value, created_at, updated_at
"#;

pub const CONTENT_EXISTS: &str = r#"
SELECT EXISTS(SELECT 1 FROM content)
"#;

// Contact submission queries
pub const INSERT_CONTACT_SUBMISSION: &str = r#"
INSERT INTO contact_submissions (id, name, email, phone, subject, message, status, created_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
"#;

pub const SELECT_CONTACT_SUBMISSIONS: &str = r#"
SELECT id, name, email, phone, subject, message, status, created_at
FROM contact_submissions
ORDER BY rowid
"#;

pub const SELECT_CONTACT_SUBMISSION_BY_ID: &str = r#"
SELECT id, name, email, phone, subject, message, status, created_at
FROM contact_submissions
WHERE id = ?1
"#;

pub const UPDATE_CONTACT_SUBMISSION_STATUS: &str = r#"
UPDATE contact_submissions SET status = ?2
WHERE id = ?1
RETURNING id, name, email, phone, subject, message, status, created_at
"#;

// Newsletter queries
/// Returns the existing row, reactivated, when the email is already known.
pub const UPSERT_NEWSLETTER_SUBSCRIPTION: &str = r#"
INSERT INTO newsletter_subscriptions (id, email, is_active, created_at)
VALUES (?1, ?2, 1, ?3)
ON CONFLICT(email) DO UPDATE SET is_active = 1
RETURNING id, email, is_active, created_at
"#;

pub const SELECT_NEWSLETTER_SUBSCRIPTIONS: &str = r#"
SELECT id, email, is_active, created_at
FROM newsletter_subscriptions
ORDER BY rowid
"#;

pub const SELECT_NEWSLETTER_SUBSCRIPTION_BY_ID: &str = r#"
SELECT id, email, is_active, created_at
FROM newsletter_subscriptions
WHERE id = ?1
"#;

pub const SELECT_NEWSLETTER_SUBSCRIPTION_BY_EMAIL: &str = r#"
SELECT id, email, is_active, created_at
FROM newsletter_subscriptions
WHERE email = ?1
"#;

pub const UNSUBSCRIBE_NEWSLETTER: &str = r#"
UPDATE newsletter_subscriptions SET is_active = 0
WHERE email = ?1
RETURNING id, email, is_active, created_at
"#;

// Package queries
pub const INSERT_PACKAGE: &str = r#"
INSERT INTO packages (
    id, destination_id, title, description, price, duration,
    image_url, is_featured, is_active, created_at
)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
"#;

pub const SELECT_ACTIVE_PACKAGES: &str = r#"
SELECT id, destination_id, title, description, price, duration,
       image_url, is_featured, is_active, created_at
FROM packages
WHERE is_active = 1
ORDER BY rowid
"#;

pub const SELECT_ACTIVE_PACKAGES_BY_DESTINATION: &str = r#"
SELECT id, destination_id, title, description, price, duration,
       image_url, is_featured, is_active, created_at
FROM packages
WHERE is_active = 1 AND destination_id = ?1
ORDER BY rowid
"#;

pub const SELECT_FEATURED_PACKAGES: &str = r#"
SELECT id, destination_id, title, description, price, duration,
       image_url, is_featured, is_active, created_at
FROM packages
WHERE is_active = 1 AND is_featured = 1
ORDER BY rowid
"#;

pub const SELECT_PACKAGE_BY_ID: &str = r#"
SELECT id, destination_id, title, description, price, duration,
       image_url, is_featured, is_active, created_at
FROM packages
WHERE id = ?1
"#;

/// `NULL` parameters leave the column unchanged. `image_url` is written,
/// possibly as `NULL`, only when its flag parameter is true.
pub const UPDATE_PACKAGE: &str = r#"
UPDATE packages SET
    destination_id = COALESCE(?2, destination_id),
    title = COALESCE(?3, title),
    description = COALESCE(?4, description),
    price = COALESCE(?5, price),
    duration = COALESCE(?6, duration),
    image_url = CASE WHEN ?10 THEN ?7 ELSE image_url END,
    is_featured = COALESCE(?8, is_featured),
    is_active = COALESCE(?9, is_active)
WHERE id = ?1
RETURNING id, destination_id, title, description, price, duration,
          image_url, is_featured, is_active, created_at
"#;

// Gallery queries
pub const INSERT_GALLERY_IMAGE: &str = r#"
INSERT INTO gallery_images (id, title, image_url, description, uploaded_by, is_approved, created_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub const SELECT_GALLERY_IMAGES: &str = r#"
SELECT id, title, image_url, description, uploaded_by, is_approved, created_at
FROM gallery_images
ORDER BY rowid
"#;

pub const SELECT_APPROVED_GALLERY_IMAGES: &str = r#"
SELECT id, title, image_url, description, uploaded_by, is_approved, created_at
FROM gallery_images
WHERE is_approved = 1
ORDER BY rowid
"#;

pub const SELECT_GALLERY_IMAGE_BY_ID: &str = r#"
SELECT id, title, image_url, description, uploaded_by, is_approved, created_at
FROM gallery_images
WHERE id = ?1
"#;

pub const APPROVE_GALLERY_IMAGE: &str = r#"
UPDATE gallery_images SET is_approved = 1
WHERE id = ?1
RETURNING id, title, image_url, description, uploaded_by, is_approved, created_at
"#;

/// Table backing a deletable record kind.
pub trait SqliteTable: Deletable {
    const TABLE: &'static str;
}

impl SqliteTable for Destination {
    const TABLE: &'static str = "destinations";
}

impl SqliteTable for Package {
    const TABLE: &'static str = "packages";
}

impl SqliteTable for GalleryImage {
    const TABLE: &'static str = "gallery_images";
}

/// Builds the `delete_*` statement for a kind from its [`DeletePolicy`].
///
/// A soft delete matches the row even when it is already inactive, so
/// deleting twice still reports a change.
pub fn delete_statement<T: SqliteTable>() -> String {
    match T::DELETE_POLICY {
        DeletePolicy::Soft => format!("UPDATE {} SET is_active = 0 WHERE id = ?1", T::TABLE),
        DeletePolicy::Hard => format!("DELETE FROM {} WHERE id = ?1", T::TABLE),
    }
}
