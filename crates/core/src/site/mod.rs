mod defaults;
mod error;
mod requests;
mod types;

pub use defaults::{SeedData, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME, DEFAULT_CONTENT};
pub use error::SiteError;
pub use requests::{
    DestinationPatch, NewContactSubmission, NewContent, NewDestination, NewGalleryImage,
    NewNewsletterSubscription, NewPackage, NewUser, PackagePatch,
};
pub use types::{
    ContactSubmission, Content, Destination, DestinationType, GalleryImage,
    NewsletterSubscription, Package, User, DEFAULT_DESTINATION_ICON, DEFAULT_SUBMISSION_STATUS,
};
