mod error;
mod policy;
mod traits;

pub use error::{RepositoryError, Result};
pub use policy::{DeletePolicy, Deletable, Record};
pub use traits::{
    ContactSubmissionRepository, ContentRepository, DestinationRepository,
    GalleryImageRepository, NewsletterRepository, PackageRepository, Storage, UserRepository,
};
