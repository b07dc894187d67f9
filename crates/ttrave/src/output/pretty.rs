//! Pretty output formatting.

use ttrave_core::site::{
    ContactSubmission, Content, Destination, GalleryImage, NewsletterSubscription, Package, User,
};

use crate::cli::StatusReport;

/// Formats a titled list, or `empty` when there is nothing to show.
fn format_list<T>(title: &str, items: &[T], empty: &str, format: fn(&T) -> String) -> String {
    if items.is_empty() {
        return empty.to_string();
    }
    let mut output = format!("{title} ({})\n", items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push_str(&format!("\n{}", format(item)));
        output.push('\n');
    }
    output
}

fn active_marker(is_active: bool) -> &'static str {
    if is_active {
        ""
    } else {
        " (inactive)"
    }
}

/// Passwords are never printed.
pub fn format_user(user: &User) -> String {
    format!(
        "{}\n  ID: {}\n  Created: {}",
        user.username, user.id, user.created_at
    )
}

pub fn format_destination(destination: &Destination) -> String {
    let mut output = format!(
        "{} [{}]{}\n  ID: {}\n  Icon: {}\n  Description: {}",
        destination.name,
        destination.destination_type,
        active_marker(destination.is_active),
        destination.id,
        destination.icon,
        destination.description
    );
    if let Some(url) = &destination.image_url {
        output.push_str(&format!("\n  Image: {url}"));
    }
    output
}

pub fn format_destinations(destinations: &[Destination]) -> String {
    format_list(
        "DESTINATIONS",
        destinations,
        "No destinations found.",
        format_destination,
    )
}

pub fn format_content_entry(content: &Content) -> String {
    format!("{} = {}", content.key, content.value)
}

pub fn format_content(content: &[Content]) -> String {
    format_list("CONTENT", content, "No content found.", format_content_entry)
}

pub fn format_submission(submission: &ContactSubmission) -> String {
    let mut output = format!(
        "{} <{}> [{}]\n  ID: {}\n  Received: {}",
        submission.name, submission.email, submission.status, submission.id, submission.created_at
    );
    if let Some(phone) = &submission.phone {
        output.push_str(&format!("\n  Phone: {phone}"));
    }
    if let Some(subject) = &submission.subject {
        output.push_str(&format!("\n  Subject: {subject}"));
    }
    output.push_str(&format!("\n  Message: {}", submission.message));
    output
}

pub fn format_submissions(submissions: &[ContactSubmission]) -> String {
    format_list(
        "CONTACT SUBMISSIONS",
        submissions,
        "No contact submissions found.",
        format_submission,
    )
}

pub fn format_subscription(subscription: &NewsletterSubscription) -> String {
    format!(
        "{}{}\n  ID: {}\n  Since: {}",
        subscription.email,
        active_marker(subscription.is_active),
        subscription.id,
        subscription.created_at
    )
}

pub fn format_subscriptions(subscriptions: &[NewsletterSubscription]) -> String {
    format_list(
        "NEWSLETTER SUBSCRIPTIONS",
        subscriptions,
        "No newsletter subscriptions found.",
        format_subscription,
    )
}

pub fn format_package(package: &Package) -> String {
    let featured = if package.is_featured { " *featured*" } else { "" };
    let mut output = format!(
        "{}{}{}\n  ID: {}\n  Destination: {}\n  Price: {}\n  Duration: {}\n  Description: {}",
        package.title,
        featured,
        active_marker(package.is_active),
        package.id,
        package.destination_id,
        package.price,
        package.duration,
        package.description
    );
    if let Some(url) = &package.image_url {
        output.push_str(&format!("\n  Image: {url}"));
    }
    output
}

pub fn format_packages(packages: &[Package]) -> String {
    format_list("PACKAGES", packages, "No packages found.", format_package)
}

pub fn format_gallery_image(image: &GalleryImage) -> String {
    let approval = if image.is_approved {
        "approved"
    } else {
        "pending"
    };
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  Image: {}",
        image.title, approval, image.id, image.image_url
    );
    if let Some(uploader) = &image.uploaded_by {
        output.push_str(&format!("\n  Uploaded by: {uploader}"));
    }
    if let Some(description) = &image.description {
        output.push_str(&format!("\n  Description: {description}"));
    }
    output
}

pub fn format_gallery_images(images: &[GalleryImage]) -> String {
    format_list(
        "GALLERY IMAGES",
        images,
        "No gallery images found.",
        format_gallery_image,
    )
}

pub fn format_status(status: &StatusReport) -> String {
    format!(
        "Backend: {}{}\n  Destinations: {}\n  Packages: {}\n  Content keys: {}\n  \
         Contact submissions: {}\n  Newsletter subscriptions: {}\n  Gallery images: {}",
        status.backend,
        if status.durable { "" } else { " (not persisted)" },
        status.destinations,
        status.packages,
        status.content,
        status.contact_submissions,
        status.newsletter_subscriptions,
        status.gallery_images
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use ttrave_core::site::{DestinationType, NewDestination, NewUser};
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_user_format_hides_password() {
        let user = NewUser::new("admin", "Ttrave").into_user(Uuid::new_v4(), Utc::now());
        let output = format_user(&user);

        assert!(output.starts_with("admin"));
        assert!(!output.contains("Ttrave"));
    }

    #[test]
    fn test_inactive_destination_is_marked() {
        let destination = NewDestination::new("Goa", "Beaches", DestinationType::Domestic)
            .inactive()
            .into_destination(Uuid::new_v4(), Utc::now());

        let output = format_destination(&destination);

        assert!(output.starts_with("Goa [domestic] (inactive)"));
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(format_packages(&[]), "No packages found.");
        assert_eq!(format_content(&[]), "No content found.");
    }
}
