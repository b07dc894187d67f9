//! Default rows written into a fresh store.
//!
//! Pure data. Backends decide when to write it (see their `seed_defaults`).

use super::requests::{NewContent, NewUser};

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "Ttrave";

/// Site copy every installation starts with, in display order.
pub const DEFAULT_CONTENT: &[(&str, &str)] = &[
    ("site.name", "TTravel Hospitality"),
    ("hero.title", "Explore the World with TTRAVE"),
    ("hero.subtitle", "Book your next adventure with us!"),
    ("company.name", "TTravel Hospitality"),
    ("contact.phone", "+91 8100331032"),
    ("contact.email", "ttrave.travelagency@gmail.com"),
    (
        "contact.address",
        "B-12, Shop No. - 111/19, Saptaparni Market, Kalyani Central Park - ward no. 11, Nadia- 741235, West Bengal, India",
    ),
    ("social.facebook", "#"),
    ("social.instagram", "#"),
    ("social.linkedin", "#"),
    ("social.twitter", "#"),
    ("inquiry.url", "https://forms.gle/your-inquiry-form-id"),
    ("inquiry.button.text", "Enquire Now"),
    ("about.hero.title", "About TTravel Hospitality"),
    (
        "about.hero.subtitle",
        "Your trusted partner for unforgettable travel experiences",
    ),
    ("about.who.title", "Who We Are"),
    (
        "about.who.description1",
        "TTravel Hospitality is a premier travel agency dedicated to creating extraordinary travel experiences. With over a decade of expertise in the travel industry, we specialize in both domestic and international travel packages that cater to every traveler's dreams.",
    ),
    (
        "about.who.description2",
        "Our team of experienced travel consultants works tirelessly to ensure that every journey you take with us is seamless, memorable, and perfectly tailored to your preferences. From cultural expeditions to adventure tours, we have something special for everyone.",
    ),
    (
        "about.who.image",
        "https://images.unsplash.com/photo-1551632811-561732d1e306?w=600&h=400&fit=crop",
    ),
    ("about.values.title", "Our Core Values"),
    ("about.mission.title", "Our Mission"),
    (
        "about.mission.description",
        "To provide exceptional travel experiences that create lasting memories and foster cultural understanding through personalized service and attention to detail.",
    ),
    ("about.vision.title", "Our Vision"),
    (
        "about.vision.description",
        "To be the leading travel agency that connects people with the world's most beautiful destinations while promoting sustainable and responsible tourism practices.",
    ),
    ("about.values.description.title", "Our Values"),
    (
        "about.values.description",
        "Integrity, Excellence, Customer Focus, Innovation, and Sustainability guide every decision we make and every service we provide to our valued customers.",
    ),
];

/// What a backend writes when it finds an empty store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedData {
    pub admin: NewUser,
    pub content: Vec<NewContent>,
}

impl SeedData {
    /// Default seed with a different admin password.
    pub fn with_admin(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            admin: NewUser::new(username, password),
            ..Self::default()
        }
    }

    /// True when the admin account would be created with the shipped password.
    pub fn uses_default_password(&self) -> bool {
        self.admin.password == DEFAULT_ADMIN_PASSWORD
    }
}

impl Default for SeedData {
    fn default() -> Self {
        Self {
            admin: NewUser::new(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD),
            content: DEFAULT_CONTENT
                .iter()
                .map(|(key, value)| NewContent::new(*key, *value))
                .collect(),
        }
    }
}
