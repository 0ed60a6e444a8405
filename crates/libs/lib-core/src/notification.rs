/// A toast message: short title plus one line of detail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn signed_in() -> Self {
        Self::new("Welcome back!", "You have signed in successfully.")
    }

    pub fn registered(name: &str) -> Self {
        Self::new("Account created!", format!("Welcome aboard, {}.", name.trim()))
    }
}
