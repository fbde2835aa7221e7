use crate::{id::Id, time::Timestamp};

/// An uploaded image of a POI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id: Id,
    pub name: String,
    pub caption: String,
    /// Path of the stored file relative to the media root,
    /// e.g. `images/dog.jpg`.
    pub file: String,
    pub created: Timestamp,
    pub modified: Timestamp,
}

impl Image {
    /// The public link of the stored file below the given media URL prefix.
    pub fn link(&self, media_url: &str) -> String {
        let base = media_url.trim_end_matches('/');
        let file = self.file.trim_start_matches('/');
        format!("{base}/{file}")
    }
}

/// A video of a POI hosted elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: Id,
    pub name: String,
    pub caption: String,
    pub url: String,
    pub created: Timestamp,
    pub modified: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(file: &str) -> Image {
        Image {
            id: Id::new(1),
            name: "A dog".into(),
            caption: "Woof!".into(),
            file: file.into(),
            created: Timestamp::from_milliseconds(0),
            modified: Timestamp::from_milliseconds(0),
        }
    }

    #[test]
    fn image_link_below_media_url() {
        assert_eq!("/media/dog.jpg", image("dog.jpg").link("/media/"));
        assert_eq!("/media/images/dog.jpg", image("/images/dog.jpg").link("/media"));
        assert_eq!(
            "https://cdn.example.org/m/dog.jpg",
            image("dog.jpg").link("https://cdn.example.org/m/")
        );
    }
}
