//! Picture galleries as remote images

use mal::ImageSet;

use crate::{ImageKind, RemoteImage};

/// One primary image per picture, in gallery order. Pictures without any
/// url are skipped.
pub fn to_remote_images(pictures: &[ImageSet], provider_name: &str) -> Vec<RemoteImage> {
    pictures
        .iter()
        .filter_map(|picture| {
            let url = picture.jpg.large()?;
            tracing::debug!("Available image: {}", url);
            Some(RemoteImage {
                provider_name: provider_name.to_string(),
                url: url.to_string(),
                thumbnail_url: picture.jpg.small().map(String::from),
                kind: ImageKind::Primary,
            })
        })
        .collect()
}
