use serde::{Deserialize, Serialize};

/// Alt text used when the hotel API has no caption for an image.
pub const DEFAULT_IMAGE_CAPTION: &str = "Hotel gallery image";

/// A marketing image from the hotel's main gallery.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct GalleryImageDto {
    pub id: i64,
    pub url: String,
    pub caption: String,
}
