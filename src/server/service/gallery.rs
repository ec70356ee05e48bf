use crate::{
    model::gallery::{GalleryImageDto, DEFAULT_IMAGE_CAPTION},
    server::{data::hotel_api::HotelApiClient, error::Error},
};

pub struct GalleryService<'a> {
    hotel_api: &'a HotelApiClient,
}

impl<'a> GalleryService<'a> {
    /// Creates a new instance of [`GalleryService`]
    pub fn new(hotel_api: &'a HotelApiClient) -> Self {
        Self { hotel_api }
    }

    /// Marketing images from the hotel params, captions defaulted for alt text
    pub async fn get_gallery(&self) -> Result<Vec<GalleryImageDto>, Error> {
        let params = self.hotel_api.get_hotel_params().await?;

        let images = params
            .images
            .into_iter()
            .filter(|image| !image.image_url.trim().is_empty())
            .map(|image| GalleryImageDto {
                id: image.image_id,
                url: image.image_url,
                caption: image
                    .image_caption
                    .filter(|caption| !caption.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_IMAGE_CAPTION.to_string()),
            })
            .collect();

        Ok(images)
    }
}
