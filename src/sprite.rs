use crate::pokedex::{Session, Summary};

use bytes::Bytes;
use std::fmt;
use std::io;
use tokio::task;

/// The official artwork of a Pokémon, decoded and ready to be drawn.
#[derive(Clone)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    pub rgba: Bytes,
}

impl Sprite {
    pub fn fetch<'a>(
        summary: &Summary,
        session: &Session,
    ) -> impl Future<Output = Result<Sprite, anywho::Error>> + 'a {
        let url = summary.image.clone();
        let id = summary.id;
        let session = session.clone();

        async move {
            let Some(url) = url else {
                return Err(
                    io::Error::new(io::ErrorKind::NotFound, format!("{id} has no artwork")).into(),
                );
            };

            let bytes = session.download(&url).await?;

            // Decode image as RGBA in a background blocking thread
            task::spawn_blocking(move || Self::decode(bytes)).await?
        }
    }

    fn decode(bytes: Bytes) -> Result<Sprite, anywho::Error> {
        let image = image::ImageReader::new(io::Cursor::new(bytes))
            .with_guessed_format()?
            .decode()?
            .to_rgba8();

        Ok(Sprite {
            width: image.width(),
            height: image.height(),
            rgba: Bytes::from(image.into_raw()),
        })
    }
}

impl fmt::Debug for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rgba", &self.rgba.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_png_to_rgba() {
        let mut png = Vec::new();

        image::RgbaImage::from_pixel(2, 3, image::Rgba([255, 0, 0, 255]))
            .write_to(&mut io::Cursor::new(&mut png), image::ImageFormat::Png)
            .expect("encode png");

        let sprite = Sprite::decode(Bytes::from(png)).expect("decode png");

        assert_eq!((sprite.width, sprite.height), (2, 3));
        assert_eq!(sprite.rgba.len(), 2 * 3 * 4);
        assert_eq!(&sprite.rgba[..4], [255, 0, 0, 255]);
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(Sprite::decode(Bytes::from_static(b"not an image")).is_err());
    }
}
