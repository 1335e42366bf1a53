use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use super::error::PdfError;

/// Resource name of the page image.
const IMAGE_NAME: &str = "Im0";

/// Colour model of the embedded JPEG stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Rgb,
    Gray,
}

impl ColorSpace {
    fn pdf_name(&self) -> &'static str {
        match self {
            Self::Rgb => "DeviceRGB",
            Self::Gray => "DeviceGray",
        }
    }
}

/// A baseline JPEG stream and the facts the PDF needs about it.
///
/// `color_space` must match the stream's component count: three for
/// [`ColorSpace::Rgb`], one for [`ColorSpace::Gray`].
#[derive(Debug, Clone, Copy)]
pub struct PdfImage<'a> {
    pub jpeg: &'a [u8],
    pub width: u32,
    pub height: u32,
    pub color_space: ColorSpace,
}

fn name(value: &str) -> Object {
    Object::Name(value.as_bytes().to_vec())
}

/// Builds a one-page document showing `image` full-page, one pixel per point.
pub fn single_page_pdf(image: &PdfImage<'_>) -> Result<Vec<u8>, PdfError> {
    let (w, h) = (i64::from(image.width), i64::from(image.height));

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => name("XObject"),
            "Subtype" => name("Image"),
            "Width" => w,
            "Height" => h,
            "ColorSpace" => name(image.color_space.pdf_name()),
            "BitsPerComponent" => 8_i64,
            "Filter" => name("DCTDecode"),
        },
        image.jpeg.to_vec(),
    ));

    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    Object::Integer(w),
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(h),
                    Object::Integer(0),
                    Object::Integer(0),
                ],
            ),
            Operation::new("Do", vec![name(IMAGE_NAME)]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => name("Page"),
        "Parent" => Object::Reference(pages_id),
        "Contents" => Object::Reference(content_id),
        "Resources" => dictionary! {
            "XObject" => dictionary! {
                IMAGE_NAME => Object::Reference(image_id),
            },
        },
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(w),
            Object::Integer(h),
        ],
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => name("Pages"),
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1_i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => name("Catalog"),
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut out = Vec::new();
    doc.save_to(&mut out).map_err(lopdf::Error::from)?;
    Ok(out)
}


#[cfg(test)]
mod tests {
    use super::inspect::single_page;
    use super::*;

    const FAKE_JPEG: [u8; 8] = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0xFF, 0xD9];

    fn sample(color_space: ColorSpace) -> Vec<u8> {
        single_page_pdf(&PdfImage {
            jpeg: &FAKE_JPEG,
            width: 640,
            height: 480,
            color_space,
        })
        .unwrap()
    }

    #[test]
    fn test_header_and_trailer() {
        let pdf = sample(ColorSpace::Rgb);
        assert!(pdf.starts_with(b"%PDF-1.5"));
        assert!(pdf.windows(5).any(|w| w == b"%%EOF"));
    }

    #[test]
    fn test_page_matches_pixel_size() {
        let page = single_page(&sample(ColorSpace::Rgb));

        assert_eq!(page.media_box, [0, 0, 640, 480]);
        assert_eq!((page.width, page.height), (640, 480));
        assert_eq!(page.filter, b"DCTDecode");
        assert_eq!(page.color_space, b"DeviceRGB");
        assert_eq!(page.stream, FAKE_JPEG);
    }

    #[test]
    fn test_gray_colour_space() {
        let page = single_page(&sample(ColorSpace::Gray));
        assert_eq!(page.color_space, b"DeviceGray");
    }
}
