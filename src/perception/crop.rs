//! Subject crop extraction for the style classification stage.

use image::DynamicImage;

use crate::types::BoundingBox;

/// Extract the region around a detected subject, padded by `margin` pixels
/// on every side and clamped to the frame bounds.
///
/// Always yields at least a 1x1 crop, even for a degenerate or
/// out-of-frame bounding box.
pub fn crop_subject(frame: &DynamicImage, region: &BoundingBox, margin: u32) -> DynamicImage {
    let frame_w = frame.width() as f32;
    let frame_h = frame.height() as f32;
    let margin = margin as f32;

    let x = (region.x - margin).clamp(0.0, frame_w - 1.0);
    let y = (region.y - margin).clamp(0.0, frame_h - 1.0);
    let w = (region.width + margin * 2.0).min(frame_w - x).max(1.0);
    let h = (region.height + margin * 2.0).min(frame_h - y).max(1.0);

    frame.crop_imm(x as u32, y as u32, w as u32, h as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn frame(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::new(width, height))
    }

    #[test]
    fn test_crop_includes_margin() {
        let frame = frame(640, 480);
        let region = BoundingBox {
            x: 200.0,
            y: 150.0,
            width: 100.0,
            height: 120.0,
        };

        let crop = crop_subject(&frame, &region, 40);
        assert_eq!(crop.width(), 180); // 100 + 2 * 40
        assert_eq!(crop.height(), 200); // 120 + 2 * 40
    }

    #[test]
    fn test_crop_clamps_to_frame_origin() {
        let frame = frame(640, 480);
        let region = BoundingBox {
            x: 10.0,
            y: 5.0,
            width: 100.0,
            height: 100.0,
        };

        // Margin pushes past (0, 0); the crop starts at the frame edge but
        // keeps its padded extent.
        let crop = crop_subject(&frame, &region, 40);
        assert_eq!(crop.width(), 180);
        assert_eq!(crop.height(), 180);
    }

    #[test]
    fn test_crop_clamps_to_frame_extent() {
        let frame = frame(320, 240);
        let region = BoundingBox {
            x: 280.0,
            y: 200.0,
            width: 100.0,
            height: 100.0,
        };

        let crop = crop_subject(&frame, &region, 40);
        assert_eq!(crop.width(), 320 - 240); // frame width minus clamped x
        assert_eq!(crop.height(), 240 - 160);
    }

    #[test]
    fn test_degenerate_box_yields_nonempty_crop() {
        let frame = frame(100, 100);
        let region = BoundingBox {
            x: 500.0,
            y: 500.0,
            width: 0.0,
            height: 0.0,
        };

        let crop = crop_subject(&frame, &region, 0);
        assert!(crop.width() >= 1);
        assert!(crop.height() >= 1);
    }
}
