//! Top-down PNG snapshot of a generated frame.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::error::PointnoiseError;
use crate::field::PointCloudFrame;

/// Convert one unclamped color component to an 8-bit channel
fn to_channel(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Render the frame's colors as a `width x width` image (row = z, column = x)
pub fn frame_to_image(frame: &PointCloudFrame, width: u32) -> Result<RgbImage, PointnoiseError> {
    if width == 0 || frame.len() != (width as usize) * (width as usize) {
        return Err(PointnoiseError::EmptyFrame);
    }

    let mut img = RgbImage::new(width, width);
    for (index, color) in frame.colors.iter().enumerate() {
        let x = index as u32 % width;
        let z = index as u32 / width;
        img.put_pixel(
            x,
            z,
            Rgb([to_channel(color[0]), to_channel(color[1]), to_channel(color[2])]),
        );
    }

    Ok(img)
}

/// Write the frame to a PNG file
pub fn save_png(
    frame: &PointCloudFrame,
    width: u32,
    path: impl AsRef<Path>,
) -> Result<(), PointnoiseError> {
    let img = frame_to_image(frame, width)?;
    img.save(path.as_ref())?;
    log::info!(
        "Wrote {}x{} snapshot to {}",
        width,
        width,
        path.as_ref().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_are_clamped() {
        assert_eq!(to_channel(-1.3), 0);
        assert_eq!(to_channel(0.5), 128);
        assert_eq!(to_channel(2.3), 255);
        assert_eq!(to_channel(f32::NAN), 0);
    }

    #[test]
    fn test_image_layout_follows_frame_order() {
        let mut frame = PointCloudFrame::default();
        frame.push([0.0; 3], [1.0, 0.0, 0.0]);
        frame.push([0.5, 0.0, 0.0], [0.0, 1.0, 0.0]);
        frame.push([0.0, 0.0, 0.5], [0.0, 0.0, 1.0]);
        frame.push([0.5, 0.0, 0.5], [1.0, 1.0, 1.0]);

        let img = frame_to_image(&frame, 2).expect("valid frame");
        assert_eq!(img.get_pixel(1, 0), &Rgb([0, 255, 0]));
        assert_eq!(img.get_pixel(0, 1), &Rgb([0, 0, 255]));
    }

    #[test]
    fn test_mismatched_width_is_rejected() {
        let mut frame = PointCloudFrame::default();
        frame.push([0.0; 3], [0.0; 3]);

        assert!(matches!(
            frame_to_image(&frame, 2),
            Err(PointnoiseError::EmptyFrame)
        ));
    }
}
