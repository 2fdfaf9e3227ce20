use std::io::Cursor;

use super::*;

fn png(img: image::DynamicImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn grayscale_png_becomes_field() {
    let img = image::GrayImage::from_raw(3, 2, vec![0, 50, 100, 150, 200, 250]).unwrap();
    let field = decode_brightness_field(&png(image::DynamicImage::ImageLuma8(img))).unwrap();
    assert_eq!((field.width(), field.height()), (3, 2));
    assert_eq!(field.get(1, 0), Some(50));
    assert_eq!(field.get(2, 1), Some(250));
}

#[test]
fn color_png_is_reduced_to_luma() {
    let img = image::RgbImage::from_raw(2, 1, vec![255, 255, 255, 0, 0, 0]).unwrap();
    let field = decode_brightness_field(&png(image::DynamicImage::ImageRgb8(img))).unwrap();
    assert_eq!(field.get(0, 0), Some(255));
    assert_eq!(field.get(1, 0), Some(0));
}

#[test]
fn garbage_bytes_fail() {
    assert!(decode_brightness_field(b"not an image").is_err());
}

#[test]
fn unpremultiply_restores_straight_alpha() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![64, 32, 0, 128, 10, 20, 30, 255],
        premultiplied: true,
    };
    let data = unpremultiplied_rgba8(&frame);
    assert_eq!(&data[4..], &[10, 20, 30, 255]);
    assert_eq!(data[3], 128);
    assert_eq!(data[0], 128);
    assert_eq!(data[1], 64);
}

#[test]
fn png_round_trips_through_disk() {
    let dir = std::path::PathBuf::from("target").join("unit_decode");
    let path = dir.join("frame.png");
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![200, 100, 50, 255],
        premultiplied: true,
    };
    write_png(&frame, &path).unwrap();
    let field = load_brightness_field(&path).unwrap();
    assert_eq!((field.width(), field.height()), (1, 1));
}
