//! Reads the header of a TGA image and writes it back out unchanged.
//!
//! Usage: `cargo run --example tga_header -- image.tga header.bin`

use std::{env, fs::File};

use bfio::{FileStream, SinkExt, SourceExt, fixed_size};

#[derive(Debug, Default)]
struct ColorMapSpecification {
    first_entry_index: u16,
    length: u16,
    entry_size: u8,
}

#[derive(Debug, Default)]
struct ImageSpecification {
    x_origin: u16,
    y_origin: u16,
    width: u16,
    height: u16,
    pixel_depth: u8,
    descriptor: u8,
}

#[derive(Debug, Default)]
struct TgaHeader {
    id_length: u8,
    color_map_type: u8,
    image_type: u8,
    color_map: ColorMapSpecification,
    image: ImageSpecification,
}

bfio::aggregate! {
    ColorMapSpecification { first_entry_index: u16, length: u16, entry_size: u8 }
    ImageSpecification {
        x_origin: u16,
        y_origin: u16,
        width: u16,
        height: u16,
        pixel_depth: u8,
        descriptor: u8,
    }
    TgaHeader {
        id_length: u8,
        color_map_type: u8,
        image_type: u8,
        color_map: ColorMapSpecification,
        image: ImageSpecification,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "test.tga".to_string());
    let output = args.next().unwrap_or_else(|| "header.bin".to_string());

    println!("Tga header size: {}", fixed_size::<TgaHeader>()?);

    let header: TgaHeader = FileStream::new(File::open(&input)?).get()?;

    println!("Image info:");
    println!(
        "Colormap: {}",
        if header.color_map_type == 0 {
            "No colormap"
        } else {
            "Has colormap"
        }
    );
    println!("Image type: {}", header.image_type);
    println!("Image width: {}", header.image.width);
    println!("Image height: {}", header.image.height);
    println!("Pixel depth: {}", header.image.pixel_depth);

    let mut out = FileStream::new(File::create(&output)?);
    out.put(&header)?;
    out.flush()?;

    Ok(())
}
