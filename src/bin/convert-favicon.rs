//! Regenerates the PNG favicon fallback from the SVG favicon.
//!
//! Run from the application root.  Reads `priv/static/images/favicon.svg` and writes
//! `priv/static/favicon.png`.

use favicon::{Conversion, ConversionError, Converter};

fn run() -> Result<Conversion, ConversionError> {
    let converter = Converter::new();
    let conversion = converter.convert()?;

    println!("SVG converted to PNG buffers");
    println!("Sizes generated: {:?}", converter.sizes());

    Ok(conversion)
}

fn main() {
    match run() {
        Ok(Conversion {
            images,
            written: Some(path),
        }) => {
            let size = favicon::PERSISTED_SIZE;
            let bytes = images
                .iter()
                .find(|i| i.dimension == size)
                .map_or(0, |i| i.png.len());
            println!("Created {} ({}x{}, {} bytes)", path.display(), size, size, bytes);
        }

        Ok(Conversion { written: None, .. }) => (),

        Err(e) => {
            std::eprintln!("Error converting SVG: {}", e);
            std::process::exit(1);
        }
    }
}
