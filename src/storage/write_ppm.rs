use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the buffer as a binary PPM (P6) image.
pub fn write_ppm(buffer: PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let file = std::fs::File::create(filepath)?;
    let mut writer = BufWriter::new(file);

    // PPM header: P6 means binary RGB, then width height max_colour
    let width = buffer.pixel_rect().width();
    let height = buffer.pixel_rect().height();

    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", width, height)?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_rect::PixelRect;
    use std::fs;

    #[test]
    fn test_write_ppm_header_and_payload() {
        let pixel_rect = PixelRect::from_window_size(3, 2).unwrap();
        let data = vec![9u8; 3 * 2 * 3];
        let buffer = PixelBuffer::from_data(pixel_rect, data.clone()).unwrap();
        let path = std::env::temp_dir().join("fractalscope_write_ppm_test.ppm");

        write_ppm(buffer, &path).unwrap();

        let contents = fs::read(&path).unwrap();
        assert!(contents.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(&contents[b"P6\n3 2\n255\n".len()..], data.as_slice());

        let _ = fs::remove_file(&path);
    }
}
