use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// IEC 61966-2-1 exact formula: sRGB to linear
fn srgb_to_linear_exact(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// IEC 61966-2-1 exact formula: linear to sRGB
fn linear_to_srgb_exact(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

fn write_table(
    file: &mut impl Write,
    doc: &str,
    name: &str,
    len: usize,
    value: impl Fn(usize) -> f64,
) -> io::Result<()> {
    writeln!(file, "/// {doc}")?;
    writeln!(file, "pub static {name}: [f32; {len}] = [")?;
    for i in 0..len {
        if i > 0 && i % 8 == 0 {
            writeln!(file)?;
        }
        write!(file, "    {:.9},", value(i) as f32)?;
    }
    writeln!(file, "\n];\n")
}

fn main() -> io::Result<()> {
    let out_dir = env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
    let dest_path = Path::new(&out_dir).join("gamma_lut.rs");
    let mut file = BufWriter::new(File::create(&dest_path)?);

    // Exact decode for 8-bit input, index = byte value
    write_table(
        &mut file,
        "Exact sRGB to linear conversion for 8-bit channel values",
        "SRGB8_TO_LINEAR",
        256,
        |i| srgb_to_linear_exact(i as f64 / 255.0),
    )?;

    write_table(
        &mut file,
        "Lookup table for sRGB to linear conversion, index = srgb * 4095",
        "SRGB_TO_LINEAR",
        4096,
        |i| srgb_to_linear_exact(i as f64 / 4095.0),
    )?;

    write_table(
        &mut file,
        "Lookup table for linear to sRGB conversion, index = linear * 4095",
        "LINEAR_TO_SRGB",
        4096,
        |i| linear_to_srgb_exact(i as f64 / 4095.0),
    )?;

    println!("cargo::rerun-if-changed=build.rs");
    Ok(())
}
