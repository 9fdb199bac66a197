//! Legacy VTK ASCII export for gridded field samples.
//!
//! Writes `STRUCTURED_GRID` datasets consumable by ParaView and other VTK
//! viewers. Point ordering must be x-fastest, matching
//! [`crate::utils::ndgrid`].

use std::io::{self, Write};

use crate::math::R3;

/// Writes the legacy VTK ASCII file header.
pub fn write_vtk_header<W: Write>(mut writer: W, title: &str) -> io::Result<()> {
    writeln!(writer, "# vtk DataFile Version 3.0")?;
    writeln!(writer, "{title}")?;
    writeln!(writer, "ASCII")?;
    Ok(())
}

/// Writes a structured grid of `dims = (nx, ny, nz)` points with an
/// attached vector field.
///
/// `points` and `vectors` must both contain `nx * ny * nz` entries.
pub fn write_structured_vector_grid<W: Write>(
    mut writer: W,
    title: &str,
    dims: (usize, usize, usize),
    points: &[R3],
    field_name: &str,
    vectors: &[R3],
) -> io::Result<()> {
    let n = dims.0 * dims.1 * dims.2;
    if points.len() != n || vectors.len() != n {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "dims {}x{}x{} require {} samples, got {} points and {} vectors",
                dims.0,
                dims.1,
                dims.2,
                n,
                points.len(),
                vectors.len()
            ),
        ));
    }
    write_vtk_header(&mut writer, title)?;
    writeln!(writer, "DATASET STRUCTURED_GRID")?;
    writeln!(writer, "DIMENSIONS {} {} {}", dims.0, dims.1, dims.2)?;
    writeln!(writer, "POINTS {n} double")?;
    for p in points {
        writeln!(writer, "{:.16e} {:.16e} {:.16e}", p.x, p.y, p.z)?;
    }
    writeln!(writer, "POINT_DATA {n}")?;
    writeln!(writer, "VECTORS {field_name} double")?;
    for v in vectors {
        writeln!(writer, "{:.16e} {:.16e} {:.16e}", v.x, v.y, v.z)?;
    }
    Ok(())
}
