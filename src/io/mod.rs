//! Export helpers for handing field samples to plotting and visualization
//! tools.

pub mod vtk;

pub use vtk::{write_structured_vector_grid, write_vtk_header};

use std::io::{self, Write};

use crate::math::{R3, Scalar};

/// Writes sampled vector-field data as `x,y,z,fx,fy,fz` CSV rows.
pub fn write_field_csv<W: Write>(mut w: W, points: &[R3], vectors: &[R3]) -> io::Result<()> {
    if points.len() != vectors.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "point/vector length mismatch: {} vs {}",
                points.len(),
                vectors.len()
            ),
        ));
    }
    writeln!(w, "x,y,z,fx,fy,fz")?;
    for (p, v) in points.iter().zip(vectors) {
        writeln!(
            w,
            "{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},{:.16e}",
            p.x, p.y, p.z, v.x, v.y, v.z
        )?;
    }
    Ok(())
}

/// Writes sampled scalar data as `x,y,z,value` CSV rows.
pub fn write_scalar_csv<W: Write>(mut w: W, points: &[R3], values: &[Scalar]) -> io::Result<()> {
    if points.len() != values.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "point/value length mismatch: {} vs {}",
                points.len(),
                values.len()
            ),
        ));
    }
    writeln!(w, "x,y,z,value")?;
    for (p, value) in points.iter().zip(values) {
        writeln!(w, "{:.16e},{:.16e},{:.16e},{:.16e}", p.x, p.y, p.z, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_csv_has_header_and_one_row_per_point() {
        let points = vec![R3::zeros(), R3::x()];
        let vectors = vec![R3::y(), R3::z()];
        let mut buf = Vec::new();
        write_field_csv(&mut buf, &points, &vectors).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "x,y,z,fx,fy,fz");
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = write_scalar_csv(Vec::new(), &[R3::zeros()], &[1.0, 2.0]);
        assert!(err.is_err());
    }
}
