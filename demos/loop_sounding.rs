//! Central-loop TEM sounding walk-through: decay curve over a half-space
//! plus an exported map of the static loop field.

use std::fs::File;
use std::io::BufWriter;

use geoana::prelude::*;

fn main() -> Result<()> {
    // 100 Ωm ground, 10 000 A·m² transmitter moment
    let ground = Medium::whole_space(0.01)?;
    let transmitter = MagneticDipole::new(R3::zeros(), R3::z(), 1.0e4)?;
    let sounding = tdem::VerticalMagneticDipoleHalfSpace::new(ground, transmitter)?;

    let receiver = R3::new(100.0, 0.0, 0.0);
    println!("offset 100 m sounding over 100 ohm-m ground");
    for t in logspace(1.0e-6, 1.0e-2, 9)? {
        let hz = sounding.magnetic_field(&receiver, t)?;
        let dhz = sounding.magnetic_field_time_derivative(&receiver, t)?;
        println!("t = {t:9.3e} s   hz = {hz:12.4e} A/m   dhz/dt = {dhz:12.4e} A/m/s");
    }
    let d = tdem::diffusion_distance(1.0e-3, &ground)?;
    println!("diffusion distance at 1 ms: {d:.0} m");

    // static field of the physical transmitter loop, exported for ParaView
    let loop_source =
        CircularLoopWholeSpace::new(Medium::vacuum(), R3::zeros(), R3::z(), 10.0, 1.0)?;
    let xs = linspace(-50.0, 50.0, 21);
    let zs = linspace(5.0, 105.0, 21);
    let points = ndgrid(&xs, &xs, &zs);
    let fields = points
        .iter()
        .map(|p| loop_source.magnetic_flux_density(p))
        .collect::<Result<Vec<_>>>()?;

    let file = BufWriter::new(File::create("loop_field.vtk")?);
    write_structured_vector_grid(file, "loop b field", (21, 21, 21), &points, "b", &fields)?;
    println!("wrote loop_field.vtk");
    Ok(())
}
