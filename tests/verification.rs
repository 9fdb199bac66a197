//! Cross-regime verification against analytical identities: each regime is
//! checked against an independent solution rather than against itself.

use std::f64::consts::PI;

use approx::assert_relative_eq;
use geoana::constants::VACUUM_PERMEABILITY;
use geoana::em::base::{ElectricDipole, MagneticDipole, Medium};
use geoana::em::{fdem, statics, tdem};
use geoana::math::R3;

/// The frequency-domain magnetic dipole must collapse onto the
/// magnetostatic dipole as f -> 0, at several receivers and orientations.
#[test]
fn fdem_magnetic_dipole_reduces_to_statics() {
    let medium = Medium::whole_space(0.01).unwrap();
    let dipole = MagneticDipole::new(
        R3::new(10.0, -5.0, 2.0),
        R3::new(1.0, 2.0, -0.5),
        250.0,
    )
    .unwrap();
    let harmonic = fdem::MagneticDipoleWholeSpace::new(medium, dipole, 1.0e-3).unwrap();
    let dc = statics::MagneticDipoleWholeSpace { medium, dipole };

    for p in [
        R3::new(25.0, 0.0, 0.0),
        R3::new(8.0, 14.0, -3.0),
        R3::new(10.0, -5.0, 30.0),
    ] {
        let h = harmonic.magnetic_field(&p);
        let h_dc = dc.magnetic_field(&p);
        for i in 0..3 {
            assert_relative_eq!(h[i].re, h_dc[i], max_relative = 1.0e-6, epsilon = 1.0e-18);
        }
    }
}

/// The frequency-domain electric dipole H must collapse onto the
/// Biot-Savart field of a short wire segment as f -> 0.
#[test]
fn fdem_electric_dipole_reduces_to_a_current_element() {
    let medium = Medium::whole_space(1.0).unwrap();
    let dipole = ElectricDipole::new(R3::zeros(), R3::z(), 5.0, 0.01).unwrap();
    let harmonic = fdem::ElectricDipoleWholeSpace::new(medium, dipole, 1.0e-3).unwrap();
    let wire = statics::LineCurrentWholeSpace::new(
        medium,
        vec![R3::new(0.0, 0.0, -0.005), R3::new(0.0, 0.0, 0.005)],
        5.0,
    )
    .unwrap();

    let p = R3::new(3.0, 4.0, 1.0);
    let h = harmonic.magnetic_field(&p);
    let h_wire = wire.magnetic_field(&p);
    for i in 0..3 {
        // the finite segment differs from the ideal dipole at O((ds/r)^2)
        assert_relative_eq!(h[i].re, h_wire[i], max_relative = 1.0e-4, epsilon = 1.0e-15);
    }
}

/// The circular loop must agree with its equivalent point dipole in the
/// far field, including for a tilted loop.
#[test]
fn circular_loop_far_field_is_dipolar() {
    let normal = R3::new(0.3, -0.4, 0.866);
    let source = statics::CircularLoopWholeSpace::new(
        Medium::vacuum(),
        R3::new(1.0, 2.0, 3.0),
        normal,
        2.0,
        10.0,
    )
    .unwrap();
    let dipole = statics::MagneticDipoleWholeSpace {
        medium: Medium::vacuum(),
        dipole: MagneticDipole::new(R3::new(1.0, 2.0, 3.0), normal, source.moment()).unwrap(),
    };
    for p in [R3::new(150.0, 0.0, 0.0), R3::new(-60.0, 90.0, 120.0)] {
        let b_loop = source.magnetic_flux_density(&p).unwrap();
        let b_dip = dipole.magnetic_flux_density(&p);
        assert_relative_eq!((b_loop - b_dip).norm(), 0.0, epsilon = 1.0e-3 * b_dip.norm());
    }
}

/// The transient whole-space dipole must match the static solution at
/// early time and the t^{-3/2} diffusion tail at late time.
#[test]
fn tdem_magnetic_dipole_brackets_the_static_solution() {
    let medium = Medium::whole_space(0.1).unwrap();
    let dipole = MagneticDipole::new(R3::zeros(), R3::z(), 100.0).unwrap();
    let transient = tdem::MagneticDipoleWholeSpace::new(medium, dipole).unwrap();
    let dc = statics::MagneticDipoleWholeSpace { medium, dipole };

    let p = R3::new(20.0, 10.0, 5.0);
    let early = transient.magnetic_field(&p, 1.0e-9).unwrap();
    let h_dc = dc.magnetic_field(&p);
    assert_relative_eq!((early - h_dc).norm(), 0.0, epsilon = 1.0e-6 * h_dc.norm());

    let h1 = transient.magnetic_field(&p, 50.0).unwrap();
    let h2 = transient.magnetic_field(&p, 100.0).unwrap();
    assert_relative_eq!(h1.norm() / h2.norm(), 2.0_f64.powf(1.5), max_relative = 1.0e-3);
}

/// Surface half-space sounding: the late-time voltage decay must follow
/// the textbook (μσ)^{3/2} t^{-5/2} law regardless of offset.
#[test]
fn half_space_sounding_late_time_is_offset_independent() {
    let medium = Medium::whole_space(0.02).unwrap();
    let dipole = MagneticDipole::new(R3::zeros(), R3::z(), 1.0).unwrap();
    let sounding = tdem::VerticalMagneticDipoleHalfSpace::new(medium, dipole).unwrap();

    let t = 5.0;
    let d1 = sounding
        .magnetic_field_time_derivative(&R3::new(50.0, 0.0, 0.0), t)
        .unwrap();
    let d2 = sounding
        .magnetic_field_time_derivative(&R3::new(0.0, 300.0, 0.0), t)
        .unwrap();
    assert_relative_eq!(d1, d2, max_relative = 1.0e-3);

    let mu_sigma = medium.permeability * medium.conductivity;
    let expected = -mu_sigma.powf(1.5) / (20.0 * PI.powf(1.5) * t.powf(2.5));
    assert_relative_eq!(d1, expected, max_relative = 1.0e-3);
}

/// Skin depth ties the regimes together: one skin depth of propagation
/// attenuates a plane wave by 1/e, and matches the fdem helper.
#[test]
fn skin_depth_is_consistent_between_helpers_and_plane_wave() {
    let medium = Medium::whole_space(0.5).unwrap();
    let f = 1.0e4;
    let delta = fdem::skin_depth(f, &medium).unwrap();
    let wave = fdem::HarmonicPlaneWave::new(medium, f, 1.0, geoana::math::R3::x()).unwrap();
    let ratio = wave.electric_field(&R3::new(0.0, 0.0, delta)).norm()
        / wave.electric_field(&R3::zeros()).norm();
    assert_relative_eq!(ratio, (-1.0_f64).exp(), max_relative = 1.0e-3);
}

/// A large loop built from straight wire segments must converge to the
/// analytic circular-loop solution.
#[test]
fn polygonal_wire_converges_to_the_circular_loop() {
    let radius = 5.0;
    let current = 3.0;
    let n = 256;
    let nodes: Vec<R3> = (0..=n)
        .map(|k| {
            let phi = 2.0 * PI * k as f64 / n as f64;
            R3::new(radius * phi.cos(), radius * phi.sin(), 0.0)
        })
        .collect();
    let wire = statics::LineCurrentWholeSpace::free_space(nodes, current).unwrap();
    let loop_source = statics::CircularLoopWholeSpace::new(
        Medium::vacuum(),
        R3::zeros(),
        R3::z(),
        radius,
        current,
    )
    .unwrap();

    for p in [R3::new(0.0, 0.0, 2.0), R3::new(2.0, 1.0, 1.5)] {
        let b_wire = wire.magnetic_flux_density(&p);
        let b_loop = loop_source.magnetic_flux_density(&p).unwrap();
        assert_relative_eq!((b_wire - b_loop).norm(), 0.0, epsilon = 1.0e-3 * b_loop.norm());
    }

    // sanity anchor: loop center field
    let b0 = wire.magnetic_flux_density(&R3::zeros());
    assert_relative_eq!(
        b0.z,
        VACUUM_PERMEABILITY * current / (2.0 * radius),
        max_relative = 1.0e-3
    );
}
