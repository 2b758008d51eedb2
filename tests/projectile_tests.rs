use approx::assert_abs_diff_eq;
use kinematics_lab::core::units::{millisecond, radian_per_second, second};
use kinematics_lab::dynamics::ProjectileState;
use kinematics_lab::experiment::sample_trajectory;
use kinematics_lab::utils::max_abs_difference;
use kinematics_lab::*;

const SCHEMES: [IntegrationScheme; 2] = IntegrationScheme::ALL;

fn gravity_only(scheme: IntegrationScheme) -> RunMode {
    RunMode::new(ForceModel::GRAVITY_ONLY, scheme)
}

#[test]
fn force_free_motion_is_linear() {
    let params = ProjectileParams::builder()
        .gravity(AccelerationScalar::from_si(0.0))
        .build();
    let dt = Duration::new::<millisecond>(1.0);
    let velocity = Vector2::from_polar(params.launch_speed, params.launch_angle);

    for scheme in SCHEMES {
        let run =
            sample_trajectory(&params, gravity_only(scheme), dt, Duration::new::<second>(1.0))
                .unwrap();
        assert_eq!(run.len(), 1000);
        for (i, (&x, &y)) in run.x.iter().zip(&run.y).enumerate() {
            let t = i as f64 * dt.si();
            assert_abs_diff_eq!(x, velocity.x().si() * t, epsilon = 1e-9);
            assert_abs_diff_eq!(y, velocity.y().si() * t, epsilon = 1e-9);
        }
    }
}

#[test]
fn schemes_agree_on_first_velocity_update() {
    let params = ProjectileParams::golf_ball();
    let dt = Duration::new::<millisecond>(5.0);
    let forces = ForceModel::DRAG_AND_MAGNUS;

    let mut euler = ProjectileSimulation::new(&params, RunMode::new(forces, IntegrationScheme::Euler));
    let mut cromer =
        ProjectileSimulation::new(&params, RunMode::new(forces, IntegrationScheme::EulerCromer));
    let v0 = euler.velocity();
    euler.step(dt);
    cromer.step(dt);

    assert_eq!(euler.velocity(), cromer.velocity());
    // Euler-Cromer moves with the updated velocity: the gap is exactly Δv·Δt.
    let gap = cromer.position() - euler.position();
    let expected = (cromer.velocity() - v0) * dt;
    assert_abs_diff_eq!(gap.x().si(), expected.x().si(), epsilon = 1e-15);
    assert_abs_diff_eq!(gap.y().si(), expected.y().si(), epsilon = 1e-15);

    euler.step(dt);
    cromer.step(dt);
    assert_ne!(euler.position(), cromer.position());
}

#[test]
fn scheme_gap_shrinks_with_time_step() {
    let params = ProjectileParams::golf_ball();
    let duration = Duration::new::<second>(2.0);
    let gap = |ms: f64| {
        let dt = Duration::new::<millisecond>(ms);
        let euler = sample_trajectory(
            &params,
            RunMode::new(ForceModel::DRAG, IntegrationScheme::Euler),
            dt,
            duration,
        )
        .unwrap();
        let cromer = sample_trajectory(
            &params,
            RunMode::new(ForceModel::DRAG, IntegrationScheme::EulerCromer),
            dt,
            duration,
        )
        .unwrap();
        max_abs_difference(&euler.y, &cromer.y)
    };

    let gaps = [gap(10.0), gap(5.0), gap(1.0), gap(0.1)];
    for pair in gaps.windows(2) {
        assert!(pair[1] < pair[0], "gaps must shrink: {gaps:?}");
    }
    let halving = gaps[1] / gaps[0];
    assert!((0.4..0.6).contains(&halving), "first-order gap ratio {halving}");
}

#[test]
fn gravity_only_matches_closed_form_positions() {
    let params = ProjectileParams::golf_ball();
    let g = params.gravity.si();
    let v0 = Vector2::from_polar(params.launch_speed, params.launch_angle);
    let duration = Duration::new::<second>(2.0);

    for scheme in SCHEMES {
        let error = |ms: f64| {
            let dt = Duration::new::<millisecond>(ms);
            let run = sample_trajectory(&params, gravity_only(scheme), dt, duration).unwrap();
            let exact_y: Vec<f64> = (0..run.len())
                .map(|i| {
                    let t = i as f64 * dt.si();
                    v0.y().si() * t - 0.5 * g * t * t
                })
                .collect();
            max_abs_difference(&run.y, &exact_y)
        };

        let coarse = error(1.0);
        let fine = error(0.1);
        // First-order schemes are off by g·Δt·t/2 in height.
        assert!(coarse < 0.5 * g * 1e-3 * 2.0 + 1e-9, "{scheme:?}: {coarse}");
        assert!(fine < coarse / 5.0, "{scheme:?}: {fine} vs {coarse}");
    }
}

#[test]
fn apex_and_range_match_projectile_formulas() {
    let params = ProjectileParams::golf_ball();
    let g = params.gravity.si();
    let v = params.launch_speed.si();
    let theta = params.launch_angle.si();
    let apex_height = (v * theta.sin()).powi(2) / (2.0 * g);
    let range = v * v * (2.0 * theta).sin() / g;
    let duration = Duration::new::<second>(5.0);

    for scheme in SCHEMES {
        let range_error = |ms: f64| {
            let dt = Duration::new::<millisecond>(ms);
            let run = sample_trajectory(&params, gravity_only(scheme), dt, duration).unwrap();
            let apex = run.apex().expect("trajectory has samples");
            let landing = run.ground_crossing().expect("ball lands within 5 s");
            (
                (apex.y - apex_height).abs(),
                (landing.x - range).abs(),
            )
        };

        let (apex_coarse, range_coarse) = range_error(1.0);
        let (apex_fine, range_fine) = range_error(0.1);
        assert!(apex_coarse < 0.05, "{scheme:?} apex error {apex_coarse}");
        assert!(range_coarse < 0.2, "{scheme:?} range error {range_coarse}");
        assert!(apex_fine < apex_coarse);
        assert!(range_fine < range_coarse);
    }
}

#[test]
fn drag_shortens_the_flight() {
    let params = ProjectileParams::table_tennis_ball();
    let dt = Duration::new::<millisecond>(1.0);
    let duration = Duration::new::<second>(2.0);
    let free =
        sample_trajectory(&params, gravity_only(IntegrationScheme::EulerCromer), dt, duration)
            .unwrap();
    let damped = sample_trajectory(
        &params,
        RunMode::new(ForceModel::DRAG, IntegrationScheme::EulerCromer),
        dt,
        duration,
    )
    .unwrap();
    let last = free.len() - 1;
    assert!(damped.x[last] < free.x[last]);
    assert!(damped.apex().unwrap().y < free.apex().unwrap().y);
}

#[test]
fn spin_sense_flips_magnus_deflection() {
    let spin = AngularVelocity::new::<radian_per_second>(4.0 * std::f64::consts::PI);
    let dt = Duration::new::<millisecond>(1.0);
    let duration = Duration::new::<second>(1.0);
    let final_height = |sense: MagnusSpinSense, forces: ForceModel| {
        let params = ProjectileParams::builder().spin(spin, sense).build();
        let mode = RunMode::new(forces, IntegrationScheme::Euler);
        let run = sample_trajectory(&params, mode, dt, duration).unwrap();
        run.y[run.len() - 1]
    };

    let plain = final_height(MagnusSpinSense::CounterClockwise, ForceModel::DRAG);
    let lifted = final_height(MagnusSpinSense::CounterClockwise, ForceModel::DRAG_AND_MAGNUS);
    let dipped = final_height(MagnusSpinSense::Clockwise, ForceModel::DRAG_AND_MAGNUS);
    assert!(lifted > plain);
    assert!(dipped < plain);
}

#[test]
fn body_at_rest_without_gravity_stays_put() {
    let params = ProjectileParams::builder()
        .gravity(AccelerationScalar::from_si(0.0))
        .build();
    let mut sim = ProjectileSimulation::with_state(
        &params,
        RunMode::new(ForceModel::DRAG_AND_MAGNUS, IntegrationScheme::Euler),
        ProjectileState::default(),
    );
    for _ in 0..10 {
        sim.step(Duration::new::<millisecond>(1.0));
    }
    assert_eq!(sim.velocity(), Velocity::ZERO);
    assert_eq!(sim.position(), Position::ZERO);
    assert!(!sim.position().raw().is_nan());
}
