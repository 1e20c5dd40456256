use sol_viz::bodies::{Body, OrbitalBody, Registry};
use sol_viz::clock::SimulationClock;
use sol_viz::motion::orbit_position;
use sol_viz::params::ParameterStore;
use sol_viz::scene::Scene;

const ORIGIN: [f64; 2] = [0.0, 0.0];

/// Registry + store as the app builds them at startup.
fn solar_system() -> (Registry, ParameterStore) {
    let registry = Registry::solar_system().expect("fixed table must validate");
    let params = ParameterStore::from_registry(&registry);
    (registry, params)
}

/// Single-body registry for focused orbit scenarios.
fn one_body(orbit_radius: f64, initial_phase: f64, default_speed: f64) -> (Registry, ParameterStore) {
    let body = OrbitalBody {
        body: Body::Earth,
        name: "Probe".to_string(),
        visual_radius: 1.0,
        orbit_radius,
        initial_phase,
        default_speed,
    };
    let registry = Registry::new(vec![body]).unwrap();
    let params = ParameterStore::from_registry(&registry);
    (registry, params)
}

fn advance_named(registry: &Registry, params: &ParameterStore, name: &str, t_ms: f64) -> [f64; 2] {
    let b = registry.get(name).unwrap();
    orbit_position(t_ms, params.get(name), b.orbit_radius, b.initial_phase, ORIGIN)
}

fn assert_close(a: [f64; 2], b: [f64; 2]) {
    assert!((a[0] - b[0]).abs() < 1e-9, "{a:?} vs {b:?}");
    assert!((a[1] - b[1]).abs() < 1e-9, "{a:?} vs {b:?}");
}

// ==================================================================================
// Startup scenario
// ==================================================================================

#[test]
fn earth_starts_at_zero_seventy() {
    let (registry, params) = solar_system();
    assert_close(advance_named(&registry, &params, "Earth", 0.0), [0.0, 70.0]);
}

#[test]
fn all_planets_start_at_their_phase_positions() {
    let (registry, params) = solar_system();
    for b in registry.iter().filter(|b| b.orbit_radius > 0.0) {
        let expected = [
            b.orbit_radius * b.initial_phase.cos(),
            b.orbit_radius * b.initial_phase.sin(),
        ];
        assert_close(advance_named(&registry, &params, &b.name, 0.0), expected);
    }
}

#[test]
fn scene_slots_match_the_registry_at_startup() {
    let (registry, params) = solar_system();
    let scene = Scene::compose(&registry);
    assert_eq!(scene.bodies.len(), registry.len());
    for (b, state) in registry.iter().zip(&scene.bodies) {
        let expected = advance_named(&registry, &params, &b.name, 0.0);
        assert!((state.position[0] - expected[0]).abs() < 1e-9);
        assert!((state.position[2] - expected[1]).abs() < 1e-9);
    }
}

// ==================================================================================
// Pause / resume
// ==================================================================================

#[test]
fn pause_freezes_position_until_resumed() {
    let (registry, params) = one_body(70.0, 0.0, 1.0);
    let mut clock = SimulationClock::new();

    let frozen = advance_named(&registry, &params, "Probe", clock.effective_time(1000.0));
    assert_close(frozen, [70.0 * 1.0f64.cos(), 70.0 * 1.0f64.sin()]);

    clock.toggle(1000.0);
    for raw in [1001.0, 2000.0, 60_000.0, 1e7] {
        let pos = advance_named(&registry, &params, "Probe", clock.effective_time(raw));
        assert_close(pos, frozen);
    }
}

#[test]
fn effective_time_is_continuous_across_resume() {
    let mut clock = SimulationClock::new();
    let before = clock.effective_time(2500.0);
    clock.toggle(2500.0);
    clock.toggle(9000.0); // paused for 6.5 s
    assert_eq!(clock.effective_time(9000.0), before);
    assert_eq!(clock.effective_time(10_000.0), before + 1000.0);
}

#[test]
fn trajectory_resumes_where_it_left_off() {
    let (registry, params) = one_body(70.0, 0.0, 1.0);
    let mut clock = SimulationClock::new();

    let at_pause = advance_named(&registry, &params, "Probe", clock.effective_time(1000.0));
    clock.toggle(1000.0);
    clock.toggle(4000.0);
    let after_resume = advance_named(&registry, &params, "Probe", clock.effective_time(4000.0));
    assert_close(after_resume, at_pause);
}

// ==================================================================================
// Live parameter changes
// ==================================================================================

#[test]
fn speed_change_applies_on_the_next_advance() {
    let (registry, mut params) = solar_system();
    let before = advance_named(&registry, &params, "Mercury", 1000.0);

    assert!(params.set("Mercury", 4.0));
    let after = advance_named(&registry, &params, "Mercury", 1000.0);
    assert!((after[0] - before[0]).abs() > 1e-6 || (after[1] - before[1]).abs() > 1e-6);
    assert_close(after, [50.0 * 4.0f64.cos(), 50.0 * 4.0f64.sin()]);
}

#[test]
fn rejected_speed_leaves_the_trajectory_unchanged() {
    let (registry, mut params) = solar_system();
    let before = advance_named(&registry, &params, "Jupiter", 5000.0);
    assert!(!params.set("Jupiter", f64::NAN));
    assert_close(advance_named(&registry, &params, "Jupiter", 5000.0), before);
}

#[test]
fn negative_speed_runs_the_orbit_backwards() {
    let (registry, mut params) = one_body(80.0, 0.0, 1.3);
    let fwd = advance_named(&registry, &params, "Probe", 2000.0);
    assert!(params.set("Probe", -1.3));
    let rev = advance_named(&registry, &params, "Probe", 2000.0);
    assert_close(rev, [fwd[0], -fwd[1]]);
}

// ==================================================================================
// Central body
// ==================================================================================

#[test]
fn sun_stays_pinned_to_its_center() {
    let (registry, mut params) = solar_system();
    assert!(params.set("Sun", 5.0));
    let b = registry.get("Sun").unwrap();
    for t in [0.0, 1000.0, 1e6] {
        assert_eq!(
            orbit_position(t, params.get("Sun"), b.orbit_radius, b.initial_phase, ORIGIN),
            ORIGIN
        );
    }
}

#[test]
fn orbits_follow_a_displaced_central_body() {
    let (registry, params) = solar_system();
    let earth = registry.get("Earth").unwrap();
    let center = [25.0, -10.0];
    let pos = orbit_position(0.0, params.get("Earth"), earth.orbit_radius, earth.initial_phase, center);
    assert_close(pos, [center[0], center[1] + 70.0]);
}
