#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use flocksim::simulation::boid::Boid;
use flocksim::simulation::bounds::CanvasBounds;
use flocksim::simulation::flock::Flock;
use flocksim::simulation::params::{DeathPolicy, Params};
use flocksim::simulation::team::Team;
use flocksim::simulation::vector::Vector2;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn create_test_boid(x: f64, y: f64, team: Team) -> Boid {
    Boid {
        position: Vector2::new(x, y),
        velocity: Vector2::ZERO,
        acceleration: Vector2::ZERO,
        radius: 3.0,
        max_speed: 2.0,
        max_force: 0.05,
        team,
        original_team: team,
        life_span: 10_000,
        time_alive: 0,
        selected: false,
    }
}

fn create_test_flock(params: &Params, bounds: &CanvasBounds, n: usize, seed: u64) -> Flock {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut flock = Flock::new();
    flock.spawn_random(n, None, bounds, params, &mut rng);
    flock
}

#[test]
fn test_step_moves_pair_apart() {
    let params = Params::default();
    let bounds = CanvasBounds::new(400.0, 400.0);
    let mut rng = StdRng::seed_from_u64(0);
    let mut flock = Flock::new();
    flock.add(create_test_boid(100.0, 100.0, Team::Red));
    flock.add(create_test_boid(110.0, 100.0, Team::Red));

    let report = flock.step(&bounds, &params, &mut rng);

    assert_eq!(report.died, 0);
    assert!(flock.boids[0].velocity.x < 0.0);
    assert!(flock.boids[1].velocity.x > 0.0);
    assert!(flock.boids[0].position.x < 100.0);
    assert!(flock.boids[1].position.x > 110.0);
}

#[test]
fn test_step_uses_pre_motion_snapshot() {
    let params = Params::default();
    let bounds = CanvasBounds::new(400.0, 400.0);
    let mut rng = StdRng::seed_from_u64(0);
    let mut flock = Flock::new();
    flock.add(create_test_boid(100.0, 100.0, Team::Red));
    flock.add(create_test_boid(110.0, 100.0, Team::Red));

    flock.step(&bounds, &params, &mut rng);

    // symmetric start, symmetric result
    let a = &flock.boids[0];
    let b = &flock.boids[1];
    assert!((a.velocity.x + b.velocity.x).abs() < 1e-12);
    assert!((a.position.x - 100.0 + (b.position.x - 110.0)).abs() < 1e-12);
}

#[test]
fn test_dead_boids_pruned_on_next_step() {
    let params = Params::default();
    let bounds = CanvasBounds::new(800.0, 600.0);
    let mut rng = StdRng::seed_from_u64(5);
    let mut flock = create_test_flock(&params, &bounds, 20, 5);
    flock.boids[3].life_span = 0;
    flock.boids[7].life_span = -4;

    let report = flock.step(&bounds, &params, &mut rng);

    assert_eq!(report.died, 2);
    assert_eq!(report.replaced, 0);
    assert_eq!(flock.len(), 18);
    assert!(flock.boids.iter().all(|b| b.time_alive == 1));
}

#[test]
fn test_replace_policy_keeps_population() {
    let params = Params {
        on_death: DeathPolicy::Replace,
        ..Params::default()
    };
    let bounds = CanvasBounds::new(800.0, 600.0);
    let mut rng = StdRng::seed_from_u64(6);
    let mut flock = create_test_flock(&params, &bounds, 20, 6);
    flock.boids[0].life_span = 0;
    flock.boids[1].life_span = 0;
    flock.boids[2].life_span = 0;

    let report = flock.step(&bounds, &params, &mut rng);

    assert_eq!(report.died, 3);
    assert_eq!(report.replaced, 3);
    assert_eq!(flock.len(), 20);
    let fresh = flock.boids.iter().filter(|b| b.time_alive == 0).count();
    assert_eq!(fresh, 3);
    for boid in flock.boids.iter().filter(|b| b.time_alive == 0) {
        assert!(bounds.contains(boid.position));
        assert_eq!(boid.life_span, params.original_life_span);
    }
}

#[test]
fn test_speed_invariant_holds_every_tick() {
    let params = Params::default();
    let bounds = CanvasBounds::new(300.0, 300.0);
    let mut rng = StdRng::seed_from_u64(9);
    let mut flock = create_test_flock(&params, &bounds, 60, 9);

    for _ in 0..50 {
        flock.step(&bounds, &params, &mut rng);
        for boid in &flock.boids {
            assert!(boid.velocity.magnitude() <= boid.max_speed + 1e-9);
            assert_eq!(boid.acceleration, Vector2::ZERO);
        }
    }
}

#[test]
fn test_lone_boid_life_span_trends_down() {
    let params = Params::default();
    let bounds = CanvasBounds::new(800.0, 600.0);
    let mut rng = StdRng::seed_from_u64(21);
    let mut flock = Flock::new();
    flock.add(create_test_boid(400.0, 300.0, Team::White));

    let mut previous = flock.boids[0].life_span;
    for _ in 0..1000 {
        flock.step(&bounds, &params, &mut rng);
        let current = flock.boids[0].life_span;
        assert!(current <= previous);
        previous = current;
    }

    // expected loss is 4.5 per tick
    assert!(previous < 10_000 - 3_000);
    assert!(previous > 0);
    assert_eq!(flock.boids[0].time_alive, 1000);
}

#[test]
fn test_remove_within_is_inclusive() {
    let mut flock = Flock::new();
    flock.add(create_test_boid(150.0, 100.0, Team::Red));
    flock.add(create_test_boid(200.0, 100.0, Team::Red));
    flock.add(create_test_boid(200.5, 100.0, Team::Red));

    let removed = flock.remove_within(Vector2::new(100.0, 100.0), 100.0);

    assert_eq!(removed, 2);
    assert_eq!(flock.len(), 1);
    assert_eq!(flock.boids[0].position.x, 200.5);
}

#[test]
fn test_evict_oldest_prefers_earlier_on_ties() {
    let mut flock = Flock::new();
    for (i, age) in [5u64, 9, 9, 1].into_iter().enumerate() {
        let mut boid = create_test_boid(i as f64, 0.0, Team::Red);
        boid.time_alive = age;
        flock.add(boid);
    }

    let mut one = flock.clone();
    assert_eq!(one.evict_oldest(1), 1);
    let xs: Vec<f64> = one.boids.iter().map(|b| b.position.x).collect();
    assert_eq!(xs, vec![0.0, 2.0, 3.0]);

    assert_eq!(flock.evict_oldest(3), 3);
    let ages: Vec<u64> = flock.boids.iter().map(|b| b.time_alive).collect();
    assert_eq!(ages, vec![1]);

    assert_eq!(flock.evict_oldest(10), 1);
    assert!(flock.is_empty());
}

#[test]
fn test_team_counts_and_oldest() {
    let mut flock = Flock::new();
    let teams = [Team::Blue, Team::Red, Team::Blue, Team::Pink, Team::Blue, Team::Red];
    for (i, team) in teams.into_iter().enumerate() {
        let mut boid = create_test_boid(0.0, 0.0, team);
        boid.time_alive = (i as u64 * 7) % 5;
        flock.add(boid);
    }

    assert_eq!(
        flock.team_counts(),
        vec![(Team::Blue, 3), (Team::Red, 2), (Team::Pink, 1)]
    );

    // ages are 0, 2, 4, 1, 3, 0
    assert_eq!(flock.oldest().map(|b| b.time_alive), Some(4));
    assert_eq!(flock.oldest().map(|b| b.team), Some(Team::Blue));
    assert_eq!(flock.youngest().map(|b| b.team), Some(Team::Blue));
    assert!(Flock::new().oldest().is_none());
}
