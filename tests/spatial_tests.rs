#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use flocksim::simulation::boid::Boid;
use flocksim::simulation::bounds::CanvasBounds;
use flocksim::simulation::flock::Flock;
use flocksim::simulation::params::Params;
use flocksim::simulation::spatial::NeighborIndex;
use flocksim::simulation::vector::Vector2;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn run_flock(use_spatial_index: bool, steps: usize) -> Vec<Boid> {
    let params = Params {
        use_spatial_index,
        ..Params::default()
    };
    let bounds = CanvasBounds::new(400.0, 400.0);
    let mut rng = StdRng::seed_from_u64(2024);
    let mut flock = Flock::new();
    flock.spawn_random(150, None, &bounds, &params, &mut rng);

    for _ in 0..steps {
        flock.step(&bounds, &params, &mut rng);
    }
    flock.boids
}

#[test]
fn test_index_matches_full_scan() {
    let with_index = run_flock(true, 50);
    let with_scan = run_flock(false, 50);

    assert_eq!(with_index.len(), with_scan.len());
    assert_eq!(with_index, with_scan);
}

#[test]
fn test_candidates_sorted_and_cover_neighbors() {
    let params = Params::default();
    let mut rng = StdRng::seed_from_u64(7);
    let boids: Vec<Boid> = (0..40)
        .map(|i| {
            let pos = Vector2::new(f64::from(i % 8) * 30.0, f64::from(i / 8) * 30.0);
            Boid::new(pos, None, &params, &mut rng)
        })
        .collect();

    let radius = params.interaction_radius();
    let index = NeighborIndex::build(&boids, radius).expect("finite positions");

    for (i, boid) in boids.iter().enumerate() {
        let found = index.candidates(boid);
        assert!(found.windows(2).all(|w| w[0] < w[1]));
        assert!(found.contains(&i));
        for (j, other) in boids.iter().enumerate() {
            if Vector2::distance(boid.position, other.position) < radius {
                assert!(found.contains(&j), "boid {j} missing from candidates of {i}");
            }
        }
    }
}

#[test]
fn test_scan_returns_everyone() {
    let params = Params::default();
    let mut rng = StdRng::seed_from_u64(8);
    let boids: Vec<Boid> = (0..5)
        .map(|i| Boid::new(Vector2::new(f64::from(i) * 500.0, 0.0), None, &params, &mut rng))
        .collect();

    let index = NeighborIndex::for_snapshot(&boids, 80.0, false);
    assert_eq!(index.candidates(&boids[0]), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_non_finite_position_falls_back_to_scan() {
    let params = Params::default();
    let mut rng = StdRng::seed_from_u64(9);
    let mut boids: Vec<Boid> = (0..3)
        .map(|i| Boid::new(Vector2::new(f64::from(i) * 10.0, 0.0), None, &params, &mut rng))
        .collect();
    boids[1].position = Vector2::new(f64::NAN, 0.0);

    assert!(NeighborIndex::build(&boids, 80.0).is_err());
    let index = NeighborIndex::for_snapshot(&boids, 80.0, true);
    assert!(matches!(index, NeighborIndex::Scan { len: 3 }));
}
