use bevy_math::Vec2;
use common::{
    ObstacleRegistry, PlayerPose,
    constants::DEFAULT_SEED,
    generate_maze,
    map::grid::{adjacent_edges, all_cells_connected, cell_count, is_boundary_edge, ring_of, world_to_lattice},
    protocol::CellCoord,
};

const LENGTH: f32 = 1.0;
const WIDTH: f32 = 0.1;
const HEIGHT: f32 = 0.2;

#[test]
fn every_cell_is_reachable() {
    for side in 1..=6 {
        for seed in [0, 1, 42, DEFAULT_SEED, u64::MAX] {
            let layout = generate_maze(LENGTH, WIDTH, HEIGHT, side, seed).unwrap();
            assert!(
                all_cells_connected(&layout.corridors, side),
                "side {side} seed {seed} left cells unreachable"
            );
        }
    }
}

#[test]
fn perimeter_is_always_open() {
    for side in 1..=5 {
        let layout = generate_maze(LENGTH, WIDTH, HEIGHT, side, 1234).unwrap();
        for edge in adjacent_edges(side).iter().filter(|e| is_boundary_edge(e, side)) {
            assert!(layout.corridors.contains(edge), "side {side}: {edge:?} walled");
        }
    }
}

#[test]
fn interior_has_no_extra_loops() {
    for side in 1..=5 {
        let layout = generate_maze(LENGTH, WIDTH, HEIGHT, side, 77).unwrap();
        // Spanning tree edges plus the one loop closed by the ring
        assert_eq!(layout.corridors.len(), cell_count(side));
        assert_eq!(layout.walls.len() + layout.corridors.len(), adjacent_edges(side).len());
    }
}

#[test]
fn same_arguments_same_maze() {
    let first = generate_maze(1.5, 0.2, 0.4, 4, 9001).unwrap();
    let second = generate_maze(1.5, 0.2, 0.4, 4, 9001).unwrap();
    assert_eq!(first, second);
}

#[test]
fn different_seeds_change_the_interior() {
    let first = generate_maze(LENGTH, WIDTH, HEIGHT, 4, 1).unwrap();
    let second = generate_maze(LENGTH, WIDTH, HEIGHT, 4, 2).unwrap();
    assert_eq!(first.pillars, second.pillars);
    assert_ne!(first.walls, second.walls);
}

#[test]
fn reference_level_has_seven_pillars() {
    let layout = generate_maze(LENGTH, WIDTH, HEIGHT, 1, DEFAULT_SEED).unwrap();
    assert_eq!(layout.pillars.len(), 7);

    let ring: Vec<_> = adjacent_edges(1).into_iter().filter(|e| is_boundary_edge(e, 1)).collect();
    assert_eq!(ring.len(), 6);
    assert!(ring.iter().all(|edge| layout.corridors.contains(edge)));

    // Six spokes to the center, exactly one of them open
    assert_eq!(layout.walls.len(), 5);
}

#[test]
fn degenerate_side_zero() {
    let layout = generate_maze(LENGTH, WIDTH, HEIGHT, 0, DEFAULT_SEED).unwrap();
    assert_eq!(layout.pillars.len(), 1);
    assert!(layout.walls.is_empty());
    assert!(layout.corridors.is_empty());
}

#[test]
fn spawn_is_inside_and_off_the_walls() {
    for side in 1..=5 {
        let layout = generate_maze(LENGTH, WIDTH, HEIGHT, side, 31337).unwrap();

        let lattice = world_to_lattice(layout.spawn, LENGTH, WIDTH);
        let nearest = CellCoord::new(lattice.x.round() as i32, lattice.y.round() as i32);
        assert!(ring_of(nearest, side) < side, "side {side}: spawn near the rim");

        for wall in &layout.walls {
            assert!(wall.translation.distance(layout.spawn) > 0.1);
        }

        let registry = ObstacleRegistry::from_layout(&layout);
        assert!(!registry.collides_with(&PlayerPose::probe_at(layout.spawn)));
    }
}

#[test]
fn player_cannot_walk_through_a_pillar() {
    let layout = generate_maze(LENGTH, WIDTH, HEIGHT, 2, DEFAULT_SEED).unwrap();
    let registry = ObstacleRegistry::from_layout(&layout);

    let pillar = layout.pillars[0].translation;
    let mut pose = PlayerPose::new(pillar + Vec2::new(-0.5, 0.0));
    assert!(!pose.try_move(&registry, 0.4, 0.0));
    assert_eq!(pose.position, pillar + Vec2::new(-0.5, 0.0));
}

#[test]
fn empty_registry_accepts_everything() {
    let registry = ObstacleRegistry::default();
    let mut pose = PlayerPose::new(Vec2::ZERO);
    for _ in 0..10 {
        assert!(pose.try_move(&registry, 100.0, -3.0));
    }
}

#[cfg(feature = "json")]
#[test]
fn layout_serializes() {
    let layout = generate_maze(LENGTH, WIDTH, HEIGHT, 1, DEFAULT_SEED).unwrap();
    let json = layout.to_json().unwrap();
    assert!(json.contains("\"walls\""));
    assert!(json.contains("\"spawn\""));
}
