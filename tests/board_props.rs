use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    generate_grid, random_target, CellState, Coord, FleetConfig, Grid, Orientation, ShotError,
    ShotOutcome, Vessel,
};

fn random_grid(seed: u64) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    generate_grid(&FleetConfig::default(), &mut rng).unwrap()
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cells_are_contiguous_and_collinear(
        col in 1usize..=6,
        row in 1usize..=6,
        length in 1usize..=3,
        orient in orientation(),
    ) {
        let ship = Vessel::new(Coord::unchecked(col, row), length, orient);
        let cells = ship.cells();
        prop_assert_eq!(cells.len(), length);
        prop_assert_eq!(cells[0], Coord::unchecked(col, row));
        for pair in cells.windows(2) {
            match orient {
                Orientation::Horizontal => {
                    prop_assert_eq!(pair[1].row, pair[0].row);
                    prop_assert_eq!(pair[1].col, pair[0].col + 1);
                }
                Orientation::Vertical => {
                    prop_assert_eq!(pair[1].col, pair[0].col);
                    prop_assert_eq!(pair[1].row, pair[0].row + 1);
                }
            }
        }
    }

    #[test]
    fn generated_fleets_never_touch(seed in any::<u64>()) {
        let grid = random_grid(seed);
        let vessels = grid.vessels();
        prop_assert_eq!(vessels.len(), 7);
        prop_assert_eq!(grid.remaining_vessels(), 7);
        for (i, a) in vessels.iter().enumerate() {
            for b in &vessels[i + 1..] {
                for ca in a.cells() {
                    for cb in b.cells() {
                        prop_assert!(ca.distance(cb) > 1, "{:?} touches {:?}", a, b);
                    }
                }
            }
        }
        // every ship cell belongs to exactly one vessel
        let view = grid.view(false);
        for p in view.coords() {
            let owners = vessels.iter().filter(|v| v.occupies(p)).count();
            let expected = usize::from(grid.cell(p) == Some(CellState::Ship));
            prop_assert_eq!(owners, expected);
        }
    }

    #[test]
    fn repeat_shot_is_refused_and_changes_nothing(
        seed in any::<u64>(),
        col in 1usize..=6,
        row in 1usize..=6,
    ) {
        let mut grid = random_grid(seed);
        let target = Coord::unchecked(col, row);
        prop_assert!(grid.receive_shot(target).is_ok());
        let cells: Vec<_> = grid.view(false).coords().map(|p| grid.cell(p)).collect();
        let remaining = grid.remaining_vessels();

        prop_assert_eq!(grid.receive_shot(target), Err(ShotError::AlreadyShot { coord: target }));
        let after: Vec<_> = grid.view(false).coords().map(|p| grid.cell(p)).collect();
        prop_assert_eq!(cells, after);
        prop_assert_eq!(grid.remaining_vessels(), remaining);
    }

    #[test]
    fn each_vessel_sinks_exactly_once(seed in any::<u64>()) {
        let mut grid = random_grid(seed);
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
        let mut sunk = 0;
        loop {
            let Ok(target) = random_target(&grid.view(true), &mut rng) else {
                break;
            };
            let before: Vec<_> = grid.view(false).coords().map(|p| grid.cell(p)).collect();
            let outcome = grid.receive_shot(target).unwrap();
            if let ShotOutcome::Sunk { length } = outcome {
                sunk += 1;
                let vessel = grid
                    .vessels()
                    .iter()
                    .find(|v| v.occupies(target))
                    .unwrap();
                prop_assert!(vessel.is_sunk());
                prop_assert_eq!(vessel.len(), length);
                // every previously empty neighbour is now a miss
                let view = grid.view(false);
                for (p, old) in view.coords().zip(before) {
                    let touches = vessel.cells().iter().any(|c| c.distance(&p) == 1);
                    if touches && !vessel.occupies(p) && old == Some(CellState::Empty) {
                        prop_assert_eq!(grid.cell(p), Some(CellState::Miss));
                    }
                }
            } else {
                let afloat = grid.vessels().iter().filter(|v| !v.is_sunk()).count();
                prop_assert_eq!(grid.remaining_vessels(), afloat);
            }
        }
        prop_assert_eq!(sunk, 7);
        prop_assert!(grid.is_defeated());
        prop_assert!(grid.vessels().iter().all(|v| v.is_sunk()));
    }
}
