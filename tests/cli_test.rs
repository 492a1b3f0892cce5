#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use seabattle::{
        level_from, parse_command, CliPlayer, Command, Coord, Grid, InputError, Player, ShotError,
        ShotOutcome,
    };

    fn player(input: &str) -> CliPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        CliPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(
            parse_command("3 4"),
            Ok(Command::Fire(Coord::unchecked(3, 4)))
        );
        assert_eq!(
            parse_command("  1   6 \n"),
            Ok(Command::Fire(Coord::unchecked(1, 6)))
        );
        // range is the board's business
        assert_eq!(
            parse_command("0 7"),
            Ok(Command::Fire(Coord::unchecked(0, 7)))
        );
        assert_eq!(parse_command("STOP"), Ok(Command::Stop));
        assert_eq!(parse_command("stop\n"), Ok(Command::Stop));
        for bad in ["", "3", "3 4 5", "a b", "-1 2", "3,4"] {
            assert_eq!(parse_command(bad), Err(InputError::Malformed), "{bad:?}");
        }
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut rng = SmallRng::seed_from_u64(1);
        let grid = Grid::new(6);
        let mut cli = player("hello\n2 5\n");
        let target = cli.select_target(&mut rng, &grid.view(true));
        assert_eq!(target, Some(Coord::unchecked(2, 5)));

        let out = String::from_utf8(cli.into_output()).unwrap();
        assert_eq!(out.matches("Your move (format: x y): ").count(), 2);
        assert!(out.contains("Please enter two numbers separated by a space!"));
    }

    #[test]
    fn test_stop_and_end_of_input() {
        let mut rng = SmallRng::seed_from_u64(1);
        let grid = Grid::new(6);

        let mut cli = player("stop\n");
        assert_eq!(cli.select_target(&mut rng, &grid.view(true)), None);
        let out = String::from_utf8(cli.into_output()).unwrap();
        assert!(out.contains("Game terminated."));

        let mut cli = player("");
        assert_eq!(cli.select_target(&mut rng, &grid.view(true)), None);
    }

    #[test]
    fn test_reports_outcomes() {
        let mut cli = player("");
        let target = Coord::unchecked(1, 1);
        cli.handle_shot_result(target, &Ok(ShotOutcome::Miss));
        cli.handle_shot_result(target, &Ok(ShotOutcome::Hit));
        cli.handle_shot_result(target, &Ok(ShotOutcome::Sunk { length: 2 }));
        cli.handle_shot_result(target, &Err(ShotError::AlreadyShot { coord: target }));
        cli.handle_shot_result(
            target,
            &Err(ShotError::OutOfRange {
                coord: Coord::unchecked(7, 1),
                size: 6,
            }),
        );
        cli.handle_opponent_shot(Coord::unchecked(4, 2), ShotOutcome::Miss);

        let out = String::from_utf8(cli.into_output()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Miss!");
        assert_eq!(lines[1], "Ship wounded!");
        assert_eq!(lines[2], "Ship destroyed!");
        assert_eq!(lines[3], "You have already shot at this cell!");
        assert!(lines[4].starts_with("You are trying to shoot outside the board!"));
        assert_eq!(lines[5], "Computer move: 4 2 -> Miss!");
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(level_from(Some("debug")), log::LevelFilter::Debug);
        assert_eq!(level_from(Some("nonsense")), log::LevelFilter::Warn);
        assert_eq!(level_from(None), log::LevelFilter::Warn);
    }
}
