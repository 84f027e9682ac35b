use ricochet_core::{
    CellCoord, Command, Direction, Event, GoalError, Layout, Move, RobotColor, RobotPlacement,
    Shape, TargetPlacement, TargetToken, WallPos,
};
use ricochet_world::{self as world, query, World};

const RED_SQUARE: TargetToken = TargetToken::Colored {
    color: RobotColor::Red,
    shape: Shape::Square,
};
const BLUE_CIRCLE: TargetToken = TargetToken::Colored {
    color: RobotColor::Blue,
    shape: Shape::Circle,
};

fn sample_layout() -> Layout {
    Layout {
        robots: vec![
            RobotPlacement {
                robot: RobotColor::Red,
                cell: CellCoord::new(5, 5),
            },
            RobotPlacement {
                robot: RobotColor::Yellow,
                cell: CellCoord::new(2, 10),
            },
            RobotPlacement {
                robot: RobotColor::Green,
                cell: CellCoord::new(12, 2),
            },
            RobotPlacement {
                robot: RobotColor::Blue,
                cell: CellCoord::new(10, 12),
            },
        ],
        targets: vec![
            TargetPlacement {
                token: RED_SQUARE,
                cell: CellCoord::new(8, 5),
            },
            TargetPlacement {
                token: BLUE_CIRCLE,
                cell: CellCoord::new(10, 5),
            },
            TargetPlacement {
                token: TargetToken::Wild,
                cell: CellCoord::new(5, 1),
            },
        ],
        walls: vec![
            WallPos::between(CellCoord::new(8, 5), CellCoord::new(9, 5)).expect("adjacent"),
            WallPos::between(CellCoord::new(5, 1), CellCoord::new(5, 0)).expect("adjacent"),
        ],
    }
}

fn started_world() -> World {
    let mut world = World::new();
    let mut events = Vec::new();
    world::apply(
        &mut world,
        Command::ApplyLayout {
            layout: sample_layout(),
        },
        &mut events,
    );
    assert_eq!(events, vec![Event::LayoutApplied]);
    world
}

fn slide(world: &mut World, robot: RobotColor, direction: Direction) -> Vec<Event> {
    let mut events = Vec::new();
    world::apply(world, Command::SlideRobot { robot, direction }, &mut events);
    events
}

fn run(world: &mut World, command: Command) -> Vec<Event> {
    let mut events = Vec::new();
    world::apply(world, command, &mut events);
    events
}

fn positions(world: &World) -> Vec<(RobotColor, CellCoord)> {
    query::robots(world)
}

#[test]
fn layout_installs_robots_targets_and_bag() {
    let world = started_world();

    assert_eq!(query::robot(&world, RobotColor::Red), Some(CellCoord::new(5, 5)));
    assert_eq!(query::targets(&world).len(), 3);
    assert_eq!(query::bag(&world).len(), 3);
    assert!(query::can_draw(&world));
    assert_eq!(query::goal(&world), None);
    assert!(!query::is_goal_met(&world));
    assert_eq!(
        query::walls(&world).len(),
        query::perimeter_walls(&world).len() + 2
    );
}

#[test]
fn target_wall_stops_slide_on_the_target() {
    let mut world = started_world();

    let events = slide(&mut world, RobotColor::Red, Direction::East);

    assert_eq!(
        events,
        vec![Event::RobotSlid {
            robot: RobotColor::Red,
            direction: Direction::East,
            from: CellCoord::new(5, 5),
            to: CellCoord::new(8, 5),
        }]
    );
    assert_eq!(query::move_count(&world), 1);
}

#[test]
fn undo_on_fresh_round_changes_nothing() {
    let mut world = started_world();
    let before = positions(&world);

    let events = run(&mut world, Command::UndoMove);

    assert!(events.is_empty());
    assert_eq!(positions(&world), before);
    assert_eq!(query::move_count(&world), 0);
    assert!(!query::can_undo(&world));
}

#[test]
fn undo_redo_round_trip_restores_positions_and_cursor() {
    let mut world = started_world();
    let script = [
        (RobotColor::Red, Direction::East),
        (RobotColor::Green, Direction::West),
        (RobotColor::Yellow, Direction::North),
        (RobotColor::Blue, Direction::North),
        (RobotColor::Red, Direction::South),
    ];
    for (robot, direction) in script {
        let _ = slide(&mut world, robot, direction);
    }
    let count = query::move_count(&world);
    assert_eq!(count, script.len(), "every scripted slide should move");
    let after_slides = positions(&world);

    for _ in 0..count {
        let events = run(&mut world, Command::UndoMove);
        assert!(matches!(events.first(), Some(Event::MoveUndone { .. })));
    }
    assert_eq!(query::move_count(&world), 0);
    assert_eq!(
        positions(&world),
        sample_layout()
            .robots
            .iter()
            .map(|placement| (placement.robot, placement.cell))
            .collect::<Vec<_>>()
    );

    for _ in 0..count {
        let events = run(&mut world, Command::RedoMove);
        assert!(matches!(events.first(), Some(Event::MoveRedone { .. })));
    }
    assert_eq!(query::move_count(&world), count);
    assert_eq!(positions(&world), after_slides);
}

#[test]
fn slide_after_undo_discards_redo_history() {
    let mut world = started_world();
    let _ = slide(&mut world, RobotColor::Red, Direction::East);
    let _ = slide(&mut world, RobotColor::Green, Direction::West);
    let _ = run(&mut world, Command::UndoMove);
    assert!(query::can_redo(&world));

    let _ = slide(&mut world, RobotColor::Blue, Direction::West);

    assert!(!query::can_redo(&world));
    assert!(run(&mut world, Command::RedoMove).is_empty());
    assert_eq!(query::move_log(&world).len(), 2);
}

#[test]
fn reset_rewinds_without_discarding_history() {
    let mut world = started_world();
    let _ = slide(&mut world, RobotColor::Red, Direction::East);
    let _ = slide(&mut world, RobotColor::Red, Direction::North);

    let events = run(&mut world, Command::ResetRobots);

    assert_eq!(events, vec![Event::RobotsReset { rewound: 2 }]);
    assert_eq!(query::robot(&world, RobotColor::Red), Some(CellCoord::new(5, 5)));
    assert_eq!(query::move_count(&world), 0);
    assert_eq!(query::move_log(&world).len(), 2);
    assert!(query::can_redo(&world));
}

#[test]
fn drawing_a_goal_clears_history_and_reanchors_origins() {
    let mut world = started_world();
    let _ = slide(&mut world, RobotColor::Red, Direction::East);

    let events = run(&mut world, Command::DrawGoal { token: BLUE_CIRCLE });

    assert_eq!(
        events,
        vec![Event::GoalDrawn {
            token: BLUE_CIRCLE,
            cell: CellCoord::new(10, 5),
        }]
    );
    assert_eq!(query::move_count(&world), 0);
    assert!(query::move_log(&world).is_empty());
    assert_eq!(
        query::origin(&world, RobotColor::Red),
        Some(CellCoord::new(8, 5))
    );
    assert_eq!(query::goal_cell(&world), Some(CellCoord::new(10, 5)));
}

#[test]
fn drawn_token_cannot_be_drawn_again() {
    let mut world = started_world();
    let _ = run(&mut world, Command::DrawGoal { token: RED_SQUARE });

    let events = run(&mut world, Command::DrawGoal { token: RED_SQUARE });

    assert_eq!(
        events,
        vec![Event::GoalRejected {
            token: RED_SQUARE,
            reason: GoalError::NotInBag,
        }]
    );
    assert_eq!(query::goal(&world), Some(RED_SQUARE));
}

#[test]
fn final_draw_empties_the_bag() {
    let mut world = started_world();
    let _ = run(&mut world, Command::DrawGoal { token: RED_SQUARE });
    let _ = run(&mut world, Command::DrawGoal { token: BLUE_CIRCLE });

    let events = run(
        &mut world,
        Command::DrawGoal {
            token: TargetToken::Wild,
        },
    );

    assert!(events.contains(&Event::BagEmptied));
    assert!(!query::can_draw(&world));
}

#[test]
fn colored_goal_requires_the_matching_robot() {
    let mut world = started_world();
    let _ = run(&mut world, Command::DrawGoal { token: RED_SQUARE });
    assert!(!query::is_goal_met(&world));

    let events = slide(&mut world, RobotColor::Red, Direction::East);

    assert!(events.contains(&Event::GoalReached {
        token: RED_SQUARE,
        robot: RobotColor::Red,
    }));
    assert!(query::is_goal_met(&world));

    let _ = run(&mut world, Command::UndoMove);
    assert!(!query::is_goal_met(&world));
}

#[test]
fn colored_goal_ignores_other_robots() {
    let mut layout = sample_layout();
    layout.robots[2].cell = CellCoord::new(10, 2);
    layout
        .walls
        .push(WallPos::between(CellCoord::new(10, 5), CellCoord::new(10, 6)).expect("adjacent"));
    let mut world = World::new();
    let _ = run(&mut world, Command::ApplyLayout { layout });
    let _ = run(&mut world, Command::DrawGoal { token: BLUE_CIRCLE });

    let events = slide(&mut world, RobotColor::Green, Direction::South);

    assert_eq!(query::robot(&world, RobotColor::Green), Some(CellCoord::new(10, 5)));
    assert!(!events
        .iter()
        .any(|event| matches!(event, Event::GoalReached { .. })));
    assert!(!query::is_goal_met(&world));

    let _ = slide(&mut world, RobotColor::Blue, Direction::North);
    assert_eq!(query::robot(&world, RobotColor::Blue), Some(CellCoord::new(10, 6)));
    assert!(!query::is_goal_met(&world));
}

#[test]
fn wild_goal_accepts_any_robot() {
    let mut world = started_world();
    let _ = run(
        &mut world,
        Command::DrawGoal {
            token: TargetToken::Wild,
        },
    );

    let events = slide(&mut world, RobotColor::Red, Direction::North);

    assert_eq!(query::robot(&world, RobotColor::Red), Some(CellCoord::new(5, 1)));
    assert!(events.contains(&Event::GoalReached {
        token: TargetToken::Wild,
        robot: RobotColor::Red,
    }));
    assert!(query::is_goal_met(&world));
}

#[test]
fn move_log_records_only_displacements() {
    let mut world = started_world();
    let _ = slide(&mut world, RobotColor::Red, Direction::East);
    let _ = slide(&mut world, RobotColor::Red, Direction::East);

    assert_eq!(
        query::move_log(&world).applied(),
        &[Move::new(
            RobotColor::Red,
            CellCoord::new(5, 5),
            CellCoord::new(8, 5)
        )]
    );
}
