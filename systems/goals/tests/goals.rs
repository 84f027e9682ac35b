use std::collections::BTreeSet;

use ricochet_core::{
    CellCoord, Command, Event, Layout, RobotColor, RobotPlacement, TargetPlacement, TargetToken,
};
use ricochet_system_goals::{Config, Goals};
use ricochet_world::{self as world, query, World};

fn world_with_every_target() -> World {
    let robots = [(1, 1), (14, 1), (1, 14), (14, 14)];
    let layout = Layout {
        robots: RobotColor::ALL
            .into_iter()
            .zip(robots)
            .map(|(robot, (column, row))| RobotPlacement {
                robot,
                cell: CellCoord::new(column, row),
            })
            .collect(),
        targets: TargetToken::all()
            .into_iter()
            .enumerate()
            .map(|(index, token)| TargetPlacement {
                token,
                cell: CellCoord::new(2 + index as u32 % 12, 3 + 2 * (index as u32 / 12)),
            })
            .collect(),
        walls: Vec::new(),
    };

    let mut world = World::new();
    let mut events = Vec::new();
    world::apply(&mut world, Command::ApplyLayout { layout }, &mut events);
    assert_eq!(events, vec![Event::LayoutApplied], "layout should be valid");
    world
}

fn draw_all(seed: u64) -> Vec<TargetToken> {
    let mut world = world_with_every_target();
    let mut goals = Goals::new(Config::new(seed));
    let mut drawn = Vec::new();

    loop {
        let mut commands = Vec::new();
        goals.handle(query::bag(&world).tokens(), &mut commands);
        if commands.is_empty() {
            break;
        }
        let mut events = Vec::new();
        for command in commands {
            world::apply(&mut world, command, &mut events);
        }
        for event in events {
            if let Event::GoalDrawn { token, .. } = event {
                assert_eq!(query::goal(&world), Some(token));
                drawn.push(token);
            }
        }
    }
    drawn
}

#[test]
fn draws_every_token_exactly_once() {
    let drawn = draw_all(0x1234_5678);

    assert_eq!(drawn.len(), 17);
    let unique: BTreeSet<_> = drawn.iter().copied().collect();
    assert_eq!(unique.len(), 17, "no token should be drawn twice");
}

#[test]
fn same_seed_reproduces_the_draw_order() {
    assert_eq!(draw_all(42), draw_all(42));
}

#[test]
fn emitted_tokens_come_from_the_bag() {
    let world = world_with_every_target();
    let mut goals = Goals::new(Config::new(9));

    for _ in 0..64 {
        let mut commands = Vec::new();
        goals.handle(query::bag(&world).tokens(), &mut commands);
        match commands.as_slice() {
            [Command::DrawGoal { token }] => assert!(query::bag(&world).contains(*token)),
            other => panic!("unexpected commands emitted: {other:?}"),
        }
    }
}
