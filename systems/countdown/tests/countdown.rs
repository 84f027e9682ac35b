use std::time::Duration;

use ricochet_core::{CellCoord, Direction, Event, GoalError, RobotColor, TargetToken};
use ricochet_system_countdown::{Countdown, CountdownReading, DEFAULT_DURATION};

#[test]
fn stopped_countdown_has_no_reading() {
    let mut countdown = Countdown::default();
    assert_eq!(countdown.duration(), DEFAULT_DURATION);

    countdown.advance(Duration::from_secs(5));

    assert!(!countdown.is_running());
    assert_eq!(countdown.reading(), None);
}

#[test]
fn toggle_starts_and_cancels() {
    let mut countdown = Countdown::new(Duration::from_secs(30));

    countdown.toggle();
    assert!(countdown.is_running());
    assert_eq!(countdown.remaining(), Some(Duration::from_secs(30)));

    countdown.toggle();
    assert!(!countdown.is_running());
    assert_eq!(countdown.remaining(), None);
}

#[test]
fn advance_counts_down_to_zero_and_holds() {
    let mut countdown = Countdown::new(Duration::from_secs(2));
    countdown.toggle();

    countdown.advance(Duration::from_millis(750));
    assert_eq!(
        countdown.reading(),
        Some(CountdownReading {
            seconds: 1,
            hundredths: 25
        })
    );
    assert!(!countdown.is_expired());

    countdown.advance(Duration::from_secs(10));
    assert!(countdown.is_expired());
    assert!(countdown.is_running(), "expired countdown stays visible");
    assert_eq!(
        countdown.reading(),
        Some(CountdownReading {
            seconds: 0,
            hundredths: 0
        })
    );
}

#[test]
fn move_count_changes_cancel_the_countdown() {
    let cancelling = [
        Event::RobotSlid {
            robot: RobotColor::Red,
            direction: Direction::East,
            from: CellCoord::new(1, 1),
            to: CellCoord::new(4, 1),
        },
        Event::RobotsReset { rewound: 0 },
        Event::GoalDrawn {
            token: TargetToken::Wild,
            cell: CellCoord::new(3, 3),
        },
        Event::LayoutApplied,
    ];

    for event in cancelling {
        let mut countdown = Countdown::default();
        countdown.toggle();
        countdown.handle(std::slice::from_ref(&event));
        assert!(!countdown.is_running(), "{event:?} should cancel");
    }
}

#[test]
fn informational_events_leave_the_countdown_running() {
    let mut countdown = Countdown::default();
    countdown.toggle();

    countdown.handle(&[
        Event::SlideBlocked {
            robot: RobotColor::Blue,
            direction: Direction::North,
            cell: CellCoord::new(2, 0),
        },
        Event::GoalRejected {
            token: TargetToken::Wild,
            reason: GoalError::NotInBag,
        },
        Event::BagEmptied,
    ]);

    assert!(countdown.is_running());
}
