use std::io::Cursor;

use wildestone::{Cell, Point, Stone};
use wildestone_gtp::{Config, GtpSession};

fn drive(session: &mut GtpSession, script: &str) -> String {
    let mut output = Vec::new();
    wildestone_gtp::run(session, Cursor::new(script), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

fn nine_by_nine() -> GtpSession {
    GtpSession::new(&Config {
        board_size: 9,
        ..Config::default()
    })
}

#[test]
fn answers_each_command_in_order() {
    let mut session = nine_by_nine();
    let output = drive(
        &mut session,
        "1 protocol_version\n# comment\n\n2 play b E5\n3 play w E5\n4 undo\n",
    );

    assert_eq!(
        output,
        "=1 2\n\n=2 \n\n?3 illegal move (occupied point)\n\n=4 \n\n"
    );
    assert_eq!(session.game().stone_at(Point::new(4, 4)), Cell::Empty);
}

#[test]
fn stops_reading_after_quit() {
    let mut session = nine_by_nine();
    let output = drive(&mut session, "quit\nplay b A1\n");

    assert_eq!(output, "= \n\n");
    assert!(session.is_done());
    assert!(session.game().move_history().is_empty());
}

#[test]
fn ko_recapture_is_refused_over_the_protocol() {
    let mut session = nine_by_nine();
    let output = drive(
        &mut session,
        "play b B1\nplay w C1\nplay b A2\nplay w B2\nplay b B3\nplay w D2\n\
         play b J9\nplay w C3\nplay b C2\nplay w B2\n",
    );

    let replies: Vec<&str> = output.split("\n\n").filter(|r| !r.is_empty()).collect();
    assert_eq!(replies.len(), 10);
    assert!(replies[..9].iter().all(|r| r.starts_with('=')));
    assert_eq!(replies[9], "? illegal move (ko violation)");
    assert_eq!(session.game().stone_captures(Stone::Black), 1);
}

#[test]
fn engine_plays_a_whole_game_against_itself() {
    let mut session = nine_by_nine();
    let script = "genmove b\ngenmove w\n".repeat(40);
    let output = drive(&mut session, &script);

    assert_eq!(output.matches('=').count(), 80);
    assert_eq!(session.game().move_history().len(), 80);
    for point in session.game().goban().points() {
        if let Some(group) = session.game().group_at(point) {
            assert!(!group.is_captured());
        }
    }
}

#[test]
fn showboard_renders_the_grid() {
    let mut session = GtpSession::new(&Config {
        board_size: 3,
        ..Config::default()
    });
    let output = drive(&mut session, "play b A1\nshowboard\n");

    assert!(output.ends_with(
        "= \n   A B C\n 3 . . .\n 2 . . .\n 1 X . .\nBlack captures: 0, White captures: 0\n\n"
    ));
}
