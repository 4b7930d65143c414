// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end session flow over channels against the stub service.

use std::time::{Duration, Instant};

use crossbeam_channel::unbounded;
use mancala_client::stub::{StubClient, PLAYER_ONE};
use mancala_core::session::Phase;
use mancala_ui_egui::app::App;
use mancala_ui_egui::worker;

fn launch(stub: StubClient) -> App {
    let (ui_tx, net_rx) = unbounded();
    let (net_tx, ui_rx) = unbounded();
    let handle = worker::spawn_worker(net_rx, net_tx, stub);
    let mut app = App::new(ui_tx, ui_rx);
    app.set_worker_handle(handle);
    app
}

fn pump_until(app: &mut App, pred: impl Fn(&App) -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        app.tick();
        if pred(app) {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    false
}

#[test]
fn start_game_populates_the_board() {
    let mut app = launch(StubClient::new());
    app.start_game();

    assert!(pump_until(&mut app, |app| app.state().session_started()));
    let state = app.state();
    assert_eq!(state.phase(), Phase::Playing);
    assert_eq!(state.current_player, PLAYER_ONE);
    assert_eq!(state.pits.len(), 14);
    let stones: u32 = state.pits.iter().map(|p| p.stones).sum();
    assert_eq!(stones, 48);
    assert!(!app.toasts().has_toasts());
}

#[test]
fn illegal_move_keeps_board_and_raises_notice() {
    let stub = StubClient::new();
    let mut app = launch(stub.clone());
    app.start_game();
    assert!(pump_until(&mut app, |app| app.state().session_started()));

    stub.reject_next_move();
    app.play_move(2);
    assert!(pump_until(&mut app, |app| !app.state().legal_move));

    // Board still re-renders from the returned data; turn did not change.
    let state = app.state();
    assert_eq!(state.pits.len(), 14);
    assert_eq!(state.current_player, PLAYER_ONE);
    assert!(app.toasts().has_toasts());
}

#[test]
fn start_failure_leaves_the_empty_board() {
    let stub = StubClient::new();
    stub.fail_next_request();
    let mut app = launch(stub);
    app.start_game();

    assert!(pump_until(&mut app, |app| app.state().network_error));
    let state = app.state();
    assert!(!state.session_started());
    assert!(state.pits.is_empty());
    assert_eq!(state.phase(), Phase::Welcome);
    assert!(app.toasts().has_toasts());
}

#[test]
fn move_failure_freezes_the_stale_board() {
    let stub = StubClient::new();
    let mut app = launch(stub.clone());
    app.start_game();
    assert!(pump_until(&mut app, |app| app.state().session_started()));
    let before = app.state().clone();

    stub.fail_next_request();
    app.play_move(4);
    assert!(pump_until(&mut app, |app| app.state().network_error));

    let state = app.state();
    assert_eq!(state.pits, before.pits);
    assert_eq!(state.current_player, before.current_player);
    assert!(!state.game_over);
}

#[test]
fn finished_game_blocks_further_moves() {
    let stub = StubClient::new();
    let mut app = launch(stub.clone());
    app.start_game();
    assert!(pump_until(&mut app, |app| app.state().session_started()));

    stub.finish_next_move(Some(PLAYER_ONE));
    app.play_move(1);
    assert!(pump_until(&mut app, |app| app.state().game_over));
    assert_eq!(app.state().phase(), Phase::Finished);
    assert_eq!(app.state().winner.as_ref().unwrap().id, PLAYER_ONE);

    // A click on the dead board must not reach the service.
    let served = stub.request_count();
    app.play_move(3);
    std::thread::sleep(Duration::from_millis(50));
    app.tick();
    assert_eq!(stub.request_count(), served);
}

#[test]
fn finished_without_winner_reads_as_draw() {
    let stub = StubClient::new();
    let mut app = launch(stub.clone());
    app.start_game();
    assert!(pump_until(&mut app, |app| app.state().session_started()));

    stub.finish_next_move(None);
    app.play_move(1);
    assert!(pump_until(&mut app, |app| app.state().game_over));
    assert!(app.state().is_draw());
    assert!(app.toasts().has_toasts());
}

#[test]
fn reset_after_game_end_starts_fresh() {
    let stub = StubClient::new();
    let mut app = launch(stub.clone());
    app.start_game();
    assert!(pump_until(&mut app, |app| app.state().session_started()));

    stub.finish_next_move(Some(PLAYER_ONE));
    app.play_move(1);
    assert!(pump_until(&mut app, |app| app.state().game_over));

    app.start_game();
    assert!(pump_until(&mut app, |app| {
        !app.state().game_over && app.state().session_started()
    }));
    assert_eq!(app.state().phase(), Phase::Playing);
    assert_eq!(app.state().current_player, PLAYER_ONE);
    assert!(app.state().winner.is_none());
}
