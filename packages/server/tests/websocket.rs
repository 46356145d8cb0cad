//! WebSocket integration tests.
//!
//! Drives the real server over `/ws` with JSON `{event, data}` frames.

mod fixtures;
use fixtures::{TestServer, next_event, next_matching, send_event, send_raw};
use serde_json::{Value, json};

#[tokio::test]
async fn test_connect_receives_rooms_snapshot() {
    // テスト項目: 接続直後に全ルームのスナップショットが届く
    // given (前提条件):
    let port = 19190;
    let server = TestServer::start(port);

    // when (操作):
    let mut ws = server.connect().await;

    // then (期待する結果):
    let snapshot = next_event(&mut ws, "roomsSnapshot").await;
    assert_eq!(
        snapshot["room-1"],
        json!({"timeLeft": 3600, "hint": "", "isRunning": false})
    );
}

#[tokio::test]
async fn test_join_room_creates_room_lazily() {
    // テスト項目: 未知のルームに join すると初期状態のルームが作成され、スナップショットに現れる
    // given (前提条件):
    let port = 19191;
    let server = TestServer::start(port);
    let mut ws = server.connect().await;

    // when (操作):
    send_event(&mut ws, "joinRoom", json!("room-7")).await;

    // then (期待する結果):
    let state = next_event(&mut ws, "roomState").await;
    assert_eq!(
        state,
        json!({"roomId": "room-7", "timeLeft": 3600, "hint": "", "isRunning": false})
    );
    let snapshot = next_matching(&mut ws, "roomsSnapshot", |data| data.get("room-7").is_some()).await;
    assert_eq!(snapshot["room-7"]["timeLeft"], 3600);
    assert!(snapshot.get("room-1").is_some());
}

#[tokio::test]
async fn test_join_room_non_string_payload_uses_default() {
    // テスト項目: 文字列でないルーム ID（オブジェクト・空ペイロード・空白）はデフォルトルームへの join になる
    // given (前提条件):
    let port = 19192;
    let server = TestServer::start(port);
    let mut ws = server.connect().await;

    // when (操作):
    send_event(&mut ws, "joinRoom", json!({"roomId": "lab"})).await;
    let object = next_event(&mut ws, "roomState").await;
    send_event(&mut ws, "joinRoom", Value::Null).await;
    let empty = next_event(&mut ws, "roomState").await;
    send_event(&mut ws, "joinRoom", json!("   ")).await;
    let blank = next_event(&mut ws, "roomState").await;

    // then (期待する結果):
    assert_eq!(object["roomId"], "room-1");
    assert_eq!(empty["roomId"], "room-1");
    assert_eq!(blank["roomId"], "room-1");
}

#[tokio::test]
async fn test_start_game_counts_down_to_zero() {
    // テスト項目: 開始したルームは tick ごとに減り、0 で自動停止する
    // given (前提条件):
    let port = 19193;
    let server = TestServer::start_with_args(
        port,
        &["--tick-interval-ms", "100", "--default-duration", "2"],
    );
    let mut ws = server.connect().await;
    send_event(&mut ws, "joinRoom", json!("room-1")).await;
    next_event(&mut ws, "roomState").await;

    // when (操作):
    send_event(&mut ws, "startGame", json!("room-1")).await;

    // then (期待する結果):
    let running = next_event(&mut ws, "updateRunning").await;
    assert_eq!(running, json!(true));
    next_matching(&mut ws, "updateTime", |data| data == &json!(1)).await;
    next_matching(&mut ws, "updateTime", |data| data == &json!(0)).await;
    let stopped = next_event(&mut ws, "updateRunning").await;
    assert_eq!(stopped, json!(false));

    let snapshot = next_event(&mut ws, "roomsSnapshot").await;
    assert_eq!(
        snapshot["room-1"],
        json!({"timeLeft": 0, "hint": "", "isRunning": false})
    );
}

#[tokio::test]
async fn test_pause_and_reset() {
    // テスト項目: 一時停止で isRunning が false、リセットで残り時間が初期値に戻る
    // given (前提条件):
    let port = 19194;
    let server = TestServer::start_with_args(port, &["--tick-interval-ms", "100"]);
    let mut ws = server.connect().await;
    send_event(&mut ws, "joinRoom", json!("room-1")).await;
    next_event(&mut ws, "roomState").await;
    send_event(&mut ws, "startGame", json!("room-1")).await;
    next_matching(&mut ws, "updateTime", |data| {
        data.as_u64().is_some_and(|secs| secs < 3600)
    })
    .await;

    // when (操作):
    send_event(&mut ws, "pauseGame", json!("room-1")).await;
    let paused = next_event(&mut ws, "updateRunning").await;
    send_event(&mut ws, "resetGame", json!("room-1")).await;
    let reset_time = next_matching(&mut ws, "updateTime", |data| data == &json!(3600)).await;
    let reset_running = next_event(&mut ws, "updateRunning").await;

    // then (期待する結果):
    assert_eq!(paused, json!(false));
    assert_eq!(reset_time, json!(3600));
    assert_eq!(reset_running, json!(false));
}

#[tokio::test]
async fn test_hint_reaches_room_subscribers() {
    // テスト項目: 管理側から送ったヒントが同じルームのプレイヤーに届き、他ルームには届かない
    // given (前提条件):
    let port = 19195;
    let server = TestServer::start(port);
    let mut player = server.connect().await;
    send_event(&mut player, "joinRoom", json!("room-1")).await;
    next_event(&mut player, "roomState").await;
    let mut other = server.connect().await;
    send_event(&mut other, "joinRoom", json!("room-2")).await;
    next_event(&mut other, "roomState").await;
    let mut admin = server.connect().await;

    // when (操作):
    send_event(
        &mut admin,
        "updateHint",
        json!({"roomId": "room-1", "hint": "check the drawer"}),
    )
    .await;

    // then (期待する結果):
    let hint = next_event(&mut player, "updateHint").await;
    assert_eq!(hint, json!("check the drawer"));

    // 他ルームのプレイヤーにはスナップショットのみ届く
    let snapshot = next_matching(&mut other, "roomsSnapshot", |data| {
        data["room-1"]["hint"] == "check the drawer"
    })
    .await;
    assert_eq!(snapshot["room-2"]["hint"], "");

    // 管理側（未参加）もスナップショットで変更を受け取る
    next_matching(&mut admin, "roomsSnapshot", |data| {
        data["room-1"]["hint"] == "check the drawer"
    })
    .await;
}

#[tokio::test]
async fn test_malformed_frames_are_ignored() {
    // テスト項目: 不正なフレームや未知のイベントは無視され、接続は維持される
    // given (前提条件):
    let port = 19196;
    let server = TestServer::start(port);
    let mut ws = server.connect().await;
    next_event(&mut ws, "roomsSnapshot").await;

    // when (操作):
    send_raw(&mut ws, "not json").await;
    send_event(&mut ws, "selfDestruct", json!(null)).await;
    send_event(&mut ws, "updateHint", json!(["room-1", "bad"])).await;
    send_event(&mut ws, "joinRoom", json!("room-3")).await;

    // then (期待する結果):
    let state = next_event(&mut ws, "roomState").await;
    assert_eq!(state["roomId"], "room-3");
    assert_eq!(state["hint"], "");
}
