mod common;

use common::{run, RecordingPlayer};
use prof_sounds::events::{MessageEvent, SoundKind};
use prof_sounds::hooks::Hooks;
use prof_sounds::host::StaticRooms;
use prof_sounds::settings::MemorySettings;

const ROOM: &str = "lounge@conference.example.org";

fn configured(enabled: bool) -> MemorySettings {
    let mut store = MemorySettings::new();
    run(&mut store, "set chat chat.mp3");
    run(&mut store, "set room room.mp3");
    run(&mut store, "set private private.mp3");
    run(&mut store, if enabled { "on" } else { "off" });
    store
}

fn joined() -> StaticRooms {
    StaticRooms::new().join(ROOM, "me")
}

#[test]
fn chat_message_plays_chat_sound() {
    let store = configured(true);
    let rooms = joined();
    let player = RecordingPlayer::default();

    Hooks::new(&store, &rooms, &player).on_chat_message("friend@example.org", "phone", "hi");

    assert_eq!(player.played(), vec!["chat.mp3"]);
}

#[test]
fn private_message_plays_private_sound() {
    let store = configured(true);
    let rooms = joined();
    let player = RecordingPlayer::default();

    Hooks::new(&store, &rooms, &player).on_private_message(ROOM, "someone", "psst");

    assert_eq!(player.played(), vec!["private.mp3"]);
}

#[test]
fn disabled_hooks_never_play() {
    let store = configured(false);
    let rooms = joined();
    let player = RecordingPlayer::default();
    let hooks = Hooks::new(&store, &rooms, &player);

    hooks.on_chat_message("friend@example.org", "phone", "hi");
    hooks.on_room_message(ROOM, "someone", "hello all");
    hooks.on_private_message(ROOM, "someone", "psst");

    assert!(player.played().is_empty());
}

#[test]
fn unset_sound_is_a_no_op() {
    let mut store = configured(true);
    run(&mut store, "clear chat");
    run(&mut store, "clear room");
    run(&mut store, "clear private");
    let rooms = joined();
    let player = RecordingPlayer::default();
    let hooks = Hooks::new(&store, &rooms, &player);

    hooks.on_chat_message("friend@example.org", "phone", "hi");
    hooks.on_room_message(ROOM, "someone", "hello all");
    hooks.on_private_message(ROOM, "someone", "psst");

    assert!(player.played().is_empty());
}

#[test]
fn own_room_messages_are_silent() {
    let store = configured(true);
    let rooms = joined();
    let player = RecordingPlayer::default();

    Hooks::new(&store, &rooms, &player).on_room_message(ROOM, "me", "my own words");

    assert!(player.played().is_empty());
}

#[test]
fn unknown_own_nick_is_silent() {
    let store = configured(true);
    let rooms = StaticRooms::new();
    let player = RecordingPlayer::default();

    Hooks::new(&store, &rooms, &player).on_room_message(ROOM, "someone", "hello");

    assert!(player.played().is_empty());
}

#[test]
fn empty_own_nick_is_treated_as_unknown() {
    let store = configured(true);
    let rooms = StaticRooms::new().join(ROOM, "");
    let player = RecordingPlayer::default();

    Hooks::new(&store, &rooms, &player).on_room_message(ROOM, "someone", "hello");

    assert!(player.played().is_empty());
}

#[test]
fn empty_allowlist_plays_in_any_room() {
    let store = configured(true);
    let rooms = joined().join("other@conference.example.org", "me");
    let player = RecordingPlayer::default();
    let hooks = Hooks::new(&store, &rooms, &player);

    hooks.on_room_message(ROOM, "someone", "hello");
    hooks.on_room_message("other@conference.example.org", "someone", "hello");

    assert_eq!(player.played(), vec!["room.mp3", "room.mp3"]);
}

#[test]
fn allowlist_filters_rooms() {
    let mut store = configured(true);
    run(&mut store, &format!("rooms add {ROOM}"));
    let rooms = joined().join("other@conference.example.org", "me");
    let player = RecordingPlayer::default();
    let hooks = Hooks::new(&store, &rooms, &player);

    hooks.on_room_message("other@conference.example.org", "someone", "hello");
    assert!(player.played().is_empty());

    hooks.on_room_message(ROOM, "someone", "hello");
    assert_eq!(player.played(), vec!["room.mp3"]);
}

#[test]
fn settings_are_reread_on_every_event() {
    let mut store = configured(true);
    let rooms = joined();
    let player = RecordingPlayer::default();

    Hooks::new(&store, &rooms, &player).on_chat_message("friend@example.org", "", "one");
    run(&mut store, "set chat other.mp3");
    Hooks::new(&store, &rooms, &player).on_chat_message("friend@example.org", "", "two");

    assert_eq!(player.played(), vec!["chat.mp3", "other.mp3"]);
}

#[test]
fn dispatch_routes_by_kind() {
    let store = configured(true);
    let rooms = joined();
    let player = RecordingPlayer::default();
    let hooks = Hooks::new(&store, &rooms, &player);

    hooks.dispatch(&MessageEvent::new(SoundKind::Chat, "friend@example.org", None));
    hooks.dispatch(
        &MessageEvent::new(SoundKind::Room, ROOM, Some("someone".to_string())).with_message("hey"),
    );
    hooks.dispatch(&MessageEvent::new(SoundKind::Room, ROOM, Some("me".to_string())));
    hooks.dispatch(&MessageEvent::new(SoundKind::Private, ROOM, Some("someone".to_string())));

    assert_eq!(player.played(), vec!["chat.mp3", "room.mp3", "private.mp3"]);
}
