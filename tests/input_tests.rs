// Host-side tests for pointer state, pointer projection and file acceptance.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod swarm {
    pub mod pointer {
        include!("../src/core/pointer.rs");
    }
    pub mod track {
        include!("../src/core/track.rs");
    }
}
mod camera {
    include!("../src/camera.rs");
}

use camera::*;
use glam::{Quat, Vec3};
use swarm::pointer::*;
use swarm::track::TrackKind;

#[test]
fn pointer_cell_is_empty_until_a_position_arrives() {
    let pointer = SharedPointer::new();
    assert_eq!(pointer.snapshot(), None);
    // pressing without a position still yields nothing to interact with
    pointer.set_engaged(true);
    assert_eq!(pointer.snapshot(), None);
    pointer.set_position(Vec3::new(0.5, 0.0, 1.0));
    assert_eq!(
        pointer.snapshot(),
        Some(PointerState {
            position: Vec3::new(0.5, 0.0, 1.0),
            engaged: true,
        })
    );
}

#[test]
fn pointer_clones_share_one_cell() {
    let writer = SharedPointer::new();
    let reader = writer.clone();
    writer.set_position(Vec3::ONE);
    writer.set_engaged(true);
    assert_eq!(reader.snapshot().map(|p| p.engaged), Some(true));
    writer.set_engaged(false);
    assert_eq!(reader.snapshot().map(|p| p.engaged), Some(false));
    writer.set_position(Vec3::Z);
    assert_eq!(reader.snapshot().map(|p| p.position), Some(Vec3::Z));
}

#[test]
fn pointer_clear_forgets_position_and_button() {
    let pointer = SharedPointer::new();
    pointer.set_position(Vec3::X);
    pointer.set_engaged(true);
    pointer.clear();
    assert_eq!(pointer.snapshot(), None);
    pointer.set_position(Vec3::X);
    assert_eq!(pointer.snapshot().map(|p| p.engaged), Some(false));
}

#[test]
fn track_kind_accepts_known_extensions_case_insensitively() {
    assert_eq!(TrackKind::from_file_name("song.mp3"), Some(TrackKind::Mp3));
    assert_eq!(TrackKind::from_file_name("SONG.MP3"), Some(TrackKind::Mp3));
    assert_eq!(TrackKind::from_file_name("tune.mid"), Some(TrackKind::Midi));
    assert_eq!(TrackKind::from_file_name("tune.MIDI"), Some(TrackKind::Midi));
    assert_eq!(
        TrackKind::from_file_name("my.band.live.Mp3"),
        Some(TrackKind::Mp3)
    );
}

#[test]
fn track_kind_rejects_everything_else() {
    for name in ["song.wav", "song.mp3.txt", "mp3", "song.", "", "midi", "a.mid.bak"] {
        assert_eq!(TrackKind::from_file_name(name), None, "{name:?}");
    }
}

#[test]
fn only_mp3_is_decodable() {
    assert!(TrackKind::Mp3.is_decodable());
    assert!(!TrackKind::Midi.is_decodable());
}

#[test]
fn midi_tracks_are_reported_as_loaded_not_playing() {
    assert_eq!(TrackKind::Mp3.status_label(), "Playing");
    assert_eq!(TrackKind::Midi.status_label(), "Loaded");
}

#[test]
fn pointer_to_model_undoes_the_render_rotation() {
    let p = PointerState {
        position: Vec3::new(0.3, -0.2, 1.5),
        engaged: true,
    };
    let rot = 1.1;
    let model = p.to_model(rot);
    assert!(model.engaged);
    let back = Quat::from_rotation_y(rot) * model.position;
    assert!((back - p.position).length() < 1e-5);
    assert!((model.position.length() - p.position.length()).abs() < 1e-5);
    assert_eq!(p.to_model(0.0), p);
}

#[test]
fn center_pixel_looks_down_negative_z() {
    let (ro, rd) = screen_to_world_ray(800.0, 600.0, 400.0, 300.0, 6.0);
    assert!((ro - Vec3::new(0.0, 0.0, 6.0)).length() < 1e-6);
    assert!((rd - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-4);
    assert!((rd.length() - 1.0).abs() < 1e-5);
}

#[test]
fn pointer_world_lies_on_the_ray_at_the_given_distance() {
    let center = pointer_world(800.0, 600.0, 400.0, 300.0, 6.0, 4.4);
    assert!((center - Vec3::new(0.0, 0.0, 1.6)).length() < 1e-3);

    let corner = pointer_world(800.0, 600.0, 10.0, 10.0, 6.0, 4.4);
    assert!(((corner - Vec3::new(0.0, 0.0, 6.0)).length() - 4.4).abs() < 1e-3);
    assert!(corner.x < 0.0, "left pixel should land left of center");
    assert!(corner.y > 0.0, "top pixel should land above center");
}

#[test]
fn degenerate_canvas_still_gives_a_finite_ray() {
    let (_, rd) = screen_to_world_ray(0.0, 0.0, 0.0, 0.0, 6.0);
    assert!(rd.is_finite());
}
