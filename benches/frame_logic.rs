use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_roam::core::{build_frame, resolve, Frame, InteriorPos, QuitFlag, Scene, Session};
use tui_roam::term::{encode_ansi_into, encode_diff_into, FrameBuffer, SCREEN_HEIGHT, SCREEN_WIDTH};
use tui_roam::types::{ColorClass, Key, KeyState};

fn bench_build_frame(c: &mut Criterion) {
    let scene = Scene::from_seed(12345);
    let player = InteriorPos::start();

    c.bench_function("build_frame_fresh", |b| {
        b.iter(|| build_frame(black_box(scene.entities()), black_box(player)))
    });

    let mut frame = Frame::new();
    c.bench_function("rebuild_frame_in_place", |b| {
        b.iter(|| frame.rebuild(black_box(scene.entities()), black_box(player)))
    });
}

fn bench_resolve(c: &mut Criterion) {
    let keys = KeyState::default().with(Key::Up).with(Key::Left);
    c.bench_function("resolve_diagonal", |b| {
        b.iter(|| resolve(black_box(InteriorPos::start()), black_box(keys), QuitFlag::default()))
    });
}

fn bench_session_tick(c: &mut Criterion) {
    let mut session = Session::new(Scene::from_seed(12345));
    session.start();
    let keys = KeyState::default().with(Key::Right);

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            session.tick(black_box(keys));
        })
    });
}

fn bench_encode(c: &mut Criterion) {
    let session = Session::new(Scene::from_seed(12345));
    let mut fb = FrameBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    for (row, col, glyph) in session.frame().iter() {
        fb.put(row, col, glyph.as_char(), glyph.color_class());
    }
    let mut moved = fb.clone();
    moved.put(15, 12, ' ', ColorClass::None);
    moved.put(15, 13, '@', ColorClass::Player);

    let mut out = Vec::with_capacity(64 * 1024);
    c.bench_function("encode_ansi_full", |b| {
        b.iter(|| {
            out.clear();
            encode_ansi_into(&mut out, black_box(&fb), true);
        })
    });

    c.bench_function("encode_diff_one_step", |b| {
        b.iter(|| {
            out.clear();
            encode_diff_into(&mut out, black_box(&fb), black_box(&moved), true).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_build_frame,
    bench_resolve,
    bench_session_tick,
    bench_encode
);
criterion_main!(benches);
