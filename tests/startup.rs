use glint::{Event, GlContext, Hint, HintValue, Key, WindowBuilder};

// These exercise the native library end to end and need libglfw plus a
// display server; run them with `cargo test -- --ignored`.

#[test]
#[ignore = "requires the native GLFW library"]
fn reset_then_version_query_round_trips() {
    assert!(glint::init());

    glint::reset_window_hints().unwrap();

    let version = glint::version().unwrap();
    assert!(version.major >= 3);
    assert!(version.minor >= 0);
    assert!(version.patch >= 0);
    assert_eq!(glint::version().unwrap(), version);

    glint::terminate();
}

#[test]
#[ignore = "requires the native GLFW library and a display"]
fn open_and_close_a_window() {
    assert!(glint::init());

    glint::set_hint(Hint::Visible, HintValue::Bool(false)).unwrap();
    glint::set_hint(Hint::ContextVersionMajor, HintValue::Uint(Some(2))).unwrap();
    glint::set_hint(Hint::ContextVersionMinor, HintValue::Uint(Some(1))).unwrap();

    let mut window = WindowBuilder::new(|event, mut window| {
        if let Event::Key { key: Key::Escape, .. } = event {
            window.set_should_close(true);
        }
    })
    .with_title("glint test - startup")
    .with_size((256, 256))
    .build()
    .unwrap();

    window.make_current(true);

    for _ in 0..10 {
        if window.should_close() {
            break;
        }

        window.swap_buffers();
        glint::poll_events();
    }

    window.set_should_close(true);
    assert!(window.should_close());

    drop(window);
    glint::terminate();
}
