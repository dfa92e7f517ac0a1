mod error;
mod ffi;
mod hint;
mod opengl;
mod window;

pub use error::Error;
pub use hint::{
    ClientApi, ContextCreationApi, Hint, HintCall, HintValue, Profile, ReleaseBehavior, Robustness,
    ValueKind, resolve,
};
pub use opengl::{GlConfig, GlContext, GlFormat, GlVersion};
pub use window::{Action, Event, EventHandler, Key, Modifiers, Window, WindowBuilder, WindowRef, poll_events};

use std::sync::OnceLock;

static GLFW: OnceLock<Result<ffi::Glfw, Error>> = OnceLock::new();

// The native library is bound on first use and stays resident; a failed
// bind is cached and reported on every call that needs it.
pub(crate) fn glfw() -> Result<&'static ffi::Glfw, Error> {
    GLFW.get_or_init(ffi::Glfw::open)
        .as_ref()
        .map_err(|err| err.clone())
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Version {
    pub major: i32,
    pub minor: i32,
    pub patch: i32,
}

/// Initializes the native library, reporting success as a boolean. Failures
/// are logged rather than returned; nothing else in the crate is usable
/// until this has returned `true`.
pub fn init() -> bool {
    let lib = match glfw() {
        Ok(lib) => lib,
        Err(err) => {
            log::error!("failed to bind the GLFW library: {err}");
            return false;
        }
    };

    if unsafe { (lib.glfwInit)() } != ffi::GLFW_TRUE {
        log::error!("GLFW initialization failed");
        return false;
    }

    true
}

pub fn terminate() {
    if let Some(Ok(lib)) = GLFW.get() {
        unsafe { (lib.glfwTerminate)() }
    }
}

/// The version of the native library actually bound, which may be newer than
/// the headers this crate was written against.
pub fn version() -> Result<Version, Error> {
    let lib = glfw()?;

    let (mut major, mut minor, mut patch) = (0, 0, 0);
    unsafe { (lib.glfwGetVersion)(&mut major, &mut minor, &mut patch) };

    Ok(Version {
        major,
        minor,
        patch,
    })
}

/// Checks `value` against the kind `hint` declares, then forwards the
/// resolved native call. On a kind mismatch nothing reaches the native
/// library.
pub fn set_hint(hint: Hint, value: HintValue) -> Result<(), Error> {
    let call = hint::resolve(hint, value)?;
    let lib = glfw()?;

    unsafe {
        match call {
            HintCall::Init { code, value } => (lib.glfwInitHint)(code, value),
            HintCall::Window { code, value } => (lib.glfwWindowHint)(code, value),
            HintCall::WindowString { code, value } => {
                let value = ffi::to_cstring(value);
                (lib.glfwWindowHintString)(code, value.as_ptr());
            }
        }
    }

    Ok(())
}

/// Restores every window-creation hint to the library's documented default.
pub fn reset_window_hints() -> Result<(), Error> {
    let lib = glfw()?;
    unsafe { (lib.glfwDefaultWindowHints)() };

    Ok(())
}

/// Sets the swap interval for the current context; `1` waits for vsync.
pub fn swap_interval(interval: i32) -> Result<(), Error> {
    let lib = glfw()?;
    unsafe { (lib.glfwSwapInterval)(interval) };

    Ok(())
}
