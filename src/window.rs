use crate::hint::Hint;
use crate::{Error, ffi, glfw};
use bitflags::bitflags;
use std::ffi::{CStr, c_int, c_void};
use std::fmt::Debug;
use std::ptr::{null, null_mut};

/// Key identifiers, carrying the native key codes as discriminants.
#[repr(i32)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Key {
    Space = 32,
    Apostrophe = 39,
    Comma = 44,
    Minus = 45,
    Period = 46,
    Slash = 47,
    D0 = 48,
    D1 = 49,
    D2 = 50,
    D3 = 51,
    D4 = 52,
    D5 = 53,
    D6 = 54,
    D7 = 55,
    D8 = 56,
    D9 = 57,
    Semicolon = 59,
    Equal = 61,
    A = 65,
    B = 66,
    C = 67,
    D = 68,
    E = 69,
    F = 70,
    G = 71,
    H = 72,
    I = 73,
    J = 74,
    K = 75,
    L = 76,
    M = 77,
    N = 78,
    O = 79,
    P = 80,
    Q = 81,
    R = 82,
    S = 83,
    T = 84,
    U = 85,
    V = 86,
    W = 87,
    X = 88,
    Y = 89,
    Z = 90,
    BracketLeft = 91,
    Backslash = 92,
    BracketRight = 93,
    Backquote = 96,
    Escape = 256,
    Enter = 257,
    Tab = 258,
    Backspace = 259,
    Insert = 260,
    Delete = 261,
    ArrowRight = 262,
    ArrowLeft = 263,
    ArrowDown = 264,
    ArrowUp = 265,
    PageUp = 266,
    PageDown = 267,
    Home = 268,
    End = 269,
    CapsLock = 280,
    ScrollLock = 281,
    NumLock = 282,
    PrintScreen = 283,
    Pause = 284,
    F1 = 290,
    F2 = 291,
    F3 = 292,
    F4 = 293,
    F5 = 294,
    F6 = 295,
    F7 = 296,
    F8 = 297,
    F9 = 298,
    F10 = 299,
    F11 = 300,
    F12 = 301,
    ShiftLeft = 340,
    ControlLeft = 341,
    AltLeft = 342,
    MetaLeft = 343,
    ShiftRight = 344,
    ControlRight = 345,
    AltRight = 346,
    MetaRight = 347,
    ContextMenu = 348,
}

impl Key {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Key> {
        Some(match code {
            32 => Key::Space,
            39 => Key::Apostrophe,
            44 => Key::Comma,
            45 => Key::Minus,
            46 => Key::Period,
            47 => Key::Slash,
            48 => Key::D0,
            49 => Key::D1,
            50 => Key::D2,
            51 => Key::D3,
            52 => Key::D4,
            53 => Key::D5,
            54 => Key::D6,
            55 => Key::D7,
            56 => Key::D8,
            57 => Key::D9,
            59 => Key::Semicolon,
            61 => Key::Equal,
            65 => Key::A,
            66 => Key::B,
            67 => Key::C,
            68 => Key::D,
            69 => Key::E,
            70 => Key::F,
            71 => Key::G,
            72 => Key::H,
            73 => Key::I,
            74 => Key::J,
            75 => Key::K,
            76 => Key::L,
            77 => Key::M,
            78 => Key::N,
            79 => Key::O,
            80 => Key::P,
            81 => Key::Q,
            82 => Key::R,
            83 => Key::S,
            84 => Key::T,
            85 => Key::U,
            86 => Key::V,
            87 => Key::W,
            88 => Key::X,
            89 => Key::Y,
            90 => Key::Z,
            91 => Key::BracketLeft,
            92 => Key::Backslash,
            93 => Key::BracketRight,
            96 => Key::Backquote,
            256 => Key::Escape,
            257 => Key::Enter,
            258 => Key::Tab,
            259 => Key::Backspace,
            260 => Key::Insert,
            261 => Key::Delete,
            262 => Key::ArrowRight,
            263 => Key::ArrowLeft,
            264 => Key::ArrowDown,
            265 => Key::ArrowUp,
            266 => Key::PageUp,
            267 => Key::PageDown,
            268 => Key::Home,
            269 => Key::End,
            280 => Key::CapsLock,
            281 => Key::ScrollLock,
            282 => Key::NumLock,
            283 => Key::PrintScreen,
            284 => Key::Pause,
            290 => Key::F1,
            291 => Key::F2,
            292 => Key::F3,
            293 => Key::F4,
            294 => Key::F5,
            295 => Key::F6,
            296 => Key::F7,
            297 => Key::F8,
            298 => Key::F9,
            299 => Key::F10,
            300 => Key::F11,
            301 => Key::F12,
            340 => Key::ShiftLeft,
            341 => Key::ControlLeft,
            342 => Key::AltLeft,
            343 => Key::MetaLeft,
            344 => Key::ShiftRight,
            345 => Key::ControlRight,
            346 => Key::AltRight,
            347 => Key::MetaRight,
            348 => Key::ContextMenu,
            _ => return None,
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    Release,
    Press,
    Repeat,
}

impl Action {
    fn from_code(code: c_int) -> Option<Action> {
        match code {
            ffi::GLFW_RELEASE => Some(Action::Release),
            ffi::GLFW_PRESS => Some(Action::Press),
            ffi::GLFW_REPEAT => Some(Action::Repeat),
            _ => None,
        }
    }
}

bitflags! {
    /// Modifier state delivered with key events, mirroring the native bits.
    #[derive(Clone, Copy, Eq, PartialEq, Debug)]
    pub struct Modifiers: u32 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        const META = 1 << 3;

        const CAPS_LOCK = 1 << 4;
        const NUM_LOCK = 1 << 5;
    }
}

#[derive(Debug)]
pub enum Event {
    FramebufferSize {
        width: i32,
        height: i32,
    },
    Key {
        key: Key,
        scancode: i32,
        action: Action,
        mods: Modifiers,
    },
}

pub type EventHandler = Box<dyn FnMut(Event, WindowRef)>;

struct WindowState {
    handler: EventHandler,
}

pub struct WindowBuilder {
    title: String,
    size: (u32, u32),
    handler: EventHandler,
}

impl WindowBuilder {
    pub fn new<F: FnMut(Event, WindowRef) + 'static>(handler: F) -> Self {
        Self {
            title: String::new(),
            size: (640, 480),
            handler: Box::new(handler),
        }
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self
        }
    }

    pub fn with_size(self, size: (u32, u32)) -> Self {
        Self { size, ..self }
    }

    /// Creates the window and its context from the hints currently in
    /// effect. A null native handle means the requested configuration is
    /// unsatisfiable.
    pub fn build(self) -> Result<Window, Error> {
        let lib = glfw()?;

        let title = ffi::to_cstring(&self.title);
        let raw = unsafe {
            (lib.glfwCreateWindow)(
                self.size.0 as c_int,
                self.size.1 as c_int,
                title.as_ptr(),
                null_mut(),
                null_mut(),
            )
        };

        if raw.is_null() {
            return Err(Error::Platform(
                "window or context creation failed".to_owned(),
            ));
        }

        let mut state = Box::new(WindowState {
            handler: self.handler,
        });

        unsafe {
            (lib.glfwSetWindowUserPointer)(raw, &mut *state as *mut WindowState as *mut c_void);
            (lib.glfwSetFramebufferSizeCallback)(raw, Some(framebuffer_size_trampoline));
            (lib.glfwSetKeyCallback)(raw, Some(key_trampoline));
        }

        Ok(Window {
            raw,
            lib,
            _state: state,
        })
    }
}

pub struct Window {
    raw: *mut ffi::GLFWwindow,
    lib: &'static ffi::Glfw,

    // Target of the native user pointer; must outlive the native window.
    _state: Box<WindowState>,
}

impl Window {
    pub fn should_close(&self) -> bool {
        unsafe { (self.lib.glfwWindowShouldClose)(self.raw) != ffi::GLFW_FALSE }
    }

    pub fn set_should_close(&mut self, close: bool) {
        unsafe {
            (self.lib.glfwSetWindowShouldClose)(
                self.raw,
                if close { ffi::GLFW_TRUE } else { ffi::GLFW_FALSE },
            )
        }
    }

    /// Reads back a window attribute by its hint identity.
    pub fn attrib(&self, hint: Hint) -> i32 {
        unsafe { (self.lib.glfwGetWindowAttrib)(self.raw, hint.native_code()) }
    }
}

impl crate::GlContext for Window {
    fn make_current(&self, current: bool) {
        unsafe { (self.lib.glfwMakeContextCurrent)(if current { self.raw } else { null_mut() }) }
    }

    fn swap_buffers(&self) {
        unsafe { (self.lib.glfwSwapBuffers)(self.raw) }
    }

    fn get_proc_address(&self, name: &CStr) -> *const c_void {
        unsafe {
            match (self.lib.glfwGetProcAddress)(name.as_ptr()) {
                Some(ptr) => ptr as *const c_void,
                None => null(),
            }
        }
    }
}

impl Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window").field("raw", &self.raw).finish()
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        unsafe {
            (self.lib.glfwSetKeyCallback)(self.raw, None);
            (self.lib.glfwSetFramebufferSizeCallback)(self.raw, None);
            (self.lib.glfwDestroyWindow)(self.raw);
        }
    }
}

/// Handle passed to event handlers; refers to the window that raised the
/// event without aliasing the owning [`Window`].
pub struct WindowRef {
    raw: *mut ffi::GLFWwindow,
    lib: &'static ffi::Glfw,
}

impl WindowRef {
    pub fn should_close(&self) -> bool {
        unsafe { (self.lib.glfwWindowShouldClose)(self.raw) != ffi::GLFW_FALSE }
    }

    pub fn set_should_close(&mut self, close: bool) {
        unsafe {
            (self.lib.glfwSetWindowShouldClose)(
                self.raw,
                if close { ffi::GLFW_TRUE } else { ffi::GLFW_FALSE },
            )
        }
    }
}

/// Processes pending events, dispatching them to the handlers of the windows
/// they belong to.
pub fn poll_events() {
    if let Ok(lib) = glfw() {
        unsafe { (lib.glfwPollEvents)() }
    }
}

unsafe fn dispatch(window: *mut ffi::GLFWwindow, event: Event) {
    let Ok(lib) = glfw() else { return };

    unsafe {
        let state = (lib.glfwGetWindowUserPointer)(window) as *mut WindowState;
        if state.is_null() {
            return;
        }

        ((*state).handler)(event, WindowRef { raw: window, lib });
    }
}

unsafe extern "C" fn framebuffer_size_trampoline(
    window: *mut ffi::GLFWwindow,
    width: c_int,
    height: c_int,
) {
    unsafe { dispatch(window, Event::FramebufferSize { width, height }) }
}

unsafe extern "C" fn key_trampoline(
    window: *mut ffi::GLFWwindow,
    key: c_int,
    scancode: c_int,
    action: c_int,
    mods: c_int,
) {
    let (Some(key), Some(action)) = (Key::from_code(key), Action::from_code(action)) else {
        return;
    };

    unsafe {
        dispatch(
            window,
            Event::Key {
                key,
                scancode,
                action,
                mods: Modifiers::from_bits_truncate(mods as u32),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_codes_round_trip() {
        for key in [
            Key::Space,
            Key::A,
            Key::Z,
            Key::Escape,
            Key::Enter,
            Key::F12,
        ] {
            assert_eq!(Key::from_code(key.code()), Some(key));
        }

        assert_eq!(Key::from_code(-1), None);
        assert_eq!(Key::from_code(1000), None);
    }
}
