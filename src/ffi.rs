#![allow(non_snake_case)]

use crate::Error;
use std::ffi::{CString, c_char, c_int, c_void};
use std::mem;

pub enum GLFWwindow {}
pub enum GLFWmonitor {}

pub type GLFWglproc = Option<unsafe extern "C" fn()>;
pub type GLFWframebuffersizefun = Option<unsafe extern "C" fn(*mut GLFWwindow, c_int, c_int)>;
pub type GLFWkeyfun = Option<unsafe extern "C" fn(*mut GLFWwindow, c_int, c_int, c_int, c_int)>;

pub const GLFW_TRUE: c_int = 1;
pub const GLFW_FALSE: c_int = 0;
pub const GLFW_DONT_CARE: c_int = -1;

// init hints
pub const GLFW_JOYSTICK_HAT_BUTTONS: c_int = 0x00050001;
pub const GLFW_COCOA_CHDIR_RESOURCES: c_int = 0x00051001;
pub const GLFW_COCOA_MENUBAR: c_int = 0x00051002;
pub const GLFW_WAYLAND_LIBDECOR: c_int = 0x00053001;
pub const GLFW_WAYLAND_PREFER_LIBDECOR: c_int = 0x00038001;
pub const GLFW_WAYLAND_DISABLE_LIBDECOR: c_int = 0x00038002;

// window hints
pub const GLFW_FOCUSED: c_int = 0x00020001;
pub const GLFW_RESIZABLE: c_int = 0x00020003;
pub const GLFW_VISIBLE: c_int = 0x00020004;
pub const GLFW_DECORATED: c_int = 0x00020005;
pub const GLFW_AUTO_ICONIFY: c_int = 0x00020006;
pub const GLFW_FLOATING: c_int = 0x00020007;
pub const GLFW_MAXIMIZED: c_int = 0x00020008;
pub const GLFW_CENTER_CURSOR: c_int = 0x00020009;
pub const GLFW_TRANSPARENT_FRAMEBUFFER: c_int = 0x0002000A;
pub const GLFW_FOCUS_ON_SHOW: c_int = 0x0002000C;
pub const GLFW_SCALE_TO_MONITOR: c_int = 0x0002200C;
pub const GLFW_COCOA_RETINA_FRAMEBUFFER: c_int = 0x00023001;
pub const GLFW_COCOA_FRAME_NAME: c_int = 0x00023002;
pub const GLFW_COCOA_GRAPHICS_SWITCHING: c_int = 0x00023003;
pub const GLFW_X11_CLASS_NAME: c_int = 0x00024001;
pub const GLFW_X11_INSTANCE_NAME: c_int = 0x00024002;

// framebuffer hints
pub const GLFW_RED_BITS: c_int = 0x00021001;
pub const GLFW_GREEN_BITS: c_int = 0x00021002;
pub const GLFW_BLUE_BITS: c_int = 0x00021003;
pub const GLFW_ALPHA_BITS: c_int = 0x00021004;
pub const GLFW_DEPTH_BITS: c_int = 0x00021005;
pub const GLFW_STENCIL_BITS: c_int = 0x00021006;
pub const GLFW_ACCUM_RED_BITS: c_int = 0x00021007;
pub const GLFW_ACCUM_GREEN_BITS: c_int = 0x00021008;
pub const GLFW_ACCUM_BLUE_BITS: c_int = 0x00021009;
pub const GLFW_ACCUM_ALPHA_BITS: c_int = 0x0002100A;
pub const GLFW_AUX_BUFFERS: c_int = 0x0002100B;
pub const GLFW_STEREO: c_int = 0x0002100C;
pub const GLFW_SAMPLES: c_int = 0x0002100D;
pub const GLFW_SRGB_CAPABLE: c_int = 0x0002100E;
pub const GLFW_REFRESH_RATE: c_int = 0x0002100F;
pub const GLFW_DOUBLEBUFFER: c_int = 0x00021010;

// context hints
pub const GLFW_CLIENT_API: c_int = 0x00022001;
pub const GLFW_CONTEXT_VERSION_MAJOR: c_int = 0x00022002;
pub const GLFW_CONTEXT_VERSION_MINOR: c_int = 0x00022003;
pub const GLFW_CONTEXT_ROBUSTNESS: c_int = 0x00022005;
pub const GLFW_OPENGL_FORWARD_COMPAT: c_int = 0x00022006;
pub const GLFW_CONTEXT_DEBUG: c_int = 0x00022007;
pub const GLFW_OPENGL_PROFILE: c_int = 0x00022008;
pub const GLFW_CONTEXT_RELEASE_BEHAVIOR: c_int = 0x00022009;
pub const GLFW_CONTEXT_NO_ERROR: c_int = 0x0002200A;
pub const GLFW_CONTEXT_CREATION_API: c_int = 0x0002200B;

// hint values
pub const GLFW_NO_API: c_int = 0;
pub const GLFW_OPENGL_API: c_int = 0x00030001;
pub const GLFW_OPENGL_ES_API: c_int = 0x00030002;
pub const GLFW_NATIVE_CONTEXT_API: c_int = 0x00036001;
pub const GLFW_EGL_CONTEXT_API: c_int = 0x00036002;
pub const GLFW_OSMESA_CONTEXT_API: c_int = 0x00036003;
pub const GLFW_NO_ROBUSTNESS: c_int = 0;
pub const GLFW_NO_RESET_NOTIFICATION: c_int = 0x00031001;
pub const GLFW_LOSE_CONTEXT_ON_RESET: c_int = 0x00031002;
pub const GLFW_ANY_RELEASE_BEHAVIOR: c_int = 0;
pub const GLFW_RELEASE_BEHAVIOR_FLUSH: c_int = 0x00035001;
pub const GLFW_RELEASE_BEHAVIOR_NONE: c_int = 0x00035002;
pub const GLFW_OPENGL_ANY_PROFILE: c_int = 0;
pub const GLFW_OPENGL_CORE_PROFILE: c_int = 0x00032001;
pub const GLFW_OPENGL_COMPAT_PROFILE: c_int = 0x00032002;

// key actions
pub const GLFW_RELEASE: c_int = 0;
pub const GLFW_PRESS: c_int = 1;
pub const GLFW_REPEAT: c_int = 2;

/// Truncates at the first interior NUL; the native side could not see past
/// it anyway.
pub fn to_cstring(value: &str) -> CString {
    let value = value.split('\0').next().unwrap_or("");
    CString::new(value).unwrap_or_default()
}

macro_rules! glfw_fns {
    ($(fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;)*) => {
        pub struct Glfw {
            $(pub $name: unsafe extern "C" fn($($ty),*) $(-> $ret)?,)*
        }

        impl Glfw {
            pub fn open() -> Result<Glfw, Error> {
                let library = Library::open()?;

                Ok(Glfw {
                    $($name: unsafe {
                        mem::transmute::<*mut c_void, unsafe extern "C" fn($($ty),*) $(-> $ret)?>(
                            library.symbol(concat!(stringify!($name), "\0"))?,
                        )
                    },)*
                })
            }
        }
    };
}

glfw_fns! {
    fn glfwInit() -> c_int;
    fn glfwTerminate();
    fn glfwGetVersion(major: *mut c_int, minor: *mut c_int, patch: *mut c_int);
    fn glfwInitHint(hint: c_int, value: c_int);
    fn glfwDefaultWindowHints();
    fn glfwWindowHint(hint: c_int, value: c_int);
    fn glfwWindowHintString(hint: c_int, value: *const c_char);
    fn glfwCreateWindow(
        width: c_int,
        height: c_int,
        title: *const c_char,
        monitor: *mut GLFWmonitor,
        share: *mut GLFWwindow,
    ) -> *mut GLFWwindow;
    fn glfwDestroyWindow(window: *mut GLFWwindow);
    fn glfwWindowShouldClose(window: *mut GLFWwindow) -> c_int;
    fn glfwSetWindowShouldClose(window: *mut GLFWwindow, value: c_int);
    fn glfwGetWindowAttrib(window: *mut GLFWwindow, attrib: c_int) -> c_int;
    fn glfwSetWindowUserPointer(window: *mut GLFWwindow, pointer: *mut c_void);
    fn glfwGetWindowUserPointer(window: *mut GLFWwindow) -> *mut c_void;
    fn glfwSetFramebufferSizeCallback(
        window: *mut GLFWwindow,
        callback: GLFWframebuffersizefun,
    ) -> GLFWframebuffersizefun;
    fn glfwSetKeyCallback(window: *mut GLFWwindow, callback: GLFWkeyfun) -> GLFWkeyfun;
    fn glfwPollEvents();
    fn glfwMakeContextCurrent(window: *mut GLFWwindow);
    fn glfwGetProcAddress(name: *const c_char) -> GLFWglproc;
    fn glfwSwapBuffers(window: *mut GLFWwindow);
    fn glfwSwapInterval(interval: c_int);
}

// The handle is deliberately never closed: the table above borrows its
// symbols for the rest of the process.
struct Library(*mut c_void);

#[cfg(unix)]
impl Library {
    fn open() -> Result<Library, Error> {
        const NAMES: &[&std::ffi::CStr] = &[
            c"libglfw.so.3",
            c"libglfw.so",
            c"libglfw.3.dylib",
            c"libglfw.dylib",
        ];

        for name in NAMES {
            let handle = unsafe { libc::dlopen(name.as_ptr(), libc::RTLD_NOW | libc::RTLD_LOCAL) };
            if !handle.is_null() {
                return Ok(Library(handle));
            }
        }

        Err(Error::Platform("could not load the GLFW shared library".to_owned()))
    }

    fn symbol(&self, name: &'static str) -> Result<*mut c_void, Error> {
        let ptr = unsafe { libc::dlsym(self.0, name.as_ptr() as *const c_char) };
        if ptr.is_null() {
            return Err(Error::Platform(format!(
                "missing GLFW symbol {}",
                name.trim_end_matches('\0')
            )));
        }

        Ok(ptr)
    }
}

#[cfg(windows)]
impl Library {
    fn open() -> Result<Library, Error> {
        use windows_sys::Win32::System::LibraryLoader::LoadLibraryA;

        let handle = unsafe { LoadLibraryA(c"glfw3.dll".as_ptr() as *const _) };
        if handle.is_null() {
            return Err(Error::Platform("could not load glfw3.dll".to_owned()));
        }

        Ok(Library(handle))
    }

    fn symbol(&self, name: &'static str) -> Result<*mut c_void, Error> {
        use windows_sys::Win32::System::LibraryLoader::GetProcAddress;

        unsafe { GetProcAddress(self.0, name.as_ptr() as *const _) }
            .map(|ptr| ptr as *mut c_void)
            .ok_or_else(|| {
                Error::Platform(format!("missing GLFW symbol {}", name.trim_end_matches('\0')))
            })
    }
}
