//! The typed hint table: a closed set of logical options, each accepting
//! exactly one shape of value, translated on demand into the native
//! integer-keyed hint calls.

use crate::{Error, ffi};
use std::ffi::c_int;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Hint {
    // init hints, applied before the library initializes
    JoystickHatButtons,
    CocoaChdirResources,
    CocoaMenubar,
    WaylandLibdecor,

    // window behavior
    Resizable,
    Visible,
    Decorated,
    Focused,
    AutoIconify,
    Floating,
    Maximized,
    CenterCursor,
    TransparentFramebuffer,
    FocusOnShow,
    ScaleToMonitor,
    CocoaRetinaFramebuffer,
    CocoaFrameName,
    CocoaGraphicsSwitching,
    X11ClassName,
    X11InstanceName,

    // framebuffer format
    RedBits,
    GreenBits,
    BlueBits,
    AlphaBits,
    DepthBits,
    StencilBits,
    AccumRedBits,
    AccumGreenBits,
    AccumBlueBits,
    AccumAlphaBits,
    AuxBuffers,
    Samples,
    Stereo,
    SrgbCapable,
    DoubleBuffer,

    // monitor
    RefreshRate,

    // context creation
    ClientApi,
    ContextCreationApi,
    ContextVersionMajor,
    ContextVersionMinor,
    OpenglForwardCompat,
    ContextDebug,
    OpenglProfile,
    ContextRobustness,
    ContextReleaseBehavior,
    ContextNoError,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ClientApi {
    NoApi,
    OpenGl,
    OpenGlEs,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ContextCreationApi {
    Native,
    Egl,
    OsMesa,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Robustness {
    None,
    NoResetNotification,
    LoseContextOnReset,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ReleaseBehavior {
    None,
    Flush,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Profile {
    Compat,
    Core,
}

/// One variant per shape of value a hint can accept. For the `Uint`,
/// `ReleaseBehavior` and `Profile` arms, `None` means "let the library
/// choose" rather than signaling an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HintValue<'a> {
    Bool(bool),
    Uint(Option<u32>),
    Str(&'a str),
    ClientApi(ClientApi),
    ContextCreationApi(ContextCreationApi),
    Robustness(Robustness),
    ReleaseBehavior(Option<ReleaseBehavior>),
    Profile(Option<Profile>),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Bool,
    Uint,
    Str,
    ClientApi,
    ContextCreationApi,
    Robustness,
    ReleaseBehavior,
    Profile,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Bool => "boolean",
            ValueKind::Uint => "auto-or-uint",
            ValueKind::Str => "string",
            ValueKind::ClientApi => "client API",
            ValueKind::ContextCreationApi => "context creation API",
            ValueKind::Robustness => "robustness",
            ValueKind::ReleaseBehavior => "auto-or-release-behavior",
            ValueKind::Profile => "auto-or-profile",
        })
    }
}

const BOOL_HINTS: &[Hint] = &[
    Hint::JoystickHatButtons,
    Hint::CocoaChdirResources,
    Hint::CocoaMenubar,
    Hint::WaylandLibdecor,
    Hint::Resizable,
    Hint::Visible,
    Hint::Decorated,
    Hint::Focused,
    Hint::AutoIconify,
    Hint::Floating,
    Hint::Maximized,
    Hint::CenterCursor,
    Hint::TransparentFramebuffer,
    Hint::FocusOnShow,
    Hint::ScaleToMonitor,
    Hint::CocoaRetinaFramebuffer,
    Hint::CocoaGraphicsSwitching,
    Hint::Stereo,
    Hint::SrgbCapable,
    Hint::DoubleBuffer,
    Hint::OpenglForwardCompat,
    Hint::ContextDebug,
    Hint::ContextNoError,
];

const AUTO_UINT_HINTS: &[Hint] = &[
    Hint::RedBits,
    Hint::GreenBits,
    Hint::BlueBits,
    Hint::AlphaBits,
    Hint::DepthBits,
    Hint::StencilBits,
    Hint::AccumRedBits,
    Hint::AccumGreenBits,
    Hint::AccumBlueBits,
    Hint::AccumAlphaBits,
    Hint::AuxBuffers,
    Hint::Samples,
    Hint::RefreshRate,
    Hint::ContextVersionMajor,
    Hint::ContextVersionMinor,
];

const STRING_HINTS: &[Hint] = &[Hint::CocoaFrameName, Hint::X11ClassName, Hint::X11InstanceName];

const INIT_HINTS: &[Hint] = &[
    Hint::JoystickHatButtons,
    Hint::CocoaChdirResources,
    Hint::CocoaMenubar,
    Hint::WaylandLibdecor,
];

impl Hint {
    pub const ALL: [Hint; 46] = [
        Hint::JoystickHatButtons,
        Hint::CocoaChdirResources,
        Hint::CocoaMenubar,
        Hint::WaylandLibdecor,
        Hint::Resizable,
        Hint::Visible,
        Hint::Decorated,
        Hint::Focused,
        Hint::AutoIconify,
        Hint::Floating,
        Hint::Maximized,
        Hint::CenterCursor,
        Hint::TransparentFramebuffer,
        Hint::FocusOnShow,
        Hint::ScaleToMonitor,
        Hint::CocoaRetinaFramebuffer,
        Hint::CocoaFrameName,
        Hint::CocoaGraphicsSwitching,
        Hint::X11ClassName,
        Hint::X11InstanceName,
        Hint::RedBits,
        Hint::GreenBits,
        Hint::BlueBits,
        Hint::AlphaBits,
        Hint::DepthBits,
        Hint::StencilBits,
        Hint::AccumRedBits,
        Hint::AccumGreenBits,
        Hint::AccumBlueBits,
        Hint::AccumAlphaBits,
        Hint::AuxBuffers,
        Hint::Samples,
        Hint::Stereo,
        Hint::SrgbCapable,
        Hint::DoubleBuffer,
        Hint::RefreshRate,
        Hint::ClientApi,
        Hint::ContextCreationApi,
        Hint::ContextVersionMajor,
        Hint::ContextVersionMinor,
        Hint::OpenglForwardCompat,
        Hint::ContextDebug,
        Hint::OpenglProfile,
        Hint::ContextRobustness,
        Hint::ContextReleaseBehavior,
        Hint::ContextNoError,
    ];

    /// Resolves the shape of value this hint accepts. A hint reachable by no
    /// membership table is a defect in the tables, reported as
    /// [`Error::UnhandledEnum`].
    pub fn value_kind(self) -> Result<ValueKind, Error> {
        if BOOL_HINTS.contains(&self) {
            Ok(ValueKind::Bool)
        } else if AUTO_UINT_HINTS.contains(&self) {
            Ok(ValueKind::Uint)
        } else if STRING_HINTS.contains(&self) {
            Ok(ValueKind::Str)
        } else {
            match self {
                Hint::ClientApi => Ok(ValueKind::ClientApi),
                Hint::ContextCreationApi => Ok(ValueKind::ContextCreationApi),
                Hint::ContextRobustness => Ok(ValueKind::Robustness),
                Hint::ContextReleaseBehavior => Ok(ValueKind::ReleaseBehavior),
                Hint::OpenglProfile => Ok(ValueKind::Profile),
                _ => Err(Error::UnhandledEnum("Hint::value_kind")),
            }
        }
    }

    pub fn native_code(self) -> c_int {
        match self {
            Hint::JoystickHatButtons => ffi::GLFW_JOYSTICK_HAT_BUTTONS,
            Hint::CocoaChdirResources => ffi::GLFW_COCOA_CHDIR_RESOURCES,
            Hint::CocoaMenubar => ffi::GLFW_COCOA_MENUBAR,
            Hint::WaylandLibdecor => ffi::GLFW_WAYLAND_LIBDECOR,

            Hint::Resizable => ffi::GLFW_RESIZABLE,
            Hint::Visible => ffi::GLFW_VISIBLE,
            Hint::Decorated => ffi::GLFW_DECORATED,
            Hint::Focused => ffi::GLFW_FOCUSED,
            Hint::AutoIconify => ffi::GLFW_AUTO_ICONIFY,
            Hint::Floating => ffi::GLFW_FLOATING,
            Hint::Maximized => ffi::GLFW_MAXIMIZED,
            Hint::CenterCursor => ffi::GLFW_CENTER_CURSOR,
            Hint::TransparentFramebuffer => ffi::GLFW_TRANSPARENT_FRAMEBUFFER,
            Hint::FocusOnShow => ffi::GLFW_FOCUS_ON_SHOW,
            Hint::ScaleToMonitor => ffi::GLFW_SCALE_TO_MONITOR,
            Hint::CocoaRetinaFramebuffer => ffi::GLFW_COCOA_RETINA_FRAMEBUFFER,
            Hint::CocoaFrameName => ffi::GLFW_COCOA_FRAME_NAME,
            Hint::CocoaGraphicsSwitching => ffi::GLFW_COCOA_GRAPHICS_SWITCHING,
            Hint::X11ClassName => ffi::GLFW_X11_CLASS_NAME,
            Hint::X11InstanceName => ffi::GLFW_X11_INSTANCE_NAME,

            Hint::RedBits => ffi::GLFW_RED_BITS,
            Hint::GreenBits => ffi::GLFW_GREEN_BITS,
            Hint::BlueBits => ffi::GLFW_BLUE_BITS,
            Hint::AlphaBits => ffi::GLFW_ALPHA_BITS,
            Hint::DepthBits => ffi::GLFW_DEPTH_BITS,
            Hint::StencilBits => ffi::GLFW_STENCIL_BITS,
            Hint::AccumRedBits => ffi::GLFW_ACCUM_RED_BITS,
            Hint::AccumGreenBits => ffi::GLFW_ACCUM_GREEN_BITS,
            Hint::AccumBlueBits => ffi::GLFW_ACCUM_BLUE_BITS,
            Hint::AccumAlphaBits => ffi::GLFW_ACCUM_ALPHA_BITS,
            Hint::AuxBuffers => ffi::GLFW_AUX_BUFFERS,
            Hint::Samples => ffi::GLFW_SAMPLES,
            Hint::Stereo => ffi::GLFW_STEREO,
            Hint::SrgbCapable => ffi::GLFW_SRGB_CAPABLE,
            Hint::DoubleBuffer => ffi::GLFW_DOUBLEBUFFER,

            Hint::RefreshRate => ffi::GLFW_REFRESH_RATE,

            Hint::ClientApi => ffi::GLFW_CLIENT_API,
            Hint::ContextCreationApi => ffi::GLFW_CONTEXT_CREATION_API,
            Hint::ContextVersionMajor => ffi::GLFW_CONTEXT_VERSION_MAJOR,
            Hint::ContextVersionMinor => ffi::GLFW_CONTEXT_VERSION_MINOR,
            Hint::OpenglForwardCompat => ffi::GLFW_OPENGL_FORWARD_COMPAT,
            Hint::ContextDebug => ffi::GLFW_CONTEXT_DEBUG,
            Hint::OpenglProfile => ffi::GLFW_OPENGL_PROFILE,
            Hint::ContextRobustness => ffi::GLFW_CONTEXT_ROBUSTNESS,
            Hint::ContextReleaseBehavior => ffi::GLFW_CONTEXT_RELEASE_BEHAVIOR,
            Hint::ContextNoError => ffi::GLFW_CONTEXT_NO_ERROR,
        }
    }

    fn is_init(self) -> bool {
        INIT_HINTS.contains(&self)
    }
}

impl ClientApi {
    pub fn native_code(self) -> c_int {
        match self {
            ClientApi::NoApi => ffi::GLFW_NO_API,
            ClientApi::OpenGl => ffi::GLFW_OPENGL_API,
            ClientApi::OpenGlEs => ffi::GLFW_OPENGL_ES_API,
        }
    }
}

impl ContextCreationApi {
    pub fn native_code(self) -> c_int {
        match self {
            ContextCreationApi::Native => ffi::GLFW_NATIVE_CONTEXT_API,
            ContextCreationApi::Egl => ffi::GLFW_EGL_CONTEXT_API,
            ContextCreationApi::OsMesa => ffi::GLFW_OSMESA_CONTEXT_API,
        }
    }
}

impl Robustness {
    pub fn native_code(self) -> c_int {
        match self {
            Robustness::None => ffi::GLFW_NO_ROBUSTNESS,
            Robustness::NoResetNotification => ffi::GLFW_NO_RESET_NOTIFICATION,
            Robustness::LoseContextOnReset => ffi::GLFW_LOSE_CONTEXT_ON_RESET,
        }
    }
}

impl ReleaseBehavior {
    pub fn native_code(self) -> c_int {
        match self {
            ReleaseBehavior::None => ffi::GLFW_RELEASE_BEHAVIOR_NONE,
            ReleaseBehavior::Flush => ffi::GLFW_RELEASE_BEHAVIOR_FLUSH,
        }
    }
}

impl Profile {
    pub fn native_code(self) -> c_int {
        match self {
            Profile::Compat => ffi::GLFW_OPENGL_COMPAT_PROFILE,
            Profile::Core => ffi::GLFW_OPENGL_CORE_PROFILE,
        }
    }
}

impl HintValue<'_> {
    pub fn kind(&self) -> ValueKind {
        match self {
            HintValue::Bool(_) => ValueKind::Bool,
            HintValue::Uint(_) => ValueKind::Uint,
            HintValue::Str(_) => ValueKind::Str,
            HintValue::ClientApi(_) => ValueKind::ClientApi,
            HintValue::ContextCreationApi(_) => ValueKind::ContextCreationApi,
            HintValue::Robustness(_) => ValueKind::Robustness,
            HintValue::ReleaseBehavior(_) => ValueKind::ReleaseBehavior,
            HintValue::Profile(_) => ValueKind::Profile,
        }
    }
}

/// The concrete native call a `(hint, value)` pair resolves to, before it is
/// forwarded anywhere.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HintCall<'a> {
    Init { code: c_int, value: c_int },
    Window { code: c_int, value: c_int },
    WindowString { code: c_int, value: &'a str },
}

/// Pure half of [`crate::set_hint`]: checks the value's shape against the
/// hint's declared kind and computes the native call without issuing it.
pub fn resolve<'a>(hint: Hint, value: HintValue<'a>) -> Result<HintCall<'a>, Error> {
    let expected = hint.value_kind()?;
    let actual = value.kind();
    if expected != actual {
        return Err(Error::TypeMismatch {
            hint,
            expected,
            actual,
        });
    }

    let code = hint.native_code();

    if hint.is_init() {
        // Every init hint is boolean-shaped, but the libdecor preference is
        // a tri-state enum on the native side.
        let raw = match value {
            HintValue::Bool(flag) if hint == Hint::WaylandLibdecor => {
                if flag {
                    ffi::GLFW_WAYLAND_PREFER_LIBDECOR
                } else {
                    ffi::GLFW_WAYLAND_DISABLE_LIBDECOR
                }
            }
            HintValue::Bool(true) => ffi::GLFW_TRUE,
            HintValue::Bool(false) => ffi::GLFW_FALSE,
            _ => return Err(Error::UnhandledEnum("resolve (init hint branch)")),
        };

        return Ok(HintCall::Init { code, value: raw });
    }

    let raw = match value {
        HintValue::Bool(true) => ffi::GLFW_TRUE,
        HintValue::Bool(false) => ffi::GLFW_FALSE,
        HintValue::Uint(Some(v)) => v as c_int,
        HintValue::Uint(None) => ffi::GLFW_DONT_CARE,
        HintValue::Str(s) => return Ok(HintCall::WindowString { code, value: s }),
        HintValue::ClientApi(v) => v.native_code(),
        HintValue::ContextCreationApi(v) => v.native_code(),
        HintValue::Robustness(v) => v.native_code(),
        HintValue::ReleaseBehavior(Some(v)) => v.native_code(),
        // Release behavior and profile each have a dedicated "any" code
        // distinct from the generic don't-care sentinel.
        HintValue::ReleaseBehavior(None) => ffi::GLFW_ANY_RELEASE_BEHAVIOR,
        HintValue::Profile(Some(v)) => v.native_code(),
        HintValue::Profile(None) => ffi::GLFW_OPENGL_ANY_PROFILE,
    };

    Ok(HintCall::Window { code, value: raw })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_tables_are_disjoint_and_cover_every_hint() {
        let enum_hints = [
            Hint::ClientApi,
            Hint::ContextCreationApi,
            Hint::ContextRobustness,
            Hint::ContextReleaseBehavior,
            Hint::OpenglProfile,
        ];

        for hint in Hint::ALL {
            let memberships = [
                BOOL_HINTS.contains(&hint),
                AUTO_UINT_HINTS.contains(&hint),
                STRING_HINTS.contains(&hint),
                enum_hints.contains(&hint),
            ];
            assert_eq!(
                memberships.iter().filter(|&&m| m).count(),
                1,
                "{hint:?} must belong to exactly one category"
            );
        }

        assert_eq!(
            BOOL_HINTS.len() + AUTO_UINT_HINTS.len() + STRING_HINTS.len() + enum_hints.len(),
            Hint::ALL.len()
        );
    }

    #[test]
    fn init_hints_are_a_subset_of_the_boolean_table() {
        for hint in INIT_HINTS {
            assert!(BOOL_HINTS.contains(hint), "{hint:?}");
        }
    }
}
