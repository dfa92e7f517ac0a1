use crate::hint::{ClientApi, Hint, HintValue, Profile};
use crate::{Error, set_hint};
use std::ffi::{CStr, c_void};
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlVersion {
    Core(u32, u32),
    Compat(u32, u32),
    ES(u32, u32),
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlFormat {
    RGB8,
    RGBA8,

    RGB8_D24,
    RGBA8_D24,

    RGB8_D24_S8,
    RGBA8_D24_S8,
}

impl GlFormat {
    pub fn as_rgbads(self) -> (u8, u8, u8, u8, u8, u8) {
        match self {
            GlFormat::RGB8 => (8, 8, 8, 0, 0, 0),
            GlFormat::RGBA8 => (8, 8, 8, 8, 0, 0),
            GlFormat::RGB8_D24 => (8, 8, 8, 0, 24, 0),
            GlFormat::RGBA8_D24 => (8, 8, 8, 8, 24, 0),
            GlFormat::RGB8_D24_S8 => (8, 8, 8, 0, 24, 8),
            GlFormat::RGBA8_D24_S8 => (8, 8, 8, 8, 24, 8),
        }
    }
}

/// A bundled context/framebuffer configuration that expands into the
/// corresponding typed hint calls.
#[derive(Debug, Clone, Copy)]
pub struct GlConfig {
    pub version: GlVersion,

    pub double_buffer: bool,
    pub debug: bool,
    pub srgb: bool,

    pub format: GlFormat,
    pub msaa_count: u32,
}

impl Default for GlConfig {
    fn default() -> Self {
        Self {
            version: GlVersion::Compat(1, 1),
            double_buffer: true,
            debug: false,
            srgb: false,
            format: GlFormat::RGBA8_D24_S8,
            msaa_count: 0,
        }
    }
}

impl GlConfig {
    /// The hint calls this configuration stands for.
    pub fn hints(&self) -> Vec<(Hint, HintValue<'static>)> {
        let (api, major, minor) = match self.version {
            GlVersion::Core(major, minor) | GlVersion::Compat(major, minor) => {
                (ClientApi::OpenGl, major, minor)
            }
            GlVersion::ES(major, minor) => (ClientApi::OpenGlEs, major, minor),
        };

        // Profiles only exist for desktop GL 3.2 and later.
        let profile = match self.version {
            GlVersion::Core(major, minor) if (major, minor) >= (3, 2) => Some(Profile::Core),
            GlVersion::Compat(major, minor) if (major, minor) >= (3, 2) => Some(Profile::Compat),
            _ => None,
        };

        let (red, green, blue, alpha, depth, stencil) = self.format.as_rgbads();

        vec![
            (Hint::ClientApi, HintValue::ClientApi(api)),
            (Hint::ContextVersionMajor, HintValue::Uint(Some(major))),
            (Hint::ContextVersionMinor, HintValue::Uint(Some(minor))),
            (Hint::OpenglProfile, HintValue::Profile(profile)),
            (Hint::RedBits, HintValue::Uint(Some(red as u32))),
            (Hint::GreenBits, HintValue::Uint(Some(green as u32))),
            (Hint::BlueBits, HintValue::Uint(Some(blue as u32))),
            (Hint::AlphaBits, HintValue::Uint(Some(alpha as u32))),
            (Hint::DepthBits, HintValue::Uint(Some(depth as u32))),
            (Hint::StencilBits, HintValue::Uint(Some(stencil as u32))),
            (Hint::DoubleBuffer, HintValue::Bool(self.double_buffer)),
            (Hint::SrgbCapable, HintValue::Bool(self.srgb)),
            (Hint::ContextDebug, HintValue::Bool(self.debug)),
            (Hint::Samples, HintValue::Uint(Some(self.msaa_count))),
        ]
    }

    /// Applies the configuration to the library's pending window hints.
    pub fn apply(&self) -> Result<(), Error> {
        for (hint, value) in self.hints() {
            set_hint(hint, value)?;
        }

        Ok(())
    }
}

pub trait GlContext: Debug {
    fn make_current(&self, current: bool);
    fn swap_buffers(&self);
    fn get_proc_address(&self, name: &CStr) -> *const c_void;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modern_core_version_selects_the_core_profile() {
        let config = GlConfig {
            version: GlVersion::Core(3, 3),
            ..GlConfig::default()
        };

        let hints = config.hints();
        assert!(hints.contains(&(Hint::OpenglProfile, HintValue::Profile(Some(Profile::Core)))));
        assert!(hints.contains(&(Hint::ContextVersionMajor, HintValue::Uint(Some(3)))));
        assert!(hints.contains(&(Hint::ClientApi, HintValue::ClientApi(ClientApi::OpenGl))));
    }

    #[test]
    fn legacy_version_leaves_the_profile_automatic() {
        let hints = GlConfig::default().hints();
        assert!(hints.contains(&(Hint::OpenglProfile, HintValue::Profile(None))));
    }

    #[test]
    fn format_expands_into_bit_depths() {
        let config = GlConfig {
            format: GlFormat::RGBA8_D24_S8,
            ..GlConfig::default()
        };

        let hints = config.hints();
        assert!(hints.contains(&(Hint::AlphaBits, HintValue::Uint(Some(8)))));
        assert!(hints.contains(&(Hint::DepthBits, HintValue::Uint(Some(24)))));
        assert!(hints.contains(&(Hint::StencilBits, HintValue::Uint(Some(8)))));
    }

    #[test]
    fn es_version_switches_the_client_api() {
        let config = GlConfig {
            version: GlVersion::ES(3, 0),
            ..GlConfig::default()
        };

        let hints = config.hints();
        assert!(hints.contains(&(Hint::ClientApi, HintValue::ClientApi(ClientApi::OpenGlEs))));
        assert!(hints.contains(&(Hint::OpenglProfile, HintValue::Profile(None))));
    }
}
