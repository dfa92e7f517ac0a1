use glint::{
    ClientApi, ContextCreationApi, Error, Hint, HintCall, HintValue, Profile, ReleaseBehavior,
    Robustness, ValueKind, resolve,
};
use std::collections::HashSet;

const GLFW_DONT_CARE: i32 = -1;

#[test]
fn every_hint_resolves_a_kind_and_a_code() {
    for hint in Hint::ALL {
        let kind = hint.value_kind().unwrap();
        let code = hint.native_code();

        // pure functions: repeated resolution is stable
        assert_eq!(hint.value_kind().unwrap(), kind);
        assert_eq!(hint.native_code(), code);
    }
}

#[test]
fn hint_codes_do_not_collide() {
    let mut seen = HashSet::new();
    for hint in Hint::ALL {
        assert!(seen.insert(hint.native_code()), "{hint:?}");
    }
}

#[test]
fn enum_value_codes_are_total_and_injective() {
    fn assert_distinct(codes: &[i32]) {
        let set: HashSet<_> = codes.iter().copied().collect();
        assert_eq!(set.len(), codes.len());
    }

    assert_distinct(&[
        ClientApi::NoApi.native_code(),
        ClientApi::OpenGl.native_code(),
        ClientApi::OpenGlEs.native_code(),
    ]);
    assert_distinct(&[
        ContextCreationApi::Native.native_code(),
        ContextCreationApi::Egl.native_code(),
        ContextCreationApi::OsMesa.native_code(),
    ]);
    assert_distinct(&[
        Robustness::None.native_code(),
        Robustness::NoResetNotification.native_code(),
        Robustness::LoseContextOnReset.native_code(),
    ]);
    assert_distinct(&[
        ReleaseBehavior::None.native_code(),
        ReleaseBehavior::Flush.native_code(),
    ]);
    assert_distinct(&[Profile::Compat.native_code(), Profile::Core.native_code()]);
}

#[test]
fn mismatched_value_is_rejected_before_any_dispatch() {
    let err = resolve(Hint::Resizable, HintValue::Uint(Some(1))).unwrap_err();
    assert_eq!(
        err,
        Error::TypeMismatch {
            hint: Hint::Resizable,
            expected: ValueKind::Bool,
            actual: ValueKind::Uint,
        }
    );

    let err = resolve(Hint::OpenglProfile, HintValue::Bool(true)).unwrap_err();
    assert_eq!(
        err,
        Error::TypeMismatch {
            hint: Hint::OpenglProfile,
            expected: ValueKind::Profile,
            actual: ValueKind::Bool,
        }
    );
}

// `set_hint` checks the value before it ever touches the native library, so
// a mismatch reports TypeMismatch even on a machine without GLFW installed.
#[test]
fn set_hint_reports_the_mismatch_not_the_library() {
    let err = glint::set_hint(Hint::Samples, HintValue::Str("4")).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }), "{err:?}");
}

#[test]
fn every_hint_accepts_a_value_of_its_own_kind() {
    for hint in Hint::ALL {
        let value = match hint.value_kind().unwrap() {
            ValueKind::Bool => HintValue::Bool(true),
            ValueKind::Uint => HintValue::Uint(Some(8)),
            ValueKind::Str => HintValue::Str("name"),
            ValueKind::ClientApi => HintValue::ClientApi(ClientApi::OpenGl),
            ValueKind::ContextCreationApi => {
                HintValue::ContextCreationApi(ContextCreationApi::Native)
            }
            ValueKind::Robustness => HintValue::Robustness(Robustness::None),
            ValueKind::ReleaseBehavior => HintValue::ReleaseBehavior(Some(ReleaseBehavior::Flush)),
            ValueKind::Profile => HintValue::Profile(Some(Profile::Core)),
        };

        resolve(hint, value).unwrap();
    }
}

#[test]
fn automatic_uint_forwards_the_generic_dont_care_sentinel() {
    for hint in [Hint::RedBits, Hint::Samples, Hint::RefreshRate] {
        assert_eq!(
            resolve(hint, HintValue::Uint(None)).unwrap(),
            HintCall::Window {
                code: hint.native_code(),
                value: GLFW_DONT_CARE,
            }
        );
    }
}

#[test]
fn release_behavior_and_profile_have_their_own_sentinels() {
    let HintCall::Window { value: any_release, .. } =
        resolve(Hint::ContextReleaseBehavior, HintValue::ReleaseBehavior(None)).unwrap()
    else {
        panic!("expected a window hint call");
    };
    let HintCall::Window { value: any_profile, .. } =
        resolve(Hint::OpenglProfile, HintValue::Profile(None)).unwrap()
    else {
        panic!("expected a window hint call");
    };

    assert_ne!(any_release, GLFW_DONT_CARE);
    assert_ne!(any_profile, GLFW_DONT_CARE);

    // GLFW_ANY_RELEASE_BEHAVIOR and GLFW_OPENGL_ANY_PROFILE
    assert_eq!(any_release, 0);
    assert_eq!(any_profile, 0);
}

#[test]
fn explicit_profile_forwards_the_documented_constant() {
    assert_eq!(
        resolve(Hint::OpenglProfile, HintValue::Profile(Some(Profile::Core))).unwrap(),
        HintCall::Window {
            code: Hint::OpenglProfile.native_code(),
            value: 0x00032001, // GLFW_OPENGL_CORE_PROFILE
        }
    );
}

#[test]
fn libdecor_preference_translates_to_the_tri_state_codes() {
    assert_eq!(
        resolve(Hint::WaylandLibdecor, HintValue::Bool(true)).unwrap(),
        HintCall::Init {
            code: Hint::WaylandLibdecor.native_code(),
            value: 0x00038001, // GLFW_WAYLAND_PREFER_LIBDECOR, not a raw 1
        }
    );
    assert_eq!(
        resolve(Hint::WaylandLibdecor, HintValue::Bool(false)).unwrap(),
        HintCall::Init {
            code: Hint::WaylandLibdecor.native_code(),
            value: 0x00038002, // GLFW_WAYLAND_DISABLE_LIBDECOR
        }
    );
}

#[test]
fn plain_init_hints_forward_raw_booleans() {
    assert_eq!(
        resolve(Hint::CocoaMenubar, HintValue::Bool(true)).unwrap(),
        HintCall::Init {
            code: Hint::CocoaMenubar.native_code(),
            value: 1,
        }
    );
    assert_eq!(
        resolve(Hint::JoystickHatButtons, HintValue::Bool(false)).unwrap(),
        HintCall::Init {
            code: Hint::JoystickHatButtons.native_code(),
            value: 0,
        }
    );
}

#[test]
fn string_hints_go_through_the_string_entry_point() {
    assert_eq!(
        resolve(Hint::X11ClassName, HintValue::Str("demo")).unwrap(),
        HintCall::WindowString {
            code: Hint::X11ClassName.native_code(),
            value: "demo",
        }
    );
}

#[test]
fn window_booleans_forward_true_and_false() {
    assert_eq!(
        resolve(Hint::Resizable, HintValue::Bool(true)).unwrap(),
        HintCall::Window {
            code: Hint::Resizable.native_code(),
            value: 1,
        }
    );
    assert_eq!(
        resolve(Hint::DoubleBuffer, HintValue::Bool(false)).unwrap(),
        HintCall::Window {
            code: Hint::DoubleBuffer.native_code(),
            value: 0,
        }
    );
}

#[test]
fn explicit_uints_forward_unchanged() {
    assert_eq!(
        resolve(Hint::Samples, HintValue::Uint(Some(4))).unwrap(),
        HintCall::Window {
            code: Hint::Samples.native_code(),
            value: 4,
        }
    );
}

#[test]
fn bare_enums_forward_their_resolved_codes() {
    assert_eq!(
        resolve(Hint::ClientApi, HintValue::ClientApi(ClientApi::NoApi)).unwrap(),
        HintCall::Window {
            code: Hint::ClientApi.native_code(),
            value: 0, // GLFW_NO_API
        }
    );
    assert_eq!(
        resolve(
            Hint::ContextRobustness,
            HintValue::Robustness(Robustness::LoseContextOnReset),
        )
        .unwrap(),
        HintCall::Window {
            code: Hint::ContextRobustness.native_code(),
            value: 0x00031002, // GLFW_LOSE_CONTEXT_ON_RESET
        }
    );
}
