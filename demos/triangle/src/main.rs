use glint::{Action, Event, GlContext, Hint, HintValue, Key, Profile, WindowBuilder};
use glow::HasContext;
use log::{error, info};
use std::cell::Cell;
use std::ffi::CString;
use std::io::Write;
use std::process::ExitCode;
use std::rc::Rc;

const WIN_WIDTH: u32 = 800;
const WIN_HEIGHT: u32 = 600;

const VERTEX_SHADER: &str = r"
    #version 330 core
    layout (location = 0) in vec3 aPos;

    void main() {
        gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.f);
    }
";

const FRAGMENT_SHADER: &str = r"
    #version 330 core
    out vec4 FragColor;

    void main() {
        FragColor = vec4(0.77f, 0.26f, 0.96f, 1.f);
    }
";

unsafe fn compile_shader(gl: &glow::Context, stage: u32, source: &str) -> glow::NativeShader {
    unsafe {
        let shader = gl.create_shader(stage).unwrap();
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if gl.get_shader_compile_status(shader) {
            info!("shader {shader:?} successfully compiled");
        } else {
            error!("shader compile error: {}", gl.get_shader_info_log(shader));
        }

        shader
    }
}

unsafe fn link_program(
    gl: &glow::Context,
    vertex: glow::NativeShader,
    fragment: glow::NativeShader,
) -> glow::NativeProgram {
    unsafe {
        let program = gl.create_program().unwrap();
        gl.attach_shader(program, vertex);
        gl.delete_shader(vertex);
        gl.attach_shader(program, fragment);
        gl.delete_shader(fragment);
        gl.link_program(program);

        if gl.get_program_link_status(program) {
            info!("shader program {program:?} successfully linked");
        } else {
            error!("program link error: {}", gl.get_program_info_log(program));
        }

        program
    }
}

fn main() -> ExitCode {
    env_logger::init();

    if !glint::init() {
        return ExitCode::FAILURE;
    }

    for (hint, value) in [
        (Hint::ContextVersionMajor, HintValue::Uint(Some(3))),
        (Hint::ContextVersionMinor, HintValue::Uint(Some(3))),
        (Hint::OpenglProfile, HintValue::Profile(Some(Profile::Core))),
    ] {
        if let Err(err) = glint::set_hint(hint, value) {
            error!("{err}");
        }
    }

    let resized = Rc::new(Cell::new(None));
    let handler = {
        let resized = Rc::clone(&resized);
        move |event, mut window: glint::WindowRef| match event {
            Event::FramebufferSize { width, height } => resized.set(Some((width, height))),

            Event::Key { key, action, .. } if action != Action::Release => match key {
                Key::Escape => window.set_should_close(true),
                Key::Space => print!(" "),
                Key::Enter => println!(),
                key if key >= Key::A && key <= Key::Z => {
                    print!("{}", (b'a' + (key.code() - Key::A.code()) as u8) as char);
                    let _ = std::io::stdout().flush();
                }
                _ => {}
            },

            _ => {}
        }
    };

    let window = match WindowBuilder::new(handler)
        .with_title("cool thingy")
        .with_size((WIN_WIDTH, WIN_HEIGHT))
        .build()
    {
        Ok(window) => window,
        Err(err) => {
            error!("failed to create a window: {err}");
            glint::terminate();
            return ExitCode::FAILURE;
        }
    };

    window.make_current(true);
    info!("focus on show: {}", window.attrib(Hint::FocusOnShow));

    let gl = unsafe {
        glow::Context::from_loader_function(|name| {
            let name = CString::new(name).unwrap();
            window.get_proc_address(&name)
        })
    };

    let (vao, program) = unsafe {
        gl.viewport(0, 0, WIN_WIDTH as i32, WIN_HEIGHT as i32);

        let vertices: [f32; 12] = [
            0.5, 0.5, 0.0, //
            0.5, -0.5, 0.0, //
            -0.5, -0.5, 0.0, //
            -0.5, 0.5, 0.0,
        ];
        let indices: [u32; 6] = [
            0, 1, 3, //
            1, 2, 3,
        ];

        let vao = gl.create_vertex_array().unwrap();
        gl.bind_vertex_array(Some(vao));

        let ebo = gl.create_buffer().unwrap();
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
        gl.buffer_data_u8_slice(
            glow::ELEMENT_ARRAY_BUFFER,
            bytemuck::cast_slice(&indices),
            glow::STATIC_DRAW,
        );

        let vbo = gl.create_buffer().unwrap();
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
        gl.buffer_data_u8_slice(
            glow::ARRAY_BUFFER,
            bytemuck::cast_slice(&vertices),
            glow::STATIC_DRAW,
        );

        let vertex = compile_shader(&gl, glow::VERTEX_SHADER, VERTEX_SHADER);
        let fragment = compile_shader(&gl, glow::FRAGMENT_SHADER, FRAGMENT_SHADER);
        let program = link_program(&gl, vertex, fragment);

        gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, 3 * size_of::<f32>() as i32, 0);
        gl.enable_vertex_attrib_array(0);

        (vao, program)
    };

    while !window.should_close() {
        if let Some((width, height)) = resized.take() {
            unsafe { gl.viewport(0, 0, width, height) };
        }

        unsafe {
            gl.clear_color(0.35, 0.04, 0.35, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT);

            gl.use_program(Some(program));
            gl.bind_vertex_array(Some(vao));
            gl.draw_elements(glow::TRIANGLES, 6, glow::UNSIGNED_INT, 0);
            gl.bind_vertex_array(None);
        }

        window.swap_buffers();
        glint::poll_events();
    }

    glint::terminate();
    ExitCode::SUCCESS
}
