//! Left click drops a triangle of a random color under the cursor.

use cgmath::{ortho, Matrix4, Vector2, Vector3};

use glutin::surface::GlSurface;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, Event, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::ControlFlow;

use colormatch_common::shaders::{FLAT_FRAG, FLAT_VERT};
use colormatch_demos::DemoWindow;

use gl_wrapper::geometry::{GeometryBuilder, VertexAttribute};
use gl_wrapper::program::ProgramBuilder;
use gl_wrapper::renderer::GlRenderer;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

struct Spawned {
    position: Vector2<f32>,
    color: Vector3<f32>,
}

/// Window pixels to normalized device coordinates.
fn screen_to_ndc(pos: PhysicalPosition<f64>) -> Vector2<f32> {
    Vector2::new(
        (2.0 * pos.x as f32) / WIDTH as f32 - 1.0,
        1.0 - (2.0 * pos.y as f32) / HEIGHT as f32,
    )
}

fn main() {
    let demo = DemoWindow::new("spawn triangles", WIDTH, HEIGHT);

    // one shared triangle, translated per spawn
    #[rustfmt::skip]
    let stamp = GeometryBuilder::new(&[
        -0.1, -0.1,
        0.1, -0.1,
        0.0, 0.1,
    ])
    .with_attribute(VertexAttribute::Vec2)
    .build()
    .unwrap();

    let program = ProgramBuilder::new(FLAT_VERT, FLAT_FRAG).build().unwrap();

    let u_projection = program.uniform("projection").unwrap();
    let u_model = program.uniform("model").unwrap();
    let u_color = program.uniform("flat_color").unwrap();

    let mut renderer = GlRenderer::new();
    renderer.resize(WIDTH, HEIGHT);

    let projection: [[f32; 4]; 4] = ortho(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0).into();
    renderer.set_mat4(&program, &u_projection, &projection);

    let mut rng = Xoshiro256StarStar::from_entropy();
    let mut spawned: Vec<Spawned> = Vec::new();
    let mut last_pos = PhysicalPosition::new(0.0, 0.0);

    demo.event_loop
        .run(move |event, _window_target, control_flow| {
            *control_flow = ControlFlow::Wait;
            match event {
                Event::RedrawEventsCleared => {
                    demo.window.request_redraw();
                    demo.surface.swap_buffers(&demo.gl_context).unwrap();
                }
                Event::RedrawRequested(_) => {
                    renderer.clear_color(0.1, 0.1, 0.15);

                    for tri in &spawned {
                        let model: [[f32; 4]; 4] =
                            Matrix4::from_translation(tri.position.extend(0.0)).into();

                        renderer.set_mat4(&program, &u_model, &model);
                        renderer.set_vec4(
                            &program,
                            &u_color,
                            [tri.color.x, tri.color.y, tri.color.z, 1.0],
                        );
                        renderer.draw(&stamp, &program);
                    }
                }
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CursorMoved { position, .. } => {
                        last_pos = position;
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        if button == MouseButton::Left && state == ElementState::Pressed {
                            spawned.push(Spawned {
                                position: screen_to_ndc(last_pos),
                                color: Vector3::new(
                                    rng.gen_range(0.0..=1.0),
                                    rng.gen_range(0.0..=1.0),
                                    rng.gen_range(0.0..=1.0),
                                ),
                            });
                        }
                    }
                    WindowEvent::KeyboardInput { input, .. } => {
                        if input.virtual_keycode == Some(VirtualKeyCode::Escape)
                            && input.state == ElementState::Pressed
                        {
                            control_flow.set_exit();
                        }
                    }
                    WindowEvent::CloseRequested => {
                        control_flow.set_exit();
                    }
                    _ => (),
                },
                _ => (),
            }
        })
}
