//! One triangle, one color, the whole pipeline once.

use cgmath::{ortho, Matrix4, SquareMatrix};

use glutin::surface::GlSurface;

use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::ControlFlow;

use colormatch_common::shaders::{FLAT_FRAG, FLAT_VERT};
use colormatch_demos::DemoWindow;

use gl_wrapper::geometry::{GeometryBuilder, VertexAttribute};
use gl_wrapper::program::ProgramBuilder;
use gl_wrapper::renderer::GlRenderer;

fn main() {
    let demo = DemoWindow::new("hello triangle", 800, 600);

    #[rustfmt::skip]
    let triangle = GeometryBuilder::new(&[
        -0.6, -0.5,
        0.0, 0.5,
        0.6, -0.5,
    ])
    .with_attribute(VertexAttribute::Vec2)
    .build()
    .unwrap();

    let program = ProgramBuilder::new(FLAT_VERT, FLAT_FRAG).build().unwrap();

    let u_projection = program.uniform("projection").unwrap();
    let u_model = program.uniform("model").unwrap();
    let u_color = program.uniform("flat_color").unwrap();

    let mut renderer = GlRenderer::new();
    renderer.resize(800, 600);

    let projection: [[f32; 4]; 4] = ortho(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0).into();
    let model: [[f32; 4]; 4] = Matrix4::identity().into();

    renderer.set_mat4(&program, &u_projection, &projection);
    renderer.set_mat4(&program, &u_model, &model);
    renderer.set_vec4(&program, &u_color, [0.1, 0.7, 0.9, 1.0]);

    demo.event_loop
        .run(move |event, _window_target, control_flow| {
            *control_flow = ControlFlow::Wait;
            match event {
                Event::RedrawEventsCleared => {
                    demo.window.request_redraw();
                    demo.surface.swap_buffers(&demo.gl_context).unwrap();
                }
                Event::RedrawRequested(_) => {
                    renderer.clear_color(0.0, 0.0, 0.0);
                    renderer.draw(&triangle, &program);
                }
                Event::WindowEvent { event, .. } => match event {
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
