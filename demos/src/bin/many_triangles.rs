//! Five triangles from one helper, drawn with a shared model and color.

use cgmath::{ortho, Matrix4, SquareMatrix};

use glutin::surface::GlSurface;

use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::ControlFlow;

use colormatch_common::shaders::{FLAT_FRAG, FLAT_VERT};
use colormatch_demos::DemoWindow;

use gl_wrapper::geometry::{Geometry, GeometryBuilder, VertexAttribute};
use gl_wrapper::program::ProgramBuilder;
use gl_wrapper::renderer::GlRenderer;

fn triangle(p0: (f32, f32), p1: (f32, f32), p2: (f32, f32)) -> Geometry {
    GeometryBuilder::new(&[p0.0, p0.1, p1.0, p1.1, p2.0, p2.1])
        .with_attribute(VertexAttribute::Vec2)
        .build()
        .unwrap()
}

fn main() {
    let demo = DemoWindow::new("five triangles", 800, 600);

    let triangles = vec![
        triangle((-0.9, -0.8), (-0.8, -0.6), (-0.7, -0.8)),
        triangle((-0.4, 0.0), (-0.3, 0.2), (-0.2, 0.0)),
        triangle((0.1, -0.3), (0.2, -0.1), (0.3, -0.3)),
        triangle((0.5, 0.3), (0.6, 0.5), (0.7, 0.3)),
        triangle((-0.1, 0.5), (0.0, 0.7), (0.1, 0.5)),
    ];

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

    demo.event_loop
        .run(move |event, _window_target, control_flow| {
            *control_flow = ControlFlow::Wait;
            match event {
                Event::RedrawEventsCleared => {
                    demo.window.request_redraw();
                    demo.surface.swap_buffers(&demo.gl_context).unwrap();
                }
                Event::RedrawRequested(_) => {
                    renderer.clear_color(0.05, 0.05, 0.1);
                    renderer.set_vec4(&program, &u_color, [0.0, 0.8, 0.6, 1.0]);

                    for triangle in &triangles {
                        renderer.draw(triangle, &program);
                    }
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
