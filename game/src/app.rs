use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContextSurfaceAccessor,
    PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, WindowSurface};

use glutin_winit::DisplayBuilder;

use raw_window_handle::HasRawWindowHandle;

use std::ffi::CString;
use std::num::NonZeroU32;

use cgmath::{ortho, Matrix4};

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use thiserror::Error;

use winit::dpi::{PhysicalPosition, PhysicalSize, Size};
use winit::event::{ElementState, Event, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use colormatch::grid::Grid;
use colormatch::round::Round;
use colormatch::GAME_TITLE;

use colormatch_common::settings_loader::{GameSettings, SettingsLoader};
use colormatch_common::shaders::{FLAT_FRAG, FLAT_VERT};

use gl_wrapper::geometry::{GeometryBuilder, VertexAttribute};
use gl_wrapper::program::ProgramBuilder;
use gl_wrapper::renderer::GlRenderer;
use gl_wrapper::UNIT_QUAD;

pub struct App {
    event_loop: EventLoop<()>,
    gl_context: PossiblyCurrentContext,
    gl_window: GlWindow,
    settings: GameSettings,
    rng: Xoshiro256StarStar,
    grid: Grid,
    round: Round,
}

impl App {
    pub fn new(settings: GameSettings) -> Result<Self, AppError> {
        let event_loop = EventLoop::new();

        let (width, height) = settings.window_size();

        let window_builder = WindowBuilder::new()
            .with_inner_size(Size::Physical(PhysicalSize::new(width, height)))
            .with_resizable(false)
            .with_title(GAME_TITLE);
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
        let template = ConfigTemplateBuilder::new();

        let (window, gl_config) = display_builder
            .build(&event_loop, template, |mut configs| configs.next().unwrap())
            .map_err(|e| AppError::WindowCreation(e.to_string()))?;

        let handle = window.as_ref().map(|w| w.raw_window_handle());
        let gl_display = gl_config.display();

        let context_attr = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(handle);

        let gl_window = GlWindow::new(window.unwrap(), &gl_config);

        let gl_context = unsafe {
            gl_display
                .create_context(&gl_config, &context_attr)
                .unwrap()
        }
        .make_current(&gl_window.surface)
        .unwrap();

        gl::load_with(|s| {
            gl_display
                .get_proc_address(CString::new(s).unwrap().as_c_str())
                .cast()
        });

        let mut rng = match settings.seed {
            Some(seed) => Xoshiro256StarStar::seed_from_u64(seed),
            None => Xoshiro256StarStar::from_entropy(),
        };

        let grid = Grid::generate(
            settings.rows,
            settings.cols,
            settings.cell_width,
            settings.cell_height,
            &mut rng,
        );

        let app = Self {
            event_loop,
            gl_context,
            gl_window,
            settings,
            rng,
            grid,
            round: Round::new(),
        };

        Ok(app)
    }

    pub fn run(mut self) -> ! {
        let quad = GeometryBuilder::new(&UNIT_QUAD)
            .with_attribute(VertexAttribute::Vec2)
            .build()
            .unwrap();

        let program = ProgramBuilder::new(FLAT_VERT, FLAT_FRAG).build().unwrap();

        let u_projection = program.uniform("projection").unwrap();
        let u_model = program.uniform("model").unwrap();
        let u_color = program.uniform("flat_color").unwrap();

        let mut gl_renderer = GlRenderer::new();

        let size = self.gl_window.window.inner_size();
        gl_renderer.resize(size.width, size.height);

        // Cursor coordinates have the origin at the top left, so the
        // projection flips y to match.
        let projection: [[f32; 4]; 4] =
            ortho(0.0, size.width as f32, size.height as f32, 0.0, -1.0, 1.0).into();
        gl_renderer.set_mat4(&program, &u_projection, &projection);

        self.gl_window.window.set_title(&self.round.title());

        let mut last_pos = PhysicalPosition::new(0.0, 0.0);
        let mut selected: Option<usize> = None;

        self.event_loop
            .run(move |event, _window_target, control_flow| {
                *control_flow = ControlFlow::Wait;
                match event {
                    Event::RedrawEventsCleared => {
                        if let Some(index) = selected.take() {
                            if !self.round.is_over() {
                                let removed =
                                    self.grid.eliminate_similar(index, self.settings.tolerance);

                                if removed > 0 {
                                    let penalty = self.round.register(removed);

                                    println!(
                                        "attempt {}: removed {} -> +{} - {} = score {}",
                                        self.round.attempts(),
                                        removed,
                                        removed,
                                        penalty,
                                        self.round.score()
                                    );
                                }

                                if !self.grid.any_active() {
                                    self.round.finish();
                                    println!("game over! final score: {}", self.round.score());
                                }

                                self.gl_window.window.set_title(&self.round.title());
                            }
                        }

                        self.gl_window.window.request_redraw();
                        self.gl_window
                            .surface
                            .swap_buffers(&self.gl_context)
                            .unwrap();
                    }
                    Event::WindowEvent { event, .. } => match event {
                        WindowEvent::Resized(size) => {
                            if size.width != 0 && size.height != 0 {
                                self.gl_window.surface.resize(
                                    &self.gl_context,
                                    NonZeroU32::new(size.width).unwrap(),
                                    NonZeroU32::new(size.height).unwrap(),
                                );
                                gl_renderer.resize(size.width, size.height);

                                let projection: [[f32; 4]; 4] = ortho(
                                    0.0,
                                    size.width as f32,
                                    size.height as f32,
                                    0.0,
                                    -1.0,
                                    1.0,
                                )
                                .into();
                                gl_renderer.set_mat4(&program, &u_projection, &projection);
                            }
                        }
                        WindowEvent::CursorMoved { position, .. } => {
                            last_pos = position;
                        }
                        WindowEvent::MouseInput { state, button, .. } => {
                            if button == MouseButton::Left
                                && state == ElementState::Pressed
                                && !self.round.is_over()
                            {
                                selected = self.grid.pick(last_pos.x, last_pos.y);
                            }
                        }
                        WindowEvent::KeyboardInput { input, .. } => {
                            if input.state == ElementState::Pressed {
                                match input.virtual_keycode {
                                    Some(VirtualKeyCode::R) => {
                                        self.grid = Grid::generate(
                                            self.settings.rows,
                                            self.settings.cols,
                                            self.settings.cell_width,
                                            self.settings.cell_height,
                                            &mut self.rng,
                                        );
                                        self.round = Round::new();
                                        selected = None;
                                        self.gl_window.window.set_title(&self.round.title());
                                        println!("new board");
                                    }
                                    Some(VirtualKeyCode::Escape) => {
                                        control_flow.set_exit();
                                    }
                                    _ => {}
                                }
                            }
                        }
                        WindowEvent::DroppedFile(path) => {
                            match SettingsLoader::load_from_path(&path) {
                                Ok(settings) => {
                                    eprintln!("Read settings from {:?}", path);

                                    self.settings = settings;

                                    let (width, height) = self.settings.window_size();
                                    self.gl_window
                                        .window
                                        .set_inner_size(PhysicalSize::new(width, height));

                                    if let Some(seed) = self.settings.seed {
                                        self.rng = Xoshiro256StarStar::seed_from_u64(seed);
                                    }

                                    self.grid = Grid::generate(
                                        self.settings.rows,
                                        self.settings.cols,
                                        self.settings.cell_width,
                                        self.settings.cell_height,
                                        &mut self.rng,
                                    );
                                    self.round = Round::new();
                                    selected = None;
                                    self.gl_window.window.set_title(&self.round.title());
                                }
                                Err(e) => {
                                    eprintln!("Could not read settings: {e}");
                                }
                            }
                        }
                        WindowEvent::CloseRequested => {
                            control_flow.set_exit();
                        }
                        _ => (),
                    },
                    Event::RedrawRequested(_) => {
                        gl_renderer.clear_color(0.0, 0.0, 0.0);

                        for cell in self.grid.cells() {
                            if cell.eliminated {
                                continue;
                            }

                            let model: [[f32; 4]; 4] = (Matrix4::from_translation(
                                cell.center.extend(0.0),
                            )
                                * Matrix4::from_nonuniform_scale(
                                    cell.dimensions.x,
                                    cell.dimensions.y,
                                    1.0,
                                ))
                            .into();

                            gl_renderer.set_mat4(&program, &u_model, &model);
                            gl_renderer.set_vec4(
                                &program,
                                &u_color,
                                [cell.color.x, cell.color.y, cell.color.z, 1.0],
                            );
                            gl_renderer.draw(&quad, &program);
                        }
                    }
                    _ => (),
                }
            })
    }
}

pub struct GlWindow {
    // XXX the surface must be dropped before the window.
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

impl GlWindow {
    pub fn new(window: Window, config: &Config) -> Self {
        let (width, height): (u32, u32) = window.inner_size().into();
        let raw_window_handle = window.raw_window_handle();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(width).unwrap(),
            NonZeroU32::new(height).unwrap(),
        );

        let surface = unsafe {
            config
                .display()
                .create_window_surface(config, &attrs)
                .unwrap()
        };

        Self { window, surface }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not create window: {0}")]
    WindowCreation(String),
}
