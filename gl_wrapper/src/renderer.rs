use crate::geometry::Geometry;
use crate::program::{Program, Uniform};

/// Issues draw calls and uniform uploads, binding programs lazily.
pub struct GlRenderer {
    current_program: u32,
}

impl GlRenderer {
    pub fn new() -> Self {
        Self { current_program: 0 }
    }

    fn bind(&mut self, program: &Program) {
        let p_id = program.get_id();
        if self.current_program != p_id {
            unsafe { gl::UseProgram(p_id) }
            self.current_program = p_id;
        }
    }

    pub fn draw(&mut self, geometry: &Geometry, program: &Program) {
        self.bind(program);

        unsafe {
            gl::BindVertexArray(geometry.vao());
            gl::DrawArrays(gl::TRIANGLES, 0, geometry.vertices() as i32);
        }
    }

    pub fn set_mat4(&mut self, program: &Program, uniform: &Uniform, value: &[[f32; 4]; 4]) {
        self.bind(program);

        unsafe {
            gl::UniformMatrix4fv(uniform.location, 1, gl::FALSE, value.as_ptr() as *const f32);
        }
    }

    pub fn set_vec4(&mut self, program: &Program, uniform: &Uniform, value: [f32; 4]) {
        self.bind(program);

        unsafe {
            gl::Uniform4f(uniform.location, value[0], value[1], value[2], value[3]);
        }
    }

    pub fn resize(&self, width: u32, height: u32) {
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
        }
    }

    pub fn clear_color(&self, r: f32, g: f32, b: f32) {
        unsafe {
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }
}

impl Default for GlRenderer {
    fn default() -> Self {
        Self::new()
    }
}
